//! Checklist State
//!
//! State behind `HabitList`: the day snapshot, an error slot, and a
//! generation counter so responses for a superseded date are dropped.

use crate::error::ApiError;
use crate::models::{Habit, HabitsInfo};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Snapshot {
    #[default]
    Unloaded,
    Loaded(HabitsInfo),
}

/// Generation a request was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    pub snapshot: Snapshot,
    pub error: Option<ApiError>,
    generation: u64,
}

impl ChecklistState {
    /// Drop the current snapshot and open a new generation
    pub fn begin_load(&mut self) -> Ticket {
        self.generation += 1;
        self.snapshot = Snapshot::Unloaded;
        self.error = None;
        Ticket(self.generation)
    }

    /// Apply a load result. Returns false when the ticket was superseded.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<HabitsInfo, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(info) => {
                self.snapshot = Snapshot::Loaded(info);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Ticket for a toggle, only while a snapshot is loaded and the day is
    /// not locked. No ticket means no request is sent.
    pub fn toggle_ticket(&self, locked: bool) -> Option<Ticket> {
        match self.snapshot {
            Snapshot::Loaded(_) if !locked => Some(Ticket(self.generation)),
            _ => None,
        }
    }

    /// Apply a finished toggle request. Returns the new completed count when
    /// local state changed, which is when the parent must be told.
    pub fn finish_toggle(
        &mut self,
        ticket: Ticket,
        habit_id: &str,
        result: Result<(), ApiError>,
    ) -> Option<usize> {
        if !self.is_current(ticket) {
            return None;
        }
        if let Err(err) = result {
            self.error = Some(err);
            return None;
        }
        match &mut self.snapshot {
            Snapshot::Loaded(info) => {
                *info = info.toggled(habit_id);
                self.error = None;
                Some(info.completed_count())
            }
            Snapshot::Unloaded => None,
        }
    }

    pub fn is_completed(&self, habit_id: &str) -> bool {
        match &self.snapshot {
            Snapshot::Loaded(info) => info.is_completed(habit_id),
            Snapshot::Unloaded => false,
        }
    }

    /// Habits to render, empty while unloaded
    pub fn habits(&self) -> Vec<Habit> {
        match &self.snapshot {
            Snapshot::Loaded(info) => info.possible_habits.clone(),
            Snapshot::Unloaded => Vec::new(),
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
