//! Frontend Models
//!
//! Data structures matching the habits backend.

use serde::{Deserialize, Serialize};

/// Habit data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    /// ISO 8601 timestamp, informational only
    pub created_at: String,
}

/// Habits applicable to one day plus the ids completed on it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitsInfo {
    /// Display order as returned by the backend
    pub possible_habits: Vec<Habit>,
    /// Set semantics; kept as a Vec so appends stay at the end
    pub completed_habits: Vec<String>,
}

impl HabitsInfo {
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_habits.iter().any(|completed| completed == id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_habits.len()
    }

    /// Snapshot with `id` flipped: a completed id is removed once, anything
    /// else is appended.
    pub fn toggled(&self, id: &str) -> HabitsInfo {
        let mut completed_habits = self.completed_habits.clone();
        match completed_habits.iter().position(|completed| completed == id) {
            Some(index) => {
                completed_habits.remove(index);
            }
            None => completed_habits.push(id.to_string()),
        }

        HabitsInfo {
            possible_habits: self.possible_habits.clone(),
            completed_habits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            title: format!("Habit {}", id),
            created_at: "2026-01-01T03:00:00.000Z".to_string(),
        }
    }

    fn make_info(possible: &[&str], completed: &[&str]) -> HabitsInfo {
        HabitsInfo {
            possible_habits: possible.iter().map(|id| make_habit(id)).collect(),
            completed_habits: completed.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "possibleHabits": [
                {"id": "h1", "title": "Drink water", "created_at": "2026-01-01T03:00:00.000Z"},
                {"id": "h2", "title": "Read", "created_at": "2026-01-02T03:00:00.000Z"}
            ],
            "completedHabits": ["h1"]
        }"#;

        let info: HabitsInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.possible_habits.len(), 2);
        assert_eq!(info.possible_habits[0].title, "Drink water");
        assert_eq!(info.possible_habits[1].id, "h2");
        assert_eq!(info.completed_habits, vec!["h1".to_string()]);
    }

    #[test]
    fn test_membership() {
        let info = make_info(&["h1", "h2"], &["h1"]);
        assert!(info.is_completed("h1"));
        assert!(!info.is_completed("h2"));
        assert!(!info.is_completed("unknown"));
    }

    #[test]
    fn test_toggle_appends_missing_id() {
        let info = make_info(&["h1", "h2"], &["h1"]);
        let next = info.toggled("h2");
        assert_eq!(next.completed_habits, vec!["h1", "h2"]);
        assert_eq!(next.completed_count(), 2);
        assert_eq!(next.possible_habits, info.possible_habits);
    }

    #[test]
    fn test_toggle_removes_and_keeps_order() {
        let info = make_info(&["h1", "h2", "h3"], &["h3", "h1", "h2"]);
        let next = info.toggled("h1");
        assert_eq!(next.completed_habits, vec!["h3", "h2"]);

        let single = make_info(&["h1", "h2"], &["h1"]).toggled("h1");
        assert!(single.completed_habits.is_empty());
        assert_eq!(single.completed_count(), 0);
    }

    #[test]
    fn test_double_toggle_restores() {
        let info = make_info(&["h1", "h2"], &["h1"]);
        assert_eq!(info.toggled("h2").toggled("h2"), info);
        assert_eq!(info.toggled("h1").toggled("h1").completed_count(), 1);
    }
}
