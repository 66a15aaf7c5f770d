//! Habit List Component
//!
//! Checklist of the habits scheduled for one day. Reloads whenever `date`
//! changes and reports the completed count upward after each toggle.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::checklist::ChecklistState;
use crate::components::HabitCheckbox;
use crate::context::use_api_config;
use crate::day;
use crate::models::Habit;

/// Day checklist
///
/// # Arguments
/// * `date` - Day to show; only the calendar day matters
/// * `on_completed_change` - Called with the new completed count after a toggle
///   is acknowledged by the server. Not called when a day loads.
#[component]
pub fn HabitList(
    #[prop(into)] date: Signal<NaiveDate>,
    #[prop(into)] on_completed_change: Callback<usize>,
) -> impl IntoView {
    let config = StoredValue::new(use_api_config());
    let state = RwSignal::new(ChecklistState::default());

    let load = move |day: NaiveDate| {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let config = config.get_value();
        tracing::info!(%day, "loading habits");
        spawn_local(async move {
            let result = api::get_day(&config, day).await;
            if let Err(err) = &result {
                tracing::error!(%day, error = %err, "failed to load habits");
            }
            // None: the list was unmounted while the request was in flight
            if let Some(false) = state.try_update(|s| s.finish_load(ticket, result)) {
                tracing::debug!(%day, "discarded superseded habits response");
            }
        });
    };

    // Load on mount and again for every new date
    Effect::new(move |_| load(date.get()));

    let toggle = move |habit_id: String| {
        let locked = day::is_locked_now(date.get_untracked());
        let Some(ticket) = state.with_untracked(|s| s.toggle_ticket(locked)) else {
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            let result = api::toggle_habit(&config, &habit_id).await;
            if let Err(err) = &result {
                tracing::error!(%habit_id, error = %err, "failed to toggle habit");
            }
            let count = state
                .try_update(|s| s.finish_toggle(ticket, &habit_id, result))
                .flatten();
            if let Some(count) = count {
                tracing::debug!(%habit_id, count, "habit toggled");
                on_completed_change.run(count);
            }
        });
    };

    let is_locked = move || day::is_locked_now(date.get());

    view! {
        <div class="habit-list">
            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="habit-list-error" role="alert">
                    <span>{err.user_message()}</span>
                    <button on:click=move |_| load(date.get_untracked())>"Try again"</button>
                </div>
            })}

            <For
                each=move || state.with(|s| s.habits())
                key=|habit| habit.id.clone()
                children=move |habit| {
                    let Habit { id, title, .. } = habit;
                    let checked_id = id.clone();
                    let checked = Signal::derive(move || state.with(|s| s.is_completed(&checked_id)));

                    view! {
                        <HabitCheckbox
                            title=title
                            checked=checked
                            disabled=Signal::derive(is_locked)
                            on_toggle=Callback::new(move |_| toggle(id.clone()))
                        />
                    }
                }
            />
        </div>
    }
}
