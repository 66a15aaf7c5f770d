//! Habit Day App
//!
//! Host view: date picker, completed counter, and the day checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DatePicker, HabitList};
use crate::config::ApiConfig;
use crate::day;
use crate::store::{store_set_completed, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!(base_url = %config.base_url, "habits backend");

    let store = Store::new(AppState::new(day::today()));

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    view! {
        <main class="habit-day">
            <header class="habit-day-header">
                <DatePicker />
                <p class="completed-count">
                    {move || format!("{} completed", store.completed_count().get())}
                </p>
            </header>

            <HabitList
                date=Signal::derive(move || store.selected_date().get())
                on_completed_change=Callback::new(move |count| store_set_completed(&store, count))
            />
        </main>
    }
}
