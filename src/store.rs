//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

/// State owned by the host view around the checklist
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Day shown by the checklist
    pub selected_date: NaiveDate,
    /// Last completed count reported by the checklist
    pub completed_count: usize,
}

impl AppState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            completed_count: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch to another day. The count belongs to the old day, so it resets.
pub fn store_select_date(store: &AppStore, date: NaiveDate) {
    if store.selected_date().get_untracked() == date {
        return;
    }
    store.selected_date().set(date);
    store.completed_count().set(0);
}

pub fn store_set_completed(store: &AppStore, count: usize) {
    store.completed_count().set(count);
}
