//! Date Picker Component
//!
//! Native date input bound to the selected day in the app store.

use leptos::prelude::*;

use crate::day::{format_input_date, parse_input_date};
use crate::store::{store_select_date, use_app_store, AppStateStoreFields};

#[component]
pub fn DatePicker() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="date"
            class="date-picker"
            prop:value=move || format_input_date(store.selected_date().get())
            on:change=move |ev| {
                // Cleared or partial input keeps the current day
                if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                    store_select_date(&store, date);
                }
            }
        />
    }
}
