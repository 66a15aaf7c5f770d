//! Habit Checkbox Component
//!
//! One row of the day checklist.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Checkbox row showing a habit title.
///
/// The box never flips on its own: `checked` is the only source of truth, so
/// a click that does not lead to a state change leaves it as it was.
#[component]
pub fn HabitCheckbox(
    #[prop(into)] title: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let data_state = move || if checked.get() { "checked" } else { "unchecked" };

    view! {
        <label
            class=move || if disabled.get() { "habit-checkbox disabled" } else { "habit-checkbox" }
            data-state=data_state
        >
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    event_target::<HtmlInputElement>(&ev).set_checked(checked.get_untracked());
                    if !disabled.get_untracked() {
                        on_toggle.run(());
                    }
                }
            />
            <span class="habit-title">{title}</span>
        </label>
    }
}
