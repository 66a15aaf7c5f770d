//! UI Components
//!
//! Reusable Leptos components.

mod habit_checkbox;
mod habit_list;
mod date_picker;

pub use habit_checkbox::HabitCheckbox;
pub use habit_list::HabitList;
pub use date_picker::DatePicker;
