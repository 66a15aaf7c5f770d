//! Habit Commands
//!
//! `PATCH /habits/{id}/toggle`

use super::send;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Flip a habit's completion for today on the server. The response body is
/// not consumed.
pub async fn toggle_habit(config: &ApiConfig, habit_id: &str) -> Result<(), ApiError> {
    let url = config.toggle_url(habit_id);
    send("PATCH", &url).await?;
    Ok(())
}
