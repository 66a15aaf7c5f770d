//! Day Snapshot
//!
//! `GET /day?date=<iso>`

use chrono::NaiveDate;

use super::{read_text, send};
use crate::config::ApiConfig;
use crate::day::day_query_value;
use crate::error::ApiError;
use crate::models::HabitsInfo;

pub async fn get_day(config: &ApiConfig, date: NaiveDate) -> Result<HabitsInfo, ApiError> {
    let url = config.day_url(&day_query_value(date));
    let response = send("GET", &url).await?;
    let body = read_text(response).await?;
    parse_day(&body)
}

pub fn parse_day(body: &str) -> Result<HabitsInfo, ApiError> {
    Ok(serde_json::from_str(body)?)
}
