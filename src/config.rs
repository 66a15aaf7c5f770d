//! API Configuration
//!
//! Backend location, fixed at build time and shared through Leptos context.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a query value; unreserved ones stay literal
const QUERY_VALUE: &AsciiSet = &PATH_SEGMENT.add(b'&').add(b'+').add(b'=');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `HABITS_API_URL` as it was when the bundle was compiled
    pub fn from_build_env() -> Self {
        match option_env!("HABITS_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn day_url(&self, iso_date: &str) -> String {
        format!(
            "{}/day?date={}",
            self.base_url,
            utf8_percent_encode(iso_date, QUERY_VALUE)
        )
    }

    pub fn toggle_url(&self, habit_id: &str) -> String {
        format!(
            "{}/habits/{}/toggle",
            self.base_url,
            utf8_percent_encode(habit_id, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(ApiConfig::new("http://api.test/ ").base_url, "http://api.test");
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_day_url_encodes_query() {
        let config = ApiConfig::new("http://api.test/");
        assert_eq!(
            config.day_url("2026-10-15T03:00:00.000Z"),
            "http://api.test/day?date=2026-10-15T03:00:00.000Z"
        );
        assert_eq!(
            config.day_url("a+b&c=d"),
            "http://api.test/day?date=a%2Bb%26c%3Dd"
        );
    }

    #[test]
    fn test_toggle_url_escapes_segment() {
        let config = ApiConfig::new("http://api.test");
        assert_eq!(
            config.toggle_url("0b7c-4a1e"),
            "http://api.test/habits/0b7c-4a1e/toggle"
        );
        assert_eq!(
            config.toggle_url("a/b c"),
            "http://api.test/habits/a%2Fb%20c/toggle"
        );
    }
}
