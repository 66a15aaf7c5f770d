//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// Backend configuration from context, or the default backend when the
/// component is mounted outside the app root
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}
