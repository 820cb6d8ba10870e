//! LurkForWork: a Zellij plugin client for the LurkForWork job board.
//!
//! The plugin lets a user:
//! - Log in or register against a LurkForWork backend
//! - Page through the jobs posted by the users they watch
//! - Like jobs, read likes and comments, and comment
//! - Watch or unwatch users, by profile or by email
//! - Post, update and delete their own jobs and update their profile
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and navigation                    │
//! │  - Feed and profile loaders                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ API Layer     │
//! │ (ui/)         │                     │ (api/)        │
//! │ - Rendering   │                     │ - Requests    │
//! │ - Theming     │                     │ - Responses   │
//! │ - Components  │                     │ - Tags        │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths, image files (infrastructure/)     │
//! │  - Records, session, dates, errors (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below `main.rs` calls the host. HTTP requests leave the library as
//! [`Action::Request`] values and their results come back as
//! [`Event::ApiResponse`], tagged with what asked for them.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/lurkforwork.wasm" {
//!         backend_url "http://localhost:5005"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use lurkforwork::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "ada@example.com".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::NextField)?;
//! for c in "hunter2".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Request(_)]));
//! # Ok::<(), lurkforwork::LurkError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{LurkError, Result};
pub use ui::Theme;

use api::ApiClient;
use std::collections::BTreeMap;

/// Backend used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5005";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the LurkForWork backend, without a trailing slash.
    pub backend_url: String,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home mount.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values fall back to their defaults. A trailing `/` on
    /// `backend_url` is dropped.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use lurkforwork::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), "http://jobs.local:8080/".to_string());
    /// map.insert("theme".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.backend_url, "http://jobs.local:8080");
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = non_blank("backend_url").map_or_else(
            || DEFAULT_BACKEND_URL.to_string(),
            |url| url.trim_end_matches('/').to_string(),
        );

        Self {
            backend_url,
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
        }
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial state: logged out, on the login screen.
///
/// Tracing is set up separately by
/// [`observability::init_tracing`], which the plugin calls first.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(backend_url = %config.backend_url, "initializing lurkforwork plugin");
    let client = ApiClient::new(config.backend_url.clone());
    AppState::new(client, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_unknown_keys_fall_back() {
        let map: BTreeMap<String, String> = [
            ("page_size", "50"),
            ("backend_url", "   "),
            ("theme", "catppuccin-latte"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_zellij(&map);
        let expected = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn initialize_applies_theme_and_backend() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert_eq!(state.client.base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
