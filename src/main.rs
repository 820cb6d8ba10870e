//! Zellij plugin wrapper and entry point.
//!
//! This module is the only place that talks to the Zellij host. It maps key
//! presses and web request results to library events, and executes the
//! actions the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → browse or form event depending on [`InputMode`]
//! - `WebRequestResult` → `Event::ApiResponse` when its context carries a tag
//!
//! # Keybindings
//!
//! Browse mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `n`/`p`: Next/previous feed page
//! - `l`: Like or unlike; `L`: likes list; `c`: comments list; `C`: comment
//! - `Enter`: Open the poster's or watcher's profile
//! - `w`: Watch (profile) or watch by email (dashboard)
//! - `e`/`d`: Edit/delete own job; `u`: update profile; `a`: new job
//! - `m`: My profile; `b`: dashboard; `r`: reload
//! - `x`: Dismiss error; `Esc`: close popup; `q`: hide plugin
//!
//! Form mode:
//! - Printable keys: Type into the focused field
//! - `Tab`/`Down`, `Up`: Next/previous field
//! - `Enter`: Submit; `Esc`: Cancel
//! - `Ctrl+l`/`Ctrl+r`: Login/register screen

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use lurkforwork::api::{HttpMethod, RequestTag};
use lurkforwork::app::NavTarget;
use lurkforwork::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: lurkforwork::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: lurkforwork::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        lurkforwork::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(backend_url = %config.backend_url, "parsed configuration");
        self.app = lurkforwork::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        self.execute_action(&Action::SetTitle(self.app.route.screen().title()));
        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match RequestTag::from_context(&context) {
                    Some(tag) => Event::ApiResponse { tag, status, body },
                    None => {
                        tracing::debug!(status, "ignoring web response without a request tag");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - backend requests will fail");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for a in &actions {
                    self.execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        lurkforwork::ui::render(&self.app, rows, cols, chrono::Utc::now());
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");
        match self.app.input_mode() {
            InputMode::Browse => Self::map_browse_key(key),
            InputMode::Form => Self::map_form_key(key),
        }
    }

    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrev,
            BareKey::Char('n') => Event::NextPage,
            BareKey::Char('p') => Event::PrevPage,
            BareKey::Char('l') => Event::ToggleLike,
            BareKey::Char('L') => Event::ToggleLikes,
            BareKey::Char('c') => Event::ToggleComments,
            BareKey::Char('C') => Event::ComposeComment,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('w') => Event::Watch,
            BareKey::Char('e') => Event::EditSelectedJob,
            BareKey::Char('d') => Event::DeleteSelectedJob,
            BareKey::Char('u') => Event::EditProfile,
            BareKey::Char('a') => Event::Navigate(NavTarget::NewJob),
            BareKey::Char('m') => Event::Navigate(NavTarget::MyProfile),
            BareKey::Char('b') => Event::Navigate(NavTarget::Dashboard),
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('x') => Event::DismissError,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Cancel,
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('r') => Some(Event::Navigate(NavTarget::Register)),
                BareKey::Char('l') => Some(Event::Navigate(NavTarget::Login)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Cancel,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::Request(request) => {
                let http = &request.http;
                tracing::debug!(tag = ?request.tag, method = ?http.method, url = %http.url, "issuing web request");
                let verb = match http.method {
                    HttpMethod::Get => HttpVerb::Get,
                    HttpMethod::Post => HttpVerb::Post,
                    HttpMethod::Put => HttpVerb::Put,
                    HttpMethod::Delete => HttpVerb::Delete,
                };
                web_request(
                    &http.url,
                    verb,
                    http.headers.clone(),
                    http.body.clone(),
                    request.tag.to_context(),
                );
            }
            Action::SetTitle(title) => {
                tracing::debug!(title = %title, "renaming plugin pane");
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
