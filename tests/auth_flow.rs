mod common;

use common::{requests, respond, send, type_text};
use lurkforwork::api::{HttpMethod, RequestTag};
use lurkforwork::app::{NavTarget, Route};
use lurkforwork::domain::ScreenId;
use lurkforwork::{initialize, Action, Config, Event, InputMode};
use serde_json::json;

#[test]
fn login_posts_credentials_and_opens_dashboard() {
    let mut state = initialize(&Config::default());
    type_text(&mut state, "ada@example.com");
    send(&mut state, Event::NextField);
    type_text(&mut state, "secret");

    let sent = requests(&send(&mut state, Event::Submit));
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tag, RequestTag::Login);
    assert_eq!(sent[0].http.method, HttpMethod::Post);
    assert_eq!(sent[0].http.url, "http://localhost:5005/auth/login");
    assert_eq!(
        sent[0].http.json_body(),
        Some(json!({"email": "ada@example.com", "password": "secret"}))
    );
    assert!(!sent[0].http.headers.contains_key("Authorization"));

    let actions = respond(&mut state, &RequestTag::Login, 200, &json!({"token": "abc", "userId": 7}));

    assert_eq!(state.route, Route::Dashboard);
    assert_eq!(state.session.current_screen, ScreenId::Dashboard);
    assert_eq!(state.session.token(), Some("abc"));
    assert_eq!(state.input_mode(), InputMode::Browse);

    let feed = requests(&actions);
    assert_eq!(feed.len(), 1);
    assert!(matches!(feed[0].tag, RequestTag::Feed { page: 1, .. }));
    assert_eq!(feed[0].http.url, "http://localhost:5005/job/feed?start=0");
    assert_eq!(
        feed[0].http.headers.get("Authorization").map(String::as_str),
        Some("Bearer abc")
    );
    assert!(actions.contains(&Action::SetTitle("LurkForWork - Dashboard".to_string())));
}

#[test]
fn rejected_login_shows_backend_message_and_stays() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Submit);
    let actions = respond(
        &mut state,
        &RequestTag::Login,
        400,
        &json!({"error": "Invalid email or password"}),
    );

    assert!(actions.is_empty());
    assert_eq!(state.route, Route::Login);
    assert_eq!(state.error.message(), Some("Invalid email or password"));
    assert!(!state.session.is_logged_in());
}

#[test]
fn register_password_mismatch_sends_nothing() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Navigate(NavTarget::Register));
    assert_eq!(state.route, Route::Register);

    type_text(&mut state, "bo@example.com");
    send(&mut state, Event::NextField);
    type_text(&mut state, "Bo");
    send(&mut state, Event::NextField);
    type_text(&mut state, "one");
    send(&mut state, Event::NextField);
    type_text(&mut state, "two");

    let actions = send(&mut state, Event::Submit);
    assert!(requests(&actions).is_empty());
    assert_eq!(state.error.message(), Some("Passwords do not match"));
    assert_eq!(state.route, Route::Register);
}

#[test]
fn register_success_signs_in() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Navigate(NavTarget::Register));
    type_text(&mut state, "bo@example.com");
    send(&mut state, Event::NextField);
    type_text(&mut state, "Bo");
    send(&mut state, Event::NextField);
    type_text(&mut state, "pw");
    send(&mut state, Event::NextField);
    type_text(&mut state, "pw");

    let sent = requests(&send(&mut state, Event::Submit));
    assert_eq!(sent[0].tag, RequestTag::Register);
    assert_eq!(
        sent[0].http.json_body(),
        Some(json!({"email": "bo@example.com", "password": "pw", "name": "Bo"}))
    );

    respond(&mut state, &RequestTag::Register, 200, &json!({"token": "t", "userId": 3}));
    assert_eq!(state.route, Route::Dashboard);
    assert!(state.session.is_self(3));
}

#[test]
fn escape_on_login_hides_the_plugin() {
    let mut state = initialize(&Config::default());
    assert_eq!(send(&mut state, Event::Cancel), vec![Action::CloseFocus]);
}
