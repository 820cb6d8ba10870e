//! Drives the library the way the plugin shim does, with canned responses.

#![allow(dead_code)]

use lurkforwork::api::{ApiRequest, RequestTag, PAGE_SIZE};
use lurkforwork::{handle_event, initialize, Action, AppState, Config, Event};
use serde_json::{json, Value};

pub fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    let (_, actions) = handle_event(state, &event).unwrap();
    actions
}

pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

pub fn requests(actions: &[Action]) -> Vec<ApiRequest> {
    actions.iter().filter_map(Action::as_request).cloned().collect()
}

pub fn respond(state: &mut AppState, tag: &RequestTag, status: u16, body: &Value) -> Vec<Action> {
    send(
        state,
        Event::ApiResponse {
            tag: tag.clone(),
            status,
            body: serde_json::to_vec(body).unwrap(),
        },
    )
}

pub fn job(id: u64, creator_id: u64, liked_by: &[u64]) -> Value {
    json!({
        "id": id,
        "title": format!("Job {id}"),
        "description": "Build things",
        "image": "",
        "start": "2024-04-01T00:00:00.000Z",
        "createdAt": "2024-03-10T10:30:00.000Z",
        "creatorId": creator_id,
        "likes": liked_by.iter().map(|u| json!({"userId": u, "userName": format!("User {u}")})).collect::<Vec<_>>(),
        "comments": [],
    })
}

pub fn user(id: u64, watched_by: &[u64], jobs: &[Value]) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("user{id}@example.com"),
        "jobs": jobs,
        "usersWhoWatchMeUserIds": watched_by,
    })
}

/// A full feed page: job ids counting up from `first_id`, all by `creator_id`.
pub fn full_page(first_id: u64, creator_id: u64) -> Vec<Value> {
    (first_id..first_id + u64::from(PAGE_SIZE))
        .map(|id| job(id, creator_id, &[]))
        .collect()
}

/// Logs in as `user_id` and returns the state plus the first feed request.
pub fn logged_in(user_id: u64) -> (AppState, ApiRequest) {
    let mut state = initialize(&Config::default());
    type_text(&mut state, "me@example.com");
    send(&mut state, Event::NextField);
    type_text(&mut state, "pw");
    let login = requests(&send(&mut state, Event::Submit));
    let actions = respond(
        &mut state,
        &login[0].tag,
        200,
        &json!({"token": "tok", "userId": user_id}),
    );
    let feed = requests(&actions).remove(0);
    (state, feed)
}

/// Answers a feed request and then each creator lookup, in the given order.
pub fn serve_feed(state: &mut AppState, feed: &ApiRequest, jobs: &[Value]) -> Vec<Action> {
    let lookups = requests(&respond(state, &feed.tag, 200, &json!(jobs)));
    let mut last = vec![];
    for lookup in &lookups {
        let RequestTag::Creator { user_id, .. } = lookup.tag else {
            panic!("expected a creator lookup, got {:?}", lookup.tag);
        };
        last = respond(state, &lookup.tag, 200, &user(user_id, &[], &[]));
    }
    last
}
