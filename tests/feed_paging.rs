mod common;

use common::{full_page, job, logged_in, requests, respond, send, serve_feed, user};
use lurkforwork::api::RequestTag;
use lurkforwork::app::{NavTarget, Route, NO_JOBS_PLACEHOLDER};
use lurkforwork::ui::BodyView;
use lurkforwork::Event;
use serde_json::json;

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc)
}

#[test]
fn empty_first_page_shows_placeholder() {
    let (mut state, feed) = logged_in(7);
    respond(&mut state, &feed.tag, 200, &json!([]));

    assert!(state.feed.show_placeholder);
    assert!(state.feed.entries.is_empty());
    assert!(!state.feed.has_next);
    assert_eq!(state.session.current_job_page, 1);
    assert!(requests(&send(&mut state, Event::NextPage)).is_empty());
    assert_eq!(state.session.current_job_page, 1);

    let vm = state.compute_viewmodel(24, now());
    assert_eq!(vm.header.title.trim(), "LurkForWork - Dashboard (page 1)");
    match vm.body {
        BodyView::Empty(empty) => assert_eq!(empty.message, NO_JOBS_PLACEHOLDER),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn jobs_render_in_feed_order_whatever_order_creators_arrive() {
    let (mut state, feed) = logged_in(7);
    let jobs = [job(1, 20, &[]), job(2, 10, &[]), job(3, 20, &[])];
    let lookups = requests(&respond(&mut state, &feed.tag, 200, &json!(jobs)));

    let ids: Vec<_> = lookups
        .iter()
        .map(|r| match r.tag {
            RequestTag::Creator { user_id, .. } => user_id,
            ref other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(ids, vec![20, 10], "one lookup per distinct creator, first-seen order");
    assert!(state.feed.entries.is_empty(), "nothing renders before all creators resolve");

    respond(&mut state, &lookups[1].tag, 200, &user(10, &[], &[]));
    assert!(state.feed.entries.is_empty());
    respond(&mut state, &lookups[0].tag, 200, &user(20, &[], &[]));

    let order: Vec<_> = state.feed.entries.iter().map(|e| (e.job.id, e.creator.id)).collect();
    assert_eq!(order, vec![(1, 20), (2, 10), (3, 20)]);
    assert!(!state.feed.loading);
}

#[test]
fn stale_page_response_is_discarded() {
    let (mut state, first) = logged_in(7);
    serve_feed(&mut state, &first, &full_page(1, 10));
    assert!(state.feed.has_next);

    let second = requests(&send(&mut state, Event::NextPage)).remove(0);
    let reload = requests(&send(&mut state, Event::Reload)).remove(0);
    assert!(matches!(second.tag, RequestTag::Feed { page: 2, .. }));
    assert_ne!(second.tag, reload.tag);

    let late = respond(&mut state, &second.tag, 200, &json!([job(9, 11, &[])]));
    assert!(late.is_empty(), "a superseded page issues no lookups");
    assert_eq!(state.session.current_job_page, 1);
    assert_eq!(state.feed.entries.len(), 5);
}

#[test]
fn stale_creator_lookup_is_discarded_after_a_newer_load() {
    let (mut state, first) = logged_in(7);
    let old_lookups = requests(&respond(&mut state, &first.tag, 200, &json!([job(1, 10, &[])])));

    let reload = requests(&send(&mut state, Event::Reload)).remove(0);
    let late = respond(&mut state, &old_lookups[0].tag, 200, &user(10, &[], &[]));
    assert!(late.is_empty());
    assert!(state.feed.entries.is_empty(), "a superseded lookup renders nothing");
    assert!(state.feed.loading);
    assert!(!state.error.is_visible());

    serve_feed(&mut state, &reload, &[job(2, 11, &[])]);
    let ids: Vec<_> = state.feed.entries.iter().map(|e| (e.job.id, e.creator.id)).collect();
    assert_eq!(ids, vec![(2, 11)]);
}

#[test]
fn short_page_disables_next() {
    let (mut state, first) = logged_in(7);
    serve_feed(&mut state, &first, &full_page(1, 10));

    let second = requests(&send(&mut state, Event::NextPage)).remove(0);
    assert_eq!(second.http.url, "http://localhost:5005/job/feed?start=5");
    serve_feed(&mut state, &second, &[job(6, 10, &[])]);

    assert_eq!(state.session.current_job_page, 2);
    assert!(!state.feed.has_next);
    assert!(requests(&send(&mut state, Event::NextPage)).is_empty());

    let back = requests(&send(&mut state, Event::PrevPage));
    assert!(matches!(back[0].tag, RequestTag::Feed { page: 1, .. }));
}

#[test]
fn prev_on_first_page_is_a_noop() {
    let (mut state, first) = logged_in(7);
    serve_feed(&mut state, &first, &[job(1, 10, &[])]);
    assert!(requests(&send(&mut state, Event::PrevPage)).is_empty());
}

#[test]
fn failed_page_leaves_list_and_shows_error() {
    let (mut state, first) = logged_in(7);
    serve_feed(&mut state, &first, &full_page(1, 10));

    let second = requests(&send(&mut state, Event::NextPage)).remove(0);
    respond(&mut state, &second.tag, 403, &json!({"error": "Invalid token"}));

    assert_eq!(state.feed.entries.len(), 5);
    assert_eq!(state.session.current_job_page, 1);
    assert_eq!(state.error.message(), Some("Invalid token"));
    assert!(!state.feed.loading);

    send(&mut state, Event::DismissError);
    assert!(!state.error.is_visible());
}

#[test]
fn fewer_than_five_jobs_is_the_last_page() {
    let (mut state, first) = logged_in(7);
    serve_feed(&mut state, &first, &[job(1, 10, &[]), job(2, 10, &[])]);
    assert!(!state.feed.has_next);
    assert!(requests(&send(&mut state, Event::NextPage)).is_empty());
}

#[test]
fn feed_page_arriving_after_leaving_the_dashboard_is_dropped() {
    let (mut state, feed) = logged_in(7);
    let profile = requests(&send(&mut state, Event::Navigate(NavTarget::MyProfile))).remove(0);
    respond(&mut state, &profile.tag, 200, &user(7, &[], &[job(1, 7, &[]), job(2, 7, &[])]));
    send(&mut state, Event::SelectNext);
    assert_eq!(state.selected_index, 1);

    let late = respond(&mut state, &feed.tag, 200, &json!([]));
    assert!(requests(&late).is_empty());
    assert_eq!(state.selected_index, 1);
    assert!(!state.feed.show_placeholder);
    assert!(!state.feed.loading);
    assert_eq!(state.route, Route::Profile { user_id: 7 });
}

#[test]
fn failed_feed_page_after_leaving_the_dashboard_shows_no_banner() {
    let (mut state, feed) = logged_in(7);
    send(&mut state, Event::Navigate(NavTarget::MyProfile));

    respond(&mut state, &feed.tag, 403, &json!({"error": "Invalid token"}));
    assert!(!state.error.is_visible());
}

#[test]
fn creator_lookup_arriving_after_leaving_the_dashboard_is_dropped() {
    let (mut state, feed) = logged_in(7);
    let lookups = requests(&respond(&mut state, &feed.tag, 200, &json!([job(1, 10, &[])])));
    send(&mut state, Event::Navigate(NavTarget::NewJob));

    respond(&mut state, &lookups[0].tag, 200, &user(10, &[], &[]));
    assert!(state.feed.entries.is_empty());
    assert_eq!(state.route, Route::NewJob);

    let back = requests(&send(&mut state, Event::Cancel));
    assert!(matches!(back[0].tag, RequestTag::Feed { page: 1, .. }));
}

#[test]
fn failed_creator_omits_its_jobs() {
    let (mut state, feed) = logged_in(7);
    let lookups = requests(&respond(
        &mut state,
        &feed.tag,
        200,
        &json!([job(1, 10, &[]), job(2, 11, &[])]),
    ));
    respond(&mut state, &lookups[0].tag, 200, &user(10, &[], &[]));
    respond(&mut state, &lookups[1].tag, 400, &json!({"error": "Invalid userId"}));

    let ids: Vec<_> = state.feed.entries.iter().map(|e| e.job.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(state.error.message(), Some("Invalid userId"));
}

#[test]
fn feed_card_shows_relative_time_and_like_state() {
    let (mut state, feed) = logged_in(7);
    serve_feed(&mut state, &feed, &[job(1, 10, &[7, 8])]);

    let vm = state.compute_viewmodel(24, now());
    let BodyView::Feed(feed) = vm.body else {
        panic!("expected feed body");
    };
    let item = &feed.items[0];
    assert!(item.is_selected);
    assert!(item.liked);
    assert_eq!(item.likes_label, "2 likes");
    assert_eq!(item.posted, "Posted: 1 hr 30 mins ago");
    assert_eq!(item.poster, "User 10");
    assert_eq!(vm.header.title.trim(), "LurkForWork - Dashboard (page 1)");
}
