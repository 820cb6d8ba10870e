mod common;

use common::{job, logged_in, requests, respond, send, serve_feed, user};
use lurkforwork::api::RequestTag;
use lurkforwork::app::{change_screen, NavTarget, Route, Selection};
use lurkforwork::ui::BodyView;
use lurkforwork::{initialize, Action, Config, Event};

#[test]
fn logged_out_navigation_to_private_screens_is_ignored() {
    let mut state = initialize(&Config::default());
    assert!(send(&mut state, Event::Navigate(NavTarget::Dashboard)).is_empty());
    assert!(send(&mut state, Event::Navigate(NavTarget::MyProfile)).is_empty());
    assert!(change_screen(&mut state, Route::Profile { user_id: 1 }).unwrap().is_empty());
    assert_eq!(state.route, Route::Login);
}

#[test]
fn logged_in_users_cannot_reach_login() {
    let (mut state, _) = logged_in(7);
    send(&mut state, Event::Navigate(NavTarget::Login));
    send(&mut state, Event::Navigate(NavTarget::Register));
    assert_eq!(state.route, Route::Dashboard);
}

#[test]
fn profile_lists_watchers_in_backend_order() {
    let (mut state, _) = logged_in(7);
    let profile = requests(&send(&mut state, Event::Navigate(NavTarget::MyProfile))).remove(0);
    assert_eq!(profile.http.url, "http://localhost:5005/user?userId=7");

    let lookups = requests(&respond(&mut state, &profile.tag, 200, &user(7, &[30, 20], &[])));
    assert_eq!(lookups.len(), 2);
    respond(&mut state, &lookups[1].tag, 200, &user(20, &[], &[]));
    respond(&mut state, &lookups[0].tag, 200, &user(30, &[], &[]));

    let names: Vec<_> = state
        .profile
        .data
        .as_ref()
        .unwrap()
        .watchees
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(names, vec![30, 20]);
}

#[test]
fn reloading_a_profile_is_idempotent() {
    let (mut state, _) = logged_in(7);
    let load = |state: &mut lurkforwork::AppState| {
        let profile = requests(&send(state, Event::Reload)).remove(0);
        let lookups = requests(&respond(state, &profile.tag, 200, &user(9, &[7], &[job(4, 9, &[])])));
        respond(state, &lookups[0].tag, 200, &user(7, &[], &[]));
        state.compute_viewmodel(30, chrono::Utc::now())
    };

    change_screen(&mut state, Route::Profile { user_id: 9 }).unwrap();
    let first = load(&mut state);
    let second = load(&mut state);
    assert_eq!(first, second);

    let BodyView::Profile(view) = first.body else {
        panic!("expected profile body");
    };
    assert_eq!(view.jobs.len(), 1);
    assert_eq!(view.watchees.len(), 1);
    assert_eq!(view.watch_label.as_deref(), Some("Unwatch"));
    assert!(!view.jobs[0].editable);
}

#[test]
fn stale_profile_response_is_ignored() {
    let (mut state, _) = logged_in(7);
    let first = requests(&change_screen(&mut state, Route::Profile { user_id: 9 }).unwrap()).remove(0);
    let second = requests(&change_screen(&mut state, Route::Profile { user_id: 10 }).unwrap()).remove(0);

    respond(&mut state, &first.tag, 200, &user(9, &[], &[]));
    assert!(state.profile.data.is_none());

    respond(&mut state, &second.tag, 200, &user(10, &[], &[]));
    assert_eq!(state.profile.data.as_ref().map(|d| d.user.id), Some(10));
}

#[test]
fn cursor_moves_over_jobs_then_watchers_and_wraps() {
    let (mut state, _) = logged_in(7);
    let profile = requests(&change_screen(&mut state, Route::Profile { user_id: 7 }).unwrap()).remove(0);
    let lookups = requests(&respond(&mut state, &profile.tag, 200, &user(7, &[8], &[job(1, 7, &[])])));
    respond(&mut state, &lookups[0].tag, 200, &user(8, &[], &[]));

    assert!(matches!(state.selection(), Some(Selection::ProfileJob { editable: true, .. })));
    send(&mut state, Event::SelectNext);
    assert_eq!(state.selection(), Some(Selection::Watchee { user_id: 8 }));
    send(&mut state, Event::SelectNext);
    assert!(matches!(state.selection(), Some(Selection::ProfileJob { .. })));

    send(&mut state, Event::SelectPrev);
    let open = requests(&send(&mut state, Event::OpenSelected));
    assert!(matches!(open[0].tag, RequestTag::Profile { user_id: 8, .. }));
}

#[test]
fn every_screen_change_renames_the_pane() {
    let (mut state, feed) = logged_in(7);
    serve_feed(&mut state, &feed, &[job(1, 10, &[])]);
    let actions = send(&mut state, Event::Navigate(NavTarget::NewJob));
    assert_eq!(actions, vec![Action::SetTitle("LurkForWork - New Job".to_string())]);

    let actions = send(&mut state, Event::Cancel);
    assert!(actions.contains(&Action::SetTitle("LurkForWork - Dashboard".to_string())));
    assert!(matches!(requests(&actions)[0].tag, RequestTag::Feed { .. }));
}
