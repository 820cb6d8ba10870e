//! View builders for job items, profile jobs and watchee entries.
//!
//! Builders are pure: given the same record, viewer and clock they produce
//! the same view. Selection is applied by the caller.

use crate::domain::models::{Job, User, UserId};
use crate::domain::time::{format_iso_date, job_date};
use crate::ui::viewmodel::{JobItemView, PopupView, ProfileJobView, WatcheeEntryView};
use chrono::{DateTime, Utc};

pub const LIKED_GLYPH: char = '♥';
pub const NOT_LIKED_GLYPH: char = '♡';

fn count_label(count: usize, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Short description of a job or profile image.
///
/// Inline `data:` URLs are summarized by media type and decoded size; other
/// references are shown as-is.
#[must_use]
pub fn image_label(image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        return "(no image)".to_string();
    }

    let Some(rest) = image.strip_prefix("data:") else {
        return image.to_string();
    };
    let (meta, payload) = rest.split_once(',').unwrap_or((rest, ""));
    let media = meta.split(';').next().filter(|m| !m.is_empty()).unwrap_or("image");
    let kib = (payload.len() * 3 / 4).div_ceil(1024);
    format!("[{media}, {kib} KiB]")
}

/// Builds a dashboard job item.
#[must_use]
pub fn build_job_item(job: &Job, creator: &User, viewer: Option<UserId>, now: DateTime<Utc>) -> JobItemView {
    let liked = job.is_liked_by(viewer);
    JobItemView {
        job_id: job.id,
        creator_id: job.creator_id,
        title: job.title.clone(),
        poster: creator.name.clone(),
        posted: format!("Posted: {}", job_date(&job.created_at, now)),
        start: format!("Start date: {}", format_iso_date(&job.start)),
        image: image_label(&job.image),
        description: job.description.clone(),
        liked,
        like_glyph: if liked { LIKED_GLYPH } else { NOT_LIKED_GLYPH },
        likes_label: count_label(job.likes.len(), "like"),
        comments_label: count_label(job.comments.len(), "comment"),
        is_selected: false,
    }
}

/// Builds a job item for a profile page.
#[must_use]
pub fn build_profile_job_item(job: &Job, viewer: Option<UserId>, now: DateTime<Utc>) -> ProfileJobView {
    ProfileJobView {
        job_id: job.id,
        title: job.title.clone(),
        posted: format!("Posted: {}", job_date(&job.created_at, now)),
        start: format!("Start date: {}", format_iso_date(&job.start)),
        image: image_label(&job.image),
        description: job.description.clone(),
        editable: viewer == Some(job.creator_id),
        is_selected: false,
    }
}

#[must_use]
pub fn build_watchee_entry(user: &User) -> WatcheeEntryView {
    WatcheeEntryView {
        user_id: user.id,
        name: user.name.clone(),
        is_selected: false,
    }
}

/// Names of the users who liked `job`.
#[must_use]
pub fn likes_popup(job: &Job) -> PopupView {
    PopupView {
        title: count_label(job.likes.len(), "like"),
        lines: job.likes.iter().map(|like| like.user_name.clone()).collect(),
    }
}

/// `name: comment` lines for `job`.
#[must_use]
pub fn comments_popup(job: &Job) -> PopupView {
    PopupView {
        title: count_label(job.comments.len(), "comment"),
        lines: job
            .comments
            .iter()
            .map(|c| format!("{}: {}", c.user_name, c.comment))
            .collect(),
    }
}

/// `"Watched by N user(s)"`
#[must_use]
pub fn watchers_label(user: &User) -> String {
    format!("Watched by {}", count_label(user.watchee_user_ids.len(), "user"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Comment, Like};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn job() -> Job {
        Job {
            id: 11,
            title: "Rust engineer".into(),
            description: "Write Rust".into(),
            image: "data:image/png;base64,AAAA".into(),
            start: "2024-04-01T00:00:00.000Z".into(),
            created_at: "2024-03-10T10:30:00.000Z".into(),
            creator_id: 3,
            likes: vec![Like { user_id: 7, user_name: "Ada".into() }],
            comments: vec![
                Comment { user_id: 8, user_name: "Bob".into(), comment: "Nice".into() },
                Comment { user_id: 7, user_name: "Ada".into(), comment: "+1".into() },
            ],
        }
    }

    fn creator() -> User {
        User {
            id: 3,
            name: "Carol".into(),
            email: "carol@example.com".into(),
            image: None,
            jobs: vec![],
            watchee_user_ids: vec![],
        }
    }

    #[test]
    fn job_item_for_liking_viewer() {
        let item = build_job_item(&job(), &creator(), Some(7), now());
        assert!(item.liked);
        assert_eq!(item.like_glyph, LIKED_GLYPH);
        assert_eq!(item.poster, "Carol");
        assert_eq!(item.posted, "Posted: 1 hr 30 mins ago");
        assert_eq!(item.start, "Start date: 01/04/2024");
        assert_eq!(item.likes_label, "1 like");
        assert_eq!(item.comments_label, "2 comments");
        assert_eq!(item.image, "[image/png, 1 KiB]");
    }

    #[test]
    fn job_item_for_other_viewer() {
        let item = build_job_item(&job(), &creator(), Some(9), now());
        assert!(!item.liked);
        assert_eq!(item.like_glyph, NOT_LIKED_GLYPH);
    }

    #[test]
    fn builders_are_deterministic() {
        let a = build_profile_job_item(&job(), Some(3), now());
        let b = build_profile_job_item(&job(), Some(3), now());
        assert_eq!(a, b);
        assert!(a.editable);
        assert!(!build_profile_job_item(&job(), Some(7), now()).editable);
    }

    #[test]
    fn popups_list_names_and_comments() {
        assert_eq!(likes_popup(&job()).lines, vec!["Ada".to_string()]);
        assert_eq!(
            comments_popup(&job()).lines,
            vec!["Bob: Nice".to_string(), "Ada: +1".to_string()]
        );
    }

    #[test]
    fn image_labels() {
        assert_eq!(image_label(""), "(no image)");
        assert_eq!(image_label("https://x/y.png"), "https://x/y.png");
    }
}
