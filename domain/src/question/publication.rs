//! Publication rules for questions
//!
//! A question is *visible* once its publication date has been reached,
//! and *recently published* while that date lies in the day ending now:
//!
//! ```text
//!            recently published
//!         (-------------------]
//!  ───────┼───────────────────┼──────────────▶ time
//!     now - 1 day            now
//!  <──────── visible ─────────]   invisible
//! ```
//!
//! Both rules take the current instant explicitly so callers decide which
//! clock to trust.

use crate::question::entities::Question;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Reverse;

/// Width of the trailing window for [`was_published_recently`], in seconds
pub const RECENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// The trailing window for [`was_published_recently`]
pub fn recent_window() -> Duration {
    Duration::seconds(RECENT_WINDOW_SECS)
}

/// `now - 1 day < pub_date <= now`
///
/// The lower bound is exclusive: a question published exactly one day
/// before `now` is no longer recent.
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - recent_window() < pub_date && pub_date <= now
}

/// `pub_date <= now`
pub fn is_visible(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// Select the latest visible questions, newest first
///
/// Ties on `pub_date` put the higher id (the later insert) first.
pub fn latest_visible<'a, I>(questions: I, now: DateTime<Utc>, limit: usize) -> Vec<Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut visible: Vec<Question> = questions
        .into_iter()
        .filter(|q| q.is_visible(now))
        .cloned()
        .collect();
    visible.sort_by_key(|q| Reverse((q.pub_date, q.id)));
    visible.truncate(limit);
    visible
}
