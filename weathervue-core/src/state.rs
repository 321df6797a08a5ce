//! Request lifecycle for the single lookup page.
//!
//! The controller owns the one [`RequestState`] the page renders. Submitting
//! a query hands back a [`RequestTag`]; the caller performs the network call
//! and reports the outcome with the same tag, which lets the controller drop
//! completions that a newer submission has superseded.

use crate::model::WeatherView;
use crate::provider::LookupError;

/// Lifecycle of one weather lookup. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(WeatherView),
    Failed(String),
}

/// Identifies one submission. Completions carry it back so a stale response
/// can be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag(u64);

#[derive(Debug)]
pub struct QueryController {
    state: RequestState,
    in_flight: Option<RequestTag>,
    next_seq: u64,
}

impl QueryController {
    pub fn new() -> Self {
        Self { state: RequestState::Idle, in_flight: None, next_seq: 0 }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a lookup. Returns the trimmed query and its tag, or `None` for
    /// an empty or whitespace-only query, which leaves the state untouched.
    ///
    /// A submission while a lookup is outstanding is not rejected; it simply
    /// restarts the cycle and supersedes the older request.
    pub fn submit(&mut self, query: &str) -> Option<(RequestTag, String)> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.next_seq += 1;
        let tag = RequestTag(self.next_seq);
        self.in_flight = Some(tag);
        self.state = RequestState::Loading;

        Some((tag, trimmed.to_string()))
    }

    /// Finish the lookup identified by `tag`.
    ///
    /// A tag that is no longer the current in-flight request belongs to a
    /// superseded submission; its outcome is discarded.
    pub fn complete(&mut self, tag: RequestTag, outcome: Result<WeatherView, LookupError>) {
        if self.in_flight != Some(tag) {
            log::debug!("discarding completion for superseded request {}", tag.0);
            return;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(view) => RequestState::Success(view),
            Err(err) => RequestState::Failed(err.to_string()),
        };
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}
