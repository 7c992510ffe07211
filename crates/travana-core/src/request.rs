//! Request sequencing
//!
//! Every async action invocation gets a fresh [`RequestId`]. Slices remember
//! the id of the newest fetch per collection and drop older responses.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Allocate the next id; strictly greater than every id handed out before
    pub fn next() -> Self {
        RequestId(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks the newest in-flight request for one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latest(Option<RequestId>);

impl Latest {
    /// Record a newly started request
    pub fn begin(&mut self, id: RequestId) {
        if self.0.map_or(true, |current| id > current) {
            self.0 = Some(id);
        }
    }

    /// Whether an outcome for `id` may still be applied
    pub fn accepts(&self, id: RequestId) -> bool {
        self.0 == Some(id)
    }

    /// Forget the in-flight request so any pending response is dropped
    pub fn invalidate(&mut self) {
        self.0 = None;
    }
}
