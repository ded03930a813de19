//! Index parameters: listing control.
//!
//! [`IndexParams`] groups the parameters of the latest-questions listing in
//! [`ListLatestQuestionsUseCase`](crate::use_cases::list_latest::ListLatestQuestionsUseCase).

use serde::{Deserialize, Serialize};

/// Default number of questions on the index page
pub const DEFAULT_LATEST_LIMIT: usize = 5;

/// Listing control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexParams {
    /// Maximum number of questions in the latest list.
    pub latest_limit: usize,
}

impl Default for IndexParams {
    fn default() -> Self {
        Self {
            latest_limit: DEFAULT_LATEST_LIMIT,
        }
    }
}

impl IndexParams {
    pub fn with_latest_limit(mut self, limit: usize) -> Self {
        self.latest_limit = limit;
        self
    }
}
