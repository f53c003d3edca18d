//! Query engine configuration.

use std::env;

/// Runtime options for result resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryConfig {
    /// Drop repeated views from a result, keeping the first occurrence.
    ///
    /// Off by default: a view given as a direct reference and also matched
    /// by a criterion appears twice.
    pub dedupe_results: bool,
}

impl QueryConfig {
    #[inline]
    #[must_use]
    pub const fn new(dedupe_results: bool) -> Self {
        Self { dedupe_results }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `VIEW_QUERY_DEDUPE`: "1" or "true" enables de-duplication.
    #[must_use]
    pub fn from_env() -> Self {
        let dedupe_results = env::var("VIEW_QUERY_DEDUPE")
            .ok()
            .is_some_and(|val| val == "1" || val.eq_ignore_ascii_case("true"));
        Self { dedupe_results }
    }
}
