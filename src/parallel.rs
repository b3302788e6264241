//! Batch comparison of independent version pairs.
//!
//! Each comparison is a pure function of its own request, so a batch fans out
//! across rayon's pool with no coordination. Results keep request order.
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::compare_request;
use crate::error::Result;
use crate::types::{ComparisonRequest, ComparisonResult};

/// Compare every request, in parallel when the `parallel` feature is enabled.
pub fn compare_batch(requests: &[ComparisonRequest]) -> Vec<Result<ComparisonResult>> {
    debug!(requests = requests.len(), "Running comparison batch");

    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(compare_request).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        compare_batch_sequential(requests)
    }
}

pub fn compare_batch_sequential(requests: &[ComparisonRequest]) -> Vec<Result<ComparisonResult>> {
    requests.iter().map(compare_request).collect()
}
