//! DIAMOnD analysis routes.
//!
//! DIAMOnD identifies a candidate disease module around a set of known
//! disease genes (seeds) by greedily adding nodes with high connectivity
//! significance to the module.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};
use crate::http;

/// Parameters for a DIAMOnD job.
#[derive(Debug, Clone, Serialize)]
pub struct DiamondRequest {
    /// Seed genes or proteins to grow the module from.
    pub seeds: Vec<String>,

    /// Maximum number of nodes at which to stop the algorithm.
    pub n: u64,

    /// Weight given to seeds.
    pub alpha: u32,

    /// NeDRexDB-based network to run against.
    pub network: String,

    /// Which edges to return: `all` (edges between all module nodes) or
    /// `limited` (only edges between seeds and new nodes).
    pub edges: String,
}

impl DiamondRequest {
    pub fn new(seeds: Vec<String>, n: u64) -> Self {
        Self {
            seeds,
            n,
            alpha: 1,
            network: "DEFAULT".to_string(),
            edges: "all".to_string(),
        }
    }
}

/// Submits a DIAMOnD job and returns its UID.
pub fn diamond_submit(request: &DiamondRequest) -> Result<String> {
    if request.edges != "all" && request.edges != "limited" {
        return Err(Error::Api(format!(
            "invalid value for edges ({:?}), should be all|limited",
            request.edges
        )));
    }
    let url = format!("{}/diamond/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a DIAMOnD job; its state is under the `status`
/// key.
pub fn check_diamond_status(uid: &str) -> Result<Value> {
    http::job_status("/diamond/status", uid)
}

/// Downloads the results of a completed DIAMOnD job as text.
pub fn download_diamond_results(uid: &str) -> Result<String> {
    http::job_download("/diamond/download", uid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_edges_value_is_rejected() {
        let mut request = DiamondRequest::new(vec!["P43121".to_string()], 100);
        request.edges = "some".to_string();
        let err = diamond_submit(&request).unwrap_err();
        assert!(err.to_string().contains("all|limited"));
    }
}
