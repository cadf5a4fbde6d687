//! TrustRank analysis routes.
//!
//! TrustRank is a modification of PageRank where an initial trust score is
//! iteratively propagated from seed nodes to adjacent nodes using the
//! network topology, prioritising nodes by how well they are connected to
//! the trusted seed set.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a TrustRank job.
#[derive(Debug, Clone, Serialize)]
pub struct TrustrankRequest {
    /// Seed proteins to propagate trust from.
    pub seeds: Vec<String>,

    /// Rate of trust propagation across the network.
    pub damping_factor: f64,

    /// Return only drugs that directly target seed nodes.
    pub only_direct_drugs: bool,

    /// Return only drugs with an approved use.
    pub only_approved_drugs: bool,

    /// Number of top-ranked drugs to return; ties with the last rank are
    /// included. `None` returns all.
    #[serde(rename = "N")]
    pub n: Option<u64>,
}

impl TrustrankRequest {
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            seeds,
            damping_factor: 0.85,
            only_direct_drugs: true,
            only_approved_drugs: true,
            n: None,
        }
    }
}

/// Submits a TrustRank job and returns its UID.
pub fn trustrank_submit(request: &TrustrankRequest) -> Result<String> {
    let url = format!("{}/trustrank/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a TrustRank job; its state is under the `status`
/// key.
pub fn check_trustrank_status(uid: &str) -> Result<Value> {
    http::job_status("/trustrank/status", uid)
}

/// Downloads the results of a completed TrustRank job as text.
pub fn download_trustrank_results(uid: &str) -> Result<String> {
    http::job_download("/trustrank/download", uid)
}
