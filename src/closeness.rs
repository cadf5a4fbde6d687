//! Closeness centrality analysis routes.
//!
//! A node centrality measure ranking nodes by the lengths of their
//! shortest paths to all other nodes; the NeDRex variant calculates
//! closeness with respect to the selected seeds.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a closeness centrality job.
#[derive(Debug, Clone, Serialize)]
pub struct ClosenessRequest {
    /// Seed proteins to calculate closeness against.
    pub seeds: Vec<String>,

    /// Return only drugs that directly target seed nodes.
    pub only_direct_drugs: bool,

    /// Return only drugs with an approved use.
    pub only_approved_drugs: bool,

    /// Number of top-ranked drugs to return; ties with the last rank are
    /// included. `None` returns all.
    #[serde(rename = "N")]
    pub n: Option<u64>,
}

impl ClosenessRequest {
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            seeds,
            only_direct_drugs: true,
            only_approved_drugs: true,
            n: None,
        }
    }
}

/// Submits a closeness centrality job and returns its UID.
pub fn closeness_submit(request: &ClosenessRequest) -> Result<String> {
    let url = format!("{}/closeness/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a closeness centrality job; its state is under
/// the `status` key.
pub fn check_closeness_status(uid: &str) -> Result<Value> {
    http::job_status("/closeness/status", uid)
}

/// Downloads the results of a completed closeness centrality job as text.
pub fn download_closeness_results(uid: &str) -> Result<String> {
    http::job_download("/closeness/download", uid)
}
