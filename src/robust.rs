//! ROBUST analysis routes.
//!
//! ROBUST carries out robust disease module mining via enumeration of
//! diverse prize-collecting Steiner trees.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a ROBUST job.
#[derive(Debug, Clone, Serialize)]
pub struct RobustRequest {
    /// Seed proteins to run ROBUST with.
    pub seeds: Vec<String>,

    /// NeDRexDB-based network to run against.
    pub network: String,

    /// Initial fraction for the algorithm.
    pub initial_fraction: f64,

    /// Reduction factor for the algorithm.
    pub reduction_factor: f64,

    /// Number of Steiner trees to compute.
    pub num_trees: u32,

    /// Threshold value for the algorithm.
    pub threshold: f64,
}

impl RobustRequest {
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            seeds,
            network: "DEFAULT".to_string(),
            initial_fraction: 0.25,
            reduction_factor: 0.9,
            num_trees: 30,
            threshold: 0.1,
        }
    }
}

/// Submits a ROBUST job and returns its UID.
pub fn robust_submit(request: &RobustRequest) -> Result<String> {
    let url = format!("{}/robust/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a ROBUST job; its state is under the `status`
/// key.
pub fn check_robust_status(uid: &str) -> Result<Value> {
    http::job_status("/robust/status", uid)
}

/// Downloads the results of a completed ROBUST job as text.
pub fn download_robust_results(uid: &str) -> Result<String> {
    http::job_download("/robust/results", uid)
}
