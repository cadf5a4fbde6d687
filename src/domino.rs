//! DOMINO analysis routes.
//!
//! DOMINO is an algorithm for detecting active network modules.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a DOMINO job.
#[derive(Debug, Clone, Serialize)]
pub struct DominoRequest {
    /// Seed genes or proteins to run DOMINO with.
    pub seeds: Vec<String>,

    /// NeDRexDB-based network to run against.
    pub network: String,
}

impl DominoRequest {
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            seeds,
            network: "DEFAULT".to_string(),
        }
    }
}

/// Submits a DOMINO job and returns its UID.
pub fn domino_submit(request: &DominoRequest) -> Result<String> {
    let url = format!("{}/domino/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a DOMINO job; its state is under the `status`
/// key.
pub fn check_domino_status(uid: &str) -> Result<Value> {
    http::job_status("/domino/status", uid)
}
