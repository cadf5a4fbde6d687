//! MuST analysis routes.
//!
//! MuST extracts a connected subnetwork which potentially incorporates the
//! genes and proteins involved in a disease pathway or mechanism.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a MuST job.
#[derive(Debug, Clone, Serialize)]
pub struct MustRequest {
    /// Seed genes or proteins to run MuST with.
    pub seeds: Vec<String>,

    /// NeDRexDB-based network to run against.
    pub network: String,

    /// Penalty for hub nodes; non-zero values extract mechanisms more
    /// specific to the disorder of interest.
    pub hubpenalty: f64,

    /// Return multiple resulting Steiner trees.
    pub multiple: bool,

    /// Number of trees to return.
    pub trees: u32,

    /// Maximum number of iterations.
    pub maxit: u32,
}

impl MustRequest {
    pub fn new(seeds: Vec<String>, hubpenalty: f64, multiple: bool, trees: u32, maxit: u32) -> Self {
        Self {
            seeds,
            network: "DEFAULT".to_string(),
            hubpenalty,
            multiple,
            trees,
            maxit,
        }
    }
}

/// Submits a MuST job and returns its UID.
pub fn must_submit(request: &MustRequest) -> Result<String> {
    let url = format!("{}/must/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a MuST job; its state is under the `status` key.
pub fn check_must_status(uid: &str) -> Result<Value> {
    http::job_status("/must/status", uid)
}
