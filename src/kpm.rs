//! KeyPathwayMiner (KPM) analysis routes.

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a KPM job.
#[derive(Debug, Clone, Serialize)]
pub struct KpmRequest {
    /// Seed genes or proteins to run KPM with.
    pub seeds: Vec<String>,

    /// Number of gene or protein exceptions to allow.
    pub k: u32,

    /// NeDRexDB-based network to run against.
    pub network: String,
}

impl KpmRequest {
    pub fn new(seeds: Vec<String>, k: u32) -> Self {
        Self {
            seeds,
            k,
            network: "DEFAULT".to_string(),
        }
    }
}

/// Submits a KPM job and returns its UID.
pub fn kpm_submit(request: &KpmRequest) -> Result<String> {
    let url = format!("{}/kpm/submit", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a KPM job; its state is under the `status` key.
pub fn check_kpm_status(uid: &str) -> Result<Value> {
    http::job_status("/kpm/status", uid)
}
