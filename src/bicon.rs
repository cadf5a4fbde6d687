//! BiCoN analysis routes: submit an expression file, poll the job, and
//! download the result archive.

use std::path::{Path, PathBuf};

use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a BiCoN job.
#[derive(Debug, Clone)]
pub struct BiconRequest {
    /// Path to the expression data file to upload.
    pub expression_file: PathBuf,

    /// Minimum desired size of the solution subnetworks.
    pub lg_min: u32,

    /// Maximum desired size of the solution subnetworks.
    pub lg_max: u32,

    /// GGI network to run BiCoN on.
    pub network: String,
}

impl BiconRequest {
    pub fn new(expression_file: PathBuf) -> Self {
        Self {
            expression_file,
            lg_min: 10,
            lg_max: 15,
            network: "DEFAULT".to_string(),
        }
    }
}

/// Submits a BiCoN job, uploading the expression file, and returns the
/// job's UID.
pub fn bicon_submit(request: &BiconRequest) -> Result<String> {
    let form = Form::new()
        .text("lg_min", request.lg_min.to_string())
        .text("lg_max", request.lg_max.to_string())
        .text("network", request.network.clone())
        .part("expression_file", Part::file(&request.expression_file)?);

    let url = format!("{}/bicon/submit", config::url_base()?);
    let resp = http::post_multipart(&url, form)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a BiCoN job; its state is under the `status` key.
pub fn check_bicon_status(uid: &str) -> Result<Value> {
    http::job_status("/bicon/status", uid)
}

/// Downloads the result archive of a completed BiCoN job, returning the
/// path written. The default target is `{uid}.zip` in the current
/// directory.
pub fn download_bicon_data(uid: &str, target: Option<&Path>) -> Result<PathBuf> {
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{uid}.zip")));
    let url = format!("{}/bicon/download?uid={uid}", config::url_base()?);
    http::download(&url, &target)?;
    Ok(target)
}
