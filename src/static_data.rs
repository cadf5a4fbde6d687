//! Static data exposed by the API: database metadata, the licence text,
//! and the lengths.map file used by the NeDRex app.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Obtains the NeDRexDB metadata: versions (or retrieval dates) of the
/// source databases integrated into the instance.
pub fn get_metadata() -> Result<Value> {
    let url = format!("{}/static/metadata", config::url_base()?);
    let resp = http::get(&url, &[])?;
    http::check_response(resp)
}

/// Obtains the NeDRex licence text.
pub fn get_license() -> Result<String> {
    let url = format!("{}/static/licence", config::url_base()?);
    let resp = http::get(&url, &[])?;
    http::check_response_text(resp)
}

/// Downloads the lengths.map file, returning the path written. The default
/// target is `lengths.map` in the current directory.
pub fn download_lengths_map(target: Option<&Path>) -> Result<PathBuf> {
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("lengths.map"));
    let url = format!("{}/static/lengths.map", config::url_base()?);
    http::download(&url, &target)?;
    Ok(target)
}
