//! Virtual patient data downloads, served from the separately configured
//! VPD base URL.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::Result;
use crate::http;

/// Downloads the virtual-patient archive for a disorder into `out_dir`.
///
/// `disorder` is a MONDO ID (e.g. `mondo.0000090`); `number_of_patients`
/// selects the dataset size offered by the service (1, 10, or 100).
/// Returns the path of the saved archive, or `None` if the service has no
/// archive for the requested combination.
pub fn get_vpd(
    disorder: &str,
    number_of_patients: u32,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    let archive_name = format!("{disorder}_1000GP_{number_of_patients}VPSim.zip");
    let url = format!("{}/vpd/{disorder}/{archive_name}", config::url_vpd()?);

    let mut resp = http::get(&url, &[])?;
    if !resp.status().is_success() {
        return Ok(None);
    }

    let archive = out_dir.join(&archive_name);
    let mut file = File::create(&archive)?;
    resp.copy_to(&mut file)?;
    Ok(Some(archive))
}
