//! Graph build routes: submit a build request, poll its status, and
//! download the resulting GraphML.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Parameters for a graph build job. `Default` reproduces the server's
/// standard build: the four core node types, the core edge types,
/// experimental PPIs for Homo sapiens, and approved drugs only.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRequest {
    /// Node types to include in the graph.
    pub nodes: Vec<String>,

    /// Edge types to include in the graph.
    pub edges: Vec<String>,

    /// Evidence types a PPI edge must carry to be included.
    pub ppi_evidence: Vec<String>,

    /// Whether to keep PPI self-loops.
    #[serde(rename = "ppi_self_loops")]
    pub include_ppi_self_loops: bool,

    /// NCBI taxonomy IDs used to filter proteins.
    pub taxid: Vec<u32>,

    /// Drug groups used to filter drugs.
    pub drug_groups: Vec<String>,

    /// Strip bulky attributes from nodes and edges for a smaller network.
    pub concise: bool,

    /// Include gene-disorder associations from OMIM.
    pub include_omim: bool,

    /// Keep DisGeNET gene-disorder associations scoring at least this value.
    pub disgenet_threshold: f64,

    /// Label disorder nodes with OMIM IDs instead of MONDO IDs where possible.
    pub use_omim_ids: bool,

    /// Split drug nodes into SmallMoleculeDrug and BiotechDrug.
    pub split_drug_types: bool,
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self {
            nodes: vec![
                "disorder".to_string(),
                "drug".to_string(),
                "gene".to_string(),
                "protein".to_string(),
            ],
            edges: vec![
                "disorder_is_subtype_of_disorder".to_string(),
                "drug_has_indication".to_string(),
                "drug_has_target".to_string(),
                "gene_associated_with_disorder".to_string(),
                "protein_encoded_by_gene".to_string(),
                "protein_interacts_with_protein".to_string(),
            ],
            ppi_evidence: vec!["exp".to_string()],
            include_ppi_self_loops: false,
            taxid: vec![9606],
            drug_groups: vec!["approved".to_string()],
            concise: true,
            include_omim: true,
            disgenet_threshold: 0.0,
            use_omim_ids: false,
            split_drug_types: false,
        }
    }
}

/// Submits a graph build job and returns its UID.
pub fn build_request(request: &BuildRequest) -> Result<String> {
    let url = format!("{}/graph/builder", config::url_base()?);
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a graph build job; its state is under the
/// `status` key.
pub fn check_build_status(uid: &str) -> Result<Value> {
    let url = format!("{}/graph/details/{uid}", config::url_base()?);
    let resp = http::get(&url, &[])?;
    http::check_response(resp)
}

/// Downloads the GraphML produced by a completed build job, returning the
/// path written. The default target is `{uid}.graphml` in the current
/// directory.
pub fn download_graph(uid: &str, target: Option<&Path>) -> Result<PathBuf> {
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{uid}.graphml")));
    let url = format!("{}/graph/download/{uid}/{uid}.graphml", config::url_base()?);
    http::download(&url, &target)?;
    Ok(target)
}
