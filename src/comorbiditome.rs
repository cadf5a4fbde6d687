//! Comorbiditome routes: ICD-10/MONDO namespace mapping, ICD-10-mapped
//! association lookups, and the comorbiditome build job.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

/// Edge types available for [`get_icd10_associations`].
///
/// `DrugTargetsDisorderAssociatedGeneProduct` is an inferred edge,
/// following drug-[has_target]-protein, protein-[encoded_by]-gene,
/// gene-[associated_with]-disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icd10EdgeType {
    GeneAssociatedWithDisorder,
    DrugHasIndication,
    DrugHasContraindication,
    DrugTargetsDisorderAssociatedGeneProduct,
}

impl Icd10EdgeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneAssociatedWithDisorder => "gene_associated_with_disorder",
            Self::DrugHasIndication => "drug_has_indication",
            Self::DrugHasContraindication => "drug_has_contraindication",
            Self::DrugTargetsDisorderAssociatedGeneProduct => {
                "drug_targets_disorder_associated_gene_product"
            }
        }
    }
}

/// Output formats for a comorbiditome build download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComorbiditomeFormat {
    Tsv,
    Graphml,
}

impl ComorbiditomeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Graphml => "graphml",
        }
    }
}

/// Maps disorders from the ICD-10 namespace to MONDO. A term may map to
/// zero or more terms of differing scope.
pub fn map_icd10_to_mondo(disorders: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    let url = format!("{}/comorbiditome/icd10_to_mondo", config::url_base()?);
    let params: Vec<(&str, String)> = disorders
        .iter()
        .map(|code| ("icd10", code.to_string()))
        .collect();
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Maps disorders from the MONDO namespace to ICD-10. `only_3char` keeps
/// only three-character ICD-10 codes; `exclude_3char` drops them.
pub fn map_mondo_to_icd10(
    disorders: &[&str],
    only_3char: bool,
    exclude_3char: bool,
) -> Result<HashMap<String, Vec<String>>> {
    let url = format!("{}/comorbiditome/mondo_to_icd10", config::url_base()?);
    let mut params: Vec<(&str, String)> = disorders
        .iter()
        .map(|code| ("mondo", code.to_string()))
        .collect();
    params.push(("only_3char", only_3char.to_string()));
    params.push(("exclude_3char", exclude_3char.to_string()));
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Maps the given non-disorder nodes to the disorders they share the edge
/// type with, disorder IDs expressed in ICD-10.
pub fn get_icd10_associations(
    nodes: &[&str],
    edge_type: Icd10EdgeType,
) -> Result<HashMap<String, Vec<String>>> {
    let url = format!(
        "{}/comorbiditome/get_icd10_associations",
        config::url_base()?
    );
    let mut params: Vec<(&str, String)> = nodes
        .iter()
        .map(|node| ("node", node.to_string()))
        .collect();
    params.push(("edge_type", edge_type.as_str().to_string()));
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Parameters for a comorbiditome build job. The default applies no
/// phi-correlation or p-value bounds and induces no subnetwork.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComorbiditomeBuildRequest {
    /// Maximum phi correlation for an edge to be kept.
    pub max_phi_cor: Option<f64>,

    /// Minimum phi correlation for an edge to be kept.
    pub min_phi_cor: Option<f64>,

    /// Maximum p-value for an edge to be kept.
    pub max_p_value: Option<f64>,

    /// Minimum p-value for an edge to be kept.
    pub min_p_value: Option<f64>,

    /// MONDO disorders mapped to ICD-10 to induce a subnetwork.
    pub mondo: Option<Vec<String>>,
}

/// Submits a comorbiditome build job and returns its UID.
pub fn submit_comorbiditome_build(request: &ComorbiditomeBuildRequest) -> Result<String> {
    let url = format!(
        "{}/comorbiditome/submit_comorbiditome_build",
        config::url_base()?
    );
    let resp = http::post_json(&url, request)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a comorbiditome build job; its state is under
/// the `status` key.
pub fn check_comorbiditome_status(uid: &str) -> Result<Value> {
    http::job_status("/comorbiditome/comorbiditome_build_status", uid)
}

/// Downloads a completed comorbiditome build in the requested format.
///
/// With `save_path` the build is written to that file and `None` is
/// returned; without it the build comes back as a string.
pub fn download_comorbiditome_build(
    uid: &str,
    format: ComorbiditomeFormat,
    save_path: Option<&Path>,
) -> Result<Option<String>> {
    let filename = save_path
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or("none.txt");
    let url = format!(
        "{}/comorbiditome/download_comorbiditome_build/{uid}/{}/{filename}",
        config::url_base()?,
        format.as_str()
    );

    match save_path {
        Some(path) => {
            http::download(&url, path)?;
            Ok(None)
        }
        None => {
            let resp = http::get(&url, &[])?;
            Ok(Some(http::check_response_text(resp)?))
        }
    }
}
