//! Disorder routes: ICD-10 search and the disorder-ontology hierarchy.

use std::collections::HashMap;

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http;

fn ontology_lookup(path: &str, codes: &[&str]) -> Result<Value> {
    let url = format!("{}/disorder/{path}", config::url_base()?);
    let params: Vec<(&str, String)> = codes.iter().map(|code| ("q", code.to_string())).collect();
    let resp = http::get(&url, &params)?;
    http::check_response(resp)
}

/// Obtains disorder records by ICD-10 code.
pub fn search_by_icd10(codes: &[&str]) -> Result<Vec<Value>> {
    Ok(serde_json::from_value(ontology_lookup(
        "get_by_icd10",
        codes,
    )?)?)
}

/// Maps the input disorders (in MONDO ID space) to their descendants.
/// Inputs in a non-MONDO namespace are resolved to MONDO first and so do
/// not appear verbatim as keys in the result.
pub fn get_disorder_descendants(codes: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    Ok(serde_json::from_value(ontology_lookup(
        "descendants",
        codes,
    )?)?)
}

/// Maps the input disorders (in MONDO ID space) to their ancestors.
pub fn get_disorder_ancestors(codes: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    Ok(serde_json::from_value(ontology_lookup("ancestors", codes)?)?)
}

/// Maps the input disorders (in MONDO ID space) to their parents.
pub fn get_disorder_parents(codes: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    Ok(serde_json::from_value(ontology_lookup("parents", codes)?)?)
}

/// Maps the input disorders (in MONDO ID space) to their children.
pub fn get_disorder_children(codes: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    Ok(serde_json::from_value(ontology_lookup("children", codes)?)?)
}
