//! Protein-protein interaction route.

use std::collections::HashSet;

use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};
use crate::http;

const VALID_EVIDENCE: [&str; 3] = ["exp", "pred", "ortho"];

/// Obtains PPI edges, filtered by evidence type.
///
/// Valid evidence values are `exp` (experimental), `pred` (predicted) and
/// `ortho` (orthologous); anything else is rejected before a request is
/// made. `skip` and `limit` page through the results, with `limit`
/// bounded by the server's pagination maximum.
pub fn ppis(evidence: &[&str], skip: u64, limit: Option<u64>) -> Result<Vec<Value>> {
    let evidence_set: HashSet<&str> = evidence.iter().copied().collect();
    let unexpected: Vec<&str> = evidence_set
        .iter()
        .copied()
        .filter(|value| !VALID_EVIDENCE.contains(value))
        .collect();
    if !unexpected.is_empty() {
        return Err(Error::Api(format!(
            "unexpected evidence types: {unexpected:?}"
        )));
    }

    let upper_limit = http::get_pagination_limit()?;
    http::check_pagination_limit(limit, upper_limit)?;

    let mut params: Vec<(&str, String)> = evidence_set
        .iter()
        .map(|value| ("iid_evidence", value.to_string()))
        .collect();
    params.push(("skip", skip.to_string()));
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }

    let url = format!("{}/ppi", config::url_base()?);
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}
