//! General routes: collection metadata, node and edge retrieval, and the
//! pagination helpers over them.

use serde_json::{json, Value};

use crate::config;
use crate::error::{Error, Result};
use crate::http::{self, RecordIter};

/// Filter options for node retrieval. The default filters nothing.
#[derive(Debug, Clone, Default)]
pub struct NodeFilter {
    /// Attributes to project for each returned node. `None` returns all
    /// attributes.
    pub attributes: Option<Vec<String>>,

    /// Restrict results to nodes with these `primaryDomainId`s. `None`
    /// applies no ID filtering.
    pub node_ids: Option<Vec<String>>,
}

#[derive(Clone, Copy)]
enum Collection {
    Node,
    Edge,
}

fn check_type(coll_name: &str, collection: Collection) -> Result<()> {
    let known = match collection {
        Collection::Node => get_node_types()?,
        Collection::Edge => get_edge_types()?,
    };
    if known.iter().any(|known_type| known_type == coll_name) {
        return Ok(());
    }
    let kind = match collection {
        Collection::Node => "node",
        Collection::Edge => "edge",
    };
    Err(Error::Api(format!(
        "type={coll_name:?} not in NeDRex {kind} types"
    )))
}

/// Checks whether API keys are active for the configured NeDRex instance.
pub fn api_keys_active() -> Result<bool> {
    let url = format!("{}/api_key_setting", config::url_base()?);
    let resp = http::get(&url, &[])?;
    if !resp.status().is_success() {
        return Err(Error::Api(format!(
            "unexpected status {} from api_key_setting",
            resp.status()
        )));
    }
    Ok(resp.json()?)
}

/// Obtains a new API key for the NeDRex API.
///
/// `accept_eula` reflects whether the caller accepts the NeDRex end user
/// licence agreement; a key is only issued when it is `true`.
pub fn get_api_key(accept_eula: bool) -> Result<String> {
    if !accept_eula {
        return Err(Error::Api(
            "an API key cannot be obtained unless accept_eula is set to true".to_string(),
        ));
    }
    let url = format!("{}/admin/api_key/generate", config::url_base()?);
    let resp = http::post_json(&url, &json!({ "accept_eula": accept_eula }))?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Gets the list of node types stored in NeDRexDB.
pub fn get_node_types() -> Result<Vec<String>> {
    let url = format!("{}/list_node_collections", config::url_base()?);
    let resp = http::get(&url, &[])?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Gets the list of edge types stored in NeDRexDB.
pub fn get_edge_types() -> Result<Vec<String>> {
    let url = format!("{}/list_edge_collections", config::url_base()?);
    let resp = http::get(&url, &[])?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Gets the attributes available on members of the given collection.
///
/// With `include_counts` the server returns a document-count breakdown per
/// attribute instead of a plain list, so the result stays as JSON.
pub fn get_collection_attributes(coll_type: &str, include_counts: bool) -> Result<Value> {
    let url = format!("{}/{coll_type}/attributes", config::url_base()?);
    let resp = http::get(&url, &[("include_counts", include_counts.to_string())])?;
    http::check_response(resp)
}

/// Returns the `primaryDomainId` of every node of the given type.
pub fn get_node_ids(coll_type: &str) -> Result<Vec<String>> {
    check_type(coll_type, Collection::Node)?;
    let url = format!(
        "{}/{coll_type}/attributes/primaryDomainId/json",
        config::url_base()?
    );
    let resp = http::get(&url, &[])?;
    let records: Vec<Value> = serde_json::from_value(http::check_response(resp)?)?;
    records
        .iter()
        .map(|record| {
            record["primaryDomainId"]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| Error::Api("record missing primaryDomainId".to_string()))
        })
        .collect()
}

fn filter_params(filter: &NodeFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(node_ids) = &filter.node_ids {
        params.extend(node_ids.iter().map(|id| ("node_id", id.clone())));
    }
    if let Some(attributes) = &filter.attributes {
        params.extend(attributes.iter().map(|attr| ("attribute", attr.clone())));
    }
    params
}

/// Returns one page of nodes of the given type.
///
/// `limit` defaults to the server's choice and may not exceed the server's
/// pagination maximum; `offset` skips that many records first.
pub fn get_nodes(
    node_type: &str,
    filter: &NodeFilter,
    limit: Option<u64>,
    offset: u64,
) -> Result<Vec<Value>> {
    check_type(node_type, Collection::Node)?;
    let upper_limit = http::get_pagination_limit()?;
    http::check_pagination_limit(limit, upper_limit)?;

    let mut params = filter_params(filter);
    params.push(("offset", offset.to_string()));
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }

    let url = format!("{}/{node_type}/attributes/json", config::url_base()?);
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Iterates over every node of the given type without manual offset
/// handling. Pages are fetched lazily at the server's pagination maximum.
pub fn iter_nodes(node_type: &str, filter: &NodeFilter) -> Result<RecordIter> {
    check_type(node_type, Collection::Node)?;
    let upper_limit = http::get_pagination_limit()?;
    let url = format!("{}/{node_type}/attributes/json", config::url_base()?);
    Ok(RecordIter::new(url, filter_params(filter), upper_limit, true))
}

/// Returns one page of edges of the given type.
pub fn get_edges(edge_type: &str, limit: Option<u64>, offset: Option<u64>) -> Result<Vec<Value>> {
    check_type(edge_type, Collection::Edge)?;

    let mut params = Vec::new();
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset", offset.to_string()));
    }

    let url = format!("{}/{edge_type}/all", config::url_base()?);
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Iterates over every edge of the given type without manual offset
/// handling. Pages are fetched lazily at the server's pagination maximum.
pub fn iter_edges(edge_type: &str) -> Result<RecordIter> {
    check_type(edge_type, Collection::Edge)?;
    let upper_limit = http::get_pagination_limit()?;
    let url = format!("{}/{edge_type}/all", config::url_base()?);
    Ok(RecordIter::new(url, Vec::new(), upper_limit, true))
}
