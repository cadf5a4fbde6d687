//! Variant routes: variant-disorder and variant-gene associations.

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::http::{self, RecordIter};

/// Filter options for variant-disorder association retrieval. The default
/// applies the server's own defaults: no ID filtering, high-confidence
/// review statuses, and pathogenic effects.
#[derive(Debug, Clone, Default)]
pub struct VariantDisorderFilter {
    /// Variant IDs to filter on. `None` applies no variant filtering.
    pub variant_ids: Option<Vec<String>>,

    /// Disorder IDs to filter on. `None` applies no disorder filtering.
    pub disorder_ids: Option<Vec<String>>,

    /// Review statuses to filter on. `None` keeps only "practice
    /// guideline" and "reviewed by expert panel" associations.
    pub review_status: Option<Vec<String>>,

    /// Effect values to filter on. `None` keeps only pathogenic and
    /// likely-pathogenic associations.
    pub effect: Option<Vec<String>>,
}

/// Filter options for variant-gene association retrieval. The default
/// filters nothing.
#[derive(Debug, Clone, Default)]
pub struct VariantGeneFilter {
    /// Variant IDs to filter on. `None` applies no variant filtering.
    pub variant_ids: Option<Vec<String>>,

    /// Gene IDs to filter on. `None` applies no gene filtering.
    pub gene_ids: Option<Vec<String>>,
}

fn extend_repeated(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    values: &Option<Vec<String>>,
) {
    if let Some(values) = values {
        params.extend(values.iter().map(|value| (key, value.clone())));
    }
}

/// Gets the possible values of the `effect` attribute on variant-disorder
/// associations.
pub fn get_effect_choices() -> Result<Vec<String>> {
    let url = format!("{}/variants/get_effect_choices", config::url_base()?);
    let resp = http::get(&url, &[])?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Gets the possible values of the `reviewStatus` attribute on
/// variant-disorder associations.
pub fn get_review_status_choices() -> Result<Vec<String>> {
    let url = format!("{}/variants/get_review_choices", config::url_base()?);
    let resp = http::get(&url, &[])?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

fn variant_disorder_params(filter: &VariantDisorderFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    extend_repeated(&mut params, "variant_id", &filter.variant_ids);
    extend_repeated(&mut params, "disorder_id", &filter.disorder_ids);
    extend_repeated(&mut params, "review_status", &filter.review_status);
    extend_repeated(&mut params, "effect", &filter.effect);
    params
}

/// Returns one page of variant-disorder associations. `limit` defaults to
/// the server's pagination maximum and may not exceed it.
pub fn get_variant_disorder_associations(
    filter: &VariantDisorderFilter,
    limit: Option<u64>,
    offset: u64,
) -> Result<Vec<Value>> {
    let upper_limit = http::get_pagination_limit()?;
    http::check_pagination_limit(limit, upper_limit)?;

    let mut params = variant_disorder_params(filter);
    params.push(("limit", limit.unwrap_or(upper_limit).to_string()));
    params.push(("offset", offset.to_string()));

    let url = format!(
        "{}/variants/get_variant_disorder_associations",
        config::url_base()?
    );
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Iterates over all variant-disorder associations matching the filter.
pub fn iter_variant_disorder_associations(
    filter: &VariantDisorderFilter,
) -> Result<RecordIter> {
    let upper_limit = http::get_pagination_limit()?;
    let url = format!(
        "{}/variants/get_variant_disorder_associations",
        config::url_base()?
    );
    Ok(RecordIter::new(
        url,
        variant_disorder_params(filter),
        upper_limit,
        false,
    ))
}

fn variant_gene_params(filter: &VariantGeneFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    extend_repeated(&mut params, "variant_id", &filter.variant_ids);
    extend_repeated(&mut params, "gene_id", &filter.gene_ids);
    params
}

/// Returns one page of variant-gene associations. `limit` defaults to the
/// server's pagination maximum and may not exceed it.
pub fn get_variant_gene_associations(
    filter: &VariantGeneFilter,
    limit: Option<u64>,
    offset: u64,
) -> Result<Vec<Value>> {
    let upper_limit = http::get_pagination_limit()?;
    http::check_pagination_limit(limit, upper_limit)?;

    let mut params = variant_gene_params(filter);
    params.push(("limit", limit.unwrap_or(upper_limit).to_string()));
    params.push(("offset", offset.to_string()));

    let url = format!(
        "{}/variants/get_variant_gene_associations",
        config::url_base()?
    );
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Iterates over all variant-gene associations matching the filter.
pub fn iter_variant_gene_associations(filter: &VariantGeneFilter) -> Result<RecordIter> {
    let upper_limit = http::get_pagination_limit()?;
    let url = format!(
        "{}/variants/get_variant_gene_associations",
        config::url_base()?
    );
    Ok(RecordIter::new(
        url,
        variant_gene_params(filter),
        upper_limit,
        false,
    ))
}

/// Gets genes associated with a disorder through variant relations.
pub fn get_variant_based_disorder_associated_genes(
    disorder_id: &str,
    review_status: Option<&[String]>,
    effect: Option<&[String]>,
) -> Result<Vec<String>> {
    let mut params = vec![("disorder_id", disorder_id.to_string())];
    extend_repeated(
        &mut params,
        "review_status",
        &review_status.map(<[String]>::to_vec),
    );
    extend_repeated(&mut params, "effect", &effect.map(<[String]>::to_vec));

    let url = format!(
        "{}/variants/variant_based_disorder_associated_genes",
        config::url_base()?
    );
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Gets disorders associated with a gene through variant relations.
pub fn get_variant_based_gene_associated_disorders(
    gene_id: &str,
    review_status: Option<&[String]>,
    effect: Option<&[String]>,
) -> Result<Vec<String>> {
    let mut params = vec![("gene_id", gene_id.to_string())];
    extend_repeated(
        &mut params,
        "review_status",
        &review_status.map(<[String]>::to_vec),
    );
    extend_repeated(&mut params, "effect", &effect.map(<[String]>::to_vec));

    let url = format!(
        "{}/variants/variant_based_gene_associated_disorders",
        config::url_base()?
    );
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disorder_filter_params_in_order() {
        let filter = VariantDisorderFilter {
            variant_ids: Some(vec!["clinvar.12345".to_string()]),
            effect: Some(vec!["Pathogenic".to_string()]),
            ..Default::default()
        };
        let params = variant_disorder_params(&filter);
        assert_eq!(
            params,
            vec![
                ("variant_id", "clinvar.12345".to_string()),
                ("effect", "Pathogenic".to_string()),
            ]
        );
    }
}
