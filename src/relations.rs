//! Relation lookups between genes, proteins, drugs, and disorders.
//!
//! Inputs may be given with or without their namespace prefix (`entrez.`,
//! `mondo.`, `uniprot.`); the prefix is added where missing. Keys in the
//! returned maps come back from the server without prefixes.

use std::collections::HashMap;

use crate::config;
use crate::error::Result;
use crate::http;

fn with_prefix(items: &[&str], prefix: &str) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            if item.starts_with(prefix) {
                item.to_string()
            } else {
                format!("{prefix}{item}")
            }
        })
        .collect()
}

fn with_entrez_prefix(genes: &[&str]) -> Vec<String> {
    let lowered: Vec<String> = genes.iter().map(|gene| gene.to_lowercase()).collect();
    let refs: Vec<&str> = lowered.iter().map(String::as_str).collect();
    with_prefix(&refs, "entrez.")
}

fn relation_lookup(
    route: &str,
    key: &'static str,
    values: Vec<String>,
) -> Result<HashMap<String, Vec<String>>> {
    let url = format!("{}/relations/{route}", config::url_base()?);
    let params: Vec<(&str, String)> = values.into_iter().map(|value| (key, value)).collect();
    let resp = http::get(&url, &params)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Maps Entrez gene IDs to the proteins they encode.
pub fn get_encoded_proteins(gene_list: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    relation_lookup(
        "get_encoded_proteins",
        "gene",
        with_entrez_prefix(gene_list),
    )
}

/// Maps MONDO disorder IDs to the drugs indicated for them.
pub fn get_drugs_indicated_for_disorders(
    disorder_list: &[&str],
) -> Result<HashMap<String, Vec<String>>> {
    relation_lookup(
        "get_drugs_indicated_for_disorders",
        "disorder",
        with_prefix(disorder_list, "mondo."),
    )
}

/// Maps UniProt protein IDs to the drugs that target them.
pub fn get_drugs_targetting_proteins(
    protein_list: &[&str],
) -> Result<HashMap<String, Vec<String>>> {
    relation_lookup(
        "get_drugs_targetting_proteins",
        "protein",
        with_prefix(protein_list, "uniprot."),
    )
}

/// Maps Entrez gene IDs to the drugs that target their protein products.
pub fn get_drugs_targetting_gene_products(
    gene_list: &[&str],
) -> Result<HashMap<String, Vec<String>>> {
    relation_lookup(
        "get_drugs_targetting_gene_products",
        "gene",
        with_entrez_prefix(gene_list),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_added_when_missing() {
        assert_eq!(
            with_prefix(&["0005148", "mondo.0005149"], "mondo."),
            vec!["mondo.0005148", "mondo.0005149"]
        );
    }

    #[test]
    fn test_entrez_prefix_lowercases() {
        assert_eq!(
            with_entrez_prefix(&["1080", "ENTREZ.348"]),
            vec!["entrez.1080", "entrez.348"]
        );
    }
}
