//! Validation routes for disease modules and drug lists computed by
//! NeDRex algorithms.

use serde_json::{json, Value};

use crate::config;
use crate::error::{Error, Result};
use crate::http;

fn check_module_member_type(module_member_type: &str) -> Result<()> {
    if module_member_type != "gene" && module_member_type != "protein" {
        return Err(Error::Api(format!(
            "module_member_type {module_member_type:?} is invalid (should be 'gene' or 'protein')"
        )));
    }
    Ok(())
}

/// Joint validation of a disease module and a drug list. Returns the UID
/// of the validation job.
pub fn joint_validation_submit(
    module_members: &[String],
    module_member_type: &str,
    test_drugs: &[String],
    true_drugs: &[String],
    permutations: u32,
    only_approved_drugs: bool,
) -> Result<String> {
    check_module_member_type(module_member_type)?;

    let url = format!("{}/validation/joint", config::url_base()?);
    let body = json!({
        "module_members": module_members,
        "module_member_type": module_member_type,
        "test_drugs": test_drugs,
        "true_drugs": true_drugs,
        "permutations": permutations,
        "only_approved_drugs": only_approved_drugs,
    });
    let resp = http::post_json(&url, &body)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Validation of a disease module against known indicated drugs. Returns
/// the UID of the validation job.
pub fn module_validation_submit(
    module_members: &[String],
    module_member_type: &str,
    true_drugs: &[String],
    permutations: u32,
    only_approved_drugs: bool,
) -> Result<String> {
    check_module_member_type(module_member_type)?;

    let url = format!("{}/validation/module", config::url_base()?);
    let body = json!({
        "module_members": module_members,
        "module_member_type": module_member_type,
        "true_drugs": true_drugs,
        "permutations": permutations,
        "only_approved_drugs": only_approved_drugs,
    });
    let resp = http::post_json(&url, &body)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Validation of a predicted drug list against known indicated drugs.
/// Returns the UID of the validation job.
pub fn drug_validation_submit(
    test_drugs: &[String],
    true_drugs: &[String],
    permutations: u32,
    only_approved_drugs: bool,
) -> Result<String> {
    let url = format!("{}/validation/drug", config::url_base()?);
    let body = json!({
        "test_drugs": test_drugs,
        "true_drugs": true_drugs,
        "permutations": permutations,
        "only_approved_drugs": only_approved_drugs,
    });
    let resp = http::post_json(&url, &body)?;
    Ok(serde_json::from_value(http::check_response(resp)?)?)
}

/// Returns the details of a validation job; its state is under the
/// `status` key.
pub fn check_validation_status(uid: &str) -> Result<Value> {
    http::job_status("/validation/status", uid)
}
