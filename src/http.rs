//! Shared HTTP layer: one blocking client, bounded retry for GETs,
//! response checking, and the pagination machinery.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const RETRY_STATUS: [u16; 5] = [429, 500, 502, 503, 504];
const MAX_RETRIES: u32 = 3;
const PAGINATION_CACHE_TTL: Duration = Duration::from_secs(10);

fn client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("TLS backend unavailable")
    })
}

/// GET with the configured API key attached. Transient failures (connect
/// errors, 429/5xx) are retried up to [`MAX_RETRIES`] times with doubling
/// backoff; anything else is returned as-is for the caller to check.
pub(crate) fn get(url: &str, params: &[(&str, String)]) -> Result<Response> {
    let mut attempt: u32 = 0;
    loop {
        let mut request = client().get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(key) = config::api_key() {
            request = request.header("x-api-key", key);
        }
        tracing::debug!(target: "nedrex::http", %url, attempt, "GET");

        let outcome = request.send();
        let transient = match &outcome {
            Ok(resp) => RETRY_STATUS.contains(&resp.status().as_u16()),
            Err(err) => err.is_connect() || err.is_timeout(),
        };
        if !transient || attempt >= MAX_RETRIES {
            return Ok(outcome?);
        }

        attempt += 1;
        let backoff = Duration::from_secs(1 << (attempt - 1));
        tracing::warn!(target: "nedrex::http", %url, attempt, ?backoff, "retrying GET");
        thread::sleep(backoff);
    }
}

/// POST a JSON body with the configured API key attached. Not retried.
pub(crate) fn post_json<T: Serialize + ?Sized>(url: &str, body: &T) -> Result<Response> {
    let mut request = client().post(url).json(body);
    if let Some(key) = config::api_key() {
        request = request.header("x-api-key", key);
    }
    tracing::debug!(target: "nedrex::http", %url, "POST");
    Ok(request.send()?)
}

/// POST a multipart form with the configured API key attached. Not retried.
pub(crate) fn post_multipart(url: &str, form: Form) -> Result<Response> {
    let mut request = client().post(url).multipart(form);
    if let Some(key) = config::api_key() {
        request = request.header("x-api-key", key);
    }
    tracing::debug!(target: "nedrex::http", %url, "POST (multipart)");
    Ok(request.send()?)
}

/// Maps the API's error statuses onto [`Error`] and decodes the body as JSON.
pub(crate) fn check_response(resp: Response) -> Result<Value> {
    let resp = check_status(resp)?;
    Ok(resp.json()?)
}

/// Maps the API's error statuses onto [`Error`] and returns the body as text.
pub(crate) fn check_response_text(resp: Response) -> Result<String> {
    let resp = check_status(resp)?;
    Ok(resp.text()?)
}

fn check_status(resp: Response) -> Result<Response> {
    match resp.status().as_u16() {
        401 => {
            let data: Value = resp.json()?;
            let detail = detail_message(&data);
            if detail == "An API key is required to access the requested data" {
                Err(Error::Config("no API key set in the configuration".to_string()))
            } else {
                Err(Error::Api(detail))
            }
        }
        102 | 400 | 422 => {
            let data: Value = resp.json()?;
            Err(Error::Api(detail_message(&data)))
        }
        404 => Err(Error::NotFound),
        _ => Ok(resp),
    }
}

fn detail_message(data: &Value) -> String {
    match data.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => data.to_string(),
    }
}

/// Queries the maximum page size the server will honour (`/pagination_max`).
///
/// The value is cached per base URL for a short interval so that the paging
/// helpers, which consult it once per collection walk, do not turn it into
/// a request per page.
pub fn get_pagination_limit() -> Result<u64> {
    static CACHE: OnceLock<Mutex<HashMap<String, (Instant, u64)>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let base = config::url_base()?;

    {
        let cached = cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((fetched_at, limit)) = cached.get(&base) {
            if fetched_at.elapsed() < PAGINATION_CACHE_TTL {
                return Ok(*limit);
            }
        }
    }

    let resp = get(&format!("{base}/pagination_max"), &[])?;
    let limit: u64 = serde_json::from_value(check_response(resp)?)?;
    cache
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .insert(base, (Instant::now(), limit));
    Ok(limit)
}

pub(crate) fn check_pagination_limit(limit: Option<u64>, upper_limit: u64) -> Result<()> {
    if let Some(limit) = limit {
        if limit > upper_limit {
            return Err(Error::Api(format!(
                "limit={limit} is too great (maximum is {upper_limit})"
            )));
        }
    }
    Ok(())
}

/// GET `{url_base}{route}?uid=...` — the status lookup shared by every job
/// route family.
pub(crate) fn job_status(route: &str, uid: &str) -> Result<Value> {
    let url = format!("{}{route}", config::url_base()?);
    let resp = get(&url, &[("uid", uid.to_string())])?;
    check_response(resp)
}

/// GET `{url_base}{route}?uid=...` and return the body as text — the result
/// download shared by the analysis job families.
pub(crate) fn job_download(route: &str, uid: &str) -> Result<String> {
    let url = format!("{}{route}", config::url_base()?);
    let resp = get(&url, &[("uid", uid.to_string())])?;
    check_response_text(resp)
}

/// Downloads `url` to `target`, forwarding the API key header.
pub(crate) fn download(url: &str, target: &Path) -> Result<()> {
    let mut resp = get(url, &[])?;
    if resp.status() == StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }
    if !resp.status().is_success() {
        return Err(Error::Api(format!(
            "unexpected status {} downloading {url}",
            resp.status()
        )));
    }
    let mut file = File::create(target)?;
    resp.copy_to(&mut file)?;
    Ok(())
}

/// Lazy pagination over a collection or association route.
///
/// Fetches one page of `page_size` records at a time and yields them
/// individually. Collection routes stop as soon as a page comes back
/// shorter than requested; association routes only report exhaustion with
/// an empty page, so they keep paging until one arrives. After an error is
/// yielded the iterator is fused.
pub struct RecordIter {
    url: String,
    params: Vec<(&'static str, String)>,
    page_size: u64,
    offset: u64,
    stop_on_short_page: bool,
    buffer: std::vec::IntoIter<Value>,
    done: bool,
}

impl RecordIter {
    pub(crate) fn new(
        url: String,
        params: Vec<(&'static str, String)>,
        page_size: u64,
        stop_on_short_page: bool,
    ) -> Self {
        Self {
            url,
            params,
            page_size,
            offset: 0,
            stop_on_short_page,
            buffer: Vec::new().into_iter(),
            done: false,
        }
    }

    fn fetch_page(&self) -> Result<Vec<Value>> {
        let mut params = self.params.clone();
        params.push(("limit", self.page_size.to_string()));
        params.push(("offset", self.offset.to_string()));
        let resp = get(&self.url, &params)?;
        Ok(serde_json::from_value(check_response(resp)?)?)
    }
}

impl Iterator for RecordIter {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }
            match self.fetch_page() {
                Ok(page) => {
                    let short = (page.len() as u64) < self.page_size;
                    if page.is_empty() || (short && self.stop_on_short_page) {
                        self.done = true;
                    }
                    self.offset += self.page_size;
                    self.buffer = page.into_iter();
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_within_maximum_is_accepted() {
        assert!(check_pagination_limit(None, 10_000).is_ok());
        assert!(check_pagination_limit(Some(10_000), 10_000).is_ok());
    }

    #[test]
    fn test_limit_above_maximum_is_rejected() {
        let err = check_pagination_limit(Some(10_001), 10_000).unwrap_err();
        assert!(err.to_string().contains("limit=10001 is too great"));
    }

    #[test]
    fn test_detail_message_variants() {
        assert_eq!(detail_message(&json!({"detail": "nope"})), "nope");
        assert_eq!(detail_message(&json!({"detail": 42})), "42");
        assert_eq!(detail_message(&json!({"other": 1})), r#"{"other":1}"#);
    }
}
