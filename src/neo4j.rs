//! Direct cypher access to a Neo4j-backed NeDRex instance.

use std::io::{BufRead, BufReader, Lines};

use reqwest::blocking::Response;
use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};
use crate::http;

/// Runs a cypher query, returning a lazy iterator over the result records.
///
/// The server streams one JSON array of records per line; records are
/// yielded individually as the lines arrive.
pub fn neo4j_query(query: &str) -> Result<Neo4jRecords> {
    let url = format!("{}/neo4j/query", config::url_base()?);
    let resp = http::get(&url, &[("query", query.to_string())])?;
    if !resp.status().is_success() {
        return Err(Error::Api(format!(
            "querying Neo4j returned status {}",
            resp.status()
        )));
    }
    Ok(Neo4jRecords {
        lines: BufReader::new(resp).lines(),
        buffer: Vec::new().into_iter(),
        done: false,
    })
}

/// Streaming iterator over cypher query results. Fused after the first
/// error; a truncated stream surfaces as an error item.
pub struct Neo4jRecords {
    lines: Lines<BufReader<Response>>,
    buffer: std::vec::IntoIter<Value>,
    done: bool,
}

impl Iterator for Neo4jRecords {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }
            match self.lines.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(Error::Api(format!(
                        "cypher query could not be executed: {err}"
                    ))));
                }
                Some(Ok(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<Vec<Value>>(&line) {
                        Ok(records) => self.buffer = records.into_iter(),
                        Err(err) => {
                            self.done = true;
                            return Some(Err(err.into()));
                        }
                    }
                }
            }
        }
    }
}
