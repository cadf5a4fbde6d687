//! Blocking client for the NeDRex drug-repurposing platform API.
//!
//! Configure the base URL (and API key, where the instance requires one)
//! once via [`config`], then call the route functions. Records returned by
//! the API are opaque JSON ([`serde_json::Value`]); the server owns the
//! schema.
//!
//! ```no_run
//! nedrex::config::set_url_base("https://api.nedrex.net");
//!
//! for node in nedrex::core::iter_nodes("drug", &Default::default())? {
//!     let node = node?;
//!     println!("{}", node["primaryDomainId"]);
//! }
//! # Ok::<(), nedrex::Error>(())
//! ```

pub mod bicon;
pub mod closeness;
pub mod comorbiditome;
pub mod config;
pub mod core;
pub mod diamond;
pub mod disorder;
pub mod domino;
pub mod error;
pub mod graph;
mod http;
pub mod kpm;
pub mod must;
pub mod neo4j;
pub mod ppi;
pub mod relations;
pub mod robust;
pub mod static_data;
pub mod trustrank;
pub mod validation;
pub mod variants;
pub mod vpd;

pub use error::{Error, Result};
pub use http::{get_pagination_limit, RecordIter};
