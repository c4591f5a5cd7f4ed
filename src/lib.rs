//! # payload-utils
//!
//! A small async utility toolkit built around JSON payloads:
//!
//! - **Nested access** — walk a [`serde_json::Value`] by an ordered key path
//! - **Fetching** — HTTP GET a URL and parse the body as JSON, behind an
//!   injectable transport trait
//! - **Memoization** — a per-instance lazy cell whose computation runs at
//!   most once
//! - **Runtime measurement** — time four concurrent async collection runs
//!
//! The four components are independent leaves; none depends on another.
//!
//! ## Example
//!
//! ```rust
//! use payload_utils::access::access_nested_map;
//! use serde_json::json;
//!
//! let nested = json!({"a": {"b": 2}});
//! let value = access_nested_map(&nested, &["a", "b"]).unwrap();
//! assert_eq!(*value, json!(2));
//! ```

/// Nested JSON map traversal by key path.
pub mod access;
/// Unified error types.
pub mod error;
/// JSON fetching over an injectable HTTP transport.
pub mod fetch;
/// Per-instance lazy memoization cell.
pub mod memoize;
/// Concurrent async generation and wall-clock measurement.
pub mod runtime;

pub use access::{access_nested_map, AccessError};
pub use error::PayloadUtilsError;
pub use fetch::{get_json, get_json_with, FetchError, HttpTransport, ReqwestTransport};
pub use memoize::Memoized;
pub use runtime::{async_comprehension, async_generator, measure_runtime, measure_runtime_with};
