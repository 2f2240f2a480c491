//! HTTP client and response classification for the formosa TAIFEX futures
//! statistics client.
//!
//! This crate provides the query pipeline:
//!
//! - [`form`] - The endpoint URL and form contract
//! - [`QueryClient`] - HTTP client with connection pooling
//! - [`parse_body`] - CSV / alert body classification
//! - [`FetchError`] - The outcome taxonomy for a single fetch

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/formosa-rs/formosa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod form;
mod parse;

pub use client::{ClientConfig, QueryClient};
pub use error::{FetchError, Result};
pub use parse::parse_body;
