//! Core types for the formosa TAIFEX futures statistics client.
//!
//! This crate provides the fundamental data structures shared across the
//! formosa workspace:
//!
//! - [`DateRange`] - The query window submitted to the exchange
//! - [`StatsTable`] - Parsed contract statistics rows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/formosa-rs/formosa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod table;

pub use date_range::DateRange;
pub use table::StatsTable;
