//! Rust client for TAIFEX Mini-TAIEX futures contract statistics.
//!
//! This is a facade crate that re-exports functionality from the formosa
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use formosa_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QueryClient::with_defaults()?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2019, 1, 31).unwrap(),
//!     );
//!
//!     match client.fetch_contract_stats(range).await {
//!         Ok(table) => println!("Fetched {} rows", table.len()),
//!         Err(e) if e.is_no_data() => println!("No data for {range}"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/formosa-rs/formosa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use formosa_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use formosa_fetch::{ClientConfig, FetchError, QueryClient, Result, form, parse_body};

/// Prelude module for convenient imports.
///
/// ```
/// use formosa_lib::prelude::*;
/// ```
pub mod prelude {
    pub use formosa_types::{DateRange, StatsTable};

    #[cfg(feature = "fetch")]
    pub use formosa_fetch::{ClientConfig, FetchError, QueryClient, Result};
}
