//! countries-cli
//! =============
//!
//! Command-line interface for the `countries-core` reference dataset.
//!
//! This crate primarily provides a binary (`countries`). The small library
//! target exists so that docs.rs renders a documentation page with this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! countries --help
//! countries stats
//! countries country US
//! countries name Polonia
//! countries subdivisions US
//! countries currency NO
//! countries check
//! ```
//!
//! For programmatic access use the `countries-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
