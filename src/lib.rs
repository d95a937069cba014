//! # Cable Core
//!
//! Parsing and semantic validation for the NWF wire-harness description
//! format.
//!
//! This library provides:
//! - A tokenizer and recursive-descent parser for NWF statements
//!   (wire spools, connectors with pins, wires between connector pins)
//! - Inline semantic validation: namespaced id uniqueness, per-list
//!   parameter uniqueness, and no forward references in wire endpoints
//! - A plain entity store, [`Harness`], returned as the parse result
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - [`dsl`] - Lexer and parser for the NWF grammar
//! - [`harness`] - Entity tables and the statement-commit layer
//! - [`error`] - Unified error type with the stable message formats
//!
//! ## Usage
//!
//! The core performs no I/O: the caller supplies the whole document text
//! and receives the tables, or the first error in document order.
//!
//! ```
//! use cable_core::parse;
//!
//! let harness = parse(
//!     "new wire_spool hookup22 parameter awg 22 ! 600V rated
//!      new connector J1 pin tip pin sleeve
//!      new connector J2 pin tip pin sleeve
//!      new wire W1 hookup22 attach J1 tip J2 tip",
//! )
//! .unwrap();
//!
//! assert_eq!(harness.spools["hookup22"].params["awg"].text(), "22");
//! assert_eq!(harness.wires["W1"].to.connector, "J2");
//! ```
//!
//! A parser instance carries no global state, so independent documents
//! can be parsed concurrently by simply calling [`parse`] from multiple
//! threads.

pub mod dsl;
pub mod error;
pub mod harness;

// Re-export main types for convenience
pub use dsl::parse;
pub use error::{CableError, RedefKind, Result};
pub use harness::{Connector, Endpoint, Harness, ParamMap, Spool, Value, Wire};
