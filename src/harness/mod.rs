//! Harness entity tables and the semantic-action layer that fills them.
//!
//! The [`Harness`] struct is the parse result: three mappings for spools,
//! connectors, and wires. The commit methods in this module are the only
//! way entries get in, and they enforce the format's uniqueness and
//! reference invariants as each statement is consumed.

mod commit;
mod types;

pub use types::{Connector, Endpoint, Harness, ParamMap, Spool, Value, Wire};
