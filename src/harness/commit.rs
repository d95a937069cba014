//! Semantic-action layer: commits recognized statements to the harness.
//!
//! Each commit validates uniqueness and reference invariants at the
//! moment its statement is consumed. Within one statement the order is
//! fixed: own parameter keys, then pin ids (each pin's own parameters
//! first), then the entity id; for wires the id, then the source
//! endpoint, then the destination. The first failing check aborts and
//! nothing from the failing statement is stored.

use std::collections::HashMap;

use crate::dsl::ast::{ConnectorDef, ParamDef, PinDef, SpoolDef, WireDef};
use crate::error::{CableError, RedefKind, Result};

use super::{Connector, Endpoint, Harness, ParamMap, Spool, Wire};

impl Harness {
    /// Commit a `new wire_spool` statement.
    pub fn commit_spool(&mut self, def: SpoolDef) -> Result<()> {
        let params = collect_params(def.params)?;
        if self.spools.contains_key(&def.id) {
            return Err(CableError::redefinition(RedefKind::Spool, def.id, def.line));
        }
        self.spools.insert(def.id, Spool { params });
        Ok(())
    }

    /// Commit a `new connector` statement.
    pub fn commit_connector(&mut self, def: ConnectorDef) -> Result<()> {
        let params = collect_params(def.params)?;
        let pins = collect_pins(def.pins)?;
        if self.connectors.contains_key(&def.id) {
            return Err(CableError::redefinition(
                RedefKind::Connector,
                def.id,
                def.line,
            ));
        }
        self.connectors.insert(def.id, Connector { params, pins });
        Ok(())
    }

    /// Commit a `new wire` statement. Both endpoints must already be
    /// declared; forward references are rejected.
    pub fn commit_wire(&mut self, def: WireDef) -> Result<()> {
        if self.wires.contains_key(&def.id) {
            return Err(CableError::redefinition(RedefKind::Wire, def.id, def.line));
        }
        self.check_endpoint(&def.from_conn, &def.from_pin, def.line)?;
        self.check_endpoint(&def.to_conn, &def.to_pin, def.line)?;
        self.wires.insert(
            def.id,
            Wire {
                wire_type: def.wire_type,
                from: Endpoint {
                    connector: def.from_conn,
                    pin: def.from_pin,
                },
                to: Endpoint {
                    connector: def.to_conn,
                    pin: def.to_pin,
                },
            },
        );
        Ok(())
    }

    fn check_endpoint(&self, connector: &str, pin: &str, line: usize) -> Result<()> {
        let conn = self
            .connectors
            .get(connector)
            .ok_or_else(|| CableError::undefined_connector(connector, line))?;
        if !conn.pins.contains_key(pin) {
            return Err(CableError::undefined_pin(pin, connector, line));
        }
        Ok(())
    }
}

/// Collapse an ordered parameter list into a map, rejecting a duplicate
/// key at the line of its second occurrence.
fn collect_params(defs: Vec<ParamDef>) -> Result<ParamMap> {
    let mut params = ParamMap::new();
    for p in defs {
        if params.contains_key(&p.key) {
            return Err(CableError::redefinition(RedefKind::Parameter, p.key, p.line));
        }
        params.insert(p.key, p.value);
    }
    Ok(params)
}

/// Collapse a pin list into a map keyed by pin id. Each pin's own
/// parameter list is built before its id is checked against earlier pins.
fn collect_pins(defs: Vec<PinDef>) -> Result<HashMap<String, ParamMap>> {
    let mut pins = HashMap::new();
    for pin in defs {
        let params = collect_params(pin.params)?;
        if pins.contains_key(&pin.id) {
            return Err(CableError::redefinition(RedefKind::Pin, pin.id, pin.line));
        }
        pins.insert(pin.id, params);
    }
    Ok(pins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Value;

    fn param(key: &str, value: &str, line: usize) -> ParamDef {
        ParamDef {
            key: key.to_string(),
            value: Value::Ident(value.to_string()),
            line,
        }
    }

    fn pin(id: &str, params: Vec<ParamDef>, line: usize) -> PinDef {
        PinDef {
            id: id.to_string(),
            params,
            line,
        }
    }

    fn wire(id: &str, from: (&str, &str), to: (&str, &str), line: usize) -> WireDef {
        WireDef {
            id: id.to_string(),
            wire_type: "t".to_string(),
            from_conn: from.0.to_string(),
            from_pin: from.1.to_string(),
            to_conn: to.0.to_string(),
            to_pin: to.1.to_string(),
            line,
        }
    }

    fn connector_with_pins(harness: &mut Harness, id: &str, pins: &[&str]) {
        harness
            .commit_connector(ConnectorDef {
                id: id.to_string(),
                params: Vec::new(),
                pins: pins.iter().map(|p| pin(p, Vec::new(), 1)).collect(),
                line: 1,
            })
            .unwrap();
    }

    #[test]
    fn test_duplicate_param_reports_second_line() {
        let err = collect_params(vec![
            param("color", "red", 2),
            param("awg", "22", 3),
            param("color", "blue", 4),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "Line 4: Redefinition of Parameter color");
    }

    #[test]
    fn test_pin_params_checked_before_pin_id() {
        // The second P1 has a duplicate key of its own; that fires before
        // the pin-id clash is ever examined.
        let err = collect_pins(vec![
            pin("P1", vec![param("pos", "1", 2)], 2),
            pin("P1", vec![param("pos", "1", 3), param("pos", "2", 4)], 3),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "Line 4: Redefinition of Parameter pos");
    }

    #[test]
    fn test_own_params_checked_before_pins() {
        let mut harness = Harness::new();
        let err = harness
            .commit_connector(ConnectorDef {
                id: "C1".to_string(),
                params: vec![param("color", "red", 2), param("color", "blue", 3)],
                pins: vec![pin("P1", Vec::new(), 4), pin("P1", Vec::new(), 5)],
                line: 1,
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Line 3: Redefinition of Parameter color");
    }

    #[test]
    fn test_wire_id_checked_before_endpoints() {
        let mut harness = Harness::new();
        connector_with_pins(&mut harness, "C1", &["P1"]);
        connector_with_pins(&mut harness, "C2", &["P2"]);
        harness
            .commit_wire(wire("W1", ("C1", "P1"), ("C2", "P2"), 3))
            .unwrap();
        // Same id with nonsense endpoints: the redefinition wins
        let err = harness
            .commit_wire(wire("W1", ("X", "Y"), ("Z", "Q"), 4))
            .unwrap_err();
        assert_eq!(err.to_string(), "Line 4: Redefinition of Wire W1");
    }

    #[test]
    fn test_failing_statement_commits_nothing() {
        let mut harness = Harness::new();
        connector_with_pins(&mut harness, "C1", &["P1"]);
        let err = harness
            .commit_wire(wire("W1", ("C1", "P1"), ("C9", "P9"), 2))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 2: Bad wire definition, undefined connector C9"
        );
        assert!(harness.wires.is_empty());
    }

    #[test]
    fn test_independent_id_namespaces() {
        let mut harness = Harness::new();
        harness
            .commit_spool(SpoolDef {
                id: "main".to_string(),
                params: Vec::new(),
                line: 1,
            })
            .unwrap();
        // A connector may reuse a spool's name
        connector_with_pins(&mut harness, "main", &["P1"]);
        assert!(harness.spools.contains_key("main"));
        assert!(harness.connectors.contains_key("main"));
    }
}
