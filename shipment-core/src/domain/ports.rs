use std::{collections::HashMap, sync::OnceLock};

use serde::Deserialize;

static PORT_COORDINATES: OnceLock<HashMap<String, Coordinates>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named port of the embedded directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Port {
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// Exact-match lookup against the port directory. An unrecognized name is
/// not an error, it yields `None`.
pub fn port_coordinates(name: &str) -> Option<Coordinates> {
    PORT_COORDINATES.get_or_init(load_ports).get(name).copied()
}

fn load_ports() -> HashMap<String, Coordinates> {
    let ports: Vec<Port> = serde_json::from_str(include_str!("../ports.json")).unwrap();
    ports
        .into_iter()
        .map(|p| (p.name, p.coordinates))
        .collect()
}
