//! Arrival-time estimation for container shipments.
//!
//! Pure functions over the embedded port directory, no I/O and no state.
//! The estimate is a heuristic: great-circle distance at an average cruising
//! speed, a fixed port-operations buffer, and a route-dependent delay
//! multiplier.

use chrono::{DateTime, Duration, Utc};

use crate::domain::port_coordinates;

/// Average container-ship cruising speed in knots.
pub const AVERAGE_SHIP_SPEED_KNOTS: f64 = 14.0;
/// Fixed overhead for loading, unloading and customs.
pub const PORT_OPERATIONS_BUFFER_HOURS: f64 = 36.0;
/// Substituted when the distance of a route cannot be resolved.
pub const DEFAULT_ROUTE_DISTANCE_NM: f64 = 5000.0;

const EARTH_RADIUS_NM: f64 = 3440.065;
const FALLBACK_TRANSIT_DAYS: i64 = 14;

/// Great-circle distance between two coordinates in nautical miles using the
/// haversine formula.
///
/// Symmetric and non-negative, zero exactly when the coordinates coincide.
/// The formula is total over finite inputs, coordinates outside the usual
/// degree ranges produce a mathematically well-defined if geographically
/// meaningless result.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Estimated arrival time for a shipment departing at `departure`.
///
/// A `known_distance` of `0.0` means unset, the distance is then resolved
/// from the port directory. Routes with an unknown port resolve to zero and
/// fall back to [`DEFAULT_ROUTE_DISTANCE_NM`]. Note that a route between
/// identical ports legitimately resolves to zero and takes the same
/// fallback, the two cases are indistinguishable by design.
///
/// Never fails: any non-finite intermediate value or timestamp overflow
/// collapses to `departure + 14 days`.
pub fn estimate_eta(
    origin_port: &str,
    destination_port: &str,
    departure: DateTime<Utc>,
    known_distance: f64,
) -> DateTime<Utc> {
    try_estimate_eta(origin_port, destination_port, departure, known_distance)
        .unwrap_or_else(|| fallback_eta(departure))
}

fn try_estimate_eta(
    origin_port: &str,
    destination_port: &str,
    departure: DateTime<Utc>,
    known_distance: f64,
) -> Option<DateTime<Utc>> {
    let mut distance = known_distance;

    if distance == 0.0 {
        distance = distance_between_ports(origin_port, destination_port);
    }
    if distance == 0.0 {
        distance = DEFAULT_ROUTE_DISTANCE_NM;
    }

    let travel_time_hours = distance / AVERAGE_SHIP_SPEED_KNOTS;
    let total_hours = (travel_time_hours + PORT_OPERATIONS_BUFFER_HOURS)
        * delay_factor(origin_port, destination_port);

    let millis = total_hours * 3_600_000.0;
    if !millis.is_finite() {
        return None;
    }

    departure.checked_add_signed(Duration::try_milliseconds(millis.round() as i64)?)
}

fn fallback_eta(departure: DateTime<Utc>) -> DateTime<Utc> {
    departure
        .checked_add_signed(Duration::days(FALLBACK_TRANSIT_DAYS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn distance_between_ports(origin_port: &str, destination_port: &str) -> f64 {
    match (
        port_coordinates(origin_port),
        port_coordinates(destination_port),
    ) {
        (Some(origin), Some(destination)) => great_circle_distance(
            origin.latitude,
            origin.longitude,
            destination.latitude,
            destination.longitude,
        ),
        _ => 0.0,
    }
}

/// Route-dependent delay multiplier, checked in fixed order against the
/// concatenated `"{origin}-{destination}"` string. Matching is substring
/// containment, so either ordering of a port pair triggers its rule.
fn delay_factor(origin_port: &str, destination_port: &str) -> f64 {
    let route = format!("{origin_port}-{destination_port}");

    // Congested canal routes.
    if route.contains("Shanghai") && route.contains("Rotterdam")
        || route.contains("Singapore") && route.contains("Hamburg")
    {
        return 1.2;
    }

    // Pacific weather.
    if route.contains("Los Angeles") && route.contains("Shanghai") {
        return 1.1;
    }

    1.05
}
