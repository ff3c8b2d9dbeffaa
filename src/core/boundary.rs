//! Boundary wire form and write-time validation.
//!
//! A zone boundary travels and persists as a JSON-encoded list of
//! `[latitude, longitude]` pairs. Decode happens at resolution time, per
//! zone; validation happens once, on the write path, so that every stored
//! boundary is a ring the containment test accepts.

use crate::domain::model::Coordinate;
use crate::utils::error::{Result, ZoneError};

/// Decode the stored boundary form into a vertex sequence, preserving order.
pub fn decode(raw: &str) -> serde_json::Result<Vec<Coordinate>> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(raw)?;
    Ok(pairs
        .into_iter()
        .map(|[latitude, longitude]| Coordinate {
            latitude,
            longitude,
        })
        .collect())
}

/// Encode a vertex sequence into the stored form. Round-trips `decode`
/// exactly: serde_json emits the shortest decimal that parses back to the
/// same f64.
pub fn encode(ring: &[Coordinate]) -> Result<String> {
    let pairs: Vec<[f64; 2]> = ring.iter().map(|c| [c.latitude, c.longitude]).collect();
    Ok(serde_json::to_string(&pairs)?)
}

/// Write-time boundary check, shared notion of "closed ring" with the
/// containment test.
///
/// Rejects with `TooFewVertices` unless at least 3 distinct vertices remain
/// before closure; otherwise returns the ring normalized to explicit closure
/// (the first vertex appended when the last differs). Idempotent: a ring
/// that is already closed comes back unchanged.
pub fn validate(vertices: &[Coordinate]) -> Result<Vec<Coordinate>> {
    // Strip an existing closing vertex before counting distinct points.
    let open: &[Coordinate] = match vertices.split_last() {
        Some((last, rest)) if rest.first().is_some_and(|first| same_vertex(first, last)) => rest,
        _ => vertices,
    };

    let mut distinct: Vec<&Coordinate> = Vec::with_capacity(open.len());
    for vertex in open {
        if !distinct.iter().any(|seen| same_vertex(seen, vertex)) {
            distinct.push(vertex);
        }
    }
    if distinct.len() < 3 {
        return Err(ZoneError::TooFewVertices {
            count: distinct.len(),
        });
    }

    let mut ring = open.to_vec();
    ring.push(open[0]);
    Ok(ring)
}

/// Bitwise vertex identity. Exact f64 comparison would treat every NaN
/// vertex as distinct from itself and let a NaN-laden ring through the
/// distinctness count.
fn same_vertex(a: &Coordinate, b: &Coordinate) -> bool {
    a.latitude.to_bits() == b.latitude.to_bits() && a.longitude.to_bits() == b.longitude.to_bits()
}
