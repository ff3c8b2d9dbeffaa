use crate::domain::model::Coordinate;

/// Even-odd (ray casting) containment test over a closed ring of vertices,
/// evaluated in the (x = longitude, y = latitude) plane.
///
/// Flat-plane only. At city scale the error against a geodesic test is
/// negligible; near zone edges spanning large distances it is not, and that
/// trade-off is part of the contract.
///
/// `ring` must already be explicitly closed (first vertex equals last).
/// Fewer than 4 vertices is a degenerate polygon and contains nothing.
/// A point exactly on an edge can land on either side depending on
/// floating-point rounding; callers must not rely on boundary behavior.
pub fn contains(ring: &[Coordinate], point: Coordinate) -> bool {
    if ring.len() < 4 {
        return false;
    }

    let px = point.longitude;
    let py = point.latitude;

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let ix = ring[i].longitude;
        let iy = ring[i].latitude;
        let jx = ring[j].longitude;
        let jy = ring[j].latitude;

        // Count edges whose crossing with the horizontal ray through the
        // point lies strictly to the right of it.
        if (iy > py) != (jy > py) {
            let dy = jy - iy;
            if dy.abs() >= 1e-12 && px < (jx - ix) * (py - iy) / dy + ix {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
