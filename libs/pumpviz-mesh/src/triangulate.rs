//! # Cap Triangulation
//!
//! Ear-clip triangulation of closed profile rings for extrusion end caps.
//! Fan triangulation only works for shapes that are star-shaped from their
//! first vertex; the volute wedge is not, so caps go through a robust ear
//! clipper instead.

use crate::error::MeshError;
use glam::DVec2;

/// Triangulates a closed boundary ring into cap triangles.
///
/// Indices reference positions in `ring`. Every returned triangle is wound
/// counter-clockwise in the profile plane, so a cap facing +Z can use them
/// directly and a cap facing -Z reverses them.
pub fn triangulate_ring(ring: &[DVec2]) -> Result<Vec<[u32; 3]>, MeshError> {
    if ring.len() < 3 {
        return Err(MeshError::degenerate_profile(format!(
            "cap triangulation needs at least 3 boundary points: {}",
            ring.len()
        )));
    }

    let mut flat = Vec::with_capacity(ring.len() * 2);
    for p in ring {
        flat.push(p.x);
        flat.push(p.y);
    }

    let raw = earcutr::earcut(&flat, &[], 2).map_err(|e| {
        MeshError::degenerate_profile(format!("cap triangulation failed: {:?}", e))
    })?;

    if raw.len() < 3 {
        return Err(MeshError::degenerate_profile(
            "cap triangulation produced no triangles",
        ));
    }

    let mut triangles = Vec::with_capacity(raw.len() / 3);
    for tri in raw.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = ring[b] - ring[a];
        let ac = ring[c] - ring[a];
        if ab.x * ac.y - ab.y * ac.x >= 0.0 {
            triangles.push([a as u32, b as u32, c as u32]);
        } else {
            triangles.push([a as u32, c as u32, b as u32]);
        }
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangulate_square() {
        let square = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let triangles = triangulate_ring(&square).unwrap();
        assert_eq!(triangles.len(), 2);
        // Total area covers the square
        let area: f64 = triangles
            .iter()
            .map(|t| {
                let ab = square[t[1] as usize] - square[t[0] as usize];
                let ac = square[t[2] as usize] - square[t[0] as usize];
                (ab.x * ac.y - ab.y * ac.x) / 2.0
            })
            .sum();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangulate_concave_ring() {
        // L-shape: fan triangulation from vertex 0 would leave the notch
        let l_shape = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let triangles = triangulate_ring(&l_shape).unwrap();
        assert_eq!(triangles.len(), 4);
        let area: f64 = triangles
            .iter()
            .map(|t| {
                let ab = l_shape[t[1] as usize] - l_shape[t[0] as usize];
                let ac = l_shape[t[2] as usize] - l_shape[t[0] as usize];
                (ab.x * ac.y - ab.y * ac.x) / 2.0
            })
            .sum();
        assert!((area - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangulate_all_ccw() {
        let square = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        for t in triangulate_ring(&square).unwrap() {
            let ab = square[t[1] as usize] - square[t[0] as usize];
            let ac = square[t[2] as usize] - square[t[0] as usize];
            assert!(ab.x * ac.y - ab.y * ac.x > 0.0);
        }
    }

    #[test]
    fn test_triangulate_degenerate() {
        let line = vec![DVec2::ZERO, DVec2::X];
        assert!(triangulate_ring(&line).is_err());
    }
}
