//! # Profile Construction
//!
//! Closed 2D cross-section profiles for extrusion:
//! - **volute_profile**: expanding spiral wedge for the pump casing body
//! - **airfoil_profile**: symmetric lens section for a diffuser blade
//!
//! Profiles are explicitly closed (first and last point coincide); the
//! [`Profile::ring`] accessor yields the distinct boundary points used for
//! ring-based mesh generation. Builders never emit zero-length segments.

use crate::error::MeshError;
use config::constants::{EPSILON, MAX_PROFILE_SEGMENTS, VOLUTE_EXPANSION};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// A closed 2D polyline defining a cross-section boundary.
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::profile::Profile;
/// use glam::DVec2;
///
/// let mut triangle = Profile::default();
/// triangle.push(DVec2::new(0.0, 0.0));
/// triangle.push(DVec2::new(1.0, 0.0));
/// triangle.push(DVec2::new(0.0, 1.0));
/// triangle.close();
/// assert!(triangle.is_closed());
/// assert_eq!(triangle.ring().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Creates a profile from a point sequence.
    ///
    /// Consecutive points closer than the numeric tolerance are merged.
    pub fn new(points: Vec<DVec2>) -> Self {
        let mut profile = Self {
            points: Vec::with_capacity(points.len()),
        };
        for p in points {
            profile.push(p);
        }
        profile
    }

    /// Creates a closed circle profile.
    ///
    /// # Arguments
    ///
    /// * `radius` - Circle radius
    /// * `segments` - Number of boundary segments
    pub fn circle(radius: f64, segments: u32) -> Self {
        let mut profile = Self {
            points: Vec::with_capacity(segments as usize + 1),
        };
        for i in 0..segments {
            let angle = TAU * i as f64 / segments as f64;
            profile.push(DVec2::new(radius * angle.cos(), radius * angle.sin()));
        }
        profile.close();
        profile
    }

    /// Appends a point, skipping it when it would create a zero-length
    /// segment.
    pub fn push(&mut self, point: DVec2) {
        if let Some(last) = self.points.last() {
            if last.distance(point) < EPSILON {
                return;
            }
        }
        self.points.push(point);
    }

    /// Closes the profile by connecting the boundary back to its first
    /// point.
    pub fn close(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if first.distance(last) >= EPSILON {
            self.points.push(first);
        }
    }

    /// Returns true when the first and last point coincide.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => {
                first.distance(*last) < EPSILON
            }
            _ => false,
        }
    }

    /// Returns the full point sequence, closing duplicate included.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the distinct boundary points (closing duplicate elided).
    pub fn ring(&self) -> &[DVec2] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Number of distinct boundary points.
    pub fn ring_len(&self) -> usize {
        self.ring().len()
    }

    /// Signed area of the boundary (shoelace formula).
    ///
    /// Positive for counter-clockwise orientation.
    pub fn signed_area(&self) -> f64 {
        ring_area(self.ring())
    }

    /// Returns true when the boundary is counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Bounding-box extents of the boundary.
    pub fn span(&self) -> DVec2 {
        let ring = self.ring();
        if ring.is_empty() {
            return DVec2::ZERO;
        }
        let mut min = ring[0];
        let mut max = ring[0];
        for p in &ring[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        max - min
    }
}

/// Signed area of a point ring (shoelace formula, no closing duplicate).
pub(crate) fn ring_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Builds the volute casing cross-section: an expanding spiral closed into
/// a wedge through a cutoff point and the spin axis.
///
/// For `i` in `[0, segments]` the spiral samples
/// `angle = (i / segments) * sweep_fraction * 2π` at
/// `radius = base_radius * (1 + (i / segments) * VOLUTE_EXPANSION)`. The
/// boundary then returns to a cutoff point at `cutoff_fraction * 2π` on the
/// base circle, to the origin, and closes.
///
/// # Errors
///
/// - `UnsupportedSegmentCount` when `segments < 2` (the spiral degenerates
///   to a line)
/// - `InvalidParameter` for a non-positive radius, out-of-domain fractions
///   (`sweep_fraction` in (0, 1], `cutoff_fraction` in [0, 1)), or a
///   segment count above `MAX_PROFILE_SEGMENTS`
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::profile::volute_profile;
///
/// let spiral = volute_profile(103.0, 64, 0.75, 0.1).unwrap();
/// assert!(spiral.is_closed());
/// assert!(spiral.is_ccw());
/// ```
pub fn volute_profile(
    base_radius: f64,
    segments: u32,
    sweep_fraction: f64,
    cutoff_fraction: f64,
) -> Result<Profile, MeshError> {
    if base_radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "volute base radius must be positive: {}",
            base_radius
        )));
    }
    if segments < 2 {
        return Err(MeshError::unsupported_segments(format!(
            "volute spiral needs at least 2 segments: {}",
            segments
        )));
    }
    if segments > MAX_PROFILE_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "volute spiral segments exceed the maximum of {}: {}",
            MAX_PROFILE_SEGMENTS, segments
        )));
    }
    if !(sweep_fraction > 0.0 && sweep_fraction <= 1.0) {
        return Err(MeshError::invalid_parameter(format!(
            "sweep fraction must be in (0, 1]: {}",
            sweep_fraction
        )));
    }
    if !(cutoff_fraction >= 0.0 && cutoff_fraction < 1.0) {
        return Err(MeshError::invalid_parameter(format!(
            "cutoff fraction must be in [0, 1): {}",
            cutoff_fraction
        )));
    }

    let mut profile = Profile::default();

    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let angle = t * sweep_fraction * TAU;
        let radius = base_radius * (1.0 + t * VOLUTE_EXPANSION);
        profile.push(DVec2::new(angle.cos() * radius, angle.sin() * radius));
    }

    // Close the spiral into a casing wedge: back to the base circle at the
    // cutoff angle, then to the spin axis.
    let cutoff = cutoff_fraction * TAU;
    profile.push(DVec2::new(
        cutoff.cos() * base_radius,
        cutoff.sin() * base_radius,
    ));
    profile.push(DVec2::ZERO);
    profile.close();

    Ok(profile)
}

/// Builds a symmetric lens-shaped blade cross-section.
///
/// The suction side samples `num_points + 1` stations from the hub to the
/// tip with `y = +sin(t·π) * half_width`; the pressure side mirrors them in
/// reverse order. Thickness tapers to zero at both radii, so the section
/// comes to a point at hub and tip.
///
/// # Errors
///
/// - `InvalidParameter` when `inner_radius < 0`,
///   `outer_radius <= inner_radius`, `half_width <= 0`, or `num_points`
///   exceeds `MAX_PROFILE_SEGMENTS`
/// - `UnsupportedSegmentCount` when `num_points < 2`
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::profile::airfoil_profile;
///
/// let section = airfoil_profile(0.3, 1.5, 0.06, 20).unwrap();
/// assert!(section.is_closed());
/// assert_eq!(section.ring_len(), 40);
/// ```
pub fn airfoil_profile(
    inner_radius: f64,
    outer_radius: f64,
    half_width: f64,
    num_points: u32,
) -> Result<Profile, MeshError> {
    if inner_radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "airfoil inner radius must be non-negative: {}",
            inner_radius
        )));
    }
    if outer_radius <= inner_radius {
        return Err(MeshError::invalid_parameter(format!(
            "airfoil outer radius must exceed inner radius: {} <= {}",
            outer_radius, inner_radius
        )));
    }
    if half_width <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "airfoil half width must be positive: {}",
            half_width
        )));
    }
    if num_points < 2 {
        return Err(MeshError::unsupported_segments(format!(
            "airfoil needs at least 2 sample points per side: {}",
            num_points
        )));
    }
    if num_points > MAX_PROFILE_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "airfoil sample points exceed the maximum of {}: {}",
            MAX_PROFILE_SEGMENTS, num_points
        )));
    }

    let chord = outer_radius - inner_radius;
    let mut profile = Profile::default();

    // Suction side, hub to tip
    for j in 0..=num_points {
        let t = j as f64 / num_points as f64;
        let x = inner_radius + t * chord;
        let y = (t * PI).sin() * half_width;
        profile.push(DVec2::new(x, y));
    }

    // Pressure side, tip back to hub; the zero-thickness endpoint samples
    // coincide with the suction side and are elided.
    for j in (1..num_points).rev() {
        let t = j as f64 / num_points as f64;
        let x = inner_radius + t * chord;
        let y = (t * PI).sin() * half_width;
        profile.push(DVec2::new(x, -y));
    }

    profile.close();
    Ok(profile)
}

/// Computes an inward offset of a closed counter-clockwise ring.
///
/// Corners move along the inward bisector with a miter scale capped for
/// sharp corners. The inset boundary must keep its orientation and a
/// positive enclosed area; a collapse means the requested inset exceeds the
/// shape's local thickness.
///
/// # Errors
///
/// - `DegenerateProfile` for rings with fewer than 3 points
/// - `InvalidParameter` for a negative amount
/// - `InvalidBevelSpec` when the inset collapses or flips the boundary
pub fn inset_ring(ring: &[DVec2], amount: f64) -> Result<Vec<DVec2>, MeshError> {
    if ring.len() < 3 {
        return Err(MeshError::degenerate_profile(format!(
            "inset needs at least 3 boundary points: {}",
            ring.len()
        )));
    }
    if amount < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "inset amount must be non-negative: {}",
            amount
        )));
    }
    if amount < EPSILON {
        return Ok(ring.to_vec());
    }

    let n = ring.len();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let curr = ring[i];
        let next = ring[(i + 1) % n];

        let edge1 = curr - prev;
        let edge2 = next - curr;

        // Outward edge normals for a CCW boundary
        let normal1 = DVec2::new(edge1.y, -edge1.x).normalize();
        let normal2 = DVec2::new(edge2.y, -edge2.x).normalize();

        let avg = normal1 + normal2;
        let avg_len = avg.length();
        if avg_len < EPSILON {
            // Opposite normals (spike corner) - use either side
            result.push(curr - normal1 * amount);
            continue;
        }
        let avg = avg / avg_len;

        let dot = normal1.dot(normal2);
        let scale = if dot.abs() < 0.999 {
            // Miter formula, capped so sharp corners cannot explode
            1.0 / (1.0 + dot).max(0.1).sqrt()
        } else {
            1.0
        };

        result.push(curr - avg * amount * scale);
    }

    let area = ring_area(&result);
    if area <= EPSILON || area >= ring_area(ring) + EPSILON {
        return Err(MeshError::invalid_bevel(format!(
            "inset of {} collapses the cross-section",
            amount
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_close_appends_first_point() {
        let mut profile = Profile::default();
        profile.push(DVec2::new(0.0, 0.0));
        profile.push(DVec2::new(1.0, 0.0));
        profile.push(DVec2::new(0.0, 1.0));
        assert!(!profile.is_closed());
        profile.close();
        assert!(profile.is_closed());
        assert_eq!(profile.points().len(), 4);
        assert_eq!(profile.ring_len(), 3);
    }

    #[test]
    fn test_profile_push_merges_duplicates() {
        let mut profile = Profile::default();
        profile.push(DVec2::new(1.0, 1.0));
        profile.push(DVec2::new(1.0, 1.0));
        assert_eq!(profile.points().len(), 1);
    }

    #[test]
    fn test_profile_circle() {
        let circle = Profile::circle(5.0, 32);
        assert!(circle.is_closed());
        assert_eq!(circle.ring_len(), 32);
        assert!((circle.ring()[0].x - 5.0).abs() < 1e-9);
        assert!(circle.ring()[0].y.abs() < 1e-9);
        assert!(circle.is_ccw());
    }

    #[test]
    fn test_volute_profile_closed_and_ccw() {
        let profile = volute_profile(103.0, 64, 0.75, 0.1).unwrap();
        assert!(profile.is_closed());
        assert!(profile.is_ccw());
        // Spiral start on the base circle, spiral end expanded by 40%
        let ring = profile.ring();
        assert!((ring[0] - DVec2::new(103.0, 0.0)).length() < 1e-9);
        assert!((ring[64].length() - 103.0 * 1.4).abs() < 1e-9);
        // Wedge closes through the origin
        assert!(ring.last().unwrap().length() < 1e-9);
    }

    #[test]
    fn test_volute_profile_too_few_segments() {
        let result = volute_profile(103.0, 1, 0.75, 0.1);
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedSegmentCount { .. })
        ));
    }

    #[test]
    fn test_volute_profile_invalid_radius() {
        let result = volute_profile(0.0, 64, 0.75, 0.1);
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_volute_profile_invalid_fractions() {
        assert!(volute_profile(103.0, 64, 0.0, 0.1).is_err());
        assert!(volute_profile(103.0, 64, 1.5, 0.1).is_err());
        assert!(volute_profile(103.0, 64, 0.75, 1.0).is_err());
        assert!(volute_profile(103.0, 64, 0.75, -0.1).is_err());
    }

    #[test]
    fn test_airfoil_profile_boundary_conditions() {
        let profile = airfoil_profile(0.3, 1.5, 0.06, 20).unwrap();
        assert!(profile.is_closed());

        // First and last points coincide
        let points = profile.points();
        assert!((points[0] - *points.last().unwrap()).length() < 1e-12);

        // Tapers to a point at hub (t=0) and tip (t=1)
        assert!(points[0].y.abs() < 1e-12);
        assert!((points[0].x - 0.3).abs() < 1e-12);
        let tip = points[20];
        assert!(tip.y.abs() < 1e-12);
        assert!((tip.x - 1.5).abs() < 1e-12);

        // Both endpoint samples appear exactly once
        assert_eq!(profile.ring_len(), 40);
    }

    #[test]
    fn test_airfoil_profile_symmetry() {
        let profile = airfoil_profile(0.3, 1.5, 0.06, 20).unwrap();
        let ring = profile.ring();
        // Suction sample j and pressure sample at the same station mirror in y
        let upper = ring[5];
        let lower = ring[2 * 20 - 5];
        assert!((upper.x - lower.x).abs() < 1e-12);
        assert!((upper.y + lower.y).abs() < 1e-12);
    }

    #[test]
    fn test_airfoil_profile_invalid_radii() {
        assert!(matches!(
            airfoil_profile(1.5, 0.3, 0.06, 20),
            Err(MeshError::InvalidParameter { .. })
        ));
        assert!(airfoil_profile(-0.1, 1.5, 0.06, 20).is_err());
        assert!(airfoil_profile(0.3, 1.5, 0.0, 20).is_err());
    }

    #[test]
    fn test_airfoil_profile_too_few_points() {
        assert!(matches!(
            airfoil_profile(0.3, 1.5, 0.06, 1),
            Err(MeshError::UnsupportedSegmentCount { .. })
        ));
    }

    #[test]
    fn test_inset_square() {
        let square = vec![
            DVec2::new(-5.0, -5.0),
            DVec2::new(5.0, -5.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(-5.0, 5.0),
        ];
        let inset = inset_ring(&square, 1.0).unwrap();
        assert_eq!(inset.len(), 4);
        // Shrunk, still CCW
        let area = ring_area(&inset);
        assert!(area > 0.0);
        assert!(area < 100.0);
    }

    #[test]
    fn test_inset_zero_amount_is_identity() {
        let square = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let inset = inset_ring(&square, 0.0).unwrap();
        assert_eq!(inset, square);
    }

    #[test]
    fn test_inset_collapse_rejected() {
        let square = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let result = inset_ring(&square, 2.0);
        assert!(matches!(result, Err(MeshError::InvalidBevelSpec { .. })));
    }
}
