//! # Configuration Constants
//!
//! Centralized constants for the pump geometry pipeline. All precision
//! tolerances, tessellation parameters, safety limits, and part-design
//! constants are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Part design**: Canonical shape constants for the generated parts

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon below which a triangle is treated as zero-area during mesh
/// validation.
///
/// Slightly larger than [`EPSILON`] to absorb numerical noise from chained
/// transformations.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default tessellation segment count for shapes that require angular
/// resolution such as cylinders, spheres, and torus sections.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

// =============================================================================
// SAFETY LIMITS
// =============================================================================
//
// Generation cost is proportional to segment and blade counts. Parameters
// above these maxima are rejected with a typed error, never silently
// truncated, so a caller always knows the bound it hit.

/// Maximum number of samples accepted when building a 2D profile curve.
pub const MAX_PROFILE_SEGMENTS: u32 = 512;

/// Maximum angular segment count accepted by revolved primitives.
pub const MAX_RADIAL_SEGMENTS: u32 = 512;

/// Maximum number of blades a diffuser assembly may be asked to generate.
///
/// Realistic diffusers stay below ~30 blades; the limit leaves headroom
/// while keeping a full rebuild well inside a frame budget.
pub const MAX_BLADE_COUNT: u32 = 64;

// =============================================================================
// PART DESIGN CONSTANTS
// =============================================================================

/// Radial expansion of the volute spiral from inlet to throat.
///
/// The spiral radius grows linearly from `base_radius` to
/// `base_radius * (1.0 + VOLUTE_EXPANSION)` over the swept angle.
pub const VOLUTE_EXPANSION: f64 = 0.4;

/// Chord-normal width of the diffuser blade cross-section (scene units).
pub const BLADE_CHORD_WIDTH: f64 = 0.12;

/// Sample count for one half of the airfoil blade profile.
pub const BLADE_PROFILE_POINTS: u32 = 20;

/// Path step count used when extruding a blade cross-section.
pub const BLADE_EXTRUDE_STEPS: u32 = 12;

/// Backward sweep applied at the blade tip, in radians.
///
/// Twist grows smoothly from zero at the hub to this angle at the tip.
pub const BLADE_SWEEP_ANGLE: f64 = 0.3;
