//! Scalar type and shared numeric constants.

/// Our Real scalar type.
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// General-purpose epsilon for "is this length effectively zero" tests,
/// e.g. deciding whether a frustum cap has collapsed to a point.
pub const EPSILON: Real = 1e-8;
