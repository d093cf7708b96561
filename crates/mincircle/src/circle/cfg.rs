//! Tolerance constants for circle containment.
//!
//! Policy
//! - The slack is multiplicative so it scales with the circle: a radius can be
//!   arbitrarily large or small and an additive constant would be wrong at one
//!   end. Kept fixed; every predicate in this module reads it from here.

/// Relative containment slack: `|p - c| <= r * (1 + CONTAIN_EPS)`.
pub const CONTAIN_EPS: f64 = 1e-14;
