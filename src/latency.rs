//! Per-link latency model.
//!
//! A link's latency weight is the sum of its propagation delay (length
//! over the medium's propagation speed) and its serialization delay (one
//! over the link bandwidth).

use crate::topology::types::Material;

/// Latency weight of a single link, in seconds.
///
/// Both terms are real-valued. The serialization term is `1.0 / bandwidth`
/// in true division: a bandwidth-10 link contributes 0.1 seconds, never a
/// truncated zero. Callers guarantee positive bandwidth and length; the
/// parser enforces both at load time, so the result is always finite and
/// nonnegative.
pub fn link_weight(material: Material, bandwidth: u32, length: f64) -> f64 {
    debug_assert!(bandwidth > 0);
    debug_assert!(length > 0.0);
    length / material.propagation_speed() + 1.0 / f64::from(bandwidth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copper_weight() {
        let weight = link_weight(Material::Copper, 10, 100.0);
        assert!((weight - (100.0 / 2.3e8 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_fiber_weight() {
        let weight = link_weight(Material::Fiber, 10, 100.0);
        assert!((weight - (100.0 / 2.0e8 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_term_is_not_truncated() {
        // For any bandwidth > 1 a truncating division would collapse the
        // serialization term to zero; true division must not.
        let weight = link_weight(Material::Copper, 1000, 1.0);
        assert!(weight > 1.0 / 1000.0 - 1e-12);
        assert!(weight < 2.0 / 1000.0);
    }

    #[test]
    fn test_fiber_propagates_slower_than_copper() {
        let copper = link_weight(Material::Copper, 10, 1000.0);
        let fiber = link_weight(Material::Fiber, 10, 1000.0);
        assert!(fiber > copper);
    }

    #[test]
    fn test_weight_nonnegative() {
        assert!(link_weight(Material::Fiber, u32::MAX, f64::MIN_POSITIVE) >= 0.0);
    }
}
