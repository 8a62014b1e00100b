//! PFD/RRF conversions.
//!
//! Strict validators (`rrf_from_pfd`, `pfd_from_rrf`) derive values and fail
//! on out-of-domain input. Lenient sanitizers (`clamp_pfd`,
//! `orders_of_magnitude`) prepare raw or display values and never fail.
//! Keep the two policies separate.

use crate::errors::DomainError;

/// Lowest PFD industry practice accepts as credible for a single layer.
pub const MIN_CREDITABLE_PFD: f64 = 1e-5;
/// Highest creditable PFD (a layer that always fails earns no credit).
pub const MAX_CREDITABLE_PFD: f64 = 1.0;

pub fn rrf_from_pfd(pfd: f64) -> Result<f64, DomainError> {
    if pfd > 0.0 && pfd <= 1.0 {
        Ok(1.0 / pfd)
    } else {
        Err(DomainError::PfdOutOfRange(pfd))
    }
}

pub fn pfd_from_rrf(rrf: f64) -> Result<f64, DomainError> {
    if rrf > 0.0 {
        Ok(1.0 / rrf)
    } else {
        Err(DomainError::NonPositiveRrf(rrf))
    }
}

/// `log10(rrf)`, or `0` for non-positive input (display sentinel).
pub fn orders_of_magnitude(rrf: f64) -> f64 {
    if rrf > 0.0 {
        rrf.log10()
    } else {
        0.0
    }
}

/// Factor by which `current` must still be multiplied to reach `required`.
pub fn additional_rrf_needed(current: f64, required: f64) -> f64 {
    if current >= required {
        0.0
    } else {
        required / current
    }
}

/// Independent layers combine multiplicatively; no layers is the identity.
pub fn combine_rrfs<I>(rrfs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    rrfs.into_iter().product()
}

pub fn total_rrf_from_pfds<I>(pfds: I) -> Result<f64, DomainError>
where
    I: IntoIterator<Item = f64>,
{
    pfds.into_iter()
        .map(rrf_from_pfd)
        .try_fold(1.0, |acc, rrf| rrf.map(|r| acc * r))
}

pub fn is_creditable_pfd(pfd: f64) -> bool {
    (MIN_CREDITABLE_PFD..=MAX_CREDITABLE_PFD).contains(&pfd)
}

/// Saturate into the creditable range. NaN passes through unchanged.
pub fn clamp_pfd(pfd: f64) -> f64 {
    pfd.clamp(MIN_CREDITABLE_PFD, MAX_CREDITABLE_PFD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rrf_from_pfd_rejects_out_of_domain() {
        assert_eq!(rrf_from_pfd(0.0), Err(DomainError::PfdOutOfRange(0.0)));
        assert!(rrf_from_pfd(-0.5).is_err());
        assert!(rrf_from_pfd(1.01).is_err());
        assert!(rrf_from_pfd(f64::NAN).is_err());
        assert_eq!(rrf_from_pfd(1.0), Ok(1.0));
        assert_eq!(rrf_from_pfd(0.1), Ok(10.0));
    }

    #[test]
    fn test_pfd_from_rrf() {
        assert_eq!(pfd_from_rrf(100.0), Ok(0.01));
        assert_eq!(pfd_from_rrf(0.0), Err(DomainError::NonPositiveRrf(0.0)));
        assert!(pfd_from_rrf(-10.0).is_err());
    }

    #[test]
    fn test_orders_of_magnitude_is_lenient() {
        assert!((orders_of_magnitude(1000.0) - 3.0).abs() < 1e-12);
        assert_eq!(orders_of_magnitude(1.0), 0.0);
        assert_eq!(orders_of_magnitude(0.0), 0.0);
        assert_eq!(orders_of_magnitude(-5.0), 0.0);
    }

    #[test]
    fn test_additional_rrf_needed() {
        assert_eq!(additional_rrf_needed(1000.0, 1000.0), 0.0);
        assert_eq!(additional_rrf_needed(2000.0, 1000.0), 0.0);
        assert_eq!(additional_rrf_needed(100.0, 1000.0), 10.0);
    }

    #[test]
    fn test_combine_rrfs() {
        assert_eq!(combine_rrfs(Vec::new()), 1.0);
        assert_eq!(combine_rrfs([42.0]), 42.0);
        assert_eq!(combine_rrfs([10.0, 100.0]), 1000.0);
    }

    #[test]
    fn test_total_rrf_from_pfds() {
        assert_eq!(total_rrf_from_pfds(Vec::new()), Ok(1.0));
        assert_eq!(total_rrf_from_pfds([0.1, 0.1]), Ok(100.0));
        let total = total_rrf_from_pfds([0.01, 0.01]).unwrap();
        assert!((total - 10_000.0).abs() < 1e-9);
        assert!(total_rrf_from_pfds([0.1, 0.0]).is_err());
    }

    #[test]
    fn test_creditable_range_is_inclusive() {
        assert!(is_creditable_pfd(MIN_CREDITABLE_PFD));
        assert!(is_creditable_pfd(MAX_CREDITABLE_PFD));
        assert!(!is_creditable_pfd(9.99e-6));
        assert!(!is_creditable_pfd(1.0001));
    }

    #[test]
    fn test_clamp_pfd_never_fails() {
        assert_eq!(clamp_pfd(0.0), MIN_CREDITABLE_PFD);
        assert_eq!(clamp_pfd(-3.0), MIN_CREDITABLE_PFD);
        assert_eq!(clamp_pfd(7.0), MAX_CREDITABLE_PFD);
        assert_eq!(clamp_pfd(0.05), 0.05);
    }

    proptest! {
        #[test]
        fn rrf_is_reciprocal_of_valid_pfd(pfd in 1e-9..=1.0f64) {
            prop_assert_eq!(rrf_from_pfd(pfd), Ok(1.0 / pfd));
        }

        #[test]
        fn clamped_pfd_is_always_creditable(raw in -10.0..10.0f64) {
            prop_assert!(is_creditable_pfd(clamp_pfd(raw)));
        }

        #[test]
        fn combining_two_layers_multiplies(a in 1.0..1e4f64, b in 1.0..1e4f64) {
            prop_assert_eq!(combine_rrfs([a, b]), a * b);
        }
    }
}
