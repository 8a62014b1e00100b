//! Display helpers shared with the UI layer.
//!
//! The strings produced here are rendered verbatim by downstream dashboards,
//! so their exact shape is part of the public contract.

use crate::core::{GapStatus, Sil};
use crate::lopa::sil::rrf_range_for_sil;

/// Values this close to an integer display without a decimal.
const INTEGER_TOLERANCE: f64 = 1e-9;

/// `"100"`, `"1.5K"`, `"10K"`, `"2M"`.
///
/// The unit is chosen from the rounded value, so `999.6` shows as `"1K"`.
pub fn format_rrf(rrf: f64) -> String {
    let whole = round_half_up(rrf, 0);
    if whole.is_nan() || whole < 1_000.0 {
        format!("{:.0}", whole)
    } else if round_half_up(rrf / 1_000.0, 1) < 1_000.0 {
        scaled(rrf.max(1_000.0) / 1_000.0, "K")
    } else {
        scaled(rrf.max(1_000_000.0) / 1_000_000.0, "M")
    }
}

/// `"2.3 orders"`, `"1.0 order"`.
pub fn format_orders_of_magnitude(orders: f64) -> String {
    let rounded = round_half_up(orders, 1);
    let unit = if rounded == 1.0 { "order" } else { "orders" };
    format!("{:.1} {}", rounded, unit)
}

/// Two decimals from 0.01 upwards, scientific notation below.
pub fn format_pfd(pfd: f64) -> String {
    if pfd >= 0.01 {
        format!("{:.2}", round_half_up(pfd, 2))
    } else {
        scientific(pfd)
    }
}

/// Events per year: `"0.50/yr"`, `"1.0 × 10^-4/yr"`.
pub fn format_frequency(frequency: f64) -> String {
    if frequency >= 0.1 {
        format!("{:.2}/yr", round_half_up(frequency, 2))
    } else {
        format!("{}/yr", scientific(frequency))
    }
}

pub fn gap_status_label(status: GapStatus) -> &'static str {
    match status {
        GapStatus::Adequate => "Adequate",
        GapStatus::Marginal => "Marginal",
        GapStatus::Inadequate => "Inadequate",
    }
}

pub fn gap_status_color(status: GapStatus) -> &'static str {
    match status {
        GapStatus::Adequate => "#22c55e",
        GapStatus::Marginal => "#f59e0b",
        GapStatus::Inadequate => "#ef4444",
    }
}

pub fn format_sil(sil: Option<Sil>) -> String {
    match sil {
        Some(sil) => sil.to_string(),
        None => "None".to_string(),
    }
}

/// `"100-1K"` for SIL 2.
pub fn sil_band_label(sil: Sil) -> String {
    let band = rrf_range_for_sil(sil);
    format!("{}-{}", format_rrf(band.min), format_rrf(band.max))
}

fn scaled(value: f64, suffix: &str) -> String {
    let rounded = round_half_up(value, 1);
    if (rounded - rounded.round()).abs() < INTEGER_TOLERANCE {
        format!("{:.0}{}", rounded.round(), suffix)
    } else {
        format!("{:.1}{}", rounded, suffix)
    }
}

/// `"1.0 × 10^-4"`. Non-positive or non-finite input renders as `"0"`.
fn scientific(value: f64) -> String {
    if !(value.is_finite() && value > 0.0) {
        return "0".to_string();
    }
    let mut exponent = value.log10().floor() as i32;
    let mut mantissa = round_half_up(value / 10f64.powi(exponent), 1);
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    format!("{:.1} × 10^{}", mantissa, exponent)
}

/// Rounds halves away from zero, which is half-up for the positive values shown here.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rrf_plain_below_thousand() {
        assert_eq!(format_rrf(100.0), "100");
        assert_eq!(format_rrf(10.0), "10");
        assert_eq!(format_rrf(999.0), "999");
    }

    #[test]
    fn test_format_rrf_thousands() {
        assert_eq!(format_rrf(1_000.0), "1K");
        assert_eq!(format_rrf(10_000.0), "10K");
        assert_eq!(format_rrf(1_500.0), "1.5K");
        assert_eq!(format_rrf(1.0 / (0.01 * 0.01)), "10K");
    }

    #[test]
    fn test_format_rrf_millions() {
        assert_eq!(format_rrf(1_000_000.0), "1M");
        assert_eq!(format_rrf(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_format_rrf_rounds_before_choosing_unit() {
        assert_eq!(format_rrf(999.4), "999");
        assert_eq!(format_rrf(999.6), "1K");
        assert_eq!(format_rrf(999_940.0), "999.9K");
        assert_eq!(format_rrf(999_960.0), "1M");
        assert_eq!(format_rrf(999_999.96), "1M");
        assert_eq!(format_rrf(1_049.96), "1K");
    }

    #[test]
    fn test_format_orders() {
        assert_eq!(format_orders_of_magnitude(2.34), "2.3 orders");
        assert_eq!(format_orders_of_magnitude(2.25), "2.3 orders");
        assert_eq!(format_orders_of_magnitude(1.0), "1.0 order");
        assert_eq!(format_orders_of_magnitude(0.96), "1.0 order");
        assert_eq!(format_orders_of_magnitude(0.0), "0.0 orders");
    }

    #[test]
    fn test_format_pfd() {
        assert_eq!(format_pfd(0.1), "0.10");
        assert_eq!(format_pfd(0.01), "0.01");
        assert_eq!(format_pfd(1.0), "1.00");

        let small = format_pfd(1e-4);
        assert_eq!(small, "1.0 × 10^-4");
        assert!(small.contains("10"));
        assert!(small.contains("-4"));
        assert_eq!(format_pfd(3e-5), "3.0 × 10^-5");
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(0.5), "0.50/yr");
        assert_eq!(format_frequency(0.1), "0.10/yr");
        assert_eq!(format_frequency(1e-4), "1.0 × 10^-4/yr");
        assert_eq!(format_frequency(0.0), "0/yr");
    }

    #[test]
    fn test_scientific_mantissa_rollover() {
        assert_eq!(scientific(9.99e-5), "1.0 × 10^-4");
    }

    #[test]
    fn test_gap_status_contract() {
        assert_eq!(gap_status_label(GapStatus::Adequate), "Adequate");
        assert_eq!(gap_status_color(GapStatus::Adequate), "#22c55e");
        assert_eq!(gap_status_label(GapStatus::Marginal), "Marginal");
        assert_eq!(gap_status_color(GapStatus::Marginal), "#f59e0b");
        assert_eq!(gap_status_label(GapStatus::Inadequate), "Inadequate");
        assert_eq!(gap_status_color(GapStatus::Inadequate), "#ef4444");
    }

    #[test]
    fn test_sil_labels() {
        assert_eq!(format_sil(Some(Sil::Sil2)), "SIL 2");
        assert_eq!(format_sil(None), "None");
        assert_eq!(sil_band_label(Sil::Sil2), "100-1K");
        assert_eq!(sil_band_label(Sil::Sil4), "10K-100K");
    }
}
