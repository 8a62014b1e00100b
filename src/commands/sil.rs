use crate::formatting::display::{format_orders_of_magnitude, format_pfd, format_rrf, format_sil, sil_band_label};
use crate::lopa::{orders_of_magnitude, pfd_from_rrf, sil_from_rrf};

/// One-line SIL classification of an RRF, e.g.
/// `RRF 500 (2.7 orders, PFD 2.0 × 10^-3): SIL 2 [100-1K]`.
pub fn describe_rrf(rrf: f64) -> crate::errors::Result<String> {
    let pfd = pfd_from_rrf(rrf)?;
    let sil = sil_from_rrf(rrf);
    let band = sil.map(|s| format!(" [{}]", sil_band_label(s))).unwrap_or_default();
    Ok(format!(
        "RRF {} ({}, PFD {}): {}{}",
        format_rrf(rrf),
        format_orders_of_magnitude(orders_of_magnitude(rrf)),
        format_pfd(pfd),
        format_sil(sil),
        band
    ))
}

pub fn handle_sil(rrf: f64) -> anyhow::Result<()> {
    println!("{}", describe_rrf(rrf)?);
    Ok(())
}
