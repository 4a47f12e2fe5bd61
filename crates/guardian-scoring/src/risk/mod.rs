//! Weighted cyber risk and multiplicative ethics risk, both on 0–100.

pub mod cyber;
pub mod ethics;

pub use cyber::{CyberCategory, CyberRiskAssessor, CyberRiskInput};
pub use ethics::{EthicsRiskAssessor, EthicsRiskInput};

/// Replace a non-finite value with `default`, then clamp into `[lo, hi]`.
pub(crate) fn bounded(v: f64, default: f64, lo: f64, hi: f64) -> f64 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        default
    }
}
