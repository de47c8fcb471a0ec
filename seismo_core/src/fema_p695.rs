//! # FEMA P695 Collapse-Margin Helpers
//!
//! Statistics and code-table lookups for the FEMA P695 methodology
//! (*Quantification of Building Seismic Performance Factors*): total system
//! uncertainty, acceptable adjusted collapse margin ratios, mapped seismic
//! parameters per design category, ground-motion scale factors, and the
//! spectral shape factor (SSF).
//!
//! All reference tables are embedded constants, initialized once and shared;
//! aliased design categories resolve to the identical table instance rather
//! than a copy.
//!
//! ## Example
//!
//! ```rust
//! use seismo_core::fema_p695::{acmrxx, beta_total, Rating};
//!
//! let beta = beta_total(Rating::B, Rating::B, Rating::C, 3.0);
//! assert_eq!(beta, 0.600);
//!
//! // Acceptable ACMR for a 20% collapse probability
//! let acmr20 = acmrxx(beta, 0.20).unwrap();
//! assert!((acmr20 - 1.66).abs() < 0.005);
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::asce7;
use crate::errors::{CalcError, CalcResult};
use crate::interp::{Edges, Table1d, Table2d};
use crate::units::UnitInput;

// ============================================================================
// Collapse-margin statistics
// ============================================================================

/// Quality rating for design requirements, test data, or modeling,
/// per FEMA P695 Section 7.3.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Superior: beta = 0.10
    A,
    /// Good: beta = 0.20
    B,
    /// Fair: beta = 0.35
    C,
    /// Poor: beta = 0.50
    D,
}

impl Rating {
    /// All ratings for iteration
    pub const ALL: [Rating; 4] = [Rating::A, Rating::B, Rating::C, Rating::D];

    /// Uncertainty value associated with this rating
    pub fn uncertainty(&self) -> f64 {
        match self {
            Rating::A => 0.10,
            Rating::B => 0.20,
            Rating::C => 0.35,
            Rating::D => 0.50,
        }
    }
}

impl FromStr for Rating {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Rating::A),
            "B" => Ok(Rating::B),
            "C" => Ok(Rating::C),
            "D" => Ok(Rating::D),
            other => Err(CalcError::invalid_input(
                "rating",
                other,
                "expected one of A, B, C, D",
            )),
        }
    }
}

/// Total system collapse uncertainty, beta_TOT.
///
/// Combines record-to-record, design-requirements, test-data, and modeling
/// uncertainties (SRSS), with beta_RTR taken as min(0.1 + 0.1*mu_T, 0.4).
/// The result is rounded to the nearest 0.025 per the tabulated values.
///
/// Ref: FEMA P695 Section 7.3
pub fn beta_total(design_requirements: Rating, test_data: Rating, modeling: Rating, mu_t: f64) -> f64 {
    let beta_dr = design_requirements.uncertainty();
    let beta_td = test_data.uncertainty();
    let beta_mdl = modeling.uncertainty();
    let beta_rtr = (0.1 + 0.1 * mu_t).min(0.4);

    let beta = (beta_rtr.powi(2) + beta_dr.powi(2) + beta_td.powi(2) + beta_mdl.powi(2)).sqrt();
    (beta * 40.0).round() / 40.0
}

/// Acceptable value of the adjusted collapse margin ratio, ACMRxx.
///
/// The collapse capacity is lognormally distributed with dispersion
/// `beta_total`; the acceptable margin is the reciprocal of the lognormal
/// fractile at `collapse_prob`, i.e. exp(-beta * PHI^-1(p)).
///
/// Ref: FEMA P695 Section 7.4
pub fn acmrxx(beta_total: f64, collapse_prob: f64) -> CalcResult<f64> {
    if beta_total <= 0.0 {
        return Err(CalcError::invalid_input(
            "beta_total",
            beta_total.to_string(),
            "total uncertainty must be positive",
        ));
    }
    if !(0.0..1.0).contains(&collapse_prob) || collapse_prob == 0.0 {
        return Err(CalcError::invalid_input(
            "collapse_prob",
            collapse_prob.to_string(),
            "collapse probability must lie in (0, 1)",
        ));
    }
    Ok((-beta_total * normal_quantile(collapse_prob)).exp())
}

/// Inverse CDF of the standard normal distribution (Acklam's rational
/// approximation, |relative error| < 1.15e-9). `p` must lie in (0, 1).
fn normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    let tail = |q: f64| -> f64 {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

// ============================================================================
// Design categories and mapped values
// ============================================================================

/// Seismic design category selecting which reference table applies.
///
/// Categories pair a seismic design category letter with the upper or lower
/// bound of its mapped ground-motion range. Some categories alias others'
/// data (`Cmax` carries the `Dmin` values, `Bmax` the `Cmin` values); the
/// aliases resolve to the identical table instance, not a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCategory {
    Bmin,
    Bmax,
    Cmin,
    Cmax,
    Dmin,
    Dmax,
}

impl DesignCategory {
    /// All design categories for iteration
    pub const ALL: [DesignCategory; 6] = [
        DesignCategory::Bmin,
        DesignCategory::Bmax,
        DesignCategory::Cmin,
        DesignCategory::Cmax,
        DesignCategory::Dmin,
        DesignCategory::Dmax,
    ];

    /// Mapped seismic parameters for this category.
    ///
    /// Ref: FEMA P695 Table 5-1 (MCE ground motions)
    pub fn mapped_values(&self) -> &'static MappedValues {
        match self {
            DesignCategory::Dmax => &MAPPED_DMAX,
            DesignCategory::Dmin | DesignCategory::Cmax => &MAPPED_DMIN,
            DesignCategory::Cmin | DesignCategory::Bmax => &MAPPED_CMIN,
            DesignCategory::Bmin => &MAPPED_BMIN,
        }
    }

    /// Spectral shape factor grid for this category.
    ///
    /// Ref: FEMA P695 Table 7-1a/7-1b
    pub fn ssf_table(&self) -> &'static Table2d {
        match self {
            DesignCategory::Dmax => &SSF_DMAX,
            _ => &SSF_DMIN,
        }
    }
}

impl FromStr for DesignCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bmin" => Ok(DesignCategory::Bmin),
            "bmax" => Ok(DesignCategory::Bmax),
            "cmin" => Ok(DesignCategory::Cmin),
            "cmax" => Ok(DesignCategory::Cmax),
            "dmin" => Ok(DesignCategory::Dmin),
            "dmax" => Ok(DesignCategory::Dmax),
            _ => Err(CalcError::unknown_category(s)),
        }
    }
}

impl std::fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DesignCategory::Bmin => "Bmin",
            DesignCategory::Bmax => "Bmax",
            DesignCategory::Cmin => "Cmin",
            DesignCategory::Cmax => "Cmax",
            DesignCategory::Dmin => "Dmin",
            DesignCategory::Dmax => "Dmax",
        };
        write!(f, "{name}")
    }
}

/// Mapped MCE seismic parameters for one design category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappedValues {
    /// Short-period MCE spectral acceleration, SS (g)
    pub ss: f64,
    /// 1-s MCE spectral acceleration, S1 (g)
    pub s1: f64,
    /// Short-period site coefficient, Fa
    pub fa: f64,
    /// Long-period site coefficient, Fv
    pub fv: f64,
    /// Site-adjusted short-period MCE acceleration, SMS (g)
    pub sms: f64,
    /// Site-adjusted 1-s MCE acceleration, SM1 (g)
    pub sm1: f64,
    /// Design short-period acceleration, SDS (g)
    pub sds: f64,
    /// Design 1-s acceleration, SD1 (g)
    pub sd1: f64,
    /// Transition period Ts = SD1/SDS (s)
    pub ts: f64,
}

static MAPPED_DMAX: MappedValues = MappedValues {
    ss: 1.5,
    // taken as just below 0.60 per the mapped-value restriction
    s1: 0.59999999999,
    fa: 1.0,
    fv: 1.50,
    sms: 1.50,
    sm1: 0.90,
    sds: 1.0,
    sd1: 0.60,
    ts: 0.60,
};

static MAPPED_DMIN: MappedValues = MappedValues {
    ss: 0.55,
    s1: 0.132,
    fa: 1.36,
    fv: 2.28,
    sms: 0.75,
    sm1: 0.30,
    sds: 0.50,
    sd1: 0.20,
    ts: 0.40,
};

static MAPPED_CMIN: MappedValues = MappedValues {
    ss: 0.33,
    s1: 0.083,
    fa: 1.53,
    fv: 2.4,
    sms: 0.50,
    sm1: 0.20,
    sds: 0.33,
    sd1: 0.133,
    ts: 0.40,
};

static MAPPED_BMIN: MappedValues = MappedValues {
    ss: 0.156,
    s1: 0.042,
    fa: 1.6,
    fv: 2.4,
    sms: 0.25,
    sm1: 0.10,
    sds: 0.167,
    sd1: 0.067,
    ts: 0.40,
};

// ============================================================================
// Ground-motion scaling
// ============================================================================

// Median 5%-damped spectral acceleration of the normalized far-field record
// set, tabulated against period. Ref: FEMA P695 Appendix A.
static SNRT_TABLE: Lazy<Table1d> = Lazy::new(|| {
    Table1d::new(
        "T",
        vec![
            0.25, 0.30, 0.35, 0.40, 0.45, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0,
            2.2, 2.4, 2.6, 2.8, 3.0, 3.5, 4.0, 4.5, 5.0,
        ],
        vec![
            0.785, 0.781, 0.767, 0.754, 0.755, 0.742, 0.607, 0.541, 0.453, 0.402, 0.350, 0.303,
            0.258, 0.210, 0.169, 0.149, 0.134, 0.119, 0.106, 0.092, 0.081, 0.063, 0.053, 0.046,
            0.041,
        ],
    )
});

/// MCE spectral demand at the fundamental period.
///
/// SMS on the plateau (T at or below SM1/SMS), SM1/T beyond it.
pub fn smt(t: f64, sdc: DesignCategory) -> f64 {
    let mapped = sdc.mapped_values();
    if t <= mapped.sm1 / mapped.sms {
        mapped.sms
    } else {
        mapped.sm1 / t
    }
}

/// Scale factor 1, which scales normalized ground motions to the MCE.
///
/// The period must fall strictly inside the tabulated record-set domain;
/// the tabulated end points themselves are rejected.
///
/// Ref: FEMA P695 Section 5.2 / Appendix A
pub fn sf1(t: f64, sdc: DesignCategory) -> CalcResult<f64> {
    let snrt = SNRT_TABLE.interp(t, Edges::Exclusive)?;
    Ok(smt(t, sdc) / snrt)
}

// ============================================================================
// Spectral shape factor
// ============================================================================

// SSF grids, period (rows) by period-based ductility (columns).
// Ref: FEMA P695 Tables 7-1a (SDC B/C/Dmin) and 7-1b (SDC Dmax).

const SSF_T_AXIS: [f64; 11] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5];
const SSF_MU_AXIS: [f64; 8] = [1.0, 1.1, 1.5, 2.0, 3.0, 4.0, 6.0, 8.0];

static SSF_DMAX: Lazy<Table2d> = Lazy::new(|| {
    Table2d::new(
        "T",
        "mu_T",
        SSF_T_AXIS.to_vec(),
        SSF_MU_AXIS.to_vec(),
        vec![
            vec![1.00, 1.05, 1.10, 1.13, 1.18, 1.22, 1.28, 1.33],
            vec![1.00, 1.05, 1.11, 1.14, 1.20, 1.24, 1.30, 1.36],
            vec![1.00, 1.06, 1.11, 1.15, 1.21, 1.25, 1.32, 1.38],
            vec![1.00, 1.06, 1.12, 1.16, 1.22, 1.27, 1.35, 1.41],
            vec![1.00, 1.06, 1.13, 1.17, 1.24, 1.29, 1.37, 1.44],
            vec![1.00, 1.07, 1.13, 1.18, 1.25, 1.31, 1.39, 1.46],
            vec![1.00, 1.07, 1.14, 1.19, 1.27, 1.32, 1.41, 1.49],
            vec![1.00, 1.07, 1.15, 1.20, 1.28, 1.34, 1.44, 1.52],
            vec![1.00, 1.08, 1.16, 1.21, 1.29, 1.36, 1.46, 1.55],
            vec![1.00, 1.08, 1.16, 1.22, 1.31, 1.38, 1.49, 1.58],
            vec![1.00, 1.08, 1.17, 1.23, 1.32, 1.40, 1.51, 1.61],
        ],
    )
});

static SSF_DMIN: Lazy<Table2d> = Lazy::new(|| {
    Table2d::new(
        "T",
        "mu_T",
        SSF_T_AXIS.to_vec(),
        SSF_MU_AXIS.to_vec(),
        vec![
            vec![1.00, 1.02, 1.04, 1.06, 1.08, 1.09, 1.12, 1.14],
            vec![1.00, 1.02, 1.05, 1.07, 1.09, 1.11, 1.13, 1.16],
            vec![1.00, 1.03, 1.06, 1.08, 1.10, 1.12, 1.15, 1.18],
            vec![1.00, 1.03, 1.06, 1.08, 1.11, 1.14, 1.17, 1.20],
            vec![1.00, 1.03, 1.07, 1.09, 1.13, 1.15, 1.19, 1.22],
            vec![1.00, 1.04, 1.08, 1.10, 1.14, 1.17, 1.21, 1.25],
            vec![1.00, 1.04, 1.08, 1.11, 1.15, 1.18, 1.23, 1.27],
            vec![1.00, 1.04, 1.09, 1.12, 1.17, 1.20, 1.25, 1.30],
            vec![1.00, 1.05, 1.10, 1.13, 1.18, 1.22, 1.27, 1.32],
            vec![1.00, 1.05, 1.10, 1.14, 1.19, 1.23, 1.30, 1.35],
            vec![1.00, 1.05, 1.11, 1.15, 1.21, 1.25, 1.32, 1.37],
        ],
    )
});

/// Spectral shape factor (SSF) for the given period, period-based
/// ductility, and design category.
///
/// Ref: FEMA P695 Section 7.2.3
pub fn ssf(t: f64, mu_t: f64, sdc: DesignCategory) -> CalcResult<f64> {
    if mu_t < 1.0 {
        return Err(CalcError::out_of_range("mu_T", mu_t, 1.0, 8.0));
    }
    sdc.ssf_table().interp(t, mu_t)
}

// ============================================================================
// Design formulas
// ============================================================================

/// Code-bounded fundamental period, Cu * Ta.
///
/// `hn` is the structural height (bare numbers taken as feet); `ct` and `x`
/// are the approximate-period parameters for the structure type.
///
/// Ref: FEMA P695 Section 5.2.5
pub fn fundamental_period(
    hn: impl Into<UnitInput>,
    ct: f64,
    x: f64,
    sdc: DesignCategory,
) -> CalcResult<f64> {
    let ta = asce7::approximate_period(hn, ct, x)?;
    let cu = asce7::period_upper_limit_coeff(sdc.mapped_values().sd1)?;
    Ok(cu * ta)
}

/// Seismic response coefficient Cs from the mapped values of a design
/// category.
///
/// Follows the assumptions and restrictions of the FEMA P695 methodology:
/// mapped values only, periods of 4.0 s or lower. Longer periods still
/// compute but log a warning. For a general version see
/// [`asce7::seismic_response_coeff`].
pub fn seismic_response_coeff(r: f64, t: f64, sdc: DesignCategory) -> CalcResult<f64> {
    if r <= 0.0 {
        return Err(CalcError::invalid_input(
            "r",
            r.to_string(),
            "response modification factor must be positive",
        ));
    }
    if t > 4.0 {
        log::warn!("period out of bounds (T = {t} s); response coefficient may not be valid");
    }

    let mapped = sdc.mapped_values();
    let cs = if t <= mapped.ts {
        mapped.sds / r
    } else {
        (mapped.sd1 / (t * r)).max(0.044 * mapped.sds)
    };

    Ok(cs.max(0.01))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_total_rounds_to_fortieths() {
        let beta = beta_total(Rating::B, Rating::B, Rating::C, 3.0);
        assert_eq!(beta, 0.600);

        // beta_RTR caps at 0.4 regardless of ductility
        let capped = beta_total(Rating::B, Rating::B, Rating::C, 30.0);
        assert_eq!(capped, beta);

        let low = beta_total(Rating::A, Rating::A, Rating::A, 1.0);
        // sqrt(0.2^2 + 3 * 0.1^2) = 0.2646 -> 0.275
        assert_eq!(low, 0.275);
    }

    #[test]
    fn test_acmrxx_matches_tabulated_values() {
        // FEMA P695 Table 7-3, beta_TOT = 0.600
        assert!((acmrxx(0.600, 0.20).unwrap() - 1.66).abs() < 0.005);
        assert!((acmrxx(0.600, 0.10).unwrap() - 2.16).abs() < 0.005);
        // beta_TOT = 0.525
        assert!((acmrxx(0.525, 0.20).unwrap() - 1.56).abs() < 0.005);
    }

    #[test]
    fn test_acmrxx_validates_inputs() {
        assert!(acmrxx(0.0, 0.2).is_err());
        assert!(acmrxx(0.6, 0.0).is_err());
        assert!(acmrxx(0.6, 1.0).is_err());
    }

    #[test]
    fn test_median_collapse_probability_gives_unity() {
        let acmr = acmrxx(0.6, 0.5).unwrap();
        assert!((acmr - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_parsing() {
        assert_eq!("a".parse::<Rating>().unwrap(), Rating::A);
        assert_eq!("D".parse::<Rating>().unwrap(), Rating::D);
        assert!("E".parse::<Rating>().is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "dmax".parse::<DesignCategory>().unwrap(),
            DesignCategory::Dmax
        );
        assert_eq!(
            "Cmin".parse::<DesignCategory>().unwrap(),
            DesignCategory::Cmin
        );
        let err = "Emax".parse::<DesignCategory>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_mapped_value_aliases_share_instances() {
        assert!(std::ptr::eq(
            DesignCategory::Cmax.mapped_values(),
            DesignCategory::Dmin.mapped_values()
        ));
        assert!(std::ptr::eq(
            DesignCategory::Bmax.mapped_values(),
            DesignCategory::Cmin.mapped_values()
        ));
        assert!(!std::ptr::eq(
            DesignCategory::Dmax.mapped_values(),
            DesignCategory::Dmin.mapped_values()
        ));
    }

    #[test]
    fn test_ssf_table_aliases_share_instances() {
        assert!(std::ptr::eq(
            DesignCategory::Cmax.ssf_table(),
            DesignCategory::Dmin.ssf_table()
        ));
        assert!(std::ptr::eq(
            DesignCategory::Bmin.ssf_table(),
            DesignCategory::Cmin.ssf_table()
        ));
        assert!(!std::ptr::eq(
            DesignCategory::Dmax.ssf_table(),
            DesignCategory::Dmin.ssf_table()
        ));
    }

    #[test]
    fn test_ssf_short_period_row() {
        // T at/below 0.5 uses the first row alone; mu_T = 3 is a tabulated
        // column, so the value comes back exactly.
        let z = ssf(0.4, 3.0, DesignCategory::Dmax).unwrap();
        assert_eq!(z, 1.18);
    }

    #[test]
    fn test_ssf_corner_value() {
        // Short period and ductility at/above 8: the stored corner value.
        let z = ssf(0.3, 8.0, DesignCategory::Dmax).unwrap();
        assert_eq!(z.to_bits(), 1.33_f64.to_bits());
        let z = ssf(0.3, 11.0, DesignCategory::Dmax).unwrap();
        assert_eq!(z.to_bits(), 1.33_f64.to_bits());
    }

    #[test]
    fn test_ssf_high_ductility_interpolates_period() {
        // T strictly inside, mu_T at/above 8: last-column slice along T.
        let z = ssf(1.0, 9.0, DesignCategory::Dmax).unwrap();
        assert_eq!(z, 1.46);
    }

    #[test]
    fn test_ssf_bilinear_interior() {
        let z = ssf(0.75, 1.75, DesignCategory::Dmax).unwrap();
        // Midpoint between rows T=0.7/0.8 and columns mu=1.5/2.0
        assert!((z - 1.135).abs() < 1e-12);
    }

    #[test]
    fn test_ssf_rejects_ductility_below_one() {
        let err = ssf(1.0, 0.5, DesignCategory::Dmax).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_smt_plateau_and_descent() {
        // Dmax: SM1/SMS = 0.6
        assert_eq!(smt(0.5, DesignCategory::Dmax), 1.5);
        assert_eq!(smt(0.6, DesignCategory::Dmax), 1.5);
        assert_eq!(smt(1.2, DesignCategory::Dmax), 0.9 / 1.2);
    }

    #[test]
    fn test_sf1_value() {
        // T = 0.30 is a tabulated record-set point: SNRT = 0.781
        let sf = sf1(0.30, DesignCategory::Dmax).unwrap();
        assert!((sf - 1.5 / 0.781).abs() < 1e-12);
    }

    #[test]
    fn test_sf1_rejects_tabulated_end_points() {
        assert!(sf1(0.25, DesignCategory::Dmax).is_err());
        assert!(sf1(5.0, DesignCategory::Dmax).is_err());
        assert!(sf1(0.2500000001, DesignCategory::Dmax).is_ok());
        assert!(sf1(4.9999999999, DesignCategory::Dmax).is_ok());
    }

    #[test]
    fn test_response_coeff_piecewise() {
        // T below Ts: exactly SDS/R
        let cs = seismic_response_coeff(8.0, 0.5, DesignCategory::Dmax).unwrap();
        assert_eq!(cs, 1.0 / 8.0);

        // Above Ts: max(SD1/(T*R), 0.044*SDS)
        let cs = seismic_response_coeff(8.0, 1.0, DesignCategory::Dmax).unwrap();
        assert_eq!(cs, 0.6 / 8.0);

        let cs = seismic_response_coeff(8.0, 3.5, DesignCategory::Dmin).unwrap();
        assert!((cs - 0.044 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_response_coeff_floor() {
        let cs = seismic_response_coeff(8.0, 4.0, DesignCategory::Bmin).unwrap();
        assert_eq!(cs, 0.01);
    }

    #[test]
    fn test_fundamental_period() {
        // Ta = 0.028 * 30^0.8, Cu = 1.4 at SD1 = 0.6
        let t = fundamental_period(30.0, 0.028, 0.8, DesignCategory::Dmax).unwrap();
        let ta = 0.028 * 30.0_f64.powf(0.8);
        assert!((t - 1.4 * ta).abs() < 1e-12);
    }

    #[test]
    fn test_fundamental_period_accepts_units() {
        let from_feet = fundamental_period(30.0, 0.028, 0.8, DesignCategory::Dmax).unwrap();
        let from_pair = fundamental_period((30.0, "ft"), 0.028, 0.8, DesignCategory::Dmax).unwrap();
        assert_eq!(from_feet, from_pair);
    }
}
