//! # ASCE 7-16 Seismic Coefficients
//!
//! Approximate-period and response-coefficient helpers per ASCE 7-16
//! Section 12.8 (Equivalent Lateral Force procedure).
//!
//! Structure heights are accepted through the unit parser with feet as the
//! default, so callers may pass a bare number, a (value, unit) pair, or a
//! string like `"30 ft"`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::interp::{Edges, Table1d};
use crate::units::{parse_unit_input, UnitInput};

/// ASCE 7 code section references for the coefficients in this module.
pub mod asce_ref {
    /// Approximate fundamental period Ta
    pub const APPROXIMATE_PERIOD: &str = "ASCE 7-16 Eq. 12.8-7";
    /// Coefficient for upper limit on calculated period
    pub const PERIOD_UPPER_LIMIT: &str = "ASCE 7-16 Table 12.8-1";
    /// Approximate period parameters Ct and x
    pub const PERIOD_PARAMETERS: &str = "ASCE 7-16 Table 12.8-2";
    /// Seismic response coefficient Cs
    pub const RESPONSE_COEFF: &str = "ASCE 7-16 Section 12.8.1.1";
}

/// Structure type selecting the approximate-period parameters (Ct, x)
/// per ASCE 7-16 Table 12.8-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    /// Steel moment-resisting frame
    SteelMomentFrame,
    /// Concrete moment-resisting frame
    ConcreteMomentFrame,
    /// Steel eccentrically braced frame
    EccentricallyBracedFrame,
    /// Steel buckling-restrained braced frame
    BucklingRestrainedBracedFrame,
    /// All other structural systems
    AllOther,
}

impl StructureType {
    /// All structure types for iteration
    pub const ALL: [StructureType; 5] = [
        StructureType::SteelMomentFrame,
        StructureType::ConcreteMomentFrame,
        StructureType::EccentricallyBracedFrame,
        StructureType::BucklingRestrainedBracedFrame,
        StructureType::AllOther,
    ];

    /// Period parameter Ct
    pub fn ct(&self) -> f64 {
        match self {
            StructureType::SteelMomentFrame => 0.028,
            StructureType::ConcreteMomentFrame => 0.016,
            StructureType::EccentricallyBracedFrame => 0.03,
            StructureType::BucklingRestrainedBracedFrame => 0.03,
            StructureType::AllOther => 0.02,
        }
    }

    /// Period parameter x
    pub fn x(&self) -> f64 {
        match self {
            StructureType::SteelMomentFrame => 0.8,
            StructureType::ConcreteMomentFrame => 0.9,
            StructureType::EccentricallyBracedFrame => 0.75,
            StructureType::BucklingRestrainedBracedFrame => 0.75,
            StructureType::AllOther => 0.75,
        }
    }

    /// Approximate fundamental period for a structure of this type
    pub fn approximate_period(&self, hn: impl Into<UnitInput>) -> CalcResult<f64> {
        approximate_period(hn, self.ct(), self.x())
    }
}

/// Approximate fundamental period Ta = Ct * hn^x (s).
///
/// `hn` is the structural height above the base; bare numbers are taken as
/// feet.
pub fn approximate_period(hn: impl Into<UnitInput>, ct: f64, x: f64) -> CalcResult<f64> {
    let hn_ft = parse_unit_input(hn, Some("ft"), true, false)?.scalar()?;
    if hn_ft <= 0.0 {
        return Err(CalcError::invalid_input(
            "hn",
            hn_ft.to_string(),
            "structural height must be positive",
        ));
    }
    Ok(ct * hn_ft.powf(x))
}

// Cu curve from Table 12.8-1; flat beyond both tabulated ends.
static CU_TABLE: Lazy<Table1d> = Lazy::new(|| {
    Table1d::new(
        "SD1",
        vec![0.1, 0.15, 0.2, 0.3, 0.4],
        vec![1.7, 1.6, 1.5, 1.4, 1.4],
    )
});

/// Coefficient for the upper limit on the calculated period, Cu.
pub fn period_upper_limit_coeff(sd1: f64) -> CalcResult<f64> {
    CU_TABLE.interp(sd1, Edges::Clamp)
}

/// Seismic response coefficient Cs per Section 12.8.1.1.
///
/// `ts` = SD1/SDS is the short/1-s spectral transition period. Periods at
/// or below `ts` use the flat plateau SDS/(R/Ie); longer periods use the
/// descending branch SD1/(T*(R/Ie)), floored at max(0.044*SDS*Ie, 0.01).
pub fn seismic_response_coeff(
    sds: f64,
    sd1: f64,
    ts: f64,
    t: f64,
    r: f64,
    ie: f64,
) -> CalcResult<f64> {
    if r <= 0.0 {
        return Err(CalcError::invalid_input(
            "r",
            r.to_string(),
            "response modification factor must be positive",
        ));
    }
    if ie <= 0.0 {
        return Err(CalcError::invalid_input(
            "ie",
            ie.to_string(),
            "importance factor must be positive",
        ));
    }
    if t < 0.0 {
        return Err(CalcError::invalid_input(
            "t",
            t.to_string(),
            "period cannot be negative",
        ));
    }

    let cs = if t <= ts {
        sds / (r / ie)
    } else {
        (sd1 / (t * (r / ie))).max(0.044 * sds * ie)
    };

    Ok(cs.max(0.01))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_period() {
        // Ta = 0.028 * 30^0.8 for a 30 ft steel moment frame
        let ta = StructureType::SteelMomentFrame
            .approximate_period(30.0)
            .unwrap();
        assert!((ta - 0.028 * 30.0_f64.powf(0.8)).abs() < 1e-12);
    }

    #[test]
    fn test_approximate_period_accepts_units() {
        let from_feet = approximate_period(30.0, 0.02, 0.75).unwrap();
        let from_meters = approximate_period((9.144, "m"), 0.02, 0.75).unwrap();
        assert!((from_feet - from_meters).abs() < 1e-9);
    }

    #[test]
    fn test_approximate_period_rejects_nonpositive_height() {
        let err = approximate_period(0.0, 0.02, 0.75).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_period_upper_limit_coeff() {
        assert_eq!(period_upper_limit_coeff(0.05).unwrap(), 1.7);
        assert_eq!(period_upper_limit_coeff(0.1).unwrap(), 1.7);
        assert!((period_upper_limit_coeff(0.175).unwrap() - 1.55).abs() < 1e-12);
        assert_eq!(period_upper_limit_coeff(0.4).unwrap(), 1.4);
        assert_eq!(period_upper_limit_coeff(0.6).unwrap(), 1.4);
    }

    #[test]
    fn test_response_coeff_plateau_and_descent() {
        // On the plateau: Cs = SDS / (R/Ie)
        let cs = seismic_response_coeff(1.0, 0.6, 0.6, 0.5, 8.0, 1.0).unwrap();
        assert_eq!(cs, 1.0 / 8.0);

        // Descending branch: Cs = SD1 / (T * R/Ie)
        let cs = seismic_response_coeff(1.0, 0.6, 0.6, 1.0, 8.0, 1.0).unwrap();
        assert_eq!(cs, 0.6 / 8.0);
    }

    #[test]
    fn test_response_coeff_floors() {
        // 0.044*SDS*Ie governs over the descending branch
        let cs = seismic_response_coeff(0.5, 0.2, 0.4, 3.5, 8.0, 1.0).unwrap();
        assert!((cs - 0.044 * 0.5).abs() < 1e-12);

        // Absolute floor of 0.01
        let cs = seismic_response_coeff(0.167, 0.067, 0.4, 4.0, 8.0, 1.0).unwrap();
        assert_eq!(cs, 0.01);
    }

    #[test]
    fn test_response_coeff_validates_factors() {
        assert!(seismic_response_coeff(1.0, 0.6, 0.6, 1.0, 0.0, 1.0).is_err());
        assert!(seismic_response_coeff(1.0, 0.6, 0.6, 1.0, 8.0, -1.0).is_err());
    }

    #[test]
    fn test_importance_factor_scales_plateau() {
        let ordinary = seismic_response_coeff(1.0, 0.6, 0.6, 0.5, 8.0, 1.0).unwrap();
        let essential = seismic_response_coeff(1.0, 0.6, 0.6, 0.5, 8.0, 1.5).unwrap();
        assert!((essential / ordinary - 1.5).abs() < 1e-12);
    }
}
