//! # Steel Design
//!
//! Structural steel materials and seismic compactness checks per AISC 341-16.
//!
//! ## Material Data
//!
//! Material rows come from AISC 341-16 Table A3.1 (expected strength
//! factors Ry and Rt) with specified strengths per the referenced ASTM
//! standards. Properties are stored as unit-tagged quantities in ksi and
//! convert through the unit layer (`material.fy.to_units("MPa")`).
//!
//! ## Example
//!
//! ```rust
//! use seismo_core::steel::{check_seismic_wtr_wide_flange, DuctilityLevel, MemberType, SteelMaterial};
//!
//! let material = SteelMaterial::from_name("A992", None, None).unwrap();
//! let check = check_seismic_wtr_wide_flange(
//!     "W14X82",
//!     MemberType::Column,
//!     DuctilityLevel::High,
//!     0.3,
//!     &material,
//! )
//! .unwrap();
//! assert!(check.passed);
//! ```

pub mod shapes;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Quantity;

pub use shapes::{lightest_shape, property_lookup, ShapeType, ShapesDb, SteelShape};

/// A structural steel material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// ASTM designation (e.g., "A992")
    pub name: String,
    /// Grade within the designation, where the standard defines one
    pub grade: Option<String>,
    /// Product application (hot-rolled shape, HSS, pipe)
    pub application: Option<String>,
    /// Elastic modulus
    pub e: Quantity,
    /// Specified minimum yield stress
    pub fy: Quantity,
    /// Specified minimum tensile strength
    pub fu: Quantity,
    /// Expected yield stress factor Ry
    pub ry: f64,
    /// Expected tensile strength factor Rt
    pub rt: f64,
}

impl SteelMaterial {
    /// Construct a material from strengths in ksi.
    ///
    /// The yield stress must not exceed the tensile strength.
    pub fn new(
        name: &str,
        fy_ksi: f64,
        fu_ksi: f64,
        ry: f64,
        rt: f64,
    ) -> CalcResult<SteelMaterial> {
        if fy_ksi > fu_ksi {
            return Err(CalcError::invalid_input(
                "fy",
                fy_ksi.to_string(),
                "yield stress must not exceed tensile strength",
            ));
        }
        Ok(SteelMaterial {
            name: name.to_string(),
            grade: None,
            application: None,
            e: Quantity::from_parts(29000.0, "ksi")?,
            fy: Quantity::from_parts(fy_ksi, "ksi")?,
            fu: Quantity::from_parts(fu_ksi, "ksi")?,
            ry,
            rt,
        })
    }

    /// Look up a material, possibly partially specified.
    ///
    /// `grade` and `application` narrow the match when a designation covers
    /// several products. Fails with `MaterialNotFound` when nothing matches
    /// and `InvalidInput` when more than one row does.
    pub fn from_name(
        name: &str,
        grade: Option<&str>,
        application: Option<&str>,
    ) -> CalcResult<SteelMaterial> {
        let matches: Vec<&MaterialRow> = MATERIAL_TABLE
            .iter()
            .filter(|row| row.name.eq_ignore_ascii_case(name))
            .filter(|row| match grade {
                Some(grade) => row.grade.is_some_and(|g| g.eq_ignore_ascii_case(grade)),
                None => true,
            })
            .filter(|row| match application {
                Some(app) => row.application.eq_ignore_ascii_case(app),
                None => true,
            })
            .collect();

        match matches.as_slice() {
            [] => Err(CalcError::material_not_found(describe(
                name,
                grade,
                application,
            ))),
            [row] => {
                let mut material = SteelMaterial::new(row.name, row.fy_ksi, row.fu_ksi, row.ry, row.rt)?;
                material.grade = row.grade.map(str::to_string);
                material.application = Some(row.application.to_string());
                Ok(material)
            }
            several => Err(CalcError::invalid_input(
                "name",
                describe(name, grade, application),
                format!("ambiguous: matches {} materials", several.len()),
            )),
        }
    }

    /// Expected yield stress, Ry * Fy
    pub fn expected_fy(&self) -> Quantity {
        self.fy.scaled(self.ry)
    }

    /// Expected tensile strength, Rt * Fu
    pub fn expected_fu(&self) -> Quantity {
        self.fu.scaled(self.rt)
    }
}

fn describe(name: &str, grade: Option<&str>, application: Option<&str>) -> String {
    let mut out = name.to_string();
    if let Some(grade) = grade {
        out.push_str(" Gr. ");
        out.push_str(grade);
    }
    if let Some(application) = application {
        out.push_str(" (");
        out.push_str(application);
        out.push(')');
    }
    out
}

struct MaterialRow {
    name: &'static str,
    grade: Option<&'static str>,
    application: &'static str,
    fy_ksi: f64,
    fu_ksi: f64,
    ry: f64,
    rt: f64,
}

// AISC 341-16 Table A3.1
static MATERIAL_TABLE: [MaterialRow; 7] = [
    MaterialRow { name: "A36", grade: None, application: "Hot-rolled", fy_ksi: 36.0, fu_ksi: 58.0, ry: 1.5, rt: 1.2 },
    MaterialRow { name: "A53", grade: Some("B"), application: "Pipe", fy_ksi: 35.0, fu_ksi: 60.0, ry: 1.6, rt: 1.2 },
    MaterialRow { name: "A500", grade: Some("B"), application: "HSS", fy_ksi: 46.0, fu_ksi: 58.0, ry: 1.4, rt: 1.3 },
    MaterialRow { name: "A500", grade: Some("C"), application: "HSS", fy_ksi: 50.0, fu_ksi: 62.0, ry: 1.3, rt: 1.2 },
    MaterialRow { name: "A572", grade: Some("50"), application: "Hot-rolled", fy_ksi: 50.0, fu_ksi: 65.0, ry: 1.1, rt: 1.1 },
    MaterialRow { name: "A913", grade: Some("65"), application: "Hot-rolled", fy_ksi: 65.0, fu_ksi: 80.0, ry: 1.1, rt: 1.1 },
    MaterialRow { name: "A992", grade: None, application: "Hot-rolled", fy_ksi: 50.0, fu_ksi: 65.0, ry: 1.1, rt: 1.1 },
];

/// Structural role of the member being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    Brace,
    Beam,
    Column,
}

/// Ductility level of the seismic force-resisting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuctilityLevel {
    Moderate,
    High,
}

/// Result of a seismic width-to-thickness check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WtrCheck {
    /// Both ratios within their limits
    pub passed: bool,
    /// Web slenderness h/tw of the section
    pub ht: f64,
    /// Limiting h/tw
    pub ht_max: f64,
    /// Flange slenderness bf/2tf of the section
    pub bt: f64,
    /// Limiting bf/2tf
    pub bt_max: f64,
}

/// Check the width-to-thickness ratios of a seismic wide-flange element.
///
/// `ca` = Pu / (phi_c * Py) adjusts the web limit for beams and columns;
/// braces ignore it. Limits follow AISC 341-16 Table D1.1, using the
/// expected yield stress of the material.
pub fn check_seismic_wtr_wide_flange(
    shape: &str,
    member_type: MemberType,
    level: DuctilityLevel,
    ca: f64,
    material: &SteelMaterial,
) -> CalcResult<WtrCheck> {
    let ht = property_lookup(shape, "h/tw")?;
    let bt = property_lookup(shape, "bf/2tf")?;

    let e_ksi = material.e.to_units("ksi")?.scalar()?;
    let efy_ksi = material.expected_fy().to_units("ksi")?.scalar()?;
    let common_root = (e_ksi / efy_ksi).sqrt();

    let (ht_max, bt_max) = match member_type {
        MemberType::Brace => {
            let limit = 1.57 * common_root;
            (limit, limit)
        }
        MemberType::Beam | MemberType::Column => {
            if !(0.0..1.0).contains(&ca) {
                return Err(CalcError::invalid_input(
                    "ca",
                    ca.to_string(),
                    "Pu/(phi_c*Py) must lie in [0, 1)",
                ));
            }
            match level {
                DuctilityLevel::Moderate => {
                    let bt_max = 0.40 * common_root;
                    let ht_max = if ca <= 0.114 {
                        3.96 * common_root * (1.0 - 3.04 * ca)
                    } else {
                        (1.29 * common_root * (2.12 - ca)).max(1.57 * common_root)
                    };
                    (ht_max, bt_max)
                }
                DuctilityLevel::High => {
                    let bt_max = 0.32 * common_root;
                    let ht_max = if ca <= 0.114 {
                        2.57 * common_root * (1.0 - 1.04 * ca)
                    } else {
                        (0.88 * common_root * (2.68 - ca)).max(1.57 * common_root)
                    };
                    (ht_max, bt_max)
                }
            }
        }
    };

    Ok(WtrCheck {
        passed: ht <= ht_max && bt <= bt_max,
        ht,
        ht_max,
        bt,
        bt_max,
    })
}

/// LaTeX code for nicely typesetting a steel section name.
///
/// The "by" separator is assumed to be an `X`, with compound fractions
/// separated by a hyphen. Output requires the LaTeX package `nicefrac` or
/// its superpackage `units`.
///
/// ```rust
/// use seismo_core::steel::latex_name;
///
/// assert_eq!(
///     latex_name("HSS3-1/2X3-1/2X3/16"),
///     "HSS3-\\nicefrac{1}{2}$\\times$3-\\nicefrac{1}{2}$\\times$\\nicefrac{3}{16}"
/// );
/// ```
pub fn latex_name(shape: &str) -> String {
    fn nicefrac(frac: &str) -> String {
        match frac.split_once('/') {
            Some((numer, denom)) => format!("\\nicefrac{{{numer}}}{{{denom}}}"),
            None => frac.to_string(),
        }
    }

    shape
        .split('X')
        .map(|part| {
            if part.contains('/') {
                match part.split_once('-') {
                    // compound fraction, e.g. "3-1/2"
                    Some((front, frac)) => format!("{front}-{}", nicefrac(frac)),
                    None => nicefrac(part),
                }
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("$\\times$")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ksi(q: &Quantity) -> f64 {
        q.to_units("ksi").unwrap().scalar().unwrap()
    }

    #[test]
    fn test_material_lookup_exact_match() {
        let material = SteelMaterial::from_name("A500", Some("C"), Some("HSS")).unwrap();
        assert_eq!(ksi(&material.e), 29000.0);
        assert_eq!(ksi(&material.fy), 50.0);
        assert_eq!(ksi(&material.fu), 62.0);
        assert_eq!(material.ry, 1.3);
        assert_eq!(material.rt, 1.2);
    }

    #[test]
    fn test_material_lookup_partial_match() {
        let material = SteelMaterial::from_name("A500", Some("C"), None).unwrap();
        assert_eq!(ksi(&material.fy), 50.0);
        assert_eq!(ksi(&material.fu), 62.0);

        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        assert_eq!(ksi(&material.fy), 50.0);
        assert_eq!(ksi(&material.fu), 65.0);
        assert_eq!(material.ry, 1.1);
        assert_eq!(material.rt, 1.1);
    }

    #[test]
    fn test_material_lookup_ambiguous() {
        let err = SteelMaterial::from_name("A500", None, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_material_lookup_not_found() {
        let err = SteelMaterial::from_name("A7", None, None).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_material_strength_ordering_enforced() {
        let err = SteelMaterial::new("backwards", 65.0, 50.0, 1.1, 1.1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_expected_strengths() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        assert!((ksi(&material.expected_fy()) - 55.0).abs() < 1e-12);
        assert!((ksi(&material.expected_fu()) - 71.5).abs() < 1e-12);
    }

    #[test]
    fn test_material_converts_to_si() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let fy_mpa = material.fy.to_units("MPa").unwrap().scalar().unwrap();
        assert!((fy_mpa - 344.7378646584).abs() < 1e-6);
    }

    #[test]
    fn test_wtr_column_passes() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let check = check_seismic_wtr_wide_flange(
            "W14X82",
            MemberType::Column,
            DuctilityLevel::High,
            0.3,
            &material,
        )
        .unwrap();

        let root = (29000.0_f64 / 55.0).sqrt();
        assert!((check.bt_max - 0.32 * root).abs() < 1e-9);
        assert!((check.ht_max - 0.88 * root * (2.68 - 0.3)).abs() < 1e-9);
        assert_eq!(check.ht, 22.4);
        assert_eq!(check.bt, 5.92);
        assert!(check.passed);
    }

    #[test]
    fn test_wtr_slender_flange_fails() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let check = check_seismic_wtr_wide_flange(
            "W14X22",
            MemberType::Beam,
            DuctilityLevel::High,
            0.05,
            &material,
        )
        .unwrap();
        // bf/2tf = 7.46 exceeds 0.32*sqrt(E/eFy) = 7.35
        assert!(check.bt > check.bt_max);
        assert!(!check.passed);
    }

    #[test]
    fn test_wtr_low_ca_web_branch() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let check = check_seismic_wtr_wide_flange(
            "W14X82",
            MemberType::Beam,
            DuctilityLevel::Moderate,
            0.05,
            &material,
        )
        .unwrap();
        let root = (29000.0_f64 / 55.0).sqrt();
        assert!((check.ht_max - 3.96 * root * (1.0 - 3.04 * 0.05)).abs() < 1e-9);
    }

    #[test]
    fn test_wtr_high_ca_floor() {
        // At high axial load the 1.57*sqrt(E/eFy) floor governs the web
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let check = check_seismic_wtr_wide_flange(
            "W14X82",
            MemberType::Column,
            DuctilityLevel::High,
            0.95,
            &material,
        )
        .unwrap();
        let root = (29000.0_f64 / 55.0).sqrt();
        assert!((check.ht_max - 1.57 * root).abs() < 1e-9);
    }

    #[test]
    fn test_wtr_brace_ignores_ca() {
        let material = SteelMaterial::from_name("A500", Some("C"), None).unwrap();
        let a = check_seismic_wtr_wide_flange(
            "W12X26",
            MemberType::Brace,
            DuctilityLevel::High,
            0.0,
            &material,
        )
        .unwrap();
        let b = check_seismic_wtr_wide_flange(
            "W12X26",
            MemberType::Brace,
            DuctilityLevel::High,
            5.0,
            &material,
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ht_max, a.bt_max);
    }

    #[test]
    fn test_wtr_rejects_invalid_ca() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let err = check_seismic_wtr_wide_flange(
            "W14X82",
            MemberType::Column,
            DuctilityLevel::High,
            1.2,
            &material,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_wtr_unknown_shape() {
        let material = SteelMaterial::from_name("A992", None, None).unwrap();
        let err = check_seismic_wtr_wide_flange(
            "W99X1",
            MemberType::Beam,
            DuctilityLevel::High,
            0.1,
            &material,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn test_latex_name_plain() {
        assert_eq!(latex_name("W14X90"), "W14$\\times$90");
    }

    #[test]
    fn test_latex_name_fractions() {
        assert_eq!(
            latex_name("HSS4X4X1/2"),
            "HSS4$\\times$4$\\times$\\nicefrac{1}{2}"
        );
    }
}
