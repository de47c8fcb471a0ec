//! # Steel Shapes Table (AISC)
//!
//! Section properties for structural steel shapes per the AISC Steel
//! Construction Manual. Shape rows are embedded constants (AISC Shapes
//! Database v15.0 subset) indexed by manual label; the table is built once
//! and read-only afterwards.
//!
//! The lookup contract is deliberately narrow: given a shape label and an
//! AISC column name, return the bare magnitude or fail with
//! `PropertyNotFound`. Dimensional values are US customary (inches and
//! powers thereof, lb/ft for weight).
//!
//! ## Example
//!
//! ```rust
//! use seismo_core::steel::shapes::{property_lookup, lightest_shape};
//!
//! let htw = property_lookup("W14X82", "h/tw").unwrap();
//! assert_eq!(htw, 22.4);
//!
//! let lightest = lightest_shape(&["W14X82", "W44X335"]).unwrap();
//! assert_eq!(lightest, "W14X82");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Steel shape series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Wide flange beam (W-shape)
    W,
    /// Rectangular/square hollow structural section
    Hss,
}

/// One steel shape row.
///
/// Field names follow the AISC Shapes Database columns; flange-related
/// properties are absent for hollow sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelShape {
    pub shape_type: ShapeType,
    /// AISC Manual label (e.g., "W14X90")
    pub label: String,
    /// Nominal weight per linear foot (lb/ft)
    pub weight_plf: f64,
    /// Cross-sectional area (in^2)
    pub area_in2: f64,
    /// Overall depth (in)
    pub depth_in: f64,
    /// Flange width (in)
    pub bf_in: Option<f64>,
    /// Flange thickness (in)
    pub tf_in: Option<f64>,
    /// Web thickness (in)
    pub tw_in: Option<f64>,
    /// Flange slenderness bf/2tf
    pub bf_2tf: Option<f64>,
    /// Web slenderness h/tw
    pub h_tw: Option<f64>,
    /// Strong-axis moment of inertia (in^4)
    pub ix_in4: f64,
    /// Strong-axis elastic section modulus (in^3)
    pub sx_in3: f64,
    /// Strong-axis radius of gyration (in)
    pub rx_in: f64,
    /// Strong-axis plastic section modulus (in^3)
    pub zx_in3: f64,
    /// Weak-axis moment of inertia (in^4)
    pub iy_in4: f64,
    /// Weak-axis elastic section modulus (in^3)
    pub sy_in3: f64,
    /// Weak-axis radius of gyration (in)
    pub ry_in: f64,
    /// Weak-axis plastic section modulus (in^3)
    pub zy_in3: f64,
}

impl SteelShape {
    /// Look up a property by its AISC column name.
    pub fn property(&self, name: &str) -> Option<f64> {
        match name {
            "W" => Some(self.weight_plf),
            "A" => Some(self.area_in2),
            "d" => Some(self.depth_in),
            "bf" => self.bf_in,
            "tf" => self.tf_in,
            "tw" => self.tw_in,
            "bf/2tf" => self.bf_2tf,
            "h/tw" => self.h_tw,
            "Ix" => Some(self.ix_in4),
            "Sx" => Some(self.sx_in3),
            "rx" => Some(self.rx_in),
            "Zx" => Some(self.zx_in3),
            "Iy" => Some(self.iy_in4),
            "Sy" => Some(self.sy_in3),
            "ry" => Some(self.ry_in),
            "Zy" => Some(self.zy_in3),
            _ => None,
        }
    }
}

impl std::fmt::Display for SteelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.2} in^2, Ix={:.1} in^4, Zx={:.1} in^3)",
            self.label, self.area_in2, self.ix_in4, self.zx_in3
        )
    }
}

/// Keyed steel shapes table.
///
/// Shapes are indexed by uppercase manual label; lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ShapesDb {
    shapes: HashMap<String, SteelShape>,
}

impl ShapesDb {
    fn insert(&mut self, shape: SteelShape) {
        self.shapes.insert(shape.label.to_uppercase(), shape);
    }

    /// The embedded shapes table
    pub fn builtin() -> &'static ShapesDb {
        &BUILTIN
    }

    /// Get a shape row by its manual label
    pub fn get(&self, label: &str) -> Option<&SteelShape> {
        self.shapes.get(&label.to_uppercase())
    }

    /// Number of shapes in the table
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Look up one property magnitude for one shape.
    ///
    /// Fails with `PropertyNotFound` whether the shape, the column, or the
    /// value for this particular shape is missing.
    pub fn property(&self, shape: &str, property: &str) -> CalcResult<f64> {
        self.get(shape)
            .and_then(|row| row.property(property))
            .ok_or_else(|| CalcError::property_not_found(shape, property))
    }

    /// The lightest shape (weight per length) from the given list.
    ///
    /// Works across shape series; comparing an HSS against a W works fine.
    /// Ties return one of the tied shapes, which one is unspecified.
    pub fn lightest_shape(&self, labels: &[&str]) -> CalcResult<String> {
        let mut best: Option<(&str, f64)> = None;
        for label in labels {
            let weight = self.property(label, "W")?;
            match best {
                Some((_, lightest)) if lightest <= weight => {}
                _ => best = Some((label, weight)),
            }
        }
        best.map(|(label, _)| label.to_string()).ok_or_else(|| {
            CalcError::invalid_input("labels", "[]", "at least one shape label is required")
        })
    }
}

/// Look up one property magnitude in the embedded shapes table.
pub fn property_lookup(shape: &str, property: &str) -> CalcResult<f64> {
    ShapesDb::builtin().property(shape, property)
}

/// The lightest shape from the given list, per the embedded table.
pub fn lightest_shape(labels: &[&str]) -> CalcResult<String> {
    ShapesDb::builtin().lightest_shape(labels)
}

// Wide-flange rows:
// (label, W, A, d, bf, tf, tw, bf/2tf, h/tw, Ix, Sx, rx, Zx, Iy, Sy, ry, Zy)
#[rustfmt::skip]
const W_ROWS: [(&str, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64); 12] = [
    ("W14X22",  22.0,  6.49, 13.7,  5.00, 0.335, 0.230, 7.46, 53.3,   199.0,   29.0,  5.54,   33.2,    7.00,   2.80, 1.04,   4.39),
    ("W14X82",  82.0, 24.0,  14.3, 10.1,  0.855, 0.510, 5.92, 22.4,   881.0,  123.0,  6.05,  139.0,  148.0,   29.3,  2.48,  44.8),
    ("W14X90",  90.0, 26.5,  14.0, 14.5,  0.710, 0.440, 10.2, 25.9,   999.0,  143.0,  6.14,  157.0,  362.0,   49.9,  3.70,  75.6),
    ("W12X26",  26.0,  7.65, 12.2,  6.49, 0.380, 0.230, 8.54, 47.2,   204.0,   33.4,  5.17,   37.2,   17.3,    5.34, 1.51,   8.17),
    ("W12X40",  40.0, 11.7,  11.9,  8.01, 0.515, 0.295, 7.77, 33.6,   307.0,   51.5,  5.13,   57.0,   44.1,   11.0,  1.94,  16.8),
    ("W16X36",  36.0, 10.6,  15.9,  6.99, 0.430, 0.295, 8.12, 48.1,   448.0,   56.5,  6.51,   64.0,   24.5,    7.00, 1.52,  10.8),
    ("W18X50",  50.0, 14.7,  18.0,  7.50, 0.570, 0.355, 6.57, 45.2,   800.0,   88.9,  7.38,  101.0,   40.1,   10.7,  1.65,  16.6),
    ("W21X44",  44.0, 13.0,  20.7,  6.50, 0.450, 0.350, 7.22, 53.6,   843.0,   81.6,  8.06,   95.4,   20.7,    6.37, 1.26,  10.2),
    ("W24X76",  76.0, 22.4,  23.9,  8.99, 0.680, 0.440, 6.61, 49.0,  2100.0,  176.0,  9.69,  200.0,   82.5,   18.4,  1.92,  28.6),
    ("W27X94",  94.0, 27.6,  26.9, 10.0,  0.745, 0.490, 6.70, 49.5,  3270.0,  243.0, 10.9,   278.0,  124.0,   24.8,  2.12,  38.8),
    ("W36X150", 150.0, 44.3, 35.9, 12.0,  0.940, 0.625, 6.37, 51.9,  9040.0,  504.0, 14.3,   581.0,  270.0,   45.1,  2.47,  70.9),
    ("W44X335", 335.0, 98.5, 44.0, 15.9,  1.77,  1.03,  4.50, 38.0, 31100.0, 1410.0, 17.8,  1620.0, 1200.0,  150.0,  3.49, 236.0),
];

// Hollow sections: (label, W, A, depth, Ix, Sx, rx, Zx, Iy, Sy, ry, Zy)
#[rustfmt::skip]
const HSS_ROWS: [(&str, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64); 2] = [
    ("HSS4X4X1/2", 21.63, 5.97, 4.0, 11.9, 5.94, 1.41,  7.42, 11.9, 5.94, 1.41,  7.42),
    ("HSS6X6X1/4", 19.02, 5.24, 6.0, 28.6, 9.54, 2.34, 11.2,  28.6, 9.54, 2.34, 11.2),
];

static BUILTIN: Lazy<ShapesDb> = Lazy::new(|| {
    let mut db = ShapesDb::default();

    for (label, w, a, d, bf, tf, tw, bf2tf, htw, ix, sx, rx, zx, iy, sy, ry, zy) in W_ROWS {
        db.insert(SteelShape {
            shape_type: ShapeType::W,
            label: label.to_string(),
            weight_plf: w,
            area_in2: a,
            depth_in: d,
            bf_in: Some(bf),
            tf_in: Some(tf),
            tw_in: Some(tw),
            bf_2tf: Some(bf2tf),
            h_tw: Some(htw),
            ix_in4: ix,
            sx_in3: sx,
            rx_in: rx,
            zx_in3: zx,
            iy_in4: iy,
            sy_in3: sy,
            ry_in: ry,
            zy_in3: zy,
        });
    }

    for (label, w, a, d, ix, sx, rx, zx, iy, sy, ry, zy) in HSS_ROWS {
        db.insert(SteelShape {
            shape_type: ShapeType::Hss,
            label: label.to_string(),
            weight_plf: w,
            area_in2: a,
            depth_in: d,
            bf_in: None,
            tf_in: None,
            tw_in: None,
            bf_2tf: None,
            h_tw: None,
            ix_in4: ix,
            sx_in3: sx,
            rx_in: rx,
            zx_in3: zx,
            iy_in4: iy,
            sy_in3: sy,
            ry_in: ry,
            zy_in3: zy,
        });
    }

    db
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let db = ShapesDb::builtin();
        assert!(!db.is_empty());
        assert_eq!(db.len(), W_ROWS.len() + HSS_ROWS.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let db = ShapesDb::builtin();
        let upper = db.get("W14X90").unwrap();
        let lower = db.get("w14x90").unwrap();
        assert_eq!(upper.label, lower.label);
    }

    #[test]
    fn test_property_lookup() {
        assert_eq!(property_lookup("W14X90", "A").unwrap(), 26.5);
        assert_eq!(property_lookup("W14X90", "bf/2tf").unwrap(), 10.2);
        assert_eq!(property_lookup("w21x44", "h/tw").unwrap(), 53.6);
    }

    #[test]
    fn test_property_not_found() {
        let err = property_lookup("W99X999", "A").unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");

        let err = property_lookup("W14X90", "Qz").unwrap_err();
        assert_eq!(err, CalcError::property_not_found("W14X90", "Qz"));

        // HSS rows carry no flange slenderness
        let err = property_lookup("HSS4X4X1/2", "bf/2tf").unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn test_lightest_shape_same_series() {
        let lightest = lightest_shape(&["W14X82", "W44X335"]).unwrap();
        assert_eq!(lightest, "W14X82");
    }

    #[test]
    fn test_lightest_shape_across_series() {
        let lightest = lightest_shape(&["W14X82", "HSS4X4X1/2"]).unwrap();
        assert_eq!(lightest, "HSS4X4X1/2");
    }

    #[test]
    fn test_lightest_shape_unknown_label() {
        let err = lightest_shape(&["W14X82", "W1X1"]).unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn test_lightest_shape_empty_list() {
        assert!(lightest_shape(&[]).is_err());
    }

    #[test]
    fn test_shape_display() {
        let shape = ShapesDb::builtin().get("W14X90").unwrap();
        let display = shape.to_string();
        assert!(display.contains("W14X90"));
        assert!(display.contains("26.5"));
    }
}
