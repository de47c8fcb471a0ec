//! # Unit Registry
//!
//! Named unit definitions and unit-expression parsing.
//!
//! Each unit carries a base-dimension exponent vector and a scale factor to
//! SI base units (meter, kilogram, second, kelvin). Two units are
//! dimensionally compatible iff their exponent vectors are equal; conversion
//! between compatible units is a ratio of scale factors.
//!
//! The registry is built once behind a `Lazy` static and never mutated
//! afterwards, so it can be shared freely across threads.
//!
//! ## Supported expression grammar
//!
//! ```text
//! expr     = segment ("/" segment)*          first segment is the numerator,
//!                                            every later one divides
//! segment  = factor (("*" | whitespace) factor)*
//! factor   = name (("^" | "**") integer)?
//! ```
//!
//! Examples: `"psi"`, `"kip/in^2"`, `"lbf * ft"`, `"kg/m/s^2"`.
//! Parentheses and affine units (°C, °F) are not modeled.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CalcError, CalcResult};

/// Base-dimension exponent vector.
///
/// The physical kind a unit measures, independent of scale. Stress, for
/// example, is `length^-1 mass^1 time^-2` no matter whether it is expressed
/// in psi or MPa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub temperature: i8,
}

impl Dimensions {
    pub const DIMENSIONLESS: Dimensions = Dimensions::new(0, 0, 0, 0);
    pub const LENGTH: Dimensions = Dimensions::new(1, 0, 0, 0);
    pub const MASS: Dimensions = Dimensions::new(0, 1, 0, 0);
    pub const TIME: Dimensions = Dimensions::new(0, 0, 1, 0);
    pub const TEMPERATURE: Dimensions = Dimensions::new(0, 0, 0, 1);
    /// force = mass * acceleration
    pub const FORCE: Dimensions = Dimensions::new(1, 1, -2, 0);
    /// stress = force / length^2
    pub const STRESS: Dimensions = Dimensions::new(-1, 1, -2, 0);

    pub const fn new(length: i8, mass: i8, time: i8, temperature: i8) -> Self {
        Dimensions {
            length,
            mass,
            time,
            temperature,
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Dimensions::DIMENSIONLESS
    }

    fn mul(self, other: Dimensions) -> Dimensions {
        Dimensions {
            length: self.length + other.length,
            mass: self.mass + other.mass,
            time: self.time + other.time,
            temperature: self.temperature + other.temperature,
        }
    }

    fn pow(self, exp: i8) -> Dimensions {
        Dimensions {
            length: self.length * exp,
            mass: self.mass * exp,
            time: self.time * exp,
            temperature: self.temperature * exp,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let mut first = true;
        for (label, exp) in [
            ("[length]", self.length),
            ("[mass]", self.mass),
            ("[time]", self.time),
            ("[temperature]", self.temperature),
        ] {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{label}")?;
            } else {
                write!(f, "{label}^{exp}")?;
            }
        }
        Ok(())
    }
}

/// A parsed, canonical unit expression.
///
/// Holds the display text of the expression together with the resolved
/// dimension vector and the combined scale factor to SI base units.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    text: String,
    dims: Dimensions,
    scale: f64,
}

impl UnitSpec {
    /// The dimensionless unit
    pub fn dimensionless() -> UnitSpec {
        UnitSpec {
            text: "dimensionless".to_string(),
            dims: Dimensions::DIMENSIONLESS,
            scale: 1.0,
        }
    }

    /// Display text of the expression (as given to the registry)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Base-dimension exponent vector
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Scale factor to SI base units
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Dimensional compatibility: equal base-dimension vectors
    pub fn is_compatible(&self, other: &UnitSpec) -> bool {
        self.dims == other.dims
    }

    /// Factor that converts a magnitude in `self` to a magnitude in `target`
    pub fn conversion_factor(&self, target: &UnitSpec) -> CalcResult<f64> {
        if !self.is_compatible(target) {
            return Err(CalcError::dimensionality(
                self.text(),
                target.text(),
                self.dims.to_string(),
                target.dims.to_string(),
            ));
        }
        Ok(self.scale / target.scale)
    }
}

impl fmt::Display for UnitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for UnitSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for UnitSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        UnitRegistry::shared()
            .parse_units(&text)
            .map_err(D::Error::custom)
    }
}

/// A single named unit definition
#[derive(Debug)]
struct UnitDef {
    name: &'static str,
    aliases: &'static [&'static str],
    dims: Dimensions,
    /// Scale factor to SI base units (m, kg, s, K)
    scale: f64,
}

// Exact US customary definitions: 1 in = 0.0254 m, 1 lbf = 4.4482216152605 N.
const INCH: f64 = 0.0254;
const LBF: f64 = 4.448_221_615_260_5;
const PSI: f64 = LBF / (INCH * INCH);
const PSF: f64 = LBF / (0.3048 * 0.3048);

static UNIT_DEFS: &[UnitDef] = &[
    // Length
    UnitDef {
        name: "meter",
        aliases: &["m", "metre"],
        dims: Dimensions::LENGTH,
        scale: 1.0,
    },
    UnitDef {
        name: "millimeter",
        aliases: &["mm"],
        dims: Dimensions::LENGTH,
        scale: 1.0e-3,
    },
    UnitDef {
        name: "centimeter",
        aliases: &["cm"],
        dims: Dimensions::LENGTH,
        scale: 1.0e-2,
    },
    UnitDef {
        name: "kilometer",
        aliases: &["km"],
        dims: Dimensions::LENGTH,
        scale: 1.0e3,
    },
    UnitDef {
        name: "inch",
        aliases: &["in", "inches"],
        dims: Dimensions::LENGTH,
        scale: INCH,
    },
    UnitDef {
        name: "foot",
        aliases: &["ft", "feet"],
        dims: Dimensions::LENGTH,
        scale: 0.3048,
    },
    UnitDef {
        name: "yard",
        aliases: &["yd"],
        dims: Dimensions::LENGTH,
        scale: 0.9144,
    },
    UnitDef {
        name: "mile",
        aliases: &["mi"],
        dims: Dimensions::LENGTH,
        scale: 1609.344,
    },
    // Mass
    UnitDef {
        name: "kilogram",
        aliases: &["kg"],
        dims: Dimensions::MASS,
        scale: 1.0,
    },
    UnitDef {
        name: "gram",
        aliases: &["g"],
        dims: Dimensions::MASS,
        scale: 1.0e-3,
    },
    UnitDef {
        name: "pound_mass",
        aliases: &["lbm"],
        dims: Dimensions::MASS,
        scale: 0.453_592_37,
    },
    UnitDef {
        name: "slug",
        aliases: &[],
        dims: Dimensions::MASS,
        scale: 14.593_902_94,
    },
    // Time
    UnitDef {
        name: "second",
        aliases: &["s", "sec"],
        dims: Dimensions::TIME,
        scale: 1.0,
    },
    UnitDef {
        name: "minute",
        aliases: &["min"],
        dims: Dimensions::TIME,
        scale: 60.0,
    },
    UnitDef {
        name: "hour",
        aliases: &["h", "hr"],
        dims: Dimensions::TIME,
        scale: 3600.0,
    },
    // Temperature (absolute scale only; no affine units)
    UnitDef {
        name: "kelvin",
        aliases: &["K"],
        dims: Dimensions::TEMPERATURE,
        scale: 1.0,
    },
    // Force
    UnitDef {
        name: "newton",
        aliases: &["N"],
        dims: Dimensions::FORCE,
        scale: 1.0,
    },
    UnitDef {
        name: "kilonewton",
        aliases: &["kN"],
        dims: Dimensions::FORCE,
        scale: 1.0e3,
    },
    UnitDef {
        name: "pound_force",
        aliases: &["lbf"],
        dims: Dimensions::FORCE,
        scale: LBF,
    },
    UnitDef {
        name: "kip",
        aliases: &["kips", "kipf"],
        dims: Dimensions::FORCE,
        scale: LBF * 1000.0,
    },
    // Stress / pressure
    UnitDef {
        name: "pascal",
        aliases: &["Pa"],
        dims: Dimensions::STRESS,
        scale: 1.0,
    },
    UnitDef {
        name: "kilopascal",
        aliases: &["kPa"],
        dims: Dimensions::STRESS,
        scale: 1.0e3,
    },
    UnitDef {
        name: "megapascal",
        aliases: &["MPa"],
        dims: Dimensions::STRESS,
        scale: 1.0e6,
    },
    UnitDef {
        name: "gigapascal",
        aliases: &["GPa"],
        dims: Dimensions::STRESS,
        scale: 1.0e9,
    },
    UnitDef {
        name: "psi",
        aliases: &[],
        dims: Dimensions::STRESS,
        scale: PSI,
    },
    UnitDef {
        name: "ksi",
        aliases: &[],
        dims: Dimensions::STRESS,
        scale: PSI * 1000.0,
    },
    UnitDef {
        name: "psf",
        aliases: &[],
        dims: Dimensions::STRESS,
        scale: PSF,
    },
    UnitDef {
        name: "ksf",
        aliases: &[],
        dims: Dimensions::STRESS,
        scale: PSF * 1000.0,
    },
];

/// Named unit definitions, initialized once per process.
#[derive(Debug)]
pub struct UnitRegistry {
    by_name: HashMap<&'static str, &'static UnitDef>,
}

static SHARED: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::build);

impl UnitRegistry {
    fn build() -> Self {
        let mut by_name = HashMap::new();
        for def in UNIT_DEFS {
            by_name.insert(def.name, def);
            for alias in def.aliases {
                by_name.insert(*alias, def);
            }
        }
        UnitRegistry { by_name }
    }

    /// The process-wide registry instance
    pub fn shared() -> &'static UnitRegistry {
        &SHARED
    }

    fn lookup(&self, name: &str) -> CalcResult<&'static UnitDef> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::unknown_unit(name))
    }

    /// Parse a unit expression to a [`UnitSpec`].
    ///
    /// An empty string or `"dimensionless"` yields the dimensionless spec.
    pub fn parse_units(&self, text: &str) -> CalcResult<UnitSpec> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "dimensionless" {
            return Ok(UnitSpec {
                text: "dimensionless".to_string(),
                dims: Dimensions::DIMENSIONLESS,
                scale: 1.0,
            });
        }

        let mut dims = Dimensions::DIMENSIONLESS;
        let mut scale = 1.0_f64;

        for (i, segment) in trimmed.split('/').enumerate() {
            let sign: i8 = if i == 0 { 1 } else { -1 };
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(CalcError::unknown_unit(trimmed));
            }
            for factor in segment
                .split(['*', ' '])
                .map(str::trim)
                .filter(|f| !f.is_empty())
            {
                let (name, exp) = split_exponent(factor)?;
                let def = self.lookup(name)?;
                let exp = exp * sign;
                dims = dims.mul(def.dims.pow(exp));
                scale *= def.scale.powi(exp as i32);
            }
        }

        Ok(UnitSpec {
            text: normalize(trimmed),
            dims,
            scale,
        })
    }
}

/// Split a factor like `in^2` or `s**-1` into (name, exponent)
fn split_exponent(factor: &str) -> CalcResult<(&str, i8)> {
    let (name, exp_text) = if let Some((name, exp)) = factor.split_once("**") {
        (name, Some(exp))
    } else if let Some((name, exp)) = factor.split_once('^') {
        (name, Some(exp))
    } else {
        (factor, None)
    };

    let exp = match exp_text {
        Some(raw) => raw
            .trim()
            .parse::<i8>()
            .map_err(|_| CalcError::unknown_unit(factor))?,
        None => 1,
    };

    Ok((name.trim(), exp))
}

/// Collapse internal whitespace so equal expressions compare equal
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(text: &str) -> UnitSpec {
        UnitRegistry::shared().parse_units(text).unwrap()
    }

    #[test]
    fn test_simple_units() {
        assert_eq!(spec("ft").dims(), Dimensions::LENGTH);
        assert_eq!(spec("ft").scale(), 0.3048);
        assert_eq!(spec("kip").dims(), Dimensions::FORCE);
    }

    #[test]
    fn test_compound_expression() {
        let kip_per_in2 = spec("kip/in^2");
        assert_eq!(kip_per_in2.dims(), Dimensions::STRESS);
        let rel = (kip_per_in2.scale() - spec("ksi").scale()).abs() / spec("ksi").scale();
        assert!(rel < 1e-12);
    }

    #[test]
    fn test_double_division() {
        // a/b/c divides by both trailing segments
        let accel = spec("m/s/s");
        assert_eq!(accel.dims(), Dimensions::new(1, 0, -2, 0));
    }

    #[test]
    fn test_double_star_exponent() {
        assert_eq!(spec("in**2").dims(), Dimensions::new(2, 0, 0, 0));
        assert_eq!(spec("s**-1").dims(), Dimensions::new(0, 0, -1, 0));
    }

    #[test]
    fn test_dimensionless() {
        assert!(spec("").dims().is_dimensionless());
        assert!(spec("dimensionless").dims().is_dimensionless());
    }

    #[test]
    fn test_unknown_unit() {
        let err = UnitRegistry::shared().parse_units("furlongs").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_compatibility() {
        assert!(spec("psi").is_compatible(&spec("MPa")));
        assert!(!spec("ft").is_compatible(&spec("s")));
    }

    #[test]
    fn test_conversion_factor() {
        let factor = spec("ft").conversion_factor(&spec("m")).unwrap();
        assert!((factor - 0.3048).abs() < 1e-15);

        let err = spec("ft").conversion_factor(&spec("s")).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSIONALITY");
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(
            spec("psi").dims().to_string(),
            "[length]^-1 [mass] [time]^-2"
        );
        assert_eq!(spec("").dims().to_string(), "dimensionless");
    }
}
