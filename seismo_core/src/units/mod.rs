//! # Unit-Aware Quantities
//!
//! Normalizes heterogeneous numeric/unit inputs into a single [`Quantity`]
//! representation, optionally converting to, or checking compatibility
//! against, caller-specified default units. Every numeric input to the
//! formula modules funnels through this layer.
//!
//! ## Input styles
//!
//! [`UnitInput`] is the tagged sum of the accepted shapes:
//!
//! ```text
//! 1000                    -> 1000 * default_units
//! (1000, "psi")           -> 1000 psi
//! Quantity 1000 psi       -> 1000 psi
//! "1000 psi"              -> 1000 psi
//! ```
//!
//! A bare number with **no** default units set is always an error
//! (`MissingUnits`); the parser never silently passes unitless values
//! through. [`convert_to`] keeps the historical convenience of treating
//! unitless input as already being in the target units by supplying the
//! target as the default, which makes the assumption explicit at the call
//! site.
//!
//! ## Example
//!
//! ```rust
//! use seismo_core::units::{convert_scalar, QuantityParser};
//!
//! let parser = QuantityParser::new()
//!     .with_default_units("ft")
//!     .unwrap()
//!     .converting(true);
//! let span = parser.parse((30.0, "ft")).unwrap();
//! assert_eq!(span.units().text(), "ft");
//!
//! let meters = convert_scalar(span, "m").unwrap();
//! assert!((meters - 9.144).abs() < 1e-12);
//! ```

pub mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use registry::{Dimensions, UnitRegistry, UnitSpec};

/// Scalar-or-vector magnitude of a [`Quantity`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Value {
    /// Multiply every element by a factor, returning a new value
    fn scaled(&self, factor: f64) -> Value {
        match self {
            Value::Scalar(v) => Value::Scalar(v * factor),
            Value::Vector(vs) => Value::Vector(vs.iter().map(|v| v * factor).collect()),
        }
    }

    /// The scalar magnitude, if this value is a scalar
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Vector(_) => None,
        }
    }

    /// The elements as a slice (a scalar is a slice of one)
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Value::Scalar(v) => std::slice::from_ref(v),
            Value::Vector(vs) => vs.as_slice(),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(vs: Vec<f64>) -> Self {
        Value::Vector(vs)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(v) => write!(f, "{v}"),
            Value::Vector(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A numeric value tagged with a unit of measure.
///
/// The unit dimension is fixed at creation and never silently changes;
/// [`Quantity::to`] produces a new `Quantity` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: Value,
    units: UnitSpec,
}

impl Quantity {
    pub fn new(value: impl Into<Value>, units: UnitSpec) -> Self {
        Quantity {
            value: value.into(),
            units,
        }
    }

    /// Construct from a magnitude and a unit expression
    pub fn from_parts(value: impl Into<Value>, units: &str) -> CalcResult<Self> {
        let units = UnitRegistry::shared().parse_units(units)?;
        Ok(Quantity::new(value, units))
    }

    /// The magnitude in this quantity's own units
    pub fn magnitude(&self) -> &Value {
        &self.value
    }

    /// The scalar magnitude; fails for vector quantities
    pub fn scalar(&self) -> CalcResult<f64> {
        self.value.as_scalar().ok_or_else(|| {
            CalcError::invalid_input("value", self.value.to_string(), "expected a scalar")
        })
    }

    pub fn units(&self) -> &UnitSpec {
        &self.units
    }

    /// Convert to the target units, returning a new quantity.
    ///
    /// Fails with `Dimensionality` if the dimensions are incompatible.
    pub fn to(&self, target: &UnitSpec) -> CalcResult<Quantity> {
        let factor = self.units.conversion_factor(target)?;
        Ok(Quantity {
            value: self.value.scaled(factor),
            units: target.clone(),
        })
    }

    /// Convert to the units named by an expression
    pub fn to_units(&self, units: &str) -> CalcResult<Quantity> {
        let target = UnitRegistry::shared().parse_units(units)?;
        self.to(&target)
    }

    /// Multiply the magnitude by a dimensionless factor, keeping the units
    pub fn scaled(&self, factor: f64) -> Quantity {
        Quantity {
            value: self.value.scaled(factor),
            units: self.units.clone(),
        }
    }

    /// Strip the unit tag, consuming the quantity
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units)
    }
}

/// Tagged input representation for values that may or may not carry units.
///
/// Dispatch happens on the explicit discriminant via a single exhaustive
/// match in [`QuantityParser::parse`]; there is no type probing.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitInput {
    /// Bare number, no units attached
    Bare(f64),
    /// Bare numeric array, no units attached
    BareVec(Vec<f64>),
    /// (value, unit-expression) pair
    Pair(f64, String),
    /// (values, unit-expression) pair
    PairVec(Vec<f64>, String),
    /// Already unit-tagged
    Tagged(Quantity),
    /// Unit-bearing string expression, e.g. `"30 ft"`
    Text(String),
}

impl UnitInput {
    /// Build an input from a loose JSON value.
    ///
    /// Accepted forms: a number, a numeric array, `[value, "unit"]` where
    /// `value` is a number or numeric array, or a string expression. Arrays
    /// in any other shape fail with `InvalidInputShape`.
    pub fn from_json(json: &serde_json::Value) -> CalcResult<UnitInput> {
        use serde_json::Value as Json;

        fn as_numbers(items: &[Json]) -> Option<Vec<f64>> {
            items.iter().map(Json::as_f64).collect()
        }

        match json {
            Json::Number(n) => n
                .as_f64()
                .map(UnitInput::Bare)
                .ok_or_else(|| CalcError::invalid_input("input", n.to_string(), "not a finite number")),
            Json::String(s) => Ok(UnitInput::Text(s.clone())),
            Json::Array(items) => {
                if let Some(values) = as_numbers(items) {
                    return Ok(UnitInput::BareVec(values));
                }
                // Not all-numeric: must be exactly [value, unit-string]
                if items.len() == 2 {
                    if let Json::String(units) = &items[1] {
                        if let Some(value) = items[0].as_f64() {
                            return Ok(UnitInput::Pair(value, units.clone()));
                        }
                        if let Json::Array(inner) = &items[0] {
                            if let Some(values) = as_numbers(inner) {
                                return Ok(UnitInput::PairVec(values, units.clone()));
                            }
                        }
                    }
                }
                Err(CalcError::invalid_input_shape(items.len()))
            }
            other => Err(CalcError::invalid_input(
                "input",
                other.to_string(),
                "expected a number, array, or string",
            )),
        }
    }
}

impl From<f64> for UnitInput {
    fn from(v: f64) -> Self {
        UnitInput::Bare(v)
    }
}

impl From<Vec<f64>> for UnitInput {
    fn from(vs: Vec<f64>) -> Self {
        UnitInput::BareVec(vs)
    }
}

impl From<(f64, &str)> for UnitInput {
    fn from((v, u): (f64, &str)) -> Self {
        UnitInput::Pair(v, u.to_string())
    }
}

impl From<(Vec<f64>, &str)> for UnitInput {
    fn from((vs, u): (Vec<f64>, &str)) -> Self {
        UnitInput::PairVec(vs, u.to_string())
    }
}

impl From<Quantity> for UnitInput {
    fn from(q: Quantity) -> Self {
        UnitInput::Tagged(q)
    }
}

impl From<&str> for UnitInput {
    fn from(s: &str) -> Self {
        UnitInput::Text(s.to_string())
    }
}

/// Parser for inputs that may or may not have units.
///
/// The configuration is fixed at construction and the parser holds no
/// mutable state, so one instance can serve any number of calls.
#[derive(Debug, Clone)]
pub struct QuantityParser {
    registry: &'static UnitRegistry,
    default_units: Option<UnitSpec>,
    convert: bool,
    check_dims: bool,
}

impl Default for QuantityParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantityParser {
    pub fn new() -> Self {
        QuantityParser {
            registry: UnitRegistry::shared(),
            default_units: None,
            convert: false,
            check_dims: false,
        }
    }

    /// Default units for inputs that carry none.
    ///
    /// Use `""` or `"dimensionless"` for explicitly unitless quantities.
    pub fn with_default_units(mut self, units: &str) -> CalcResult<Self> {
        self.default_units = Some(self.registry.parse_units(units)?);
        Ok(self)
    }

    /// Convert all united inputs to the default units. Has no effect if no
    /// default units are set.
    pub fn converting(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }

    /// Validate that inputs are dimensionally compatible with the default
    /// units without converting them. Has no effect if no default units are
    /// set or `converting` is enabled (conversion checks anyway).
    pub fn checking_dims(mut self, check_dims: bool) -> Self {
        self.check_dims = check_dims;
        self
    }

    /// Parse an input into a [`Quantity`].
    pub fn parse(&self, input: impl Into<UnitInput>) -> CalcResult<Quantity> {
        let quantity = match input.into() {
            UnitInput::Bare(v) => self.tag_bare(Value::Scalar(v))?,
            UnitInput::BareVec(vs) => self.tag_bare(Value::Vector(vs))?,
            UnitInput::Pair(v, units) => {
                Quantity::new(v, self.registry.parse_units(&units)?)
            }
            UnitInput::PairVec(vs, units) => {
                Quantity::new(vs, self.registry.parse_units(&units)?)
            }
            UnitInput::Tagged(q) => q,
            UnitInput::Text(text) => self.parse_text(&text)?,
        };

        let Some(target) = &self.default_units else {
            return Ok(quantity);
        };

        if self.convert {
            return quantity.to(target);
        }
        if self.check_dims {
            // Validate only; the value stays in its original units.
            quantity.units().conversion_factor(target)?;
        }
        Ok(quantity)
    }

    /// Tag a unitless value with the default units, or fail
    fn tag_bare(&self, value: Value) -> CalcResult<Quantity> {
        match &self.default_units {
            Some(units) => Ok(Quantity::new(value, units.clone())),
            None => Err(CalcError::missing_units(value)),
        }
    }

    /// Parse a string expression like `"1000 psi"`.
    ///
    /// A string that is just a number follows the bare-number policy; a
    /// unit expression with no leading number means one of that unit.
    fn parse_text(&self, text: &str) -> CalcResult<Quantity> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<f64>() {
            return self.tag_bare(Value::Scalar(value));
        }

        match trimmed.split_once(char::is_whitespace) {
            Some((first, rest)) => {
                if let Ok(value) = first.parse::<f64>() {
                    Ok(Quantity::new(value, self.registry.parse_units(rest)?))
                } else {
                    Ok(Quantity::new(1.0, self.registry.parse_units(trimmed)?))
                }
            }
            None => Ok(Quantity::new(1.0, self.registry.parse_units(trimmed)?)),
        }
    }
}

/// Process an input value that may or may not have units.
///
/// One-shot convenience over [`QuantityParser`]; see the module docs for
/// the accepted input styles.
pub fn parse_unit_input(
    input: impl Into<UnitInput>,
    default_units: Option<&str>,
    convert: bool,
    check_dims: bool,
) -> CalcResult<Quantity> {
    let mut parser = QuantityParser::new()
        .converting(convert)
        .checking_dims(check_dims);
    if let Some(units) = default_units {
        parser = parser.with_default_units(units)?;
    }
    parser.parse(input)
}

/// Convert an input value to the given units and return the bare magnitude.
///
/// Unitless input is treated as already being in `target_units`.
///
/// ```rust
/// use seismo_core::units::convert_to;
///
/// let m = convert_to((30.0, "ft"), "m").unwrap();
/// assert!((m.as_scalar().unwrap() - 9.144).abs() < 1e-12);
/// ```
pub fn convert_to(input: impl Into<UnitInput>, target_units: &str) -> CalcResult<Value> {
    parse_unit_input(input, Some(target_units), true, false).map(Quantity::into_value)
}

/// Like [`convert_to`], for scalar inputs
pub fn convert_scalar(input: impl Into<UnitInput>, target_units: &str) -> CalcResult<f64> {
    let quantity = parse_unit_input(input, Some(target_units), true, false)?;
    quantity.scalar()
}
