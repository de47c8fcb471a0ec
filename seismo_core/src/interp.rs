//! # Table Interpolation
//!
//! Deterministic lookup/interpolation over code-embedded reference tables.
//! Tables are immutable once built; lookups are pure and never clamp out-of-
//! range inputs except where a call site opts into [`Edges::Clamp`] or hits
//! one of the documented corner shortcuts of [`Table2d::interp`].
//!
//! Axis values must be strictly monotonically increasing; constructors
//! panic otherwise, since every table in this crate is compile-time data.

use crate::errors::{CalcError, CalcResult};

/// Boundary policy for 1-D lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
    /// Accept positions on the boundary values themselves
    Inclusive,
    /// Reject the boundary values as well as anything beyond them
    Exclusive,
    /// Clamp out-of-range positions to the edge values
    Clamp,
}

/// An ordered sequence of (x, y) pairs with linear interpolation between
/// the two bracketing rows.
#[derive(Debug, Clone)]
pub struct Table1d {
    x_name: &'static str,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Table1d {
    /// Build a table from parallel x/y rows.
    ///
    /// Panics if the rows differ in length, have fewer than two points, or
    /// the x values are not strictly increasing.
    pub fn new(x_name: &'static str, xs: impl Into<Vec<f64>>, ys: impl Into<Vec<f64>>) -> Self {
        let xs = xs.into();
        let ys = ys.into();
        assert_eq!(xs.len(), ys.len(), "axis and value rows differ in length");
        assert!(xs.len() >= 2, "table needs at least two points");
        assert!(strictly_increasing(&xs), "axis values must strictly increase");
        Table1d { x_name, xs, ys }
    }

    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    pub fn x_max(&self) -> f64 {
        *self.xs.last().unwrap()
    }

    /// Linear interpolation at `x` under the given boundary policy.
    pub fn interp(&self, x: f64, edges: Edges) -> CalcResult<f64> {
        let (min, max) = (self.x_min(), self.x_max());
        match edges {
            Edges::Exclusive => {
                if x <= min || x >= max {
                    return Err(CalcError::out_of_range(self.x_name, x, min, max));
                }
            }
            Edges::Inclusive => {
                if x < min || x > max {
                    return Err(CalcError::out_of_range(self.x_name, x, min, max));
                }
            }
            Edges::Clamp => {
                if x <= min {
                    return Ok(self.ys[0]);
                }
                if x >= max {
                    return Ok(*self.ys.last().unwrap());
                }
            }
        }
        Ok(lerp_slice(&self.xs, &self.ys, x))
    }
}

/// A rectangular grid indexed by two ordered axes.
///
/// The first axis selects rows of `z`, the second selects columns.
#[derive(Debug, Clone)]
pub struct Table2d {
    x_name: &'static str,
    y_name: &'static str,
    xs: Vec<f64>,
    ys: Vec<f64>,
    z: Vec<Vec<f64>>,
}

impl Table2d {
    /// Build a grid table.
    ///
    /// Panics if the grid is not rectangular with one row per `xs` entry
    /// and one column per `ys` entry, or if either axis is not strictly
    /// increasing.
    pub fn new(
        x_name: &'static str,
        y_name: &'static str,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        z: Vec<Vec<f64>>,
    ) -> Self {
        let xs = xs.into();
        let ys = ys.into();
        assert!(xs.len() >= 2 && ys.len() >= 2, "grid needs at least 2x2 points");
        assert_eq!(z.len(), xs.len(), "one grid row per first-axis value");
        assert!(
            z.iter().all(|row| row.len() == ys.len()),
            "one grid column per second-axis value"
        );
        assert!(strictly_increasing(&xs), "first axis must strictly increase");
        assert!(strictly_increasing(&ys), "second axis must strictly increase");
        Table2d {
            x_name,
            y_name,
            xs,
            ys,
            z,
        }
    }

    fn y_last(&self) -> f64 {
        *self.ys.last().unwrap()
    }

    /// The stored corner values, untouched by interpolation
    fn corner(&self, last_row: bool) -> f64 {
        let row = if last_row { self.z.len() - 1 } else { 0 };
        *self.z[row].last().unwrap()
    }

    /// Bilinear interpolation with the asymmetric boundary ladder.
    ///
    /// The branch order below is load-bearing; downstream formulas depend
    /// on which shortcut wins at the corner points:
    ///
    /// 1. `x` at or below the first axis row: interpolate along the second
    ///    axis in that row alone, except that `y` at or above its upper
    ///    bound returns the stored corner value directly.
    /// 2. `x` at or above the last row: same, using the last row.
    /// 3. `x` strictly inside and `y` at or above its upper bound:
    ///    interpolate along the first axis in the last column.
    /// 4. Otherwise: full bilinear interpolation.
    ///
    /// `y` below its lower bound is out of range in every branch.
    pub fn interp(&self, x: f64, y: f64) -> CalcResult<f64> {
        if x <= self.xs[0] {
            if y >= self.y_last() {
                return Ok(self.corner(false));
            }
            return self.row_interp(0, y);
        }
        if x >= *self.xs.last().unwrap() {
            if y >= self.y_last() {
                return Ok(self.corner(true));
            }
            return self.row_interp(self.z.len() - 1, y);
        }
        if y >= self.y_last() {
            let column: Vec<f64> = self.z.iter().map(|row| *row.last().unwrap()).collect();
            return Ok(lerp_slice(&self.xs, &column, x));
        }
        self.check_y(y)?;
        let i = bracket(&self.xs, x);
        let j = bracket(&self.ys, y);
        let tx = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let ty = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);
        let top = self.z[i][j] * (1.0 - ty) + self.z[i][j + 1] * ty;
        let bottom = self.z[i + 1][j] * (1.0 - ty) + self.z[i + 1][j + 1] * ty;
        Ok(top * (1.0 - tx) + bottom * tx)
    }

    /// 1-D interpolation along the second axis within a single row
    fn row_interp(&self, row: usize, y: f64) -> CalcResult<f64> {
        self.check_y(y)?;
        Ok(lerp_slice(&self.ys, &self.z[row], y))
    }

    fn check_y(&self, y: f64) -> CalcResult<()> {
        if y < self.ys[0] {
            return Err(CalcError::out_of_range(
                self.y_name,
                y,
                self.ys[0],
                self.y_last(),
            ));
        }
        Ok(())
    }
}

/// Largest index `i` such that `xs[i] <= x`, clamped to `len - 2` so that
/// `i + 1` stays a valid bracket end.
fn bracket(xs: &[f64], x: f64) -> usize {
    let mut low = 0;
    let mut high = xs.len() - 1;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if xs[mid] <= x {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

/// Linear interpolation over parallel slices; `x` must already be within
/// `[xs[0], xs[last]]`.
fn lerp_slice(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let i = bracket(xs, x);
    let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + t * (ys[i + 1] - ys[i])
}

fn strictly_increasing(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}
