use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::function::function::Function;
use crate::function::functionpoint::{compare_double, FunctionPoint};
use crate::tabulated::tabulatedfunction::{
    check_between,
    check_deletable,
    check_index,
    check_orderable,
    fmt_points,
    interpolate,
    tabulated_eq,
    uniform_points,
    validate_points,
    TabulatedFunction,
};
use crate::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

/// Tabulated function stored in one contiguous vector.
///
/// Indexed access is O(1); insertion and deletion shift the tail in O(n).
#[derive(Clone, Debug)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
}

impl ArrayTabulatedFunction {
    /// `count` evenly spaced points over `[left, right]` with y = 0.
    pub fn with_count(left: f64, right: f64, count: usize) -> Result<Self, TabulatedFunctionError> {
        Self::with_values(left, right, &vec![0.0; count])
    }

    /// Evenly spaced points over `[left, right]` carrying `values` as y.
    pub fn with_values(left: f64, right: f64, values: &[f64]) -> Result<Self, TabulatedFunctionError> {
        let points = uniform_points(left, right, values)?;
        debug!(left, right, count = points.len(), "array table created");
        Ok(ArrayTabulatedFunction { points })
    }

    /// Takes ownership of `points` after checking count and ordering.
    pub fn from_points(points: Vec<FunctionPoint>) -> Result<Self, TabulatedFunctionError> {
        validate_points(&points)?;
        debug!(count = points.len(), "array table created from points");
        Ok(ArrayTabulatedFunction { points })
    }

    /// Bounds of the slot at `index`: x of the neighbours, infinite at either end.
    fn neighbour_bounds(&self, index: usize) -> (f64, f64) {
        let lower = if index > 0 {
            self.points[index - 1].x()
        } else {
            f64::NEG_INFINITY
        };
        let upper = self
            .points
            .get(index + 1)
            .map_or(f64::INFINITY, |point| point.x());
        (lower, upper)
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.points.first().map_or(f64::NAN, |point| point.x())
    }

    fn right_domain_border(&self) -> f64 {
        self.points.last().map_or(f64::NAN, |point| point.x())
    }

    fn value(&self, x: f64) -> f64 {
        self.points
            .windows(2)
            .find_map(|pair| interpolate(&pair[0], &pair[1], x))
            .unwrap_or(f64::NAN)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        let (lower, upper) = self.neighbour_bounds(index);
        check_between(point.x(), lower, upper)?;
        self.points[index] = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        self.points[index] = self.points[index].with_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        check_deletable(self.points.len())?;
        self.points.remove(index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        check_orderable(point.x())?;
        if self.points.iter().any(|p| compare_double(p.x(), point.x())) {
            debug!(x = point.x(), "rejected duplicate x");
            return Err(TabulatedFunctionError::DuplicateX(point.x()));
        }
        let index = self
            .points
            .iter()
            .position(|p| point.x() < p.x())
            .unwrap_or(self.points.len());
        self.points.insert(index, point);
        Ok(())
    }

    fn boxed_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl<T: TabulatedFunction> PartialEq<T> for ArrayTabulatedFunction {
    fn eq(&self, other: &T) -> bool {
        tabulated_eq(self, other)
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self, f)
    }
}

impl TryFrom<Vec<FunctionPoint>> for ArrayTabulatedFunction {
    type Error = TabulatedFunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}
