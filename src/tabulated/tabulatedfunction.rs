use std::fmt;

use tracing::debug;

use crate::function::function::Function;
use crate::function::functionpoint::{compare_double, FunctionPoint};
use crate::tabulated::tabulatedfunctionerror::{ConstructionError, TabulatedFunctionError};

/// Tables are never shrunk to this many points or fewer by a deletion.
pub const MIN_POINTS_AFTER_DELETE: usize = 3;

/// A function stored as a finite sequence of samples, strictly increasing in x,
/// evaluated by linear interpolation between neighbouring samples.
///
/// The storage strategy is an implementation detail: equality, hashing and evaluation only
/// depend on the sequence of points, so tables backed by different containers are
/// interchangeable.
pub trait TabulatedFunction: Function + fmt::Debug {
    fn points_count(&self) -> usize;

    /// Copy of the point at `index`.
    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError>;

    /// Replaces the point at `index`. The new x must lie strictly between the x of the
    /// neighbouring points (the first and last point are unbounded on their open side).
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError>;

    /// y carries no ordering constraint, only the index is checked.
    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError>;

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError>;

    /// Inserts `point` at the position that keeps x strictly increasing.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError>;

    /// Deep copy behind a trait object.
    fn boxed_clone(&self) -> Box<dyn TabulatedFunction>;

    fn point_x(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|point| point.x())
    }

    fn point_y(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|point| point.y())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        let point = self.point(index)?;
        self.set_point(index, point.with_x(x))
    }

    /// Snapshot of all points in index order.
    fn points(&self) -> Vec<FunctionPoint> {
        let mut points = Vec::with_capacity(self.points_count());
        // indices are dense, the first miss is points_count()
        while let Ok(point) = self.point(points.len()) {
            points.push(point);
        }
        points
    }

    fn hash_code(&self) -> i32 {
        tabulated_hash_code(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability-level value semantics
// ─────────────────────────────────────────────────────────────────────────────

/// Point-sequence equality, independent of the backing storage.
pub fn tabulated_eq<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: TabulatedFunction + ?Sized,
    B: TabulatedFunction + ?Sized,
{
    let count = lhs.points_count();
    if count != rhs.points_count() {
        return false;
    }
    (0..count).all(|i| match (lhs.point(i), rhs.point(i)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    })
}

/// `count XOR hash(p_0) XOR ... XOR hash(p_n-1)`.
///
/// XOR is order-agnostic; the strict x-ordering of every table is what makes the point
/// sequence canonical.
pub fn tabulated_hash_code<T: TabulatedFunction + ?Sized>(function: &T) -> i32 {
    let count = function.points_count();
    (0..count)
        .filter_map(|i| function.point(i).ok())
        .fold(count as i32, |hash, point| hash ^ point.hash_code())
}

/// `{(x1; y1), (x2; y2), ...}`
pub fn fmt_points<T: TabulatedFunction + ?Sized>(
    function: &T,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "{{")?;
    for i in 0..function.points_count() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match function.point(i) {
            Ok(point) => write!(f, "{}", point)?,
            Err(_) => return Err(fmt::Error),
        }
    }
    write!(f, "}}")
}

impl PartialEq for dyn TabulatedFunction + '_ {
    fn eq(&self, other: &Self) -> bool {
        tabulated_eq(self, other)
    }
}

impl fmt::Display for dyn TabulatedFunction + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self, f)
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 共用輔助函數：建構驗證、索引與順序檢查、內插
// ─────────────────────────────────────────────────────────────────────────────

/// Evenly spaced x over `[left, right]` paired with `values`.
pub(crate) fn uniform_points(
    left: f64,
    right: f64,
    values: &[f64],
) -> Result<Vec<FunctionPoint>, ConstructionError> {
    // 邊界須為有限值，且跨度不可溢位
    if !(left < right) || !(right - left).is_finite() {
        debug!(left, right, "rejected table borders");
        return Err(ConstructionError::InvalidBounds { left, right });
    }
    if values.len() < 2 {
        debug!(count = values.len(), "rejected table size");
        return Err(ConstructionError::TooFewPoints(values.len()));
    }
    let step = (right - left) / (values.len() - 1) as f64;
    let points: Vec<FunctionPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| FunctionPoint::new(left + step * i as f64, y))
        .collect();
    // a step below epsilon yields x values that compare equal
    validate_points(&points)?;
    Ok(points)
}

/// At least two points with finite x, strictly increasing (ties within epsilon count as
/// unordered).
pub(crate) fn validate_points(points: &[FunctionPoint]) -> Result<(), ConstructionError> {
    if points.len() < 2 {
        debug!(count = points.len(), "rejected table size");
        return Err(ConstructionError::TooFewPoints(points.len()));
    }
    if let Some(index) = points.iter().position(|point| !point.x().is_finite()) {
        debug!(index, "rejected non-finite x");
        return Err(ConstructionError::NonFiniteX { index });
    }
    match points
        .windows(2)
        .position(|pair| !is_strictly_before(pair[0].x(), pair[1].x()))
    {
        Some(index) => {
            debug!(index, "rejected unordered points");
            Err(ConstructionError::UnorderedPoints { index })
        }
        None => Ok(()),
    }
}

#[inline]
pub(crate) fn is_strictly_before(lhs: f64, rhs: f64) -> bool {
    lhs < rhs && !compare_double(lhs, rhs)
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), TabulatedFunctionError> {
    if index < len {
        Ok(())
    } else {
        Err(TabulatedFunctionError::IndexOutOfRange { index, len })
    }
}

/// `lower < x < upper`, with the epsilon applied on both sides.
pub(crate) fn check_between(x: f64, lower: f64, upper: f64) -> Result<(), TabulatedFunctionError> {
    if is_strictly_before(lower, x) && is_strictly_before(x, upper) {
        Ok(())
    } else {
        debug!(x, lower, upper, "rejected point relocation");
        Err(TabulatedFunctionError::OrderingViolation { x, lower, upper })
    }
}

/// Only finite x can be placed in the sequence: NaN is unordered and infinities defeat the
/// epsilon comparison.
pub(crate) fn check_orderable(x: f64) -> Result<(), TabulatedFunctionError> {
    if !x.is_finite() {
        debug!(x, "rejected unorderable x");
        Err(TabulatedFunctionError::OrderingViolation {
            x,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_deletable(count: usize) -> Result<(), TabulatedFunctionError> {
    if count <= MIN_POINTS_AFTER_DELETE {
        debug!(count, "rejected point deletion");
        Err(TabulatedFunctionError::MinimumCountViolation(count))
    } else {
        Ok(())
    }
}

/// Value on the segment `[lhs, rhs]`, or `None` when `x` is not inside it.
///
/// A sample hit within epsilon returns the stored y exactly.
pub(crate) fn interpolate(lhs: &FunctionPoint, rhs: &FunctionPoint, x: f64) -> Option<f64> {
    if !(lhs.x() <= x && x <= rhs.x()) {
        return None;
    }
    if compare_double(lhs.x(), x) {
        return Some(lhs.y());
    }
    if compare_double(rhs.x(), x) {
        return Some(rhs.y());
    }
    Some(lhs.y() + (rhs.y() - lhs.y()) * (x - lhs.x()) / (rhs.x() - lhs.x()))
}
