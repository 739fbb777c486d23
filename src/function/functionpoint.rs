use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Tolerance below which two coordinates are treated as the same value.
pub const EPSILON: f64 = 1e-10;

/// `|a - b| < EPSILON`
#[inline]
pub fn compare_double(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 32-bit fold of an `f64` bit pattern: high half XOR low half.
#[inline]
fn fold_bits(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// A single sample `(x, y)` of a tabulated function.
///
/// Points are immutable values. Editing a table entry replaces the whole point.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64,
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Same point with a different abscissa.
    pub fn with_x(&self, x: f64) -> FunctionPoint {
        FunctionPoint::new(x, self.y)
    }

    /// Same point with a different ordinate.
    pub fn with_y(&self, y: f64) -> FunctionPoint {
        FunctionPoint::new(self.x, y)
    }

    /// Structural hash of the two bit patterns.
    ///
    /// Each coordinate is folded to 32 bits (high XOR low) and the two folds are XORed.
    /// The value is independent of the platform and stable across runs.
    pub fn hash_code(&self) -> i32 {
        fold_bits(self.x) ^ fold_bits(self.y)
    }
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        compare_double(self.x, other.x) && compare_double(self.y, other.y)
    }
}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FunctionPoint::new(x, y)
    }
}
