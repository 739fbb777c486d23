use thiserror::Error;

/// Rejected construction of a tabulated function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("left border {left} must be less than right border {right}")]
    InvalidBounds { left: f64, right: f64 },

    #[error("at least 2 points are required, got {0}")]
    TooFewPoints(usize),

    #[error("x of point {index} is not finite")]
    NonFiniteX { index: usize },

    #[error("points are not strictly increasing in x after index {index}")]
    UnorderedPoints { index: usize },
}

/// Failure of a single operation on a tabulated function.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabulatedFunctionError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("x = {x} must lie strictly between {lower} and {upper}")]
    OrderingViolation { x: f64, lower: f64, upper: f64 },

    #[error("a point with x = {0} already exists")]
    DuplicateX(f64),

    #[error("cannot delete a point: {0} points left, more than 3 are required")]
    MinimumCountViolation(usize),

    #[error("tabulation range [{left}, {right}] lies outside the domain [{domain_left}, {domain_right}]")]
    DomainViolation {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64,
    },

    #[error("at least 2 points are required for tabulation, got {0}")]
    InsufficientPoints(usize),
}
