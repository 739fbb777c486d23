use thiserror::Error;

use crate::function::function::Function;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogError {
    #[error("logarithm base must be positive, finite and different from 1, got {0}")]
    InvalidBase(f64),
}

/// Logarithm to a fixed base, defined on `[0, +inf)`.
#[derive(Clone, Copy, Debug)]
pub struct Log {
    base: f64,
}

impl Log {
    pub fn new(base: f64) -> Result<Log, LogError> {
        if !(base > 0.0) || base == 1.0 || !base.is_finite() {
            return Err(LogError::InvalidBase(base));
        }
        Ok(Log { base })
    }

    /// Natural logarithm.
    pub fn natural() -> Log {
        Log { base: std::f64::consts::E }
    }
}

impl Function for Log {
    fn left_domain_border(&self) -> f64 {
        0.0
    }

    fn right_domain_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invalid_bases() {
        for base in [0.0, -2.0, 1.0, f64::NAN, f64::INFINITY] {
            assert!(Log::new(base).is_err(), "base {} accepted", base);
        }
    }

    #[test]
    fn test_values() {
        let log2 = Log::new(2.0).unwrap();
        assert_relative_eq!(log2.value(8.0), 3.0, epsilon = 1e-12);
        assert_eq!(log2.domain(), (0.0, f64::INFINITY));
        assert!(log2.value(-1.0).is_nan());
        assert_relative_eq!(Log::natural().value(std::f64::consts::E), 1.0, epsilon = 1e-12);
    }
}
