//! Shorthand constructors for the function combinators.

use crate::function::function::Function;
use crate::function::meta::composition::Composition;
use crate::function::meta::mult::Mult;
use crate::function::meta::power::Power;
use crate::function::meta::scale::Scale;
use crate::function::meta::shift::Shift;
use crate::function::meta::sum::Sum;

pub fn shift<F: Function>(f: F, shift_x: f64, shift_y: f64) -> Shift<F> {
    Shift::new(f, shift_x, shift_y)
}

pub fn scale<F: Function>(f: F, scale_x: f64, scale_y: f64) -> Scale<F> {
    Scale::new(f, scale_x, scale_y)
}

pub fn power<F: Function>(f: F, power: f64) -> Power<F> {
    Power::new(f, power)
}

pub fn sum<F1: Function, F2: Function>(f1: F1, f2: F2) -> Sum<F1, F2> {
    Sum::new(f1, f2)
}

pub fn mult<F1: Function, F2: Function>(f1: F1, f2: F2) -> Mult<F1, F2> {
    Mult::new(f1, f2)
}

/// `f2(f1(x))`
pub fn composition<F1: Function, F2: Function>(f1: F1, f2: F2) -> Composition<F1, F2> {
    Composition::new(f1, f2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::basic::exp::Exp;
    use crate::function::basic::log::Log;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nested_combinators() {
        // 2 * e^(x - 1) + 1, then squared
        let f = power(shift(scale(shift(Exp, 1.0, 0.0), 1.0, 2.0), 0.0, 1.0), 2.0);
        let expected = (2.0 * (0.5f64 - 1.0).exp() + 1.0).powi(2);
        assert_abs_diff_eq!(f.value(0.5), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_log_of_exp_is_identity() {
        let identity = composition(Exp, Log::natural());
        for x in [-3.0, 0.0, 0.25, 7.0] {
            assert_abs_diff_eq!(identity.value(x), x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sum_and_mult_share_operands() {
        let exp = Exp;
        let f = mult(sum(&exp, &exp), &exp);
        assert_abs_diff_eq!(f.value(1.0), 2.0 * 1f64.exp().powi(2), epsilon = 1e-12);
    }
}
