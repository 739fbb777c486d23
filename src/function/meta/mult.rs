use crate::function::function::Function;

/// `f1(x) * f2(x)` on the intersection of both domains.
#[derive(Clone, Debug)]
pub struct Mult<F1, F2> {
    f1: F1,
    f2: F2,
}

impl<F1: Function, F2: Function> Mult<F1, F2> {
    pub fn new(f1: F1, f2: F2) -> Mult<F1, F2> {
        Mult { f1, f2 }
    }
}

impl<F1: Function, F2: Function> Function for Mult<F1, F2> {
    fn left_domain_border(&self) -> f64 {
        self.f1.left_domain_border().max(self.f2.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.f1.right_domain_border().min(self.f2.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        self.f1.value(x) * self.f2.value(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;

    #[test]
    fn test_mult_over_intersection() {
        let f1 = ArrayTabulatedFunction::with_values(-1.0, 3.0, &[-1.0, 0.0, 1.0, 2.0, 3.0]).unwrap();
        let f2 = ArrayTabulatedFunction::with_values(0.0, 2.0, &[5.0, 5.0, 5.0]).unwrap();
        let product = Mult::new(&f1, &f2);
        assert_eq!(product.domain(), (0.0, 2.0));
        assert_eq!(product.value(1.5), 7.5);
        assert!(product.value(-0.5).is_nan());
    }
}
