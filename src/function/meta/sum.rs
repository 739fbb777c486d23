use crate::function::function::Function;

/// `f1(x) + f2(x)` on the intersection of both domains.
///
/// Disjoint domains are not rejected: the result has left > right and evaluates to NaN.
#[derive(Clone, Debug)]
pub struct Sum<F1, F2> {
    f1: F1,
    f2: F2,
}

impl<F1: Function, F2: Function> Sum<F1, F2> {
    pub fn new(f1: F1, f2: F2) -> Sum<F1, F2> {
        Sum { f1, f2 }
    }
}

impl<F1: Function, F2: Function> Function for Sum<F1, F2> {
    fn left_domain_border(&self) -> f64 {
        self.f1.left_domain_border().max(self.f2.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.f1.right_domain_border().min(self.f2.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        self.f1.value(x) + self.f2.value(x)
    }
}
