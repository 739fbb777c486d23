use crate::function::function::Function;

/// `f2(f1(x))`, defined on the domain of `f1`.
///
/// Values of `f1` that fall outside the domain of `f2` surface as whatever `f2` returns
/// there (NaN for tabulated functions).
#[derive(Clone, Debug)]
pub struct Composition<F1, F2> {
    f1: F1,
    f2: F2,
}

impl<F1: Function, F2: Function> Composition<F1, F2> {
    pub fn new(f1: F1, f2: F2) -> Composition<F1, F2> {
        Composition { f1, f2 }
    }
}

impl<F1: Function, F2: Function> Function for Composition<F1, F2> {
    fn left_domain_border(&self) -> f64 {
        self.f1.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.f1.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.f2.value(self.f1.value(x))
    }
}
