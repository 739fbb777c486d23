use std::rc::Rc;

/// A real function of one variable defined on `[left_domain_border, right_domain_border]`.
///
/// Evaluation outside the domain is not an error; implementations return `f64::NAN`
/// (or whatever the underlying arithmetic produces) instead of failing.
pub trait Function {
    fn left_domain_border(&self) -> f64;

    fn right_domain_border(&self) -> f64;

    fn value(&self, x: f64) -> f64;

    fn domain(&self) -> (f64, f64) {
        (self.left_domain_border(), self.right_domain_border())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 轉發實作：讓 combinator 可以持有、借用或共享運算元
// ─────────────────────────────────────────────────────────────────────────────

impl<F: Function + ?Sized> Function for &F {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F: Function + ?Sized> Function for Box<F> {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F: Function + ?Sized> Function for Rc<F> {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}
