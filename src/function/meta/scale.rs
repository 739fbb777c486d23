use crate::function::function::Function;

/// `f` stretched by `scale_x` along x and `scale_y` along y.
///
/// A negative `scale_x` mirrors the domain; the borders are swapped so that left stays
/// below right. `scale_x == 0` is not rejected and yields degenerate results.
#[derive(Clone, Debug)]
pub struct Scale<F> {
    f: F,
    scale_x: f64,
    scale_y: f64,
}

impl<F: Function> Scale<F> {
    pub fn new(f: F, scale_x: f64, scale_y: f64) -> Scale<F> {
        Scale { f, scale_x, scale_y }
    }
}

impl<F: Function> Function for Scale<F> {
    fn left_domain_border(&self) -> f64 {
        if self.scale_x >= 0.0 {
            self.f.left_domain_border() * self.scale_x
        } else {
            self.f.right_domain_border() * self.scale_x
        }
    }

    fn right_domain_border(&self) -> f64 {
        if self.scale_x >= 0.0 {
            self.f.right_domain_border() * self.scale_x
        } else {
            self.f.left_domain_border() * self.scale_x
        }
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x / self.scale_x) * self.scale_y
    }
}
