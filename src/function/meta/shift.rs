use crate::function::function::Function;

/// `f` translated by `shift_x` along x and `shift_y` along y.
#[derive(Clone, Debug)]
pub struct Shift<F> {
    f: F,
    shift_x: f64,
    shift_y: f64,
}

impl<F: Function> Shift<F> {
    pub fn new(f: F, shift_x: f64, shift_y: f64) -> Shift<F> {
        Shift { f, shift_x, shift_y }
    }
}

impl<F: Function> Function for Shift<F> {
    fn left_domain_border(&self) -> f64 {
        self.f.left_domain_border() + self.shift_x
    }

    fn right_domain_border(&self) -> f64 {
        self.f.right_domain_border() + self.shift_x
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x - self.shift_x) + self.shift_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;

    #[test]
    fn test_shift_moves_domain_and_values() {
        let table = ArrayTabulatedFunction::with_values(0.0, 2.0, &[0.0, 1.0, 4.0]).unwrap();
        let shifted = Shift::new(&table, 10.0, -1.0);
        assert_eq!(shifted.domain(), (10.0, 12.0));
        assert_eq!(shifted.value(11.0), 0.0);
        assert_eq!(shifted.value(12.0), 3.0);
        assert!(shifted.value(9.0).is_nan());
    }
}
