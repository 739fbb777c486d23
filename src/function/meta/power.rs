use crate::function::function::Function;

/// `f(x)` raised to `power`.
#[derive(Clone, Debug)]
pub struct Power<F> {
    f: F,
    power: f64,
}

impl<F: Function> Power<F> {
    pub fn new(f: F, power: f64) -> Power<F> {
        Power { f, power }
    }
}

impl<F: Function> Function for Power<F> {
    fn left_domain_border(&self) -> f64 {
        self.f.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.f.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x).powf(self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;

    #[test]
    fn test_power_keeps_domain() {
        let table = ArrayTabulatedFunction::with_values(0.0, 2.0, &[1.0, 2.0, 3.0]).unwrap();
        let squared = Power::new(&table, 2.0);
        assert_eq!(squared.domain(), table.domain());
        assert_eq!(squared.value(1.0), 4.0);
        assert_eq!(squared.value(2.0), 9.0);
        assert!(squared.value(5.0).is_nan());
    }
}
