use tracing::debug;

use crate::function::function::Function;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::storagekind::StorageKind;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

/// Samples `function` at `count` evenly spaced points over `[left, right]`, both ends
/// included.
///
/// `[left, right]` must lie inside the domain of `function` and `count` must be at least 2.
pub fn tabulate<F>(
    function: &F,
    left: f64,
    right: f64,
    count: usize,
) -> Result<ArrayTabulatedFunction, TabulatedFunctionError>
where
    F: Function + ?Sized,
{
    let values = sample(function, left, right, count)?;
    ArrayTabulatedFunction::with_values(left, right, &values)
}

/// Same as [`tabulate`], materialised into the requested storage.
pub fn tabulate_into<F>(
    function: &F,
    left: f64,
    right: f64,
    count: usize,
    storage: StorageKind,
) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionError>
where
    F: Function + ?Sized,
{
    match storage {
        StorageKind::Array => Ok(Box::new(tabulate(function, left, right, count)?)),
        StorageKind::LinkedList => {
            let values = sample(function, left, right, count)?;
            Ok(Box::new(LinkedListTabulatedFunction::with_values(left, right, &values)?))
        }
    }
}

fn sample<F>(function: &F, left: f64, right: f64, count: usize) -> Result<Vec<f64>, TabulatedFunctionError>
where
    F: Function + ?Sized,
{
    let (domain_left, domain_right) = function.domain();
    if left < domain_left || right > domain_right {
        debug!(left, right, domain_left, domain_right, "tabulation range outside domain");
        return Err(TabulatedFunctionError::DomainViolation {
            left,
            right,
            domain_left,
            domain_right,
        });
    }
    if count < 2 {
        return Err(TabulatedFunctionError::InsufficientPoints(count));
    }

    let step = (right - left) / (count - 1) as f64;
    debug!(left, right, count, "tabulating function");
    Ok((0..count)
        .map(|i| function.value(left + step * i as f64))
        .collect())
}
