use serde::{Deserialize, Serialize};

use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

/// Backing container of a tabulated function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    #[default]
    Array,
    LinkedList,
}

impl StorageKind {
    /// Validated table of the selected kind.
    pub fn build(
        &self,
        points: Vec<FunctionPoint>,
    ) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionError> {
        Ok(match self {
            StorageKind::Array => Box::new(ArrayTabulatedFunction::from_points(points)?),
            StorageKind::LinkedList => Box::new(LinkedListTabulatedFunction::from_points(points)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_kinds_build_equal_tables() {
        let points = vec![
            FunctionPoint::new(0.0, 1.0),
            FunctionPoint::new(1.0, 3.0),
            FunctionPoint::new(2.0, 2.0),
        ];
        let array = StorageKind::Array.build(points.clone()).unwrap();
        let list = StorageKind::LinkedList.build(points).unwrap();
        assert!(*array == *list);
    }

    #[test]
    fn test_deserialize_from_json() {
        let kind: StorageKind = serde_json::from_str("\"LinkedList\"").unwrap();
        assert_eq!(kind, StorageKind::LinkedList);
    }
}
