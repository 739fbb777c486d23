use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::function::function::Function;
use crate::function::functionpoint::{compare_double, FunctionPoint};
use crate::tabulated::nodecache::NodeCache;
use crate::tabulated::tabulatedfunction::{
    check_between,
    check_deletable,
    check_index,
    check_orderable,
    fmt_points,
    interpolate,
    tabulated_eq,
    uniform_points,
    validate_points,
    TabulatedFunction,
};
use crate::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

// ─────────────────────────────────────────────────────────────────────────────
// Node arena
// ─────────────────────────────────────────────────────────────────────────────
//
// 節點存放在 Vec 中，prev / next 以索引相連，避免 Rc<RefCell<..>> 的循環引用：
//
//   HEAD(0) <-> first <-> ... <-> last <-> HEAD(0)
//
// HEAD 是哨兵節點，其 point 不具意義。刪除的節點放入 free list 供下次插入重用。

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

const HEAD: NodeId = NodeId(0);

#[derive(Clone, Copy, Debug)]
struct Node {
    point: FunctionPoint,
    prev: NodeId,
    next: NodeId,
}

/// Tabulated function stored in a circular doubly-linked list with a sentinel.
///
/// Indexed access walks the ring, starting from the last resolved node when that is
/// closer than either end, so sequential access patterns run in near constant time per
/// step. Insertion and deletion relink in O(1) once the position is found.
#[derive(Debug)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    size: usize,
    cache: NodeCache<NodeId>,
}

impl LinkedListTabulatedFunction {
    /// `count` evenly spaced points over `[left, right]` with y = 0.
    pub fn with_count(left: f64, right: f64, count: usize) -> Result<Self, TabulatedFunctionError> {
        Self::with_values(left, right, &vec![0.0; count])
    }

    /// Evenly spaced points over `[left, right]` carrying `values` as y.
    pub fn with_values(left: f64, right: f64, values: &[f64]) -> Result<Self, TabulatedFunctionError> {
        let points = uniform_points(left, right, values)?;
        debug!(left, right, count = points.len(), "linked list table created");
        Ok(Self::from_sorted(points))
    }

    /// Builds the ring from `points` after checking count and ordering.
    pub fn from_points(points: Vec<FunctionPoint>) -> Result<Self, TabulatedFunctionError> {
        validate_points(&points)?;
        debug!(count = points.len(), "linked list table created from points");
        Ok(Self::from_sorted(points))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.nodes[HEAD.0].next,
            remaining: self.size,
        }
    }

    fn empty(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node {
            point: FunctionPoint::default(),
            prev: HEAD,
            next: HEAD,
        });
        LinkedListTabulatedFunction {
            nodes,
            free: Vec::new(),
            size: 0,
            cache: NodeCache::new(),
        }
    }

    fn from_sorted<I>(points: I) -> Self
    where
        I: IntoIterator<Item = FunctionPoint>,
        I::IntoIter: ExactSizeIterator,
    {
        let points = points.into_iter();
        let mut list = Self::empty(points.len());
        for point in points {
            list.link_before(HEAD, point);
        }
        list
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Inserts a new node holding `point` right before `at`.
    fn link_before(&mut self, at: NodeId, point: FunctionPoint) -> NodeId {
        let prev = self.node(at).prev;
        let node = Node { point, prev, next: at };
        let id = match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.node_mut(prev).next = id;
        self.node_mut(at).prev = id;
        self.size += 1;
        self.cache.invalidate();
        id
    }

    fn unlink(&mut self, id: NodeId) {
        let Node { prev, next, .. } = *self.node(id);
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        self.free.push(id);
        self.size -= 1;
        self.cache.invalidate();
    }

    /// Resolves `index` to its node, refreshing the locality cache.
    fn node_at(&self, index: usize) -> Result<NodeId, TabulatedFunctionError> {
        check_index(index, self.size)?;
        let (start_index, start) = match self.cache.start_for(index, self.size) {
            Some(cached) => cached,
            None if index < self.size - index => (0, self.node(HEAD).next),
            None => (self.size - 1, self.node(HEAD).prev),
        };

        let mut current = start;
        if index >= start_index {
            for _ in start_index..index {
                current = self.node(current).next;
            }
        } else {
            for _ in index..start_index {
                current = self.node(current).prev;
            }
        }
        trace!(index, start_index, "node resolved");
        self.cache.store(index, current);
        Ok(current)
    }
}

impl Clone for LinkedListTabulatedFunction {
    /// Rebuilds a compact ring of fresh nodes; the locality cache starts empty.
    fn clone(&self) -> Self {
        Self::from_sorted(self.iter().copied())
    }
}

impl Function for LinkedListTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        if self.size == 0 {
            return f64::NAN;
        }
        self.node(self.node(HEAD).next).point.x()
    }

    fn right_domain_border(&self) -> f64 {
        if self.size == 0 {
            return f64::NAN;
        }
        self.node(self.node(HEAD).prev).point.x()
    }

    fn value(&self, x: f64) -> f64 {
        for i in 0..self.size.saturating_sub(1) {
            let Ok(lhs) = self.node_at(i) else {
                break;
            };
            let lhs = self.node(lhs);
            if let Some(y) = interpolate(&lhs.point, &self.node(lhs.next).point, x) {
                return y;
            }
        }
        f64::NAN
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn points_count(&self) -> usize {
        self.size
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        let id = self.node_at(index)?;
        Ok(self.node(id).point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let id = self.node_at(index)?;
        let Node { prev, next, .. } = *self.node(id);
        let lower = if index > 0 {
            self.node(prev).point.x()
        } else {
            f64::NEG_INFINITY
        };
        let upper = if index + 1 < self.size {
            self.node(next).point.x()
        } else {
            f64::INFINITY
        };
        check_between(point.x(), lower, upper)?;
        self.node_mut(id).point = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let id = self.node_at(index)?;
        let node = self.node_mut(id);
        node.point = node.point.with_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.size)?;
        check_deletable(self.size)?;
        let id = self.node_at(index)?;
        self.unlink(id);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let x = point.x();
        check_orderable(x)?;
        // 單次走訪：同時檢查重複 x 並找出第一個 x 較大的節點
        let mut target = HEAD;
        let mut cursor = self.node(HEAD).next;
        while cursor != HEAD {
            let current = self.node(cursor);
            if compare_double(current.point.x(), x) {
                debug!(x, "rejected duplicate x");
                return Err(TabulatedFunctionError::DuplicateX(x));
            }
            if target == HEAD && x < current.point.x() {
                target = cursor;
            }
            cursor = current.next;
        }
        self.link_before(target, point);
        Ok(())
    }

    fn boxed_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().copied().collect()
    }
}

impl<T: TabulatedFunction> PartialEq<T> for LinkedListTabulatedFunction {
    fn eq(&self, other: &T) -> bool {
        tabulated_eq(self, other)
    }
}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self, f)
    }
}

impl TryFrom<Vec<FunctionPoint>> for LinkedListTabulatedFunction {
    type Error = TabulatedFunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

/// Points of a [`LinkedListTabulatedFunction`] in index order.
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: NodeId,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a FunctionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.cursor.0];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = &'a FunctionPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use approx::assert_abs_diff_eq;

    fn even_numbers() -> LinkedListTabulatedFunction {
        LinkedListTabulatedFunction::with_values(1.0, 7.0, &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0])
            .unwrap()
    }

    /// Walks the ring both ways and checks it agrees with `size`.
    fn assert_ring_consistent(list: &LinkedListTabulatedFunction) {
        let mut forward = Vec::new();
        let mut cursor = list.node(HEAD).next;
        while cursor != HEAD {
            forward.push(list.node(cursor).point.x());
            cursor = list.node(cursor).next;
        }
        let mut backward = Vec::new();
        let mut cursor = list.node(HEAD).prev;
        while cursor != HEAD {
            backward.push(list.node(cursor).point.x());
            cursor = list.node(cursor).prev;
        }
        backward.reverse();
        assert_eq!(forward.len(), list.size);
        assert_eq!(forward, backward);
        assert!(forward.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_construction_and_access() {
        let list = even_numbers();
        assert_ring_consistent(&list);
        assert_eq!(list.points_count(), 7);
        assert_eq!(list.domain(), (1.0, 7.0));
        for i in 0..7 {
            assert_eq!(list.point(i).unwrap(), FunctionPoint::new((i + 1) as f64, 2.0 * (i + 1) as f64));
        }
        assert_eq!(
            list.point(7),
            Err(TabulatedFunctionError::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_equals_array_backend() {
        let list = even_numbers();
        let points: Vec<FunctionPoint> = (1..=7)
            .map(|i| FunctionPoint::new(i as f64, 2.0 * i as f64))
            .collect();
        let array = ArrayTabulatedFunction::from_points(points).unwrap();
        assert!(list == array);
        assert!(array == list);
        assert_eq!(list.hash_code(), array.hash_code());
    }

    #[test]
    fn test_random_access_uses_cache_correctly() {
        let list = LinkedListTabulatedFunction::with_count(0.0, 99.0, 100).unwrap();
        for &i in &[50, 51, 49, 10, 90, 0, 99, 52, 53, 3] {
            assert_eq!(list.point_x(i).unwrap(), i as f64);
        }
        for i in (0..100).rev() {
            assert_eq!(list.point_x(i).unwrap(), i as f64);
        }
    }

    #[test]
    fn test_value_interpolates() {
        let list = even_numbers();
        assert_eq!(list.value(4.0), 8.0);
        assert_abs_diff_eq!(list.value(4.25), 8.5, epsilon = 1e-12);
        assert!(list.value(0.0).is_nan());
        assert!(list.value(7.5).is_nan());
    }

    #[test]
    fn test_add_point_positions() {
        let mut list = even_numbers();
        list.add_point(FunctionPoint::new(18.0, 20.0)).unwrap();
        list.add_point(FunctionPoint::new(0.5, 1.0)).unwrap();
        list.add_point(FunctionPoint::new(3.5, 7.0)).unwrap();
        assert_ring_consistent(&list);
        assert_eq!(list.points_count(), 10);
        assert_eq!(list.point(0).unwrap(), FunctionPoint::new(0.5, 1.0));
        assert_eq!(list.point(4).unwrap(), FunctionPoint::new(3.5, 7.0));
        assert_eq!(list.point(9).unwrap(), FunctionPoint::new(18.0, 20.0));
        assert_eq!(
            list.add_point(FunctionPoint::new(3.5, 0.0)),
            Err(TabulatedFunctionError::DuplicateX(3.5))
        );
        assert_eq!(list.points_count(), 10);
    }

    #[test]
    fn test_add_non_finite_x_leaves_ring_untouched() {
        let mut list = even_numbers();
        let arena_len = list.nodes.len();
        assert!(matches!(
            list.add_point(FunctionPoint::new(f64::NAN, 5.0)),
            Err(TabulatedFunctionError::OrderingViolation { .. })
        ));
        assert!(list.add_point(FunctionPoint::new(f64::NEG_INFINITY, 5.0)).is_err());
        assert!(list.set_point_x(6, f64::NAN).is_err());
        assert_eq!(list.points_count(), 7);
        assert_eq!(list.nodes.len(), arena_len);
        assert_eq!(list.right_domain_border(), 7.0);
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_cache_invalidated_by_structural_change() {
        let mut list = even_numbers();
        assert_eq!(list.point_x(3).unwrap(), 4.0);
        list.add_point(FunctionPoint::new(2.5, 0.0)).unwrap();
        assert_eq!(list.cache.get(), None);
        assert_eq!(list.point_x(3).unwrap(), 3.0);
        assert_eq!(list.point_x(4).unwrap(), 4.0);

        list.delete_point(0).unwrap();
        assert_eq!(list.cache.get(), None);
        assert_eq!(list.point_x(3).unwrap(), 4.0);
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_delete_and_reuse_slots() {
        let mut list = even_numbers();
        list.delete_point(6).unwrap();
        list.delete_point(0).unwrap();
        list.delete_point(2).unwrap();
        list.delete_point(1).unwrap();
        assert_eq!(
            list.delete_point(0),
            Err(TabulatedFunctionError::MinimumCountViolation(3))
        );
        let xs: Vec<f64> = list.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![2.0, 5.0, 6.0]);

        let arena_len = list.nodes.len();
        list.add_point(FunctionPoint::new(4.0, 0.0)).unwrap();
        list.add_point(FunctionPoint::new(1.0, 0.0)).unwrap();
        assert_eq!(list.nodes.len(), arena_len);
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_set_point_uses_neighbours() {
        let mut list = even_numbers();
        assert!(matches!(
            list.set_point(2, FunctionPoint::new(4.0, 0.0)),
            Err(TabulatedFunctionError::OrderingViolation { .. })
        ));
        list.set_point(2, FunctionPoint::new(3.9, 0.0)).unwrap();
        list.set_point_x(6, 100.0).unwrap();
        list.set_point_x(0, -100.0).unwrap();
        list.set_point_y(1, -1.0).unwrap();
        assert_eq!(list.domain(), (-100.0, 100.0));
        assert_eq!(list.point(1).unwrap(), FunctionPoint::new(2.0, -1.0));
        assert_eq!(list.point(2).unwrap(), FunctionPoint::new(3.9, 0.0));
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_clone_rebuilds_ring() {
        let mut original = LinkedListTabulatedFunction::with_values(0.0, 3.0, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        original.delete_point(1).unwrap();
        original.add_point(FunctionPoint::new(1.5, 9.0)).unwrap();
        let _ = original.point(2).unwrap();

        let copy = original.clone();
        assert_eq!(copy.cache.get(), None);
        assert!(copy.free.is_empty());
        assert_eq!(copy.nodes.len(), 5);
        assert!(copy == original);

        original.delete_point(0).unwrap();
        original.set_point_y(0, 42.0).unwrap();
        assert_eq!(copy.points_count(), 4);
        assert_eq!(copy.point(0).unwrap(), FunctionPoint::new(0.0, 1.0));
        assert_eq!(copy.point(1).unwrap(), FunctionPoint::new(1.5, 9.0));
    }

    #[test]
    fn test_display_matches_array_backend() {
        let list = LinkedListTabulatedFunction::with_values(0.0, 1.0, &[2.0, 3.5]).unwrap();
        let array = ArrayTabulatedFunction::with_values(0.0, 1.0, &[2.0, 3.5]).unwrap();
        assert_eq!(list.to_string(), array.to_string());
    }
}
