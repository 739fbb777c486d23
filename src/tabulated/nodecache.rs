use std::cell::Cell;

use tracing::trace;

/// Single-slot "last resolved position" cache for index-addressed traversal.
///
/// Lookups take `&self`, so the slot lives in a `Cell`: reading a table refreshes the
/// cache without requiring mutable access. Structural mutations must call
/// [`NodeCache::invalidate`]; a stale `(index, node)` pair would otherwise point at the
/// wrong node.
#[derive(Debug)]
pub(crate) struct NodeCache<K: Copy> {
    slot: Cell<Option<(usize, K)>>,
}

impl<K: Copy> NodeCache<K> {
    pub fn new() -> Self {
        NodeCache { slot: Cell::new(None) }
    }

    pub fn get(&self) -> Option<(usize, K)> {
        self.slot.get()
    }

    pub fn store(&self, index: usize, node: K) {
        self.slot.set(Some((index, node)));
    }

    pub fn invalidate(&self) {
        if self.slot.replace(None).is_some() {
            trace!("node cache invalidated");
        }
    }

    /// Cached start point for reaching `index`, if it is nearer than both ends of a
    /// sequence of `len` elements.
    pub fn start_for(&self, index: usize, len: usize) -> Option<(usize, K)> {
        let (cached_index, node) = self.get()?;
        let to_cache = cached_index.abs_diff(index);
        let to_end = index.min(len - 1 - index);
        if to_cache < to_end {
            trace!(index, cached_index, "node cache hit");
            Some((cached_index, node))
        } else {
            None
        }
    }
}

impl<K: Copy> Default for NodeCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_has_no_start() {
        let cache: NodeCache<usize> = NodeCache::new();
        assert_eq!(cache.get(), None);
        assert_eq!(cache.start_for(5, 10), None);
    }

    #[test]
    fn test_start_for_prefers_nearest() {
        let cache = NodeCache::new();
        cache.store(50, 'n');
        assert_eq!(cache.start_for(51, 100), Some((50, 'n')));
        assert_eq!(cache.start_for(48, 100), Some((50, 'n')));
        // closer to the front than to the cached position
        assert_eq!(cache.start_for(2, 100), None);
        // closer to the back
        assert_eq!(cache.start_for(98, 100), None);
    }

    #[test]
    fn test_invalidate_clears_slot() {
        let cache = NodeCache::new();
        cache.store(3, 7u32);
        cache.invalidate();
        assert_eq!(cache.get(), None);
        cache.invalidate();
        assert_eq!(cache.get(), None);
    }
}
