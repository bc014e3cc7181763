use std::collections::HashMap;

use crate::item::ItemView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    pub constructed: usize,
    pub reused: usize,
}

/// Free lists of views keyed by invariant properties.
///
/// Every dequeued view must have its content applied, whether it was just built or reused. There
/// is no eviction; callers bound the pool by how many views they hand back.
pub struct ReusePool<V: ItemView> {
    free: HashMap<V::InvariantProperties, Vec<V>>,
    stats: PoolStats,
}

impl<V: ItemView> Default for ReusePool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ItemView> ReusePool<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            free: HashMap::new(),
            stats: PoolStats::default(),
        }
    }

    /// Takes a free view for `properties`, constructing one when none is available.
    pub fn dequeue(&mut self, properties: &V::InvariantProperties) -> V {
        if let Some(view) = self.take_free(properties) {
            self.stats.reused += 1;
            tracing::trace!(?properties, "reusing pooled view");
            return view;
        }

        self.stats.constructed += 1;
        tracing::debug!(?properties, "constructing view");
        V::construct(properties.clone())
    }

    /// Dequeues a view and applies `content` to it.
    pub fn dequeue_with_content(
        &mut self,
        properties: &V::InvariantProperties,
        content: V::Content,
    ) -> V {
        let mut view = self.dequeue(properties);
        V::apply_content(content, &mut view);
        view
    }

    /// Returns a view so later cells with an equal key can reuse it.
    pub fn enqueue(&mut self, view: V) {
        let key = view.invariant_properties().clone();
        self.free.entry(key).or_default().push(view);
    }

    /// Number of views waiting for reuse under `properties`.
    #[must_use]
    pub fn free_count(&self, properties: &V::InvariantProperties) -> usize {
        self.free.get(properties).map_or(0, Vec::len)
    }

    /// Distinct keys the pool has free views for.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.free.len()
    }

    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Pops an idle view for `properties`, dropping the key once its list runs dry.
    fn take_free(&mut self, properties: &V::InvariantProperties) -> Option<V> {
        let views = self.free.get_mut(properties)?;
        let view = views.pop();
        if views.is_empty() {
            self.free.remove(properties);
        }
        view
    }
}
