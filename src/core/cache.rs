//! Memoization keyed by an explicit table-version token.
//!
//! Upstream tables (stack timing, marker timing) are replaced wholesale, for
//! example by symbolication. Each replacement bumps a monotonic version, and
//! derived values are cached against that version rather than against object
//! identity in a weak-lifetime map.

use indexmap::IndexMap;

/// Monotonic token identifying one generation of an upstream table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableVersion(u64);

impl TableVersion {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing [`TableVersion`] tokens.
#[derive(Debug, Default)]
pub struct TableVersionCounter {
    next: u64,
}

impl TableVersionCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) -> TableVersion {
        let version = TableVersion(self.next);
        self.next += 1;
        version
    }
}

/// Cache of expensive per-table derived values, keyed by table version.
///
/// Keeps at most `retain_limit` generations, evicting the oldest first so a
/// rapid swap back and forth (common during incremental symbolication) does
/// not recompute every frame.
#[derive(Debug)]
pub struct VersionedCache<V> {
    entries: IndexMap<u64, V>,
    retain_limit: usize,
}

impl<V> VersionedCache<V> {
    #[must_use]
    pub fn new(retain_limit: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            retain_limit: retain_limit.max(1),
        }
    }

    #[must_use]
    pub fn get(&self, version: TableVersion) -> Option<&V> {
        self.entries.get(&version.raw())
    }

    pub fn get_or_insert_with(
        &mut self,
        version: TableVersion,
        compute: impl FnOnce() -> V,
    ) -> &V {
        if !self.entries.contains_key(&version.raw()) {
            self.entries.insert(version.raw(), compute());
            while self.entries.len() > self.retain_limit {
                self.entries.shift_remove_index(0);
            }
        }
        &self.entries[&version.raw()]
    }

    pub fn invalidate_before(&mut self, version: TableVersion) {
        self.entries.retain(|&key, _| key >= version.raw());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
