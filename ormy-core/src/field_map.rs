use crate::Record;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Column name to field index of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    type_name: &'static str,
    columns: HashMap<&'static str, usize>,
}

impl FieldMap {
    pub fn build<R: Record>() -> Self {
        let fields = R::fields();
        let mut columns = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if let Some(previous) = columns.insert(field.column, index) {
                log::warn!(
                    "Fields `{}` and `{}` of `{}` both map column `{}`, the latter wins",
                    fields[previous].name,
                    field.name,
                    R::type_name(),
                    field.column,
                );
            }
        }
        Self {
            type_name: R::type_name(),
            columns,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.columns.iter().map(|(k, v)| (*k, *v))
    }
}

/// Lazily built, never evicted, field maps keyed by record type.
///
/// Two callers missing the same type at once may both build its map; the
/// builds are equivalent and the first one inserted is kept.
#[derive(Debug, Default)]
pub struct FieldMapCache {
    maps: RwLock<HashMap<TypeId, Arc<FieldMap>>>,
    hits: AtomicU64,
    builds: AtomicU64,
}

impl FieldMapCache {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn field_map_for<R: Record>(&self) -> Arc<FieldMap> {
        let key = TypeId::of::<R>();
        let cached = self
            .maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(map) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("Field map of `{}` found in cache", map.type_name());
            return map;
        }
        let map = Arc::new(FieldMap::build::<R>());
        self.builds.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "Built the field map of `{}` ({} columns)",
            map.type_name(),
            map.len()
        );
        self.maps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(map)
            .clone()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of maps built, including redundant builds lost to a race.
    pub fn builds(&self) -> u64 {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
