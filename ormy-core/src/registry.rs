use crate::{FieldMapCache, TypeBinder};
use std::sync::Arc;

/// The state shared by every query of one or more [`Ormy`](crate::Ormy)
/// instances: literal renderers and record field maps.
#[derive(Debug, Default)]
pub struct Registry {
    binder: TypeBinder,
    field_maps: FieldMapCache,
}

impl Registry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_binder(binder: TypeBinder) -> Self {
        Self {
            binder,
            field_maps: FieldMapCache::new(),
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn binder(&self) -> &TypeBinder {
        &self.binder
    }

    pub fn field_maps(&self) -> &FieldMapCache {
        &self.field_maps
    }
}
