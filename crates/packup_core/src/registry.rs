use hashlink::LinkedHashMap;
use packup_common::{ChunkId, ModuleId};

use crate::NormalModule;

/// Per-build dedup store of the canonical module records, keyed by id.
/// Iteration follows insertion order, which is discovery order; chunk
/// assembly depends on that. Because a record is inserted before its
/// dependencies are recursed into, membership here is also the in-progress
/// guard that keeps dependency cycles from re-entering a module.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
  module_by_id: LinkedHashMap<ModuleId, NormalModule>,
}

impl ModuleRegistry {
  pub fn contains(&self, id: &ModuleId) -> bool {
    self.module_by_id.contains_key(id)
  }

  pub fn get(&self, id: &ModuleId) -> Option<&NormalModule> {
    self.module_by_id.get(id)
  }

  pub(crate) fn fetch(&self, id: &ModuleId) -> &NormalModule {
    self
      .module_by_id
      .get(id)
      .unwrap_or_else(|| panic!("Failed to fetch module: {id:?}"))
  }

  pub(crate) fn register(&mut self, module: NormalModule) {
    tracing::trace!("registering module {}", module.id);
    let prev = self.module_by_id.insert(module.id.clone(), module);
    debug_assert!(prev.is_none(), "module registered twice");
  }

  /// Returns true when `entry` was not yet an owner of `id`.
  pub(crate) fn add_owning_entry(&mut self, id: &ModuleId, entry: &ChunkId) -> bool {
    self
      .module_by_id
      .get_mut(id)
      .unwrap_or_else(|| panic!("Failed to fetch module: {id:?}"))
      .add_owning_entry(entry)
  }

  /// Canonical records in discovery order.
  pub fn modules(&self) -> impl Iterator<Item = &NormalModule> {
    self.module_by_id.values()
  }

  pub fn module_ids(&self) -> impl Iterator<Item = &ModuleId> {
    self.module_by_id.keys()
  }

  pub fn len(&self) -> usize {
    self.module_by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.module_by_id.is_empty()
  }
}
