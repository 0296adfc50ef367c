use packup_common::{ChunkId, ModuleId};

/// One physical source file after transformation and import rewriting. Built
/// exactly once per build; every later request for the same id reuses this
/// record through the registry.
#[derive(Debug)]
pub struct NormalModule {
  pub id: ModuleId,
  /// Entries that (transitively) require this module, in reach order.
  /// Grows as more entries reach it, never shrinks, duplicates suppressed.
  pub owning_entries: Vec<ChunkId>,
  /// Identity-only dependency edges, in source discovery order. The raw
  /// relative specifiers are discarded once resolved.
  pub dependencies: Vec<ModuleId>,
  /// The rewritten, reprinted source that ends up inside the chunk wrapper.
  pub code: String,
}

impl NormalModule {
  /// Returns true when `entry` was newly recorded.
  pub(crate) fn add_owning_entry(&mut self, entry: &ChunkId) -> bool {
    if self.owning_entries.contains(entry) {
      false
    } else {
      self.owning_entries.push(entry.clone());
      true
    }
  }

  pub fn belongs_to(&self, entry: &ChunkId) -> bool {
    self.owning_entries.contains(entry)
  }
}
