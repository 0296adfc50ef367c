use packup_common::{ChunkId, ModuleId};

use crate::{ModuleRegistry, OutputOptions};

/// The modules belonging to one entry's output bundle. Holds ids only; the
/// registry keeps the canonical records.
#[derive(Debug)]
pub struct Chunk {
  pub id: ChunkId,
  pub entry: ModuleId,
  /// Owned modules in registry (discovery) order. Includes the entry
  /// module; a module shared with an earlier entry keeps its earlier
  /// position.
  pub modules: Vec<ModuleId>,
  pub(crate) filename: Option<String>,
}

impl Chunk {
  pub(crate) fn from_entry(id: ChunkId, entry: ModuleId, registry: &ModuleRegistry) -> Self {
    let modules = registry
      .modules()
      .filter(|module| module.belongs_to(&id))
      .map(|module| module.id.clone())
      .collect();
    Self {
      id,
      entry,
      modules,
      filename: None,
    }
  }

  pub(crate) fn gen_file_name(&mut self, output_options: &OutputOptions) {
    self.filename = Some(output_options.file_names.render(self.id.as_ref()));
  }

  pub fn filename(&self) -> Option<&str> {
    self.filename.as_deref()
  }

  pub(crate) fn render(&self, registry: &ModuleRegistry) -> String {
    packup_runtime::render_chunk(
      self.entry.as_ref(),
      self.modules.iter().map(|id| {
        let module = registry.fetch(id);
        (module.id.as_ref(), module.code.as_str())
      }),
    )
  }
}
