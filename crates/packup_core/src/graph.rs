use packup_common::{ChunkId, ModuleId};
use packup_resolver::Resolver;

use crate::{module_loader::ModuleLoader, BuildResult, InputOptions, ModuleRegistry};

/// The union of all modules reachable from any entry: the registry's module
/// set plus each module's own dependency edges. Built fresh per build
/// invocation and handed to the caller afterwards, never cached across
/// builds.
#[derive(Debug, Default)]
pub struct Graph {
  /// `(chunk id, entry module id)` per configured entry, in input order.
  pub entries: Vec<(ChunkId, ModuleId)>,
  pub registry: ModuleRegistry,
}

impl Graph {
  pub(crate) fn generate_module_graph(&mut self, input_options: &InputOptions) -> BuildResult<()> {
    let resolver = Resolver::new(
      input_options.root.clone(),
      input_options.extensions.clone(),
    );
    ModuleLoader::new(self, resolver, input_options).fetch_all_modules()
  }
}
