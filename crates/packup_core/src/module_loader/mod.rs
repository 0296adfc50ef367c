use std::path::PathBuf;

use packup_common::{ChunkId, ModuleId};
use packup_error::format_err;
use packup_resolver::Resolver;
use rustc_hash::FxHashSet;

pub(crate) mod module_task;

use module_task::ModuleTask;

use crate::{module_id_from_path, BuildError, BuildResult, Graph, InputOptions};

/// Drives the recursive, depth-first graph build. One instance per build;
/// the registry inside `graph` is the only state mutated across the
/// recursion, on this single thread of control.
pub(crate) struct ModuleLoader<'a> {
  input_options: &'a InputOptions,
  graph: &'a mut Graph,
  resolver: Resolver,
}

impl<'a> ModuleLoader<'a> {
  pub(crate) fn new(
    graph: &'a mut Graph,
    resolver: Resolver,
    input_options: &'a InputOptions,
  ) -> Self {
    Self {
      input_options,
      graph,
      resolver,
    }
  }

  fn resolve_entries(&self) -> BuildResult<Vec<(ChunkId, PathBuf)>> {
    let mut seen_names: FxHashSet<&str> = FxHashSet::default();
    for item in &self.input_options.input {
      if !seen_names.insert(item.name.as_str()) {
        return Err(BuildError::duplicate_entry_name(item.name.clone()));
      }
    }

    self
      .input_options
      .input
      .iter()
      .map(|item| {
        let entry_path = self
          .resolver
          .resolve(None, &item.import)
          .map_err(|_| BuildError::unresolved_entry(&item.import))?;
        tracing::debug!("entry {} -> {}", item.name, entry_path.display());
        Ok((ChunkId::from(item.name.as_str()), entry_path))
      })
      .collect()
  }

  pub(crate) fn fetch_all_modules(mut self) -> BuildResult<()> {
    if self.input_options.input.is_empty() {
      return Err(format_err!("You must supply at least one entry to packup").into());
    }

    let resolved_entries = self.resolve_entries()?;

    for (chunk_id, entry_path) in resolved_entries {
      let module_id = self.build_module(&chunk_id, entry_path)?;
      self.graph.entries.push((chunk_id, module_id));
    }
    Ok(())
  }

  fn build_module(&mut self, entry: &ChunkId, path: PathBuf) -> BuildResult<ModuleId> {
    let id = module_id_from_path(&path, self.resolver.root());
    if self.graph.registry.contains(&id) {
      tracing::trace!("dedup hit: {id}");
      self.mark_reachable(entry, &id);
      return Ok(id);
    }

    tracing::trace!("building module {id}");
    let result = ModuleTask {
      id: id.clone(),
      path,
      entry: entry.clone(),
      resolver: &self.resolver,
      input_options: self.input_options,
    }
    .run()?;

    // Register before recursing: membership in the registry is what stops a
    // dependency cycle from re-entering this module.
    self.graph.registry.register(result.module);

    for (_, dep_path) in result.resolved_dependencies {
      self.build_module(entry, dep_path)?;
    }
    Ok(id)
  }

  /// Appends `entry` ownership to an already-built module and to everything
  /// reachable from it, following recorded dependency edges only; no file
  /// is re-read or re-parsed. Stops wherever `entry` is already an owner,
  /// which also bounds the walk over cycles.
  fn mark_reachable(&mut self, entry: &ChunkId, id: &ModuleId) {
    let mut pending = vec![id.clone()];
    while let Some(id) = pending.pop() {
      if self.graph.registry.add_owning_entry(&id, entry) {
        pending.extend(self.graph.registry.fetch(&id).dependencies.iter().cloned());
      }
    }
  }
}
