use std::path::PathBuf;

use packup_common::{ChunkId, ModuleId};
use packup_resolver::Resolver;
use packup_swc_visitors::ResolvedRequests;

use crate::{
  loader_runner::run_loaders, module_id_from_path, BuildError, BuildResult, InputOptions,
  NormalModule, COMPILER,
};

/// Builds one module record: read, transform, parse, discover and resolve
/// `require` call-sites, rewrite them, reprint. Recursion into dependencies
/// is the loader's job; the task only reports what it found.
pub(crate) struct ModuleTask<'a> {
  pub(crate) id: ModuleId,
  pub(crate) path: PathBuf,
  pub(crate) entry: ChunkId,
  pub(crate) resolver: &'a Resolver,
  pub(crate) input_options: &'a InputOptions,
}

pub(crate) struct TaskResult {
  pub(crate) module: NormalModule,
  /// Absolute path per discovered dependency, discovery order, deduped by
  /// id (two specifiers may land on the same file).
  pub(crate) resolved_dependencies: Vec<(ModuleId, PathBuf)>,
}

impl ModuleTask<'_> {
  pub(crate) fn run(self) -> BuildResult<TaskResult> {
    let source = std::fs::read_to_string(&self.path)
      .map_err(BuildError::io_error)
      .map_err(|e| e.context(format!("read module: {}", self.path.display())))?;

    let source = run_loaders(&self.path, source, &self.input_options.module_rules)?;

    let fm = COMPILER.create_source_file(self.path.clone(), source);
    let mut ast = COMPILER
      .parse(fm.clone())
      .map_err(|e| BuildError::parse_failed(fm, e))?;

    let scan_result = packup_swc_visitors::scan(&ast);
    if scan_result.has_non_static_require {
      return Err(BuildError::non_static_require(&self.path));
    }

    let mut resolved_ids = ResolvedRequests::default();
    let mut resolved_dependencies: Vec<(ModuleId, PathBuf)> = Vec::new();
    for specifier in &scan_result.dependencies {
      if resolved_ids.contains_key(specifier) {
        continue;
      }
      let dep_path = self.resolver.resolve(Some(&self.path), specifier)?;
      let dep_id = module_id_from_path(&dep_path, self.resolver.root());
      if !resolved_dependencies.iter().any(|(id, _)| id == &dep_id) {
        resolved_dependencies.push((dep_id.clone(), dep_path));
      }
      resolved_ids.insert(specifier.clone(), dep_id);
    }

    packup_swc_visitors::finalize(&mut ast, &resolved_ids, packup_runtime::RUNTIME_REQUIRE);
    let code = COMPILER.print(&ast)?;

    let dependencies = resolved_dependencies
      .iter()
      .map(|(id, _)| id.clone())
      .collect();

    Ok(TaskResult {
      module: NormalModule {
        id: self.id,
        owning_entries: vec![self.entry],
        dependencies,
        code,
      },
      resolved_dependencies,
    })
  }
}
