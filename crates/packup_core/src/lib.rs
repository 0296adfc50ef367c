use std::sync::Arc;

mod build_output;
pub use build_output::*;
mod bundle;
pub use bundle::*;
mod bundler;
pub use bundler::*;
mod chunk;
pub use chunk::*;
mod graph;
pub use graph::*;
mod loader_runner;
mod module_loader;
mod normal_module;
pub use normal_module::*;
mod options;
pub use options::*;
mod registry;
pub use registry::*;
mod utils;
pub use utils::*;

use once_cell::sync::Lazy;
use swc_core::common::{FilePathMapping, SourceMap};

pub(crate) static SOURCE_MAP: Lazy<Arc<SourceMap>> =
  Lazy::new(|| Arc::new(SourceMap::new(FilePathMapping::empty())));

pub(crate) static COMPILER: Lazy<Arc<packup_compiler::Compiler>> = Lazy::new(|| {
  let cm = SOURCE_MAP.clone();
  let compiler = packup_compiler::Compiler::with_cm(cm);
  Arc::new(compiler)
});

// public exports

pub use packup_common::{ChunkId, ModuleId};
pub use packup_error::ErrorKind;
pub use packup_plugin::{BuildPlugin, CompilerHooks, PluginName, SyncHook};

pub type BuildResult<T> = packup_error::Result<T>;
pub type BuildError = packup_error::Error;
