use std::{borrow::Cow, fmt::Debug};

use crate::SyncHook;

/// The three broadcast points the build fires, in lifecycle order: `run`
/// before any resolution, `emit` after all chunks are computed but before
/// any file is written, `done` after all files are written.
#[derive(Debug, Default)]
pub struct CompilerHooks {
  pub run: SyncHook,
  pub emit: SyncHook,
  pub done: SyncHook,
}

pub type PluginName<'a> = Cow<'a, str>;

pub trait BuildPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  /// Registration hook: called once at bundler construction, in plugin
  /// order, to tap whichever lifecycle hooks the plugin cares about.
  fn apply(&self, hooks: &mut CompilerHooks);
}
