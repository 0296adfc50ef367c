use std::{path::PathBuf, sync::Arc};

use derivative::Derivative;
use regex::Regex;

/// A pre-analysis text transform. Pure `source in, source out`; the first
/// failing loader aborts the whole build.
pub type LoaderFn = Arc<dyn Fn(String) -> anyhow::Result<String> + Send + Sync>;

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct ModuleRule {
  /// Matched against the module's absolute path.
  pub test: Regex,
  #[derivative(Debug = "ignore")]
  pub loaders: Vec<LoaderFn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
  pub name: String,
  pub import: String,
}

impl InputItem {
  pub fn new(name: impl Into<String>, import: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      import: import.into(),
    }
  }
}

/// A bare entry path stands for the default entry name, like a string-form
/// `entry` configuration.
impl From<&str> for InputItem {
  fn from(import: &str) -> Self {
    Self::new("main", import)
  }
}

#[derive(Debug)]
pub struct InputOptions {
  /// Named graph roots, in chunk order.
  pub input: Vec<InputItem>,
  /// Project root. Entry specifiers resolve against it and canonical module
  /// ids are computed relative to it.
  pub root: PathBuf,
  /// Extension candidates for extension-less specifiers, tried in order.
  pub extensions: Vec<String>,
  pub module_rules: Vec<ModuleRule>,
}

impl Default for InputOptions {
  fn default() -> Self {
    Self {
      input: Default::default(),
      root: std::env::current_dir().unwrap(),
      extensions: vec![".js".to_string()],
      module_rules: Default::default(),
    }
  }
}
