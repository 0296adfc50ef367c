#![allow(dead_code)]

use std::path::PathBuf;

use packup_core::{BuildOutput, BuildResult, Bundler, InputItem, InputOptions, OutputOptions};

pub fn fixture_root(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests/fixtures")
    .join(name)
}

pub fn input_options(name: &str, entries: &[(&str, &str)]) -> InputOptions {
  InputOptions {
    input: entries
      .iter()
      .map(|(name, import)| InputItem::new(*name, *import))
      .collect(),
    root: fixture_root(name),
    ..Default::default()
  }
}

#[derive(Debug)]
pub struct CompiledFixture {
  pub root: PathBuf,
  pub dist: PathBuf,
  pub output: BuildOutput,
}

/// Builds a fixture folder into its own `dist` directory, wiping whatever a
/// previous test run left there. Each test owns its fixture, so parallel
/// test threads never share a `dist`.
pub fn compile_fixture(name: &str, entries: &[(&str, &str)]) -> BuildResult<CompiledFixture> {
  compile_fixture_with(name, input_options(name, entries), OutputOptions::default())
}

pub fn compile_fixture_with(
  name: &str,
  input_options: InputOptions,
  mut output_options: OutputOptions,
) -> BuildResult<CompiledFixture> {
  let root = fixture_root(name);
  let dist = root.join("dist");
  if dist.is_dir() {
    std::fs::remove_dir_all(&dist).unwrap();
  }
  output_options.dir = dist.clone();
  let mut bundler = Bundler::new(input_options);
  let output = bundler.run(output_options)?;
  Ok(CompiledFixture { root, dist, output })
}

pub fn module_ids(output: &BuildOutput) -> Vec<String> {
  output
    .modules
    .module_ids()
    .map(|id| id.as_ref().to_string())
    .collect()
}
