use packup_plugin::{BuildPlugin, CompilerHooks};

use crate::{BuildError, BuildOutput, BuildResult, Bundle, Graph, InputOptions, OutputOptions};

pub struct Bundler {
  input_options: InputOptions,
  hooks: CompilerHooks,
}

#[derive(Debug)]
pub struct Asset {
  pub filename: String,
  pub content: String,
}

impl Bundler {
  pub fn new(input_options: InputOptions) -> Self {
    Self::with_plugins(input_options, vec![])
  }

  pub fn with_plugins(input_options: InputOptions, plugins: Vec<Box<dyn BuildPlugin>>) -> Self {
    packup_tracing::enable_tracing_on_demand();
    let mut hooks = CompilerHooks::default();
    for plugin in &plugins {
      tracing::debug!("applying plugin {}", plugin.name());
      plugin.apply(&mut hooks);
    }
    Self {
      input_options,
      hooks,
    }
  }

  /// Runs one full build: `run` hook, graph construction, chunk assembly
  /// and rendering, `emit` hook, file writes, `done` hook. The returned
  /// `Result` is the single completion channel: exactly one of error or
  /// output, exactly once. The first fatal condition unwinds the whole
  /// build; there is no partial-output mode.
  pub fn run(&mut self, output_options: OutputOptions) -> BuildResult<BuildOutput> {
    tracing::debug!("{:#?}", self.input_options);
    tracing::debug!("{:#?}", output_options);

    self.hooks.run.call()?;

    let mut graph = Graph::default();
    graph.generate_module_graph(&self.input_options)?;

    let (chunks, assets) = Bundle::new(&output_options, &graph).generate();

    self.hooks.emit.call()?;

    std::fs::create_dir_all(&output_options.dir)
      .map_err(BuildError::io_error)
      .map_err(|e| {
        e.context(format!(
          "create output directory: {}",
          output_options.dir.display()
        ))
      })?;

    let mut files = Vec::with_capacity(assets.len());
    for asset in &assets {
      let dest = output_options.dir.join(&asset.filename);
      if let Some(parent) = dest.parent() {
        if !parent.exists() {
          std::fs::create_dir_all(parent).map_err(BuildError::io_error)?;
        }
      }
      std::fs::write(&dest, &asset.content)
        .map_err(BuildError::io_error)
        .map_err(|e| e.context(format!("write asset: {}", dest.display())))?;
      tracing::debug!("emitted {}", dest.display());
      files.push(asset.filename.clone());
    }

    self.hooks.done.call()?;

    let Graph { entries, registry } = graph;
    Ok(BuildOutput {
      entries,
      modules: registry,
      chunks,
      files,
      assets,
    })
  }
}
