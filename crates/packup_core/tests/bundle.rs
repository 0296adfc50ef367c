use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use packup_core::{
  Bundler, ChunkId, InputOptions, LoaderFn, ModuleId, ModuleRule, OutputOptions,
};
use regex::Regex;

mod common;

use common::{compile_fixture, compile_fixture_with, fixture_root, input_options, module_ids};

#[test]
fn bundles_a_single_entry_with_its_dependency() {
  let fixture = compile_fixture("basic", &[("main", "./src/index.js")]).unwrap();
  let output = &fixture.output;

  assert_eq!(
    module_ids(output),
    vec!["./src/index.js", "./src/greeting.js"]
  );
  assert_eq!(output.entries.len(), 1);
  assert_eq!(output.entries[0].0, ChunkId::from("main"));
  assert_eq!(output.entries[0].1, ModuleId::new("./src/index.js"));

  assert_eq!(output.chunks.len(), 1);
  let chunk = &output.chunks[0];
  assert_eq!(chunk.id, ChunkId::from("main"));
  assert_eq!(chunk.entry, ModuleId::new("./src/index.js"));
  assert_eq!(
    chunk.modules,
    vec![
      ModuleId::new("./src/index.js"),
      ModuleId::new("./src/greeting.js")
    ]
  );

  assert_eq!(output.files, vec!["main.js"]);
  let written = std::fs::read_to_string(fixture.dist.join("main.js")).unwrap();
  assert_eq!(written, output.assets[0].content);

  // One wrapper per module, keyed by canonical id, plus the entry trailer.
  assert!(written.contains("\"./src/index.js\": (function(module, exports, __packup_require__)"));
  assert!(
    written.contains("\"./src/greeting.js\": (function(module, exports, __packup_require__)")
  );
  assert!(written.contains("__packup_require__(\"./src/index.js\");"));

  // Rewrite correctness: no raw relative specifier survives.
  assert!(written.contains("__packup_require__(\"./src/greeting.js\")"));
  assert!(!written.contains("require('./greeting')"));
}

#[test]
fn deduplicates_modules_shared_across_entries() {
  let loads = Arc::new(AtomicUsize::new(0));
  let counting_loader: LoaderFn = {
    let loads = loads.clone();
    Arc::new(move |source: String| {
      loads.fetch_add(1, Ordering::SeqCst);
      Ok(source)
    })
  };

  let mut options = input_options("shared", &[("a", "./a.js"), ("b", "./b.js")]);
  options.module_rules = vec![ModuleRule {
    test: Regex::new(r"\.js$").unwrap(),
    loaders: vec![counting_loader],
  }];

  let fixture = compile_fixture_with(
    "shared",
    options,
    OutputOptions {
      file_names: "[name].bundle.js".into(),
      ..Default::default()
    },
  )
  .unwrap();
  let output = &fixture.output;

  assert_eq!(module_ids(output), vec!["./a.js", "./shared.js", "./b.js"]);

  // Exactly one record for the shared module, owned by both entries.
  let shared = output.modules.get(&ModuleId::new("./shared.js")).unwrap();
  assert_eq!(
    shared.owning_entries,
    vec![ChunkId::from("a"), ChunkId::from("b")]
  );

  // Transformed at most once per file even though two entries reach it.
  assert_eq!(loads.load(Ordering::SeqCst), 3);

  assert_eq!(output.files, vec!["a.bundle.js", "b.bundle.js"]);
  let chunk_a = &output.chunks[0];
  let chunk_b = &output.chunks[1];
  assert_eq!(
    chunk_a.modules,
    vec![ModuleId::new("./a.js"), ModuleId::new("./shared.js")]
  );
  // The shared module keeps its first-registered position.
  assert_eq!(
    chunk_b.modules,
    vec![ModuleId::new("./shared.js"), ModuleId::new("./b.js")]
  );

  for asset in &output.assets {
    assert!(asset
      .content
      .contains("\"./shared.js\": (function(module, exports, __packup_require__)"));
  }
}

#[test]
fn shared_dependencies_propagate_entry_ownership_transitively() {
  let fixture = compile_fixture("transitive_shared", &[("a", "./a.js"), ("b", "./b.js")]).unwrap();
  let output = &fixture.output;

  // Entry b never parses shared.js itself, yet everything shared.js pulls
  // in must belong to b's chunk.
  let inner = output.modules.get(&ModuleId::new("./inner.js")).unwrap();
  assert_eq!(
    inner.owning_entries,
    vec![ChunkId::from("a"), ChunkId::from("b")]
  );

  let chunk_b = &output.chunks[1];
  assert!(chunk_b.modules.contains(&ModuleId::new("./shared.js")));
  assert!(chunk_b.modules.contains(&ModuleId::new("./inner.js")));
}

#[test]
fn direct_require_cycles_terminate() {
  let fixture = compile_fixture("cycle", &[("main", "./a.js")]).unwrap();
  let output = &fixture.output;

  // Both ends of the cycle registered exactly once.
  assert_eq!(module_ids(output), vec!["./a.js", "./b.js"]);

  let a = output.modules.get(&ModuleId::new("./a.js")).unwrap();
  let b = output.modules.get(&ModuleId::new("./b.js")).unwrap();
  assert_eq!(a.dependencies, vec![ModuleId::new("./b.js")]);
  assert_eq!(b.dependencies, vec![ModuleId::new("./a.js")]);

  let written = std::fs::read_to_string(fixture.dist.join("main.js")).unwrap();
  assert!(written.contains("\"./a.js\""));
  assert!(written.contains("\"./b.js\""));
}

#[test]
fn builds_are_deterministic() {
  let first = compile_fixture("diamond", &[("main", "./index.js")]).unwrap();

  // Depth-first, left-to-right discovery order.
  assert_eq!(
    first.output.chunks[0]
      .modules
      .iter()
      .map(|id| id.as_ref())
      .collect::<Vec<_>>(),
    vec!["./index.js", "./a.js", "./shared.js", "./b.js"]
  );

  // Graph completeness: every dependency edge points at a registered module.
  for module in first.output.modules.modules() {
    for dep in &module.dependencies {
      assert!(
        first.output.modules.contains(dep),
        "dangling edge {dep} from {}",
        module.id
      );
    }
  }

  let second = compile_fixture("diamond", &[("main", "./index.js")]).unwrap();
  assert_eq!(
    module_ids(&first.output),
    module_ids(&second.output)
  );
  assert_eq!(first.output.files, second.output.files);
  for (a, b) in first.output.assets.iter().zip(second.output.assets.iter()) {
    assert_eq!(a.filename, b.filename);
    // Byte-identical asset content across builds.
    assert_eq!(a.content, b.content);
  }
}

#[test]
fn extension_candidates_follow_configured_order() {
  let mut options = input_options("extensions", &[("main", "./index.js")]);
  options.extensions = vec![".cjs".to_string(), ".js".to_string()];

  let fixture =
    compile_fixture_with("extensions", options, OutputOptions::default()).unwrap();
  let output = &fixture.output;

  assert_eq!(module_ids(output), vec!["./index.js", "./util.cjs"]);
  assert!(output.assets[0]
    .content
    .contains("__packup_require__(\"./util.cjs\")"));
}

#[test]
fn loaders_apply_to_matching_modules_last_matched_first() {
  let mut options = input_options("loaders", &[("main", "./index.js")]);
  options.module_rules = vec![
    ModuleRule {
      test: Regex::new(r"\.js$").unwrap(),
      loaders: vec![Arc::new(|source: String| {
        Ok(source.replace("__MESSAGE__", "from-first"))
      })],
    },
    ModuleRule {
      test: Regex::new(r"\.js$").unwrap(),
      loaders: vec![Arc::new(|source: String| {
        Ok(source.replace("__MESSAGE__", "from-second"))
      })],
    },
    // Does not match; would abort the build if it ever ran.
    ModuleRule {
      test: Regex::new(r"\.txt$").unwrap(),
      loaders: vec![Arc::new(|_| anyhow::bail!("txt loader must not run"))],
    },
  ];

  let fixture = compile_fixture_with("loaders", options, OutputOptions::default()).unwrap();
  let content = &fixture.output.assets[0].content;
  assert!(content.contains("from-second"));
  assert!(!content.contains("__MESSAGE__"));
}

#[test]
fn nested_filename_templates_create_parent_directories() {
  let fixture = compile_fixture_with(
    "nested_out",
    input_options("nested_out", &[("main", "./index.js")]),
    OutputOptions {
      file_names: "js/[name].js".into(),
      ..Default::default()
    },
  )
  .unwrap();

  assert_eq!(fixture.output.files, vec!["js/main.js"]);
  assert!(fixture.dist.join("js/main.js").is_file());
}

#[test]
fn empty_input_aborts() {
  let mut bundler = Bundler::new(InputOptions {
    input: vec![],
    root: fixture_root("missing_entry"),
    ..Default::default()
  });
  let err = bundler.run(OutputOptions::default()).unwrap_err();
  assert_eq!(err.code(), "PANIC");
}
