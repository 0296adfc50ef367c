use std::path::PathBuf;

use packup_core::{Bundler, InputItem, InputOptions, OutputOptions};

fn main() {
  let root = PathBuf::from(&std::env::var("CARGO_MANIFEST_DIR").unwrap());
  let fixture_path = root.join("tests/fixtures/basic");
  let dist_dir = root.join("examples/dist");

  let mut bundler = Bundler::new(InputOptions {
    input: vec![InputItem::new("main", "./src/index.js")],
    root: fixture_path,
    ..Default::default()
  });

  let output = bundler
    .run(OutputOptions {
      dir: dist_dir,
      ..Default::default()
    })
    .unwrap();

  println!("files {:#?}", output.files)
}
