use itertools::Itertools;

/// Name of the in-bundle import function every rewritten call-site targets.
pub const RUNTIME_REQUIRE: &str = "__packup_require__";

/// Renders one chunk into a self-executing bundle: the module map (one
/// wrapper function per module, keyed by canonical id), the fixed loader
/// shim, and a trailer that requires the entry module.
pub fn render_chunk<'a>(
  entry_id: &str,
  modules: impl Iterator<Item = (&'a str, &'a str)>,
) -> String {
  let wrappers = modules
    .map(|(id, code)| {
      format!(
        "    {id}: (function(module, exports, {RUNTIME_REQUIRE}) {{\n{code}    }}),",
        id = quote(id),
      )
    })
    .join("\n");

  format!(
    "(function() {{\n  var __packup_modules__ = {{\n{wrappers}\n  }};\n{loader}  {RUNTIME_REQUIRE}({entry});\n}})();\n",
    loader = include_str!("./snippets/_loader.js"),
    entry = quote(entry_id),
  )
}

// Canonical ids are `/`-separated relative paths, but quoting handles the
// general case so unusual file names cannot break the emitted source.
fn quote(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      _ => out.push(c),
    }
  }
  out.push('"');
  out
}

#[test]
fn test() {
  let rendered = render_chunk(
    "./src/index.js",
    vec![
      ("./src/index.js", "console.log(1);\n"),
      ("./src/util.js", "module.exports = 1;\n"),
    ]
    .into_iter(),
  );
  assert!(rendered.starts_with("(function() {"));
  assert!(rendered.contains("\"./src/index.js\": (function(module, exports, __packup_require__) {"));
  assert!(rendered.contains("\"./src/util.js\": (function(module, exports, __packup_require__) {"));
  assert!(rendered.contains("__packup_require__(\"./src/index.js\");"));
  assert!(rendered.ends_with("})();\n"));
}
