use swc_core::ecma::{
  ast,
  atoms::JsWord,
  visit::{Visit, VisitWith},
};

use crate::{is_require_callee, static_require_arg};

#[derive(Debug, Default)]
pub struct ScanResult {
  /// Raw specifiers of every static `require` call-site, in source order.
  /// Duplicates are kept; the caller dedups at module-identity level.
  pub dependencies: Vec<JsWord>,
  /// A `require` callee whose argument is not a single string literal was
  /// seen. Static analysis cannot follow it, so the caller must abort.
  pub has_non_static_require: bool,
}

/// Pure discovery pass over a module's syntax tree. Does not mutate; the
/// rewrite happens in [`crate::finalize`] once specifiers are resolved.
pub fn scan(ast: &ast::Script) -> ScanResult {
  let mut scanner = Scanner {
    result: ScanResult::default(),
  };
  ast.visit_with(&mut scanner);
  scanner.result
}

struct Scanner {
  result: ScanResult,
}

impl Visit for Scanner {
  fn visit_call_expr(&mut self, node: &ast::CallExpr) {
    if let Some(specifier) = static_require_arg(node) {
      self.result.dependencies.push(specifier.value.clone());
    } else if is_require_callee(&node.callee) {
      self.result.has_non_static_require = true;
    }
    node.visit_children_with(self);
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn parse(code: &str) -> ast::Script {
    let compiler = packup_compiler::Compiler::default();
    let fm = compiler.create_source_file(PathBuf::from("scan_test.js"), code.to_string());
    compiler.parse(fm).unwrap()
  }

  #[test]
  fn collects_specifiers_in_source_order() {
    let ast = parse(
      "const b = require('./b');\nconst a = require('./a');\nfunction f() { return require('./c'); }\n",
    );
    let result = scan(&ast);
    assert!(!result.has_non_static_require);
    assert_eq!(
      result.dependencies,
      vec![
        JsWord::from("./b"),
        JsWord::from("./a"),
        JsWord::from("./c")
      ]
    );
  }

  #[test]
  fn nested_require_arguments_are_discovered() {
    let ast = parse("const merged = require('./outer')(require('./inner'));\n");
    let result = scan(&ast);
    assert_eq!(
      result.dependencies,
      vec![JsWord::from("./outer"), JsWord::from("./inner")]
    );
  }

  #[test]
  fn non_literal_argument_is_flagged() {
    let ast = parse("const name = './impl';\nconst impl = require(name);\n");
    let result = scan(&ast);
    assert!(result.has_non_static_require);
    assert!(result.dependencies.is_empty());
  }

  #[test]
  fn shadowed_member_calls_are_ignored() {
    let ast = parse("ctx.require('./not-an-import');\n");
    let result = scan(&ast);
    assert!(!result.has_non_static_require);
    assert!(result.dependencies.is_empty());
  }
}
