use packup_common::ModuleId;
use rustc_hash::FxHashMap;
use swc_core::ecma::{
  ast,
  atoms::JsWord,
  visit::{VisitMut, VisitMutWith},
};

use crate::static_require_arg;

/// Specifier-to-identity mapping produced by resolving a module's scanned
/// dependencies against the importing file's directory.
pub type ResolvedRequests = FxHashMap<JsWord, ModuleId>;

/// Rewrites every resolved `require("<specifier>")` call-site in place to
/// `<runtime_require>("<canonical id>")`, so the emitted bundle needs no
/// filesystem-aware resolution at runtime.
pub fn finalize(ast: &mut ast::Script, resolved_ids: &ResolvedRequests, runtime_require: &str) {
  let mut finalizer = Finalizer {
    resolved_ids,
    runtime_require: runtime_require.into(),
  };
  ast.visit_mut_with(&mut finalizer);
}

struct Finalizer<'a> {
  resolved_ids: &'a ResolvedRequests,
  runtime_require: JsWord,
}

impl VisitMut for Finalizer<'_> {
  fn visit_mut_call_expr(&mut self, node: &mut ast::CallExpr) {
    node.visit_mut_children_with(self);

    let resolved = match static_require_arg(node) {
      Some(arg) => match self.resolved_ids.get(&arg.value) {
        Some(id) => (arg.span, id.id().clone()),
        None => return,
      },
      None => return,
    };
    let (arg_span, module_id) = resolved;

    if let ast::Callee::Expr(callee) = &mut node.callee {
      let span = match &**callee {
        ast::Expr::Ident(ident) => ident.span,
        _ => return,
      };
      **callee = ast::Expr::Ident(ast::Ident::new(self.runtime_require.clone(), span));
    }
    // The original specifier is discarded; extra arguments too.
    node.args = vec![ast::ExprOrSpread {
      spread: None,
      expr: Box::new(ast::Expr::Lit(ast::Lit::Str(ast::Str {
        span: arg_span,
        value: module_id,
        raw: None,
      }))),
    }];
  }
}
