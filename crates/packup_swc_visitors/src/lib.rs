use swc_core::ecma::ast;

mod scan;
pub use scan::*;
mod finalize;
pub use finalize::*;

/// If `call` is a `require(...)` call-site with a single static string
/// argument, returns the literal. `Some` only for call-sites the bundler can
/// rewrite; a `require` callee with any other argument shape is reported by
/// the scan pass as non-static.
fn static_require_arg(call: &ast::CallExpr) -> Option<&ast::Str> {
  if !is_require_callee(&call.callee) {
    return None;
  }
  match call.args.first() {
    Some(ast::ExprOrSpread { spread: None, expr }) => match &**expr {
      ast::Expr::Lit(ast::Lit::Str(s)) => Some(s),
      _ => None,
    },
    _ => None,
  }
}

fn is_require_callee(callee: &ast::Callee) -> bool {
  match callee {
    ast::Callee::Expr(expr) => {
      matches!(&**expr, ast::Expr::Ident(ident) if ident.sym.as_ref() == "require")
    }
    _ => false,
  }
}
