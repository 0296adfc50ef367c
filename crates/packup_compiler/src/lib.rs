use std::{path::PathBuf, sync::Arc};

use ast::EsVersion;
use swc_common::{
  errors::{ColorConfig, Handler},
  FileName, SourceMap,
};
use swc_core::{
  common::{self as swc_common, SourceFile},
  ecma::{
    ast, codegen as swc_ecma_codegen,
    parser::{self as swc_ecma_parser, PResult},
  },
};
use swc_ecma_codegen::text_writer::JsWriter;
use swc_ecma_parser::{lexer::Lexer, EsConfig, Parser, StringInput, Syntax};

/// The parse/print service the graph builder treats as a black box: source
/// text in, syntax tree out, and back again.
#[derive(Default)]
pub struct Compiler {
  pub cm: Arc<SourceMap>,
}

impl Compiler {
  pub fn with_cm(cm: Arc<SourceMap>) -> Self {
    Self { cm }
  }

  pub fn create_source_file(&self, filename: PathBuf, code: String) -> Arc<SourceFile> {
    self.cm.new_source_file(FileName::Real(filename), code)
  }

  /// Modules use `require`-style imports, so the input is parsed as a plain
  /// script, not as an ES module.
  pub fn parse(&self, source_file: Arc<SourceFile>) -> PResult<ast::Script> {
    let handler = Handler::with_tty_emitter(ColorConfig::Auto, true, false, Some(self.cm.clone()));

    let lexer = Lexer::new(
      Syntax::Es(EsConfig::default()),
      EsVersion::latest(),
      StringInput::from(source_file.as_ref()),
      None,
    );
    let mut parser = Parser::new_from(lexer);
    parser.take_errors().into_iter().for_each(|e| {
      e.into_diagnostic(&handler).emit();
    });
    parser.parse_script()
  }

  pub fn print(&self, ast: &ast::Script) -> anyhow::Result<String> {
    let mut output = Vec::new();

    let mut emitter = swc_ecma_codegen::Emitter {
      cfg: swc_ecma_codegen::Config {
        ..Default::default()
      },
      cm: self.cm.clone(),
      comments: None,
      wr: Box::new(JsWriter::new(self.cm.clone(), "\n", &mut output, None)),
    };

    emitter.emit_script(ast)?;
    String::from_utf8(output).map_err(Into::into)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_and_print_round_trip() {
    let compiler = Compiler::default();
    let fm = compiler.create_source_file(
      PathBuf::from("round_trip.js"),
      "const util = require(\"./util\");\nconsole.log(util);\n".to_string(),
    );
    let ast = compiler.parse(fm).unwrap();
    let code = compiler.print(&ast).unwrap();
    assert!(code.contains("require(\"./util\")"));
    assert!(code.contains("console.log(util)"));
  }
}
