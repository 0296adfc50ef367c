use std::{fmt::Display, path::Path, sync::Arc};

use packup_common::StaticStr;
use swc_core::common::SourceFile;

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn code(&self) -> &'static str {
    self.kind.code()
  }

  pub fn unresolved_entry(unresolved_id: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedEntry {
      unresolved_id: unresolved_id.as_ref().to_path_buf(),
    })
  }

  pub fn duplicate_entry_name(name: impl Into<StaticStr>) -> Self {
    Self::with_kind(ErrorKind::DuplicateEntryName { name: name.into() })
  }

  pub fn unresolved_import(
    specifier: impl Into<StaticStr>,
    importer: Option<&Path>,
    tried: Vec<std::path::PathBuf>,
  ) -> Self {
    Self::with_kind(ErrorKind::UnresolvedImport {
      specifier: specifier.into(),
      importer: importer.map(|p| p.to_path_buf()),
      tried,
    })
  }

  pub fn non_static_require(importer: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::NonStaticRequire {
      importer: importer.as_ref().to_path_buf(),
    })
  }

  pub fn parse_failed(
    source_file: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  ) -> Self {
    Self::with_kind(ErrorKind::ParseFailed {
      source_file,
      source,
    })
  }

  pub fn transform_failed(id: impl AsRef<Path>, source: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::TransformFailed {
      id: id.as_ref().to_path_buf(),
      source,
    })
  }

  pub fn io_error(e: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::IoError(e))
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      ErrorKind::TransformFailed { source, .. } => Some(source.as_ref()),
      ErrorKind::IoError(e) => Some(e),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
