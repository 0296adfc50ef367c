use std::{
  fmt::Display,
  path::{Path, PathBuf},
  sync::Arc,
};

use packup_common::{StaticStr, CWD};
use swc_core::common::SourceFile;

use crate::utils::{format_quoted_strings, PathExt};

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  /// An entry specifier could not be mapped to an existing file.
  UnresolvedEntry {
    unresolved_id: PathBuf,
  },
  /// Two entries were configured under the same name.
  DuplicateEntryName {
    name: StaticStr,
  },
  /// A `require` specifier did not name an existing file under any
  /// configured extension.
  UnresolvedImport {
    specifier: StaticStr,
    importer: Option<PathBuf>,
    tried: Vec<PathBuf>,
  },
  /// A `require` call-site whose argument is not a string literal. The
  /// graph is built by static analysis only, so this aborts the build.
  NonStaticRequire {
    importer: PathBuf,
  },
  ParseFailed {
    source_file: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  },
  /// A configured loader returned an error for this module.
  TransformFailed {
    id: PathBuf,
    source: anyhow::Error,
  },
  /// Unrecoverable failure that has no more precise kind.
  Panic {
    source: anyhow::Error,
  },
  IoError(std::io::Error),
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UnresolvedEntry { unresolved_id } => write!(
        f,
        "Could not resolve entry module \"{}\"",
        unresolved_id.may_display_relative()
      ),
      ErrorKind::DuplicateEntryName { name } => {
        write!(f, "Duplicate entry name \"{name}\"")
      }
      ErrorKind::UnresolvedImport {
        specifier,
        importer,
        tried,
      } => {
        write!(f, "Could not resolve \"{specifier}\"")?;
        if let Some(importer) = importer {
          write!(f, " from \"{}\"", importer.may_display_relative())?;
        }
        if !tried.is_empty() {
          write!(
            f,
            " (tried {})",
            format_quoted_strings(
              &tried
                .iter()
                .map(|p| p.may_display_relative())
                .collect::<Vec<_>>()
            )
          )?;
        }
        Ok(())
      }
      ErrorKind::NonStaticRequire { importer } => write!(
        f,
        "\"{}\" calls require with a non-literal argument, which cannot be bundled statically",
        importer.may_display_relative()
      ),
      ErrorKind::ParseFailed { source_file, .. } => {
        write!(f, "Parse failed: {}", source_file.name)
      }
      ErrorKind::TransformFailed { id, source } => write!(
        f,
        "Loader failed for \"{}\": {source}",
        id.may_display_relative()
      ),
      ErrorKind::Panic { source } => source.fmt(f),
      ErrorKind::IoError(e) => e.fmt(f),
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by making them relative to `cwd`.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnresolvedEntry { .. } => error_code::UNRESOLVED_ENTRY,
      ErrorKind::DuplicateEntryName { .. } => error_code::DUPLICATE_ENTRY_NAME,
      ErrorKind::UnresolvedImport { .. } => error_code::UNRESOLVED_IMPORT,
      ErrorKind::NonStaticRequire { .. } => error_code::NON_STATIC_REQUIRE,
      ErrorKind::ParseFailed { .. } => error_code::PARSE_FAILED,
      ErrorKind::TransformFailed { .. } => error_code::TRANSFORM_FAILED,
      ErrorKind::Panic { .. } => error_code::PANIC,
      ErrorKind::IoError(_) => error_code::IO_ERROR,
    }
  }
}
