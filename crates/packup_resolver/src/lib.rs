use std::path::{Path, PathBuf};

use sugar_path::{AsPath, SugarPathBuf};

/// Maps a `require` specifier plus the importing file to a definite
/// absolute path on disk. Extension-less specifiers are retried with each
/// configured extension, in order. There is no directory/index fallback;
/// the extension candidate list is the configurable surface.
#[derive(Debug)]
pub struct Resolver {
  root: PathBuf,
  extensions: Vec<String>,
}

impl Resolver {
  pub fn new(root: PathBuf, extensions: Vec<String>) -> Self {
    Self { root, extensions }
  }

  pub fn with_root(root: PathBuf) -> Self {
    Self {
      root,
      extensions: vec![".js".to_string()],
    }
  }

  pub fn root(&self) -> &PathBuf {
    &self.root
  }

  /// Resolves `specifier` against the importing file's directory, or the
  /// project root when there is no importer (entry resolution).
  pub fn resolve(
    &self,
    importer: Option<&Path>,
    specifier: &str,
  ) -> packup_error::Result<PathBuf> {
    let base_dir = importer
      .and_then(Path::parent)
      .unwrap_or_else(|| self.root.as_path());

    let requested = if specifier.as_path().is_absolute() {
      specifier.as_path().to_path_buf()
    } else {
      base_dir.join(specifier).into_absolutize()
    };

    if requested.is_file() {
      return Ok(requested);
    }

    let mut tried = vec![requested.clone()];
    for ext in &self.extensions {
      let candidate = append_extension(&requested, ext);
      if candidate.is_file() {
        return Ok(candidate);
      }
      tried.push(candidate);
    }

    Err(packup_error::Error::unresolved_import(
      specifier.to_string(),
      importer,
      tried,
    ))
  }
}

// `PathBuf::set_extension` would replace an existing one; specifiers like
// `./pkg.config` must become `./pkg.config.js`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
  let mut s = path.as_os_str().to_os_string();
  s.push(ext);
  PathBuf::from(s)
}
