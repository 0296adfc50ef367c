use std::borrow::Cow;
use std::fmt::Display;
use std::path::PathBuf;

use swc_core::ecma::atoms::JsWord;

// The project root of the running build. Error messages render absolute
// paths relative to it, so they stay stable across machines.
scoped_tls::scoped_thread_local!(pub static CWD: PathBuf);

/// Identity of a chunk. One chunk per entry, so this is the entry name.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct ChunkId(JsWord);

impl ChunkId {
  pub fn new(value: impl Into<JsWord>) -> Self {
    Self(value.into())
  }

  pub fn value(&self) -> &JsWord {
    &self.0
  }
}

impl From<JsWord> for ChunkId {
  fn from(value: JsWord) -> Self {
    Self(value)
  }
}

impl From<String> for ChunkId {
  fn from(value: String) -> Self {
    Self(value.into())
  }
}

impl From<&str> for ChunkId {
  fn from(value: &str) -> Self {
    Self(value.into())
  }
}

impl AsRef<str> for ChunkId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Display for ChunkId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Canonical identity of a module: its path relative to the project root,
/// `./`-prefixed and `/`-separated, e.g. `./src/util.js`. Two requests that
/// land on the same file compare equal by this string alone.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct ModuleId(JsWord);

impl ModuleId {
  pub fn new(value: impl Into<JsWord>) -> Self {
    Self(value.into())
  }

  pub fn id(&self) -> &JsWord {
    &self.0
  }
}

impl Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

pub type StaticStr = Cow<'static, str>;
