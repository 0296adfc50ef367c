use std::path::{Component, Path};

use packup_common::ModuleId;
use sugar_path::SugarPath;

/// Computes the canonical id of `path`: its position relative to `root`,
/// `./`-prefixed and `/`-separated regardless of host platform. This string
/// is the module's sole identity.
pub fn module_id_from_path(path: &Path, root: &Path) -> ModuleId {
  let relative = path.relative(root);
  let mut id = String::from(".");
  for component in relative.components() {
    match component {
      Component::Normal(part) => {
        id.push('/');
        id.push_str(&part.to_string_lossy());
      }
      Component::ParentDir => id.push_str("/.."),
      Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
    }
  }
  ModuleId::new(id)
}
