use std::borrow::Cow;
use std::path::Path;

use packup_common::CWD;
use sugar_path::SugarPath;

pub fn format_quoted_strings(list: &[impl AsRef<str>]) -> String {
  debug_assert!(!list.is_empty());
  let mut quoted_list = list
    .iter()
    .map(|item| format!("\"{}\"", item.as_ref()))
    .collect::<Vec<_>>();
  if quoted_list.len() == 1 {
    quoted_list.into_iter().next().unwrap()
  } else {
    let last_item = quoted_list.pop().unwrap();
    format!("{} and {}", quoted_list.join(", "), last_item)
  }
}

pub trait PathExt {
  fn may_display_relative(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn may_display_relative(&self) -> Cow<str> {
    let path = if CWD.is_set() && self.is_absolute() {
      CWD.with(|cwd| self.relative(cwd))
    } else {
      return self.to_string_lossy();
    };
    Cow::Owned(path.display().to_string())
  }
}
