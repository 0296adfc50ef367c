use std::path::Path;

use crate::{BuildError, BuildResult, ModuleRule};

/// Applies the configured transform chain to raw module source before any
/// graph analysis. Loaders of every rule whose pattern matches the path are
/// collected in rule order and applied last-matched-first.
pub(crate) fn run_loaders(
  path: &Path,
  source: String,
  rules: &[ModuleRule],
) -> BuildResult<String> {
  let path_str = path.to_string_lossy();
  let matched = rules
    .iter()
    .filter(|rule| rule.test.is_match(&path_str))
    .flat_map(|rule| rule.loaders.iter())
    .collect::<Vec<_>>();

  if !matched.is_empty() {
    tracing::trace!("{} loader(s) matched {}", matched.len(), path.display());
  }

  let mut source = source;
  for loader in matched.into_iter().rev() {
    source = loader.as_ref()(source).map_err(|e| BuildError::transform_failed(path, e))?;
  }
  Ok(source)
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use regex::Regex;

  use super::*;

  fn rule(pattern: &str, loaders: Vec<crate::LoaderFn>) -> ModuleRule {
    ModuleRule {
      test: Regex::new(pattern).unwrap(),
      loaders,
    }
  }

  #[test]
  fn matched_loaders_compose_in_reverse_order() {
    let rules = vec![
      rule(
        r"\.js$",
        vec![
          Arc::new(|s: String| Ok(s + "first")),
          Arc::new(|s: String| Ok(s + "second")),
        ],
      ),
      rule(r"\.js$", vec![Arc::new(|s: String| Ok(s + "third"))]),
    ];
    let out = run_loaders(Path::new("/proj/a.js"), String::new(), &rules).unwrap();
    // Last matched runs first.
    assert_eq!(out, "thirdsecondfirst");
  }

  #[test]
  fn non_matching_rules_are_skipped() {
    let rules = vec![rule(r"\.txt$", vec![Arc::new(|_| Ok("replaced".to_string()))])];
    let out = run_loaders(Path::new("/proj/a.js"), "kept".to_string(), &rules).unwrap();
    assert_eq!(out, "kept");
  }

  #[test]
  fn loader_failure_is_a_transform_error() {
    let rules = vec![rule(
      r"\.js$",
      vec![Arc::new(|_| anyhow::bail!("bad input"))],
    )];
    let err = run_loaders(Path::new("/proj/a.js"), String::new(), &rules).unwrap_err();
    assert!(matches!(
      err.kind,
      packup_error::ErrorKind::TransformFailed { .. }
    ));
  }
}
