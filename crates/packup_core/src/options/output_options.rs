use std::path::PathBuf;

#[derive(Debug)]
pub struct OutputOptions {
  /// Output directory, created (recursively) before the first write.
  pub dir: PathBuf,
  pub file_names: FileNameTemplate,
}

impl Default for OutputOptions {
  fn default() -> Self {
    Self {
      dir: PathBuf::from("dist"),
      file_names: FileNameTemplate::from("[name].js"),
    }
  }
}

#[derive(Debug)]
pub struct FileNameTemplate {
  template: String,
}

impl FileNameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn render(&self, name: &str) -> String {
    self.template.replace("[name]", name)
  }
}

impl From<String> for FileNameTemplate {
  fn from(template: String) -> Self {
    Self { template }
  }
}

impl From<&str> for FileNameTemplate {
  fn from(template: &str) -> Self {
    Self {
      template: template.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn substitutes_every_name_placeholder() {
    let template = FileNameTemplate::from("[name]/[name].bundle.js");
    assert_eq!(template.render("main"), "main/main.bundle.js");
  }

  #[test]
  fn templates_without_placeholder_render_verbatim() {
    let template = FileNameTemplate::from("out.js");
    assert_eq!(template.render("main"), "out.js");
  }
}
