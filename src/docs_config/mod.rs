pub mod sphinx;

use std::{fs, path::Path};

use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::{logger, manifest::{resolve_version, version_parser::parse_version, VersionResolveFailureReason}};

/// Every value the Sphinx build reads from conf.py. Only `version` is computed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DocsConfig {
  pub project: String,
  pub copyright: String,
  pub author: String,
  pub version: String,
  pub extensions: Vec<String>,
  pub templates_path: Vec<String>,
  pub exclude_patterns: Vec<String>,
  pub html_theme: String,
  pub html_static_path: Vec<String>
}

/// Optional replacements for the static fields, read from a YAML file.
/// `version` is not accepted here. It always comes from the manifest.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfigOverrides {
  pub project: Option<String>,
  pub copyright: Option<String>,
  pub author: Option<String>,
  pub extensions: Option<Vec<String>>,
  pub templates_path: Option<Vec<String>>,
  pub exclude_patterns: Option<Vec<String>>,
  pub html_theme: Option<String>,
  pub html_static_path: Option<Vec<String>>
}

#[derive(Debug)]
pub enum DocsConfigLoadFailureReason {
  Version(VersionResolveFailureReason),
  OverridesFileNotFound(String),
  InvalidOverrides(String)
}

impl DocsConfigLoadFailureReason {
  pub fn extract_message(self) -> String {
    match self {
      Self::Version(version_failure) => version_failure.extract_message(),
      Self::OverridesFileNotFound(msg) => msg,
      Self::InvalidOverrides(msg) => msg
    }
  }
}

impl From<VersionResolveFailureReason> for DocsConfigLoadFailureReason {
  fn from(version_failure: VersionResolveFailureReason) -> Self {
    Self::Version(version_failure)
  }
}

fn owned_list(items: &[&str]) -> Vec<String> {
  return items.iter()
    .map(|item| item.to_string())
    .collect();
}

impl DocsConfig {
  pub fn with_version(version: String) -> Self {
    return DocsConfig {
      project: "Pcodec".to_owned(),
      copyright: "2025, Pcodec devs".to_owned(),
      author: "Pcodec devs".to_owned(),
      version,
      extensions: owned_list(&["sphinx.ext.autodoc", "sphinx.ext.viewcode"]),
      templates_path: owned_list(&["_templates"]),
      exclude_patterns: owned_list(&["_build", "Thumbs.db", ".DS_Store"]),
      html_theme: "alabaster".to_owned(),
      html_static_path: owned_list(&["_static"])
    }
  }

  pub fn apply_overrides(&mut self, overrides: DocsConfigOverrides) {
    let DocsConfigOverrides {
      project,
      copyright,
      author,
      extensions,
      templates_path,
      exclude_patterns,
      html_theme,
      html_static_path
    } = overrides;

    if let Some(project) = project { self.project = project; }
    if let Some(copyright) = copyright { self.copyright = copyright; }
    if let Some(author) = author { self.author = author; }
    if let Some(extensions) = extensions { self.extensions = extensions; }
    if let Some(templates_path) = templates_path { self.templates_path = templates_path; }
    if let Some(exclude_patterns) = exclude_patterns { self.exclude_patterns = exclude_patterns; }
    if let Some(html_theme) = html_theme { self.html_theme = html_theme; }
    if let Some(html_static_path) = html_static_path { self.html_static_path = html_static_path; }
  }

  pub fn load(
    manifest_path: &Path,
    overrides_path: Option<&Path>
  ) -> Result<Self, DocsConfigLoadFailureReason> {
    return Self::load_reporting_warnings(manifest_path, overrides_path, |warning| logger::warn(warning));
  }

  /// Same as `load`, but non-fatal problems are handed to `on_warning`.
  /// Warnings are only reported once the whole config has loaded.
  pub fn load_reporting_warnings(
    manifest_path: &Path,
    overrides_path: Option<&Path>,
    mut on_warning: impl FnMut(String)
  ) -> Result<Self, DocsConfigLoadFailureReason> {
    let version: String = resolve_version(manifest_path)?;
    let mut docs_config: DocsConfig = DocsConfig::with_version(version);

    if let Some(overrides_path) = overrides_path {
      docs_config.apply_overrides(load_overrides(overrides_path)?);
    }

    if parse_version(&docs_config.version).is_none() {
      on_warning(format!(
        "Version \"{}\" from {} is not in MAJOR.MINOR.PATCH form",
        docs_config.version.yellow(),
        manifest_path.to_string_lossy().cyan()
      ));
    }

    return Ok(docs_config);
  }
}

pub fn load_overrides(overrides_path: &Path) -> Result<DocsConfigOverrides, DocsConfigLoadFailureReason> {
  let overrides_yaml_string: String = fs::read_to_string(overrides_path)
    .map_err(|io_error| DocsConfigLoadFailureReason::OverridesFileNotFound(format!(
      "Unable to read docs config overrides \"{}\": {}",
      overrides_path.to_string_lossy(),
      io_error
    )))?;

  // An empty file deserializes to null rather than an empty map.
  if overrides_yaml_string.trim().is_empty() {
    return Ok(DocsConfigOverrides::default());
  }

  return serde_yaml::from_str::<DocsConfigOverrides>(&overrides_yaml_string)
    .map_err(|error| DocsConfigLoadFailureReason::InvalidOverrides(format!(
      "Docs config overrides \"{}\" are invalid: {}",
      overrides_path.to_string_lossy(),
      error
    )));
}
