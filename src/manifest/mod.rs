pub mod version_parser;

use std::{fs, io, path::Path};

use toml::{Table, Value};

#[derive(Debug)]
pub enum VersionResolveFailureReason {
  FileNotFound(String),
  ParseError(String),
  KeyMissing(String)
}

impl VersionResolveFailureReason {
  pub fn map_message(
    self,
    mapper: impl FnOnce(String) -> String
  ) -> Self {
    match self {
      Self::FileNotFound(err_message) => Self::FileNotFound(mapper(err_message)),
      Self::ParseError(err_message) => Self::ParseError(mapper(err_message)),
      Self::KeyMissing(err_message) => Self::KeyMissing(mapper(err_message))
    }
  }

  pub fn extract_message(self) -> String {
    match self {
      Self::FileNotFound(msg) => msg,
      Self::ParseError(msg) => msg,
      Self::KeyMissing(msg) => msg
    }
  }
}

type VersionResolveResult<T> = Result<T, VersionResolveFailureReason>;

fn read_manifest_string(manifest_path: &Path) -> VersionResolveResult<String> {
  return fs::read_to_string(manifest_path).map_err(|io_error| {
    let message: String = match io_error.kind() {
      io::ErrorKind::NotFound => format!(
        "No manifest exists at \"{}\"",
        manifest_path.to_string_lossy()
      ),
      _ => format!(
        "Unable to read manifest \"{}\": {}",
        manifest_path.to_string_lossy(),
        io_error
      )
    };

    VersionResolveFailureReason::FileNotFound(message)
  });
}

fn parse_manifest_table(manifest_path: &Path, manifest_contents: &str) -> VersionResolveResult<Table> {
  return manifest_contents.parse::<Table>()
    .map_err(|parse_error| VersionResolveFailureReason::ParseError(format!(
      "Manifest \"{}\" is not valid TOML: {}",
      manifest_path.to_string_lossy(),
      parse_error
    )));
}

fn version_from_table(manifest_path: &Path, manifest_table: &Table) -> VersionResolveResult<String> {
  let package_table: &Table = match manifest_table.get("package") {
    Some(Value::Table(table)) => table,
    Some(_) => return Err(VersionResolveFailureReason::KeyMissing(format!(
      "Manifest \"{}\" has a 'package' key, but it is not a table",
      manifest_path.to_string_lossy()
    ))),
    None => return Err(VersionResolveFailureReason::KeyMissing(format!(
      "Manifest \"{}\" is missing the [package] table",
      manifest_path.to_string_lossy()
    )))
  };

  return match package_table.get("version") {
    Some(Value::String(version)) => Ok(version.clone()),
    Some(other_value) => Err(VersionResolveFailureReason::KeyMissing(format!(
      "Manifest \"{}\" has 'package.version', but it is a {} instead of a string",
      manifest_path.to_string_lossy(),
      other_value.type_str()
    ))),
    None => Err(VersionResolveFailureReason::KeyMissing(format!(
      "Manifest \"{}\" is missing 'package.version'",
      manifest_path.to_string_lossy()
    )))
  }
}

/// Reads the manifest at `manifest_path` and returns its `package.version` string.
/// The file is read once per call. Nothing is cached.
pub fn resolve_version(manifest_path: impl AsRef<Path>) -> VersionResolveResult<String> {
  let manifest_path: &Path = manifest_path.as_ref();
  let manifest_contents: String = read_manifest_string(manifest_path)?;
  let manifest_table: Table = parse_manifest_table(manifest_path, &manifest_contents)?;

  return version_from_table(manifest_path, &manifest_table);
}
