use std::{env, fs::File, io::{self, Write}, path::{Path, PathBuf}};

use colored::Colorize;

use crate::{
  cli_config::{CLIAction, CLIOutputTarget, CLIRunInfo},
  common::prompt::prompt_until_boolean,
  docs_config::{sphinx::render_conf_py, DocsConfig, DocsConfigLoadFailureReason},
  logger,
  manifest::{resolve_version, VersionResolveFailureReason}
};

fn display_path(a_path: &Path) -> String {
  let full_path: PathBuf = if a_path.is_absolute() {
    a_path.to_path_buf()
  }
  else {
    match env::current_dir() {
      Ok(cwd) => cwd.join(a_path),
      Err(_) => a_path.to_path_buf()
    }
  };

  return full_path.to_string_lossy().to_string();
}

fn version_failure_message(
  manifest_path: &Path,
  failure_reason: VersionResolveFailureReason
) -> String {
  return failure_reason
    .map_message(|err_message| format!(
      "When resolving the docs version using manifest '{}':\n{}",
      display_path(manifest_path),
      err_message
    ))
    .extract_message();
}

fn load_docs_config(run_info: &CLIRunInfo) -> Result<DocsConfig, String> {
  return DocsConfig::load(&run_info.manifest_path, run_info.overrides_path.as_deref())
    .map_err(|failure_reason| match failure_reason {
      DocsConfigLoadFailureReason::Version(version_failure) =>
        version_failure_message(&run_info.manifest_path, version_failure),
      other => other.extract_message()
    });
}

fn write_output(out: &mut impl Write, text: &str) -> Result<(), String> {
  return out.write_all(text.as_bytes())
    .and_then(|_| out.flush())
    .map_err(|io_error| format!("Failed to write output: {}", io_error));
}

pub fn print_version(manifest_path: &Path, out: &mut impl Write) -> Result<(), String> {
  let version: String = resolve_version(manifest_path)
    .map_err(|failure_reason| version_failure_message(manifest_path, failure_reason))?;

  return write_output(out, &format!("{}\n", version));
}

pub fn print_config(run_info: &CLIRunInfo, out: &mut impl Write) -> Result<(), String> {
  let docs_config: DocsConfig = load_docs_config(run_info)?;

  let config_yaml: String = serde_yaml::to_string(&docs_config)
    .map_err(|error| format!("Failed to serialize the docs config: {}", error))?;

  return write_output(out, &config_yaml);
}

fn write_conf_py_file(output_path: &Path, contents: &str) -> io::Result<()> {
  let mut conf_file: File = File::create(output_path)?;
  conf_file.write_all(contents.as_bytes())?;
  return conf_file.flush();
}

pub fn confirm_overwrite_by_prompt(output_path: &Path) -> io::Result<bool> {
  return prompt_until_boolean(&format!(
    "{} already exists. Do you want to overwrite it?",
    output_path.to_string_lossy().yellow()
  ));
}

// Only asks when there is something to overwrite and --force wasn't given.
fn should_write_output(
  output_path: &Path,
  force_overwrite: bool,
  confirm_overwrite: impl FnOnce(&Path) -> io::Result<bool>
) -> Result<bool, String> {
  if force_overwrite || !output_path.exists() {
    return Ok(true);
  }

  return confirm_overwrite(output_path)
    .map_err(|io_error| format!("Failed to read overwrite confirmation: {}", io_error));
}

pub fn generate_conf_py(
  run_info: &CLIRunInfo,
  output: &CLIOutputTarget,
  force_overwrite: bool,
  out: &mut impl Write,
  confirm_overwrite: impl FnOnce(&Path) -> io::Result<bool>
) -> Result<(), String> {
  let docs_config: DocsConfig = load_docs_config(run_info)?;
  let conf_py_contents: String = render_conf_py(&docs_config);

  let output_path: &Path = match output {
    CLIOutputTarget::Stdout => return write_output(out, &conf_py_contents),
    CLIOutputTarget::File(output_path) => output_path.as_path()
  };

  if !should_write_output(output_path, force_overwrite, confirm_overwrite)? {
    return write_output(out, &format!("Skipping {} generation.\n", output_path.to_string_lossy()));
  }

  write_conf_py_file(output_path, &conf_py_contents)
    .map_err(|io_error| format!(
      "Failed to write '{}': {}",
      display_path(output_path),
      io_error
    ))?;

  logger::success(format!(
    "{} generated for version {}",
    output_path.to_string_lossy(),
    docs_config.version
  ));
  Ok(())
}

pub fn run_action(
  run_info: &CLIRunInfo,
  out: &mut impl Write,
  confirm_overwrite: impl FnOnce(&Path) -> io::Result<bool>
) -> Result<(), String> {
  return match &run_info.action {
    CLIAction::PrintVersion => print_version(&run_info.manifest_path, out),
    CLIAction::PrintConfig => print_config(run_info, out),
    CLIAction::GenerateConfPy { output, force_overwrite } =>
      generate_conf_py(run_info, output, *force_overwrite, out, confirm_overwrite)
  }
}

#[cfg(test)]
mod tests {
  use std::{fs, io, path::{Path, PathBuf}};

  use tempfile::TempDir;

  use crate::cli_config::{CLIAction, CLIOutputTarget, CLIRunInfo};
  use super::{run_action, should_write_output};

  fn never_confirm(_: &Path) -> io::Result<bool> {
    panic!("No overwrite confirmation should be requested");
  }

  // Returns (result, captured output).
  fn run_captured(
    run_info: &CLIRunInfo,
    confirm_overwrite: impl FnOnce(&Path) -> io::Result<bool>
  ) -> (Result<(), String>, String) {
    let mut out: Vec<u8> = Vec::new();
    let result = run_action(run_info, &mut out, confirm_overwrite);
    return (result, String::from_utf8(out).unwrap());
  }

  fn run_info_for(dir: &TempDir, action: CLIAction) -> CLIRunInfo {
    return CLIRunInfo {
      manifest_path: dir.path().join("Cargo.toml"),
      overrides_path: None,
      action
    }
  }

  #[test]
  fn gen_conf_writes_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.4.7\"\n").unwrap();
    let output_path: PathBuf = dir.path().join("conf.py");

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::File(output_path.clone()),
      force_overwrite: false
    });

    run_captured(&run_info, never_confirm).0.unwrap();

    let written: String = fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("version = '0.4.7'"));
  }

  #[test]
  fn gen_conf_force_overwrites_without_prompt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.5.0\"\n").unwrap();
    let output_path: PathBuf = dir.path().join("conf.py");
    fs::write(&output_path, "# stale\n").unwrap();

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::File(output_path.clone()),
      force_overwrite: true
    });

    run_captured(&run_info, never_confirm).0.unwrap();

    let written: String = fs::read_to_string(&output_path).unwrap();
    assert!(!written.contains("# stale"));
    assert!(written.contains("version = '0.5.0'"));
  }

  #[test]
  fn gen_conf_fails_without_writing_on_bad_manifest() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.5.0\n").unwrap();
    let output_path: PathBuf = dir.path().join("conf.py");

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::File(output_path.clone()),
      force_overwrite: true
    });

    let err_message: String = run_captured(&run_info, never_confirm).0.unwrap_err();
    assert!(err_message.contains("When resolving the docs version"));
    assert!(!output_path.exists());
  }

  #[test]
  fn print_version_reports_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let run_info = run_info_for(&dir, CLIAction::PrintVersion);

    let err_message: String = run_captured(&run_info, never_confirm).0.unwrap_err();
    assert!(err_message.contains("No manifest exists"));
  }

  #[test]
  fn print_version_writes_only_the_version() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.4.7\"\n").unwrap();

    let (result, output) = run_captured(&run_info_for(&dir, CLIAction::PrintVersion), never_confirm);

    result.unwrap();
    assert_eq!(output, "0.4.7\n");
  }

  #[test]
  fn show_emits_yaml_matching_the_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.4.7\"\n").unwrap();
    let overrides_path: PathBuf = dir.path().join("docs_config.yaml");
    fs::write(&overrides_path, "html_theme: furo\n").unwrap();

    let mut run_info = run_info_for(&dir, CLIAction::PrintConfig);
    run_info.overrides_path = Some(overrides_path);

    let (result, output) = run_captured(&run_info, never_confirm);
    result.unwrap();

    let shown: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(shown["version"].as_str(), Some("0.4.7"));
    assert_eq!(shown["project"].as_str(), Some("Pcodec"));
    assert_eq!(shown["html_theme"].as_str(), Some("furo"));

    let extensions: Vec<&str> = shown["extensions"].as_sequence().unwrap()
      .iter()
      .map(|extension| extension.as_str().unwrap())
      .collect();
    assert_eq!(extensions, vec!["sphinx.ext.autodoc", "sphinx.ext.viewcode"]);
  }

  #[test]
  fn gen_conf_dash_writes_to_output_and_creates_no_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.4.7\"\n").unwrap();

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::Stdout,
      force_overwrite: false
    });

    let (result, output) = run_captured(&run_info, never_confirm);
    result.unwrap();

    assert!(output.contains("version = '0.4.7'\n"));
    assert!(output.contains("html_theme = 'alabaster'\n"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
  }

  #[test]
  fn gen_conf_declined_overwrite_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.5.0\"\n").unwrap();
    let output_path: PathBuf = dir.path().join("conf.py");
    fs::write(&output_path, "# hand edited\n").unwrap();

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::File(output_path.clone()),
      force_overwrite: false
    });

    let mut asked_about: Option<PathBuf> = None;
    let (result, output) = run_captured(&run_info, |existing_path| {
      asked_about = Some(existing_path.to_path_buf());
      Ok(false)
    });
    result.unwrap();

    assert_eq!(asked_about, Some(output_path.clone()));
    assert!(output.starts_with("Skipping "));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "# hand edited\n");
  }

  #[test]
  fn gen_conf_accepted_overwrite_replaces_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.5.0\"\n").unwrap();
    let output_path: PathBuf = dir.path().join("conf.py");
    fs::write(&output_path, "# stale\n").unwrap();

    let run_info = run_info_for(&dir, CLIAction::GenerateConfPy {
      output: CLIOutputTarget::File(output_path.clone()),
      force_overwrite: false
    });

    run_captured(&run_info, |_| Ok(true)).0.unwrap();

    assert!(fs::read_to_string(&output_path).unwrap().contains("version = '0.5.0'"));
  }

  #[test]
  fn overwrite_decision() {
    let dir = TempDir::new().unwrap();
    let missing_path: PathBuf = dir.path().join("conf.py");
    let existing_path: PathBuf = dir.path().join("existing.py");
    fs::write(&existing_path, "").unwrap();

    assert_eq!(should_write_output(&missing_path, false, never_confirm), Ok(true));
    assert_eq!(should_write_output(&existing_path, true, never_confirm), Ok(true));
    assert_eq!(should_write_output(&existing_path, false, |_| Ok(false)), Ok(false));
    assert_eq!(should_write_output(&existing_path, false, |_| Ok(true)), Ok(true));

    let failed_prompt = should_write_output(&existing_path, false, |_| {
      Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    });
    assert!(failed_prompt.unwrap_err().contains("stdin closed"));
  }
}
