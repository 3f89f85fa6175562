use clap::{Args, Parser, Subcommand};

pub const DEFAULT_MANIFEST_PATH: &'static str = "../Cargo.toml";

#[derive(Parser)]
#[command(name = "docs-conf", version, author = "Pcodec devs")]
#[command(about = "Resolves the crate version and Sphinx configuration for the pcodec docs")]
pub struct Opts {
  /// Manifest to read 'package.version' from, relative to the docs directory.
  #[arg(long, global = true, default_value = DEFAULT_MANIFEST_PATH)]
  pub manifest_path: String,

  /// YAML file overriding the static Sphinx settings (project, author, html_theme, ...).
  #[arg(long, global = true)]
  pub config: Option<String>,

  #[command(subcommand)]
  pub subcommand: SubCommandStruct
}

#[derive(Subcommand)]
pub enum SubCommandStruct {
  /// Print the resolved release version.
  Version,

  /// Print the full resolved docs configuration as YAML.
  Show,

  /// Generate a Sphinx conf.py from the resolved configuration.
  GenConf(GenConfCommand)
}

#[derive(Args)]
pub struct GenConfCommand {
  /// Output file. Use '-' to print to stdout.
  #[arg(default_value = "conf.py")]
  pub output: String,

  /// Overwrite the output file without asking.
  #[arg(long, short = 'f')]
  pub force: bool
}

#[test]
fn test_cli_parses() {
  let opts: Opts = Opts::try_parse_from(["docs-conf", "gen-conf", "-", "--manifest-path", "Cargo.toml"]).unwrap();

  assert_eq!(opts.manifest_path, "Cargo.toml");
  assert!(opts.config.is_none());

  match opts.subcommand {
    SubCommandStruct::GenConf(command) => {
      assert_eq!(command.output, "-");
      assert!(!command.force);
    },
    _ => panic!("Expected the gen-conf subcommand")
  }
}

#[test]
fn test_cli_defaults_manifest_path() {
  let opts: Opts = Opts::try_parse_from(["docs-conf", "version"]).unwrap();

  assert_eq!(opts.manifest_path, DEFAULT_MANIFEST_PATH);
  assert!(matches!(opts.subcommand, SubCommandStruct::Version));
}

#[test]
fn test_cli_debug_asserts() {
  use clap::CommandFactory;
  Opts::command().debug_assert();
}
