use std::path::PathBuf;

use self::clap_cli_config::{Opts, SubCommandStruct, GenConfCommand};
pub mod clap_cli_config;

pub enum CLIOutputTarget {
  Stdout,
  File(PathBuf)
}

pub enum CLIAction {
  PrintVersion,
  PrintConfig,
  GenerateConfPy {
    output: CLIOutputTarget,
    force_overwrite: bool
  }
}

pub struct CLIRunInfo {
  pub manifest_path: PathBuf,
  pub overrides_path: Option<PathBuf>,
  pub action: CLIAction
}

impl From<Opts> for CLIRunInfo {
  fn from(opts: Opts) -> Self {
    let action: CLIAction = match opts.subcommand {
      SubCommandStruct::Version => CLIAction::PrintVersion,
      SubCommandStruct::Show => CLIAction::PrintConfig,
      SubCommandStruct::GenConf(GenConfCommand { output, force }) => CLIAction::GenerateConfPy {
        output: if output == "-"
          { CLIOutputTarget::Stdout }
          else { CLIOutputTarget::File(PathBuf::from(output)) },
        force_overwrite: force
      }
    };

    return CLIRunInfo {
      manifest_path: PathBuf::from(opts.manifest_path),
      overrides_path: opts.config.map(PathBuf::from),
      action
    }
  }
}
