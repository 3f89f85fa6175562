mod cli_config;
mod common;
mod docs_config;
mod logger;
mod manifest;
mod program_actions;

use std::io;

use clap::Parser;

use cli_config::{clap_cli_config::Opts, CLIRunInfo};
use logger::exit_error_log;
use program_actions::{confirm_overwrite_by_prompt, run_action};

fn main() {
  let run_info: CLIRunInfo = CLIRunInfo::from(Opts::parse());

  if let Err(err_message) = run_action(&run_info, &mut io::stdout(), confirm_overwrite_by_prompt) {
    exit_error_log(err_message);
  }
}
