use std::process::exit;
use colored::Colorize;

pub fn warn(message: impl AsRef<str>) {
  eprintln!(
    "{}: {}",
    "Warning".yellow(),
    message.as_ref()
  );
}

pub fn success(message: impl AsRef<str>) {
  println!("{}", message.as_ref().green());
}

// Docs builds treat any non-zero exit as a failed build.
pub fn exit_error_log(error_message: impl AsRef<str>) -> ! {
  eprintln!("{}: {}", "Error".red(), error_message.as_ref());
  exit(1);
}
