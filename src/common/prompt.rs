use std::io::{self, stdin, Write};

#[derive(Debug, PartialEq)]
pub enum PromptResult {
  Yes,
  No,
  Custom(String),
  Empty
}

impl PromptResult {
  pub fn is_yes_or_no(&self) -> bool {
    return match *self {
      Self::Yes | Self::No => true,
      _ => false
    }
  }

  pub fn from_str(string: &str) -> PromptResult {
    match string.trim() {
      "" => PromptResult::Empty,
      "y" | "Y" => PromptResult::Yes,
      "n" | "N" => PromptResult::No,
      custom_value => PromptResult::Custom(custom_value.to_string())
    }
  }
}

fn read_prompt_result(prompt: &str, buffer: &mut String) -> io::Result<PromptResult> {
  buffer.clear();

  print!("{}", prompt);
  io::stdout().flush()?;

  if stdin().read_line(buffer)? == 0 {
    return Err(io::Error::new(
      io::ErrorKind::UnexpectedEof,
      "Standard input closed before an answer was given"
    ));
  }

  return Ok(PromptResult::from_str(buffer.as_str()));
}

pub fn prompt_until<T>(prompt: &str, predicate: T) -> io::Result<PromptResult>
  where T: Fn(&PromptResult) -> bool
{
  let mut buffer = String::new();
  let mut result: PromptResult = read_prompt_result(prompt, &mut buffer)?;

  while !predicate(&result) {
    result = read_prompt_result(prompt, &mut buffer)?;
  }

  return Ok(result)
}

pub fn prompt_until_boolean(prompt: &str) -> io::Result<bool> {
  prompt_until(&format!("{} (y/n): ", prompt), |result| result.is_yes_or_no())
    .map(|prompt_result_enum| match prompt_result_enum {
      PromptResult::Yes => true,
      PromptResult::No => false,
      _ => unreachable!()
    })
}

#[test]
fn test_prompt_result_from_str() {
  assert_eq!(PromptResult::from_str("  y\n"), PromptResult::Yes);
  assert_eq!(PromptResult::from_str("N"), PromptResult::No);
  assert_eq!(PromptResult::from_str("\n"), PromptResult::Empty);
  assert_eq!(PromptResult::from_str("maybe"), PromptResult::Custom("maybe".to_owned()));
  assert!(!PromptResult::from_str("maybe").is_yes_or_no());
}
