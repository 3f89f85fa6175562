pub mod prompt;

use std::collections::HashMap;

// Single pass over the template. Text inserted for one placeholder is never rescanned,
// and @NAME@ tokens without a replacement are left as they are.
pub fn basic_configure_replace<'a>(
  the_str: impl AsRef<str>,
  replacements: impl IntoIterator<Item=(&'a str, String)>
) -> String {
  let replacement_map: HashMap<&str, String> = replacements.into_iter().collect();
  let mut remaining: &str = the_str.as_ref();
  let mut final_string: String = String::with_capacity(remaining.len());

  while let Some(open_index) = remaining.find('@') {
    final_string.push_str(&remaining[..open_index]);
    let after_open: &str = &remaining[open_index + 1..];

    let matched_replacement: Option<(&String, usize)> = after_open.find('@')
      .and_then(|close_index| replacement_map
        .get(&after_open[..close_index])
        .map(|replacement_text| (replacement_text, close_index))
      );

    match matched_replacement {
      Some((replacement_text, close_index)) => {
        final_string.push_str(replacement_text);
        remaining = &after_open[close_index + 1..];
      },
      None => {
        final_string.push('@');
        remaining = after_open;
      }
    }
  }

  final_string.push_str(remaining);
  return final_string;
}

pub fn python_str_literal(item: impl AsRef<str>) -> String {
  let mut escaped: String = String::with_capacity(item.as_ref().len() + 2);
  escaped.push('\'');

  for c in item.as_ref().chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '\'' => escaped.push_str("\\'"),
      '\n' => escaped.push_str("\\n"),
      '\r' => escaped.push_str("\\r"),
      '\t' => escaped.push_str("\\t"),
      c if c.is_control() && (c as u32) < 0x100 => escaped.push_str(&format!("\\x{:02x}", c as u32)),
      c => escaped.push(c)
    }
  }

  escaped.push('\'');
  return escaped;
}

// ['a', 'b']
pub fn python_inline_list(items: &[String]) -> String {
  let joined: String = items
    .iter()
    .map(|item| python_str_literal(item))
    .collect::<Vec<String>>()
    .join(", ");

  return format!("[{}]", joined);
}

// One item per line, each followed by a comma.
pub fn python_multiline_list(items: &[String]) -> String {
  if items.is_empty() {
    return "[]".to_owned();
  }

  let item_lines: String = items
    .iter()
    .map(|item| format!("    {},\n", python_str_literal(item)))
    .collect();

  return format!("[\n{}]", item_lines);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replaces_every_occurrence() {
    let replaced: String = basic_configure_replace(
      "@NAME@ and @NAME@ at @VERSION@",
      vec![("NAME", "pcodec".to_owned()), ("VERSION", "0.4.7".to_owned())]
    );

    assert_eq!(replaced, "pcodec and pcodec at 0.4.7");
  }

  #[test]
  fn replacement_text_is_not_rescanned() {
    let replaced: String = basic_configure_replace(
      "project = @PROJECT@, author = @AUTHOR@",
      vec![("PROJECT", "My @AUTHOR@ docs".to_owned()), ("AUTHOR", "Pcodec devs".to_owned())]
    );

    assert_eq!(replaced, "project = My @AUTHOR@ docs, author = Pcodec devs");
  }

  #[test]
  fn unknown_and_stray_markers_are_kept() {
    let replaced: String = basic_configure_replace(
      "mail@example.com @UNKNOWN@ @@NAME@ trailing@",
      vec![("NAME", "pco".to_owned())]
    );

    assert_eq!(replaced, "mail@example.com @UNKNOWN@ @pco trailing@");
  }

  #[test]
  fn python_literals_are_escaped() {
    assert_eq!(python_str_literal("Pcodec"), "'Pcodec'");
    assert_eq!(python_str_literal("it's"), r"'it\'s'");
    assert_eq!(python_str_literal(r"C:\docs"), r"'C:\\docs'");
  }

  #[test]
  fn python_literals_escape_control_characters() {
    assert_eq!(python_str_literal("a\r\nb"), r"'a\r\nb'");
    assert_eq!(python_str_literal("tab\there"), r"'tab\there'");
    assert_eq!(python_str_literal("nul\0end"), r"'nul\x00end'");
    assert_eq!(python_str_literal("bell\u{7}"), r"'bell\x07'");
    assert_eq!(python_str_literal("del\u{7f}"), r"'del\x7f'");
    assert_eq!(python_str_literal("caf\u{e9}"), "'caf\u{e9}'");
  }

  #[test]
  fn python_lists_keep_order() {
    let items: Vec<String> = vec!["_build".to_owned(), "Thumbs.db".to_owned(), ".DS_Store".to_owned()];

    assert_eq!(python_inline_list(&items), "['_build', 'Thumbs.db', '.DS_Store']");
    assert_eq!(python_inline_list(&[]), "[]");
    assert_eq!(
      python_multiline_list(&items[..2]),
      "[\n    '_build',\n    'Thumbs.db',\n]"
    );
    assert_eq!(python_multiline_list(&[]), "[]");
  }
}
