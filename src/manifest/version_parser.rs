#[derive(Debug, PartialEq, Eq)]
pub struct ThreePartVersion {
  pub major: u32,
  pub minor: u32,
  pub patch: u32,
}

impl ThreePartVersion {
  /*
    Allowed input formats:
      - v0.4.7
      - 0.4.7
      - 0.4.7-alpha.1
      - 0.4.7+build5
    Pre-release and build metadata are accepted but dropped.
  */
  pub fn from_str(full_version_string: &str) -> Option<Self> {
    let usable_version_string: &str = full_version_string
      .strip_prefix('v')
      .unwrap_or(full_version_string);

    let core_version_string: &str = match usable_version_string.find(|c: char| c == '-' || c == '+') {
      Some(suffix_index) => &usable_version_string[..suffix_index],
      None => usable_version_string
    };

    let version_nums: Vec<u32> = core_version_string
      .split('.')
      .map(|section| section.parse::<u32>())
      .collect::<Result<Vec<u32>, _>>()
      .ok()?;

    return match version_nums.as_slice() {
      &[major, minor, patch] => Some(Self { major, minor, patch }),
      _ => None
    }
  }
}

pub fn parse_version(version_str: &str) -> Option<ThreePartVersion> {
  return ThreePartVersion::from_str(version_str);
}

#[test]
fn test_version_parser() {
  let valid_versions: Vec<(&str, (u32, u32, u32))> = vec![
    ("1.2.3", (1, 2, 3)),
    ("v0.4.7", (0, 4, 7)),
    ("0.4.7-alpha.1", (0, 4, 7)),
    ("10.0.12+build5", (10, 0, 12)),
    ("1.0.0-rc.1+sha.5114f85", (1, 0, 0))
  ];

  for (version_str, (major, minor, patch)) in valid_versions {
    assert_eq!(
      parse_version(version_str),
      Some(ThreePartVersion { major, minor, patch }),
      "when parsing \"{}\"",
      version_str
    );
  }

  let invalid_versions: Vec<&str> = vec![
    "",
    "1",
    "1.2",
    "1.2.3.4",
    "1.x.3",
    "-1.2.3",
    "1..3",
    "one.two.three"
  ];

  for version_str in invalid_versions {
    assert_eq!(parse_version(version_str), None, "\"{}\" should not parse", version_str);
  }
}
