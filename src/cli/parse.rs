use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-c" | "--command" => flags.command = true,
            "-r" | "--rate" => flags.rate = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "--symbols" => {
                i += 1;
                if i < args.len() {
                    flags.symbols = Some(args[i].clone());
                }
            }
            "--check" => {
                i += 1;
                if i < args.len() {
                    flags.check = Some(args[i].clone());
                } else {
                    return Err(ParseError::MissingValue("--check".to_string()));
                }
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    // No path given, default to current dir
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "16", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-upper", "--no-symbols"])).unwrap();
        assert!(flags.no_upper);
        assert!(flags.no_symbols);
        assert!(!flags.no_lower);
    }

    #[test]
    fn check_requires_a_value() {
        assert!(matches!(
            parse(&args(&["--check"])),
            Err(ParseError::MissingValue(_))
        ));
        let flags = parse(&args(&["--check", "Ab3!xy9Q"])).unwrap();
        assert_eq!(flags.check.as_deref(), Some("Ab3!xy9Q"));
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_flags() {
        assert!(matches!(
            parse(&args(&["-l", "ten"])),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn bare_output_defaults_to_current_dir() {
        let flags = parse(&args(&["-o"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        let flags = parse(&args(&["-o", "out.txt"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("out.txt"));
    }
}
