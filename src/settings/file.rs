//! Settings file persistence.
//!
//! One escaped CSV line at `$HOME/.config/passforge/settings`. Malformed
//! content is rewritten with defaults rather than treated as fatal.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::{MAX_LENGTH, Settings};

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    let symbols_str = settings
        .symbol_chars
        .iter()
        .map(|&c| match c {
            b',' => "|,".to_string(),
            b'|' => "||".to_string(),
            _ => (c as char).to_string(),
        })
        .collect::<Vec<String>>()
        .join("");

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_uppercase,
        settings.use_lowercase,
        settings.use_digits,
        settings.use_symbols,
        symbols_str,
        settings.show_strength,
        settings.output_file_path,
        settings.output_to_terminal,
        settings.cli_command
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        save(settings)?;
    } else {
        let parts = split_escaped(line.trim(), ',');

        if parts.len() == 11 {
            settings.pass_length = parts[0]
                .parse()
                .map(|len: usize| len.min(MAX_LENGTH))
                .unwrap_or(settings.pass_length);
            settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
            settings.use_uppercase = parts[2].parse().unwrap_or(settings.use_uppercase);
            settings.use_lowercase = parts[3].parse().unwrap_or(settings.use_lowercase);
            settings.use_digits = parts[4].parse().unwrap_or(settings.use_digits);
            settings.use_symbols = parts[5].parse().unwrap_or(settings.use_symbols);
            settings.symbol_chars = parts[6]
                .bytes()
                .filter(|b| b.is_ascii_graphic())
                .collect();
            settings.show_strength = parts[7].parse().unwrap_or(settings.show_strength);
            settings.output_file_path = parts[8].to_string();
            settings.output_to_terminal = parts[9].parse().unwrap_or(settings.output_to_terminal);
            settings.cli_command = parts[10].to_string();
        } else {
            save(settings)?;
            load(settings)?;
        }
    }

    Ok(())
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passforge/settings", home)
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(current.clone());
            current.clear();
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_escaped_handles_plain_fields() {
        assert_eq!(split_escaped("9,1,true", ','), vec!["9", "1", "true"]);
    }

    #[test]
    fn split_escaped_preserves_escaped_delimiters() {
        assert_eq!(split_escaped("a|,b,c", ','), vec!["a,b", "c"]);
        assert_eq!(split_escaped("a||b,c", ','), vec!["a|b", "c"]);
    }

    #[test]
    fn split_escaped_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_escaped("a,b,", ','), vec!["a", "b", ""]);
    }
}
