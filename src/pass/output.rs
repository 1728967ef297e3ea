//! Password output to terminal or file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroize;

use crate::settings::Settings;
use crate::terminal::{GREEN, RESET, YELLOW, box_bottom, box_line, box_top, clear, strength_tag};

use super::classes::ClassSet;
use super::{generate, strength};

/// Buffered writer that zeroizes its buffer on flush and drop, so password
/// bytes do not linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.inner.write_all(&self.buf)?;
            // Zeroize truncates the Vec after wiping it.
            self.buf.zeroize();
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush_buf()?;
        }
        if data.len() >= self.buf.capacity() {
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        self.buf.zeroize();
    }
}

/// Generate `count` passwords per `settings` and write them out.
///
/// Passwords go to the output file when one is configured, and to the
/// terminal when `output_to_terminal` is set (or no file is configured).
/// Returns the classes the generator actually used, so callers can surface
/// the empty-selection fallback.
pub fn generate_batch(settings: &Settings, count: usize) -> io::Result<ClassSet> {
    let mut rng = rand::thread_rng();
    let request = settings.request();
    let mut effective = request.classes;

    let mut file = open_output(settings)?;
    let to_terminal = settings.output_to_terminal || file.is_none();
    let stdout = io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());

    for _ in 0..count {
        let mut generated = generate(&request, &mut rng);
        effective = generated.classes;

        if let Some(ref mut f) = file {
            f.write_all(generated.password.as_bytes())?;
            f.write_all(b"\n")?;
        }

        if to_terminal {
            if settings.show_strength {
                let rating = strength::score(&generated.password);
                let mut line = format!("{}  {}\n", generated.password, strength_tag(rating));
                out.write_all(line.as_bytes())?;
                line.zeroize();
            } else {
                out.write_all(generated.password.as_bytes())?;
                out.write_all(b"\n")?;
            }
        }

        generated.password.zeroize();
    }

    out.flush()?;
    if let Some(ref mut f) = file {
        f.flush()?;
    }
    Ok(effective)
}

/// Interactive-mode generation: header box, passwords with meters, and the
/// effective classes written back into the settings so the menu toggles
/// reflect any substitution that fired.
pub fn with_summary(settings: &mut Settings) {
    let requested = settings.classes();

    clear();
    draw_header(settings);

    match generate_batch(settings, settings.number_of_passwords.max(1)) {
        Ok(effective) => {
            if effective != requested {
                settings.set_classes(effective);
                println!();
                for note in substitution_notes(requested, effective) {
                    println!("{YELLOW}{note}{RESET}");
                }
            }
            if !settings.output_file_path.is_empty() {
                let full_path = std::fs::canonicalize(&settings.output_file_path)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| settings.output_file_path.clone());
                println!();
                println!("{GREEN}Written to {}{RESET}", full_path);
            }
        }
        Err(e) => {
            crate::terminal::print_error(&format!("Generation failed: {}", e));
        }
    }
    println!();
}

/// Human-readable notes for the difference between requested and effective
/// class sets.
pub fn substitution_notes(requested: ClassSet, effective: ClassSet) -> Vec<&'static str> {
    use super::classes::CharacterClass;

    let mut notes = Vec::new();
    if requested.contains(CharacterClass::Symbol) && !effective.contains(CharacterClass::Symbol) {
        notes.push("Symbol list is empty; the symbol class was disabled.");
    }
    if effective.contains(CharacterClass::Lowercase) && !requested.contains(CharacterClass::Lowercase)
    {
        notes.push("No usable classes were selected; lowercase was enabled.");
    }
    notes
}

fn draw_header(settings: &Settings) {
    let classes: Vec<&str> = settings.classes().iter().map(|c| c.name()).collect();
    let classes = if classes.is_empty() {
        "none".to_string()
    } else {
        classes.join(", ")
    };

    box_top("Passforge");
    box_line(&format!(
        "Length: {} • Classes: {}",
        settings.pass_length, classes
    ));
    if settings.number_of_passwords > 1 {
        box_line(&format!("Passwords: {}", settings.number_of_passwords));
    }
    box_bottom();
    println!();
}

fn open_output(settings: &Settings) -> io::Result<Option<SecureBufWriter<File>>> {
    if settings.output_file_path.is_empty() {
        return Ok(None);
    }

    let path = Path::new(&settings.output_file_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Some(SecureBufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::super::classes::CharacterClass;
    use super::*;

    #[test]
    fn secure_writer_passes_data_through() {
        let mut sink: Vec<u8> = Vec::new();
        {
            let mut writer = SecureBufWriter::new(&mut sink);
            writer.write_all(b"abc\n").unwrap();
            writer.write_all(b"def\n").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(sink, b"abc\ndef\n");
    }

    #[test]
    fn notes_cover_both_substitutions() {
        let requested = ClassSet::none().with(CharacterClass::Symbol);
        let effective = ClassSet::none().with(CharacterClass::Lowercase);
        assert_eq!(substitution_notes(requested, effective).len(), 2);

        let requested = ClassSet::none();
        assert_eq!(substitution_notes(requested, effective).len(), 1);

        assert!(substitution_notes(ClassSet::all(), ClassSet::all()).is_empty());
    }
}
