//! Raw-mode line editing for menu input.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawMode, flush, reset_terminal};

enum Edit {
    Accepted(String),
    Cancelled,
}

/// Single-line editor with cursor movement. Esc/Ctrl+Q cancel, Ctrl+U
/// clears, Ctrl+C exits the program. Input is ASCII only, so byte index
/// and display column stay in step.
fn edit_line(prompt: &str, initial: &str, digits_only: bool) -> Edit {
    let mut input = initial.to_string();
    let mut cursor = input.len();
    let mut cancelled = false;

    let _guard = match RawMode::enter() {
        Ok(g) => g,
        Err(_) => return Edit::Accepted(input), // Can't enable raw mode, keep default
    };

    let mut last_len = input.len();
    print!("{}: {}", prompt, input);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors; restore the
                        // terminal by hand first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor = 0;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < input.len() {
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < input.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = input.len(),
                    KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
                        if !digits_only || c.is_ascii_digit() {
                            input.insert(cursor, c);
                            cursor += 1;
                        }
                    }
                    _ => {}
                }

                // Redraw the input line and park the cursor at the edit point
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, input);
                print!("\x1b[{}G", prompt.len() + 3 + cursor);
                flush();
                last_len = input.len();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Leave raw mode before the trailing newline
    drop(_guard);
    println!();

    if cancelled {
        Edit::Cancelled
    } else {
        Edit::Accepted(input)
    }
}

/// Edit a free-form value. `None` when cancelled.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    match edit_line(prompt, initial, false) {
        Edit::Accepted(s) => Some(s),
        Edit::Cancelled => None,
    }
}

/// Edit a number, clamped to `max`. Empty input reads as 0; `None` when
/// cancelled.
pub fn get_numeric_input(prompt: &str, initial: usize, max: usize) -> Option<usize> {
    let initial = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };

    match edit_line(prompt, &initial, true) {
        Edit::Accepted(digits) if digits.is_empty() => Some(0),
        Edit::Accepted(digits) => digits.parse().ok().map(|n: usize| n.min(max)),
        Edit::Cancelled => None,
    }
}
