use std::path::Path;
use std::process::exit;

use crate::pass::output::with_summary;
use crate::settings::{MAX_LENGTH, Settings};
use crate::terminal::{clear, reset_terminal};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu,
    print_settings_menu,
};

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            println!("Error loading settings: {}", e);
            Settings::default()
        }
    };

    // First screen is a generated password, like pressing Enter
    if settings.output_file_path.is_empty() {
        with_summary(&mut settings);
    }
    let mut print_invalid = false;

    loop {
        print_main_menu(&mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                with_summary(&mut settings);
                reset_terminal(); // Ensure clean state after password generation
            }
            "1" => update_settings(&mut settings),
            "2" => clear(),
            "3" => {
                clear();
                print_help();
            }
            "4" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

pub fn update_settings(settings: &mut Settings) {
    let (mut print_error, mut error_txt) = (0, String::new());

    loop {
        print_settings_menu(settings, print_error, &error_txt);
        print_error = 0;

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                break; // ESC pressed - return to main menu
            }
        };
        let choice = choice.trim();

        let action = match choice.parse::<i32>() {
            Ok(num) => menu_options(num, &mut print_error, settings),
            Err(_) => command_options(choice, &mut print_error, &mut error_txt, settings),
        };
        if let Break = action {
            break;
        }
    }
}

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

fn toggle(value: &mut bool, print_error: &mut i32) {
    let new_bool = match get_editable_input("Enter 't' or 'f'", "") {
        Some(s) => s,
        None => return,
    };
    match new_bool.trim() {
        "" => {}
        "t" => *value = true,
        "f" => *value = false,
        _ => *print_error = 2,
    }
}

fn menu_options(choice: i32, print_error: &mut i32, settings: &mut Settings) -> LoopAction {
    match choice {
        1 => {
            // pass length, clamped to the selector range
            if let Some(len) =
                get_numeric_input("Enter new password length", settings.pass_length, MAX_LENGTH)
            {
                settings.pass_length = len;
            }
        }
        2 => {
            // num of passwords
            if let Some(num) = get_numeric_input(
                "Enter number of passwords",
                settings.number_of_passwords,
                usize::MAX,
            ) {
                settings.number_of_passwords = num;
            }
        }
        3 => toggle(&mut settings.use_uppercase, print_error),
        4 => toggle(&mut settings.use_lowercase, print_error),
        5 => toggle(&mut settings.use_digits, print_error),
        6 => toggle(&mut settings.use_symbols, print_error),
        7 => {
            // symbol list
            let current = String::from_utf8_lossy(&settings.symbol_chars).to_string();
            let new_chars = match get_editable_input("Enter symbol characters", &current) {
                Some(s) => s,
                None => return Continue,
            };
            settings.symbol_chars = new_chars
                .bytes()
                .filter(|b| b.is_ascii_graphic())
                .collect();
        }
        8 => toggle(&mut settings.show_strength, print_error),
        9 => toggle(&mut settings.output_to_terminal, print_error),
        10 => {
            // output file path
            let new_path = match get_editable_input(
                "Enter new .txt output file path",
                &settings.output_file_path,
            ) {
                Some(s) => s,
                None => return Continue,
            };

            let path = match new_path.trim().to_string() {
                path if path.is_empty() => {
                    settings.output_file_path = String::new();
                    return Continue;
                }
                path if path.ends_with(".txt") => path,
                path if path.ends_with('.') => format!("{}/passforge.txt", path),
                path if path.ends_with('/') => format!("{}passforge.txt", path),
                _ => {
                    *print_error = 3;
                    return Continue;
                }
            };

            if Path::new(path.trim()).parent().is_none() {
                *print_error = 3;
                return Continue;
            }

            settings.output_file_path = path.trim().to_string();
        }
        11 => {
            // cli command
            let new_command = match get_editable_input("Enter flags and values", "") {
                Some(s) => s,
                None => return Continue,
            };
            settings.cli_command = new_command;
        }
        _ => {
            clear();
            *print_error = 998;
        }
    }
    Continue
}

fn command_options(
    choice: &str,
    print_error: &mut i32,
    error_txt: &mut String,
    settings: &mut Settings,
) -> LoopAction {
    if choice.is_empty() {
        if settings.output_file_path.is_empty() && !settings.output_to_terminal {
            *print_error = 999;
            *error_txt = "You must output to the terminal or a file.".to_string();
            return Continue; // Stay in settings to show error
        }
        // generate passwords
        clear();
        with_summary(settings);
        return Break;
    }

    if choice == "help" {
        clear();
        print_help();
        return Break;
    }

    match choice.chars().next() {
        Some('s') | Some('e') | Some('r') | Some('f') | Some('d') => {}
        _ => {
            *print_error = 998;
            return Continue;
        }
    }

    for ch in choice.chars() {
        match ch {
            's' => {
                // save settings
                if let Err(e) = settings.save_to_file() {
                    *print_error = 999;
                    *error_txt = format!("Error saving settings: {}", e);
                }
            }
            'e' => {}
            'r' => {
                // load default settings
                *settings = Settings::default();
            }
            'f' => {
                // load from file
                match Settings::load_from_file() {
                    Ok(s) => *settings = s,
                    Err(e) => {
                        *print_error = 999;
                        *error_txt = format!("Error loading settings: {}", e);
                    }
                }
            }
            'd' => {
                clear();
                if Path::new(&settings.output_file_path).exists() {
                    let _ = std::fs::remove_file(&settings.output_file_path);
                }
            }
            _ => {
                clear();
                *print_error = 998;
            }
        }
    }

    if choice.contains('e') {
        clear();
        exit(0);
    }
    Continue
}
