//! CLI context - bundles settings and flags for one invocation.

use super::{CliFlags, prompts, quiet};
use crate::pass::{output, strength};
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub flags: CliFlags,
    args: Vec<String>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                // Plain output by default in CLI mode; --rate opts in.
                show_strength: false,
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            flags,
            args,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_check()?;
        self.handle_command_mode()?;
        self.apply_flags();
        quiet::set(self.flags.quiet);
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// `--check <PASSWORD>`: rate the given password and exit.
    fn handle_check(&self) -> Result<(), Done> {
        if let Some(ref password) = self.flags.check {
            let rating = strength::score(password);
            println!("{} ({} of 4)", rating.label.as_str(), rating.level);
            return Err(Done);
        }
        Ok(())
    }

    /// `-c [FLAGS...]`: persist the remaining flags as the startup command.
    /// Bare `-c` clears it.
    fn handle_command_mode(&mut self) -> Result<(), Done> {
        if !self.flags.command {
            return Ok(());
        }

        let command = self.args[1..]
            .iter()
            .filter(|a| *a != "-c" && *a != "--command")
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        self.saved_settings.cli_command = command.clone();
        if let Err(e) = self.saved_settings.save_to_file() {
            prompts::error(&format!("Failed to save command: {}", e));
        } else {
            prompts::command_saved(&command);
        }
        Err(Done)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        // Apply saved command if no explicit args given
        if !self.settings.cli_command.is_empty() && !self.flags.has_explicit_args() {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            if let Ok(saved_flags) = super::parse(&combined_args) {
                // Replace flags with saved flags so all flag handling applies
                self.flags = saved_flags;
            }
        }

        if self.flags.default {
            self.settings = Settings {
                cli_command: self.settings.cli_command.clone(),
                show_strength: false,
                ..Default::default()
            };
        }

        // Apply explicit length/number
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        // Apply character class flags
        if self.flags.no_upper {
            self.settings.use_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.use_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.use_digits = false;
        }
        if self.flags.no_symbols {
            self.settings.use_symbols = false;
        }
        if let Some(ref symbols) = self.flags.symbols {
            self.settings.symbol_chars = symbols
                .bytes()
                .filter(|b| b.is_ascii_graphic())
                .collect();
        }
        if self.flags.rate {
            self.settings.show_strength = true;
        }

        // Apply output file
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = if path.ends_with('/') || path == "." {
                if path == "." {
                    "passforge.txt".to_string()
                } else {
                    format!("{}passforge.txt", path)
                }
            } else if !path.ends_with(".txt") {
                format!("{}.txt", path)
            } else {
                path.clone()
            };
            self.settings.output_to_terminal = false;
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self
            .flags
            .number
            .unwrap_or(self.settings.number_of_passwords.max(1));

        let requested = self.settings.classes();

        match output::generate_batch(&self.settings, count) {
            Ok(effective) => {
                if effective != requested {
                    self.settings.set_classes(effective);
                    for note in output::substitution_notes(requested, effective) {
                        prompts::warn(note);
                    }
                }
                if !self.settings.output_file_path.is_empty() {
                    let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| self.settings.output_file_path.clone());
                    prompts::passwords_written(count, &full_path);
                }
            }
            Err(e) => {
                prompts::error(&format!("Generation failed: {}", e));
                std::process::exit(1);
            }
        }
    }
}
