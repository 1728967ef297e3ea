use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, flush, print_error,
    print_rule,
};

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate passwords)"
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password builder with class guarantees and strength rating");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI menu to");
    box_line("     configure settings and generate passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("  3) Command: Use -c to save flags as defaults. Future runs of");
    box_line("     `passforge` will use those flags automatically. Clear with");
    box_line("     `passforge -c`.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 9)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-symbols", "Exclude symbols");
    box_opt("      --symbols <CHARS>", "Override the symbol character set");
    box_line("");
    box_line(" Strength:");
    box_opt("  -r, --rate", "Print each password's strength rating");
    box_opt("      --check <PASS>", "Rate the given password and exit");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Write to file (default: passforge.txt)");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear.");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("NOTES:");
    box_line("  Every enabled class is guaranteed at least one character when");
    box_line("  the length allows it. Disabling all four classes enables");
    box_line("  lowercase instead, and the substitution is reported.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                  Interactive or command mode (if set)");
    box_line("  passforge -l 16            One password, 16 characters");
    box_line("  passforge -l 20 -n 3 -r    Three rated 20-character passwords");
    box_line("  passforge --no-symbols     Alphanumeric only");
    box_line("  passforge --check hunter2  Rate an existing password");
    box_line("  passforge -c -l 20         Save -l 20 as default");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) settings");
    box_line("  2) clear");
    box_line("  3) help");
    box_line("  4) quit");
    box_line("");
    box_bottom();

    // Error message (or blank line if no error)
    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_settings_menu(settings: &Settings, print_error_code: i32, error_txt: &str) {
    crate::terminal::clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    // General section
    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!(
        "  1) Password Length (0-100): {}",
        settings.pass_length
    ));
    box_line(&format!(
        "  2) Number of Passwords: {}",
        settings.number_of_passwords
    ));

    // Character class section
    box_line("");
    box_line(&format!("{UNDERLINE}Character Classes{RESET}:"));
    box_line(&format!("  3) Uppercase: {}", on_off(settings.use_uppercase)));
    box_line(&format!("  4) Lowercase: {}", on_off(settings.use_lowercase)));
    box_line(&format!("  5) Digits: {}", on_off(settings.use_digits)));
    box_line(&format!("  6) Symbols: {}", on_off(settings.use_symbols)));
    box_line(&format!(
        "  7) Symbol Character List: {}",
        String::from_utf8_lossy(&settings.symbol_chars)
    ));

    // Display section
    box_line("");
    box_line(&format!("{UNDERLINE}Display{RESET}:"));
    box_line(&format!(
        "  8) Strength Meter: {}",
        on_off(settings.show_strength)
    ));

    // Output section
    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!(
        "  9) Password(s) to terminal: {}",
        settings.output_to_terminal
    ));
    box_line(&format!(
        "  10) Password output file path: {}",
        settings.output_file_path
    ));

    // Command section
    box_line("");
    box_line(&format!("{UNDERLINE}Command on start{RESET}:"));
    box_line(&format!(
        "  11) Command to run with 'passforge': {}",
        settings.cli_command
    ));
    box_line("      - Ex: -l 16 -n 1 (see help)");

    // Footer
    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_line("     d) delete output file");
    box_bottom();

    // Error messages (or blank line if no error)
    match print_error_code {
        2 => print_error("Invalid input, please enter 't' or 'f'..."),
        3 => print_error("Invalid input, please enter a valid file path..."),
        998 => print_error("Invalid input, please enter a valid menu option..."),
        999 => print_error(error_txt),
        _ => println!(),
    }
    flush();
}
