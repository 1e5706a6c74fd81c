use chrono::Local;
use colored::*;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const BANNER: [&str; 5] = [
    r"__   __ ___        ______ ",
    r"\ \ / // \ \      / / ___|",
    r" \ V // _ \ \ /\ / / |    ",
    r"  | |/ ___ \ V  V /| |___ ",
    r"  |_/_/   \_\_/\_/  \____|",
];

pub struct ConsoleUI;

impl ConsoleUI {
    pub fn print_banner() {
        for line in BANNER {
            println!("{}", line.bright_cyan().bold());
        }
        println!("  {}", "YetAnotherWordCheat".bright_yellow());
        println!("  {}", format!("v{}", env!("CARGO_PKG_VERSION")).truecolor(150, 150, 150));
        println!();
    }

    pub fn print_header(title: &str) {
        let min_width = 40;
        let title_width = UnicodeWidthStr::width(title);
        let width = min_width.max(title_width + 2);
        let padding_total = width.saturating_sub(title_width);
        let padding_left = padding_total / 2;
        let padding_right = padding_total - padding_left;
        let horizontal = "═".repeat(width);
        println!("{}", format!("╔{}╗", horizontal).bright_cyan());
        println!(
            "{}{}{}{}{}",
            "║".bright_cyan(),
            " ".repeat(padding_left),
            title.bright_yellow().bold(),
            " ".repeat(padding_right),
            "║".bright_cyan()
        );
        println!("{}", format!("╚{}╝", horizontal).bright_cyan());
    }

    pub fn print_question(prompt: &str, default: Option<&str>) {
        match default {
            Some(default) => print!(
                "  {} {} {} ",
                "❯".bright_green().bold(),
                prompt.bright_white(),
                format!("[default: {}]", default).truecolor(150, 150, 150)
            ),
            None => print!("  {} {} ", "❯".bright_green().bold(), prompt.bright_white()),
        }
        let _ = io::stdout().flush();
    }

    pub fn print_letters(letters: &str) {
        println!(
            "\n  {} {} {}",
            Local::now().format("%H:%M:%S").to_string().truecolor(150, 150, 150),
            "New letters detected:".bright_white(),
            letters.to_uppercase().bright_yellow().bold()
        );
    }

    pub fn print_word_list(title: &str, words: &[String]) {
        println!("  {}", title.bright_cyan().bold());
        for (i, word) in words.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("{:>2}.", i + 1).bright_blue().bold(),
                "»".bright_cyan(),
                word.bright_white()
            );
        }
    }

    pub fn print_error(message: &str) {
        eprintln!("\n  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    pub fn print_success(message: &str) {
        println!("  {} {}", "✓".bright_green().bold(), message.bright_green());
    }

    pub fn print_warning(message: &str) {
        println!("  {} {}", "!".bright_yellow().bold(), message.yellow());
    }

    pub fn print_info(message: &str) {
        println!(
            "  {} {}",
            "[ℹ]".bright_cyan().bold(),
            message.truecolor(180, 180, 180)
        );
    }
}
