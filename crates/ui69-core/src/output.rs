//! Console output: status lines, splash banner, usage and list rendering

use crate::product::ProductConfig;
use crate::registry::Registry;
use colored::Colorize;

pub fn success(text: &str) {
    println!("{}", format!("✓ {}", text).green());
}

pub fn error(text: &str) {
    println!("{}", format!("✖ {}", text).red());
}

pub fn info(text: &str) {
    println!("{}", format!("ℹ {}", text).blue());
}

pub fn title(text: &str) {
    println!();
    println!("{}", text.bold());
    println!();
}

pub fn code(text: &str) {
    println!("{}", text.cyan());
}

pub fn muted(text: &str) {
    println!("{}", text.dimmed());
}

/// Framed banner with product name and tagline
pub fn splash<C: ProductConfig>(config: &C) {
    println!();
    for line in splash_lines(config) {
        println!("{}", line.magenta().bold());
    }
    println!();
}

fn splash_lines<C: ProductConfig>(config: &C) -> Vec<String> {
    let rows = [config.display_name(), config.tagline()];
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) + 6;

    let mut lines = vec![format!("╭{}╮", "─".repeat(width))];
    lines.push(format!("│{}│", " ".repeat(width)));
    for row in rows {
        let pad = width - 3 - row.chars().count();
        lines.push(format!("│   {}{}│", row, " ".repeat(pad)));
    }
    lines.push(format!("╰{}╯", "─".repeat(width)));
    lines
}

/// Command table shown under "Commands:"
const COMMANDS: &[(&str, &str)] = &[
    (
        "add [component]",
        "Add a component to your project (interactive if no component specified)",
    ),
    ("list", "List all available components"),
    ("--help, -h", "Show this help message"),
    ("--version, -v", "Show the version number"),
];

/// Static usage text
pub fn help_text<C: ProductConfig>(config: &C) -> String {
    let runner = config.runner();
    let mut lines = vec![config.cli_description().to_string(), String::new()];

    lines.push("Commands:".to_string());
    lines.extend(
        COMMANDS
            .iter()
            .map(|(usage, about)| format!("  {:<19}{}", usage, about)),
    );
    lines.push(String::new());

    lines.push("Options:".to_string());
    lines.push(
        "  --template-dir <path>  Use component sources from a local directory (for development use)"
            .to_string(),
    );
    lines.push(String::new());

    lines.push("Examples:".to_string());
    lines.extend(
        config
            .example_components()
            .iter()
            .map(|key| format!("  {} add {}", runner, key)),
    );
    lines.push(format!("  {} add     # Interactive component selection", runner));
    lines.push(format!("  {} list", runner));

    lines.join("\n") + "\n"
}

/// Print the splash banner followed by usage text
pub fn print_help<C: ProductConfig>(config: &C) {
    splash(config);
    title(&format!("{} CLI", config.display_name()));
    print!("{}", help_text(config));
}

/// Key, description and dependencies of every entry, in registry order
pub fn render_list(registry: &Registry) -> String {
    let mut out = String::new();

    for entry in registry.entries() {
        out.push_str(&format!("{}\n", entry.key.bold()));
        out.push_str(&format!("  {}\n", entry.description));
        if entry.has_dependencies() {
            let deps = format!("Dependencies: {}", entry.dependencies.join(", "));
            out.push_str(&format!("  {}\n", deps.dimmed()));
        }
        out.push('\n');
    }

    out
}

/// Print the available components and how to add them
pub fn print_list<C: ProductConfig>(config: &C, registry: &Registry) {
    splash(config);
    title("Available Components");
    print!("{}", render_list(registry));

    println!("To add a component:");
    code(&format!("  {} add <component>", config.runner()));
    println!();
    println!("Or select from the interactive menu:");
    code(&format!("  {} add", config.runner()));
}
