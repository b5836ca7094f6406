//! ui69 CLI - Copy unstyled, accessible React Native components into your project

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use ui69_core::commands::{self, AddArgs};
use ui69_core::{output, version, ClackSelector, ProductConfig, ScaffoldError};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The component table, compiled in
const REGISTRY_MANIFEST: &str = include_str!("../components/registry.yaml");

/// ui69 product configuration
#[derive(Clone)]
pub struct Ui69Config;

impl ProductConfig for Ui69Config {
    fn name(&self) -> &'static str {
        "ui69"
    }

    fn display_name(&self) -> &'static str {
        "ui69"
    }

    fn tagline(&self) -> &'static str {
        "UI components for React Native"
    }

    fn cli_description(&self) -> &'static str {
        "A collection of unstyled, accessible UI components for React Native"
    }

    fn registry_manifest(&self) -> &'static str {
        REGISTRY_MANIFEST
    }

    /// `components/` next to the executable when packaged that way, otherwise
    /// the crate's own copy
    fn bundled_template_dir(&self) -> PathBuf {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("components")));

        match beside_exe {
            Some(dir) if dir.is_dir() => dir,
            _ => PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/components")),
        }
    }

    fn example_components(&self) -> &'static [&'static str] {
        &["radio", "switch", "checkbox"]
    }
}

#[derive(Parser, Debug)]
#[command(name = "ui69")]
#[command(about = "A collection of unstyled, accessible UI components for React Native")]
#[command(disable_help_flag = true, disable_version_flag = true, disable_help_subcommand = true)]
pub struct Args {
    /// Show the help message
    #[arg(short, long)]
    pub help: bool,

    /// Show the version number
    #[arg(short, long)]
    pub version: bool,

    /// Local directory to use for component sources instead of the bundled one (for development use)
    #[arg(long = "template-dir", global = true)]
    pub template_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ignored words after a flag or an unknown command
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a component to your project (interactive if no component specified)
    Add(CliAddArgs),
    /// List all available components
    List(CliListArgs),
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Component key, e.g. `button`
    pub component: Option<String>,

    /// Ignored words after the component key
    #[arg(trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CliListArgs {
    /// Ignored words after `list`
    #[arg(trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}

/// What a single invocation does
#[derive(Debug)]
enum Action {
    Add(AddArgs),
    List(Option<PathBuf>),
    Version,
    Help,
}

impl Action {
    /// Only the command word and the component key matter; words after them
    /// are ignored. Anything clap rejects falls through to the usage text.
    fn from_args<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let Ok(args) = Args::try_parse_from(argv) else {
            return Action::Help;
        };

        if args.help {
            return Action::Help;
        }
        if args.version {
            return Action::Version;
        }

        match args.command {
            Some(Command::Add(add)) => Action::Add(AddArgs {
                component: add.component,
                template_dir: args.template_dir,
            }),
            Some(Command::List(_)) => Action::List(args.template_dir),
            None => Action::Help,
        }
    }
}

async fn run(action: Action) -> Result<()> {
    let config = Ui69Config;

    match action {
        Action::Add(add_args) => {
            let target_dir =
                std::env::current_dir().context("Failed to read the current directory")?;
            commands::add(&config, &add_args, &target_dir, &mut ClackSelector).await?;
        }
        Action::List(template_dir) => {
            commands::list(&config, template_dir.as_deref())?;
        }
        Action::Version => {
            let version = version::package_version(CLI_VERSION)?;
            println!("{}", version);
        }
        Action::Help => output::print_help(&config),
    }

    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::UnknownComponent { available, .. }) => {
            output::error(&err.to_string());
            println!();
            println!("Available components:");
            for key in available {
                println!("  - {}", key);
            }
        }
        Some(scaffold_err) => {
            output::error(&scaffold_err.to_string());
            if let Some(source) = std::error::Error::source(scaffold_err) {
                output::muted(&source.to_string());
            }
            for hint in scaffold_err.hints() {
                output::info(&hint);
            }
        }
        None => {
            output::error("An error occurred:");
            eprintln!("{:#}", err);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    })
    .ok();

    let action = Action::from_args(std::env::args_os());
    let result = run(action).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}
