//! rstree: display running processes as a tree
//!
//! Usage:
//!   rstree             # tree of all processes, siblings sorted by name
//!   rstree -p          # append the pid to every entry
//!   rstree -n          # sort siblings numerically by pid
//!
//! The tree goes to stdout, one process per line; diagnostics go to
//! stderr. Defaults can be set in ~/.rstree/config.toml.

use clap::Parser;
use owo_colors::{OwoColorize, Style};
use rstree_core::{render, ProcessTree, SortMode, TreeError};

/// Process exit codes
mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR_GENERAL: i32 = 1;
    pub const ERROR_NO_ROOT: i32 = 2;
}

/// Configuration file support
mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::PathBuf;

    /// User configuration from ~/.rstree/config.toml
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Config {
        /// Default output settings
        pub output: OutputConfig,
        /// Default flags
        pub defaults: DefaultFlags,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct OutputConfig {
        /// Disable colored diagnostics by default
        pub no_color: bool,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct DefaultFlags {
        /// Always append pids to entries
        pub show_pids: bool,
        /// Always sort siblings by pid
        pub numeric_sort: bool,
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".rstree").join("config.toml"))
    }

    /// Load configuration from file
    pub fn load_config() -> Config {
        let Some(path) = config_path() else {
            return Config::default();
        };

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Generate a sample config file content
    pub fn sample_config() -> &'static str {
        r#"# rstree configuration file
# Place this file at ~/.rstree/config.toml

[output]
# Disable colored diagnostics
no_color = false

[defaults]
# Always append the pid to every entry
show_pids = false
# Always sort siblings by pid instead of by name
numeric_sort = false
"#
    }

}

#[derive(Parser)]
#[command(name = "rstree")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  rstree                Show the process tree, siblings sorted by name
  rstree -p             Append the pid to every entry
  rstree -n             Sort siblings by pid instead of by name
  rstree -pn            Both of the above
  rstree --init-config  Write a sample config to ~/.rstree/config.toml")]
struct Cli {
    /// Append the pid to every entry, the root included
    #[arg(long, short = 'p')]
    show_pids: bool,

    /// Sort siblings by pid instead of by name
    #[arg(long, short = 'n')]
    numeric_sort: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate a sample config file at ~/.rstree/config.toml
    #[arg(long)]
    init_config: bool,
}

/// Color configuration for diagnostics
struct Colors {
    success: Style,
    warning: Style,
    error: Style,
}

impl Colors {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                success: Style::new().green(),
                warning: Style::new().yellow(),
                error: Style::new().red().bold(),
            }
        } else {
            Self {
                success: Style::new(),
                warning: Style::new(),
                error: Style::new(),
            }
        }
    }
}

fn main() {
    // Load configuration file
    let cfg = config::load_config();

    let mut cli = Cli::parse();

    // Apply config defaults (CLI flags override config)
    if !cli.no_color && cfg.output.no_color {
        cli.no_color = true;
    }
    if !cli.show_pids && cfg.defaults.show_pids {
        cli.show_pids = true;
    }
    if !cli.numeric_sort && cfg.defaults.numeric_sort {
        cli.numeric_sort = true;
    }

    // Determine color mode
    let colors = Colors::new(!cli.no_color && supports_color());

    if cli.init_config {
        handle_init_config(&colors);
        return;
    }

    let sort_mode = if cli.numeric_sort {
        SortMode::ByPid
    } else {
        SortMode::ByName
    };

    if let Err(code) = run(sort_mode, cli.show_pids, &colors) {
        std::process::exit(code);
    }
}

/// Snapshot the process table, rebuild the tree, and print it.
fn run(sort_mode: SortMode, show_pids: bool, colors: &Colors) -> Result<(), i32> {
    let records = rstree_platform_linux::list_processes().map_err(|e| {
        print_error(colors, &format!("failed to read the process table: {}", e));
        exit_codes::ERROR_GENERAL
    })?;

    let mut tree = match ProcessTree::build(records) {
        Ok(tree) => tree,
        Err(TreeError::NoRootFound) => {
            print_error(colors, "no root process in the snapshot");
            return Err(exit_codes::ERROR_NO_ROOT);
        }
    };
    tree.sort_children(sort_mode);

    print!("{}", render::render_tree(&tree, show_pids));
    Ok(())
}

/// Handle --init-config flag
fn handle_init_config(colors: &Colors) {
    use std::fs;

    let Some(config_path) = config::config_path() else {
        print_error(colors, "Could not determine home directory");
        std::process::exit(exit_codes::ERROR_GENERAL);
    };

    // Create directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            print_error(colors, &format!("Failed to create config directory: {}", e));
            std::process::exit(exit_codes::ERROR_GENERAL);
        }
    }

    // Check if config already exists
    if config_path.exists() {
        eprintln!(
            "{} Config file already exists at: {}",
            "warning:".style(colors.warning),
            config_path.display()
        );
        eprintln!("Use a text editor to modify it, or delete it first to regenerate.");
        std::process::exit(exit_codes::SUCCESS);
    }

    // Write sample config
    match fs::write(&config_path, config::sample_config()) {
        Ok(()) => {
            eprintln!(
                "{} Created config file at: {}",
                "success:".style(colors.success),
                config_path.display()
            );
            eprintln!();
            eprintln!("Edit this file to customize default behavior.");
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(e) => {
            print_error(colors, &format!("Failed to write config file: {}", e));
            std::process::exit(exit_codes::ERROR_GENERAL);
        }
    }
}

/// Print an error message
fn print_error(colors: &Colors, message: &str) {
    eprintln!("{} {}", "error:".style(colors.error), message);
}

/// Check if the terminal supports colored output
fn supports_color() -> bool {
    // Check for common NO_COLOR convention
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for TERM
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
