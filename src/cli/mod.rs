//! Command-line interface for libris.
//!
//! Running `libris` with no arguments opens the configured database and
//! starts the interactive menu on stdin/stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config;
use crate::store::Library;

pub mod console;

pub use console::{Console, MenuChoice};

/// libris - console book inventory
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (default: ./database.db or .libris/config.yaml)
    #[arg(long, env = "LIBRIS_DATABASE")]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// Open the library and run the menu until the user exits
    pub fn execute(self) -> Result<()> {
        let cfg = config::load(self.database.as_deref())?;
        debug!(
            database = %cfg.database.display(),
            config_file = ?cfg.config_file,
            "Resolved configuration"
        );

        let library = Library::open(&cfg.database).with_context(|| {
            format!("Failed to open library database: {}", cfg.database.display())
        })?;

        let stdin = io::stdin();
        let mut console = Console::new(library, stdin.lock(), io::stdout());
        console.run()?;

        console
            .into_library()
            .close()
            .context("Failed to close library database")
    }
}
