use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{convert_ops, settings_ops, table_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji/kana transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romaji table operations
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Transliterate text through a romaji table
    Convert {
        /// Romaji input
        text: String,
        /// Custom table TOML (defaults to the standard preset)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output katakana instead of hiragana
        #[arg(long)]
        katakana: bool,
    },
    /// Show the engine result for every keystroke
    Simulate {
        /// Romaji input
        text: String,
        /// Custom table TOML (defaults to the standard preset)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Map key labels through the JIS kana layout
    Direct {
        /// Key labels, one per character
        text: String,
        /// Settings TOML with keymap overrides
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Compose a dead-key mark with a base letter
    Compose {
        /// Dead-key mark (¨ ´ ` ^ ~)
        mark: char,
        /// Base letter
        base: char,
        /// Produce the uppercase form
        #[arg(long)]
        shift: bool,
    },
    /// Settings operations
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the standard table TOML
    Export,
    /// Validate a table TOML file
    Validate {
        /// Table file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate {
        /// Settings file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let output = match cli.command {
        Command::Table { action } => match action {
            TableAction::Export => table_ops::table_export(),
            TableAction::Validate { file } => {
                die!(table_ops::table_validate(&file), "Error: {}")
            }
        },
        Command::Convert {
            text,
            table,
            katakana,
        } => die!(
            convert_ops::convert(&text, table.as_deref(), katakana),
            "Error: {}"
        ),
        Command::Simulate { text, table, json } => die!(
            convert_ops::simulate(&text, table.as_deref(), json),
            "Error: {}"
        ),
        Command::Direct { text, settings } => {
            die!(convert_ops::direct(&text, settings.as_deref()), "Error: {}")
        }
        Command::Compose { mark, base, shift } => convert_ops::compose(mark, base, shift),
        Command::Settings { action } => match action {
            SettingsAction::Export => settings_ops::settings_export(),
            SettingsAction::Validate { file } => {
                die!(settings_ops::settings_validate(&file), "Error: {}")
            }
        },
    };

    let output = output.trim_end_matches('\n');
    println!("{output}");
}
