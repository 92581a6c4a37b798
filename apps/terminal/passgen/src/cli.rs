//! Command-line arguments.

use models::{CharacterClasses, GenerationStyle};

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generator client", long_about = None)]
pub struct Args {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Generator server base URL (overrides config and PASSGEN_SERVER_URL)
    #[arg(long, short, global = true)]
    pub server: Option<String>,

    /// Increase console log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute; defaults to the interactive page
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one password, print it with its strength and exit
    Generate(GenerateArgs),

    /// Score an existing password
    Check {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Show or switch the stored light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Interactive page (the default)
    Interactive,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (4-50); defaults to ui.default_length
    #[arg(short, long)]
    pub length: Option<u32>,

    /// standard, easy-to-read or easy-to-pronounce; defaults to ui.default_style
    #[arg(long)]
    pub style: Option<GenerationStyle>,

    #[arg(long)]
    pub no_uppercase: bool,

    #[arg(long)]
    pub no_lowercase: bool,

    #[arg(long)]
    pub no_numbers: bool,

    #[arg(long)]
    pub no_special: bool,
}

impl GenerateArgs {
    pub fn classes(&self) -> CharacterClasses {
        CharacterClasses {
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            special: !self.no_special,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeAction {
    /// Print the current theme
    #[default]
    Show,
    /// Switch between light and dark and store the choice
    Toggle,
}
