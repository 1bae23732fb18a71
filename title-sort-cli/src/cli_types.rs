//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "title-sort")]
#[command(about = "Turn game titles into keys that sort naturally", long_about = None)]
pub(crate) struct Cli {
    /// Settings file to use (defaults to ~/.config/title-sort/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the `[normalizer]` table of the settings file.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct NormalizerArgs {
    /// Articles to strip from titles (e.g., the,a,an)
    #[arg(long, value_delimiter = ',', global = true)]
    pub articles: Option<Vec<String>>,

    /// Minimum number of digits for rewritten numbers
    #[arg(long, global = true)]
    pub number_length: Option<usize>,

    /// Drop edition phrases ("Deluxe Edition", "GOTY", ...) instead of keeping them.
    /// `--remove-editions=false` keeps them even if the settings file says otherwise
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub remove_editions: Option<bool>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the sortable form of each title
    Convert {
        /// Titles to convert (reads one per line from stdin if omitted)
        titles: Vec<String>,

        /// Print a JSON array of {title, sortable} objects
        #[arg(long)]
        json: bool,
    },

    /// Sort a list of titles by their sortable form
    Sort {
        /// File with one title per line (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Show the sort key next to each title
        #[arg(long)]
        show_keys: bool,
    },

    /// Check whether two titles refer to the same game
    Match {
        /// First title
        first: String,

        /// Second title
        second: String,
    },

    /// Show the value of a roman numeral, or why it is not one
    Roman {
        /// Numeral to parse (e.g., XIV)
        token: String,

        /// Accept malformed numerals like IIII or VX
        #[arg(long)]
        lenient: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective normalizer settings and where they came from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn remove_editions_flag_forms() {
        let cli = parse(&["title-sort", "convert", "Halo"]);
        assert_eq!(cli.normalizer.remove_editions, None);

        let cli = parse(&["title-sort", "--remove-editions", "convert", "Halo"]);
        assert_eq!(cli.normalizer.remove_editions, Some(true));

        let cli = parse(&["title-sort", "convert", "--remove-editions=false", "Halo"]);
        assert_eq!(cli.normalizer.remove_editions, Some(false));
    }

    #[test]
    fn articles_are_comma_separated() {
        let cli = parse(&["title-sort", "--articles", "der,die,das", "sort"]);
        assert_eq!(
            cli.normalizer.articles,
            Some(vec!["der".to_string(), "die".to_string(), "das".to_string()])
        );
    }
}
