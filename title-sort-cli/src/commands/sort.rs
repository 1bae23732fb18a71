use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use title_sort_core::{TitleNormalizer, sort_by_title};

use crate::commands::read_titles;
use crate::error::CliError;

/// Print titles from a file (or stdin) in sortable order.
pub(crate) fn run_sort(
    normalizer: &TitleNormalizer,
    file: Option<PathBuf>,
    show_keys: bool,
) -> Result<(), CliError> {
    let mut titles = match file {
        Some(path) => read_titles(BufReader::new(File::open(&path)?))?,
        None => read_titles(io::stdin().lock())?,
    };
    log::debug!("Sorting {} titles", titles.len());

    sort_by_title(normalizer, &mut titles, |t| t.as_str());

    for title in &titles {
        if show_keys {
            println!(
                "{}\t{}",
                normalizer
                    .sort_key(title)
                    .if_supports_color(Stdout, |t| t.dimmed()),
                title,
            );
        } else {
            println!("{title}");
        }
    }
    Ok(())
}
