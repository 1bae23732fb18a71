use std::io;

use serde::Serialize;
use title_sort_core::TitleNormalizer;

use crate::commands::read_titles;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct Converted<'a> {
    title: &'a str,
    sortable: String,
}

/// Print the sortable form of each title, as plain lines or a JSON array.
pub(crate) fn run_convert(
    normalizer: &TitleNormalizer,
    titles: Vec<String>,
    json: bool,
) -> Result<(), CliError> {
    let titles = if titles.is_empty() {
        read_titles(io::stdin().lock())?
    } else {
        titles
    };

    if json {
        println!("{}", to_json(normalizer, &titles)?);
    } else {
        for title in &titles {
            println!("{}", normalizer.convert(title));
        }
    }
    Ok(())
}

fn to_json(normalizer: &TitleNormalizer, titles: &[String]) -> Result<String, CliError> {
    let rows: Vec<Converted<'_>> = titles
        .iter()
        .map(|title| Converted {
            title,
            sortable: normalizer.convert(title),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
