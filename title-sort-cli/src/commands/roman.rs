use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use title_sort_core::{is_excluded_numeral, roman_to_int};

/// Print the value of a roman numeral. Returns false if it is not one.
pub(crate) fn run_roman(token: &str, lenient: bool) -> bool {
    match roman_to_int(token, !lenient) {
        Ok(value) => {
            log::info!(
                "{} = {}",
                token,
                value.if_supports_color(Stdout, |t| t.bold()),
            );
            if is_excluded_numeral(token) {
                log::info!(
                    "  {}",
                    "(excluded: left as text inside titles)".if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            true
        }
        Err(e) => {
            log::warn!("{token} is not a valid roman numeral: {e}");
            false
        }
    }
}
