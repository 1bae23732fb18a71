use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use title_sort_core::TitleNormalizer;

/// Report whether two titles normalize to the same game. Returns the verdict
/// so the caller can turn it into an exit code.
pub(crate) fn run_match(normalizer: &TitleNormalizer, first: &str, second: &str) -> bool {
    let matched = normalizer.titles_match(first, second);

    log::info!(
        "  {} -> {}",
        first,
        normalizer.convert(first).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  {} -> {}",
        second,
        normalizer.convert(second).if_supports_color(Stdout, |t| t.cyan()),
    );
    if matched {
        log::info!("{}", "Match".if_supports_color(Stdout, |t| t.green()));
    } else {
        log::info!("{}", "No match".if_supports_color(Stdout, |t| t.red()));
    }

    matched
}
