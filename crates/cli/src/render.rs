//! Listing and detail page renderers
//!
//! Every renderer returns a `String` so the caller decides where it goes;
//! widths are measured without ANSI escapes.

use console::{measure_text_width, pad_str, strip_ansi_codes, Alignment};
use owo_colors::OwoColorize;
use pokedex_core::catalog::{display_number, CatalogEntry};
use pokedex_core::detail::{capitalize, PokemonDetail};
use pokedex_core::palette::{stat_swatch, type_swatch, Swatch};
use pokedex_core::view::ListingStatus;
use pokedex_search::{render_with, MatchSpan, SearchResult};

/// Width used when stdout is not a terminal
pub const FALLBACK_WIDTH: usize = 80;

const CARD_GAP: usize = 3;
const STAT_BAR_WIDTH: usize = 30;
const STAT_LABEL_WIDTH: usize = 16;

/// Current terminal width, or [`FALLBACK_WIDTH`] when not attached to one.
pub fn terminal_width() -> usize {
    let term = console::Term::stdout();
    if term.is_term() {
        usize::from(term.size().1)
    } else {
        FALLBACK_WIDTH
    }
}

/// Name with its first letter capitalized and matched runs highlighted.
///
/// Spans index characters of the raw name; capitalization is skipped when it
/// would change the character count.
pub fn highlighted_name(name: &str, spans: &[MatchSpan]) -> String {
    let display = capitalize_first(name);
    render_with(&display, spans, |run| run.black().on_yellow().to_string())
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => std::iter::once(single).chain(chars).collect(),
        _ => name.to_string(),
    }
}

/// One-line summary above the cards.
pub fn status_line(status: ListingStatus) -> String {
    match status {
        ListingStatus::Loading => "Loading Pokémon...".to_string(),
        ListingStatus::NoMatches => "No Pokémon found".to_string(),
        ListingStatus::Showing(count) => format!("Showing {count} Pokémon"),
    }
}

/// Placeholder shown instead of cards, if any.
pub fn empty_state(status: ListingStatus, query: &str) -> Option<String> {
    match status {
        ListingStatus::Loading => Some(format!(
            "{}\n{}",
            "Loading Pokémon...".bold(),
            "Fetching data from the Pokédex".dimmed()
        )),
        ListingStatus::NoMatches if !query.is_empty() => Some(format!(
            "{}\n{}",
            "No Pokémon Found".bold(),
            "Try searching for a different Pokémon name".dimmed()
        )),
        _ => None,
    }
}

/// `#NNN Name` card for one search result.
pub fn card(result: &SearchResult<CatalogEntry>) -> String {
    format!(
        "{} {}",
        display_number(result.item.id()).dimmed(),
        highlighted_name(result.item.name(), &result.spans)
    )
}

/// Lay cards out in rows that fit `width`, capped at `max_columns` when it
/// is non-zero.
pub fn listing_grid(
    results: &[SearchResult<CatalogEntry>],
    max_columns: usize,
    width: usize,
) -> String {
    let cards: Vec<String> = results.iter().map(card).collect();
    let Some(widest) = cards.iter().map(|c| measure_text_width(c)).max() else {
        return String::new();
    };

    let cell = widest + CARD_GAP;
    let mut columns = (width / cell).max(1);
    if max_columns > 0 {
        columns = columns.min(max_columns);
    }

    cards
        .chunks(columns)
        .map(|row| {
            let line: String = row
                .iter()
                .map(|c| pad_str(c, cell, Alignment::Left, None).into_owned())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full listing page: status line, then cards or an empty state.
pub fn listing_page(
    status: ListingStatus,
    query: &str,
    results: &[SearchResult<CatalogEntry>],
    max_columns: usize,
    width: usize,
) -> String {
    let mut lines = vec!["Pokédex".bold().yellow().to_string()];
    if !query.is_empty() {
        lines.push(format!("{} {query}", "Search:".dimmed()));
    }
    lines.push(status_line(status).dimmed().to_string());
    lines.push(String::new());

    match empty_state(status, query) {
        Some(placeholder) => lines.push(placeholder),
        None => {
            let grid = listing_grid(results, max_columns, width);
            if !grid.is_empty() {
                lines.push(grid);
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("{} {}", "Powered by".dimmed(), "PokéAPI".yellow().bold()));
    lines.join("\n")
}

fn paint_fg(text: &str, swatch: Swatch) -> String {
    let (r, g, b) = swatch.rgb();
    text.truecolor(r, g, b).to_string()
}

fn badge(type_name: &str) -> String {
    let (r, g, b) = type_swatch(type_name).rgb();
    format!(" {} ", capitalize(type_name))
        .white()
        .bold()
        .on_truecolor(r, g, b)
        .to_string()
}

/// Horizontal bar `width` cells wide, filled to `percent`.
pub fn stat_bar(percent: f64, width: usize, swatch: Swatch) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "{}{}",
        paint_fg(&"█".repeat(filled), swatch),
        "░".repeat(width - filled).dimmed()
    )
}

/// Blank line, then a bold title.
fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.bold().to_string());
}

fn row(lines: &mut Vec<String>, label: &str, value: &str) {
    lines.push(format!(
        "  {} {value}",
        pad_str(label, STAT_LABEL_WIDTH, Alignment::Left, None).dimmed()
    ));
}

/// Detail page for one record, listing at most `move_count` moves.
pub fn detail_page(detail: &PokemonDetail, move_count: usize) -> String {
    let badges: Vec<String> = detail.type_names().into_iter().map(badge).collect();
    let mut lines = vec![
        format!(
            "{} {}",
            display_number(detail.id).dimmed(),
            capitalize(&detail.name).bold()
        ),
        badges.join(" "),
    ];
    if let Some(url) = detail.artwork_url() {
        lines.push(url.dimmed().to_string());
    }

    section(&mut lines, "Abilities");
    for (label, hidden) in detail.ability_labels() {
        if hidden {
            lines.push(format!("  {} {}", capitalize(&label), "(Hidden)".yellow()));
        } else {
            lines.push(format!("  {}", capitalize(&label)));
        }
    }

    section(&mut lines, "Base Stats");
    for stat in detail.stat_lines() {
        lines.push(format!(
            "  {} {:>3} {}",
            pad_str(&capitalize(&stat.label), STAT_LABEL_WIDTH, Alignment::Left, None),
            stat.value,
            stat_bar(stat.percent, STAT_BAR_WIDTH, stat_swatch(&stat.key))
        ));
    }

    section(&mut lines, "Signature Moves");
    let moves = detail.signature_moves(move_count);
    if moves.is_empty() {
        lines.push(format!("  {}", "None".dimmed()));
    }
    lines.extend(moves.iter().map(|name| format!("  • {}", capitalize(name))));

    section(&mut lines, "Physical Traits");
    row(&mut lines, "Height", &format!("{} m", detail.height_m()));
    row(&mut lines, "Weight", &format!("{} kg", detail.weight_kg()));
    row(
        &mut lines,
        "Base Experience",
        &detail
            .base_experience
            .map_or_else(|| "?".to_string(), |xp| xp.to_string()),
    );

    section(&mut lines, "Game Data");
    row(&mut lines, "Order", &format!("#{}", detail.order));
    row(&mut lines, "Species", &capitalize(&detail.species.name));
    row(
        &mut lines,
        "Default Form",
        if detail.is_default { "Yes" } else { "No" },
    );

    lines.join("\n")
}

/// Page shown for an unknown path or a failed detail fetch.
pub fn not_found_page(path: &str) -> String {
    format!(
        "{}\n{}\n\n{} {}",
        "Pokémon not found".red().bold(),
        format!("Nothing lives at {path}").dimmed(),
        "Back to the Pokédex:".dimmed(),
        "/".yellow()
    )
}

/// Strip colour codes, for comparing rendered output.
pub fn plain(rendered: &str) -> String {
    strip_ansi_codes(rendered).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u32, name: &str, spans: Vec<MatchSpan>) -> SearchResult<CatalogEntry> {
        SearchResult {
            item: CatalogEntry::new(id, name, "").unwrap(),
            position: id as usize - 1,
            score: 0.0,
            spans,
        }
    }

    const PIKACHU: &str = r#"{
        "id": 25, "name": "pikachu", "height": 4, "weight": 60,
        "base_experience": 112, "order": 35, "is_default": true,
        "species": {"name": "pikachu", "url": ""},
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": ""}}
        ],
        "moves": [
            {"move": {"name": "mega-punch", "url": ""}},
            {"move": {"name": "pay-day", "url": ""}},
            {"move": {"name": "thunder-punch", "url": ""}}
        ]
    }"#;

    #[test]
    fn test_highlight_keeps_text() {
        let rendered = highlighted_name("charmander", &[MatchSpan::new(0, 3)]);
        assert_eq!(plain(&rendered), "Charmander");
        assert_ne!(rendered, "Charmander");
    }

    #[test]
    fn test_capitalize_first_keeps_length() {
        assert_eq!(capitalize_first("mew"), "Mew");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ßa"), "ßa");
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(status_line(ListingStatus::Showing(3)), "Showing 3 Pokémon");
        assert_eq!(status_line(ListingStatus::NoMatches), "No Pokémon found");
        assert_eq!(status_line(ListingStatus::Loading), "Loading Pokémon...");
    }

    #[test]
    fn test_empty_state_only_for_a_real_query() {
        assert!(empty_state(ListingStatus::NoMatches, "zzz").is_some());
        assert!(empty_state(ListingStatus::NoMatches, "").is_none());
        assert!(empty_state(ListingStatus::Showing(1), "a").is_none());
        let loading = empty_state(ListingStatus::Loading, "").unwrap();
        assert!(plain(&loading).contains("Fetching data from the Pokédex"));
    }

    #[test]
    fn test_card() {
        let rendered = card(&result(4, "charmander", vec![MatchSpan::new(0, 3)]));
        assert_eq!(plain(&rendered), "#004 Charmander");
    }

    #[test]
    fn test_grid_wraps_to_width() {
        let results: Vec<_> = ["bulbasaur", "ivysaur", "venusaur"]
            .iter()
            .enumerate()
            .map(|(i, name)| result(i as u32 + 1, name, Vec::new()))
            .collect();

        let wide = plain(&listing_grid(&results, 0, 200));
        assert_eq!(wide.lines().count(), 1);

        let narrow = plain(&listing_grid(&results, 0, 10));
        assert_eq!(narrow.lines().count(), 3);
        assert_eq!(narrow.lines().next(), Some("#001 Bulbasaur"));

        let capped = plain(&listing_grid(&results, 2, 200));
        assert_eq!(capped.lines().count(), 2);
    }

    #[test]
    fn test_grid_empty() {
        assert_eq!(listing_grid(&[], 0, 80), "");
    }

    #[test]
    fn test_listing_page_no_matches() {
        let page = plain(&listing_page(ListingStatus::NoMatches, "zzz", &[], 0, 80));
        assert!(page.contains("No Pokémon found"));
        assert!(page.contains("Try searching for a different Pokémon name"));
        assert!(page.ends_with("Powered by PokéAPI"));
    }

    #[test]
    fn test_stat_bar_widths() {
        assert_eq!(plain(&stat_bar(50.0, 10, Swatch::Red)), "█████░░░░░");
        assert_eq!(plain(&stat_bar(120.0, 4, Swatch::Red)), "████");
        assert_eq!(plain(&stat_bar(0.0, 3, Swatch::Red)), "░░░");
    }

    #[test]
    fn test_detail_page_sections() {
        let detail: PokemonDetail = serde_json::from_str(PIKACHU).unwrap();
        let page = plain(&detail_page(&detail, 2));

        assert!(page.starts_with("#025 Pikachu"));
        assert!(page.contains(" Electric "));
        assert!(page.contains("Lightning Rod (Hidden)"));
        assert!(page.contains("Special Attack"));
        assert!(page.contains("• Mega Punch"));
        assert!(page.contains("• Pay Day"));
        assert!(!page.contains("Thunder Punch"));
        assert!(page.contains("0.4 m"));
        assert!(page.contains("6 kg"));
        assert!(page.contains("#35"));
        assert!(page.contains("Yes"));
    }

    #[test]
    fn test_page_layout_lines() {
        let detail: PokemonDetail = serde_json::from_str(PIKACHU).unwrap();
        let page = plain(&detail_page(&detail, 6));
        assert!(!page.ends_with('\n'));
        assert!(page.contains("\n\nAbilities\n  Static\n"));
        assert!(page.contains("\n\nGame Data\n"));

        let listing = plain(&listing_page(ListingStatus::Loading, "", &[], 0, 80));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "Pokédex");
        assert_eq!(lines[1], "Loading Pokémon...");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_not_found_page() {
        let page = plain(&not_found_page("/pokemon/9999"));
        assert!(page.starts_with("Pokémon not found"));
        assert!(page.contains("/pokemon/9999"));
    }
}
