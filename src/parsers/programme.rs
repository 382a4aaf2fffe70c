use crate::viewmodel::ProgrammeBlock;

/// Bullet markers the generation service likes to prefix lines with
const BULLET_MARKERS: &[char] = &['•', '-', '–', '—'];

/// Split a free-text programme block into its labeled sub-fields.
///
/// Each line is expected to look like `• Fréquence: 3x/semaine`. Label
/// matching is case-insensitive and order-independent; the first matching
/// line per label wins, and "Exemples guidés" takes priority over plain
/// "Exemples". Lines matching no known label are ignored, and labels with
/// no matching line stay absent.
pub fn parse_programme_block(text: &str) -> ProgrammeBlock {
    if text.is_empty() {
        return ProgrammeBlock::default();
    }

    let lines: Vec<&str> = text.lines().map(strip_bullet).collect();

    ProgrammeBlock {
        frequence: labeled_value(&lines, "Fréquence"),
        intensite: labeled_value(&lines, "Intensité"),
        temps: labeled_value(&lines, "Temps"),
        type_: labeled_value(&lines, "Type"),
        exemples: labeled_value(&lines, "Exemples guidés")
            .or_else(|| labeled_value(&lines, "Exemples")),
    }
}

/// Trim the line and remove one leading bullet marker plus at most one
/// following whitespace character
fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix(BULLET_MARKERS) {
        Some(rest) => rest.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(rest),
        None => trimmed,
    }
}

/// Find the first line starting with `label` (case-insensitive) and return
/// everything after the first colon, trimmed. Colons inside the value are
/// preserved.
fn labeled_value(lines: &[&str], label: &str) -> Option<String> {
    let needle = label.to_lowercase();
    let line = lines
        .iter()
        .find(|line| line.to_lowercase().starts_with(&needle))?;

    let value = match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => "",
    };
    Some(value.to_string())
}
