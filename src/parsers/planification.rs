use crate::viewmodel::PlanifRow;

/// Parse the weekly plan pseudo-table ("Jour | Séance | Durée | Détails").
///
/// Rows are separated by line breaks and cells by `|`. A first line whose
/// lowercase form contains `"jour |"` is treated as a header and skipped.
/// Lines with fewer than four cells are dropped; cells beyond the fourth
/// are ignored.
pub fn parse_planification_table(text: &str) -> Vec<PlanifRow> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Vec::new();
    };
    let start = usize::from(first.to_lowercase().contains("jour |"));

    lines[start..]
        .iter()
        .filter_map(|line| {
            let cells: Vec<&str> = line.split('|').map(str::trim).collect();
            if cells.len() < 4 {
                return None;
            }
            Some(PlanifRow {
                jour: cells[0].to_string(),
                seance: cells[1].to_string(),
                duree: cells[2].to_string(),
                details: cells[3].to_string(),
            })
        })
        .collect()
}
