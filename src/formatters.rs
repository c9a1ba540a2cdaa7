use crate::report::Report;

/// Render the first `limit` rows as an aligned text table
pub fn format_report_table(report: &Report, limit: usize) -> String {
    let headers = report.headers();
    let rows = report.display_rows(limit);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", report.kind.label()));

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    output.push_str(&format_line(&header_cells, &widths));

    let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    output.push_str(&format!("{}\n", "-".repeat(total_width)));

    for row in &rows {
        output.push_str(&format_line(row, &widths));
    }

    output.push_str(&preview_status(rows.len(), report.len()));
    output.push('\n');
    output
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

pub fn preview_status(shown: usize, total: usize) -> String {
    format!("Previewing {shown} of {total} rows.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlbumMap, CardMap, CardRecord};
    use crate::report::{build_report, ReportKind};

    fn cards() -> CardMap {
        let mut cards = CardMap::new();
        for (id, boosters, level) in [("Hulk", 40, 12), ("Ant Man", 5, 30), ("Nova", 7, 2)] {
            let mut card = CardRecord::new(id);
            card.boosters = boosters;
            card.mastery_level = level;
            cards.insert(id.to_string(), card);
        }
        cards
    }

    #[test]
    fn test_table_has_label_header_and_status() {
        let report = build_report(&cards(), &AlbumMap::new(), ReportKind::BoostersThenMastery);
        let output = format_report_table(&report, 10);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], ReportKind::BoostersThenMastery.label());
        assert!(lines[1].starts_with("CardDefId"));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("Hulk"));
        assert_eq!(lines.last().copied(), Some("Previewing 3 of 3 rows."));
    }

    #[test]
    fn test_columns_are_aligned() {
        let report = build_report(&cards(), &AlbumMap::new(), ReportKind::BoostersThenMastery);
        let output = format_report_table(&report, 10);
        let lines: Vec<&str> = output.lines().collect();

        // "CardDefId" is the widest cell in the first column
        let boosters_col = lines[1].find("Boosters").unwrap();
        assert_eq!(boosters_col, "CardDefId".len() + 2);
        assert_eq!(lines[5].find('5').unwrap(), boosters_col);
    }

    #[test]
    fn test_limit_truncates_rows() {
        let report = build_report(&cards(), &AlbumMap::new(), ReportKind::MasteryThenBoosters);
        let output = format_report_table(&report, 1);
        assert!(output.contains("Ant Man"));
        assert!(!output.contains("Hulk"));
        assert!(output.ends_with("Previewing 1 of 3 rows.\n"));
    }
}
