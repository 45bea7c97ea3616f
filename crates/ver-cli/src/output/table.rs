#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_status(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    // Multi-line cells (policy text, summaries) collapse onto one line.
    let flat = value.replace(['\n', '\r', '\t'], " ");
    if flat.chars().count() <= width {
        return flat;
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = flat.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// ANSI color for compliance verdicts and severities.
fn status_color(value: &str) -> Option<&'static str> {
    match value {
        "COMPLIANT" | "Low" | "ok" | "true" => Some("32"),
        "NEEDS_REVIEW" | "Medium" => Some("33"),
        "NON_COMPLIANT" | "ANALYSIS_FAILED" | "High" | "failed" => Some("31"),
        _ => None,
    }
}

fn colorize_status(padded: &str, plain: &str) -> String {
    match status_color(plain.trim()) {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_entity_table(
            &["name", "audit_entries"],
            &[vec!["Default Project".into(), "3".into()]],
            PLAIN,
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.ends_with(" 3"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let long = "We store user data indefinitely and share it with partners.".to_string();
        let table = render_entity_table(
            &["id", "policy_text"],
            &[vec!["audit-1a2b3c4d".into(), long]],
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn newlines_do_not_break_rows() {
        let table = render_entity_table(&["text"], &[vec!["line one\n\nline two".into()]], PLAIN);
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn verdicts_are_colored_when_enabled() {
        let table = render_entity_table(
            &["status"],
            &[vec!["NON_COMPLIANT".into()], vec!["COMPLIANT".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mNON_COMPLIANT"));
        assert!(table.contains("\u{1b}[32mCOMPLIANT"));
    }
}
