//! Plain-text table of a [`ViewUpdate`], used by the CLI to inspect renders.

use colored::Colorize;

use crate::render::host::ViewUpdate;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    fn new(header: &str, min_width: usize, max_width: Option<usize>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width,
            max_width,
            alignment,
        }
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    /// Widest cell per column, clamped to the column's bounds. ANSI escapes do
    /// not count towards the width.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cells = self.rows.iter().filter_map(|row| row.get(idx));
                let width = cells
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header).max(column.min_width), usize::max);
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![self.render_row(&header, &widths), rule(&widths, self.padding)];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Builds the Slot / Visible / Label / Action table for one widget update.
pub fn slot_table(update: &ViewUpdate, styled: bool) -> Table {
    let columns = vec![
        TableColumn::new("Slot", 4, None, Alignment::Left),
        TableColumn::new("Visible", 7, None, Alignment::Center),
        TableColumn::new("Label", 5, Some(24), Alignment::Left),
        TableColumn::new("Action", 6, None, Alignment::Left),
    ];

    let rows = update
        .slots
        .iter()
        .map(|slot| {
            let visible = match (slot.visible, styled) {
                (true, true) => "yes".green().to_string(),
                (false, true) => "no".dimmed().to_string(),
                (true, false) => "yes".to_string(),
                (false, false) => "no".to_string(),
            };
            vec![
                slot.id.clone(),
                visible,
                slot.label.clone().unwrap_or_else(|| "-".into()),
                slot.on_click.clone().unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();

    Table {
        columns,
        rows,
        padding: 1,
    }
}

/// Skips a CSI escape sequence starting at `idx`, returning the index after it.
fn skip_escape(bytes: &[u8], mut idx: usize) -> usize {
    idx += 1;
    if idx < bytes.len() && bytes[idx] == b'[' {
        idx += 1;
        while idx < bytes.len() {
            let byte = bytes[idx];
            idx += 1;
            if (0x40..=0x7E).contains(&byte) {
                break;
            }
        }
    }
    idx
}

fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;
    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx = skip_escape(bytes, idx);
            continue;
        }
        match text[idx..].chars().next() {
            Some(ch) => {
                width += 1;
                idx += ch.len_utf8();
            }
            None => break,
        }
    }
    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let target = width - 1;
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut visible = 0;
    let mut result = String::new();
    let mut saw_ansi = false;

    while idx < bytes.len() && visible < target {
        if bytes[idx] == 0x1b {
            let start = idx;
            idx = skip_escape(bytes, idx);
            result.push_str(&text[start..idx]);
            saw_ansi = true;
            continue;
        }
        let Some(ch) = text[idx..].chars().next() else {
            break;
        };
        result.push(ch);
        visible += 1;
        idx += ch.len_utf8();
    }

    result.push('…');
    if saw_ansi {
        result.push_str("\u{1b}[0m");
    }
    result
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let (left, right) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - remaining / 2),
    };
    format!(
        "{}{}{}",
        " ".repeat(padding + left),
        fitted,
        " ".repeat(right + padding)
    )
}

fn rule(widths: &[usize], padding: usize) -> String {
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}
