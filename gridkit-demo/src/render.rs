//! Plain-text rendering of projected views.

use gridkit::field::{Affordance, FieldProjection, FieldProps};
use gridkit::table::{ColumnWidth, HeaderCheck, TableView};

const AUTO_WIDTH: usize = 18;

fn width_of(width: ColumnWidth) -> usize {
    match width {
        ColumnWidth::Fixed(w) => usize::from(w),
        ColumnWidth::Flex(w) => 12 * usize::from(w.max(1)),
        ColumnWidth::Auto => AUTO_WIDTH,
    }
}

fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn table(view: &TableView) -> String {
    let sep = if view.bordered { " | " } else { "  " };
    let mut lines = Vec::new();

    let mut header = Vec::new();
    if view.selectable {
        header.push(
            match view.header_check {
                HeaderCheck::Checked => "[x]",
                HeaderCheck::Indeterminate => "[-]",
                HeaderCheck::Unchecked => "[ ]",
            }
            .to_string(),
        );
    }
    for cell in &view.headers {
        let title = match cell.direction.indicator() {
            Some(glyph) => format!("{} {}", cell.title, glyph),
            None => cell.title.clone(),
        };
        header.push(pad(&title, width_of(cell.width)));
    }
    lines.push(header.join(sep));

    if let Some(placeholder) = &view.placeholder {
        lines.push(format!("  {}", placeholder));
    }

    for row in &view.rows {
        let mut line = Vec::new();
        if view.selectable {
            line.push(checkbox(row.selected).to_string());
        }
        for (cell, text) in view.headers.iter().zip(&row.cells) {
            line.push(pad(text, width_of(cell.width)));
        }
        let mut text = line.join(sep);
        if row.striped {
            text.push_str("  ~");
        }
        lines.push(text);
    }

    if view.selectable && !view.is_empty() {
        lines.push(format!("  {} of {} selected", view.selected_count(), view.rows.len()));
    }
    if view.loading {
        lines.push("  (loading)".to_string());
    }

    lines.join("\n")
}

pub fn field(props: &FieldProps, projection: &FieldProjection) -> String {
    let shown = if projection.effective_kind.is_masked() {
        "•".repeat(props.value.chars().count())
    } else {
        props.value.clone()
    };
    let affordances: Vec<&str> = projection
        .affordances
        .visible()
        .into_iter()
        .map(|a| match a {
            Affordance::Clear => "clear",
            Affordance::ToggleVisibility => "show/hide",
            Affordance::BusyIndicator => "busy",
        })
        .collect();

    let mut out = format!(
        "{} [{} {} {:?}] \"{}\" <{}>",
        props.label,
        projection.variant,
        projection.size,
        projection.mode,
        shown,
        affordances.join(", ")
    );
    if let Some(error) = &projection.error {
        out.push_str(&format!("\n  ! {}", error));
    }
    out
}
