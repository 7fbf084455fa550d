//! Box drawing for panels, tables, rules and bulleted lists
//!
//! Every renderer returns a `String` so handlers decide where it goes.
//! Widths are measured on the unstyled text and color is applied after
//! padding, which keeps borders aligned with or without ANSI styling.

use colored::{Color, Colorize as _};

/// Width of a horizontal rule when no content dictates one
pub const RULE_WIDTH: usize = 60;

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Span {
    #[must_use]
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    #[must_use]
    pub fn colored<S: Into<String>>(text: S, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn paint(&self) -> String {
        let mut styled = self.text.as_str().normal();
        if let Some(color) = self.color {
            styled = styled.color(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// One rendered line made of styled spans
pub type Line = Vec<Span>;

fn line_width(line: &[Span]) -> usize {
    line.iter().map(Span::width).sum()
}

fn paint_line(line: &[Span]) -> String {
    line.iter().map(Span::paint).collect()
}

/// Border glyph set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Double,
    Rounded,
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    tee_down: char,
    tee_up: char,
    tee_left: char,
    tee_right: char,
    cross: char,
}

impl Border {
    const fn glyphs(self) -> Glyphs {
        match self {
            Self::Double => Glyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                tee_down: '╦',
                tee_up: '╩',
                tee_left: '╣',
                tee_right: '╠',
                cross: '╬',
            },
            Self::Rounded => Glyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                tee_down: '┬',
                tee_up: '┴',
                tee_left: '┤',
                tee_right: '├',
                cross: '┼',
            },
        }
    }
}

/// Render `lines` inside a bordered box with `header` set into the top edge
#[must_use]
pub fn panel(header: &Span, lines: &[Line], border: Border, border_color: Color) -> String {
    let glyphs = border.glyphs();
    let inner = lines
        .iter()
        .map(|line| line_width(line))
        .max()
        .unwrap_or(0)
        .max(header.width() + 2);

    let edge = |ch: char, count: usize| ch.to_string().repeat(count).color(border_color).to_string();
    let mut out = String::new();

    // ╔═ Header ═══╗
    let trailing = inner + 2 - header.width() - 3;
    out.push_str(&edge(glyphs.top_left, 1));
    out.push_str(&edge(glyphs.horizontal, 1));
    out.push(' ');
    out.push_str(&header.paint());
    out.push(' ');
    out.push_str(&edge(glyphs.horizontal, trailing));
    out.push_str(&edge(glyphs.top_right, 1));
    out.push('\n');

    for line in lines {
        let padding = inner - line_width(line);
        out.push_str(&edge(glyphs.vertical, 1));
        out.push(' ');
        out.push_str(&paint_line(line));
        out.push_str(&" ".repeat(padding));
        out.push(' ');
        out.push_str(&edge(glyphs.vertical, 1));
        out.push('\n');
    }

    out.push_str(&edge(glyphs.bottom_left, 1));
    out.push_str(&edge(glyphs.horizontal, inner + 2));
    out.push_str(&edge(glyphs.bottom_right, 1));
    out.push('\n');
    out
}

/// Render a table with centered cells
///
/// Rows shorter than `headers` are padded with empty cells.
#[must_use]
pub fn table(headers: &[Span], rows: &[Vec<Span>], border: Border) -> String {
    let glyphs = border.glyphs();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(Span::width)
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                line.push(mid);
            }
            line.push_str(&glyphs.horizontal.to_string().repeat(width + 2));
        }
        line.push(right);
        line.push('\n');
        line
    };

    let empty = Span::plain("");
    let row_line = |cells: &[Span]| {
        let mut line = String::new();
        line.push(glyphs.vertical);
        for (col, width) in widths.iter().enumerate() {
            let cell = cells.get(col).unwrap_or(&empty);
            let slack = width - cell.width();
            let left = slack / 2;
            line.push(' ');
            line.push_str(&" ".repeat(left));
            line.push_str(&cell.paint());
            line.push_str(&" ".repeat(slack - left));
            line.push(' ');
            line.push(glyphs.vertical);
        }
        line.push('\n');
        line
    };

    let mut out = separator(glyphs.top_left, glyphs.tee_down, glyphs.top_right);
    out.push_str(&row_line(headers));
    out.push_str(&separator(glyphs.tee_right, glyphs.cross, glyphs.tee_left));
    for row in rows {
        out.push_str(&row_line(row));
    }
    out.push_str(&separator(glyphs.bottom_left, glyphs.tee_up, glyphs.bottom_right));
    out
}

/// Render a left-justified horizontal rule carrying `title`
#[must_use]
pub fn rule(title: &Span, width: usize) -> String {
    let lead = "──".to_owned();
    let used = lead.chars().count() + title.width() + 2;
    let tail = "─".repeat(width.saturating_sub(used));
    format!("{lead} {} {tail}\n", title.paint())
}

/// Render one bullet line per item
#[must_use]
pub fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}\n", "•".cyan(), item.as_ref().white()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn panel_lines_share_one_width() {
        plain();
        let rendered = panel(
            &Span::plain("Info"),
            &[
                vec![Span::plain("short")],
                vec![Span::colored("Label:", Color::Yellow), Span::plain(" a longer value")],
            ],
            Border::Double,
            Color::Cyan,
        );

        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == widths[0]), "{rendered}");
        assert!(rendered.starts_with("╔═ Info "));
        assert!(rendered.contains("║ Label: a longer value ║"));
    }

    #[test]
    fn narrow_panel_still_fits_header() {
        plain();
        let rendered = panel(
            &Span::plain("A long header"),
            &[vec![Span::plain("x")]],
            Border::Rounded,
            Color::Cyan,
        );
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{rendered}");
    }

    #[test]
    fn table_centers_cells() {
        plain();
        let rendered = table(
            &[Span::plain("Property"), Span::plain("Value")],
            &[vec![Span::plain("Name"), Span::plain("World")]],
            Border::Rounded,
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "│ Property │ Value │");
        assert_eq!(lines[3], "│   Name   │ World │");
        assert!(lines[0].starts_with('╭'));
        assert!(lines[4].ends_with('╯'));
    }

    #[test]
    fn rule_fills_to_width() {
        plain();
        let rendered = rule(&Span::plain("Items"), 20);
        assert_eq!(rendered.trim_end().chars().count(), 20);
        assert!(rendered.starts_with("── Items "));
    }

    #[test]
    fn bullets_emit_one_line_per_item() {
        plain();
        assert_eq!(bullets(&["a", "b"]), "• a\n• b\n");
    }
}
