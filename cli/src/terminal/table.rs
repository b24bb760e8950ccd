//! Box-drawing table output for the final host report.

use unicode_width::UnicodeWidthStr;

/// Renders `rows` under `headers`, sizing each column to its widest cell.
pub fn render<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths = [0usize; N];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = UnicodeWidthStr::width(*header);
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut out = String::new();
    push_border(&mut out, &widths, '╭', '┬', '╮');
    push_cells(&mut out, &widths, headers.map(String::from).each_ref());
    push_border(&mut out, &widths, '├', '┼', '┤');
    for row in rows {
        push_cells(&mut out, &widths, row.each_ref());
    }
    push_border(&mut out, &widths, '╰', '┴', '╯');
    out
}

fn push_border<const N: usize>(
    out: &mut String,
    widths: &[usize; N],
    left: char,
    junction: char,
    right: char,
) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn push_cells<const N: usize>(out: &mut String, widths: &[usize; N], cells: [&String; N]) {
    for (width, cell) in widths.iter().zip(cells) {
        let pad = width - UnicodeWidthStr::width(cell.as_str());
        out.push_str("│ ");
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
    }
    out.push_str("│\n");
}
