//! Dashboard markup for role tables.
//!
//! The dashboard viewer reads a `<table>` whose rows are `<tr>` elements of
//! self-closing `<td value='...'/>` cells. Header and host cells carry
//! `fontattribute='bold'`. The layout below is what the viewer has always
//! been fed; keep it byte-for-byte.

use std::borrow::Cow;
use std::fmt::Write;

use crate::error::Result;

use super::table::{MissingValuePolicy, RoleTable};

/// Render one role table as a dashboard document.
pub fn render_markup(table: &RoleTable<'_>, policy: MissingValuePolicy) -> Result<String> {
    let rows = table.rows(policy)?;
    let mut doc = String::from("<table sorttable=\"yes\"><tr>\n");

    bold_cell(&mut doc, table.role().label());
    for column in table.columns() {
        bold_cell(&mut doc, column);
    }
    doc.push_str("</tr>\n");

    for row in rows {
        doc.push_str("<tr>\n");
        bold_cell(&mut doc, row.host);
        for value in row.values {
            let _ = writeln!(doc, "  <td value='{}'/>", escape_attr(value));
        }
        doc.push_str("</tr>\n");
    }

    doc.push_str("</table>");
    Ok(doc)
}

fn bold_cell(doc: &mut String, value: &str) {
    let _ = writeln!(doc, "  <td fontattribute='bold' value='{}'/>", escape_attr(value));
}

/// Escape a string for use inside a quoted XML attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
