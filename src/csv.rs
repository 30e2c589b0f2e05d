// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

pub const SEP: char = ',';
/// Lets spreadsheet tools detect UTF-8.
pub const BOM: &str = "\u{feff}";

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). A leading BOM is skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                // blank line
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{SEP}")?; }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// BOM, header line, then one line per row.
pub fn write_table<W: Write>(mut w: W, headers: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    w.write_all(BOM.as_bytes())?;
    write_row(&mut w, headers)?;
    for r in rows {
        write_row(&mut w, r)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row!["a", "b,c", "say \"hi\"", ""]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\",\n");
    }

    #[test]
    fn table_starts_with_bom() {
        let mut buf = Vec::new();
        write_table(&mut buf, &row!["名次"], &[row!["1"]]).unwrap();
        assert!(buf.starts_with(&[0xEF, 0xBB, 0xBF]));
        assert_eq!(parse_rows(std::str::from_utf8(&buf).unwrap()), vec![row!["名次"], row!["1"]]);
    }

    #[test]
    fn parse_keeps_empty_trailing_cells_and_crlf() {
        let rows = parse_rows("a,,\r\n\"x\ny\",2,\n");
        assert_eq!(rows, vec![row!["a", "", ""], row!["x\ny", "2", ""]]);
    }

    #[test]
    fn parse_without_final_newline() {
        assert_eq!(parse_rows("1,2"), vec![row!["1", "2"]]);
    }
}
