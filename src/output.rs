//! Terminal output for keyword sets, query terms and search hits

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::index::{IndexedDocument, SearchableDocument};

/// Print keywords one per line
pub fn print_keywords<W: WriteColor>(out: &mut W, keywords: &[String]) -> io::Result<()> {
    for keyword in keywords {
        writeln!(out, "{}", keyword)?;
    }
    Ok(())
}

/// Print query terms with their priority position.
/// Terms cut by the filter cap are reported after the list.
pub fn print_terms<W: WriteColor>(out: &mut W, terms: &[String], dropped: usize) -> io::Result<()> {
    for (pos, term) in terms.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>2}", pos + 1)?;
        out.reset()?;
        writeln!(out, " {}", term)?;
    }

    if dropped > 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "({} more terms dropped by the filter cap)", dropped)?;
        out.reset()?;
    }
    Ok(())
}

/// Print search hits: the document id followed by the keywords that matched
pub fn print_hits<D, W>(out: &mut W, hits: &[&IndexedDocument<D>], terms: &[String]) -> io::Result<()>
where
    D: SearchableDocument,
    W: WriteColor,
{
    for hit in hits {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", hit.document().id())?;
        out.reset()?;
        write!(out, ":")?;

        let matched = terms
            .iter()
            .filter(|term| hit.search_keywords().contains(*term));
        for (i, term) in matched.enumerate() {
            write!(out, "{}", if i == 0 { " " } else { ", " })?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{}", term)?;
            out.reset()?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Car;
    use termcolor::Buffer;

    fn text(buf: &Buffer) -> String {
        String::from_utf8(buf.as_slice().to_vec()).unwrap()
    }

    #[test]
    fn test_print_terms_plain() {
        let mut buf = Buffer::no_color();
        let terms = vec!["tesla model".to_string(), "tesla".to_string()];
        print_terms(&mut buf, &terms, 0).unwrap();
        assert_eq!(text(&buf), " 1 tesla model\n 2 tesla\n");
    }

    #[test]
    fn test_print_terms_reports_dropped() {
        let mut buf = Buffer::no_color();
        print_terms(&mut buf, &["a".to_string()], 4).unwrap();
        assert!(text(&buf).ends_with("(4 more terms dropped by the filter cap)\n"));
    }

    #[test]
    fn test_print_hits() {
        let car = IndexedDocument::new(Car {
            id: "c1".to_string(),
            model: Some("Tesla Model S".to_string()),
            color: Some("Red".to_string()),
            ..Default::default()
        });
        let terms = vec!["tesla".to_string(), "blue".to_string(), "red".to_string()];

        let mut buf = Buffer::no_color();
        print_hits(&mut buf, &[&car], &terms).unwrap();
        assert_eq!(text(&buf), "c1: tesla, red\n");
    }

    #[test]
    fn test_print_hits_colored() {
        let car = IndexedDocument::new(Car {
            id: "c1".to_string(),
            ..Default::default()
        });
        let mut buf = Buffer::ansi();
        print_hits(&mut buf, &[&car], &[]).unwrap();
        assert!(text(&buf).contains("\x1b["));
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        print_json(&mut out, &["a", "b"]).unwrap();
        let value: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, ["a", "b"]);
    }
}
