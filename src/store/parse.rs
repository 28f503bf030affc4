// src/store/parse.rs

//! The flat pipe-delimited line format: `KEY|MESSAGE|DELAY_MS`.
//!
//! Parsing is lossy by contract: empty lines and `#` comments are skipped,
//! and any line that does not split into at least two fields is dropped
//! silently. A missing or unparsable delay means 0.

use tracing::debug;

use crate::store::model::Keybind;

const HEADER: &str = "\
# ahkbind configuration
# Format: KEY|MESSAGE|DELAY
# Do not edit while the app is running
";

/// Parse file contents into records, dropping anything unparsable.
pub fn parse_store(contents: &str) -> Vec<Keybind> {
    contents
        .lines()
        .filter(|line| {
            let t = line.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Keybind> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        debug!(line, "dropping unparsable keybind line");
        return None;
    }
    let delay_ms = parts
        .get(2)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    Some(Keybind {
        key: parts[0].trim().to_string(),
        message: parts[1].trim().to_string(),
        delay_ms,
    })
}

/// Serialize records back into the on-disk format, header included.
pub fn serialize_store(binds: &[Keybind]) -> String {
    let mut out = String::from(HEADER);
    for bind in binds {
        out.push_str(&format!("{}|{}|{}\n", bind.key, bind.message, bind.delay_ms));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let binds = parse_store("F5|/heal|250\n^b|hello|0\n");
        assert_eq!(binds.len(), 2);
        assert_eq!(binds[0], Keybind::new("F5", "/heal", 250));
        assert_eq!(binds[1], Keybind::new("^b", "hello", 0));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let binds = parse_store("# header\n\n  \nF5|/heal|100\n# trailing\n");
        assert_eq!(binds.len(), 1);
        assert_eq!(binds[0].key, "F5");
    }

    #[test]
    fn drops_lines_with_too_few_fields() {
        let binds = parse_store("justakey\nF5|/heal\n");
        assert_eq!(binds.len(), 1);
        assert_eq!(binds[0], Keybind::new("F5", "/heal", 0));
    }

    #[test]
    fn bad_delay_defaults_to_zero() {
        let binds = parse_store("F5|/heal|soon\nF6|/armor|-3\n");
        assert_eq!(binds[0].delay_ms, 0);
        assert_eq!(binds[1].delay_ms, 0);
    }

    #[test]
    fn fields_are_trimmed() {
        let binds = parse_store("  F5  |  /heal me  |  75 \n");
        assert_eq!(binds[0], Keybind::new("F5", "/heal me", 75));
    }

    #[test]
    fn roundtrip_preserves_order() {
        let binds = vec![
            Keybind::new("F5", "/heal", 250),
            Keybind::new("XButton1", "gg wp", 0),
        ];
        let text = serialize_store(&binds);
        assert!(text.starts_with("# ahkbind configuration"));
        assert_eq!(parse_store(&text), binds);
    }
}
