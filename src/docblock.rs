//! PHPDoc block formatting and text layout helpers.
//!
//! These are the string utilities the printer is built on: turning comment
//! text into a `/** ... */` block, indenting nested code, and normalising
//! the final document.

// ─── Doc comments ───────────────────────────────────────────────────────────

/// Wrap `text` in a PHPDoc block.
///
///   - empty (or whitespace-only) text produces nothing;
///   - a single line produces `/** text */`;
///   - multiple lines produce a block with ` * ` prefixes.
///
/// The result always ends with a newline unless it is empty.
pub fn format_doc_comment(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if !text.contains('\n') {
        return format!("/** {text} */\n");
    }

    let mut out = String::from("/**\n");
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */\n");
    out
}

// ─── Layout ─────────────────────────────────────────────────────────────────

/// Prefix every non-empty line of `text` with `unit` repeated `level` times.
pub fn indent(text: &str, unit: &str, level: usize) -> String {
    if level == 0 {
        return text.to_string();
    }
    let prefix = unit.repeat(level);
    let mut out = String::with_capacity(text.len() + prefix.len() * 4);
    for line in text.split_inclusive('\n') {
        if !line.trim_end_matches(['\r', '\n']).is_empty() {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    out
}

/// Strip trailing whitespace from every line, drop trailing blank lines and
/// end the text with exactly one newline.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_comment() {
        assert_eq!(format_doc_comment("  @var int "), "/** @var int */\n");
        assert_eq!(format_doc_comment("\n\n"), "");
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            format_doc_comment("Summary.\n\n@return int\n"),
            "/**\n * Summary.\n *\n * @return int\n */\n"
        );
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb\n", "\t", 1), "\ta\n\n\tb\n");
        assert_eq!(indent("a\nb", "  ", 2), "    a\n    b");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a  \nb\t\n\n\n"), "a\nb\n");
        assert_eq!(normalize("x"), "x\n");
    }
}
