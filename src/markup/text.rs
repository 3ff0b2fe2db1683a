use super::entities::decode_entities;

/// Decode entities, collapse whitespace runs to one space and trim.
pub fn normalize(s: &str) -> String {
    collapse_whitespace(&decode_entities(s))
}

/// Drop everything between `<` and `>` and normalize what is left.
///
/// Tags are removed before entities are decoded, so an escaped `&lt;b&gt;`
/// survives as literal text.
pub fn text_of(markup: &str) -> String {
    normalize(&strip_tags(markup))
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // keep words on either side of a tag apart
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// ASCII whitespace only; NBSP and other Unicode spaces are text.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize("  Iron \t\n  Ingot  "), "Iron Ingot");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_keeps_non_ascii_spaces() {
        assert_eq!(normalize("a\u{a0}b"), "a\u{a0}b");
        assert_eq!(normalize(" \u{a0} "), "\u{a0}");
        assert_eq!(normalize("x\u{2003}\r\n y"), "x\u{2003} y");
    }

    #[test]
    fn test_normalize_decodes_entities() {
        assert_eq!(normalize("Nuts &amp;\n Bolts"), "Nuts & Bolts");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "  a  b  ",
            "Tom &amp; Jerry",
            "tab\there",
            "&lt;tag&gt;  ",
            "already normal",
            "\n\n",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_decodes_one_level_per_call() {
        // an escaped escape only unwraps one layer each time
        let once = normalize("&amp;lt;");
        assert_eq!(once, "&lt;");
        assert_eq!(normalize(&once), "<");
    }

    #[test]
    fn test_text_of_strips_markup() {
        assert_eq!(
            text_of("<p>Heavy <b>Armor</b>\n  Block</p>"),
            "Heavy Armor Block"
        );
        assert_eq!(text_of("<span>Qty</span>12"), "Qty 12");
    }

    #[test]
    fn test_text_of_keeps_escaped_markup_as_text() {
        assert_eq!(text_of("<i>&lt;b&gt;</i>"), "<b>");
    }
}
