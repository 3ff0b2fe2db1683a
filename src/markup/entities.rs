/// Character references the target pages actually emit, in match order.
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Decode the five common HTML character references in a single pass.
///
/// Output of one substitution is never re-examined, so `&amp;lt;` becomes
/// `&lt;` and not `<`. Anything else starting with `&` is copied through.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, ch)) => {
                out.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_known_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry &lt;3 &quot;hi&quot; it&#39;s &gt;"),
            "Tom & Jerry <3 \"hi\" it's >"
        );
    }

    #[test]
    fn test_single_pass_does_not_double_decode() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(decode_entities("a&nbsp;b &copy; &"), "a&nbsp;b &copy; &");
        assert_eq!(decode_entities("trailing &am"), "trailing &am");
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        assert_eq!(decode_entities("Größe &amp; Ø"), "Größe & Ø");
    }
}
