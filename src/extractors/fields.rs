//! Per-field matchers applied to one bounded section.
//!
//! Every matcher is total: a missing field comes back as an empty string,
//! an empty vector or zero.

use log::debug;
use regex::Regex;

use super::Extractor;
use crate::markup::{decode_entities, locate, locate_span, normalize, split_sections, text_of};

/// Compiled attribute patterns for one layout.
#[derive(Debug, Clone)]
pub(crate) struct AttrPatterns {
    id: Regex,
    link: Regex,
    tooltip: Regex,
}

impl AttrPatterns {
    pub(crate) fn new(id_attr: &str, link_attr: &str, tooltip_attr: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            id: attr_regex(id_attr)?,
            link: attr_regex(link_attr)?,
            tooltip: attr_regex(tooltip_attr)?,
        })
    }
}

/// `name="value"` or `name='value'`, preceded by whitespace.
fn attr_regex(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?:^|\s){}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(name)
    ))
}

fn first_attr(re: &Regex, section: &str) -> Option<String> {
    re.captures(section)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
}

/// First run of ASCII digits in the text of `markup`, or 0 when there is none.
///
/// Runs too long for a `u32` saturate.
pub fn extract_quantity(markup: &str) -> u32 {
    let text = text_of(markup);
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

impl Extractor {
    /// Numeric identifier attribute. Non-numeric values count as absent.
    pub fn id(&self, section: &str) -> String {
        match first_attr(&self.patterns.id, section) {
            Some(raw) => {
                let value = raw.trim();
                if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
                    value.to_string()
                } else {
                    debug!("Ignoring non-numeric {}={:?}", self.layout.id_attr, raw);
                    String::new()
                }
            }
            None => String::new(),
        }
    }

    /// Text of the title anchor.
    pub fn display_name(&self, section: &str) -> String {
        let rule = &self.layout.title;
        locate(section, &rule.marker, &rule.nest, &rule.close)
            .map(text_of)
            .unwrap_or_default()
    }

    /// Text of the first anchor after the author cue.
    pub fn attribution(&self, section: &str) -> String {
        let Some(cue) = section.find(&self.layout.author_cue) else {
            return String::new();
        };
        let rule = &self.layout.author_anchor;
        locate(&section[cue..], &rule.marker, &rule.nest, &rule.close)
            .map(text_of)
            .unwrap_or_default()
    }

    /// Link attribute of the title anchor's opening tag.
    ///
    /// Links elsewhere in the section are ignored; the last card's section
    /// runs on into the pager.
    pub fn link_target(&self, section: &str) -> String {
        let Some(start) = section.find(&self.layout.title.marker) else {
            return String::new();
        };
        let tag = &section[start..];
        let tag = tag.find('>').map_or(tag, |end| &tag[..end]);
        first_attr(&self.patterns.link, tag)
            .map(|href| decode_entities(href.trim()))
            .unwrap_or_default()
    }

    /// Text of every item in the tag list, in order, empties skipped.
    pub fn tags(&self, section: &str) -> Vec<String> {
        let list = &self.layout.tag_list;
        let Ok(region) = locate(section, &list.marker, &list.nest, &list.close) else {
            return Vec::new();
        };

        let item = &self.layout.tag_item;
        split_sections(region, &item.marker)
            .into_iter()
            .map(|chunk| match locate(chunk, &item.marker, &item.nest, &item.close) {
                Ok(inner) => text_of(inner),
                // unclosed item: whatever follows the marker up to the next one
                Err(_) => text_of(chunk.find('>').map_or("", |end| &chunk[end + 1..])),
            })
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// First tooltip attribute value, normalized.
    pub fn tooltip(&self, section: &str) -> String {
        first_attr(&self.patterns.tooltip, section)
            .map(|value| normalize(&value))
            .unwrap_or_default()
    }

    /// Every non-empty tooltip attribute value in `region`, in order.
    pub fn tooltips(&self, region: &str) -> Vec<String> {
        self.patterns
            .tooltip
            .captures_iter(region)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| normalize(m.as_str()))
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Quantity element of the section, read with [`extract_quantity`].
    pub fn quantity(&self, section: &str) -> u32 {
        let rule = &self.layout.quantity;
        match locate_span(section, &rule.marker, &rule.nest, &rule.close) {
            Ok(span) => extract_quantity(span.inner(section)),
            Err(miss) => {
                debug!("No quantity in section: {}", miss);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::default()
    }

    #[test]
    fn test_extract_quantity() {
        assert_eq!(extract_quantity("<span>Qty</span> 12 units"), 12);
        assert_eq!(extract_quantity("no numbers"), 0);
        assert_eq!(extract_quantity("Qty: 5"), 5);
        assert_eq!(extract_quantity("x3 then 40"), 3);
        assert_eq!(extract_quantity(""), 0);
        assert_eq!(extract_quantity("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_id_requires_digits() {
        let e = extractor();
        assert_eq!(e.id(r#"<div class="catalog-card" data-id="1234">"#), "1234");
        assert_eq!(e.id(r#"<div class="catalog-card" data-id=' 77 '>"#), "77");
        assert_eq!(e.id(r#"<div class="catalog-card" data-id="abc">"#), "");
        assert_eq!(e.id(r#"<div class="catalog-card">"#), "");
    }

    #[test]
    fn test_id_attribute_name_is_matched_whole() {
        let e = extractor();
        assert_eq!(e.id(r#"<div xdata-id="5" data-id="6">"#), "6");
    }

    #[test]
    fn test_display_name_and_link() {
        let e = extractor();
        let card = r#"<div class="catalog-card" data-id="1">
            <a href="/other">skip</a>
            <a class="card-title" href="/item?id=1&amp;lang=en">  Small  &amp; Fast </a>
        </div>"#;
        assert_eq!(e.display_name(card), "Small & Fast");
        assert_eq!(e.link_target(card), "/item?id=1&lang=en");
    }

    #[test]
    fn test_link_only_from_title_anchor() {
        let e = extractor();
        assert_eq!(e.link_target(r#"<div><a href="/first">x</a></div>"#), "");
        assert_eq!(e.link_target("<div>no links</div>"), "");
        assert_eq!(
            e.link_target(r#"<a class="card-title">x</a><a href="/elsewhere">y</a>"#),
            ""
        );
    }

    #[test]
    fn test_attribution_uses_anchor_after_cue() {
        let e = extractor();
        let card = r#"<a href="/x">Not me</a><div class="card-author">by <a href="/u/9">Ada   L.</a></div>"#;
        assert_eq!(e.attribution(card), "Ada L.");
        assert_eq!(e.attribution("<div>anonymous</div>"), "");
    }

    #[test]
    fn test_attribution_skips_tags_sharing_the_anchor_prefix() {
        let e = extractor();
        let card = r#"<div class="card-author"><abbr>by</abbr> <a href="/u">Ada</a></div>"#;
        assert_eq!(e.attribution(card), "Ada");

        let card = r#"<div class="card-author"><aside>note</aside><a>Bo</a></div>"#;
        assert_eq!(e.attribution(card), "Bo");
    }

    #[test]
    fn test_tags_in_order() {
        let e = extractor();
        let card = r#"<ul class="tag-list"><li>Ship</li><li> </li><li><b>Large</b> Grid</li></ul>"#;
        assert_eq!(e.tags(card), vec!["Ship", "Large Grid"]);
        assert!(e.tags("<ul><li>orphan</li></ul>").is_empty());
    }

    #[test]
    fn test_tags_tolerate_unclosed_items() {
        let e = extractor();
        let card = r#"<ul class="tag-list"><li>Ship<li>Base</ul>"#;
        assert_eq!(e.tags(card), vec!["Ship", "Base"]);
    }

    #[test]
    fn test_tooltips() {
        let e = extractor();
        let region = r#"<div data-tooltip="Ship"></div><div><div data-tooltip='Rover &amp; Car'></div></div><i data-tooltip=""></i>"#;
        assert_eq!(e.tooltip(region), "Ship");
        assert_eq!(e.tooltips(region), vec!["Ship", "Rover & Car"]);
    }

    #[test]
    fn test_quantity_container_with_nested_span() {
        let e = extractor();
        let section = r#"<span class="quantity"><span class="label">Qty</span> 12</span>"#;
        assert_eq!(e.quantity(section), 12);
        assert_eq!(e.quantity("<span>7</span>"), 0);
    }
}
