//! Markers, tag families and attribute names the extractors depend on.
//!
//! The source site's markup is unversioned. When it drifts, this table is
//! the only thing that should need editing; the scanning logic stays put.
//! Rows can be overridden from configuration (see [`crate::config`]).

use serde::{Deserialize, Serialize};

/// One bounded element: where it opens, which tag family may nest inside
/// it, and what closes it. An empty `nest` means the element never nests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRule {
    pub marker: String,
    #[serde(default)]
    pub nest: String,
    pub close: String,
}

impl RegionRule {
    pub fn new(marker: &str, nest: &str, close: &str) -> Self {
        Self {
            marker: marker.to_string(),
            nest: nest.to_string(),
            close: close.to_string(),
        }
    }
}

/// The full markup table for listing and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupLayout {
    // Listing page
    /// Marker that starts every catalog card
    pub card_marker: String,
    /// Attribute carrying the numeric catalog id
    pub id_attr: String,
    /// Anchor holding the display name
    pub title: RegionRule,
    /// Attribute on the title anchor holding the link target
    pub link_attr: String,
    /// Text that precedes the author anchor
    pub author_cue: String,
    pub author_anchor: RegionRule,
    pub tag_list: RegionRule,
    pub tag_item: RegionRule,

    // Detail page
    pub payload: RegionRule,
    pub requirements: RegionRule,
    /// Marker that starts every entry of the requirements list
    pub requirement_marker: String,
    pub recipes: RegionRule,
    /// Marker that starts every entry of a recipes sub-list
    pub recipe_marker: String,
    pub quantity: RegionRule,
    /// Attribute whose value is the canonical display name of a component
    pub tooltip_attr: String,
    pub tag_cloud: RegionRule,
    pub description: RegionRule,
    /// Container one level inside `description` that holds the text
    pub description_inner: RegionRule,
}

impl Default for MarkupLayout {
    fn default() -> Self {
        Self {
            card_marker: r#"<div class="catalog-card""#.to_string(),
            id_attr: "data-id".to_string(),
            title: RegionRule::new(r#"<a class="card-title""#, "", "</a>"),
            link_attr: "href".to_string(),
            author_cue: "card-author".to_string(),
            author_anchor: RegionRule::new("<a", "", "</a>"),
            tag_list: RegionRule::new(r#"<ul class="tag-list""#, "<ul", "</ul>"),
            tag_item: RegionRule::new("<li", "<li", "</li>"),

            payload: RegionRule::new(r#"<textarea class="payload""#, "", "</textarea>"),
            requirements: RegionRule::new(r#"<ul class="requirements""#, "<ul", "</ul>"),
            requirement_marker: r#"<li class="requirement""#.to_string(),
            recipes: RegionRule::new(r#"<ul class="recipes""#, "<ul", "</ul>"),
            recipe_marker: r#"<li class="recipe""#.to_string(),
            quantity: RegionRule::new(r#"<span class="quantity""#, "<span", "</span>"),
            tooltip_attr: "data-tooltip".to_string(),
            tag_cloud: RegionRule::new(r#"<div class="tag-cloud""#, "<div", "</div>"),
            description: RegionRule::new(r#"<div class="description""#, "<div", "</div>"),
            description_inner: RegionRule::new("<div", "<div", "</div>"),
        }
    }
}
