use log::debug;

use super::Extractor;
use crate::layout::RegionRule;
use crate::markup::{decode_entities, locate, split_sections, text_of};
use crate::model::{ComponentRequirement, DetailRecord, RecipeEntry};

impl Extractor {
    /// Build a [`DetailRecord`] from a detail page.
    ///
    /// The four parts are extracted independently; a part whose markup is
    /// missing or never closes comes back empty without affecting the rest.
    /// The payload is only looked for when `include_payload` is set.
    pub fn parse_detail(&self, document: &str, include_payload: bool) -> DetailRecord {
        DetailRecord {
            raw_payload: if include_payload {
                self.payload(document)
            } else {
                String::new()
            },
            requirements: self.requirements(document),
            tags: self.detail_tags(document),
            description: self.description(document),
        }
    }

    fn region<'a>(&self, document: &'a str, rule: &RegionRule, what: &str) -> Option<&'a str> {
        match locate(document, &rule.marker, &rule.nest, &rule.close) {
            Ok(region) => Some(region),
            Err(miss) => {
                debug!("No {} region: {}", what, miss);
                None
            }
        }
    }

    /// Entity-decoded payload text, whitespace kept as-is.
    fn payload(&self, document: &str) -> String {
        self.region(document, &self.layout.payload, "payload")
            .map(decode_entities)
            .unwrap_or_default()
    }

    fn requirements(&self, document: &str) -> Vec<ComponentRequirement> {
        let Some(list) = self.region(document, &self.layout.requirements, "requirements") else {
            return Vec::new();
        };

        split_sections(list, &self.layout.requirement_marker)
            .into_iter()
            .filter_map(|entry| self.requirement(entry))
            .collect()
    }

    fn requirement(&self, entry: &str) -> Option<ComponentRequirement> {
        // the entry's own fields come before its recipes sub-list
        let head = entry
            .find(&self.layout.recipes.marker)
            .map_or(entry, |at| &entry[..at]);

        let sub_recipes = self.recipes(entry);
        let name = self.tooltip(head);
        if name.is_empty() {
            debug!(
                "Dropping unnamed requirement along with {} recipes",
                sub_recipes.len()
            );
            return None;
        }

        Some(ComponentRequirement {
            quantity: self.quantity(head),
            name,
            sub_recipes,
        })
    }

    fn recipes(&self, entry: &str) -> Vec<RecipeEntry> {
        if !entry.contains(&self.layout.recipes.marker) {
            return Vec::new();
        }
        let Some(list) = self.region(entry, &self.layout.recipes, "recipes") else {
            return Vec::new();
        };

        split_sections(list, &self.layout.recipe_marker)
            .into_iter()
            .filter_map(|section| {
                let name = self.tooltip(section);
                let quantity = self.quantity(section);
                if name.is_empty() || quantity == 0 {
                    debug!("Dropping recipe {:?} x{}", name, quantity);
                    return None;
                }
                Some(RecipeEntry { name, quantity })
            })
            .collect()
    }

    fn detail_tags(&self, document: &str) -> Vec<String> {
        self.region(document, &self.layout.tag_cloud, "tag cloud")
            .map(|region| self.tooltips(region))
            .unwrap_or_default()
    }

    fn description(&self, document: &str) -> String {
        let Some(outer) = self.region(document, &self.layout.description, "description") else {
            return String::new();
        };
        self.region(outer, &self.layout.description_inner, "description body")
            .map(text_of)
            .unwrap_or_default()
    }
}
