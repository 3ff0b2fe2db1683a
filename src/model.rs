use serde::{Deserialize, Serialize};

/// One catalog card from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    /// Never empty; cards without an id produce no record
    pub id: String,
    pub display_name: String,
    pub attribution: String,
    pub tags: Vec<String>,
    pub link_target: String,
}

/// A quantified sub-component of a requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEntry {
    pub name: String,
    pub quantity: u32,
}

/// A component needed by a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequirement {
    pub name: String,
    pub quantity: u32,
    pub sub_recipes: Vec<RecipeEntry>,
}

/// Everything pulled from a detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    /// Empty unless the caller asked for it
    pub raw_payload: String,
    pub requirements: Vec<ComponentRequirement>,
    pub tags: Vec<String>,
    pub description: String,
}
