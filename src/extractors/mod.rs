use crate::error::Result;
use crate::layout::MarkupLayout;

mod detail;
mod fields;
mod listing;

pub use fields::extract_quantity;
use fields::AttrPatterns;

/// Field extractors and record assemblers for one markup layout.
///
/// Holds no mutable state; one instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Extractor {
    layout: MarkupLayout,
    patterns: AttrPatterns,
}

impl Extractor {
    pub fn new(layout: MarkupLayout) -> Result<Self> {
        let patterns = AttrPatterns::new(&layout.id_attr, &layout.link_attr, &layout.tooltip_attr)?;
        Ok(Self { layout, patterns })
    }

    pub fn layout(&self) -> &MarkupLayout {
        &self.layout
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(MarkupLayout::default()).expect("built-in layout has valid attribute names")
    }
}
