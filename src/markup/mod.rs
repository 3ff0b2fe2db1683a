//! Text-scanning primitives over raw markup. No DOM is built anywhere.

pub mod balanced;
pub mod entities;
pub mod sections;
pub mod text;

pub use balanced::{locate, locate_span, RegionMiss, RegionSpan};
pub use entities::decode_entities;
pub use sections::split_sections;
pub use text::{normalize, strip_tags, text_of};
