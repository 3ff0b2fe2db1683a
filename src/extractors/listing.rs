use log::{debug, warn};

use super::Extractor;
use crate::markup::split_sections;
use crate::model::SummaryRecord;

impl Extractor {
    /// One [`SummaryRecord`] per card that carries an id, in document order.
    pub fn parse_listing(&self, document: &str) -> Vec<SummaryRecord> {
        let cards = split_sections(document, &self.layout.card_marker);
        if cards.is_empty() {
            warn!(
                "No cards found in listing document (marker {:?})",
                self.layout.card_marker
            );
            return Vec::new();
        }

        let records: Vec<SummaryRecord> = cards
            .into_iter()
            .filter_map(|card| self.parse_card(card))
            .collect();

        debug!("Parsed {} listing records", records.len());
        records
    }

    fn parse_card(&self, card: &str) -> Option<SummaryRecord> {
        let id = self.id(card);
        if id.is_empty() {
            debug!("Dropping card without {}", self.layout.id_attr);
            return None;
        }

        Some(SummaryRecord {
            display_name: self.display_name(card),
            attribution: self.attribution(card),
            tags: self.tags(card),
            link_target: self.link_target(card),
            id,
        })
    }
}
