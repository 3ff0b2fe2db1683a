/// Split `document` into one section per occurrence of `marker`.
///
/// Section *i* runs from the start of occurrence *i* up to the start of
/// occurrence *i + 1*, the last one to the end of the document. Text before
/// the first marker belongs to no section. Returns an empty vector when the
/// marker never occurs (or is empty).
pub fn split_sections<'a>(document: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return Vec::new();
    }

    let starts: Vec<usize> = document
        .match_indices(marker)
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(document.len());
            &document[start..end]
        })
        .collect()
}
