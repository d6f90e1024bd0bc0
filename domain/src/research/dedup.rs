//! Merge-time deduplication of retrieved documents

use super::document::Document;
use std::collections::HashMap;

/// Keep exactly one document per distinct `url`.
///
/// Behaves like a mapping keyed by url filled in merge order: when a url
/// repeats, the later copy overwrites the earlier one (last wins) but keeps
/// the slot where the url was first seen. The result is deterministic for a
/// given merge order.
pub fn dedup_by_url(documents: Vec<Document>) -> Vec<Document> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(documents.len());
    let mut unique: Vec<Document> = Vec::with_capacity(documents.len());

    for doc in documents {
        match slots.get(&doc.url) {
            Some(&index) => unique[index] = doc,
            None => {
                slots.insert(doc.url.clone(), unique.len());
                unique.push(doc);
            }
        }
    }

    unique
}
