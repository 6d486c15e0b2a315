//! Duplicate detection.
//!
//! Two items count as the same track when name, primary artist and duration
//! match, whatever their URIs. Only reporting exists; removing duplicates is
//! not supported because no keep-first/keep-last policy has been settled.

use std::collections::HashMap;

use crate::types::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub name: String,
    pub artist: String,
    pub duration_ms: u64,
    /// Zero-based playlist positions, ascending.
    pub positions: Vec<usize>,
}

impl DuplicateGroup {
    /// Copies beyond the first one.
    pub fn extra_copies(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

/// Groups `items` by [`Item::dedup_key`] and returns the groups with more
/// than one member, ordered by first occurrence.
pub fn find_duplicates(items: &[Item]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<(&str, &str, u64), usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for (position, item) in items.iter().enumerate() {
        // unavailable entries carry no metadata
        if item.name.is_empty() {
            continue;
        }
        match index.get(&item.dedup_key()) {
            Some(&group) => groups[group].positions.push(position),
            None => {
                index.insert(item.dedup_key(), groups.len());
                groups.push(DuplicateGroup {
                    name: item.name.clone(),
                    artist: item.artist.clone(),
                    duration_ms: item.duration_ms,
                    positions: vec![position],
                });
            }
        }
    }

    groups.retain(|group| group.positions.len() > 1);
    groups
}
