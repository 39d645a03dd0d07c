use crate::mapping::MappingTable;
use serde::{Deserialize, Serialize};

/// How many times one mapping fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingCount {
    pub old: String,
    pub new: String,
    pub count: usize,
}

/// Rewritten text plus per-mapping and total counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub total: usize,
    /// Only mappings that fired, in table order
    pub counts: Vec<MappingCount>,
}

impl Replacement {
    pub fn changed_from(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Replace every occurrence of each old token with its new token.
///
/// Mappings run in table order; each one counts its non-overlapping
/// occurrences in the current text and then replaces all of them.
pub fn apply_mappings(text: &str, table: &MappingTable) -> Replacement {
    let mut updated = text.to_string();
    let mut counts = Vec::new();
    let mut total = 0;

    for mapping in table {
        let count = updated.matches(mapping.old.as_str()).count();
        if count == 0 {
            continue;
        }

        updated = updated.replace(mapping.old.as_str(), &mapping.new);
        total += count;
        counts.push(MappingCount {
            old: mapping.old.clone(),
            new: mapping.new.clone(),
            count,
        });
    }

    Replacement {
        text: updated,
        total,
        counts,
    }
}

/// Fold `other` into `into`, keeping the order given by `table`.
pub(crate) fn merge_counts(
    into: &mut Vec<MappingCount>,
    other: Vec<MappingCount>,
    table: &MappingTable,
) {
    for count in other {
        if let Some(existing) = into.iter_mut().find(|c| c.old == count.old) {
            existing.count += count.count;
        } else {
            into.push(count);
        }
    }

    let position = |old: &str| table.iter().position(|m| m.old == old).unwrap_or(usize::MAX);
    into.sort_by_key(|c| position(&c.old));
}
