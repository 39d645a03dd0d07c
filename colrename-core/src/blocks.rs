use crate::mapping::MappingTable;
use crate::replace::{apply_mappings, merge_counts, Replacement};
use regex::Regex;

/// Default block delimiter: Go raw string literals hold the SQL queries
pub const DEFAULT_DELIMITER: char = '`';

/// Byte span of a delimited block, including both delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    /// Range of the text between the delimiters
    pub fn inner(&self, delimiter: char) -> std::ops::Range<usize> {
        let width = delimiter.len_utf8();
        self.start + width..self.end - width
    }
}

fn block_regex(delimiter: char) -> Regex {
    let d = regex::escape(&delimiter.to_string());
    Regex::new(&format!("{d}[^{d}]*{d}")).expect("escaped delimiter is a valid pattern")
}

/// Find every delimited block, leftmost first and non-overlapping.
///
/// Blocks may span lines. A trailing unpaired delimiter opens no block.
pub fn find_blocks(content: &str, delimiter: char) -> Vec<Block> {
    block_regex(delimiter)
        .find_iter(content)
        .map(|m| Block {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Apply `table` only inside delimited blocks.
///
/// Blocks are rewritten last to first so the offsets of the blocks still to
/// be visited stay valid after each splice.
pub fn apply_mappings_in_blocks(
    content: &str,
    delimiter: char,
    table: &MappingTable,
) -> Replacement {
    let mut updated = content.to_string();
    let mut counts = Vec::new();
    let mut total = 0;

    for block in find_blocks(content, delimiter).iter().rev() {
        let range = block.inner(delimiter);
        let inner = &content[range.clone()];
        let rewritten = apply_mappings(inner, table);
        if rewritten.total == 0 {
            continue;
        }

        if rewritten.changed_from(inner) {
            updated.replace_range(range, &rewritten.text);
        }
        total += rewritten.total;
        merge_counts(&mut counts, rewritten.counts, table);
    }

    Replacement {
        text: updated,
        total,
        counts,
    }
}
