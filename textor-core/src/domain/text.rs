//! Text extraction helpers over the block model

use std::collections::BTreeMap;

use super::block::{Block, BlockType};

/// Concatenate the text of all LINE blocks, one line per block.
pub fn lines_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| b.block_type == BlockType::Line)
        .filter_map(|b| b.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Group blocks by page number, ascending.
///
/// Blocks without a page field (single-page operations omit it) land on
/// page 1.
pub fn blocks_by_page(blocks: &[Block]) -> BTreeMap<u32, Vec<&Block>> {
    let mut pages: BTreeMap<u32, Vec<&Block>> = BTreeMap::new();
    for block in blocks {
        pages.entry(block.page.unwrap_or(1)).or_default().push(block);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: &str, block_type: &str, text: Option<&str>, page: Option<u32>) -> Block {
        let mut value = serde_json::json!({"Id": id, "BlockType": block_type});
        if let Some(text) = text {
            value["Text"] = text.into();
        }
        if let Some(page) = page {
            value["Page"] = page.into();
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lines_text_skips_non_line_blocks() {
        let blocks = vec![
            block("p1", "PAGE", None, Some(1)),
            block("l1", "LINE", Some("first line"), Some(1)),
            block("w1", "WORD", Some("first"), Some(1)),
            block("l2", "LINE", Some("second line"), Some(1)),
        ];
        assert_eq!(lines_text(&blocks), "first line\nsecond line");
    }

    #[test]
    fn test_lines_text_empty_input() {
        assert_eq!(lines_text(&[]), "");
    }

    #[test]
    fn test_blocks_by_page_sorts_pages() {
        let blocks = vec![
            block("a", "LINE", Some("page two"), Some(2)),
            block("b", "LINE", Some("page one"), Some(1)),
            block("c", "WORD", Some("two"), Some(2)),
        ];
        let pages = blocks_by_page(&blocks);
        assert_eq!(pages.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(pages[&2].len(), 2);
        assert_eq!(pages[&1][0].id, "b");
    }

    #[test]
    fn test_blocks_without_page_default_to_first() {
        let blocks = vec![block("a", "LINE", Some("no page"), None)];
        let pages = blocks_by_page(&blocks);
        assert_eq!(pages[&1].len(), 1);
    }
}
