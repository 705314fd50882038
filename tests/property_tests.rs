//! Property tests for block scanning.

use proptest::prelude::*;
use rstscan::{Block, BlockEvent, BlockKind, BlockScanner};

fn events(input: &str) -> Vec<BlockEvent> {
    let mut events = Vec::new();
    let Ok(()) = BlockScanner::new(input).scan(&mut events);
    events
}

/// Lines drawn from a small alphabet heavy in whitespace.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec("[ \t\x0b]{0,3}[a-c \t]{0,6}", 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn whitespace_only_input_emits_nothing(input in "[ \t\x0b\x0c\r\n]{0,40}") {
        prop_assert!(events(&input).is_empty());
    }

    #[test]
    fn indented_line_is_blockquote(k in 1usize..16, word in "[a-z]{1,8}") {
        let input = format!("{}{}", " ".repeat(k), word);
        let blocks = rstscan::to_blocks(&input);
        prop_assert_eq!(blocks, vec![Block { kind: BlockKind::Blockquote, indent: k, text: word }]);
    }

    #[test]
    fn column_zero_line_is_paragraph(word in "[a-z]{1,8}", rest in "[a-z ]{0,8}") {
        let input = format!("{word}{rest}");
        let blocks = rstscan::to_blocks(&input);
        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        prop_assert_eq!(blocks[0].indent, 0);
    }

    #[test]
    fn events_are_well_bracketed(input in document()) {
        let events = events(&input);
        prop_assert_eq!(events.len() % 3, 0);
        for triple in events.chunks(3) {
            let is_start = matches!(triple[0], BlockEvent::BlockStart { .. });
            let is_text = matches!(triple[1], BlockEvent::Text(_));
            prop_assert!(is_start);
            prop_assert!(is_text);
            prop_assert_eq!(&triple[2], &BlockEvent::BlockEnd);
        }
    }

    #[test]
    fn kind_follows_indent(input in document()) {
        for block in rstscan::to_blocks(&input) {
            prop_assert_eq!(block.kind, BlockKind::from_indent(block.indent));
        }
    }

    #[test]
    fn text_is_normalized(input in document()) {
        for block in rstscan::to_blocks(&input) {
            prop_assert!(!block.text.is_empty());
            prop_assert!(!block.text.contains(['\t', '\x0b', '\x0c', '\r']));
            for line in block.text.split('\n') {
                prop_assert!(!line.is_empty());
                prop_assert!(!line.ends_with(' '));
                prop_assert!(!line.starts_with(' '));
            }
        }
    }

    #[test]
    fn block_lines_share_indent(input in document()) {
        // Every non-blank source line lands in exactly one block, so the
        // line counts must agree.
        let source_lines = input
            .split('\n')
            .filter(|line| !line.trim_matches([' ', '\t', '\x0b']).is_empty())
            .count();
        let block_lines: usize = rstscan::to_blocks(&input)
            .iter()
            .map(|block| block.text.split('\n').count())
            .sum();
        prop_assert_eq!(source_lines, block_lines);
    }

    #[test]
    fn tab_reaches_next_stop(prefix in "[a-z]{1,20}") {
        let input = format!("{prefix}\tz");
        let blocks = rstscan::to_blocks(&input);
        let text = &blocks[0].text;
        let spaces = text.len() - prefix.len() - 1;
        prop_assert!((1..=8).contains(&spaces));
        prop_assert_eq!((prefix.len() + spaces) % 8, 0);
    }
}
