//! Integration tests for note text <-> document conversion

use notemark_core::ast::{BulletedList, Heading, ListItem, Paragraph, Quote, RawNode, Todo};
use notemark_core::{has_content, to_document, to_text, Block, BlockKind, Document, Text};
use pretty_assertions::assert_eq;

fn runs(text: &str) -> Vec<Text> {
    vec![Text::new(text)]
}

fn item(text: &str) -> ListItem {
    ListItem {
        children: runs(text),
    }
}

// ============================================================================
// Empty Input
// ============================================================================

#[test]
fn test_none_and_empty_give_canonical_document() {
    let canonical = Document::new(vec![Block::Paragraph(Paragraph {
        children: runs(""),
    })]);
    assert_eq!(to_document(None), canonical);
    assert_eq!(to_document(Some("")), canonical);
    assert_eq!(Document::empty(), canonical);
}

#[test]
fn test_single_newline_is_two_empty_paragraphs() {
    let doc = to_document(Some("\n"));
    assert_eq!(doc.blocks, vec![Block::paragraph(""), Block::paragraph("")]);
}

// ============================================================================
// Block Kinds
// ============================================================================

#[test]
fn test_heading() {
    let doc = to_document(Some("# Hello"));
    assert_eq!(
        doc.blocks,
        vec![Block::Heading(Heading {
            level: 1,
            children: runs("Hello"),
        })]
    );
}

#[test]
fn test_heading_levels() {
    let doc = to_document(Some("# a\n## b\n### c\n#### d\n##### e\n###### f"));
    assert_eq!(doc.blocks.len(), 6);
    for (i, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Heading(h) => assert_eq!(h.level as usize, i + 1),
            other => panic!("Expected heading, got {:?}", other),
        }
    }
}

#[test]
fn test_seven_hashes_is_paragraph() {
    let doc = to_document(Some("####### too deep"));
    assert_eq!(doc.blocks, vec![Block::paragraph("####### too deep")]);
}

#[test]
fn test_hash_without_space_is_paragraph() {
    let doc = to_document(Some("#hashtag"));
    assert_eq!(doc.blocks, vec![Block::paragraph("#hashtag")]);
}

#[test]
fn test_todos() {
    let doc = to_document(Some("[x] done task\n[] todo task"));
    assert_eq!(
        doc.blocks,
        vec![
            Block::Todo(Todo {
                done: true,
                children: runs("done task"),
            }),
            Block::Todo(Todo {
                done: false,
                children: runs("todo task"),
            }),
        ]
    );
}

#[test]
fn test_quote() {
    let doc = to_document(Some("> stay hungry"));
    assert_eq!(
        doc.blocks,
        vec![Block::Quote(Quote {
            children: runs("stay hungry"),
        })]
    );
}

#[test]
fn test_paragraph_keeps_full_line() {
    let doc = to_document(Some("Meeting notes: - not a list"));
    assert_eq!(doc.blocks, vec![Block::paragraph("Meeting notes: - not a list")]);

    let doc = to_document(Some("  # indented"));
    assert_eq!(doc.blocks, vec![Block::paragraph("  # indented")]);
}

#[test]
fn test_only_one_separator_is_stripped() {
    let doc = to_document(Some("-   spaced"));
    assert_eq!(
        doc.blocks,
        vec![Block::BulletedList(BulletedList {
            children: vec![item("  spaced")],
        })]
    );
}

#[test]
fn test_bare_trigger_keeps_line_as_body() {
    let doc = to_document(Some("#\n-\n[x]"));
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading(Heading {
                level: 1,
                children: runs("#"),
            }),
            Block::BulletedList(BulletedList {
                children: vec![item("-")],
            }),
            Block::Todo(Todo {
                done: true,
                children: runs("[x]"),
            }),
        ]
    );

    let saved = to_text(&doc);
    assert_eq!(saved, "# #\n- -\n[x] [x]");
    assert_eq!(to_document(Some(&saved)), doc);
}

#[test]
fn test_crlf_lines() {
    let doc = to_document(Some("# Title\r\n- a\r\n- b"));
    assert_eq!(to_text(&doc), "# Title\n- a\n- b");
}

// ============================================================================
// List Grouping
// ============================================================================

#[test]
fn test_adjacent_items_group_into_one_list() {
    let doc = to_document(Some("- a\n- b"));
    assert_eq!(
        doc.blocks,
        vec![Block::BulletedList(BulletedList {
            children: vec![item("a"), item("b")],
        })]
    );
}

#[test]
fn test_list_after_paragraph_starts_new_list() {
    let doc = to_document(Some("intro\n- a\n- b"));
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0], Block::paragraph("intro"));
    assert_eq!(
        doc.blocks[1],
        Block::BulletedList(BulletedList {
            children: vec![item("a"), item("b")],
        })
    );
}

#[test]
fn test_blank_line_separates_lists() {
    let doc = to_document(Some("- a\n\n- b"));
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(BlockKind::BulletedList),
            Some(BlockKind::Paragraph),
            Some(BlockKind::BulletedList),
        ]
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_list_renders_one_line_per_item() {
    let doc = to_document(Some("- a\n- b\n- c"));
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(to_text(&doc), "- a\n- b\n- c");
}

#[test]
fn test_runs_are_concatenated() {
    let doc = Document::new(vec![Block::Heading(Heading {
        level: 3,
        children: vec![Text::new("Q3 "), Text::new("plan")],
    })]);
    assert_eq!(to_text(&doc), "### Q3 plan");
}

#[test]
fn test_raw_nodes() {
    let doc = Document::new(vec![
        Block::Raw(RawNode {
            text: Some("loose text".to_string()),
        }),
        Block::Raw(RawNode { text: None }),
        Block::paragraph("end"),
    ]);
    assert_eq!(to_text(&doc), "loose text\n\nend");
}

#[test]
fn test_top_level_list_item_renders_as_bullet() {
    let doc = Document::new(vec![Block::ListItem(item("stray"))]);
    assert_eq!(to_text(&doc), "- stray");
}

#[test]
fn test_round_trip_mixed_note() {
    let input = "# Weekly sync\n\n> Focus on launch\n- review PR\n- update docs\n[x] book room\n[] send invite\nplain line\n";
    let doc = to_document(Some(input));
    assert_eq!(to_text(&doc), input);
    assert_eq!(to_document(Some(&to_text(&doc))), doc);
}

#[test]
fn test_leading_trigger_in_paragraph_is_not_escaped() {
    // no escaping: a paragraph typed as "- x" comes back as a list
    let doc = Document::new(vec![Block::paragraph("- x")]);
    let reparsed = to_document(Some(&to_text(&doc)));
    assert_eq!(reparsed.blocks[0].kind(), Some(BlockKind::BulletedList));
}

// ============================================================================
// Content Check
// ============================================================================

#[test]
fn test_has_content_empty_document() {
    assert!(!has_content(&Document::empty()));
    assert!(!has_content(&to_document(Some("   \n\t"))));
}

#[test]
fn test_has_content_heading() {
    assert!(has_content(&to_document(Some("# Hello"))));
    assert!(!has_content(&to_document(Some("#  "))));
}

#[test]
fn test_has_content_list_counts_items() {
    assert!(has_content(&to_document(Some("- "))));
    let empty_list = Document::new(vec![Block::BulletedList(BulletedList::default())]);
    assert!(!has_content(&empty_list));
}

#[test]
fn test_has_content_ignores_raw() {
    let doc = Document::new(vec![Block::Raw(RawNode {
        text: Some("x".to_string()),
    })]);
    assert!(!has_content(&doc));
}
