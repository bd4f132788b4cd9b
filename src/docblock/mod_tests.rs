use super::*;

fn lines(source: &str) -> Vec<&str> {
    source.split('\n').collect()
}

#[test]
fn locates_triple_slash_block() {
    let source = lines("int a_;\n/// Number of groups.\n/// Never zero.\nint groups_;");
    let block = DocLocator::default().locate(&source, 4).unwrap();

    assert_eq!(block.start_line, 2);
    assert_eq!(block.end_line, 3);
    assert_eq!(block.len(), 2);
    assert_eq!(block.brief().as_deref(), Some("Number of groups."));
}

#[test]
fn locates_multi_line_block_comment() {
    let source = lines(
        "  /**\n   * Build the sweep graph.\n   *\n   * \\param mesh Source mesh.\n   */\n  void Build(const Mesh& mesh);",
    );
    let block = DocLocator::default().locate(&source, 6).unwrap();

    assert_eq!(block.start_line, 1);
    assert_eq!(block.end_line, 5);
    assert_eq!(block.opener(), "/**");
    assert_eq!(block.brief().as_deref(), Some("Build the sweep graph."));
}

#[test]
fn single_line_block_comment() {
    let source = lines("/** Angle set identifier. */\nsize_t id_;");
    let block = DocLocator::default().locate(&source, 2).unwrap();
    assert_eq!(block.start_line, 1);
    assert_eq!(block.brief().as_deref(), Some("Angle set identifier."));
}

#[test]
fn blank_line_between_comment_and_entity_is_tolerated() {
    let source = lines("/// Counter.\n\nint count_;");
    let block = DocLocator::default().locate(&source, 3).unwrap();
    assert_eq!(block.start_line, 1);
    assert_eq!(block.end_line, 1);
}

#[test]
fn blank_line_above_comment_ends_block() {
    let source = lines("/// Unrelated.\n\n/// Counter.\nint count_;");
    let block = DocLocator::default().locate(&source, 4).unwrap();
    assert_eq!(block.start_line, 3);
    assert_eq!(block.lines, vec!["/// Counter."]);
}

#[test]
fn code_or_plain_comment_means_undocumented() {
    let locator = DocLocator::default();
    assert!(locator.locate(&lines("int a_;\nint b_;"), 2).is_none());
    assert!(locator.locate(&lines("// note\nint b_;"), 2).is_none());
    assert!(locator.locate(&lines("int a_; /* x */\nint b_;"), 2).is_none());
}

#[test]
fn first_line_has_nothing_above() {
    assert!(DocLocator::default().locate(&lines("int a_;"), 1).is_none());
    assert!(DocLocator::default().locate(&lines("int a_;"), 0).is_none());
    assert!(DocLocator::default().locate(&lines("int a_;"), 9).is_none());
}

#[test]
fn block_opener_beyond_window_is_absent() {
    let mut source = vec!["/**"];
    source.extend(std::iter::repeat_n(" * filler", 20));
    source.push(" */");
    source.push("int x_;");
    let entity_line = source.len();

    assert!(DocLocator::default().locate(&source, entity_line).is_none());
    assert!(DocLocator::new(30).locate(&source, entity_line).is_some());
}

#[test]
fn window_limits_triple_slash_run() {
    let mut source: Vec<&str> = std::iter::repeat_n("/// line", 20).collect();
    source.push("int x_;");
    let block = DocLocator::new(15).locate(&source, 21).unwrap();
    assert_eq!(block.len(), 15);
    assert_eq!(block.start_line, 6);
}

#[test]
fn non_doxygen_block_is_still_located() {
    let source = lines("/* Plain block. */\nint x_;");
    let block = DocLocator::default().locate(&source, 2).unwrap();
    assert_eq!(block.opener(), "/* Plain block. */");
}

#[test]
fn brief_skips_explicit_brief_command() {
    let block = DocBlock {
        start_line: 1,
        end_line: 2,
        lines: vec!["/// \\brief Gets the value.".into(), "/// More.".into()],
    };
    assert_eq!(block.brief().as_deref(), Some("Gets the value."));
}

#[test]
fn comment_text_strips_markers() {
    assert_eq!(comment_text("   * \\param x Value."), "\\param x Value.");
    assert_eq!(comment_text("/// Brief."), "Brief.");
    assert_eq!(comment_text("*/"), "");
    assert_eq!(comment_text("/**"), "");
    assert_eq!(comment_text("//! Module."), "Module.");
}
