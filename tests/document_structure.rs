use textcard::{parse_markup, LogicalLine, RunStyle};

const SAMPLE: &str = "标题：**每日问答**\n\n问：第一个问题？\n答：回答正文，含有标点。\n————————————\n问：**第二个**问题\n\n答：结束";

#[test]
fn realistic_document_classifies_every_line() {
    let lines = parse_markup(SAMPLE);
    assert_eq!(lines.len(), 8);

    let kinds: Vec<&str> = lines
        .iter()
        .map(|line| match line {
            LogicalLine::Blank => "blank",
            LogicalLine::Divider => "divider",
            LogicalLine::Content(_) => "content",
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "content", "blank", "content", "content", "divider", "content", "blank", "content"
        ]
    );
}

#[test]
fn consecutive_blanks_stay_distinct() {
    let lines = parse_markup("a\n\n\n\nb");
    let blanks = lines
        .iter()
        .filter(|l| matches!(l, LogicalLine::Blank))
        .count();
    assert_eq!(blanks, 3);
}

#[test]
fn bold_runs_preserve_document_order() {
    let lines = parse_markup(SAMPLE);
    let LogicalLine::Content(runs) = &lines[0] else {
        panic!("first line is content");
    };
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].style, RunStyle::Normal);
    assert_eq!(runs[0].text, "标题：");
    assert_eq!(runs[1].style, RunStyle::Bold);
    assert_eq!(runs[1].text, "每日问答");
}

#[test]
fn crlf_artifacts_do_not_become_blanks() {
    // A trailing carriage return keeps the line non-empty, so only the
    // final split remainder is blank.
    let lines = parse_markup("a\r\n");
    assert_eq!(lines.len(), 2);
    assert!(matches!(lines[0], LogicalLine::Content(_)));
    assert!(matches!(lines[1], LogicalLine::Blank));
}
