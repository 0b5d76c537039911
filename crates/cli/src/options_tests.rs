#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

#[test]
fn test_display_line_is_one_based() {
    let mut option = PromptOption::new("Alpha");
    option.index = 2;
    assert_eq!(option.display_line(), "  3) Alpha");
}

#[test]
fn test_display_line_default_marker() {
    let option = PromptOption::new("Alpha").as_default();
    let line = option.display_line();
    assert!(line.contains('>'));
    assert!(line.contains("1) Alpha"));
}

#[rstest]
#[case(false, "[ ] ")]
#[case(true, "[x] ")]
fn test_display_line_checkbox_marker(#[case] selected: bool, #[case] marker: &str) {
    let mut option = PromptOption::new("Alpha").with_style(RenderStyle::Checkbox);
    option.selected = selected;
    assert!(option.display_line().contains(marker));
}

#[test]
fn test_display_line_paints_label() {
    let option = PromptOption::new("Alpha").with_color(crate::colors::OptionColor::Green);
    assert!(option.display_line().contains("\x1b[38;2;"));
}

#[test]
fn test_prepare_assigns_indexes() {
    let mut options = vec![PromptOption::new("a"), PromptOption::new("b")];
    prepare_for_render(&mut options);
    assert_eq!(options[0].index, 0);
    assert_eq!(options[1].index, 1);
}

#[test]
fn test_first_declared_default_wins() {
    let mut options = vec![
        PromptOption::new("a"),
        PromptOption::new("b").as_default(),
        PromptOption::new("c").as_default(),
        PromptOption::new("d").as_default(),
    ];
    prepare_for_render(&mut options);
    let defaults: Vec<usize> = options
        .iter()
        .filter(|o| o.is_default)
        .map(|o| o.index)
        .collect();
    assert_eq!(defaults, [1]);
    assert_eq!(default_index(&options), Some(1));
}

#[test]
fn test_no_default() {
    let mut options = vec![PromptOption::new("a"), PromptOption::new("b")];
    prepare_for_render(&mut options);
    assert_eq!(default_index(&options), None);
}

#[test]
fn test_prompt_result_accessors() {
    assert!(PromptResult::Selected(0).has_selection());
    assert_eq!(PromptResult::Selected(3).selection(), Some(3));
    assert!(!PromptResult::Canceled.has_selection());
    assert_eq!(PromptResult::Canceled.selection(), None);
}
