#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_plain_paint_is_passthrough() {
    assert_eq!(OptionColor::Plain.paint("label"), "label");
}

#[test]
fn test_colored_paint_wraps_and_resets() {
    let painted = OptionColor::Cyan.paint("label");
    assert!(painted.starts_with("\x1b[38;2;86;182;194m"));
    assert!(painted.contains("label"));
    assert!(painted.ends_with(escape::RESET));
}

#[test]
fn test_styled_replay_value_uses_echo_color() {
    let styled = styled_replay_value("2");
    assert!(styled.starts_with("\x1b[38;2;97;175;239m"));
    assert!(styled.ends_with("2\x1b[0m"));
}

#[test]
fn test_styled_description_is_dim_gray() {
    let styled = styled_description("narration");
    assert!(styled.starts_with(escape::DIM));
    assert!(styled.contains("narration"));
}

#[test]
fn test_styled_invalid_is_red() {
    let styled = styled_invalid("Invalid selection.");
    assert!(styled.starts_with("\x1b[38;2;224;108;117m"));
}

#[test]
fn test_styled_action_error_names_the_item() {
    let styled = styled_action_error("Brew coffee", "out of beans");
    assert!(styled.contains("error in 'Brew coffee': out of beans"));
}

#[test]
fn test_default_marker() {
    let marker = styled_default_marker();
    assert!(marker.contains('>'));
    assert!(marker.ends_with(' '));
}

#[test]
fn test_clear_screen_sequence() {
    assert_eq!(CLEAR_SCREEN, "\x1b[2J\x1b[H");
}
