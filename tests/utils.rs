use ratatui::style::Color;
use stickies::utils::{color, text};

#[test]
fn test_palette_membership() {
    assert!(color::is_palette_color("yellow"));
    assert!(color::is_palette_color("gray"));
    assert!(color::is_palette_color("Yellow"), "palette names are case-insensitive");
    assert!(!color::is_palette_color("beige"));
    assert!(!color::is_palette_color(""));
}

#[test]
fn test_every_palette_color_has_a_background() {
    let fallback = color::note_background("not-a-color");
    for name in color::NOTE_COLORS {
        let bg = color::note_background(name);
        assert!(matches!(bg, Color::Rgb(..)));
        if *name != "yellow" {
            assert_ne!(bg, fallback, "{} should not render as the fallback", name);
        }
    }
}

#[test]
fn test_unknown_color_falls_back_to_yellow() {
    assert_eq!(color::note_background("nope"), color::note_background("yellow"));
}

#[test]
fn test_preview_short_content_is_verbatim() {
    assert_eq!(text::preview("hello"), "hello");
    assert_eq!(text::preview(""), "");
}

#[test]
fn test_preview_exactly_thirty_chars_is_untruncated() {
    let content = "x".repeat(30);
    assert_eq!(text::preview(&content), content);
}

#[test]
fn test_preview_truncates_at_thirty_chars() {
    let content = "x".repeat(31);
    assert_eq!(text::preview(&content), format!("{}…", "x".repeat(30)));
}

#[test]
fn test_preview_counts_chars_not_bytes() {
    let content = "ü".repeat(35);
    assert_eq!(text::preview(&content), format!("{}…", "ü".repeat(30)));
}

#[test]
fn test_preview_keeps_newlines() {
    let content = "one\ntwo";
    assert_eq!(text::preview(content), "one\ntwo");
}
