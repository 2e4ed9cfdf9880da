use ratatui::style::Color;

/// Palette of note color names, in picker order.
pub const NOTE_COLORS: &[&str] = &[
    "yellow", "green", "cyan", "magenta", "red", "blue", "white", "gray",
];

/// Check whether a name belongs to the note color palette.
#[must_use]
pub fn is_palette_color(name: &str) -> bool {
    NOTE_COLORS.contains(&name.to_lowercase().as_str())
}

/// Convert a stored color name to the note background color.
/// Unknown names fall back to the default yellow.
#[must_use]
pub fn note_background(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "yellow" => Color::Rgb(227, 207, 87),
        "green" => Color::Rgb(143, 188, 143),
        "cyan" => Color::Rgb(141, 182, 205),
        "magenta" => Color::Rgb(221, 160, 221),
        "red" => Color::Rgb(205, 92, 92),
        "blue" => Color::Rgb(108, 123, 139),
        "white" => Color::Rgb(238, 238, 224),
        "grey" | "gray" => Color::Rgb(153, 153, 153),
        _ => Color::Rgb(227, 207, 87), // Default to yellow
    }
}

/// Foreground color readable against every palette background.
#[must_use]
pub fn note_foreground() -> Color {
    Color::Black
}
