use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Style overrides for every visual surface of the control.
///
/// Plays the role of the class-name hooks a DOM host would pass in: embedders
/// override only the surfaces they care about and keep the defaults for the
/// rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputTheme {
    /// Root container, including its border.
    pub root: Style,
    /// Chip holding a syntactically valid address.
    pub valid_item: Style,
    /// Chip holding an address the validator rejected. Invalid addresses are
    /// still stored and counted; this styling is the only difference.
    pub invalid_item: Style,
    /// The `✕` remove control on each chip.
    pub remove_control: Style,
    /// The persistent text field.
    pub field: Style,
    /// Placeholder text shown while the field is empty.
    pub placeholder: Style,
}

impl Default for InputTheme {
    fn default() -> Self {
        Self {
            root: Style::default().fg(Color::Gray),
            valid_item: Style::default().bg(Color::DarkGray).fg(Color::White),
            invalid_item: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::UNDERLINED),
            remove_control: Style::default().fg(Color::LightRed),
            field: Style::default().fg(Color::White),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl InputTheme {
    /// High contrast variant for low-color terminals.
    pub fn high_contrast() -> Self {
        Self {
            root: Style::default().fg(Color::White),
            valid_item: Style::default().bg(Color::White).fg(Color::Black),
            invalid_item: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            remove_control: Style::default().fg(Color::Black).bg(Color::White),
            field: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::Gray),
        }
    }
}
