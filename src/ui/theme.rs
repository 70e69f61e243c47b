// NoteBoard - ui/theme.rs
//
// Colour palettes for the light and dark themes, egui visuals, and layout
// constants. No dependencies on app state or business logic.

use crate::core::model::Theme;
use egui::Color32;

/// Colours used to paint the board for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background behind the cards.
    pub background: Color32,
    /// Card and search-box fill.
    pub card: Color32,
    /// Card border.
    pub border: Color32,
    /// Note body text.
    pub text: Color32,
    /// Dates and secondary labels.
    pub muted: Color32,
    /// Focus ring, Save button, selection.
    pub accent: Color32,
}

const INDIGO_600: Color32 = Color32::from_rgb(79, 70, 229);

pub const LIGHT: Palette = Palette {
    background: Color32::from_rgb(226, 232, 240), // Slate 200
    card: Color32::WHITE,
    border: Color32::from_rgb(203, 213, 225),     // Slate 300
    text: Color32::from_rgb(17, 24, 39),          // Gray 900
    muted: Color32::from_rgb(75, 85, 99),         // Gray 600
    accent: INDIGO_600,
};

pub const DARK: Palette = Palette {
    background: Color32::from_rgb(15, 23, 42),    // Slate 900
    card: Color32::from_rgb(30, 41, 59),          // Slate 800
    border: Color32::from_rgb(51, 65, 85),        // Slate 700
    text: Color32::WHITE,
    muted: Color32::from_rgb(156, 163, 175),      // Gray 400
    accent: INDIGO_600,
};

/// Palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Full egui visuals for a theme, starting from egui's own light/dark set.
pub fn visuals(theme: Theme) -> egui::Visuals {
    let p = palette(theme);
    let mut v = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    v.panel_fill = p.background;
    v.window_fill = p.card;
    v.extreme_bg_color = p.card;
    v.override_text_color = Some(p.text);
    v.selection.bg_fill = p.accent;
    v.selection.stroke = egui::Stroke::new(1.0, Color32::WHITE);
    v.hyperlink_color = p.accent;
    v
}

/// Icon on the theme switch: offers the theme you would switch to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{1f319}", // moon
        Theme::Dark => "\u{2600}",   // sun
    }
}

/// Layout constants.
pub const SEARCH_WIDTH: f32 = 384.0;
pub const TOGGLE_SIZE: f32 = 32.0;
pub const CARD_HEIGHT: f32 = 208.0;
pub const CARD_FOOTER_HEIGHT: f32 = 32.0;
pub const CARD_GAP: f32 = 16.0;
pub const CARD_PADDING: f32 = 12.0;
pub const CARD_RADIUS: f32 = 4.0;
pub const DRAFT_ROWS: usize = 8;
pub const MAX_BOARD_WIDTH: f32 = 1152.0;
