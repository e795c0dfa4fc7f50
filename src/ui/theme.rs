// StegoSight - ui/theme.rs
//
// Light and dark palettes, risk colour mapping, and layout constants.
// The active `Theme` is passed explicitly to every panel and widget.
// No dependencies on app state or business logic.

use crate::core::risk::RiskLevel;
use egui::{Color32, FontId, TextStyle};

/// Layout constants.
pub const CARD_ROUNDING: u8 = 8;
pub const CARD_PADDING: i8 = 10;
pub const SECTION_SPACING: f32 = 12.0;
pub const DROP_ZONE_HEIGHT: f32 = 110.0;
pub const CONSOLE_HEIGHT: f32 = 160.0;

/// Every colour the UI paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub dark: bool,

    pub primary: Color32,
    pub primary_hover: Color32,
    pub on_primary: Color32,

    pub window_bg: Color32,
    pub panel_bg: Color32,
    pub text: Color32,
    pub weak_text: Color32,

    pub card_bg: Color32,
    pub card_border: Color32,
    pub card_selected_bg: Color32,
    pub card_selected_border: Color32,

    pub drop_fill: Color32,
    pub drop_border: Color32,
    pub drop_active_fill: Color32,

    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,

    pub console_bg: Color32,
    pub console_text: Color32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            dark: false,
            primary: Color32::from_rgb(0x1e, 0x88, 0xe5),       // Blue 600
            primary_hover: Color32::from_rgb(0x19, 0x76, 0xd2), // Blue 700
            on_primary: Color32::WHITE,
            window_bg: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            panel_bg: Color32::WHITE,
            text: Color32::from_rgb(0x21, 0x21, 0x21),
            weak_text: Color32::from_rgb(0x75, 0x75, 0x75),
            card_bg: Color32::WHITE,
            card_border: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            card_selected_bg: Color32::from_rgb(0xe3, 0xf2, 0xfd), // Blue 50
            card_selected_border: Color32::from_rgb(0x1e, 0x88, 0xe5),
            drop_fill: Color32::from_rgb(0xf0, 0xf7, 0xff),
            drop_border: Color32::from_rgb(0x90, 0xca, 0xf9), // Blue 200
            drop_active_fill: Color32::from_rgb(0xbb, 0xde, 0xfb),
            success: Color32::from_rgb(0x43, 0xa0, 0x47), // Green 600
            warning: Color32::from_rgb(0xfb, 0x8c, 0x00), // Orange 600
            danger: Color32::from_rgb(0xe5, 0x39, 0x35),  // Red 600
            console_bg: Color32::from_rgb(0x26, 0x32, 0x38),
            console_text: Color32::from_rgb(0xec, 0xef, 0xf1),
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            primary: Color32::from_rgb(0x42, 0xa5, 0xf5),
            primary_hover: Color32::from_rgb(0x64, 0xb5, 0xf6),
            on_primary: Color32::from_rgb(0x0d, 0x1b, 0x2a),
            window_bg: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            panel_bg: Color32::from_rgb(0x26, 0x26, 0x26),
            text: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            weak_text: Color32::from_rgb(0x9e, 0x9e, 0x9e),
            card_bg: Color32::from_rgb(0x2c, 0x2c, 0x2c),
            card_border: Color32::from_rgb(0x42, 0x42, 0x42),
            card_selected_bg: Color32::from_rgb(0x0d, 0x3c, 0x61),
            card_selected_border: Color32::from_rgb(0x42, 0xa5, 0xf5),
            drop_fill: Color32::from_rgb(0x1a, 0x27, 0x33),
            drop_border: Color32::from_rgb(0x15, 0x65, 0xc0),
            drop_active_fill: Color32::from_rgb(0x0d, 0x47, 0xa1),
            success: Color32::from_rgb(0x66, 0xbb, 0x6a),
            warning: Color32::from_rgb(0xff, 0xa7, 0x26),
            danger: Color32::from_rgb(0xef, 0x53, 0x50),
            console_bg: Color32::from_rgb(0x12, 0x12, 0x12),
            console_text: Color32::from_rgb(0xcf, 0xd8, 0xdc),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn risk_colour(&self, level: RiskLevel) -> Color32 {
        match level {
            RiskLevel::Low => self.success,
            RiskLevel::Medium => self.warning,
            RiskLevel::High => self.danger,
        }
    }

    /// Install this palette and the body font size on `ctx`.
    pub fn apply(&self, ctx: &egui::Context, font_size: f32) {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.panel_bg;
        visuals.window_fill = self.panel_bg;
        visuals.extreme_bg_color = self.window_bg;
        visuals.faint_bg_color = self.window_bg;
        visuals.hyperlink_color = self.primary;
        visuals.selection.bg_fill = self.primary;
        visuals.selection.stroke.color = self.on_primary;
        visuals.override_text_color = Some(self.text);
        visuals.widgets.hovered.weak_bg_fill = self.card_selected_bg;
        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            let sizes = [
                (TextStyle::Small, FontId::proportional(font_size * 0.8)),
                (TextStyle::Body, FontId::proportional(font_size)),
                (TextStyle::Button, FontId::proportional(font_size)),
                (TextStyle::Heading, FontId::proportional(font_size * 1.45)),
                (TextStyle::Monospace, FontId::monospace(font_size * 0.9)),
            ];
            for (style_name, font) in sizes {
                style.text_styles.insert(style_name, font);
            }
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(10.0, 5.0);
        });
    }
}
