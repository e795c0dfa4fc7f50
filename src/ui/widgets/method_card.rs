// StegoSight - ui/widgets/method_card.rs
//
// Clickable technique cards. Exactly one card in a list is drawn selected;
// the selection itself lives in `MethodSelection`.

use crate::core::catalog::MethodInfo;
use crate::core::selection::MethodSelection;
use crate::ui::theme::{Theme, CARD_PADDING, CARD_ROUNDING};
use egui::{RichText, Sense, Stroke};

/// Render one card. Returns true when it was clicked.
pub fn method_card(ui: &mut egui::Ui, theme: &Theme, info: &MethodInfo, selected: bool) -> bool {
    let (fill, stroke) = if selected {
        (theme.card_selected_bg, Stroke::new(2.0, theme.card_selected_border))
    } else {
        (theme.card_bg, Stroke::new(1.0, theme.card_border))
    };

    let inner = egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let marker = if selected { "\u{25c9}" } else { "\u{25cb}" };
                let colour = if selected {
                    theme.primary
                } else {
                    theme.weak_text
                };
                ui.label(RichText::new(marker).color(colour));
                ui.label(RichText::new(info.title).strong());
            });
            ui.label(RichText::new(info.description).small().color(theme.weak_text));
        });

    inner
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

/// Render every technique in `selection`. Returns the index clicked this
/// frame, if any.
pub fn method_list(
    ui: &mut egui::Ui,
    theme: &Theme,
    selection: &MethodSelection,
) -> Option<usize> {
    let mut clicked = None;
    for (i, info) in selection.methods().iter().enumerate() {
        if method_card(ui, theme, info, selection.is_selected(i)) {
            clicked = Some(i);
        }
        ui.add_space(4.0);
    }
    clicked
}
