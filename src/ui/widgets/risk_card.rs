// StegoSight - ui/widgets/risk_card.rs

use crate::core::risk::RiskResult;
use crate::ui::theme::{Theme, CARD_PADDING, CARD_ROUNDING};
use crate::util::constants::RISK_SCORE_MAX;
use egui::RichText;

/// Score, level bar and summary for one risk result.
pub fn risk_card(ui: &mut egui::Ui, theme: &Theme, risk: &RiskResult) {
    let colour = theme.risk_colour(risk.level);
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(risk.label()).heading().strong().color(colour));
        ui.add(
            egui::ProgressBar::new(f32::from(risk.score) / f32::from(RISK_SCORE_MAX))
                .fill(colour)
                .desired_height(10.0),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(&risk.summary).color(theme.weak_text));
    });
}

/// Card shown before any result exists.
pub fn risk_placeholder(ui: &mut egui::Ui, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Risk level: -").heading().color(theme.weak_text));
        ui.add(egui::ProgressBar::new(0.0).desired_height(10.0));
    });
}

fn card_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card_bg)
        .stroke(egui::Stroke::new(1.0, theme.card_border))
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_PADDING))
}
