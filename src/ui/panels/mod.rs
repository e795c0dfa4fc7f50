// StegoSight - ui/panels/mod.rs

pub mod about;
pub mod analyze;
pub mod embed;
pub mod extract;

use crate::core::media::MediaType;
use crate::ui::theme::{Theme, SECTION_SPACING};
use crate::ui::widgets::drop_zone::DropZones;

/// Per-frame inputs shared by the workflow panels.
pub struct PanelContext<'a> {
    pub theme: &'a Theme,
    pub zones: &'a mut DropZones,
    /// True while the OS is dragging files over the window.
    pub files_hovering: bool,
    pub now: std::time::Instant,
}

/// Bold section heading with spacing above it.
pub(crate) fn section(ui: &mut egui::Ui, theme: &Theme, title: &str) {
    ui.add_space(SECTION_SPACING);
    ui.label(egui::RichText::new(title).strong().color(theme.primary));
    ui.add_space(4.0);
}

/// Row of media-type toggle buttons. Returns the type clicked, if any.
pub(crate) fn media_selector(ui: &mut egui::Ui, current: MediaType) -> Option<MediaType> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for &media in MediaType::all() {
            if ui
                .selectable_label(current == media, media.label())
                .clicked()
                && current != media
            {
                picked = Some(media);
            }
        }
    });
    picked
}

/// Full-width primary action button.
pub(crate) fn primary_button(
    ui: &mut egui::Ui,
    theme: &Theme,
    text: &str,
    enabled: bool,
) -> bool {
    let button = egui::Button::new(egui::RichText::new(text).strong().color(theme.on_primary))
        .fill(theme.primary)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    ui.add_enabled(enabled, button).clicked()
}

/// Inline warning label under a control.
pub(crate) fn inline_warning(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(egui::RichText::new(format!("\u{26a0} {text}")).color(theme.warning));
}

pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
