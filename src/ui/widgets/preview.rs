// StegoSight - ui/widgets/preview.rs
//
// Cover preview pane. Decoded pixels come from the app layer; this widget
// only uploads them to the GPU, once per cover selection.

use crate::app::embed::CoverPreview;
use crate::ui::theme::{Theme, CARD_PADDING, CARD_ROUNDING};
use crate::util::constants::PREVIEW_MIN_HEIGHT;
use egui::TextureHandle;

/// Texture cache keyed by `EmbedWorkflow::preview_generation`.
#[derive(Default)]
pub struct PreviewTexture {
    generation: u64,
    handle: Option<TextureHandle>,
}

impl PreviewTexture {
    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        preview: &CoverPreview,
        generation: u64,
    ) -> Option<&TextureHandle> {
        let CoverPreview::Image(img) = preview else {
            self.handle = None;
            return None;
        };
        if self.handle.is_none() || self.generation != generation {
            let colour = egui::ColorImage::from_rgba_unmultiplied(
                [img.width as usize, img.height as usize],
                &img.rgba,
            );
            self.handle =
                Some(ctx.load_texture("cover_preview", colour, egui::TextureOptions::LINEAR));
            self.generation = generation;
        }
        self.handle.as_ref()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        preview: &CoverPreview,
        generation: u64,
    ) {
        let ctx = ui.ctx().clone();
        egui::Frame::new()
            .fill(theme.window_bg)
            .stroke(egui::Stroke::new(1.0, theme.card_border))
            .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
            .inner_margin(egui::Margin::same(CARD_PADDING))
            .show(ui, |ui| {
                ui.set_min_height(PREVIEW_MIN_HEIGHT);
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| match self.texture_for(&ctx, preview, generation) {
                    Some(tex) => {
                        let max = egui::vec2(
                            ui.available_width(),
                            PREVIEW_MIN_HEIGHT.max(ui.available_height() * 0.6),
                        );
                        let ts = tex.size_vec2();
                        let scale = (max.x / ts.x).min(max.y / ts.y).min(1.0);
                        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                            tex.id(),
                            ts * scale,
                        )));
                    }
                    None => {
                        ui.add_space(PREVIEW_MIN_HEIGHT / 2.0 - 20.0);
                        let text = match preview {
                            CoverPreview::Message(m) => m.as_str(),
                            _ => "No file selected",
                        };
                        ui.label(egui::RichText::new(text).color(theme.weak_text));
                    }
                });
            });
    }
}
