// StegoSight - ui/widgets/drop_zone.rs
//
// File drop zones. Each zone registers its screen rect for the current
// frame; the app resolves OS drops against those rects after all panels
// have been laid out.

use crate::app::state::DropTarget;
use crate::core::media::{MediaType, AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::ui::theme::{Theme, CARD_ROUNDING, DROP_ZONE_HEIGHT};
use egui::{Pos2, Rect, Sense, Stroke};
use std::path::PathBuf;

/// Drop zone rects laid out this frame.
#[derive(Debug, Default)]
pub struct DropZones {
    zones: Vec<(DropTarget, Rect)>,
}

impl DropZones {
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Record the part of `rect` inside `clip`. Zones scrolled out of view
    /// are not recorded.
    pub fn register(&mut self, target: DropTarget, rect: Rect, clip: Rect) {
        let visible = rect.intersect(clip);
        if visible.is_positive() {
            self.zones.push((target, visible));
        }
    }

    /// Zone under `pos`. Later registrations win when zones overlap.
    pub fn target_at(&self, pos: Pos2) -> Option<DropTarget> {
        self.zones
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(target, _)| *target)
    }
}

/// Native open dialog, pre-filtered for `media` when given.
pub fn pick_file(title: &str, media: Option<MediaType>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(title);
    if let Some(media) = media {
        let list = match media {
            MediaType::Image => IMAGE_EXTENSIONS,
            MediaType::Audio => AUDIO_EXTENSIONS,
            MediaType::Video => VIDEO_EXTENSIONS,
        };
        let exts: Vec<&str> = list.iter().map(|e| e.trim_start_matches('.')).collect();
        dialog = dialog.add_filter(media.label(), &exts);
    }
    dialog.add_filter("All files", &["*"]).pick_file()
}

/// One drop zone as laid out by a panel.
pub struct DropZone<'a> {
    pub target: DropTarget,
    pub prompt: &'a str,
    /// File name shown once something has been chosen.
    pub current: Option<&'a str>,
    pub dialog_title: &'a str,
    /// Extension filter for the click-to-browse dialog.
    pub media: Option<MediaType>,
}

impl DropZone<'_> {
    /// Render the zone and register its rect for drop routing.
    ///
    /// Returns the path picked through the file dialog when the zone is
    /// clicked; `None` when nothing was chosen. OS drops are not returned
    /// here; they are routed by the app through `DropZones`.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        theme: &Theme,
        zones: &mut DropZones,
        files_hovering: bool,
    ) -> Option<PathBuf> {
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, DROP_ZONE_HEIGHT), Sense::click());
        zones.register(self.target, rect, ui.clip_rect());

        let pointer_inside = ui
            .ctx()
            .pointer_hover_pos()
            .is_some_and(|p| rect.contains(p));
        let (fill, stroke) = if files_hovering && pointer_inside {
            (theme.drop_active_fill, Stroke::new(2.0, theme.primary))
        } else if response.hovered() {
            (theme.drop_fill, Stroke::new(2.0, theme.primary_hover))
        } else {
            (theme.drop_fill, Stroke::new(2.0, theme.drop_border))
        };

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect(
                rect,
                egui::CornerRadius::same(CARD_ROUNDING),
                fill,
                stroke,
                egui::StrokeKind::Inside,
            );

            let body = egui::TextStyle::Body.resolve(ui.style());
            let small = egui::TextStyle::Small.resolve(ui.style());
            let center = rect.center();
            match self.current {
                Some(name) => {
                    painter.text(
                        center - egui::vec2(0.0, 12.0),
                        egui::Align2::CENTER_CENTER,
                        format!("\u{1f4c4} {name}"),
                        body,
                        theme.text,
                    );
                    painter.text(
                        center + egui::vec2(0.0, 14.0),
                        egui::Align2::CENTER_CENTER,
                        "Drop another file or click to replace",
                        small,
                        theme.weak_text,
                    );
                }
                None => {
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        self.prompt,
                        body,
                        theme.weak_text,
                    );
                }
            }
        }

        if response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            pick_file(self.dialog_title, self.media)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(Pos2::new(x, y), egui::vec2(w, h))
    }

    fn screen() -> Rect {
        rect(0.0, 0.0, 1000.0, 1000.0)
    }

    #[test]
    fn test_target_at_hits_registered_zone() {
        let mut zones = DropZones::default();
        zones.register(DropTarget::EmbedCover, rect(0.0, 0.0, 100.0, 50.0), screen());
        zones.register(DropTarget::EmbedSecret, rect(0.0, 100.0, 100.0, 50.0), screen());

        assert_eq!(
            zones.target_at(Pos2::new(10.0, 10.0)),
            Some(DropTarget::EmbedCover)
        );
        assert_eq!(
            zones.target_at(Pos2::new(10.0, 120.0)),
            Some(DropTarget::EmbedSecret)
        );
        assert_eq!(zones.target_at(Pos2::new(10.0, 75.0)), None);
    }

    #[test]
    fn test_clear_forgets_previous_frame() {
        let mut zones = DropZones::default();
        zones.register(DropTarget::AnalyzeTarget, rect(0.0, 0.0, 10.0, 10.0), screen());
        zones.clear();
        assert_eq!(zones.target_at(Pos2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_zone_is_clipped_to_visible_area() {
        // Scroll viewport starts below a 60 px tab bar.
        let viewport = rect(0.0, 60.0, 400.0, 600.0);
        let mut zones = DropZones::default();
        // Half scrolled under the tab bar.
        zones.register(DropTarget::EmbedSecret, rect(0.0, 20.0, 400.0, 110.0), viewport);
        // Entirely scrolled out of view.
        zones.register(DropTarget::EmbedCover, rect(0.0, -200.0, 400.0, 110.0), viewport);

        assert_eq!(zones.target_at(Pos2::new(10.0, 40.0)), None);
        assert_eq!(zones.target_at(Pos2::new(10.0, -150.0)), None);
        assert_eq!(
            zones.target_at(Pos2::new(10.0, 100.0)),
            Some(DropTarget::EmbedSecret)
        );
    }
}
