// StegoSight - ui/panels/extract.rs
//
// Extract tab: target file, technique, optional password, and the
// Text / File result view.

use super::{file_name, inline_warning, media_selector, primary_button, section, PanelContext};
use crate::app::extract::{ExtractResultTab, ExtractStage};
use crate::app::state::{AppState, DropTarget};
use crate::ui::widgets::drop_zone::DropZone;
use crate::ui::widgets::method_card::method_list;
use crate::util::constants::CONTROL_PANEL_WIDTH;
use egui::RichText;

pub fn render(ctx: &egui::Context, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    egui::SidePanel::left("extract_controls")
        .resizable(false)
        .exact_width(CONTROL_PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("extract_controls_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| controls(ui, state, pcx));
        });

    egui::CentralPanel::default().show(ctx, |ui| result_view(ui, state, pcx));
}

fn controls(ui: &mut egui::Ui, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    let theme = pcx.theme;

    section(ui, theme, "1. File containing hidden data");
    if let Some(media) = media_selector(ui, state.extract.media_type()) {
        state.extract.methods.set_media_type(media);
    }
    ui.add_space(4.0);
    let target_name = state.extract.target.as_deref().map(file_name);
    let zone = DropZone {
        target: DropTarget::ExtractTarget,
        prompt: state.extract.media_type().drop_prompt(),
        current: target_name.as_deref(),
        dialog_title: "Choose a file to extract from",
        media: None,
    };
    if let Some(path) = zone.show(ui, theme, pcx.zones, pcx.files_hovering) {
        state.route_file(DropTarget::ExtractTarget, path);
    }

    section(ui, theme, "2. Extraction technique");
    if let Some(i) = method_list(ui, theme, &state.extract.methods) {
        state.extract.select_method(i);
    }

    section(ui, theme, "3. Decryption");
    ui.checkbox(&mut state.extract.maybe_encrypted, "The data may be encrypted");
    ui.add_enabled_ui(state.extract.maybe_encrypted, |ui| {
        ui.horizontal(|ui| {
            ui.label("Password:");
            ui.add(egui::TextEdit::singleline(&mut state.extract.password).password(true));
        });
    });

    ui.add_space(16.0);
    if primary_button(ui, theme, "\u{1f513} Start extraction", true) {
        state.start_extract();
    }
    if let Some(w) = &state.extract.warning {
        inline_warning(ui, theme, &w.to_string());
    }
    ui.add_space(8.0);
}

fn result_view(ui: &mut egui::Ui, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    let theme = pcx.theme;
    let result = match (state.extract.stage, &state.extract.result) {
        (ExtractStage::Result, Some(r)) => r.clone(),
        _ => {
            ui.add_space(24.0);
            ui.heading("Recover hidden data");
            ui.add_space(8.0);
            ui.label("Choose a file, pick a technique and press Start extraction.");
            ui.label(
                RichText::new("Auto-detect tries every supported technique in turn.")
                    .color(theme.weak_text),
            );
            return;
        }
    };

    ui.heading(RichText::new("\u{2705} Extraction complete").color(theme.success));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.extract.result_tab, ExtractResultTab::Text, "Text");
        ui.selectable_value(&mut state.extract.result_tab, ExtractResultTab::File, "File");
    });
    ui.separator();

    match state.extract.result_tab {
        ExtractResultTab::Text => {
            let mut text = result.text.clone();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .interactive(false)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("\u{1f4cb} Copy text").clicked() {
                ui.ctx().copy_text(result.text.clone());
                state.status_message = "Copied extracted text to clipboard.".to_string();
            }
        }
        ExtractResultTab::File => {
            egui::Grid::new("extracted_file")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("File name:");
                    ui.label(&result.file_name);
                    ui.end_row();
                    ui.label("Size:");
                    ui.label(&result.file_size);
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button("\u{1f4be} Save file").clicked() {
                state.extract.save_extracted_file();
                state.status_message = "Save requested.".to_string();
            }
        }
    }
}
