// StegoSight - ui/panels/embed.rs
//
// Embed tab: control column on the left, stage-dependent context on the
// right (welcome, cover preview, progress, or result).

use super::{file_name, inline_warning, media_selector, primary_button, section, PanelContext};
use crate::app::embed::{EmbedStage, SecretSource};
use crate::app::state::{AppState, DropTarget};
use crate::ui::theme::{CARD_PADDING, CARD_ROUNDING};
use crate::ui::widgets::drop_zone::DropZone;
use crate::ui::widgets::method_card::method_list;
use crate::ui::widgets::preview::PreviewTexture;
use crate::ui::widgets::risk_card::risk_card;
use crate::util::constants::CONTROL_PANEL_WIDTH;
use egui::RichText;

pub fn render(
    ctx: &egui::Context,
    state: &mut AppState,
    pcx: &mut PanelContext<'_>,
    preview: &mut PreviewTexture,
) {
    egui::SidePanel::left("embed_controls")
        .resizable(false)
        .exact_width(CONTROL_PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("embed_controls_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| controls(ui, state, pcx));
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("embed_context_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| context(ui, state, pcx, preview));
    });
}

fn controls(ui: &mut egui::Ui, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    let theme = pcx.theme;

    // -------------------------------------------------------------------------
    // Cover file
    // -------------------------------------------------------------------------
    section(ui, theme, "1. Cover file");
    if let Some(media) = media_selector(ui, state.embed.media_type()) {
        state.embed.set_media_type(media);
    }
    ui.add_space(4.0);
    let cover_name = state.embed.cover.as_ref().map(|c| c.file_name.clone());
    let cover_zone = DropZone {
        target: DropTarget::EmbedCover,
        prompt: state.embed.cover_prompt(),
        current: cover_name.as_deref(),
        dialog_title: "Choose a cover file",
        media: Some(state.embed.media_type()),
    };
    if let Some(path) = cover_zone.show(ui, theme, pcx.zones, pcx.files_hovering) {
        state.route_file(DropTarget::EmbedCover, path);
    }

    // -------------------------------------------------------------------------
    // Secret data
    // -------------------------------------------------------------------------
    section(ui, theme, "2. Secret data");
    ui.horizontal(|ui| {
        ui.radio_value(&mut state.embed.secret_source, SecretSource::Text, "Text");
        ui.radio_value(&mut state.embed.secret_source, SecretSource::File, "File");
    });
    match state.embed.secret_source {
        SecretSource::Text => {
            ui.add(
                egui::TextEdit::multiline(&mut state.embed.secret_text)
                    .hint_text("Type the message to hide...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
        }
        SecretSource::File => {
            let secret_name = state.embed.secret_file.as_deref().map(file_name);
            let secret_zone = DropZone {
                target: DropTarget::EmbedSecret,
                prompt: "\u{1f4ce} Drop the file to hide, or click to choose",
                current: secret_name.as_deref(),
                dialog_title: "Choose a file to hide",
                media: None,
            };
            if let Some(path) = secret_zone.show(ui, theme, pcx.zones, pcx.files_hovering) {
                state.route_file(DropTarget::EmbedSecret, path);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Technique
    // -------------------------------------------------------------------------
    section(ui, theme, "3. Embedding technique");
    if let Some(i) = method_list(ui, theme, &state.embed.methods) {
        state.embed.select_method(i);
    }

    // -------------------------------------------------------------------------
    // Security
    // -------------------------------------------------------------------------
    section(ui, theme, "4. Security");
    ui.checkbox(&mut state.embed.security.encrypt, "Encrypt before embedding");
    ui.add_enabled_ui(state.embed.security.encrypt, |ui| {
        egui::Grid::new("embed_passwords")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Password:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.embed.security.password).password(true),
                );
                ui.end_row();
                ui.label("Confirm:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.embed.security.confirm_password)
                        .password(true),
                );
                ui.end_row();
            });
    });
    if !state.embed.security.passwords_match() {
        inline_warning(ui, theme, "Passwords do not match");
    }

    ui.add_space(16.0);
    let label = if state.embed.is_processing() {
        "Embedding..."
    } else {
        "\u{1f512} Start embedding"
    };
    if primary_button(ui, theme, label, !state.embed.is_processing()) {
        state.start_embed(pcx.now);
    }
    if let Some(w) = &state.embed.warning {
        inline_warning(ui, theme, &w.to_string());
    }
    ui.add_space(8.0);
}

fn context(
    ui: &mut egui::Ui,
    state: &mut AppState,
    pcx: &mut PanelContext<'_>,
    preview: &mut PreviewTexture,
) {
    let theme = pcx.theme;
    match state.embed.stage {
        EmbedStage::Idle => {
            let media = state.embed.media_type();
            ui.add_space(24.0);
            ui.heading(format!("Hide data in {}", media.label().to_lowercase()));
            ui.add_space(8.0);
            ui.label(media.method_summary());
            ui.label(RichText::new(media.supported_formats()).color(theme.weak_text));
            ui.add_space(12.0);
            ui.label("Choose a cover file on the left to see a preview and capacity estimate.");
        }
        EmbedStage::FileSelected => {
            ui.heading("Cover preview");
            ui.add_space(6.0);
            preview.show(
                ui,
                theme,
                &state.embed.preview,
                state.embed.preview_generation,
            );
            ui.add_space(10.0);
            if let Some(info) = &state.embed.cover {
                egui::Frame::new()
                    .fill(theme.card_bg)
                    .stroke(egui::Stroke::new(1.0, theme.card_border))
                    .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
                    .inner_margin(egui::Margin::same(CARD_PADDING))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        egui::Grid::new("cover_info")
                            .num_columns(2)
                            .spacing([16.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("File name:");
                                ui.label(&info.file_name);
                                ui.end_row();

                                ui.label("Size:");
                                ui.label(info.size_text());
                                ui.end_row();

                                ui.label("Type:");
                                ui.label(&info.extension);
                                ui.end_row();

                                ui.label("Capacity:");
                                ui.label(RichText::new(info.capacity_text()).color(theme.primary));
                                ui.end_row();
                            });
                    });
            }
        }
        EmbedStage::Processing => {
            ui.add_space(80.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(48.0).color(theme.primary));
                ui.add_space(12.0);
                ui.heading("Embedding data...");
                if let Some(left) = state.embed.time_until_completion(pcx.now) {
                    ui.label(
                        RichText::new(format!("About {:.1} s remaining", left.as_secs_f32()))
                            .color(theme.weak_text),
                    );
                }
            });
        }
        EmbedStage::Success => {
            ui.add_space(12.0);
            ui.heading(RichText::new("\u{2705} Embedding complete").color(theme.success));
            ui.add_space(8.0);
            if let Some(risk) = &state.embed.risk {
                risk_card(ui, theme, risk);
            }
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("\u{1f4be} Save stego file").clicked() {
                    state.embed.save_stego_file();
                    state.status_message = "Save requested.".to_string();
                }
                if ui.button("\u{1f50d} Deep analysis").clicked() {
                    state.embed.request_deep_analysis();
                    state.status_message = "Deep analysis requested.".to_string();
                }
            });
        }
    }
}
