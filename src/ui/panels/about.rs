// StegoSight - ui/panels/about.rs
//
// Help > About: version, the three workflows, and where StegoSight keeps its
// configuration, session and log files.

use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use crate::util::constants::{APP_NAME, APP_VERSION};
use egui::RichText;
use std::path::Path;

pub fn render(ctx: &egui::Context, state: &mut AppState, theme: &Theme) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(APP_NAME).size(22.0).strong().color(theme.primary));
                ui.label(RichText::new(format!("v{APP_VERSION}")).color(theme.weak_text));
            });
            ui.label("Stego & Anti-Stego Intelligent Guard");
            ui.add_space(10.0);

            ui.strong("Workflows");
            egui::Grid::new("about_workflows")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for &tab in Tab::all() {
                        ui.label(tab.label());
                        ui.label(tab.summary());
                        ui.end_row();
                    }
                });
            ui.label(
                RichText::new("Results in this build are sample values.")
                    .small()
                    .color(theme.warning),
            );
            ui.add_space(10.0);

            ui.strong("Files");
            egui::Grid::new("about_files")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    path_row(ui, "Configuration", state.config_path.as_deref(), "not resolved");
                    path_row(ui, "Session", state.session_path.as_deref(), "not saved");
                    path_row(ui, "Log", state.log_path.as_deref(), "stderr only");
                });

            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                close_clicked = ui.button("Close").clicked();
            });
        });

    if !open || close_clicked {
        state.show_about = false;
    }
}

fn path_row(ui: &mut egui::Ui, label: &str, path: Option<&Path>, missing: &str) {
    ui.label(label);
    match path {
        Some(p) => {
            let shown = p.display().to_string();
            let response = ui
                .label(RichText::new(&shown).monospace())
                .interact(egui::Sense::click())
                .on_hover_text("Click to copy");
            if response.clicked() {
                ui.ctx().copy_text(shown);
            }
        }
        None => {
            ui.label(RichText::new(missing).weak());
        }
    }
    ui.end_row();
}
