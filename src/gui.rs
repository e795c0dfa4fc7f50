// StegoSight - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu, tab bar, status bar and workflow panels, drives
// the embed completion deadline, and routes OS file drops to drop zones.

use crate::app::state::{AppState, Tab};
use crate::ui;
use crate::ui::panels::PanelContext;
use crate::ui::theme::Theme;
use crate::ui::widgets::drop_zone::{pick_file, DropZones};
use crate::ui::widgets::preview::PreviewTexture;
use crate::util::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use std::path::PathBuf;
use std::time::Instant;

/// The StegoSight application.
pub struct StegoSightApp {
    pub state: AppState,
    zones: DropZones,
    preview: PreviewTexture,
    /// `(dark_mode, font_size)` last installed on the context.
    applied_style: Option<(bool, f32)>,
}

impl StegoSightApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            zones: DropZones::default(),
            preview: PreviewTexture::default(),
            applied_style: None,
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open File\u{2026}").clicked() {
                        if let Some(path) = pick_file("Open file", None) {
                            self.state.open_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let theme_label = if self.state.dark_mode {
                        "\u{2600} Light Mode"
                    } else {
                        "\u{1f319} Dark Mode"
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.toggle_theme();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.add_enabled_ui(self.state.font_size < MAX_FONT_SIZE, |ui| {
                        if ui.button("Larger Text").clicked() {
                            self.state.set_font_size(self.state.font_size + 1.0);
                        }
                    });
                    ui.add_enabled_ui(self.state.font_size > MIN_FONT_SIZE, |ui| {
                        if ui.button("Smaller Text").clicked() {
                            self.state.set_font_size(self.state.font_size - 1.0);
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn tab_bar(&mut self, ctx: &egui::Context, theme: &Theme) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for &tab in Tab::all() {
                    let selected = self.state.active_tab == tab;
                    let text = egui::RichText::new(tab.label()).size(self.state.font_size + 2.0);
                    let text = if selected {
                        text.strong().color(theme.primary)
                    } else {
                        text
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        self.state.select_tab(tab);
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.embed.is_processing() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });
    }
}

impl eframe::App for StegoSightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Fire the embed completion once its deadline passes, and wake up
        // for it even if the user does not touch the window.
        if let Some(wait) = self.state.tick(now) {
            ctx.request_repaint_after(wait);
        }

        let style_key = (self.state.dark_mode, self.state.font_size);
        if self.applied_style != Some(style_key) {
            Theme::for_mode(self.state.dark_mode).apply(ctx, self.state.font_size);
            self.applied_style = Some(style_key);
        }
        let theme = Theme::for_mode(self.state.dark_mode);

        let (dropped, files_hovering, pointer) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect();
            (
                dropped,
                !i.raw.hovered_files.is_empty(),
                i.pointer.hover_pos(),
            )
        });

        self.menu_bar(ctx);
        self.tab_bar(ctx, &theme);
        self.status_bar(ctx);

        self.zones.clear();
        let mut pcx = PanelContext {
            theme: &theme,
            zones: &mut self.zones,
            files_hovering,
            now,
        };
        match self.state.active_tab {
            Tab::Embed => {
                ui::panels::embed::render(ctx, &mut self.state, &mut pcx, &mut self.preview)
            }
            Tab::Extract => ui::panels::extract::render(ctx, &mut self.state, &mut pcx),
            Tab::Analyze => ui::panels::analyze::render(ctx, &mut self.state, &mut pcx),
        }

        ui::panels::about::render(ctx, &mut self.state, &theme);

        // Drops are resolved after layout so this frame's zone rects are
        // known. Only the first file is used.
        let mut dropped = dropped.into_iter();
        if let Some(path) = dropped.next() {
            let target = pointer
                .and_then(|p| self.zones.target_at(p))
                .unwrap_or_else(|| self.state.active_tab.primary_drop_target());
            tracing::debug!(?target, path = %path.display(), "File dropped");
            self.state.route_file(target, path);
            let extra = dropped.count();
            if extra > 0 {
                tracing::debug!(extra, "Ignoring additional dropped files");
            }
        }
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
