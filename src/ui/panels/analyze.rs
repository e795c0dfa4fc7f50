// StegoSight - ui/panels/analyze.rs
//
// Analyze tab: file and technique controls, the risk card with its result
// sub-tabs, and the activity console.

use super::{file_name, primary_button, section, PanelContext};
use crate::app::analyze::{AnalyzeResultTab, AnalyzeStatus, LogTag};
use crate::app::state::{AppState, DropTarget};
use crate::core::risk::Technique;
use crate::ui::theme::{Theme, CARD_PADDING, CARD_ROUNDING, CONSOLE_HEIGHT};
use crate::ui::widgets::drop_zone::DropZone;
use crate::ui::widgets::risk_card::{risk_card, risk_placeholder};
use crate::util::constants::CONTROL_PANEL_WIDTH;
use egui::{Color32, RichText};

pub fn render(ctx: &egui::Context, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    egui::SidePanel::left("analyze_controls")
        .resizable(false)
        .exact_width(CONTROL_PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("analyze_controls_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| controls(ui, state, pcx));
        });

    egui::TopBottomPanel::bottom("analyze_console")
        .resizable(true)
        .default_height(CONSOLE_HEIGHT)
        .show(ctx, |ui| console(ui, state, pcx.theme));

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("analyze_results_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| results(ui, state, pcx.theme));
    });
}

fn controls(ui: &mut egui::Ui, state: &mut AppState, pcx: &mut PanelContext<'_>) {
    let theme = pcx.theme;

    section(ui, theme, "1. File to analyse");
    let target_name = state.analyze.target.as_deref().map(file_name);
    let zone = DropZone {
        target: DropTarget::AnalyzeTarget,
        prompt: "\u{1f50d} Drop any image, audio or video file, or click to choose",
        current: target_name.as_deref(),
        dialog_title: "Choose a file to analyse",
        media: None,
    };
    if let Some(path) = zone.show(ui, theme, pcx.zones, pcx.files_hovering) {
        state.route_file(DropTarget::AnalyzeTarget, path);
    }

    section(ui, theme, "2. Techniques");
    for &technique in Technique::all() {
        ui.checkbox(state.analyze.options.flag_mut(technique), technique.label());
    }

    ui.add_space(16.0);
    let enabled = state.analyze.can_start();
    if primary_button(ui, theme, "\u{1f50d} Start analysis", enabled) {
        state.start_analyze();
    }
    ui.add_space(8.0);
}

fn results(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme) {
    let status_colour = match state.analyze.status {
        AnalyzeStatus::Warning => theme.warning,
        AnalyzeStatus::Complete => theme.text,
        AnalyzeStatus::Idle | AnalyzeStatus::Ready => theme.weak_text,
    };

    ui.heading("Analysis results");
    ui.add_space(6.0);
    match &state.analyze.report {
        Some(report) => risk_card(ui, theme, &report.risk),
        None => risk_placeholder(ui, theme),
    }
    ui.add_space(8.0);
    ui.label(RichText::new(&state.analyze.summary).color(status_colour));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let tab = &mut state.analyze.result_tab;
        ui.selectable_value(tab, AnalyzeResultTab::Overview, "Overview");
        ui.selectable_value(tab, AnalyzeResultTab::Findings, "Findings");
        ui.selectable_value(tab, AnalyzeResultTab::Guidance, "Guidance");
    });
    ui.separator();

    let Some(report) = &state.analyze.report else {
        ui.label(RichText::new("No results yet.").color(theme.weak_text));
        return;
    };

    match state.analyze.result_tab {
        AnalyzeResultTab::Overview => {
            for line in &report.summary_lines {
                ui.label(format!("\u{2022} {line}"));
            }
        }
        AnalyzeResultTab::Findings => {
            egui::Grid::new("analysis_findings")
                .num_columns(3)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Technique");
                    ui.strong("Result");
                    ui.strong("Confidence");
                    ui.end_row();
                    for finding in &report.findings {
                        ui.label(finding.technique.label());
                        ui.label(&finding.result);
                        ui.add(
                            egui::ProgressBar::new(f32::from(finding.confidence) / 100.0)
                                .desired_width(120.0)
                                .text(format!("{}%", finding.confidence)),
                        );
                        ui.end_row();
                    }
                });
        }
        AnalyzeResultTab::Guidance => {
            for item in &report.guidance {
                ui.label(format!("\u{2022} {item}"));
            }
        }
    }
}

fn console(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(RichText::new("Activity").strong());
    egui::Frame::new()
        .fill(theme.console_bg)
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .id_salt("analyze_console_scroll")
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.analyze.log_len() == 0 {
                        ui.label(
                            RichText::new("Waiting for a file...")
                                .monospace()
                                .color(theme.console_text),
                        );
                    }
                    for line in state.analyze.log_lines() {
                        ui.label(
                            RichText::new(line.render())
                                .monospace()
                                .color(tag_colour(theme, line.tag)),
                        );
                    }
                });
        });
}

fn tag_colour(theme: &Theme, tag: LogTag) -> Color32 {
    match tag {
        LogTag::Warn => theme.warning,
        LogTag::Done => theme.success,
        LogTag::Ready | LogTag::Info | LogTag::Run => theme.console_text,
    }
}
