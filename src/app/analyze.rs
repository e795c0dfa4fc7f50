// StegoSight - app/analyze.rs
//
// Analyze workflow state: target file, technique checkboxes, the simulated
// report, and the bounded activity log shown in the console pane.

use crate::core::risk::{sample_analysis_report, AnalysisReport, TechniqueOptions};
use crate::util::constants::MAX_ACTIVITY_LOG_LINES;
use crate::util::error::WorkflowError;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::path::PathBuf;

const INITIAL_SUMMARY: &str = "Select a file and press Start analysis to see results";

/// Overall state of the Analyze tab, used for status colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeStatus {
    Idle,
    Ready,
    Warning,
    Complete,
}

/// Sub-tab of the result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeResultTab {
    Overview,
    Findings,
    Guidance,
}

/// Severity tag printed in front of each activity log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    Ready,
    Info,
    Run,
    Warn,
    Done,
}

impl LogTag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "[READY]",
            Self::Info => "[INFO]",
            Self::Run => "[RUN]",
            Self::Warn => "[WARN]",
            Self::Done => "[DONE]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLine {
    pub timestamp: DateTime<Local>,
    pub tag: LogTag,
    pub message: String,
}

impl ActivityLine {
    /// `HH:MM:SS [TAG] message`, as rendered in the console.
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format("%H:%M:%S"),
            self.tag.label(),
            self.message
        )
    }
}

/// Complete Analyze tab state.
#[derive(Debug)]
pub struct AnalyzeWorkflow {
    pub target: Option<PathBuf>,
    pub options: TechniqueOptions,
    pub status: AnalyzeStatus,
    /// One-paragraph overview above the tabs; also carries warning text.
    pub summary: String,
    /// Last successful report. Warnings never touch it.
    pub report: Option<AnalysisReport>,
    pub result_tab: AnalyzeResultTab,
    log: VecDeque<ActivityLine>,
}

impl Default for AnalyzeWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzeWorkflow {
    pub fn new() -> Self {
        Self {
            target: None,
            options: TechniqueOptions::default(),
            status: AnalyzeStatus::Idle,
            summary: INITIAL_SUMMARY.to_string(),
            report: None,
            result_tab: AnalyzeResultTab::Overview,
            log: VecDeque::new(),
        }
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &ActivityLine> {
        self.log.iter()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Start is offered once a file has been chosen; `start` re-checks.
    pub fn can_start(&self) -> bool {
        self.target.is_some()
    }

    /// A file was dropped or chosen. Resets the log to a single ready line.
    pub fn select_target(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "Analysis target selected");
        self.log.clear();
        self.push(LogTag::Ready, format!("Ready to analyse {}", path.display()));
        self.target = Some(path);
        self.status = AnalyzeStatus::Ready;
    }

    /// Run the simulated analysis.
    ///
    /// On refusal the log gets a single `[WARN]` line, the overview shows the
    /// reason and the previous report is left as it was.
    pub fn start(&mut self) -> Result<(), WorkflowError> {
        let path = match &self.target {
            None => {
                return Err(self.warn(WorkflowError::NoFileSelected {
                    workflow: "analysis",
                }))
            }
            Some(p) if !p.exists() => {
                let e = WorkflowError::FileNotFound { path: p.clone() };
                return Err(self.warn(e));
            }
            Some(p) => p.clone(),
        };
        if !self.options.any_enabled() {
            return Err(self.warn(WorkflowError::NoTechniqueSelected));
        }

        let techniques: Vec<&str> = self
            .options
            .enabled()
            .into_iter()
            .map(|t| t.short_name())
            .collect();
        tracing::info!(
            path = %path.display(),
            techniques = %techniques.join(","),
            "Analysis started"
        );

        self.log.clear();
        self.push(
            LogTag::Info,
            format!("Starting analysis of {}", path.display()),
        );
        self.push(
            LogTag::Run,
            format!("Running techniques: {}", techniques.join(", ")),
        );

        let report = sample_analysis_report(&self.options);
        self.summary = report.summary_lines.join("\n");
        self.push(
            LogTag::Done,
            format!("Analysis complete ({})", report.risk.label()),
        );
        tracing::info!(risk = %report.risk.label(), "Analysis complete");
        self.report = Some(report);
        self.status = AnalyzeStatus::Complete;
        Ok(())
    }

    fn warn(&mut self, error: WorkflowError) -> WorkflowError {
        tracing::warn!(error = %error, "Analysis start refused");
        self.log.clear();
        self.push(LogTag::Warn, error.to_string());
        self.summary = error.to_string();
        self.status = AnalyzeStatus::Warning;
        error
    }

    fn push(&mut self, tag: LogTag, message: String) {
        if self.log.len() >= MAX_ACTIVITY_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(ActivityLine {
            timestamp: Local::now(),
            tag,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn existing_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("suspect.png");
        std::fs::write(&path, b"x").unwrap();
        path
    }

    fn tags(w: &AnalyzeWorkflow) -> Vec<LogTag> {
        w.log_lines().map(|l| l.tag).collect()
    }

    #[test]
    fn test_initial_state() {
        let w = AnalyzeWorkflow::new();
        assert_eq!(w.status, AnalyzeStatus::Idle);
        assert!(!w.can_start());
        assert!(w.report.is_none());
        assert_eq!(w.log_len(), 0);
        assert!(w.options.chi_square && w.options.histogram && w.options.file_structure);
    }

    #[test]
    fn test_select_resets_log_to_ready_line() {
        let mut w = AnalyzeWorkflow::new();
        w.select_target(PathBuf::from("a.png"));
        w.select_target(PathBuf::from("b.png"));
        assert_eq!(tags(&w), vec![LogTag::Ready]);
        assert!(w.can_start());
        assert_eq!(w.status, AnalyzeStatus::Ready);
    }

    #[test]
    fn test_start_without_file_warns() {
        let mut w = AnalyzeWorkflow::new();
        let err = w.start().unwrap_err();
        assert_eq!(
            err,
            WorkflowError::NoFileSelected {
                workflow: "analysis"
            }
        );
        assert_eq!(tags(&w), vec![LogTag::Warn]);
        assert_eq!(w.status, AnalyzeStatus::Warning);
        assert!(w.report.is_none());
    }

    #[test]
    fn test_start_with_missing_file_warns() {
        let dir = TempDir::new().unwrap();
        let mut w = AnalyzeWorkflow::new();
        w.select_target(dir.path().join("gone.png"));
        assert!(matches!(
            w.start(),
            Err(WorkflowError::FileNotFound { .. })
        ));
        assert_eq!(tags(&w), vec![LogTag::Warn]);
    }

    #[test]
    fn test_successful_run_fills_report_and_log() {
        let dir = TempDir::new().unwrap();
        let mut w = AnalyzeWorkflow::new();
        w.select_target(existing_file(&dir));
        w.start().unwrap();

        assert_eq!(tags(&w), vec![LogTag::Info, LogTag::Run, LogTag::Done]);
        assert_eq!(w.status, AnalyzeStatus::Complete);
        let report = w.report.as_ref().unwrap();
        assert_eq!(report.risk.score, 62);
        assert_eq!(report.findings.len(), 3);
        assert_eq!(report.guidance.len(), 3);
        assert_eq!(w.summary.lines().count(), 3);
        assert!(w
            .log_lines()
            .nth(1)
            .unwrap()
            .message
            .contains("Chi-Square, Histogram, Structure"));
    }

    #[test]
    fn test_warning_keeps_previous_report() {
        let dir = TempDir::new().unwrap();
        let mut w = AnalyzeWorkflow::new();
        w.select_target(existing_file(&dir));
        w.start().unwrap();
        let before = w.report.clone();

        w.options = TechniqueOptions {
            chi_square: false,
            histogram: false,
            file_structure: false,
        };
        assert_eq!(w.start(), Err(WorkflowError::NoTechniqueSelected));
        assert_eq!(w.report, before);
        assert_eq!(tags(&w), vec![LogTag::Warn]);
        assert_eq!(w.summary, "Select at least one analysis technique");
    }

    #[test]
    fn test_disabled_techniques_are_not_reported() {
        let dir = TempDir::new().unwrap();
        let mut w = AnalyzeWorkflow::new();
        w.select_target(existing_file(&dir));
        w.options.histogram = false;
        w.start().unwrap();
        assert_eq!(w.report.as_ref().unwrap().findings.len(), 2);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut w = AnalyzeWorkflow::new();
        for i in 0..(MAX_ACTIVITY_LOG_LINES + 10) {
            w.push(LogTag::Info, format!("line {i}"));
        }
        assert_eq!(w.log_len(), MAX_ACTIVITY_LOG_LINES);
        assert_eq!(w.log_lines().next().unwrap().message, "line 10");
    }

    #[test]
    fn test_render_format() {
        let line = ActivityLine {
            timestamp: Local::now(),
            tag: LogTag::Warn,
            message: "careful".into(),
        };
        let text = line.render();
        assert!(text.ends_with(" [WARN] careful"));
        assert_eq!(text.len(), "HH:MM:SS [WARN] careful".len());
    }
}
