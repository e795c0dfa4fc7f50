// StegoSight - core/risk.rs
//
// Risk score model and the sample results shown by the simulated workflows.
// No value here is derived from file content.

use crate::util::constants::{
    RISK_LOW_MAX, RISK_MEDIUM_MAX, RISK_SCORE_MAX, SAMPLE_ANALYSIS_RISK_SCORE,
    SAMPLE_EMBED_RISK_SCORE,
};

/// Banded interpretation of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score <= RISK_LOW_MAX {
            Self::Low
        } else if score <= RISK_MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Score, level and one-paragraph summary shown on a risk card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskResult {
    pub score: u8,
    pub level: RiskLevel,
    pub summary: String,
}

impl RiskResult {
    /// Build a result; scores above 100 are clamped.
    pub fn new(score: u8, summary: impl Into<String>) -> Self {
        let score = score.min(RISK_SCORE_MAX);
        Self {
            score,
            level: RiskLevel::from_score(score),
            summary: summary.into(),
        }
    }

    /// Compact label such as `Risk Score: 18 (Low)`.
    pub fn label(&self) -> String {
        format!("Risk Score: {} ({})", self.score, self.level.label())
    }
}

/// Statistical techniques offered on the Analyze tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    ChiSquare,
    Histogram,
    FileStructure,
}

impl Technique {
    pub fn all() -> &'static [Technique] {
        &[Self::ChiSquare, Self::Histogram, Self::FileStructure]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ChiSquare => "Chi-Square Attack",
            Self::Histogram => "Histogram Analysis",
            Self::FileStructure => "File Structure Analysis",
        }
    }

    /// Short name used in the activity log.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::ChiSquare => "Chi-Square",
            Self::Histogram => "Histogram",
            Self::FileStructure => "Structure",
        }
    }
}

/// Which techniques the user has ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueOptions {
    pub chi_square: bool,
    pub histogram: bool,
    pub file_structure: bool,
}

impl Default for TechniqueOptions {
    fn default() -> Self {
        Self {
            chi_square: true,
            histogram: true,
            file_structure: true,
        }
    }
}

impl TechniqueOptions {
    pub fn is_enabled(&self, technique: Technique) -> bool {
        match technique {
            Technique::ChiSquare => self.chi_square,
            Technique::Histogram => self.histogram,
            Technique::FileStructure => self.file_structure,
        }
    }

    pub fn flag_mut(&mut self, technique: Technique) -> &mut bool {
        match technique {
            Technique::ChiSquare => &mut self.chi_square,
            Technique::Histogram => &mut self.histogram,
            Technique::FileStructure => &mut self.file_structure,
        }
    }

    pub fn enabled(&self) -> Vec<Technique> {
        Technique::all()
            .iter()
            .copied()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }

    pub fn any_enabled(&self) -> bool {
        self.chi_square || self.histogram || self.file_structure
    }
}

/// One row of the findings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub technique: Technique,
    pub result: String,
    /// Confidence in percent (0-100).
    pub confidence: u8,
}

/// Everything the Analyze result column shows after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub risk: RiskResult,
    pub summary_lines: Vec<String>,
    pub findings: Vec<Finding>,
    pub guidance: Vec<String>,
}

/// Risk shown on the Embed success card.
pub fn sample_embed_risk() -> RiskResult {
    RiskResult::new(
        SAMPLE_EMBED_RISK_SCORE,
        "The stego file shows few statistical traces of embedding",
    )
}

/// Placeholder analysis result. Findings are listed only for the techniques
/// in `options`.
pub fn sample_analysis_report(options: &TechniqueOptions) -> AnalysisReport {
    let risk = RiskResult::new(
        SAMPLE_ANALYSIS_RISK_SCORE,
        "Patterns that may indicate hidden data were found; further inspection is advised",
    );

    let summary_lines = vec![
        format!(
            "Overall risk score {}/100 ({} level)",
            risk.score,
            risk.level.label().to_lowercase()
        ),
        "Chi-Square reports strong anomalies in the 120-140 pixel range".to_string(),
        "Appended trailing data and some metadata were found".to_string(),
    ];

    let findings = options
        .enabled()
        .into_iter()
        .map(|technique| {
            let (result, confidence) = match technique {
                Technique::ChiSquare => ("Deviation 0.42 (moderate)", 65),
                Technique::Histogram => ("Anomaly in the 120-140 range", 58),
                Technique::FileStructure => ("Trailing data after end of file", 92),
            };
            Finding {
                technique,
                result: result.to_string(),
                confidence,
            }
        })
        .collect();

    let guidance = vec![
        "Compare this file with the original to check for pixel differences".to_string(),
        "Try extraction with LSB or Tail Append on the Extract tab".to_string(),
        "Inspect the metadata for further hidden information".to_string(),
    ];

    AnalysisReport {
        risk,
        summary_lines,
        findings,
        guidance,
    }
}
