mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::manifest::ManifestVisualElement;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for outputting a manifest's visual elements
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    show_raw: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            show_raw: true,
        }
    }

    /// Terminal output: print only the URIs, not the raw manifest paths
    pub fn uris_only(mut self, uris_only: bool) -> Self {
        self.show_raw = !uris_only;
        self
    }

    /// Report the visual elements read from the manifest
    pub fn report(&self, visual: &ManifestVisualElement) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let mut reporter = TerminalReporter::new();
                if !self.show_raw {
                    reporter = reporter.uris_only();
                }
                reporter.report(visual)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(visual)
            }
        }
    }
}
