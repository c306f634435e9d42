use crate::manifest::ManifestVisualElement;
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Print the raw attribute values next to the URIs
    show_raw: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_raw: true }
    }

    /// Hide the raw manifest paths
    pub fn uris_only(mut self) -> Self {
        self.show_raw = false;
        self
    }

    pub fn report(&self, visual: &ManifestVisualElement) -> Result<()> {
        println!();
        println!("{}", visual.display_name().cyan().bold());
        println!("  {}", visual.description());
        println!();

        self.print_field("Schema", visual.schema().as_str());
        self.print_logo("Logo", visual.logo_uri(), visual.logo_path());
        self.print_logo("Small logo", visual.small_logo_uri(), visual.small_logo_path());

        match visual.background_color() {
            Ok(color) => {
                let channels = format!(
                    "a={} r={} g={} b={}",
                    color.a, color.r, color.g, color.b
                );
                self.print_field(
                    "Background",
                    &format!("{} {}", color.to_hex().bold(), channels.dimmed()),
                );
            }
            Err(e) => {
                self.print_field(
                    "Background",
                    &format!("{} {}", visual.background_color_raw(), e.to_string().red()),
                );
            }
        }

        println!();
        Ok(())
    }

    fn print_logo(&self, label: &str, uri: &str, raw: &str) {
        if self.show_raw {
            self.print_field(label, &format!("{} {}", uri, format!("({})", raw).dimmed()));
        } else {
            self.print_field(label, uri);
        }
    }

    fn print_field(&self, label: &str, value: &str) {
        println!("  {:<12} {}", format!("{}:", label).dimmed(), value);
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
