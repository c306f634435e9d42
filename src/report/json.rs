use crate::color::Argb;
use crate::manifest::ManifestVisualElement;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, visual: &ManifestVisualElement) -> Result<()> {
        let json = self.render(visual)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(&self, visual: &ManifestVisualElement) -> Result<String> {
        let report = JsonReport::from_visual(visual);
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    schema: &'static str,
    display_name: &'a str,
    description: &'a str,
    logo_path: &'a str,
    logo_uri: &'a str,
    small_logo_path: &'a str,
    small_logo_uri: &'a str,
    background_color_raw: &'a str,
    background_color: Option<JsonColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color_error: Option<String>,
}

#[derive(Serialize)]
struct JsonColor {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
    hex: String,
}

impl From<Argb> for JsonColor {
    fn from(color: Argb) -> Self {
        Self {
            a: color.a,
            r: color.r,
            g: color.g,
            b: color.b,
            hex: color.to_hex(),
        }
    }
}

impl<'a> JsonReport<'a> {
    fn from_visual(visual: &'a ManifestVisualElement) -> Self {
        let (background_color, background_color_error) = match visual.background_color() {
            Ok(color) => (Some(JsonColor::from(color)), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            schema: visual.schema().as_str(),
            display_name: visual.display_name(),
            description: visual.description(),
            logo_path: visual.logo_path(),
            logo_uri: visual.logo_uri(),
            small_logo_path: visual.small_logo_path(),
            small_logo_uri: visual.small_logo_uri(),
            background_color_raw: visual.background_color_raw(),
            background_color,
            background_color_error,
        }
    }
}
