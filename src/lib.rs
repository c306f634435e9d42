//! appx-visuals - Branding metadata from AppX package manifests
//!
//! Reads the `VisualElements` of an installed application's
//! `AppxManifest.xml` (display name, description, logos, background color)
//! so a splash screen or about dialog can reuse what the package declares.
//!
//! # Architecture
//!
//! 1. **Install location** - an [`InstallLocation`] hands out the manifest bytes
//! 2. **Manifest reader** - namespace-aware XML scan for `VisualElements`
//! 3. **Color parser** - `BackgroundColor` to ARGB channels, on demand
//! 4. **Reporting** - terminal or JSON output for the CLI

pub mod color;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;

pub use color::{parse_color, Argb, ColorError};
pub use config::Config;
pub use error::{ManifestError, Result};
pub use manifest::{
    parse_visual_element, DirectoryLocation, InstallLocation, ManifestReader, ManifestSchema,
    ManifestVisualElement, SchemaSelection,
};
pub use report::{ReportFormat, Reporter};
