//! AppX manifest `VisualElements` support
//!
//! The reader opens `AppxManifest.xml` through an [`InstallLocation`],
//! finds the first `VisualElements` element in a recognized schema
//! namespace and projects its attributes into a [`ManifestVisualElement`].

mod location;
mod reader;
mod schema;

pub use location::{DirectoryLocation, InstallLocation};
pub use reader::{parse_visual_element, ManifestReader};
pub use schema::{ManifestSchema, SchemaSelection};

use crate::color::{parse_color, Argb, ColorError};

/// Default manifest file name inside an install location
pub const MANIFEST_FILE_NAME: &str = "AppxManifest.xml";

/// URI prefix for resources inside the installed package
pub const APP_PACKAGE_URI_BASE: &str = "ms-appx:///";

/// Presentation metadata declared by one application in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVisualElement {
    schema: ManifestSchema,
    display_name: String,
    description: String,
    logo_path: String,
    logo_uri: String,
    small_logo_path: String,
    small_logo_uri: String,
    background_color_raw: String,
}

impl ManifestVisualElement {
    pub(crate) fn new(
        schema: ManifestSchema,
        display_name: String,
        description: String,
        logo_path: String,
        small_logo_path: String,
        background_color_raw: String,
        uri_base: &str,
    ) -> Self {
        let logo_uri = package_uri(uri_base, &logo_path);
        let small_logo_uri = package_uri(uri_base, &small_logo_path);

        Self {
            schema,
            display_name,
            description,
            logo_path,
            logo_uri,
            small_logo_path,
            small_logo_uri,
            background_color_raw,
        }
    }

    /// Schema generation the element was read with
    pub fn schema(&self) -> ManifestSchema {
        self.schema
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw `Square150x150Logo` value
    pub fn logo_path(&self) -> &str {
        &self.logo_path
    }

    pub fn logo_uri(&self) -> &str {
        &self.logo_uri
    }

    /// Raw small logo value (`Square44x44Logo` or `Square30x30Logo`)
    pub fn small_logo_path(&self) -> &str {
        &self.small_logo_path
    }

    pub fn small_logo_uri(&self) -> &str {
        &self.small_logo_uri
    }

    /// `BackgroundColor` exactly as declared
    pub fn background_color_raw(&self) -> &str {
        &self.background_color_raw
    }

    /// Parse the declared background color. Not cached.
    pub fn background_color(&self) -> Result<Argb, ColorError> {
        parse_color(&self.background_color_raw)
    }
}

/// Build a package URI from a manifest path, normalizing `\` to `/`
fn package_uri(base: &str, path: &str) -> String {
    format!("{}{}", base, path.replace('\\', "/"))
}
