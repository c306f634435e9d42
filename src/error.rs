//! Error types for reading manifest visual elements

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Everything that can go wrong while reading `VisualElements`
#[derive(Error, Diagnostic, Debug)]
pub enum ManifestError {
    /// No `VisualElements` element in a recognized namespace
    #[error("Could not parse the VisualElements from the app manifest.")]
    #[diagnostic(
        code(appx_visuals::manifest::not_found),
        help("the manifest needs a VisualElements element in the uap/windows10 or appx/2013 namespace")
    )]
    VisualElementsNotFound,

    /// The matched element lacks a required attribute
    #[error("VisualElements is missing the required attribute `{attribute}`")]
    #[diagnostic(code(appx_visuals::manifest::missing_attribute))]
    MissingAttribute { attribute: &'static str },

    /// Opening or reading the manifest file failed
    #[error(transparent)]
    #[diagnostic(code(appx_visuals::io))]
    Io(#[from] std::io::Error),

    /// The manifest is not well-formed XML
    #[error(transparent)]
    #[diagnostic(code(appx_visuals::xml))]
    Xml(#[from] quick_xml::Error),
}
