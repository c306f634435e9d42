use serde::{Deserialize, Serialize};

/// Manifest schema generation that declares `VisualElements`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestSchema {
    /// Windows 10 universal apps (`uap` namespace)
    Uap,
    /// Windows 8.1 apps (2013 appx namespace)
    Win81,
}

impl ManifestSchema {
    /// Namespace URI the `VisualElements` element is bound to
    pub fn namespace(&self) -> &'static str {
        match self {
            ManifestSchema::Uap => "http://schemas.microsoft.com/appx/manifest/uap/windows10",
            ManifestSchema::Win81 => "http://schemas.microsoft.com/appx/2013/manifest",
        }
    }

    /// Attribute carrying the small logo path
    pub fn small_logo_attribute(&self) -> &'static str {
        match self {
            ManifestSchema::Uap => "Square44x44Logo",
            ManifestSchema::Win81 => "Square30x30Logo",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestSchema::Uap => "uap",
            ManifestSchema::Win81 => "win81",
        }
    }

    /// Look up a schema by its namespace URI
    pub fn from_namespace(namespace: &[u8]) -> Option<Self> {
        [ManifestSchema::Uap, ManifestSchema::Win81]
            .into_iter()
            .find(|schema| schema.namespace().as_bytes() == namespace)
    }
}

/// Which schema generation(s) the reader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaSelection {
    /// Prefer `uap`, fall back to `win81`
    #[default]
    Auto,
    Uap,
    Win81,
}

impl SchemaSelection {
    /// Schema whose first match ends the search immediately
    pub fn preferred(&self) -> ManifestSchema {
        match self {
            SchemaSelection::Auto | SchemaSelection::Uap => ManifestSchema::Uap,
            SchemaSelection::Win81 => ManifestSchema::Win81,
        }
    }

    pub fn accepts(&self, schema: ManifestSchema) -> bool {
        match self {
            SchemaSelection::Auto => true,
            SchemaSelection::Uap => schema == ManifestSchema::Uap,
            SchemaSelection::Win81 => schema == ManifestSchema::Win81,
        }
    }
}

impl From<ManifestSchema> for SchemaSelection {
    fn from(schema: ManifestSchema) -> Self {
        match schema {
            ManifestSchema::Uap => SchemaSelection::Uap,
            ManifestSchema::Win81 => SchemaSelection::Win81,
        }
    }
}
