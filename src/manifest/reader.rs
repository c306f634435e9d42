use super::{
    InstallLocation, ManifestSchema, ManifestVisualElement, SchemaSelection,
    APP_PACKAGE_URI_BASE, MANIFEST_FILE_NAME,
};
use crate::config::Config;
use crate::error::{ManifestError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::{debug, trace};

const VISUAL_ELEMENTS: &[u8] = b"VisualElements";
const DISPLAY_NAME: &str = "DisplayName";
const DESCRIPTION: &str = "Description";
const LOGO: &str = "Square150x150Logo";
const BACKGROUND_COLOR: &str = "BackgroundColor";

/// Reads `VisualElements` from the manifest of an installed package
#[derive(Debug, Clone)]
pub struct ManifestReader<L> {
    location: L,
    manifest_file: String,
    selection: SchemaSelection,
    uri_base: String,
}

impl<L: InstallLocation> ManifestReader<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            manifest_file: MANIFEST_FILE_NAME.to_string(),
            selection: SchemaSelection::default(),
            uri_base: APP_PACKAGE_URI_BASE.to_string(),
        }
    }

    pub fn with_config(location: L, config: &Config) -> Self {
        Self {
            location,
            manifest_file: config.manifest_file.clone(),
            selection: config.schema,
            uri_base: config.uri_base.clone(),
        }
    }

    /// Restrict the reader to one schema generation
    pub fn schema(mut self, selection: SchemaSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Read and parse the manifest. Every call re-reads the file.
    pub async fn read_visual_element(&self) -> Result<ManifestVisualElement> {
        let bytes = self.location.read(&self.manifest_file).await?;
        let contents = std::str::from_utf8(&bytes)
            .map_err(|e| ManifestError::Xml(quick_xml::Error::NonDecodable(Some(e))))?;

        parse_visual_element(contents, self.selection, &self.uri_base)
    }
}

/// Parse manifest XML and project the first matching `VisualElements`.
///
/// With [`SchemaSelection::Auto`] the first `uap` element wins; the first
/// `win81` element is used only when the document has no `uap` one. The
/// whole document is read, so a manifest that is not well-formed fails
/// even when the element itself parsed.
pub fn parse_visual_element(
    contents: &str,
    selection: SchemaSelection,
    uri_base: &str,
) -> Result<ManifestVisualElement> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut reader = NsReader::from_str(contents);
    let preferred = selection.preferred();

    let mut shape = DocumentShape::default();
    let mut selected: Option<(ManifestSchema, BytesStart)> = None;
    let mut fallback: Option<(ManifestSchema, BytesStart)> = None;
    loop {
        let (ns, event) = reader.read_resolved_event()?;
        shape.observe(&event)?;

        match event {
            Event::Start(e) | Event::Empty(e)
                if selected.is_none() && e.local_name().as_ref() == VISUAL_ELEMENTS =>
            {
                let ResolveResult::Bound(Namespace(ns)) = ns else {
                    trace!("Skipping VisualElements without a namespace");
                    continue;
                };
                let Some(schema) = ManifestSchema::from_namespace(ns) else {
                    trace!(
                        "Skipping VisualElements in namespace {}",
                        String::from_utf8_lossy(ns)
                    );
                    continue;
                };
                if !selection.accepts(schema) {
                    trace!("Skipping VisualElements for schema {}", schema.as_str());
                    continue;
                }
                if schema == preferred {
                    selected = Some((schema, e));
                } else if fallback.is_none() {
                    fallback = Some((schema, e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    shape.finish()?;

    let (schema, element) = selected
        .or(fallback)
        .ok_or(ManifestError::VisualElementsNotFound)?;
    debug!("Found VisualElements for schema {}", schema.as_str());

    Ok(ManifestVisualElement::new(
        schema,
        required_attribute(&element, DISPLAY_NAME)?,
        required_attribute(&element, DESCRIPTION)?,
        required_attribute(&element, LOGO)?,
        required_attribute(&element, schema.small_logo_attribute())?,
        required_attribute(&element, BACKGROUND_COLOR)?,
        uri_base,
    ))
}

/// Tracks nesting so unclosed elements, stray content and extra roots are
/// reported. quick-xml checks end tag names but not these.
#[derive(Debug, Default)]
struct DocumentShape {
    depth: usize,
    seen_root: bool,
}

impl DocumentShape {
    fn observe(&mut self, event: &Event<'_>) -> Result<()> {
        match event {
            Event::Start(_) | Event::Empty(_) => {
                if self.depth == 0 {
                    if self.seen_root {
                        return Err(unexpected_token("a second root element"));
                    }
                    self.seen_root = true;
                }
                if matches!(event, Event::Start(_)) {
                    self.depth += 1;
                }
            }
            Event::End(_) => {
                self.depth = self
                    .depth
                    .checked_sub(1)
                    .ok_or_else(|| unexpected_token("a closing tag with no open element"))?;
            }
            Event::Text(text) if self.depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(unexpected_token("text outside the root element"));
                }
            }
            Event::CData(_) if self.depth == 0 => {
                return Err(unexpected_token("CDATA outside the root element"));
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(&self) -> Result<()> {
        if !self.seen_root {
            return Err(
                quick_xml::Error::UnexpectedEof("document has no root element".to_string()).into(),
            );
        }
        if self.depth != 0 {
            return Err(quick_xml::Error::UnexpectedEof(format!(
                "{} element(s) left unclosed",
                self.depth
            ))
            .into());
        }
        Ok(())
    }
}

fn unexpected_token(what: &str) -> ManifestError {
    quick_xml::Error::UnexpectedToken(what.to_string()).into()
}

fn required_attribute(element: &BytesStart<'_>, name: &'static str) -> Result<String> {
    let attr = element
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
        .ok_or(ManifestError::MissingAttribute { attribute: name })?;

    Ok(attr.unescape_value()?.into_owned())
}
