//! Content-type manifest for the output package
//!
//! Every part in an OOXML package must be covered by the
//! [Content_Types].xml manifest, either through an extension Default or a
//! per-part Override. Readers refuse packages whose manifest does not
//! account for every part.

use crate::writer::escape_xml;

/// The manifest part path within the package
pub const MANIFEST_PATH: &str = "[Content_Types].xml";

/// OOXML namespace for content types
pub const CONTENT_TYPES_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/content-types";

/// Content type URIs for the parts this engine emits
impl Manifest {
    /// Relationship parts (.rels)
    pub const CT_RELATIONSHIPS: &'static str =
        "application/vnd.openxmlformats-package.relationships+xml";
    /// Generic XML parts
    pub const CT_XML: &'static str = "application/xml";
    /// Main document part
    pub const CT_DOCUMENT: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    /// Styles part
    pub const CT_STYLES: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    /// Numbering part
    pub const CT_NUMBERING: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    /// Header parts
    pub const CT_HEADER: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    /// Footer parts
    pub const CT_FOOTER: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
}

/// The [Content_Types].xml manifest
///
/// Maintains insertion order for deterministic XML serialization.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Extension defaults: (extension, content type)
    defaults: Vec<(String, String)>,
    /// Part overrides: (part name with leading slash, content type)
    overrides: Vec<(String, String)>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifest {
    /// Create a manifest with the rels and xml extension defaults
    pub fn new() -> Self {
        Self {
            defaults: vec![
                ("rels".to_string(), Self::CT_RELATIONSHIPS.to_string()),
                ("xml".to_string(), Self::CT_XML.to_string()),
            ],
            overrides: Vec::new(),
        }
    }

    /// Register a content-type override for one part
    ///
    /// # Arguments
    /// * `part_name` - Absolute part name (e.g., "/word/document.xml")
    /// * `content_type` - The part's content type (use CT_* constants)
    pub fn add_override(&mut self, part_name: impl Into<String>, content_type: impl Into<String>) {
        self.overrides.push((part_name.into(), content_type.into()));
    }

    /// The registered overrides in insertion order
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides
            .iter()
            .map(|(name, ct)| (name.as_str(), ct.as_str()))
    }

    /// Number of registered overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Whether a part is covered by an override or an extension default
    pub fn covers(&self, part_name: &str) -> bool {
        if self.overrides.iter().any(|(name, _)| name == part_name) {
            return true;
        }
        part_name
            .rsplit('.')
            .next()
            .map(|ext| self.defaults.iter().any(|(e, _)| e == ext))
            .unwrap_or(false)
    }

    /// Serialize the manifest to OOXML format
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, CONTENT_TYPES_NS));
        xml.push('\n');

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                escape_xml(ext),
                escape_xml(ct)
            ));
        }
        for (name, ct) in &self.overrides {
            xml.push_str(&format!(
                "  <Override PartName=\"{}\" ContentType=\"{}\"/>\n",
                escape_xml(name),
                escape_xml(ct)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
