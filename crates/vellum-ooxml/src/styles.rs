//! Style registry and inheritance resolution
//!
//! Styles are registered once per generation call and resolved by walking
//! the `based_on` chain from the named style up to the document default,
//! merging attributes child-wins. The chain is an explicit graph walked
//! with a visited set, so cycles fail instead of looping.

use std::collections::{HashMap, HashSet};

use vellum_model::StyleAttrs;

use crate::error::{PackageError, Result};

/// What a style applies to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleKind {
    /// Paragraph styles
    Paragraph,
    /// Run (character) styles
    Run,
    /// Table styles formatting cells
    TableCell,
}

impl StyleKind {
    /// The `w:type` value for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Paragraph => "paragraph",
            StyleKind::Run => "character",
            StyleKind::TableCell => "table",
        }
    }
}

/// A named style definition
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    /// Stable identifier referenced from content nodes
    pub id: String,
    /// Display name; the identifier is used when unset
    pub name: Option<String>,
    /// What the style applies to
    pub kind: StyleKind,
    /// Parent style identifier in the inheritance chain
    pub based_on: Option<String>,
    /// The attributes this style sets
    pub attrs: StyleAttrs,
}

impl StyleDefinition {
    /// Create a style definition
    pub fn new(id: impl Into<String>, kind: StyleKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            based_on: None,
            attrs: StyleAttrs::new(),
        }
    }

    /// A paragraph style
    pub fn paragraph(id: impl Into<String>) -> Self {
        Self::new(id, StyleKind::Paragraph)
    }

    /// A run style
    pub fn run(id: impl Into<String>) -> Self {
        Self::new(id, StyleKind::Run)
    }

    /// A table style
    pub fn table_cell(id: impl Into<String>) -> Self {
        Self::new(id, StyleKind::TableCell)
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Inherit from a parent style
    pub fn based_on(mut self, parent: impl Into<String>) -> Self {
        self.based_on = Some(parent.into());
        self
    }

    /// Set the attributes
    pub fn attrs(mut self, attrs: StyleAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Registry of named styles plus the document default attributes
///
/// Maintains insertion order for deterministic part emission.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    /// Ordered list of style IDs (maintains insertion order)
    order: Vec<String>,
    /// Map of style ID to definition (for fast lookups)
    map: HashMap<String, StyleDefinition>,
    /// Attributes every chain falls back to
    default_attrs: StyleAttrs,
}

impl StyleRegistry {
    /// The implicit default style identifier
    ///
    /// Resolving it always succeeds, registered or not, and a `based_on`
    /// reference to it terminates the chain at the document defaults.
    pub const DEFAULT_STYLE_ID: &'static str = "Normal";

    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the document default attributes
    pub fn set_default(&mut self, attrs: StyleAttrs) {
        self.default_attrs = attrs;
    }

    /// The document default attributes
    pub fn default_attrs(&self) -> &StyleAttrs {
        &self.default_attrs
    }

    /// Register a style, failing if its identifier already exists
    pub fn register(&mut self, def: StyleDefinition) -> Result<()> {
        if self.map.contains_key(&def.id) {
            return Err(PackageError::DuplicateStyle(def.id));
        }
        self.order.push(def.id.clone());
        self.map.insert(def.id.clone(), def);
        Ok(())
    }

    /// Get a registered definition
    pub fn get(&self, id: &str) -> Option<&StyleDefinition> {
        self.map.get(id)
    }

    /// Check whether an identifier is registered
    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Resolve a style to its final attributes
    ///
    /// Walks the inheritance chain to the document default, merging
    /// child-wins. Fails with `UnknownStyle` for an unregistered
    /// identifier (including a dangling `based_on` target) that is not
    /// the implicit default, and with `StyleCycle` when the chain
    /// revisits an identifier.
    pub fn resolve(&self, id: &str) -> Result<StyleAttrs> {
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        let mut current = id.to_string();

        loop {
            if current == Self::DEFAULT_STYLE_ID && !self.map.contains_key(&current) {
                break;
            }
            if !visited.insert(current.clone()) {
                return Err(PackageError::StyleCycle(current));
            }
            let def = self
                .map
                .get(&current)
                .ok_or_else(|| PackageError::UnknownStyle(current.clone()))?;
            chain.push(def);
            match &def.based_on {
                Some(parent) => current = parent.clone(),
                None => break,
            }
        }

        let mut resolved = self.default_attrs.clone();
        for def in chain.iter().rev() {
            resolved = def.attrs.merged_over(&resolved);
        }
        Ok(resolved)
    }

    /// Iterate over definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.order.iter().filter_map(|id| self.map.get(id))
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no styles are registered
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs_size(size: u32) -> StyleAttrs {
        StyleAttrs {
            size: Some(size),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = StyleRegistry::new();
        registry
            .register(StyleDefinition::paragraph("Title").attrs(attrs_size(56)))
            .unwrap();
        assert!(registry.contains("Title"));
        assert_eq!(registry.get("Title").unwrap().kind, StyleKind::Paragraph);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::paragraph("Body")).unwrap();
        let err = registry
            .register(StyleDefinition::paragraph("Body"))
            .unwrap_err();
        assert!(matches!(err, PackageError::DuplicateStyle(id) if id == "Body"));
    }

    #[test]
    fn test_resolve_merges_chain_child_wins() {
        let mut registry = StyleRegistry::new();
        registry.set_default(StyleAttrs {
            font: Some("Calibri".to_string()),
            size: Some(22),
            ..Default::default()
        });
        registry
            .register(
                StyleDefinition::paragraph("Base").attrs(StyleAttrs {
                    size: Some(24),
                    bold: Some(false),
                    ..Default::default()
                }),
            )
            .unwrap();
        registry
            .register(
                StyleDefinition::paragraph("Heading1")
                    .based_on("Base")
                    .attrs(StyleAttrs {
                        size: Some(32),
                        bold: Some(true),
                        ..Default::default()
                    }),
            )
            .unwrap();

        let resolved = registry.resolve("Heading1").unwrap();
        assert_eq!(resolved.size, Some(32));
        assert_eq!(resolved.bold, Some(true));
        assert_eq!(resolved.font.as_deref(), Some("Calibri"));
    }

    #[test]
    fn test_resolve_implicit_default() {
        let registry = StyleRegistry::new();
        let resolved = registry.resolve(StyleRegistry::DEFAULT_STYLE_ID).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_registered_default_participates_in_chains() {
        let mut registry = StyleRegistry::new();
        registry
            .register(
                StyleDefinition::paragraph(StyleRegistry::DEFAULT_STYLE_ID).attrs(attrs_size(20)),
            )
            .unwrap();
        registry
            .register(StyleDefinition::paragraph("Note").based_on(StyleRegistry::DEFAULT_STYLE_ID))
            .unwrap();

        assert_eq!(registry.resolve("Note").unwrap().size, Some(20));
    }

    #[test]
    fn test_resolve_unknown_style() {
        let registry = StyleRegistry::new();
        let err = registry.resolve("Ghost").unwrap_err();
        assert!(matches!(err, PackageError::UnknownStyle(id) if id == "Ghost"));
    }

    #[test]
    fn test_resolve_dangling_parent() {
        let mut registry = StyleRegistry::new();
        registry
            .register(StyleDefinition::paragraph("Body").based_on("Ghost"))
            .unwrap();
        let err = registry.resolve("Body").unwrap_err();
        assert!(matches!(err, PackageError::UnknownStyle(id) if id == "Ghost"));
    }

    #[test]
    fn test_resolve_cycle_fails() {
        let mut registry = StyleRegistry::new();
        registry
            .register(StyleDefinition::paragraph("A").based_on("B"))
            .unwrap();
        registry
            .register(StyleDefinition::paragraph("B").based_on("A"))
            .unwrap();

        let err = registry.resolve("B").unwrap_err();
        assert!(matches!(err, PackageError::StyleCycle(_)));
    }

    #[test]
    fn test_sibling_branches_do_not_contaminate() {
        let mut registry = StyleRegistry::new();
        registry
            .register(StyleDefinition::paragraph("Base").attrs(StyleAttrs {
                font: Some("Georgia".to_string()),
                ..Default::default()
            }))
            .unwrap();
        registry
            .register(
                StyleDefinition::paragraph("Left").based_on("Base").attrs(StyleAttrs {
                    size: Some(28),
                    ..Default::default()
                }),
            )
            .unwrap();
        registry
            .register(
                StyleDefinition::paragraph("Right").based_on("Base").attrs(StyleAttrs {
                    bold: Some(true),
                    ..Default::default()
                }),
            )
            .unwrap();

        let left = registry.resolve("Left").unwrap();
        let right = registry.resolve("Right").unwrap();
        assert_eq!(left.size, Some(28));
        assert_eq!(left.bold, None);
        assert_eq!(right.bold, Some(true));
        assert_eq!(right.size, None);
        assert_eq!(left.font.as_deref(), Some("Georgia"));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::paragraph("One")).unwrap();
        registry.register(StyleDefinition::run("Two")).unwrap();
        registry.register(StyleDefinition::table_cell("Three")).unwrap();

        let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["One", "Two", "Three"]);
    }
}
