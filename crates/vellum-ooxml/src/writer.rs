//! DOCX package writer
//!
//! Turns a [`Document`] into a complete package in one pass: the document
//! part, the style and numbering parts, one header or footer part per
//! bound section slot, and the manifest and relationship files that tie
//! the parts together.
//!
//! # Example
//!
//! ```ignore
//! use vellum_model::{Document, Paragraph, Section};
//! use vellum_ooxml::DocxWriter;
//!
//! let doc = Document::builder()
//!     .add_section(Section::new().push(Paragraph::text("Hello, world")))
//!     .build();
//! let bytes = DocxWriter::default().write(&doc)?;
//! std::fs::write("hello.docx", &bytes)?;
//! ```

use std::collections::HashMap;

use vellum_model::{
    BorderLine, Borders, Document, FieldKind, Node, Paragraph, Run, RunContent, Section,
    StyleAttrs, Table, TableCell, TableRow,
};

use crate::archive::PackageArchive;
use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_PATH};
use crate::numbering::{LevelFormat, NumberingRegistry};
use crate::relationships::Relationships;
use crate::styles::{StyleKind, StyleRegistry};

/// WordprocessingML main namespace, bound to the `w:` prefix
pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Relationship reference namespace, bound to the `r:` prefix
pub const OFFICE_RELS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// One-shot document serializer
///
/// Holds the style and numbering registries that document references are
/// checked against. A write runs in two phases: every reference in the
/// document is validated first, then the parts are rendered and packed.
/// A failed write produces no partial output.
pub struct DocxWriter {
    /// Styles emitted into `word/styles.xml`
    styles: StyleRegistry,
    /// Numbering schemes emitted into `word/numbering.xml`
    numbering: NumberingRegistry,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new(StyleRegistry::new(), NumberingRegistry::new())
    }
}

impl DocxWriter {
    /// Create a writer over the given registries
    pub fn new(styles: StyleRegistry, numbering: NumberingRegistry) -> Self {
        Self { styles, numbering }
    }

    /// The style registry this writer validates against
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// The numbering registry this writer validates against
    pub fn numbering(&self) -> &NumberingRegistry {
        &self.numbering
    }

    /// Serialize a document into DOCX bytes
    ///
    /// Writing the same document twice yields byte-identical output.
    pub fn write(&self, doc: &Document) -> Result<Vec<u8>> {
        self.validate(doc)?;
        PackageGenerator::new(&self.styles, &self.numbering).generate(doc)
    }

    /// Check every style and numbering reference before rendering starts
    fn validate(&self, doc: &Document) -> Result<()> {
        let mut references = 0usize;
        for section in doc.sections() {
            if let Some(nodes) = &section.header {
                self.validate_nodes(nodes, &mut references)?;
            }
            if let Some(nodes) = &section.footer {
                self.validate_nodes(nodes, &mut references)?;
            }
            self.validate_nodes(&section.body, &mut references)?;
        }
        log::debug!("Validated {} style and numbering references", references);
        Ok(())
    }

    fn validate_nodes(&self, nodes: &[Node], references: &mut usize) -> Result<()> {
        for node in nodes {
            match node {
                Node::Paragraph(para) => self.validate_paragraph(para, references)?,
                Node::Table(table) => {
                    if let Some(style) = table.style_id() {
                        self.styles.resolve(style)?;
                        *references += 1;
                    }
                    for row in table.rows() {
                        for cell in &row.cells {
                            self.validate_nodes(&cell.content, references)?;
                        }
                    }
                }
                Node::PageBreak | Node::Field(_) => {}
            }
        }
        Ok(())
    }

    fn validate_paragraph(&self, para: &Paragraph, references: &mut usize) -> Result<()> {
        if let Some(style) = &para.style_id {
            self.styles.resolve(style)?;
            *references += 1;
        }
        if let Some(numbering) = &para.numbering {
            self.numbering.level_for(&numbering.id, numbering.level)?;
            *references += 1;
        }
        for run in &para.runs {
            if let Some(style) = &run.style_id {
                self.styles.resolve(style)?;
                *references += 1;
            }
        }
        Ok(())
    }
}

/// A planned header or footer part and the relationship id that section
/// properties reference it by
struct PartRef {
    path: String,
    rel_id: String,
}

/// Header and footer parts planned for one section
struct SectionParts {
    header: Option<PartRef>,
    footer: Option<PartRef>,
}

/// Single-use state for generating one package
///
/// Holds the relationship table and part buffer for the write in
/// progress. A fresh generator per write keeps repeated writes of the
/// same document byte-identical.
struct PackageGenerator<'a> {
    styles: &'a StyleRegistry,
    numbering: &'a NumberingRegistry,
    /// Numeric id assigned to each numbering scheme, in registration order
    num_ids: HashMap<String, u32>,
    /// Relationships of the document part
    rels: Relationships,
    /// Buffer for the part currently being generated
    output: String,
}

impl<'a> PackageGenerator<'a> {
    fn new(styles: &'a StyleRegistry, numbering: &'a NumberingRegistry) -> Self {
        let mut num_ids = HashMap::new();
        for (index, (id, _)) in numbering.iter().enumerate() {
            num_ids.insert(id.to_string(), index as u32 + 1);
        }
        Self {
            styles,
            numbering,
            num_ids,
            rels: Relationships::new(),
            output: String::new(),
        }
    }

    fn generate(&mut self, doc: &Document) -> Result<Vec<u8>> {
        // A document without sections still packs as one default page run.
        let fallback = [Section::default()];
        let sections: &[Section] = if doc.sections().is_empty() {
            &fallback
        } else {
            doc.sections()
        };
        log::debug!("Generating package with {} section(s)", sections.len());

        let mut manifest = Manifest::new();
        manifest.add_override("/word/document.xml", Manifest::CT_DOCUMENT);
        manifest.add_override("/word/styles.xml", Manifest::CT_STYLES);

        self.rels.add("styles.xml", Relationships::TYPE_STYLES);
        if !self.numbering.is_empty() {
            self.rels.add("numbering.xml", Relationships::TYPE_NUMBERING);
            manifest.add_override("/word/numbering.xml", Manifest::CT_NUMBERING);
        }

        // Plan header and footer parts up front. Their relationship ids are
        // referenced from section properties inside the document part.
        let mut section_parts = Vec::with_capacity(sections.len());
        let mut header_count = 0u32;
        let mut footer_count = 0u32;
        for section in sections {
            let header = section.header.as_ref().map(|_| {
                header_count += 1;
                self.plan_part("header", header_count, Relationships::TYPE_HEADER)
            });
            let footer = section.footer.as_ref().map(|_| {
                footer_count += 1;
                self.plan_part("footer", footer_count, Relationships::TYPE_FOOTER)
            });
            section_parts.push(SectionParts { header, footer });
        }

        let mut archive = PackageArchive::new();
        for (section, parts) in sections.iter().zip(&section_parts) {
            if let (Some(nodes), Some(part)) = (&section.header, &parts.header) {
                let xml = self.generate_header_footer("w:hdr", nodes);
                manifest.add_override(format!("/{}", part.path), Manifest::CT_HEADER);
                archive.set_string(part.path.clone(), xml);
            }
            if let (Some(nodes), Some(part)) = (&section.footer, &parts.footer) {
                let xml = self.generate_header_footer("w:ftr", nodes);
                manifest.add_override(format!("/{}", part.path), Manifest::CT_FOOTER);
                archive.set_string(part.path.clone(), xml);
            }
        }

        let document_xml = self.generate_document(sections, &section_parts);
        archive.set_string("word/document.xml", document_xml);
        archive.set_string("word/styles.xml", self.generate_styles());
        if !self.numbering.is_empty() {
            archive.set_string("word/numbering.xml", self.generate_numbering());
        }

        let mut package_rels = Relationships::new();
        package_rels.add("word/document.xml", Relationships::TYPE_DOCUMENT);
        archive.set_string("_rels/.rels", package_rels.to_xml());
        archive.set_string("word/_rels/document.xml.rels", self.rels.to_xml());
        archive.set_string(MANIFEST_PATH, manifest.to_xml());

        log::debug!("Package assembled with {} parts", archive.len());
        archive.to_bytes()
    }

    /// Reserve a header or footer part name and its relationship id
    fn plan_part(&mut self, kind: &str, index: u32, rel_type: &str) -> PartRef {
        let name = format!("{}{}.xml", kind, index);
        let rel_id = self.rels.add(name.clone(), rel_type);
        PartRef {
            path: format!("word/{}", name),
            rel_id,
        }
    }

    /// Start a part buffer with the XML declaration and root element
    fn open_part(&mut self, root: &str) {
        self.output.clear();
        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            r#"<{} xmlns:w="{}" xmlns:r="{}">"#,
            root, WORDML_NS, OFFICE_RELS_NS
        ));
        self.output.push('\n');
    }

    /// Generate the complete document part
    fn generate_document(&mut self, sections: &[Section], section_parts: &[SectionParts]) -> String {
        self.open_part("w:document");
        self.output.push_str("<w:body>\n");

        for (index, (section, parts)) in sections.iter().zip(section_parts).enumerate() {
            for node in &section.body {
                self.generate_node(node);
            }
            // Interior section properties ride a dedicated paragraph; the
            // final section's close the body directly.
            if index + 1 == sections.len() {
                self.generate_sect_pr(section, parts);
            } else {
                self.output.push_str("<w:p>\n<w:pPr>\n");
                self.generate_sect_pr(section, parts);
                self.output.push_str("</w:pPr>\n</w:p>\n");
            }
        }

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");
        self.output.clone()
    }

    /// Generate the section properties block
    fn generate_sect_pr(&mut self, section: &Section, parts: &SectionParts) {
        self.output.push_str("<w:sectPr>\n");
        if let Some(part) = &parts.header {
            self.output.push_str(&format!(
                "<w:headerReference w:type=\"default\" r:id=\"{}\"/>\n",
                part.rel_id
            ));
        }
        if let Some(part) = &parts.footer {
            self.output.push_str(&format!(
                "<w:footerReference w:type=\"default\" r:id=\"{}\"/>\n",
                part.rel_id
            ));
        }
        self.output.push_str("<w:type w:val=\"nextPage\"/>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            section.page_width, section.page_height
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\"/>\n",
            section.margin_top,
            section.margin_right,
            section.margin_bottom,
            section.margin_left,
            section.header_distance,
            section.footer_distance
        ));
        self.output.push_str("</w:sectPr>\n");
    }

    /// Generate a header or footer part. `root` is `w:hdr` or `w:ftr`.
    fn generate_header_footer(&mut self, root: &str, nodes: &[Node]) -> String {
        self.open_part(root);
        for node in nodes {
            self.generate_node(node);
        }
        // The part schema requires at least one block element.
        if nodes.is_empty() {
            self.output.push_str("<w:p/>\n");
        }
        self.output.push_str(&format!("</{}>", root));
        self.output.clone()
    }

    /// Generate XML for a content node
    fn generate_node(&mut self, node: &Node) {
        match node {
            Node::Paragraph(para) => self.generate_paragraph(para),
            Node::Table(table) => self.generate_table(table),
            Node::PageBreak => {
                self.output
                    .push_str("<w:p>\n<w:r>\n<w:br w:type=\"page\"/>\n</w:r>\n</w:p>\n");
            }
            Node::Field(kind) => {
                let run = Run::field(*kind);
                self.output.push_str("<w:p>\n");
                self.generate_run(&run);
                self.output.push_str("</w:p>\n");
            }
        }
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");
        self.generate_paragraph_props(para);
        for run in &para.runs {
            self.generate_run(run);
        }
        self.output.push_str("</w:p>\n");
    }

    fn generate_paragraph_props(&mut self, para: &Paragraph) {
        if para.style_id.is_none()
            && para.numbering.is_none()
            && para.spacing.is_none()
            && para.align.is_none()
        {
            return;
        }
        self.output.push_str("<w:pPr>\n");
        if let Some(style) = &para.style_id {
            self.output
                .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape_xml(style)));
        }
        if let Some(numbering) = &para.numbering {
            if let Some(&num_id) = self.num_ids.get(&numbering.id) {
                self.output.push_str("<w:numPr>\n");
                self.output
                    .push_str(&format!("<w:ilvl w:val=\"{}\"/>\n", numbering.level));
                self.output
                    .push_str(&format!("<w:numId w:val=\"{}\"/>\n", num_id));
                self.output.push_str("</w:numPr>\n");
            }
        }
        if let Some(spacing) = &para.spacing {
            self.output.push_str(&format!(
                "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
                spacing.before, spacing.after
            ));
        }
        if let Some(align) = para.align {
            self.output
                .push_str(&format!("<w:jc w:val=\"{}\"/>\n", align.as_str()));
        }
        self.output.push_str("</w:pPr>\n");
    }

    /// Generate XML for a run
    fn generate_run(&mut self, run: &Run) {
        match &run.content {
            RunContent::Text(text) => {
                self.output.push_str("<w:r>\n");
                self.generate_run_props(run);
                self.output.push_str(&format!(
                    "<w:t xml:space=\"preserve\">{}</w:t>\n",
                    escape_xml(text)
                ));
                self.output.push_str("</w:r>\n");
            }
            RunContent::Field(kind) => self.generate_field(run, *kind),
        }
    }

    /// Generate the run quartet of a complex field
    ///
    /// The placeholder is tagged with begin, instruction, separate, and end
    /// characters across four runs. The reading application computes the
    /// value during pagination.
    fn generate_field(&mut self, run: &Run, kind: FieldKind) {
        let instruction = match kind {
            FieldKind::PageNumber => "PAGE",
            FieldKind::PageCount => "NUMPAGES",
        };

        self.output.push_str("<w:r>\n");
        self.generate_run_props(run);
        self.output
            .push_str("<w:fldChar w:fldCharType=\"begin\"/>\n");
        self.output.push_str("</w:r>\n");

        self.output.push_str("<w:r>\n");
        self.generate_run_props(run);
        self.output.push_str(&format!(
            "<w:instrText xml:space=\"preserve\">{}</w:instrText>\n",
            instruction
        ));
        self.output.push_str("</w:r>\n");

        self.output.push_str("<w:r>\n");
        self.generate_run_props(run);
        self.output
            .push_str("<w:fldChar w:fldCharType=\"separate\"/>\n");
        self.output.push_str("</w:r>\n");

        self.output.push_str("<w:r>\n");
        self.generate_run_props(run);
        self.output.push_str("<w:fldChar w:fldCharType=\"end\"/>\n");
        self.output.push_str("</w:r>\n");
    }

    fn generate_run_props(&mut self, run: &Run) {
        if run.style_id.is_none() && !has_char_attrs(&run.attrs) {
            return;
        }
        self.output.push_str("<w:rPr>\n");
        if let Some(style) = &run.style_id {
            self.output
                .push_str(&format!("<w:rStyle w:val=\"{}\"/>\n", escape_xml(style)));
        }
        self.generate_char_attrs(&run.attrs);
        self.output.push_str("</w:rPr>\n");
    }

    /// Generate the character-level properties of an attribute set
    fn generate_char_attrs(&mut self, attrs: &StyleAttrs) {
        if let Some(font) = &attrs.font {
            self.output.push_str(&format!(
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>\n",
                escape_xml(font)
            ));
        }
        match attrs.bold {
            Some(true) => self.output.push_str("<w:b/>\n"),
            Some(false) => self.output.push_str("<w:b w:val=\"0\"/>\n"),
            None => {}
        }
        match attrs.italic {
            Some(true) => self.output.push_str("<w:i/>\n"),
            Some(false) => self.output.push_str("<w:i w:val=\"0\"/>\n"),
            None => {}
        }
        if let Some(color) = &attrs.color {
            self.output
                .push_str(&format!("<w:color w:val=\"{}\"/>\n", escape_xml(color)));
        }
        if let Some(size) = attrs.size {
            self.output
                .push_str(&format!("<w:sz w:val=\"{}\"/>\n", size));
            self.output
                .push_str(&format!("<w:szCs w:val=\"{}\"/>\n", size));
        }
    }

    /// Generate XML for a table
    fn generate_table(&mut self, table: &Table) {
        self.output.push_str("<w:tbl>\n");

        self.output.push_str("<w:tblPr>\n");
        if let Some(style) = table.style_id() {
            self.output
                .push_str(&format!("<w:tblStyle w:val=\"{}\"/>\n", escape_xml(style)));
        }
        self.output.push_str(&format!(
            "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>\n",
            table.total_width()
        ));
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        for width in table.widths() {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", width));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in table.rows() {
            self.generate_table_row(row, table.widths());
        }

        self.output.push_str("</w:tbl>\n");
    }

    /// Generate XML for a table row
    fn generate_table_row(&mut self, row: &TableRow, widths: &[u32]) {
        self.output.push_str("<w:tr>\n");
        if row.is_header {
            self.output.push_str("<w:trPr>\n<w:tblHeader/>\n</w:trPr>\n");
        }

        let mut grid_column = 0usize;
        for cell in &row.cells {
            let span = cell.colspan.max(1) as usize;
            // A cell without an explicit width takes the width of the grid
            // columns it spans.
            let width: u32 = match cell.width {
                Some(w) => w,
                None => widths.iter().skip(grid_column).take(span).sum(),
            };
            self.generate_table_cell(cell, width);
            grid_column += span;
        }

        self.output.push_str("</w:tr>\n");
    }

    /// Generate XML for a table cell
    fn generate_table_cell(&mut self, cell: &TableCell, width: u32) {
        self.output.push_str("<w:tc>\n");

        self.output.push_str("<w:tcPr>\n");
        self.output
            .push_str(&format!("<w:tcW w:w=\"{}\" w:type=\"dxa\"/>\n", width));
        if cell.colspan > 1 {
            self.output
                .push_str(&format!("<w:gridSpan w:val=\"{}\"/>\n", cell.colspan));
        }
        if let Some(borders) = &cell.borders {
            self.generate_borders("w:tcBorders", borders);
        }
        if let Some(fill) = &cell.fill {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        if let Some(valign) = cell.valign {
            self.output
                .push_str(&format!("<w:vAlign w:val=\"{}\"/>\n", valign.as_str()));
        }
        self.output.push_str("</w:tcPr>\n");

        for node in &cell.content {
            self.generate_node(node);
        }
        // A cell must close with at least one paragraph.
        if cell.content.is_empty() {
            self.output.push_str("<w:p/>\n");
        }

        self.output.push_str("</w:tc>\n");
    }

    /// Generate a border group. `wrapper` is `w:pBdr` or `w:tcBorders`.
    fn generate_borders(&mut self, wrapper: &str, borders: &Borders) {
        if borders.is_empty() {
            return;
        }
        self.output.push_str(&format!("<{}>\n", wrapper));
        self.generate_border_edge("top", &borders.top);
        self.generate_border_edge("left", &borders.left);
        self.generate_border_edge("bottom", &borders.bottom);
        self.generate_border_edge("right", &borders.right);
        self.output.push_str(&format!("</{}>\n", wrapper));
    }

    fn generate_border_edge(&mut self, edge: &str, line: &Option<BorderLine>) {
        if let Some(line) = line {
            self.output.push_str(&format!(
                "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>\n",
                edge,
                line.style.as_str(),
                line.size,
                escape_xml(&line.color)
            ));
        }
    }

    /// Generate the styles part
    fn generate_styles(&mut self) -> String {
        let registry = self.styles;
        self.open_part("w:styles");

        // Document defaults come first so every style inherits from them.
        self.output.push_str("<w:docDefaults>\n");
        self.output.push_str("<w:rPrDefault>\n");
        self.generate_style_run_props(registry.default_attrs());
        self.output.push_str("</w:rPrDefault>\n");
        self.output.push_str("<w:pPrDefault>\n");
        self.generate_style_paragraph_props(registry.default_attrs());
        self.output.push_str("</w:pPrDefault>\n");
        self.output.push_str("</w:docDefaults>\n");

        for def in registry.iter() {
            self.output.push_str(&format!(
                "<w:style w:type=\"{}\" w:styleId=\"{}\">\n",
                def.kind.as_str(),
                escape_xml(&def.id)
            ));
            let name = def.name.as_deref().unwrap_or(&def.id);
            self.output
                .push_str(&format!("<w:name w:val=\"{}\"/>\n", escape_xml(name)));
            if let Some(parent) = &def.based_on {
                self.output
                    .push_str(&format!("<w:basedOn w:val=\"{}\"/>\n", escape_xml(parent)));
            }
            match def.kind {
                StyleKind::Paragraph => {
                    self.generate_style_paragraph_props(&def.attrs);
                    self.generate_style_run_props(&def.attrs);
                }
                StyleKind::Run => {
                    self.generate_style_run_props(&def.attrs);
                }
                StyleKind::TableCell => {
                    self.generate_style_run_props(&def.attrs);
                    self.generate_style_cell_props(&def.attrs);
                }
            }
            self.output.push_str("</w:style>\n");
        }

        self.output.push_str("</w:styles>");
        self.output.clone()
    }

    /// Generate the `w:pPr` block of a style definition, if it has one
    fn generate_style_paragraph_props(&mut self, attrs: &StyleAttrs) {
        if attrs.borders.is_none()
            && attrs.fill.is_none()
            && attrs.spacing_before.is_none()
            && attrs.spacing_after.is_none()
            && attrs.align.is_none()
        {
            return;
        }
        self.output.push_str("<w:pPr>\n");
        if let Some(borders) = &attrs.borders {
            self.generate_borders("w:pBdr", borders);
        }
        if let Some(fill) = &attrs.fill {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        if attrs.spacing_before.is_some() || attrs.spacing_after.is_some() {
            self.output.push_str("<w:spacing");
            if let Some(before) = attrs.spacing_before {
                self.output.push_str(&format!(" w:before=\"{}\"", before));
            }
            if let Some(after) = attrs.spacing_after {
                self.output.push_str(&format!(" w:after=\"{}\"", after));
            }
            self.output.push_str("/>\n");
        }
        if let Some(align) = attrs.align {
            self.output
                .push_str(&format!("<w:jc w:val=\"{}\"/>\n", align.as_str()));
        }
        self.output.push_str("</w:pPr>\n");
    }

    /// Generate the `w:rPr` block of a style definition, if it has one
    fn generate_style_run_props(&mut self, attrs: &StyleAttrs) {
        if !has_char_attrs(attrs) {
            return;
        }
        self.output.push_str("<w:rPr>\n");
        self.generate_char_attrs(attrs);
        self.output.push_str("</w:rPr>\n");
    }

    /// Generate the `w:tcPr` block of a table style, if it has one
    fn generate_style_cell_props(&mut self, attrs: &StyleAttrs) {
        if attrs.borders.is_none() && attrs.fill.is_none() {
            return;
        }
        self.output.push_str("<w:tcPr>\n");
        if let Some(borders) = &attrs.borders {
            self.generate_borders("w:tcBorders", borders);
        }
        if let Some(fill) = &attrs.fill {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        self.output.push_str("</w:tcPr>\n");
    }

    /// Generate the numbering part
    ///
    /// Each registered scheme becomes one abstract definition plus one
    /// concrete instance pointing at it. Numeric ids follow registration
    /// order, so references stay stable across writes.
    fn generate_numbering(&mut self) -> String {
        let registry = self.numbering;
        self.open_part("w:numbering");

        for (index, (_, levels)) in registry.iter().enumerate() {
            self.output.push_str(&format!(
                "<w:abstractNum w:abstractNumId=\"{}\">\n",
                index
            ));
            for (ilvl, level) in levels.iter().enumerate() {
                self.output
                    .push_str(&format!("<w:lvl w:ilvl=\"{}\">\n", ilvl));
                self.output.push_str("<w:start w:val=\"1\"/>\n");
                let (num_fmt, text) = match &level.format {
                    LevelFormat::Bullet(glyph) => ("bullet", glyph.clone()),
                    LevelFormat::Decimal => ("decimal", format!("%{}.", ilvl + 1)),
                    LevelFormat::None => ("none", String::new()),
                };
                self.output
                    .push_str(&format!("<w:numFmt w:val=\"{}\"/>\n", num_fmt));
                self.output
                    .push_str(&format!("<w:lvlText w:val=\"{}\"/>\n", escape_xml(&text)));
                self.output.push_str("<w:lvlJc w:val=\"left\"/>\n");
                self.output.push_str("<w:pPr>\n");
                self.output.push_str(&format!(
                    "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>\n",
                    level.indent, level.hanging
                ));
                self.output.push_str("</w:pPr>\n");
                self.output.push_str("</w:lvl>\n");
            }
            self.output.push_str("</w:abstractNum>\n");
        }

        for index in 0..registry.len() {
            self.output
                .push_str(&format!("<w:num w:numId=\"{}\">\n", index + 1));
            self.output
                .push_str(&format!("<w:abstractNumId w:val=\"{}\"/>\n", index));
            self.output.push_str("</w:num>\n");
        }

        self.output.push_str("</w:numbering>");
        self.output.clone()
    }
}

/// Whether an attribute set carries any character-level formatting
fn has_char_attrs(attrs: &StyleAttrs) -> bool {
    attrs.font.is_some()
        || attrs.size.is_some()
        || attrs.bold.is_some()
        || attrs.italic.is_some()
        || attrs.color.is_some()
}

/// Escape special XML characters
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
