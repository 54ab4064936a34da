//! Writer Coverage Tests
//!
//! End-to-end serialization checks for `DocxWriter` beyond the inline
//! tests: full report assembly, registration boundaries, per-section
//! geometry, and cell-level overrides.

use std::io::Cursor;

use vellum_model::{
    Alignment, BorderLine, BorderStyle, Borders, Document, FieldKind, Node, Paragraph, Run,
    Section, StyleAttrs, Table, TableCell, VerticalAlign,
};
use vellum_ooxml::{
    DocxWriter, NumberingLevel, NumberingRegistry, PackageArchive, PackageError, StyleDefinition,
    StyleRegistry,
};

/// Unpack generated bytes into an archive
fn unpack(bytes: &[u8]) -> PackageArchive {
    PackageArchive::from_reader(Cursor::new(bytes)).unwrap()
}

/// Extract one part as text from generated bytes
fn part(bytes: &[u8], path: &str) -> String {
    unpack(bytes).get_string(path).unwrap()
}

/// Wrap body nodes in a one-section document
fn single_section(nodes: Vec<Node>) -> Document {
    let mut section = Section::new();
    section.body = nodes;
    Document::builder().add_section(section).build()
}

// =============================================================================
// Full report assembly
// =============================================================================

#[test]
fn test_full_report_assembles_every_part() {
    let mut styles = StyleRegistry::new();
    styles.set_default(StyleAttrs {
        font: Some("Georgia".to_string()),
        size: Some(24),
        ..Default::default()
    });
    styles
        .register(StyleDefinition::paragraph("Title").attrs(StyleAttrs {
            size: Some(48),
            bold: Some(true),
            align: Some(Alignment::Center),
            ..Default::default()
        }))
        .unwrap();
    styles
        .register(StyleDefinition::run("Callsign").attrs(StyleAttrs {
            italic: Some(true),
            ..Default::default()
        }))
        .unwrap();

    let mut numbering = NumberingRegistry::new();
    numbering.register("legs", vec![NumberingLevel::decimal(720)]);

    let crossing = Table::builder(vec![3600, 3600])
        .header_row(vec![
            TableCell::text("Leg").shaded("EEEEEE"),
            TableCell::text("Distance").shaded("EEEEEE"),
        ])
        .row(vec![TableCell::text("Basecamp to ridge"), TableCell::text("14 km")])
        .build()
        .unwrap();

    let doc = Document::builder()
        .add_section(
            Section::new()
                .header(vec![Paragraph::builder()
                    .align(Alignment::Right)
                    .run(Run::text("Expedition Log").style("Callsign"))
                    .build()
                    .into()])
                .footer(vec![Paragraph::builder()
                    .align(Alignment::Center)
                    .text("Page ")
                    .field(FieldKind::PageNumber)
                    .text(" of ")
                    .field(FieldKind::PageCount)
                    .build()
                    .into()])
                .push(Paragraph::styled("Title", "Crossing Report"))
                .push(
                    Paragraph::builder()
                        .numbering("legs", 0)
                        .text("Reach the ridge before noon.")
                        .build(),
                )
                .push(crossing),
        )
        .add_section(Section::new().a4().push(Paragraph::text("Annex: weather tables.")))
        .build();

    let writer = DocxWriter::new(styles, numbering);
    let bytes = writer.write(&doc).unwrap();
    let archive = unpack(&bytes);

    assert_eq!(archive.len(), 8, "parts: {:?}", {
        let mut names: Vec<&str> = archive.file_list().collect();
        names.sort_unstable();
        names
    });
    assert!(part(&bytes, "word/document.xml").contains("Crossing Report"));
    assert!(part(&bytes, "word/header1.xml").contains("Expedition Log"));
    assert!(part(&bytes, "word/footer1.xml").contains("NUMPAGES"));
    assert!(part(&bytes, "word/numbering.xml").contains("<w:numFmt w:val=\"decimal\"/>"));
    assert!(part(&bytes, "word/styles.xml").contains("w:styleId=\"Title\""));
}

// =============================================================================
// Style registration boundaries
// =============================================================================

#[test]
fn test_style_with_missing_parent_fails_at_write() {
    let mut styles = StyleRegistry::new();
    styles
        .register(StyleDefinition::paragraph("Orphan").based_on("Vanished"))
        .unwrap();
    let writer = DocxWriter::new(styles, NumberingRegistry::new());
    let doc = single_section(vec![Paragraph::styled("Orphan", "text").into()]);

    let err = writer.write(&doc).unwrap_err();
    assert!(matches!(err, PackageError::UnknownStyle(ref id) if id == "Vanished"));
}

#[test]
fn test_registered_normal_style_is_emitted() {
    let mut styles = StyleRegistry::new();
    styles
        .register(StyleDefinition::paragraph("Normal").attrs(StyleAttrs {
            font: Some("Cambria".to_string()),
            ..Default::default()
        }))
        .unwrap();
    let writer = DocxWriter::new(styles, NumberingRegistry::new());
    let doc = single_section(vec![Paragraph::styled("Normal", "base text").into()]);

    let bytes = writer.write(&doc).unwrap();
    let styles_xml = part(&bytes, "word/styles.xml");
    assert!(styles_xml.contains("w:styleId=\"Normal\""));
    assert!(styles_xml.contains("<w:rFonts w:ascii=\"Cambria\" w:hAnsi=\"Cambria\"/>"));
}

// =============================================================================
// Numbering registration boundaries
// =============================================================================

#[test]
fn test_numbering_may_be_registered_after_model_assembly() {
    // References are checked when the document is written, not when the
    // model is assembled.
    let doc = single_section(vec![Paragraph::builder()
        .numbering("late", 0)
        .text("registered afterwards")
        .build()
        .into()]);

    let mut numbering = NumberingRegistry::new();
    numbering.register("late", vec![NumberingLevel::decimal(720)]);
    let writer = DocxWriter::new(StyleRegistry::new(), numbering);

    assert!(writer.write(&doc).is_ok());
}

#[test]
fn test_reregistering_a_numbering_scheme_replaces_it() {
    let mut numbering = NumberingRegistry::new();
    numbering.register("marks", vec![NumberingLevel::decimal(720)]);
    numbering.register("marks", vec![NumberingLevel::bullet("-", 720)]);
    let writer = DocxWriter::new(StyleRegistry::new(), numbering);
    let doc = single_section(vec![Paragraph::builder()
        .numbering("marks", 0)
        .text("dashed")
        .build()
        .into()]);

    let bytes = writer.write(&doc).unwrap();
    let numbering_xml = part(&bytes, "word/numbering.xml");
    assert_eq!(numbering_xml.matches("<w:abstractNum ").count(), 1);
    assert!(numbering_xml.contains("<w:numFmt w:val=\"bullet\"/>"));
    assert!(
        !numbering_xml.contains("<w:numFmt w:val=\"decimal\"/>"),
        "replaced format still present: {}",
        numbering_xml
    );
}

// =============================================================================
// Sections and page geometry
// =============================================================================

#[test]
fn test_each_section_keeps_its_own_geometry() {
    let doc = Document::builder()
        .add_section(Section::new().push(Paragraph::text("letter")))
        .add_section(
            Section::new()
                .a4()
                .margins(720, 720, 720, 720)
                .push(Paragraph::text("a4")),
        )
        .add_section(
            Section::new()
                .margins(2880, 1440, 1440, 1440)
                .push(Paragraph::text("deep top margin")),
        )
        .build();

    let bytes = DocxWriter::default().write(&doc).unwrap();
    let xml = part(&bytes, "word/document.xml");

    assert_eq!(xml.matches("<w:sectPr>").count(), 3);
    assert_eq!(xml.matches("<w:p>\n<w:pPr>\n<w:sectPr>").count(), 2);
    assert!(xml.contains("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>"));
    assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
    assert!(xml.contains(
        "<w:pgMar w:top=\"720\" w:right=\"720\" w:bottom=\"720\" w:left=\"720\" \
         w:header=\"720\" w:footer=\"720\"/>"
    ));
    assert!(xml.contains("<w:pgMar w:top=\"2880\""));
}

#[test]
fn test_header_footer_slots_are_per_section() {
    let doc = Document::builder()
        .add_section(
            Section::new()
                .header(vec![Paragraph::text("h1").into()])
                .push(Paragraph::text("one")),
        )
        .add_section(
            Section::new()
                .footer(vec![Paragraph::text("f1").into()])
                .push(Paragraph::text("two")),
        )
        .add_section(Section::new().push(Paragraph::text("three")))
        .build();

    let bytes = DocxWriter::default().write(&doc).unwrap();
    let archive = unpack(&bytes);

    assert!(archive.contains("word/header1.xml"));
    assert!(archive.contains("word/footer1.xml"));
    assert!(!archive.contains("word/header2.xml"));
    assert!(!archive.contains("word/footer2.xml"));

    let xml = archive.get_string("word/document.xml").unwrap();
    assert_eq!(xml.matches("<w:headerReference").count(), 1);
    assert_eq!(xml.matches("<w:footerReference").count(), 1);
}

// =============================================================================
// Table cell overrides
// =============================================================================

#[test]
fn test_cell_overrides_reach_the_cell_properties() {
    let table = Table::builder(vec![3000, 3000])
        .row(vec![
            TableCell::text("fixed").width(4200),
            TableCell::text("low").valign(VerticalAlign::Bottom).bordered(Borders::all(
                BorderLine::new(BorderStyle::Dashed, 8, "FF0000"),
            )),
        ])
        .build()
        .unwrap();
    let doc = single_section(vec![table.into()]);

    let bytes = DocxWriter::default().write(&doc).unwrap();
    let xml = part(&bytes, "word/document.xml");

    assert!(xml.contains("<w:tcW w:w=\"4200\" w:type=\"dxa\"/>"));
    // The second cell falls back to its grid column width.
    assert!(xml.contains("<w:tcW w:w=\"3000\" w:type=\"dxa\"/>"));
    assert!(xml.contains("<w:vAlign w:val=\"bottom\"/>"));
    assert!(xml.contains("<w:tcBorders>"));
    assert!(xml.contains("<w:top w:val=\"dashed\" w:sz=\"8\" w:space=\"0\" w:color=\"FF0000\"/>"));
}

#[test]
fn test_table_style_reference_is_validated() {
    let table = Table::builder(vec![3000])
        .style("NoSuchGrid")
        .row(vec![TableCell::text("x")])
        .build()
        .unwrap();
    let doc = single_section(vec![table.into()]);

    let err = DocxWriter::default().write(&doc).unwrap_err();
    assert!(matches!(err, PackageError::UnknownStyle(ref id) if id == "NoSuchGrid"));
}

// =============================================================================
// Text fidelity
// =============================================================================

#[test]
fn test_reserved_characters_are_escaped() {
    let doc = single_section(vec![
        Paragraph::text("Fish & Chips <menu> \"today\"").into()
    ]);
    let bytes = DocxWriter::default().write(&doc).unwrap();
    let xml = part(&bytes, "word/document.xml");

    assert!(
        xml.contains("Fish &amp; Chips &lt;menu&gt; &quot;today&quot;"),
        "escaping failed: {}",
        xml
    );
    assert!(!xml.contains("Fish & Chips"));
}
