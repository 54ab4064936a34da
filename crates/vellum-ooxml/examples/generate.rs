//! Example: Generate a DOCX status report from a built-in document model
//!
//! Usage: cargo run --example generate -- path/to/output.docx

use std::env;
use std::io::Cursor;

use vellum_model::{
    Alignment, BorderLine, Borders, Document, FieldKind, Node, Paragraph, Run, Section, Spacing,
    StyleAttrs, Table, TableCell,
};
use vellum_ooxml::{
    DocxWriter, NumberingLevel, NumberingRegistry, PackageArchive, Result, StyleDefinition,
    StyleRegistry,
};

fn build_styles() -> Result<StyleRegistry> {
    let mut styles = StyleRegistry::new();
    styles.set_default(StyleAttrs {
        font: Some("Calibri".to_string()),
        size: Some(22),
        ..Default::default()
    });

    styles.register(StyleDefinition::paragraph("Title").attrs(StyleAttrs {
        size: Some(56),
        bold: Some(true),
        color: Some("1F4E79".to_string()),
        align: Some(Alignment::Center),
        spacing_after: Some(480),
        ..Default::default()
    }))?;
    styles.register(StyleDefinition::paragraph("SectionHeading").attrs(StyleAttrs {
        size: Some(32),
        bold: Some(true),
        color: Some("1F4E79".to_string()),
        spacing_before: Some(360),
        spacing_after: Some(120),
        ..Default::default()
    }))?;
    styles.register(
        StyleDefinition::paragraph("SubHeading")
            .based_on("SectionHeading")
            .attrs(StyleAttrs {
                size: Some(26),
                ..Default::default()
            }),
    )?;
    styles.register(StyleDefinition::run("Emphasis").attrs(StyleAttrs {
        italic: Some(true),
        color: Some("C00000".to_string()),
        ..Default::default()
    }))?;
    styles.register(StyleDefinition::table_cell("GridTable").attrs(StyleAttrs {
        borders: Some(Borders::all(BorderLine::single())),
        ..Default::default()
    }))?;

    Ok(styles)
}

fn build_document() -> Result<Document> {
    let roster = Table::builder(vec![2880, 2880, 3600])
        .style("GridTable")
        .header_row(vec![
            TableCell::text("Station").shaded("D9E2F3"),
            TableCell::text("Operator").shaded("D9E2F3"),
            TableCell::text("Status").shaded("D9E2F3"),
        ])
        .row(vec![
            TableCell::text("Relay north"),
            TableCell::text("M. Okafor"),
            TableCell::text("Nominal"),
        ])
        .row(vec![
            TableCell::text("Relay south"),
            TableCell::text("J. Iversen"),
            TableCell::text("Degraded"),
        ])
        .row(vec![
            TableCell::text("Maintenance window: Friday 02:00 UTC").span(3)
        ])
        .build()?;

    let header = vec![Paragraph::builder()
        .align(Alignment::Right)
        .run(Run::text("Relay Network Weekly").style("Emphasis"))
        .build()
        .into()];
    let footer = vec![Paragraph::builder()
        .align(Alignment::Center)
        .text("Page ")
        .field(FieldKind::PageNumber)
        .text(" of ")
        .field(FieldKind::PageCount)
        .build()
        .into()];

    let main = Section::new()
        .header(header)
        .footer(footer)
        .push(Paragraph::styled("Title", "Relay Network Weekly"))
        .push(
            Paragraph::builder()
                .spacing(Spacing::new(0, 240))
                .text("Coverage held above target for the fourth week running. ")
                .run(Run::text("Two stations need attention.").bold())
                .build(),
        )
        .push(Paragraph::styled("SectionHeading", "Station Roster"))
        .push(roster)
        .push(Paragraph::styled("SectionHeading", "Follow-ups"))
        .push(
            Paragraph::builder()
                .numbering("steps", 0)
                .text("Replace the south relay feed line.")
                .build(),
        )
        .push(
            Paragraph::builder()
                .numbering("steps", 1)
                .text("Order the replacement before Thursday.")
                .build(),
        )
        .push(
            Paragraph::builder()
                .numbering("steps", 0)
                .text("Re-run the calibration sweep.")
                .build(),
        )
        .push(Paragraph::styled("SubHeading", "Notes"))
        .push(
            Paragraph::builder()
                .numbering("notes", 0)
                .text("Wind loading stayed within limits.")
                .build(),
        )
        .push(
            Paragraph::builder()
                .numbering("notes", 0)
                .text("No lightning strikes recorded.")
                .build(),
        );

    let appendix = Section::new()
        .a4()
        .margins(1080, 1080, 1440, 1440)
        .push(Paragraph::styled("SectionHeading", "Appendix: Raw Readings"))
        .push(Paragraph::text(
            "Full instrument logs are archived on the shared drive.",
        ))
        .push(Node::PageBreak)
        .push(Paragraph::text("End of report."));

    Ok(Document::builder()
        .add_section(main)
        .add_section(appendix)
        .build())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let out_path = args.get(1).map(String::as_str).unwrap_or("report.docx");

    let styles = match build_styles() {
        Ok(styles) => styles,
        Err(e) => {
            eprintln!("Error registering styles: {}", e);
            std::process::exit(1);
        }
    };

    let mut numbering = NumberingRegistry::new();
    numbering.register(
        "steps",
        vec![NumberingLevel::decimal(720), NumberingLevel::decimal(1440)],
    );
    numbering.register("notes", vec![NumberingLevel::bullet("\u{2022}", 720)]);

    let doc = match build_document() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error assembling document: {}", e);
            std::process::exit(1);
        }
    };

    let writer = DocxWriter::new(styles, numbering);
    let bytes = match writer.write(&doc) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error generating DOCX: {}", e);
            std::process::exit(1);
        }
    };

    println!("--- Package Contents ---");
    match PackageArchive::from_reader(Cursor::new(&bytes)) {
        Ok(archive) => {
            let mut names: Vec<&str> = archive.file_list().collect();
            names.sort_unstable();
            for name in names {
                println!("  {}", name);
            }
        }
        Err(e) => {
            eprintln!("Error reopening package: {}", e);
            std::process::exit(1);
        }
    }
    println!();

    if let Err(e) = std::fs::write(out_path, &bytes) {
        eprintln!("Error writing {}: {}", out_path, e);
        std::process::exit(1);
    }
    println!("Wrote {} bytes to {}", bytes.len(), out_path);
}
