//! In-memory download package: the CSV, a static manifest and an HTML
//! preview, zipped together.

use crate::Result;
use std::io::{Cursor, Write};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

pub const CSV_ENTRY: &str = "generated_data.csv";
pub const MANIFEST_ENTRY: &str = "imsmanifest.xml";
pub const HTML_ENTRY: &str = "index.html";

/// Entry names in the order they are written.
pub const ENTRY_NAMES: [&str; 3] = [CSV_ENTRY, MANIFEST_ENTRY, HTML_ENTRY];

pub const PACKAGE_FILE_NAME: &str = "csv_scorm_package.zip";
pub const PACKAGE_CONTENT_TYPE: &str = "application/zip";

pub const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest identifier="scorm_2004" version="1.0">
    <organizations>
        <organization identifier="org_1">
            <title>CSV SCORM Package</title>
        </organization>
    </organizations>
    <resources>
        <resource identifier="res_1" type="webcontent" href="index.html">
            <file href="generated_data.csv"/>
            <file href="index.html"/>
        </resource>
    </resources>
</manifest>"#;

/// Builds the ZIP archive for `csv_content`. The CSV entry is written
/// byte-for-byte; entries are stored uncompressed.
pub fn build_package(csv_content: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let html = render_preview(csv_content);

    let entries: [(&str, &[u8]); 3] = [
        (CSV_ENTRY, csv_content.as_bytes()),
        (MANIFEST_ENTRY, MANIFEST.as_bytes()),
        (HTML_ENTRY, html.as_bytes()),
    ];

    for (name, contents) in entries {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(name, options)?;
        zip.write_all(contents)?;
    }

    Ok(zip.finish()?.into_inner())
}

/// HTML page showing the CSV with each `\n` turned into `<br>`. The CSV is
/// inserted without escaping.
pub fn render_preview(csv_content: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <title>CSV Content</title>
</head>
<body>
    <h1>Generated CSV Content</h1>
    <p>This package contains the CSV data you requested: {}</p>
</body>
</html>
"#,
        csv_content.replace('\n', "<br>")
    )
}
