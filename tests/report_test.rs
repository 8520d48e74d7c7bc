//! Integration tests for report rendering over real packages.

use std::io::{Cursor, Write};

use undocx::{extract_bytes, render, JsonFormat};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn markdown_report_sections_in_order() {
    let document = r#"<w:document><w:body>
        <w:p><w:r><w:t>keep </w:t></w:r><w:del w:id="1" w:author="A"><w:r><w:delText>cut</w:delText></w:r></w:del></w:p>
        <w:p><w:ins w:id="2" w:author="B"><w:r><w:t>new</w:t></w:r></w:ins></w:p>
    </w:body></w:document>"#;
    let report = extract_bytes(build_docx(&[("word/document.xml", document)])).unwrap();
    let md = render::to_markdown(&report);

    assert!(md.starts_with("# Tracked Changes"));
    assert!(md.contains("| Deletions | 1 |"));
    assert!(md.contains("| Insertions | 1 |"));

    let summary = md.find("## 📊 Summary").unwrap();
    let deletions = md.find("## ❌ Deletions").unwrap();
    let insertions = md.find("## ➕ Insertions").unwrap();
    assert!(summary < deletions && deletions < insertions);

    assert!(md.contains("keep ~~cut~~"));
    assert!(md.contains("**+new+**"));
}

#[test]
fn empty_package_renders_placeholder_line() {
    let document =
        r#"<w:document><w:body><w:p><w:r><w:t>nothing tracked</w:t></w:r></w:p></w:body></w:document>"#;
    let report = extract_bytes(build_docx(&[("word/document.xml", document)])).unwrap();
    let md = render::to_markdown(&report);

    assert!(md.ends_with("*No tracked changes or comments in this document*"));
    assert!(!md.contains("## ❌"));
    assert!(!md.contains("## 💬"));
}

#[test]
fn context_less_change_uses_marked_fallback() {
    // A deletion outside any paragraph has no context rendering; the
    // report falls back to the marker-wrapped literal text.
    let document = r#"<w:document><w:body>
        <w:del w:id="1" w:author="A"><w:r><w:delText>orphaned text</w:delText></w:r></w:del>
    </w:body></w:document>"#;
    let report = extract_bytes(build_docx(&[("word/document.xml", document)])).unwrap();

    assert_eq!(report.revisions[0].context, "");
    let md = render::to_markdown(&report);
    assert!(md.contains("~~orphaned text~~"));
}

#[test]
fn json_report_includes_summary_and_records() {
    let document = r#"<w:document><w:body>
        <w:p><w:ins w:id="9" w:author="B"><w:r><w:t>x</w:t></w:r></w:ins></w:p>
    </w:body></w:document>"#;
    let report = extract_bytes(build_docx(&[("word/document.xml", document)])).unwrap();

    let pretty = render::to_json(&report, JsonFormat::Pretty).unwrap();
    assert!(pretty.contains("\"summary\""));
    assert!(pretty.contains("\"insertions\": 1"));
    assert!(pretty.contains("\"kind\": \"insert\""));

    let compact = render::to_json(&report, JsonFormat::Compact).unwrap();
    assert!(!compact.contains('\n'));
}
