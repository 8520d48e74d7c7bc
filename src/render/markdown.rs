//! Markdown report rendering.
//!
//! The report leads with a summary count table, followed by one section
//! per non-empty category. Each record shows author, date, and either its
//! reconstructed context or a bounded marker-wrapped fallback of the
//! literal text when no enclosing paragraph was found.

use crate::model::{ChangeKind, ChangeRecord, CommentRecord, ExtractionReport};

/// Bound (chars) of a comment anchor excerpt.
const ANCHOR_CLIP: usize = 200;

/// Bound (chars) of the literal-text fallback rendering.
const FALLBACK_CLIP: usize = 300;

/// Bound (chars) of the affected-text line in the formatting section.
const FORMAT_TEXT_CLIP: usize = 100;

/// Placeholder body when the package carries no changes and no comments.
const EMPTY_PLACEHOLDER: &str = "*No tracked changes or comments in this document*";

/// Convert an extraction report to Markdown.
pub fn to_markdown(report: &ExtractionReport) -> String {
    let mut lines: Vec<String> = vec!["# Tracked Changes".to_string(), String::new()];

    let summary = report.summary();
    lines.extend([
        "## 📊 Summary".to_string(),
        String::new(),
        "| Type | Count |".to_string(),
        "|------|-------|".to_string(),
        format!("| Comments | {} |", summary.comments),
        format!("| Deletions | {} |", summary.deletions),
        format!("| Insertions | {} |", summary.insertions),
        format!("| Formatting | {} |", summary.format_changes),
        format!("| Paragraph formats | {} |", summary.paragraph_changes),
        String::new(),
        "---".to_string(),
        String::new(),
    ]);

    render_comments(&mut lines, &report.comments);
    render_text_changes(
        &mut lines,
        "## ❌ Deletions",
        report,
        ChangeKind::Delete,
    );
    render_text_changes(
        &mut lines,
        "## ➕ Insertions",
        report,
        ChangeKind::Insert,
    );
    render_format_changes(&mut lines, report);
    render_paragraph_changes(&mut lines, report);

    if report.is_empty() {
        lines.push(EMPTY_PLACEHOLDER.to_string());
    }

    lines.join("\n")
}

fn render_comments(lines: &mut Vec<String>, comments: &[CommentRecord]) {
    if comments.is_empty() {
        return;
    }
    lines.extend(["## 💬 Comments".to_string(), String::new()]);
    for comment in comments {
        lines.push(format!("### #{} - {}", comment.id, comment.author));
        lines.push(String::new());
        lines.push(format!("**Date**: {}", comment.date));
        lines.push(String::new());
        if !comment.anchor.is_empty() {
            lines.push(format!("**Anchor**: > {}", clip_chars(&comment.anchor, ANCHOR_CLIP)));
            lines.push(String::new());
        }
        lines.push(format!("**Comment**: {}", comment.text));
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }
}

fn render_text_changes(
    lines: &mut Vec<String>,
    title: &str,
    report: &ExtractionReport,
    kind: ChangeKind,
) {
    let records: Vec<&ChangeRecord> = report.revisions_of(kind).collect();
    if records.is_empty() {
        return;
    }
    lines.extend([title.to_string(), String::new()]);
    for (i, record) in records.iter().enumerate() {
        push_record_heading(lines, i + 1, record);
        if record.has_context() {
            lines.push(record.context.clone());
        } else {
            let clipped = clip_chars(&record.text, FALLBACK_CLIP);
            lines.push(match kind {
                ChangeKind::Delete => format!("~~{clipped}~~"),
                _ => format!("**+{clipped}+**"),
            });
        }
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }
}

fn render_format_changes(lines: &mut Vec<String>, report: &ExtractionReport) {
    let records: Vec<&ChangeRecord> = report.revisions_of(ChangeKind::FormatChange).collect();
    if records.is_empty() {
        return;
    }
    lines.extend(["## 🎨 Formatting".to_string(), String::new()]);
    for (i, record) in records.iter().enumerate() {
        push_record_heading(lines, i + 1, record);
        lines.push(format!("**Change**: {}", record.detail));
        lines.push(String::new());
        if !record.text.is_empty() {
            lines.push(format!(
                "**Text**: {}",
                clip_chars(&record.text, FORMAT_TEXT_CLIP)
            ));
            lines.push(String::new());
        }
        if record.has_context() {
            lines.push(record.context.clone());
            lines.push(String::new());
        }
        lines.push("---".to_string());
        lines.push(String::new());
    }
}

fn render_paragraph_changes(lines: &mut Vec<String>, report: &ExtractionReport) {
    let records: Vec<&ChangeRecord> = report
        .revisions_of(ChangeKind::ParagraphFormatChange)
        .collect();
    if records.is_empty() {
        return;
    }
    lines.extend(["## 📝 Paragraph Formatting".to_string(), String::new()]);
    for (i, record) in records.iter().enumerate() {
        push_record_heading(lines, i + 1, record);
        if record.has_context() {
            lines.push(format!("**Paragraph**: {}...", record.context));
            lines.push(String::new());
        }
        lines.push("---".to_string());
        lines.push(String::new());
    }
}

fn push_record_heading(lines: &mut Vec<String>, number: usize, record: &ChangeRecord) {
    lines.push(format!("### #{} - {}", number, record.author));
    lines.push(String::new());
    lines.push(format!("**Date**: {}", record.date));
    lines.push(String::new());
}

/// First `limit` characters, with a trailing ellipsis when clipped.
fn clip_chars(s: &str, limit: usize) -> String {
    if s.chars().count() > limit {
        let clipped: String = s.chars().take(limit).collect();
        format!("{clipped}...")
    } else {
        s.to_string()
    }
}
