//! Client-side file gates and the universal converter's format graph.
//! These run before any upload is attempted; the server remains the source
//! of truth for size and content limits.

/// Source extension → supported target formats, first entry is the default
/// selection.
const CONVERSIONS: &[(&str, &[&str])] = &[
    ("pdf", &["txt", "docx"]),
    ("docx", &["pdf", "txt", "html"]),
    ("txt", &["pdf", "docx"]),
    ("md", &["html"]),
    ("html", &["md"]),
    ("csv", &["json"]),
    ("json", &["csv"]),
];

pub fn conversions_for(ext: &str) -> Option<&'static [&'static str]> {
    CONVERSIONS
        .iter()
        .find(|(source, _)| *source == ext)
        .map(|(_, targets)| *targets)
}

pub fn format_label(ext: &str) -> &'static str {
    match ext {
        "pdf" => "PDF Document",
        "docx" => "Word Document",
        "txt" => "Text File",
        "md" => "Markdown",
        "html" => "HTML",
        "csv" => "CSV Spreadsheet",
        "json" => "JSON Data",
        _ => "File",
    }
}

/// Lowercased extension after the last dot, if any.
pub fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// `report.pdf` + `txt` → `report.txt`; extensionless names keep the whole
/// name as the stem.
pub fn download_name(original: &str, target: &str) -> String {
    let stem = original
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|s| !s.is_empty())
        .unwrap_or(original);
    format!("{}.{}", stem, target)
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn is_pdf_mime(mime: &str) -> bool {
    mime == "application/pdf"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_graph_matches_supported_formats() {
        assert_eq!(conversions_for("pdf"), Some(&["txt", "docx"][..]));
        assert_eq!(conversions_for("docx"), Some(&["pdf", "txt", "html"][..]));
        assert_eq!(conversions_for("csv"), Some(&["json"][..]));
        assert_eq!(conversions_for("exe"), None);
        assert_eq!(conversions_for("PDF"), None, "lookup expects lowercase");
    }

    #[test]
    fn extension_lowercases_and_rejects_edge_names() {
        assert_eq!(extension("Report.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("noext"), None);
        assert_eq!(extension(".hidden"), None);
        assert_eq!(extension("trailing."), None);
    }

    #[test]
    fn download_name_swaps_the_extension() {
        assert_eq!(download_name("report.pdf", "txt"), "report.txt");
        assert_eq!(download_name("a.b.c.docx", "pdf"), "a.b.c.pdf");
        assert_eq!(download_name("noext", "pdf"), "noext.pdf");
    }

    #[test]
    fn mime_gates() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(is_pdf_mime("application/pdf"));
        assert!(!is_pdf_mime("image/png"));
    }
}
