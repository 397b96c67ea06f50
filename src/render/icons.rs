use std::path::Path;

use serde::{Deserialize, Serialize};

/// Display category of a source document. Only used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconCategory {
    Pdf,
    Word,
    Spreadsheet,
    Text,
    Other,
}

impl IconCategory {
    pub fn glyph(self) -> &'static str {
        match self {
            IconCategory::Pdf => "📕",
            IconCategory::Word => "📘",
            IconCategory::Spreadsheet => "📗",
            IconCategory::Text => "📄",
            IconCategory::Other => "📁",
        }
    }

    /// Short ASCII tag for plain-text output
    pub fn tag(self) -> &'static str {
        match self {
            IconCategory::Pdf => "pdf",
            IconCategory::Word => "doc",
            IconCategory::Spreadsheet => "sheet",
            IconCategory::Text => "text",
            IconCategory::Other => "file",
        }
    }
}

/// Classify a source path by its extension
pub fn icon_for_path(path: &str) -> IconCategory {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => IconCategory::Pdf,
        Some("doc" | "docx") => IconCategory::Word,
        Some("xls" | "xlsx" | "csv") => IconCategory::Spreadsheet,
        Some("txt" | "md") => IconCategory::Text,
        _ => IconCategory::Other,
    }
}
