use crate::models::{Citation, RetrievedDocument};

/// Normalize a retrieved document into a citation, keeping its page as supplied
pub fn citation_from_document(document: &RetrievedDocument) -> Citation {
    Citation::new(document.source.clone(), document.page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_source_and_page() {
        let citation = citation_from_document(&RetrievedDocument::new("manual.pdf", Some(5)));
        assert_eq!(citation, Citation::new("manual.pdf", Some(5)));
        assert_eq!(citation.display_label(), "manual.pdf(page No.5)");
    }

    #[test]
    fn test_missing_page_gives_bare_label() {
        let citation = citation_from_document(&RetrievedDocument::new("manual.pdf", None));
        assert_eq!(citation.display_label(), "manual.pdf");
    }
}
