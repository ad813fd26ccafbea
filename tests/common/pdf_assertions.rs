/// Assert that a text-show operator for `$text` appears in the PDF
#[macro_export]
macro_rules! assert_pdf_shows_text {
    ($pdf:expr, $text:expr) => {
        let needle = format!("({}) Tj", $text);
        assert!(
            $pdf.raw().contains(&needle),
            "PDF should show '{}', but no `{}` operator was found",
            $text,
            needle
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
