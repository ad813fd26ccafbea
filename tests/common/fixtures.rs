use folio::{AddOptions, NodeStyle, Report, ReportConfig, StyleDefaults};

/// A report whose nodes get no default classes, so markup assertions stay short
pub fn plain_report(name: &str) -> Report {
    Report::with_config(ReportConfig {
        name: name.to_string(),
        main_stylesheet: String::new(),
        stylesheets: Vec::new(),
        defaults: StyleDefaults::empty(),
    })
}

/// `main` with one row holding `cols` empty columns; the last column is current
pub fn grid(cols: usize) -> Report {
    let style = NodeStyle::new();
    let mut report = plain_report("grid");
    report.add_container("main", false, &style).unwrap();
    report.add_row(None, None, false, &style).unwrap();
    for _ in 0..cols {
        report.add_col(None, None, None, false, &style).unwrap();
    }
    report
}

/// Two containers with a heading row and a two-column body row each
pub fn sectioned_report() -> Report {
    let mut report = plain_report("Sections");
    for section in ["intro", "results"] {
        report
            .add(format!("{section} heading"), AddOptions::new().container(section).new_row(true))
            .unwrap();
        report
            .add(format!("{section} left"), AddOptions::new().new_row(true))
            .unwrap();
        report.add(format!("{section} right"), AddOptions::default()).unwrap();
    }
    report
}
