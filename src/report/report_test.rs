use super::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_consistent(report: &Report) {
    assert!(
        report.cursor().is_consistent_with(report.tree()),
        "cursor {:?} does not match the tree",
        report.cursor().position()
    );
}

#[test]
fn cursor_stays_consistent_through_mixed_edits() {
    init_logger();
    let style = NodeStyle::new();
    let mut report = Report::new("mixed");

    report.add("first", AddOptions::default()).unwrap();
    assert_consistent(&report);
    report.add_container("side", false, &style).unwrap();
    assert_consistent(&report);
    report.add(["a", "b"], AddOptions::new().new_row(true)).unwrap();
    assert_consistent(&report);
    report.add_row(Some(0), None, false, &style).unwrap();
    assert_consistent(&report);
    report.add_col(None, Some(1), None, false, &style).unwrap();
    assert_consistent(&report);
    report.remove_row(Some(0), None).unwrap();
    assert_consistent(&report);
    report.remove_col(None, None, None).unwrap();
    assert_consistent(&report);
    report.add_container("side", true, &style).unwrap();
    assert_consistent(&report);
    report.remove_container(Some("default_container")).unwrap();
    assert_consistent(&report);
    report.remove_container(None).unwrap();
    assert_consistent(&report);
    assert_eq!(report.cursor().position(), &Position::Empty);
}

#[test]
fn cached_indices_follow_insertions_in_front() {
    let style = NodeStyle::new();
    let mut report = Report::new("shift");
    report.add_container("main", false, &style).unwrap();
    report.add_row(None, None, false, &style).unwrap();
    report.add_row(None, None, false, &style).unwrap();
    report.set_current_row(1, None).unwrap();
    let current = report.cursor().row().unwrap().id;

    // Inserting at 0 selects the new row; going back by id must find index 2.
    report.add_row(Some(0), None, false, &style).unwrap();
    assert_eq!(report.current_row_index(), Some(0));
    let index = report.tree().container("main").unwrap().row_position(current);
    assert_eq!(index, Some(2));
    report.set_current_row(2, None).unwrap();
    assert_eq!(report.cursor().row().map(|r| r.id), Some(current));
    assert_consistent(&report);
}

#[test]
fn failed_probe_leaves_report_untouched() {
    let mut report = Report::new("probe");
    let before = report.clone();

    assert!(report.add("x", AddOptions::new().row(2)).is_err());
    assert!(report.add("x", AddOptions::new().container("side").col(1)).is_err());
    assert!(report.add_col(Some(1), None, None, false, &NodeStyle::new()).is_err());
    assert!(report.get_row(0, Some("side")).is_err());

    assert_eq!(report.document(), before.document());
    assert_eq!(report.cursor(), before.cursor());
}

#[test]
fn failed_overwrite_leaves_report_untouched() {
    let mut report = Report::new("probe");
    report.add("a", AddOptions::default()).unwrap();
    let before = report.clone();

    assert!(report.add("b", AddOptions::new().col(3).overwrite(true)).is_err());
    assert!(report.add("b", AddOptions::new().new_row(true).overwrite(true).row(1)).is_err());

    assert_eq!(report.document(), before.document());
    assert_eq!(report.cursor(), before.cursor());
}
