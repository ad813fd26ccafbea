mod common;

use common::fixtures::*;
use common::{TestResult, column_texts};
use folio::{AddOptions, Content, LayoutError, NodeStyle, Report, ReportError};
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn layout_error(result: Result<impl std::fmt::Debug, ReportError>) -> LayoutError {
    match result {
        Err(ReportError::Layout(e)) => e,
        other => panic!("expected a layout error, got {other:?}"),
    }
}

#[test]
fn test_content_lands_in_a_new_column() -> TestResult {
    init_logger();
    let style = NodeStyle::new();
    let mut report = plain_report("scenario");

    report.add_container("main", false, &style)?;
    assert_eq!(report.document().container_names().collect::<Vec<_>>(), ["main"]);
    assert_eq!(report.current_container_name(), Some("main"));

    report.add_row(None, None, false, &style)?;
    assert_eq!(report.current_row_index(), Some(0));
    report.add_col(None, None, None, false, &style)?;
    assert_eq!(report.current_col_index(), Some(0));

    report.add("hello", AddOptions::default())?;
    assert_eq!(column_texts(&report), vec![vec![], vec!["hello".to_string()]]);
    assert_eq!(report.current_col_index(), Some(1));
    Ok(())
}

#[test]
fn test_first_add_creates_default_nodes() -> TestResult {
    let mut report = plain_report("fresh");
    report.add("x", AddOptions::default())?;

    assert_eq!(report.current_container_name(), Some("default_container"));
    assert_eq!(report.current_row_index(), Some(0));
    assert_eq!(report.current_col_index(), Some(0));
    assert_eq!(column_texts(&report), vec![vec!["x".to_string()]]);
    Ok(())
}

#[test]
fn test_removing_a_container_reanchors_to_last() -> TestResult {
    init_logger();
    let style = NodeStyle::new();
    let mut report = plain_report("containers");
    report.add_container("a", false, &style)?;
    report.add_container("b", false, &style)?;

    report.remove_container(Some("a"))?;
    assert_eq!(report.current_container_name(), Some("b"));

    report.add_container("c", false, &style)?;
    report.remove_container(None)?;
    assert_eq!(report.current_container_name(), Some("b"));

    report.remove_container(None)?;
    assert_eq!(report.current_container_name(), None);
    Ok(())
}

#[test]
fn test_removing_another_container_keeps_selection() -> TestResult {
    let style = NodeStyle::new();
    let mut report = plain_report("containers");
    report.add_container("a", false, &style)?;
    report.add_container("b", false, &style)?;
    report.set_current_container("a")?;

    let (removed, _) = report.remove_container(Some("b"))?;
    assert_eq!(removed.name(), "b");
    assert_eq!(report.current_container_name(), Some("a"));
    assert_eq!(report.document().container_names().collect::<Vec<_>>(), ["a"]);
    Ok(())
}

#[test]
fn test_removing_an_earlier_column_shifts_left() -> TestResult {
    let mut report = grid(3);
    assert_eq!(report.current_col_index(), Some(2));
    let target = report.cursor().col().map(|k| k.id);

    report.remove_col(Some(0), None, None)?;

    assert_eq!(report.current_col_index(), Some(1));
    assert_eq!(report.cursor().col().map(|k| k.id), target);
    Ok(())
}

#[test]
fn test_removing_the_current_column_falls_back_to_last() -> TestResult {
    let mut report = grid(3);
    report.set_current_col(0, None, None)?;

    report.remove_col(None, None, None)?;

    assert_eq!(report.current_col_index(), Some(1));
    assert_eq!(report.tree().row("main", 0)?.columns().len(), 2);
    Ok(())
}

#[test]
fn test_removing_the_only_row_keeps_container() -> TestResult {
    let mut report = grid(1);
    report.remove_row(None, None)?;

    assert_eq!(report.current_container_name(), Some("main"));
    assert_eq!(report.current_row_index(), None);
    assert_eq!(report.current_col_index(), None);
    Ok(())
}

#[test]
fn test_removing_an_earlier_row_shifts_left() -> TestResult {
    let style = NodeStyle::new();
    let mut report = grid(1);
    report.add_row(None, None, false, &style)?;
    report.add_row(None, None, false, &style)?;
    assert_eq!(report.current_row_index(), Some(2));

    report.remove_row(Some(1), None)?;
    assert_eq!(report.current_row_index(), Some(1));
    Ok(())
}

#[test]
fn test_auto_create_accessors_are_idempotent() -> TestResult {
    let mut report = plain_report("idempotent");
    let first = report.get_current_container()?.id();
    let second = report.get_current_container()?.id();
    assert_eq!(first, second);
    assert_eq!(report.document().containers().len(), 1);

    let col = report.get_current_col()?.id();
    assert_eq!(report.get_current_col()?.id(), col);
    assert_eq!(report.get_current_row()?.columns().len(), 1);
    Ok(())
}

#[test]
fn test_new_col_false_appends_to_current_column() -> TestResult {
    let mut report = plain_report("append");
    report.add("a", AddOptions::default())?;
    report.add("b", AddOptions::current())?;
    report.add(["c", "d"], AddOptions::current())?;

    assert_eq!(column_texts(&report), vec![vec!["a", "b", "c", "d"]]);
    Ok(())
}

#[test]
fn test_explicit_column_index_inserts_there() -> TestResult {
    let mut report = plain_report("insert");
    report.add("a", AddOptions::default())?;
    report.add("b", AddOptions::default())?;
    report.add("front", AddOptions::new().col(0))?;

    assert_eq!(column_texts(&report), vec![vec!["front"], vec!["a"], vec!["b"]]);
    assert_eq!(report.current_col_index(), Some(0));
    Ok(())
}

#[test]
fn test_overwrite_replaces_column_in_place() -> TestResult {
    let mut report = plain_report("overwrite");
    report.add("a", AddOptions::default())?;
    report.add("b", AddOptions::default())?;

    report.add("c", AddOptions::new().col(0).overwrite(true))?;
    assert_eq!(column_texts(&report), vec![vec!["c"], vec!["b"]]);

    report.add("d", AddOptions::new().overwrite(true))?;
    assert_eq!(column_texts(&report), vec![vec!["d"], vec!["b"]]);
    Ok(())
}

#[test]
fn test_overwrite_needs_an_existing_column() {
    let mut report = plain_report("overwrite");
    let err = layout_error(report.add("x", AddOptions::new().overwrite(true)));
    assert_eq!(err, LayoutError::NotFound("No column to overwrite.".to_string()));
    assert!(report.document().containers().is_empty());
}

#[test]
fn test_size_and_copy_flags() -> TestResult {
    let mut report = plain_report("flags");
    let shared = Content::shared(Content::text("shared"));
    report.add(shared.clone(), AddOptions::new().size(4).copy(true))?;
    report.add(shared, AddOptions::new().size(8))?;

    let row = report.tree().row("default_container", 0)?;
    let first = row.columns().child_at(0)?;
    let second = row.columns().child_at(1)?;
    assert_eq!(first.size, Some(4));
    assert_eq!(second.size, Some(8));
    assert!(!first.content().child_at(0)?.is_shared());
    assert!(second.content().child_at(0)?.is_shared());
    Ok(())
}

#[test]
fn test_named_container_is_created_and_selected() -> TestResult {
    let mut report = plain_report("named");
    report.add("x", AddOptions::default())?;
    report.add("y", AddOptions::new().container("side"))?;

    assert_eq!(report.current_container_name(), Some("side"));
    assert_eq!(
        report.document().container_names().collect::<Vec<_>>(),
        ["default_container", "side"]
    );
    Ok(())
}

#[test]
fn test_naming_a_container_targets_its_last_row() -> TestResult {
    let style = NodeStyle::new();
    let mut report = grid(1);
    report.add_row(None, None, false, &style)?;
    report.set_current_row(0, None)?;

    report.add("late", AddOptions::current().container("main"))?;

    assert_eq!(report.current_row_index(), Some(1));
    assert_eq!(report.tree().col("main", 1, 0)?.content().len(), 1);
    Ok(())
}

#[test]
fn test_container_overwrite_keeps_position() -> TestResult {
    let style = NodeStyle::new();
    let mut report = plain_report("order");
    for name in ["a", "b", "c"] {
        report.add(name, AddOptions::new().container(name))?;
    }

    let err = layout_error(report.add_container("a", false, &style));
    assert_eq!(err, LayoutError::DuplicateName("a".to_string()));

    report.add_container("a", true, &style)?;
    assert_eq!(report.document().container_names().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert!(report.tree().container("a")?.rows().is_empty());
    assert_eq!(report.current_container_name(), Some("a"));
    Ok(())
}

#[test]
fn test_removal_errors() -> TestResult {
    let mut report = plain_report("errors");
    let err = layout_error(report.remove_container(None));
    assert_eq!(err.to_string(), "No containers to remove.");
    let err = layout_error(report.remove_row(None, None));
    assert_eq!(err.to_string(), "No row to remove.");

    report.add("x", AddOptions::default())?;
    let err = layout_error(report.remove_container(Some("nope")));
    assert_eq!(err.to_string(), "Container 'nope' does not exist.");

    let err = layout_error(report.remove_row(Some(5), None));
    assert_eq!(err.to_string(), "index 5 is out of range for container 'default_container' (length 1)");

    let err = layout_error(report.remove_col(Some(3), Some(0), None));
    assert_eq!(
        err.to_string(),
        "index 3 is out of range for row 0 of container 'default_container' (length 1)"
    );
    assert_eq!(column_texts(&report), vec![vec!["x"]]);
    Ok(())
}

#[test]
fn test_setters_validate_targets() -> TestResult {
    let mut report = grid(2);
    assert!(matches!(layout_error(report.set_current_container("nope")), LayoutError::NotFound(_)));
    assert!(matches!(layout_error(report.set_current_row(1, None)), LayoutError::IndexOutOfRange(_)));
    assert!(matches!(
        layout_error(report.set_current_col(2, Some(0), Some("main"))),
        LayoutError::IndexOutOfRange(_)
    ));

    report.set_current_col(0, Some(0), Some("main"))?;
    assert_eq!(report.current_col_index(), Some(0));
    Ok(())
}

#[test]
fn test_style_setters_append_or_replace() -> TestResult {
    let mut report = Report::new("styles");
    report.set_row_classes("border", None, None, false)?;
    assert_eq!(
        report.get_current_row()?.style.classes.as_slice(),
        ["justify-content-center pb-5 gx-5", "border"]
    );

    report.set_row_classes(vec!["g-0", "mt-2"], None, None, true)?;
    assert_eq!(report.get_current_row()?.style.classes.as_slice(), ["g-0", "mt-2"]);

    report.set_container_styles("max-width: 60rem", None, false)?;
    report.set_col_classes("text-end", None, None, None, false)?;
    report.set_col_styles(["color: red", "margin: 0"], Some(0), Some(0), None, false)?;
    let col = report.get_current_col()?;
    assert_eq!(col.style.classes.as_slice(), ["text-end"]);
    assert_eq!(col.style.styles.as_slice(), ["color: red", "margin: 0"]);
    assert_eq!(
        report.get_current_container()?.style.styles.as_slice(),
        ["max-width: 60rem"]
    );
    Ok(())
}

#[test]
fn test_add_special_uses_recipes() -> TestResult {
    let mut report = plain_report("recipes");
    report.add_special("heading", json!({ "text": "Summary", "level": 1 }), AddOptions::default())?;
    assert_eq!(column_texts(&report), vec![vec!["Summary"]]);

    let err = report.add_special("chart", json!({}), AddOptions::default());
    assert!(matches!(err, Err(ReportError::Recipe(_))));
    assert_eq!(report.tree().row("default_container", 0)?.columns().len(), 1);
    Ok(())
}

#[test]
fn test_report_from_json_config() -> TestResult {
    let report = Report::from_json_config(r#"{ "name": "Configured", "stylesheets": ["extra.css"] }"#)?;
    assert_eq!(report.name(), "Configured");
    assert_eq!(report.document().stylesheets(), ["extra.css"]);

    assert!(matches!(Report::from_json_config("[]"), Err(ReportError::Config(_))));
    Ok(())
}
