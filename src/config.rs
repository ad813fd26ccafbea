use folio_style::StyleDefaults;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_NAME: &str = "Folio_Report";

pub const BOOTSTRAP_STYLESHEET: &str = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.2.1/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-iYQeCzEYFbKjA/T2uDLTpkwGzCiq6soy8tYaI1GyVh/UjpbCx/TYkiZhlZB6+fzT" crossorigin="anonymous">"#;

/// Settings a [`Report`](crate::Report) is created from.
///
/// Every field is optional in JSON:
///
/// ```
/// let config = folio::ReportConfig::from_json(r#"{ "name": "Q3", "stylesheets": ["site.css"] }"#).unwrap();
/// assert_eq!(config.name, "Q3");
/// assert!(config.main_stylesheet.contains("bootstrap"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    /// Page title and default export file stem.
    pub name: String,
    /// Emitted first in the page head. A `<link>` element or a bare URL.
    pub main_stylesheet: String,
    pub stylesheets: Vec<String>,
    /// Classes and styles prepended to every container, row and column.
    pub defaults: StyleDefaults,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            main_stylesheet: BOOTSTRAP_STYLESHEET.to_string(),
            stylesheets: Vec::new(),
            defaults: StyleDefaults::default(),
        }
    }
}

impl ReportConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reads a configuration object. Other JSON values, arrays included, are
    /// rejected rather than matched to fields by position.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        if value.is_object() {
            return serde_json::from_value(value);
        }
        let unexpected = match &value {
            Value::Array(_) => Unexpected::Seq,
            Value::String(s) => Unexpected::Str(s),
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::Null => Unexpected::Unit,
            Value::Object(_) => Unexpected::Map,
        };
        Err(<serde_json::Error as de::Error>::invalid_type(
            unexpected,
            &"a report configuration object",
        ))
    }
}
