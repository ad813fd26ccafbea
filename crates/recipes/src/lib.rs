//! Ready-made content for report columns.
//!
//! A [`Recipe`] describes a common block (heading, table, alert, ...) as
//! data. Recipes can be written directly, built with the shortcut functions in
//! [`widgets`], or looked up by type tag from JSON arguments with [`get_html`]:
//!
//! ```
//! use folio_recipes::get_html;
//! use serde_json::json;
//!
//! let content = get_html("List", json!({ "items": ["one", "two"], "ordered": true })).unwrap();
//! assert_eq!(content.len(), 1);
//! ```

mod error;
mod recipe;
pub mod widgets;

pub use error::RecipeError;
pub use recipe::{AlertKind, Recipe};

use folio_idf::Content;
use serde_json::{Map, Value};

/// Builds the content for the recipe named `tag`, configured by `args`.
///
/// `args` must be a JSON object (or `null` for recipes without fields); the
/// tag is matched against the variant names of [`Recipe`], ignoring ASCII case.
pub fn get_html(tag: &str, args: Value) -> Result<Vec<Content>, RecipeError> {
    let canonical = Recipe::TAGS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(tag))
        .ok_or_else(|| RecipeError::UnknownType(tag.to_string()))?;
    let mut fields = match args {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        other => {
            return Err(RecipeError::Arguments {
                tag: tag.to_string(),
                message: format!("expected an object of arguments, got `{other}`"),
            });
        }
    };
    fields.insert("type".to_string(), Value::String(canonical.to_string()));
    let recipe: Recipe =
        serde_json::from_value(Value::Object(fields)).map_err(|e| RecipeError::Arguments {
            tag: tag.to_string(),
            message: e.to_string(),
        })?;
    Ok(recipe.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::Element;
    use serde_json::json;

    #[test]
    fn get_html_builds_tagged_recipe() {
        let content = get_html("Heading", json!({ "text": "Summary", "level": 1 })).unwrap();
        assert_eq!(content, vec![Content::Element(Element::new("h1").child("Summary"))]);
    }

    #[test]
    fn get_html_ignores_tag_case() {
        let content = get_html("separator", Value::Null).unwrap();
        assert_eq!(content, vec![Content::Element(Element::new("hr"))]);
    }

    #[test]
    fn get_html_rejects_unknown_tags() {
        let err = get_html("Carousel", json!({})).unwrap_err();
        assert!(matches!(err, RecipeError::UnknownType(ref tag) if tag == "Carousel"));
    }

    #[test]
    fn get_html_reports_bad_arguments() {
        let err = get_html("Paragraph", json!({ "txt": "typo" })).unwrap_err();
        assert!(matches!(err, RecipeError::Arguments { .. }));
        assert!(err.to_string().contains("Paragraph"));

        let err = get_html("Paragraph", json!(["not", "an", "object"])).unwrap_err();
        assert!(err.to_string().contains("expected an object"));
    }
}
