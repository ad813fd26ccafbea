//! Build HTML reports out of containers, rows and columns.
//!
//! A [`Report`] owns a layout tree and a cursor. Operations that leave out a
//! target default to the cursor's current container, row or column, creating
//! one when none exists, and every structural change re-anchors the cursor.
//!
//! ```
//! use folio::{AddOptions, Report};
//!
//! let mut report = Report::new("Quarterly");
//! report.add("Revenue grew.", AddOptions::default()).unwrap();
//! report.add(["Left", "Right"], AddOptions::new().new_row(true)).unwrap();
//!
//! assert_eq!(report.current_container_name(), Some("default_container"));
//! assert_eq!(report.current_row_index(), Some(1));
//! assert!(report.render_html().unwrap().contains("Revenue grew."));
//! ```

pub mod config;
pub mod error;
pub mod report;

pub use config::ReportConfig;
pub use error::ReportError;
pub use report::{AddOptions, Cursor, Position, Report};

pub use folio_idf::{Content, Element, Elements, RenderOptions};
pub use folio_layout::{Column, Container, Document, LayoutError, Row};
pub use folio_recipes::{Recipe, widgets};
pub use folio_style::{NodeStyle, StyleDefaults};
pub use folio_types::{IndexError, OneOrMany};
