//! Template grid-positioning domain core.
//!
//! Users assemble templates (forms) of typed fields arranged on a fixed
//! 20x6 grid, later used to produce data-entry sheets. This crate owns the
//! invariants of that grid: every declared cell is validated against the
//! grid bounds, collisions are detected across the whole field tree
//! (fields nested inside groups included), and a template's set of
//! occupied cells never drifts from the fields that claim them — failing
//! operations leave the template exactly as it was.
//!
//! Persistence, HTTP handling, and authorization live in the owning
//! application; this crate operates purely on in-memory domain objects.

pub mod error;
pub mod factory;
pub mod field;
pub mod position;
pub mod repository;
pub mod template;

pub use error::{TemplateError, TemplateResult, UnknownFieldType};
pub use factory::build_field;
pub use field::{Field, FieldData, FieldKind, FieldVariant};
pub use position::{Position, PositionParseError};
pub use repository::TemplateRepository;
pub use template::{Template, COLUMNS_LIMIT, ROWS_LIMIT};
