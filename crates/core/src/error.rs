//! Domain error taxonomy for template grid operations.
//!
//! Every template operation returns one of these instead of panicking.
//! Failures are fully local: the template never mutates state on a failing
//! path, so callers can retry with corrected data without compensating
//! logic.

use crate::position::Position;

/// Convenience alias for template operation results.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors returned by [`Template`](crate::template::Template) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A declared position's row is outside `[1, ROWS_LIMIT]`.
    #[error("row {row} is outside the template grid")]
    RowLimitExceeded { row: u32 },

    /// A declared position's column is outside `[1, COLUMNS_LIMIT]`.
    /// Only reported once the row is known valid for that position.
    #[error("column {col} is outside the template grid")]
    ColumnLimitExceeded { col: u32 },

    /// A declared position is already occupied by a different field.
    #[error("slot {position} is already occupied by another field")]
    CommonFieldSlotConflict { position: Position },

    /// Reserved for conflicts attributable to group-internal placement.
    /// Group conflicts currently surface as [`CommonFieldSlotConflict`];
    /// the variant is kept so the taxonomy stays closed.
    ///
    /// [`CommonFieldSlotConflict`]: TemplateError::CommonFieldSlotConflict
    #[error("slot {position} is already occupied inside a group field")]
    GroupFieldSlotConflict { position: Position },

    /// `update_field` referenced an identifier absent from the template.
    #[error("field not found: {id}")]
    FieldNotFound { id: String },
}

/// A field-type tag with no registered constructor.
///
/// This indicates a broken type registry rather than bad user input, so it
/// is deliberately not a [`TemplateError`] variant: callers should treat it
/// as fatal instead of surfacing it as a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unregistered field type: '{tag}'")]
pub struct UnknownFieldType {
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_error_display() {
        let err = TemplateError::RowLimitExceeded { row: 100 };
        assert_eq!(err.to_string(), "row 100 is outside the template grid");

        let err = TemplateError::CommonFieldSlotConflict {
            position: Position::new(1, 1),
        };
        assert_eq!(
            err.to_string(),
            "slot 1-1 is already occupied by another field"
        );

        let err = TemplateError::FieldNotFound {
            id: "field1".to_string(),
        };
        assert_eq!(err.to_string(), "field not found: field1");
    }

    #[test]
    fn unknown_field_type_display() {
        let err = UnknownFieldType {
            tag: "checkbox".to_string(),
        };
        assert_eq!(err.to_string(), "unregistered field type: 'checkbox'");
    }
}
