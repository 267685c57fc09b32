//! Template aggregate: grid limits, slot bookkeeping, and the field
//! add/update algorithms.
//!
//! A template owns an ordered list of top-level fields plus
//! `used_positions`, the authoritative set of every slot occupied anywhere
//! in the field tree (nested group descendants included). Both mutation
//! paths validate the whole incoming tree before touching any state, so a
//! failing call leaves the template exactly as it was.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::factory::build_field;
use crate::field::{Field, FieldData};
use crate::position::Position;

// ---------------------------------------------------------------------------
// Grid limits
// ---------------------------------------------------------------------------

/// Inclusive upper bound for row coordinates; rows start at 1.
pub const ROWS_LIMIT: u32 = 20;

/// Inclusive upper bound for column coordinates; columns start at 1.
pub const COLUMNS_LIMIT: u32 = 6;

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// The aggregate root for a data-entry form layout.
///
/// `fields` holds only top-level entries — groups keep their children
/// attached internally. `used_positions` is derived state and always
/// equals the recursive union of every field's positions; the two are only
/// ever updated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Opaque identifier assigned by the persistence layer; empty until
    /// the template is first saved.
    pub id: String,
    pub title: String,
    fields: Vec<Field>,
    used_positions: BTreeSet<Position>,
}

impl Template {
    /// Create an empty template.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            fields: Vec::new(),
            used_positions: BTreeSet::new(),
        }
    }

    /// Rebuild a template from stored state.
    ///
    /// The caller (the persistence layer) is trusted to supply a
    /// `used_positions` set consistent with `fields`.
    pub fn hydrate(
        id: impl Into<String>,
        title: impl Into<String>,
        fields: Vec<Field>,
        used_positions: BTreeSet<Position>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
            used_positions,
        }
    }

    /// Top-level fields, in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Every slot currently occupied anywhere in the field tree.
    pub fn used_positions(&self) -> &BTreeSet<Position> {
        &self.used_positions
    }

    /// Validate and add a field (with its whole subtree, for groups).
    ///
    /// Every declared position must lie on the grid and be free; on any
    /// failure nothing is mutated and the first violation found in
    /// depth-first declaration order is returned. On success the
    /// materialized field is appended and its slots are claimed.
    pub fn add_field(&mut self, data: &FieldData) -> TemplateResult<Field> {
        let positions = collect_data_positions(data);
        validate_bounds(&positions)?;
        validate_free(&positions, &self.used_positions)?;

        let field = build_field(data);
        self.used_positions.extend(positions);
        self.fields.push(field.clone());
        Ok(field)
    }

    /// Validate and replace the top-level field identified by `field_id`.
    ///
    /// The replacement is validated like [`add_field`](Self::add_field),
    /// except that the old field's own slots count as free — a field may
    /// reuse the cells it already occupies. The new field takes over the
    /// old one's slot in the top-level list.
    pub fn update_field(&mut self, field_id: &str, data: &FieldData) -> TemplateResult<Field> {
        let index = self
            .fields
            .iter()
            .position(|f| f.id == field_id)
            .ok_or_else(|| TemplateError::FieldNotFound {
                id: field_id.to_string(),
            })?;

        let old_positions = collect_field_positions(&self.fields[index]);
        let new_positions = collect_data_positions(data);
        validate_bounds(&new_positions)?;

        let remaining: BTreeSet<Position> = self
            .used_positions
            .difference(&old_positions)
            .copied()
            .collect();
        validate_free(&new_positions, &remaining)?;

        // All checks passed; commit in one transition.
        let field = build_field(data);
        for p in &old_positions {
            self.used_positions.remove(p);
        }
        self.used_positions.extend(new_positions);
        self.fields[index] = field.clone();
        Ok(field)
    }
}

// ---------------------------------------------------------------------------
// Pure tree walks
// ---------------------------------------------------------------------------

/// Collect every declared position in a field-data tree.
///
/// Depth-first: a node's own positions in declaration order, then each
/// child subtree in array order. The ordering decides which violation is
/// reported first by [`validate_bounds`].
fn collect_data_positions(data: &FieldData) -> Vec<Position> {
    fn walk(data: &FieldData, out: &mut Vec<Position>) {
        out.extend(data.positions.iter().copied());
        for child in &data.fields {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(data, &mut out);
    out
}

/// Collect every slot occupied under a materialized field, nested group
/// descendants included.
fn collect_field_positions(field: &Field) -> BTreeSet<Position> {
    fn walk(field: &Field, out: &mut BTreeSet<Position>) {
        out.extend(field.positions.iter().copied());
        for child in field.children() {
            walk(child, out);
        }
    }

    let mut out = BTreeSet::new();
    walk(field, &mut out);
    out
}

/// Check every candidate position against the grid bounds.
///
/// Row is checked before column for the same position; the first violation
/// wins.
fn validate_bounds(positions: &[Position]) -> TemplateResult<()> {
    for p in positions {
        if p.row < 1 || p.row > ROWS_LIMIT {
            return Err(TemplateError::RowLimitExceeded { row: p.row });
        }
        if p.col < 1 || p.col > COLUMNS_LIMIT {
            return Err(TemplateError::ColumnLimitExceeded { col: p.col });
        }
    }
    Ok(())
}

/// Check that no candidate position is already occupied.
///
/// Candidates are tested against committed state only, so multiple
/// positions belonging to the same incoming field never collide with each
/// other.
fn validate_free(candidates: &[Position], used: &BTreeSet<Position>) -> TemplateResult<()> {
    for p in candidates {
        if used.contains(p) {
            return Err(TemplateError::CommonFieldSlotConflict { position: *p });
        }
    }
    Ok(())
}
