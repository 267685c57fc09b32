//! Field variants and the transient field input record.
//!
//! A field is a typed form element: either a leaf that occupies one or
//! more grid slots, or a group — a layout container holding an ordered
//! list of child fields, which may themselves be groups. All variants
//! share `{id, title, positions}`; a group's own positions list is
//! conventionally empty, only its leaf descendants occupy cells.

use serde::{Deserialize, Serialize};

use crate::error::UnknownFieldType;
use crate::position::Position;

// ---------------------------------------------------------------------------
// Field type registry
// ---------------------------------------------------------------------------

/// Canonical field-type tags, as stored by the persistence layer.
pub mod tags {
    pub const TEXT: &str = "text";
    pub const NUMBER: &str = "number";
    pub const SELECT: &str = "select";
    pub const MULTISELECT: &str = "multiselect";
    pub const KEYVALUE: &str = "keyvalue";
    pub const GROUP: &str = "group";

    /// All registered field type tags.
    pub const ALL: &[&str] = &[TEXT, NUMBER, SELECT, MULTISELECT, KEYVALUE, GROUP];
}

/// The closed set of field types.
///
/// This is the type registry: it is fixed at compile time and every
/// constructor dispatch is an exhaustive match, so no runtime registration
/// is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Multiselect,
    KeyValue,
    Group,
}

impl FieldKind {
    /// The canonical string tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Text => tags::TEXT,
            FieldKind::Number => tags::NUMBER,
            FieldKind::Select => tags::SELECT,
            FieldKind::Multiselect => tags::MULTISELECT,
            FieldKind::KeyValue => tags::KEYVALUE,
            FieldKind::Group => tags::GROUP,
        }
    }

    /// Look up a kind by its registered tag.
    ///
    /// An unknown tag indicates a broken registry or a bad stored
    /// document, not user input, so the failure is [`UnknownFieldType`]
    /// rather than a template validation error.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownFieldType> {
        match tag {
            tags::TEXT => Ok(FieldKind::Text),
            tags::NUMBER => Ok(FieldKind::Number),
            tags::SELECT => Ok(FieldKind::Select),
            tags::MULTISELECT => Ok(FieldKind::Multiselect),
            tags::KEYVALUE => Ok(FieldKind::KeyValue),
            tags::GROUP => Ok(FieldKind::Group),
            _ => Err(UnknownFieldType {
                tag: tag.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Transient input
// ---------------------------------------------------------------------------

/// Transient field input as supplied by a caller; not persisted as-is.
///
/// `fields` is populated only for group-typed data, `key`/`value` only for
/// key-value fields, and `resource_id` only for select/multiselect fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldData {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Materialized field
// ---------------------------------------------------------------------------

/// A materialized field in a template.
///
/// Serializes with the variant payload flattened next to the common
/// attributes, tagged by `type`, which matches the stored document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(flatten)]
    pub variant: FieldVariant,
}

/// Variant-specific payload, tagged by the canonical field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FieldVariant {
    Text,
    Number,
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource_id: Option<String>,
    },
    Multiselect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource_id: Option<String>,
    },
    KeyValue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Group {
        #[serde(default)]
        fields: Vec<Field>,
    },
}

impl Field {
    /// The field's type tag.
    pub fn kind(&self) -> FieldKind {
        match self.variant {
            FieldVariant::Text => FieldKind::Text,
            FieldVariant::Number => FieldKind::Number,
            FieldVariant::Select { .. } => FieldKind::Select,
            FieldVariant::Multiselect { .. } => FieldKind::Multiselect,
            FieldVariant::KeyValue { .. } => FieldKind::KeyValue,
            FieldVariant::Group { .. } => FieldKind::Group,
        }
    }

    /// Child fields; empty for every non-group variant.
    pub fn children(&self) -> &[Field] {
        match &self.variant {
            FieldVariant::Group { fields } => fields,
            _ => &[],
        }
    }
}
