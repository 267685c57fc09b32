//! Recursive field materialization from transient field data.

use crate::field::{Field, FieldData, FieldKind, FieldVariant};

/// Materialize a [`Field`] — and, for groups, its entire child subtree —
/// from plain field data.
///
/// Construction is total over the closed [`FieldKind`] set and performs no
/// grid validation: bounds and collisions are the
/// [`Template`](crate::template::Template)'s responsibility. Group nesting
/// depth is unbounded.
pub fn build_field(data: &FieldData) -> Field {
    let variant = match data.kind {
        FieldKind::Text => FieldVariant::Text,
        FieldKind::Number => FieldVariant::Number,
        FieldKind::Select => FieldVariant::Select {
            resource_id: data.resource_id.clone(),
        },
        FieldKind::Multiselect => FieldVariant::Multiselect {
            resource_id: data.resource_id.clone(),
        },
        FieldKind::KeyValue => FieldVariant::KeyValue {
            key: data.key.clone(),
            value: data.value.clone(),
        },
        FieldKind::Group => FieldVariant::Group {
            fields: data.fields.iter().map(build_field).collect(),
        },
    };

    Field {
        id: data.id.clone(),
        title: data.title.clone(),
        positions: data.positions.clone(),
        variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn data(id: &str, kind: FieldKind) -> FieldData {
        FieldData {
            id: id.to_string(),
            title: format!("{id} title"),
            kind,
            positions: vec![],
            fields: vec![],
            key: None,
            value: None,
            resource_id: None,
        }
    }

    #[test]
    fn builds_a_leaf_with_its_positions() {
        let mut input = data("f1", FieldKind::Text);
        input.positions = vec![Position::new(1, 1), Position::new(1, 2)];

        let field = build_field(&input);
        assert_eq!(field.id, "f1");
        assert_eq!(field.kind(), FieldKind::Text);
        assert_eq!(field.positions, vec![Position::new(1, 1), Position::new(1, 2)]);
    }

    #[test]
    fn carries_variant_payloads() {
        let mut select = data("f1", FieldKind::Select);
        select.resource_id = Some("res-1".to_string());
        assert_eq!(
            build_field(&select).variant,
            FieldVariant::Select {
                resource_id: Some("res-1".to_string())
            }
        );

        let mut kv = data("f2", FieldKind::KeyValue);
        kv.key = Some("unit".to_string());
        kv.value = Some("kg".to_string());
        assert_eq!(
            build_field(&kv).variant,
            FieldVariant::KeyValue {
                key: Some("unit".to_string()),
                value: Some("kg".to_string()),
            }
        );
    }

    #[test]
    fn builds_group_children_recursively() {
        let mut inner = data("inner", FieldKind::Group);
        let mut leaf = data("leaf", FieldKind::Text);
        leaf.positions = vec![Position::new(4, 4)];
        inner.fields = vec![leaf];

        let mut outer = data("outer", FieldKind::Group);
        outer.fields = vec![inner];

        let field = build_field(&outer);
        assert_eq!(field.kind(), FieldKind::Group);
        assert!(field.positions.is_empty());

        let inner = &field.children()[0];
        assert_eq!(inner.id, "inner");
        let leaf = &inner.children()[0];
        assert_eq!(leaf.id, "leaf");
        assert_eq!(leaf.positions, vec![Position::new(4, 4)]);
    }

    #[test]
    fn non_group_data_ignores_children() {
        let mut input = data("f1", FieldKind::Number);
        input.fields = vec![data("stray", FieldKind::Text)];

        let field = build_field(&input);
        assert!(field.children().is_empty());
    }
}
