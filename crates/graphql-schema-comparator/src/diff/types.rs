use super::{enum_type, input_object, object_type, union};
use crate::{Change, TypeDefinition, TypeKind};

type Strategy = for<'a> fn(&'a TypeDefinition, &'a TypeDefinition) -> Vec<Change<'a>>;

/// The structural comparison for each kind. Scalars have no structure beyond their name, kind and
/// description.
fn strategy_for(kind: TypeKind) -> Option<Strategy> {
    match kind {
        TypeKind::Scalar => None,
        TypeKind::Object | TypeKind::Interface => Some(object_type::diff as Strategy),
        TypeKind::Union => Some(union::diff as Strategy),
        TypeKind::Enum => Some(enum_type::diff as Strategy),
        TypeKind::InputObject => Some(input_object::diff as Strategy),
    }
}

/// Compare two definitions of the type with the same name.
pub(super) fn diff<'a>(old_type: &'a TypeDefinition, new_type: &'a TypeDefinition) -> Vec<Change<'a>> {
    debug_assert_eq!(old_type.name, new_type.name);

    if old_type.kind != new_type.kind {
        return vec![Change::TypeKindChanged { old_type, new_type }];
    }

    let mut changes = strategy_for(old_type.kind)
        .map(|strategy| strategy(old_type, new_type))
        .unwrap_or_default();

    if old_type.description != new_type.description {
        changes.push(Change::TypeDescriptionChanged { old_type, new_type });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDefinition, TypeRef};

    #[test]
    fn description_comes_after_structural_changes() {
        let old_type = TypeDefinition::new("User", TypeKind::Object);
        let new_type = TypeDefinition::new("User", TypeKind::Object)
            .with_description("A user")
            .with_field(FieldDefinition::new("id", TypeRef::named("ID")));

        assert_eq!(
            diff(&old_type, &new_type),
            [
                Change::FieldAdded {
                    parent_type: &new_type,
                    field: &new_type.fields["id"],
                },
                Change::TypeDescriptionChanged {
                    old_type: &old_type,
                    new_type: &new_type,
                },
            ]
        );
    }

    #[test]
    fn interfaces_share_the_object_strategy() {
        let old_type = TypeDefinition::new("Node", TypeKind::Interface);
        let new_type = TypeDefinition::new("Node", TypeKind::Interface).with_interface("Entity");

        assert_eq!(
            diff(&old_type, &new_type),
            [Change::InterfaceImplementationAdded {
                parent_type: &new_type,
                interface: "Entity",
            }]
        );
    }

    #[test]
    fn identical_scalars() {
        let scalar = TypeDefinition::new("JSON", TypeKind::Scalar).with_description("Any JSON");

        assert!(diff(&scalar, &scalar.clone()).is_empty());
    }
}
