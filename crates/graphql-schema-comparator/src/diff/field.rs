use super::{
    in_both,
    input_value::{self, InputValueChange},
    only_in,
};
use crate::{Change, FieldDefinition, TypeDefinition};

/// Compare a field of an object or interface type present in both schemas.
pub(super) fn diff<'a>(
    parent_type: &'a TypeDefinition,
    old_field: &'a FieldDefinition,
    new_field: &'a FieldDefinition,
) -> Vec<Change<'a>> {
    let description = (old_field.description != new_field.description).then_some(Change::FieldDescriptionChanged {
        parent_type,
        old_field,
        new_field,
    });

    let deprecation =
        (old_field.deprecation_reason != new_field.deprecation_reason).then_some(Change::FieldDeprecationChanged {
            parent_type,
            old_field,
            new_field,
        });

    let ty = (old_field.ty != new_field.ty).then_some(Change::FieldTypeChanged {
        parent_type,
        old_field,
        new_field,
    });

    let removed_arguments =
        only_in(&old_field.arguments, &new_field.arguments).map(|argument| Change::FieldArgumentRemoved {
            parent_type,
            field: old_field,
            argument,
        });

    let added_arguments = only_in(&new_field.arguments, &old_field.arguments).map(|argument| Change::FieldArgumentAdded {
        parent_type,
        field: new_field,
        argument,
    });

    let changed_arguments =
        in_both(&old_field.arguments, &new_field.arguments).flat_map(|(old_argument, new_argument)| {
            input_value::diff(old_argument, new_argument).map(move |change| match change {
                InputValueChange::Description => Change::FieldArgumentDescriptionChanged {
                    parent_type,
                    field: new_field,
                    old_argument,
                    new_argument,
                },
                InputValueChange::DefaultValue => Change::FieldArgumentDefaultChanged {
                    parent_type,
                    field: new_field,
                    old_argument,
                    new_argument,
                },
                InputValueChange::Type => Change::FieldArgumentTypeChanged {
                    parent_type,
                    field: new_field,
                    old_argument,
                    new_argument,
                },
            })
        });

    description
        .into_iter()
        .chain(deprecation)
        .chain(ty)
        .chain(removed_arguments)
        .chain(added_arguments)
        .chain(changed_arguments)
        .collect()
}
