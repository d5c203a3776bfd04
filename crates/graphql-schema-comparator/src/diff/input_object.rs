use super::{
    in_both,
    input_value::{self, InputValueChange},
    only_in,
};
use crate::{Change, TypeDefinition};

pub(super) fn diff<'a>(old_type: &'a TypeDefinition, new_type: &'a TypeDefinition) -> Vec<Change<'a>> {
    let removed = only_in(&old_type.input_fields, &new_type.input_fields).map(|field| Change::InputFieldRemoved {
        input_type: old_type,
        field,
    });

    let added = only_in(&new_type.input_fields, &old_type.input_fields).map(|field| Change::InputFieldAdded {
        input_type: new_type,
        field,
    });

    let changed = in_both(&old_type.input_fields, &new_type.input_fields).flat_map(|(old_field, new_field)| {
        input_value::diff(old_field, new_field).map(move |change| match change {
            InputValueChange::Description => Change::InputFieldDescriptionChanged {
                input_type: new_type,
                old_field,
                new_field,
            },
            InputValueChange::DefaultValue => Change::InputFieldDefaultChanged {
                input_type: new_type,
                old_field,
                new_field,
            },
            InputValueChange::Type => Change::InputFieldTypeChanged {
                input_type: new_type,
                old_field,
                new_field,
            },
        })
    });

    removed.chain(added).chain(changed).collect()
}
