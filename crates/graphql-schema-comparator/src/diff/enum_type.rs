use super::{in_both, only_in};
use crate::{Change, TypeDefinition};

pub(super) fn diff<'a>(old_type: &'a TypeDefinition, new_type: &'a TypeDefinition) -> Vec<Change<'a>> {
    let removed = only_in(&old_type.values, &new_type.values).map(|value| Change::EnumValueRemoved {
        enum_type: old_type,
        value,
    });

    let added = only_in(&new_type.values, &old_type.values).map(|value| Change::EnumValueAdded {
        enum_type: new_type,
        value,
    });

    let changed = in_both(&old_type.values, &new_type.values).flat_map(|(old_value, new_value)| {
        let description =
            (old_value.description != new_value.description).then_some(Change::EnumValueDescriptionChanged {
                enum_type: new_type,
                old_value,
                new_value,
            });

        let deprecation =
            (old_value.deprecation_reason != new_value.deprecation_reason).then_some(Change::EnumValueDeprecationChanged {
                enum_type: new_type,
                old_value,
                new_value,
            });

        description.into_iter().chain(deprecation)
    });

    removed.chain(added).chain(changed).collect()
}
