use super::only_in_set;
use crate::{Change, TypeDefinition};

pub(super) fn diff<'a>(old_type: &'a TypeDefinition, new_type: &'a TypeDefinition) -> Vec<Change<'a>> {
    let removed = only_in_set(&old_type.members, &new_type.members).map(|member| Change::UnionMemberRemoved {
        union_type: old_type,
        member,
    });

    let added = only_in_set(&new_type.members, &old_type.members).map(|member| Change::UnionMemberAdded {
        union_type: new_type,
        member,
    });

    removed.chain(added).collect()
}
