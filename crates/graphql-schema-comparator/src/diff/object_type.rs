use super::{field, in_both, only_in, only_in_set};
use crate::{Change, TypeDefinition};

/// Objects and interfaces: implemented interfaces, then fields.
pub(super) fn diff<'a>(old_type: &'a TypeDefinition, new_type: &'a TypeDefinition) -> Vec<Change<'a>> {
    let removed_interfaces =
        only_in_set(&old_type.interfaces, &new_type.interfaces).map(|interface| Change::InterfaceImplementationRemoved {
            parent_type: old_type,
            interface,
        });

    let added_interfaces =
        only_in_set(&new_type.interfaces, &old_type.interfaces).map(|interface| Change::InterfaceImplementationAdded {
            parent_type: new_type,
            interface,
        });

    let removed_fields = only_in(&old_type.fields, &new_type.fields).map(|field| Change::FieldRemoved {
        parent_type: old_type,
        field,
    });

    let added_fields = only_in(&new_type.fields, &old_type.fields).map(|field| Change::FieldAdded {
        parent_type: new_type,
        field,
    });

    let changed_fields =
        in_both(&old_type.fields, &new_type.fields).flat_map(|(old_field, new_field)| field::diff(new_type, old_field, new_field));

    removed_interfaces
        .chain(added_interfaces)
        .chain(removed_fields)
        .chain(added_fields)
        .chain(changed_fields)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{diff, Schema};
    use indoc::indoc;

    fn render(old: &str, new: &str) -> String {
        let old = Schema::from_sdl(old).unwrap();
        let new = Schema::from_sdl(new).unwrap();

        diff(&old, &new)
            .iter()
            .map(|change| format!("{}: {change}", change.path()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn interfaces_and_fields() {
        let old = indoc! {"
            interface Node { id: ID! }
            interface Named { name: String }
            type User implements Node & Named {
              id: ID!
              name: String
              age: Int
            }
        "};
        let new = indoc! {"
            interface Node { id: ID! }
            interface Named { name: String }
            interface Timestamped { createdAt: String }
            type User implements Node & Timestamped {
              email: String
              id: ID!
              name: String
              createdAt: String
            }
        "};

        insta::assert_snapshot!(render(old, new), @r"
        Timestamped: Type `Timestamped` was added
        User.&Named: `User` no longer implements interface `Named`
        User.&Timestamped: `User` now implements interface `Timestamped`
        User.age: Field `age` was removed from object type `User`
        User.email: Field `email` was added to object type `User`
        User.createdAt: Field `createdAt` was added to object type `User`
        ");
    }

    #[test]
    fn interface_fields() {
        let old = "interface Node { id: ID! legacyId: Int }";
        let new = "interface Node implements Entity { id: ID } interface Entity { id: ID }";

        insta::assert_snapshot!(render(old, new), @r"
        Entity: Type `Entity` was added
        Node.&Entity: `Node` now implements interface `Entity`
        Node.legacyId: Field `legacyId` was removed from interface type `Node`
        Node.id: Type of field `Node.id` changed from `ID!` to `ID`
        ");
    }
}
