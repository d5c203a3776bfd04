use super::{
    in_both,
    input_value::{self, InputValueChange},
    only_in, only_in_set,
};
use crate::{Change, DirectiveDefinition};

/// Compare a directive definition present in both schemas. Identical directives produce no
/// changes.
pub(super) fn diff<'a>(old_directive: &'a DirectiveDefinition, new_directive: &'a DirectiveDefinition) -> Vec<Change<'a>> {
    let description =
        (old_directive.description != new_directive.description).then_some(Change::DirectiveDescriptionChanged {
            old_directive,
            new_directive,
        });

    let repeatable =
        (old_directive.repeatable != new_directive.repeatable).then_some(Change::DirectiveRepeatableChanged {
            old_directive,
            new_directive,
        });

    let removed_locations =
        only_in_set(&old_directive.locations, &new_directive.locations).map(|location| Change::DirectiveLocationRemoved {
            directive: old_directive,
            location: *location,
        });

    let added_locations =
        only_in_set(&new_directive.locations, &old_directive.locations).map(|location| Change::DirectiveLocationAdded {
            directive: new_directive,
            location: *location,
        });

    let removed_arguments = only_in(&old_directive.arguments, &new_directive.arguments).map(|argument| {
        Change::DirectiveArgumentRemoved {
            directive: old_directive,
            argument,
        }
    });

    let added_arguments = only_in(&new_directive.arguments, &old_directive.arguments).map(|argument| {
        Change::DirectiveArgumentAdded {
            directive: new_directive,
            argument,
        }
    });

    let changed_arguments =
        in_both(&old_directive.arguments, &new_directive.arguments).flat_map(|(old_argument, new_argument)| {
            input_value::diff(old_argument, new_argument).map(move |change| match change {
                InputValueChange::Description => Change::DirectiveArgumentDescriptionChanged {
                    directive: new_directive,
                    old_argument,
                    new_argument,
                },
                InputValueChange::DefaultValue => Change::DirectiveArgumentDefaultChanged {
                    directive: new_directive,
                    old_argument,
                    new_argument,
                },
                InputValueChange::Type => Change::DirectiveArgumentTypeChanged {
                    directive: new_directive,
                    old_argument,
                    new_argument,
                },
            })
        });

    description
        .into_iter()
        .chain(repeatable)
        .chain(removed_locations)
        .chain(added_locations)
        .chain(removed_arguments)
        .chain(added_arguments)
        .chain(changed_arguments)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectiveLocation, InputValueDefinition, Schema, TypeRef};
    use indoc::indoc;

    #[test]
    fn identical_directives() {
        let directive = DirectiveDefinition::new("auth")
            .with_location(DirectiveLocation::FieldDefinition)
            .with_argument(InputValueDefinition::new("requires", TypeRef::named("Role")).with_default_value("ADMIN"));

        assert!(diff(&directive, &directive.clone()).is_empty());
    }

    #[test]
    fn every_property() {
        let old = Schema::from_sdl(indoc! {r#"
            "Restrict access"
            directive @auth(
              "Required role"
              requires: Role = ADMIN
              scopes: [String!]
              legacy: Boolean
            ) on OBJECT | FIELD_DEFINITION | INTERFACE
        "#})
        .unwrap();
        let new = Schema::from_sdl(indoc! {r#"
            directive @auth(
              "The role required"
              requires: Role = USER
              scopes: [String]
              tenant: ID!
            ) repeatable on FIELD_DEFINITION | OBJECT | ENUM_VALUE
        "#})
        .unwrap();

        let rendered = crate::diff(&old, &new)
            .iter()
            .map(|change| format!("{} {}: {change}", change.criticality(), change.path()))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(rendered, @r"
        non-breaking @auth: Description of directive `@auth` changed from `Restrict access` to none
        non-breaking @auth: Directive `@auth` became repeatable
        breaking @auth: Location `INTERFACE` was removed from directive `@auth`
        non-breaking @auth: Location `ENUM_VALUE` was added to directive `@auth`
        breaking @auth.legacy: Argument `legacy: Boolean` was removed from directive `@auth`
        breaking @auth.tenant: Argument `tenant: ID!` was added to directive `@auth`
        non-breaking @auth.requires: Description of argument `requires` on directive `@auth` changed from `Required role` to `The role required`
        dangerous @auth.requires: Default value of argument `requires` on directive `@auth` changed from `ADMIN` to `USER`
        non-breaking @auth.scopes: Type of argument `scopes` on directive `@auth` changed from `[String!]` to `[String]`
        ");
    }
}
