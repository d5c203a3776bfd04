mod directive;
mod enum_type;
mod field;
mod input_object;
mod input_value;
mod object_type;
mod types;
mod union;

use crate::{Change, NamedMap, SchemaView};
use indexmap::IndexSet;
use std::hash::Hash;

/// Compute every change between two schemas.
///
/// The changes are ordered as follows:
///
/// 1. removed types, in the order of the old schema
/// 2. added types, in the order of the new schema
/// 3. changes inside types present in both schemas, in the order of the old schema
/// 4. changes of the query, mutation and subscription root types, in that order
/// 5. removed directives (old schema order), added directives (new schema order), then changes
///    inside directives present in both schemas (old schema order)
///
/// The same inputs always produce the same output. Comparing a schema with itself produces no
/// changes.
pub fn diff<'a, Old, New>(old: &'a Old, new: &'a New) -> Vec<Change<'a>>
where
    Old: SchemaView + ?Sized,
    New: SchemaView + ?Sized,
{
    let (old_types, new_types) = (old.types(), new.types());
    let (old_directives, new_directives) = (old.directives(), new.directives());

    let removed_types = only_in(old_types, new_types).map(Change::TypeRemoved);
    let added_types = only_in(new_types, old_types).map(Change::TypeAdded);
    let common_types = in_both(old_types, new_types).flat_map(|(old_type, new_type)| types::diff(old_type, new_type));

    let removed_directives = only_in(old_directives, new_directives).map(Change::DirectiveRemoved);
    let added_directives = only_in(new_directives, old_directives).map(Change::DirectiveAdded);
    let common_directives = in_both(old_directives, new_directives)
        .flat_map(|(old_directive, new_directive)| directive::diff(old_directive, new_directive));

    let changes: Vec<_> = removed_types
        .chain(added_types)
        .chain(common_types)
        .chain(root_types(old, new))
        .chain(removed_directives)
        .chain(added_directives)
        .chain(common_directives)
        .collect();

    tracing::debug!(
        old_types = old_types.len(),
        new_types = new_types.len(),
        old_directives = old_directives.len(),
        new_directives = new_directives.len(),
        changes = changes.len(),
        "computed schema diff"
    );

    changes
}

/// Root operation types are compared by name, independently of whether the types themselves
/// changed.
fn root_types<'a, Old, New>(old: &'a Old, new: &'a New) -> impl Iterator<Item = Change<'a>>
where
    Old: SchemaView + ?Sized,
    New: SchemaView + ?Sized,
{
    let query = (old.query_type() != new.query_type()).then(|| Change::SchemaQueryTypeChanged {
        old_type: old.query_type(),
        new_type: new.query_type(),
    });

    let mutation = (old.mutation_type() != new.mutation_type()).then(|| Change::SchemaMutationTypeChanged {
        old_type: old.mutation_type(),
        new_type: new.mutation_type(),
    });

    let subscription =
        (old.subscription_type() != new.subscription_type()).then(|| Change::SchemaSubscriptionTypeChanged {
            old_type: old.subscription_type(),
            new_type: new.subscription_type(),
        });

    [query, mutation, subscription].into_iter().flatten()
}

/// The entries of `source` whose name is absent from `target`, in `source` order.
pub(crate) fn only_in<'a, T>(source: &'a NamedMap<T>, target: &'a NamedMap<T>) -> impl Iterator<Item = &'a T> {
    source
        .iter()
        .filter(move |(name, _)| !target.contains_key(name.as_str()))
        .map(|(_, value)| value)
}

/// The pairs of entries with the same name in both maps, in `old` order.
pub(crate) fn in_both<'a, T>(old: &'a NamedMap<T>, new: &'a NamedMap<T>) -> impl Iterator<Item = (&'a T, &'a T)> {
    old.iter()
        .filter_map(move |(name, old_value)| Some((old_value, new.get(name.as_str())?)))
}

/// The items of `source` absent from `target`, in `source` order.
pub(crate) fn only_in_set<'a, T>(source: &'a IndexSet<T>, target: &'a IndexSet<T>) -> impl Iterator<Item = &'a T>
where
    T: Hash + Eq,
{
    source.iter().filter(move |item| !target.contains(*item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Schema, TypeDefinition, TypeKind};
    use indoc::indoc;

    fn schema(sdl: &str) -> Schema {
        Schema::from_sdl(sdl).unwrap()
    }

    fn render(changes: &[Change<'_>]) -> String {
        changes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    const SCHEMA: &str = indoc! {r#"
        "The root"
        type Query {
          user(id: ID!): User
          search(term: String = "*"): [SearchResult!]!
        }

        type Mutation {
          rename(name: String!): User @deprecated
        }

        interface Node {
          id: ID!
        }

        type User implements Node {
          id: ID!
          name: String
          role: Role!
        }

        enum Role {
          ADMIN
          READER
        }

        union SearchResult = User

        input UserFilter {
          name: String
          limit: Int = 10
        }

        scalar DateTime

        directive @cacheControl(maxAge: Int) on FIELD_DEFINITION | OBJECT
        directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
    "#};

    #[test]
    fn reflexive() {
        let schema = schema(SCHEMA);

        assert!(diff(&schema, &schema).is_empty());
        assert!(diff(&schema, &schema.clone()).is_empty());
    }

    #[test]
    fn deterministic() {
        let old = schema(SCHEMA);
        let new = schema("type Query { user: String } directive @cacheControl on OBJECT");

        assert_eq!(diff(&old, &new), diff(&old, &new));
    }

    #[test]
    fn removed_and_added_types() {
        let old = schema("type User { id: ID } type Post { id: ID }");
        let new = schema("type User { id: ID } type Comment { id: ID }");

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            [
                Change::TypeRemoved(&old.types["Post"]),
                Change::TypeAdded(&new.types["Comment"])
            ]
        );
    }

    #[test]
    fn kind_change_suppresses_structural_diff() {
        let old = schema(r#""A user" type User { id: ID name: String }"#);
        let new = schema(r#""A user" interface User { id: ID! email: String }"#);

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            [Change::TypeKindChanged {
                old_type: &old.types["User"],
                new_type: &new.types["User"],
            }]
        );
    }

    #[test]
    fn kind_change_skips_description_comparison() {
        let old = schema(r#""A user" type User { id: ID }"#);
        let new = schema(r#""A person" interface User { id: ID }"#);

        insta::assert_snapshot!(render(&diff(&old, &new)), @"`User` kind changed from `OBJECT` to `INTERFACE`");
    }

    #[test]
    fn root_type_change_only() {
        let old = schema("schema { query: Query } type Query { a: Int } type RootQuery { a: Int }");
        let new = schema("schema { query: RootQuery } type Query { a: Int } type RootQuery { a: Int }");

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            [Change::SchemaQueryTypeChanged {
                old_type: Some("Query"),
                new_type: Some("RootQuery"),
            }]
        );
        assert_eq!(changes[0].path(), "");
    }

    #[test]
    fn root_types_are_compared_independently() {
        let old = schema("type Query { a: Int } type Mutation { a: Int }");
        let new = schema("type Query { a: Int } type Subscription { a: Int }");

        insta::assert_snapshot!(render(&diff(&old, &new)), @r"
        Type `Mutation` was removed
        Type `Subscription` was added
        Schema mutation root type `Mutation` was removed
        Schema subscription root type `Subscription` was added
        ");
    }

    #[test]
    fn added_directive() {
        let old = schema("directive @deprecated(reason: String) on FIELD_DEFINITION");
        let new = schema(
            "directive @deprecated(reason: String) on FIELD_DEFINITION directive @feature(name: String!) on OBJECT",
        );

        let changes = diff(&old, &new);

        assert_eq!(changes, [Change::DirectiveAdded(&new.directives["feature"])]);
        assert_eq!(changes[0].path(), "@feature");
    }

    #[test]
    fn description_change() {
        let old = schema(r#""A user" type User { id: ID }"#);
        let new = schema(r#""A person" type User { id: ID }"#);

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            [Change::TypeDescriptionChanged {
                old_type: &old.types["User"],
                new_type: &new.types["User"],
            }]
        );
    }

    #[test]
    fn scalars_only_compare_kind_and_description() {
        let old = schema(r#""An instant" scalar DateTime"#);
        let new = schema(r#"scalar DateTime"#);

        insta::assert_snapshot!(render(&diff(&old, &new)), @"Description of type `DateTime` changed from `An instant` to none");
    }

    #[test]
    fn phase_ordering() {
        let old = schema(indoc! {"
            type Query { a: Int }
            type Removed { a: Int }
            enum Role { A }
            directive @gone on FIELD
            directive @kept on FIELD
        "});
        let new = schema(indoc! {"
            type Added { a: Int }
            type Query { a: Int b: Int }
            enum Role { A B }
            directive @kept on FIELD | OBJECT
            directive @new on FIELD
        "});

        insta::assert_snapshot!(render(&diff(&old, &new)), @r"
        Type `Removed` was removed
        Type `Added` was added
        Field `b` was added to object type `Query`
        Enum value `B` was added to enum `Role`
        Directive `@gone` was removed
        Directive `@new` was added
        Location `OBJECT` was added to directive `@kept`
        ");
    }

    #[test]
    fn custom_schema_view() {
        struct Registry {
            types: NamedMap<TypeDefinition>,
            directives: NamedMap<crate::DirectiveDefinition>,
        }

        impl SchemaView for Registry {
            fn types(&self) -> &NamedMap<TypeDefinition> {
                &self.types
            }

            fn directives(&self) -> &NamedMap<crate::DirectiveDefinition> {
                &self.directives
            }

            fn query_type(&self) -> Option<&str> {
                Some("Query")
            }

            fn mutation_type(&self) -> Option<&str> {
                None
            }

            fn subscription_type(&self) -> Option<&str> {
                None
            }
        }

        let registry = Registry {
            types: [("Query".to_owned(), TypeDefinition::new("Query", TypeKind::Object))]
                .into_iter()
                .collect(),
            directives: NamedMap::new(),
        };

        let mut sdl = schema("type Query { a: Int }");
        assert_eq!(render(&diff(&registry, &sdl)), "Field `a` was added to object type `Query`");

        sdl.query_type = None;
        insta::assert_snapshot!(render(&diff(&sdl, &registry)), @r"
        Field `a` was removed from object type `Query`
        Schema query root type `Query` was added
        ");
    }
}
