use super::*;
use crate::Error;
use async_graphql_parser::{types as ast, Positioned};
use async_graphql_value::ConstValue;
use std::{collections::HashSet, str::FromStr};

impl Schema {
    /// Load a schema from GraphQL SDL. Type extensions are merged into the type they extend. In
    /// the absence of a schema definition, the root types are the types named `Query`,
    /// `Mutation` and `Subscription`, if they exist, unless a schema extension names another
    /// type for that operation.
    pub fn from_sdl(sdl: &str) -> Result<Schema, Error> {
        let document = async_graphql_parser::parse_schema(sdl)?;
        let repeatable_directives = repeatable_directives(sdl)?;
        let mut schema = Schema::default();

        ingest_definitions(&document, &repeatable_directives, &mut schema)?;
        ingest_type_extensions(&document, &mut schema)?;
        ingest_root_types(&document, &mut schema);

        tracing::debug!(
            types = schema.types.len(),
            directives = schema.directives.len(),
            "loaded schema from SDL"
        );

        Ok(schema)
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(sdl: &str) -> Result<Self, Self::Err> {
        Schema::from_sdl(sdl)
    }
}

// async-graphql-parser reports every directive definition as repeatable.
fn repeatable_directives(sdl: &str) -> Result<HashSet<String>, Error> {
    let document = cynic_parser::parse_type_system_document(sdl).map_err(|err| Error::Syntax(err.to_string()))?;

    let repeatable = document
        .definitions()
        .filter_map(|definition| match definition {
            cynic_parser::type_system::Definition::Directive(directive) if directive.is_repeatable() => {
                Some(directive.name().to_owned())
            }
            _ => None,
        })
        .collect();

    Ok(repeatable)
}

fn ingest_definitions(
    document: &ast::ServiceDocument,
    repeatable_directives: &HashSet<String>,
    schema: &mut Schema,
) -> Result<(), Error> {
    for definition in &document.definitions {
        match definition {
            ast::TypeSystemDefinition::Type(ty) if !ty.node.extend => {
                let name = ty.node.name.node.as_str();

                if schema.types.contains_key(name) {
                    return Err(Error::DuplicateType(name.to_owned()));
                }

                schema.insert_type(type_definition(&ty.node));
            }
            ast::TypeSystemDefinition::Directive(directive) => {
                let name = directive.node.name.node.as_str();

                if schema.directives.contains_key(name) {
                    return Err(Error::DuplicateDirective(name.to_owned()));
                }

                let repeatable = repeatable_directives.contains(name);
                schema.insert_directive(directive_definition(&directive.node, repeatable));
            }
            ast::TypeSystemDefinition::Type(_) | ast::TypeSystemDefinition::Schema(_) => (),
        }
    }

    Ok(())
}

// Extensions may come before the definition they extend in the document, so they are merged in
// a second pass.
fn ingest_type_extensions(document: &ast::ServiceDocument, schema: &mut Schema) -> Result<(), Error> {
    let extensions = document.definitions.iter().filter_map(|definition| match definition {
        ast::TypeSystemDefinition::Type(ty) if ty.node.extend => Some(&ty.node),
        _ => None,
    });

    for extension in extensions {
        let extension = type_definition(extension);

        let Some(extended) = schema.types.get_mut(&extension.name) else {
            return Err(Error::UnknownExtendedType(extension.name));
        };

        if extended.kind != extension.kind {
            return Err(Error::ExtensionKindMismatch {
                name: extension.name,
                kind: extended.kind,
                extension_kind: extension.kind,
            });
        }

        let TypeDefinition {
            interfaces,
            fields,
            members,
            values,
            input_fields,
            ..
        } = extension;

        extended.interfaces.extend(interfaces);
        extended.fields.extend(fields);
        extended.members.extend(members);
        extended.values.extend(values);
        extended.input_fields.extend(input_fields);
    }

    Ok(())
}

// A `schema` definition lists every root type. Schema extensions only override the conventional
// names for the operations they declare.
fn ingest_root_types(document: &ast::ServiceDocument, schema: &mut Schema) {
    let schema_definitions = document.definitions.iter().filter_map(|definition| match definition {
        ast::TypeSystemDefinition::Schema(schema_definition) => Some(&schema_definition.node),
        _ => None,
    });

    let mut has_schema_definition = false;

    for schema_definition in schema_definitions {
        has_schema_definition |= !schema_definition.extend;

        for (root, slot) in [
            (&schema_definition.query, &mut schema.query_type),
            (&schema_definition.mutation, &mut schema.mutation_type),
            (&schema_definition.subscription, &mut schema.subscription_type),
        ] {
            if let Some(root) = root {
                *slot = Some(root.node.to_string());
            }
        }
    }

    if has_schema_definition {
        return;
    }

    for (name, slot) in [
        ("Query", &mut schema.query_type),
        ("Mutation", &mut schema.mutation_type),
        ("Subscription", &mut schema.subscription_type),
    ] {
        if slot.is_none() && schema.types.contains_key(name) {
            *slot = Some(name.to_owned());
        }
    }
}

fn type_definition(definition: &ast::TypeDefinition) -> TypeDefinition {
    let kind = match &definition.kind {
        ast::TypeKind::Scalar => TypeKind::Scalar,
        ast::TypeKind::Object(_) => TypeKind::Object,
        ast::TypeKind::Interface(_) => TypeKind::Interface,
        ast::TypeKind::Union(_) => TypeKind::Union,
        ast::TypeKind::Enum(_) => TypeKind::Enum,
        ast::TypeKind::InputObject(_) => TypeKind::InputObject,
    };

    let mut ty = TypeDefinition::new(definition.name.node.as_str(), kind);
    ty.description = description(definition.description.as_ref());

    match &definition.kind {
        ast::TypeKind::Scalar => (),
        ast::TypeKind::Object(ast::ObjectType { implements, fields, .. })
        | ast::TypeKind::Interface(ast::InterfaceType { implements, fields, .. }) => {
            ty.interfaces
                .extend(implements.iter().map(|interface| interface.node.to_string()));
            ty.fields.extend(fields.iter().map(|field| {
                let field = field_definition(&field.node);
                (field.name.clone(), field)
            }));
        }
        ast::TypeKind::Union(union) => {
            ty.members
                .extend(union.members.iter().map(|member| member.node.to_string()));
        }
        ast::TypeKind::Enum(enum_type) => {
            ty.values.extend(enum_type.values.iter().map(|value| {
                let value = &value.node;
                let name = value.value.node.to_string();
                let definition = EnumValueDefinition {
                    name: name.clone(),
                    description: description(value.description.as_ref()),
                    deprecation_reason: deprecation_reason(&value.directives),
                };

                (name, definition)
            }));
        }
        ast::TypeKind::InputObject(input_object) => {
            ty.input_fields = input_values(&input_object.fields);
        }
    }

    ty
}

fn field_definition(field: &ast::FieldDefinition) -> FieldDefinition {
    FieldDefinition {
        name: field.name.node.to_string(),
        description: description(field.description.as_ref()),
        ty: TypeRef::from(&field.ty.node),
        arguments: input_values(&field.arguments),
        deprecation_reason: deprecation_reason(&field.directives),
    }
}

fn directive_definition(directive: &ast::DirectiveDefinition, repeatable: bool) -> DirectiveDefinition {
    DirectiveDefinition {
        name: directive.name.node.to_string(),
        description: description(directive.description.as_ref()),
        locations: directive
            .locations
            .iter()
            .map(|location| DirectiveLocation::from(location.node))
            .collect(),
        arguments: input_values(&directive.arguments),
        repeatable,
    }
}

fn input_values(values: &[Positioned<ast::InputValueDefinition>]) -> NamedMap<InputValueDefinition> {
    values
        .iter()
        .map(|value| {
            let value = &value.node;
            let definition = InputValueDefinition {
                name: value.name.node.to_string(),
                description: description(value.description.as_ref()),
                ty: TypeRef::from(&value.ty.node),
                default_value: value
                    .default_value
                    .as_ref()
                    .map(|default| sorted_objects(default.node.clone()).to_string()),
            };

            (definition.name.clone(), definition)
        })
        .collect()
}

// Input object fields are unordered, so `{a: 1, b: 2}` and `{b: 2, a: 1}` render the same.
fn sorted_objects(value: ConstValue) -> ConstValue {
    match value {
        ConstValue::List(values) => ConstValue::List(values.into_iter().map(sorted_objects).collect()),
        ConstValue::Object(mut fields) => {
            fields.sort_keys();

            ConstValue::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, sorted_objects(value)))
                    .collect(),
            )
        }
        value => value,
    }
}

fn description(description: Option<&Positioned<String>>) -> Option<String> {
    description.map(|description| description.node.clone())
}

fn deprecation_reason(directives: &[Positioned<ast::ConstDirective>]) -> Option<String> {
    let deprecated = directives
        .iter()
        .find(|directive| directive.node.name.node == "deprecated")?;

    let reason = match deprecated.node.get_argument("reason").map(|reason| &reason.node) {
        Some(ConstValue::String(reason)) => reason.clone(),
        _ => DEFAULT_DEPRECATION_REASON.to_owned(),
    };

    Some(reason)
}
