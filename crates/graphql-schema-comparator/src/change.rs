use crate::{DirectiveDefinition, DirectiveLocation, EnumValueDefinition, FieldDefinition, InputValueDefinition, TypeDefinition};
use std::fmt;

/// One difference between two schemas. Changes have a direction: from the old schema to the new
/// schema. For example [Change::FieldAdded] means the field does not exist in the old schema but
/// does exist in the new one.
///
/// Changes borrow the definitions they describe from the two schemas being compared. Where a
/// change is about a definition present in both schemas, it carries both sides: `old_*` from the
/// old schema, `new_*` from the new one. Parent definitions (`parent_type`, `enum_type`, `field`,
/// `directive`...) are taken from the new schema, except for removals, where they come from the
/// old schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<'a> {
    TypeRemoved(&'a TypeDefinition),
    TypeAdded(&'a TypeDefinition),
    TypeKindChanged {
        old_type: &'a TypeDefinition,
        new_type: &'a TypeDefinition,
    },
    TypeDescriptionChanged {
        old_type: &'a TypeDefinition,
        new_type: &'a TypeDefinition,
    },

    /// The query root type changed. `None` means there is no query root.
    SchemaQueryTypeChanged {
        old_type: Option<&'a str>,
        new_type: Option<&'a str>,
    },
    /// The mutation root type changed. `None` means there is no mutation root.
    SchemaMutationTypeChanged {
        old_type: Option<&'a str>,
        new_type: Option<&'a str>,
    },
    /// The subscription root type changed. `None` means there is no subscription root.
    SchemaSubscriptionTypeChanged {
        old_type: Option<&'a str>,
        new_type: Option<&'a str>,
    },

    DirectiveRemoved(&'a DirectiveDefinition),
    DirectiveAdded(&'a DirectiveDefinition),
    DirectiveDescriptionChanged {
        old_directive: &'a DirectiveDefinition,
        new_directive: &'a DirectiveDefinition,
    },
    DirectiveRepeatableChanged {
        old_directive: &'a DirectiveDefinition,
        new_directive: &'a DirectiveDefinition,
    },
    DirectiveLocationRemoved {
        directive: &'a DirectiveDefinition,
        location: DirectiveLocation,
    },
    DirectiveLocationAdded {
        directive: &'a DirectiveDefinition,
        location: DirectiveLocation,
    },
    DirectiveArgumentRemoved {
        directive: &'a DirectiveDefinition,
        argument: &'a InputValueDefinition,
    },
    DirectiveArgumentAdded {
        directive: &'a DirectiveDefinition,
        argument: &'a InputValueDefinition,
    },
    DirectiveArgumentDescriptionChanged {
        directive: &'a DirectiveDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },
    DirectiveArgumentDefaultChanged {
        directive: &'a DirectiveDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },
    DirectiveArgumentTypeChanged {
        directive: &'a DirectiveDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },

    EnumValueRemoved {
        enum_type: &'a TypeDefinition,
        value: &'a EnumValueDefinition,
    },
    EnumValueAdded {
        enum_type: &'a TypeDefinition,
        value: &'a EnumValueDefinition,
    },
    EnumValueDescriptionChanged {
        enum_type: &'a TypeDefinition,
        old_value: &'a EnumValueDefinition,
        new_value: &'a EnumValueDefinition,
    },
    EnumValueDeprecationChanged {
        enum_type: &'a TypeDefinition,
        old_value: &'a EnumValueDefinition,
        new_value: &'a EnumValueDefinition,
    },

    UnionMemberRemoved {
        union_type: &'a TypeDefinition,
        member: &'a str,
    },
    UnionMemberAdded {
        union_type: &'a TypeDefinition,
        member: &'a str,
    },

    InputFieldRemoved {
        input_type: &'a TypeDefinition,
        field: &'a InputValueDefinition,
    },
    InputFieldAdded {
        input_type: &'a TypeDefinition,
        field: &'a InputValueDefinition,
    },
    InputFieldDescriptionChanged {
        input_type: &'a TypeDefinition,
        old_field: &'a InputValueDefinition,
        new_field: &'a InputValueDefinition,
    },
    InputFieldDefaultChanged {
        input_type: &'a TypeDefinition,
        old_field: &'a InputValueDefinition,
        new_field: &'a InputValueDefinition,
    },
    InputFieldTypeChanged {
        input_type: &'a TypeDefinition,
        old_field: &'a InputValueDefinition,
        new_field: &'a InputValueDefinition,
    },

    /// An object or interface type stopped implementing an interface.
    InterfaceImplementationRemoved {
        parent_type: &'a TypeDefinition,
        interface: &'a str,
    },
    /// An object or interface type started implementing an interface.
    InterfaceImplementationAdded {
        parent_type: &'a TypeDefinition,
        interface: &'a str,
    },

    FieldRemoved {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
    },
    FieldAdded {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
    },
    FieldDescriptionChanged {
        parent_type: &'a TypeDefinition,
        old_field: &'a FieldDefinition,
        new_field: &'a FieldDefinition,
    },
    FieldDeprecationChanged {
        parent_type: &'a TypeDefinition,
        old_field: &'a FieldDefinition,
        new_field: &'a FieldDefinition,
    },
    FieldTypeChanged {
        parent_type: &'a TypeDefinition,
        old_field: &'a FieldDefinition,
        new_field: &'a FieldDefinition,
    },
    FieldArgumentRemoved {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
        argument: &'a InputValueDefinition,
    },
    FieldArgumentAdded {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
        argument: &'a InputValueDefinition,
    },
    FieldArgumentDescriptionChanged {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },
    FieldArgumentDefaultChanged {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },
    FieldArgumentTypeChanged {
        parent_type: &'a TypeDefinition,
        field: &'a FieldDefinition,
        old_argument: &'a InputValueDefinition,
        new_argument: &'a InputValueDefinition,
    },
}

impl Change<'_> {
    /// Where the change happened in the schema, dot separated. For example, a change on a field
    /// argument has a path like `ParentTypeName.fieldName.argumentName`, and a change on a
    /// directive argument `@directiveName.argumentName`. Changes to the schema definition itself
    /// have an empty path.
    pub fn path(&self) -> String {
        use Change::*;

        match self {
            TypeRemoved(ty) | TypeAdded(ty) => ty.name.clone(),
            TypeKindChanged { new_type, .. } | TypeDescriptionChanged { new_type, .. } => new_type.name.clone(),

            SchemaQueryTypeChanged { .. } | SchemaMutationTypeChanged { .. } | SchemaSubscriptionTypeChanged { .. } => {
                String::new()
            }

            DirectiveRemoved(directive) | DirectiveAdded(directive) => format!("@{}", directive.name),
            DirectiveDescriptionChanged { new_directive, .. } | DirectiveRepeatableChanged { new_directive, .. } => {
                format!("@{}", new_directive.name)
            }
            DirectiveLocationRemoved { directive, .. } | DirectiveLocationAdded { directive, .. } => {
                format!("@{}", directive.name)
            }
            DirectiveArgumentRemoved { directive, argument } | DirectiveArgumentAdded { directive, argument } => {
                format!("@{}.{}", directive.name, argument.name)
            }
            DirectiveArgumentDescriptionChanged {
                directive, new_argument, ..
            }
            | DirectiveArgumentDefaultChanged {
                directive, new_argument, ..
            }
            | DirectiveArgumentTypeChanged {
                directive, new_argument, ..
            } => format!("@{}.{}", directive.name, new_argument.name),

            EnumValueRemoved { enum_type, value } | EnumValueAdded { enum_type, value } => {
                format!("{}.{}", enum_type.name, value.name)
            }
            EnumValueDescriptionChanged {
                enum_type, new_value, ..
            }
            | EnumValueDeprecationChanged {
                enum_type, new_value, ..
            } => format!("{}.{}", enum_type.name, new_value.name),

            UnionMemberRemoved { union_type, member } | UnionMemberAdded { union_type, member } => {
                format!("{}.{}", union_type.name, member)
            }

            InputFieldRemoved { input_type, field } | InputFieldAdded { input_type, field } => {
                format!("{}.{}", input_type.name, field.name)
            }
            InputFieldDescriptionChanged {
                input_type, new_field, ..
            }
            | InputFieldDefaultChanged {
                input_type, new_field, ..
            }
            | InputFieldTypeChanged {
                input_type, new_field, ..
            } => format!("{}.{}", input_type.name, new_field.name),

            InterfaceImplementationRemoved { parent_type, interface }
            | InterfaceImplementationAdded { parent_type, interface } => format!("{}.&{}", parent_type.name, interface),

            FieldRemoved { parent_type, field } | FieldAdded { parent_type, field } => {
                format!("{}.{}", parent_type.name, field.name)
            }
            FieldDescriptionChanged {
                parent_type, new_field, ..
            }
            | FieldDeprecationChanged {
                parent_type, new_field, ..
            }
            | FieldTypeChanged {
                parent_type, new_field, ..
            } => format!("{}.{}", parent_type.name, new_field.name),

            FieldArgumentRemoved {
                parent_type,
                field,
                argument,
            }
            | FieldArgumentAdded {
                parent_type,
                field,
                argument,
            } => format!("{}.{}.{}", parent_type.name, field.name, argument.name),
            FieldArgumentDescriptionChanged {
                parent_type,
                field,
                new_argument,
                ..
            }
            | FieldArgumentDefaultChanged {
                parent_type,
                field,
                new_argument,
                ..
            }
            | FieldArgumentTypeChanged {
                parent_type,
                field,
                new_argument,
                ..
            } => format!("{}.{}.{}", parent_type.name, field.name, new_argument.name),
        }
    }
}

impl fmt::Display for Change<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Change::*;

        match self {
            TypeRemoved(ty) => write!(f, "Type `{}` was removed", ty.name),
            TypeAdded(ty) => write!(f, "Type `{}` was added", ty.name),
            TypeKindChanged { old_type, new_type } => write!(
                f,
                "`{}` kind changed from `{}` to `{}`",
                new_type.name, old_type.kind, new_type.kind
            ),
            TypeDescriptionChanged { old_type, new_type } => write!(
                f,
                "Description of type `{}` changed from {} to {}",
                new_type.name,
                Optional(old_type.description.as_deref()),
                Optional(new_type.description.as_deref())
            ),

            SchemaQueryTypeChanged { old_type, new_type } => root_type_changed(f, "query", *old_type, *new_type),
            SchemaMutationTypeChanged { old_type, new_type } => {
                root_type_changed(f, "mutation", *old_type, *new_type)
            }
            SchemaSubscriptionTypeChanged { old_type, new_type } => {
                root_type_changed(f, "subscription", *old_type, *new_type)
            }

            DirectiveRemoved(directive) => write!(f, "Directive `@{}` was removed", directive.name),
            DirectiveAdded(directive) => write!(f, "Directive `@{}` was added", directive.name),
            DirectiveDescriptionChanged {
                old_directive,
                new_directive,
            } => write!(
                f,
                "Description of directive `@{}` changed from {} to {}",
                new_directive.name,
                Optional(old_directive.description.as_deref()),
                Optional(new_directive.description.as_deref())
            ),
            DirectiveRepeatableChanged { new_directive, .. } if new_directive.repeatable => {
                write!(f, "Directive `@{}` became repeatable", new_directive.name)
            }
            DirectiveRepeatableChanged { new_directive, .. } => {
                write!(f, "Directive `@{}` is no longer repeatable", new_directive.name)
            }
            DirectiveLocationRemoved { directive, location } => write!(
                f,
                "Location `{location}` was removed from directive `@{}`",
                directive.name
            ),
            DirectiveLocationAdded { directive, location } => {
                write!(f, "Location `{location}` was added to directive `@{}`", directive.name)
            }
            DirectiveArgumentRemoved { directive, argument } => write!(
                f,
                "Argument `{}: {}` was removed from directive `@{}`",
                argument.name, argument.ty, directive.name
            ),
            DirectiveArgumentAdded { directive, argument } => write!(
                f,
                "Argument `{}: {}` was added to directive `@{}`",
                argument.name, argument.ty, directive.name
            ),
            DirectiveArgumentDescriptionChanged {
                directive,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Description of argument `{}` on directive `@{}` changed from {} to {}",
                new_argument.name,
                directive.name,
                Optional(old_argument.description.as_deref()),
                Optional(new_argument.description.as_deref())
            ),
            DirectiveArgumentDefaultChanged {
                directive,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Default value of argument `{}` on directive `@{}` changed from {} to {}",
                new_argument.name,
                directive.name,
                Optional(old_argument.default_value.as_deref()),
                Optional(new_argument.default_value.as_deref())
            ),
            DirectiveArgumentTypeChanged {
                directive,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Type of argument `{}` on directive `@{}` changed from `{}` to `{}`",
                new_argument.name, directive.name, old_argument.ty, new_argument.ty
            ),

            EnumValueRemoved { enum_type, value } => write!(
                f,
                "Enum value `{}` was removed from enum `{}`",
                value.name, enum_type.name
            ),
            EnumValueAdded { enum_type, value } => {
                write!(f, "Enum value `{}` was added to enum `{}`", value.name, enum_type.name)
            }
            EnumValueDescriptionChanged {
                enum_type,
                old_value,
                new_value,
            } => write!(
                f,
                "Description of enum value `{}.{}` changed from {} to {}",
                enum_type.name,
                new_value.name,
                Optional(old_value.description.as_deref()),
                Optional(new_value.description.as_deref())
            ),
            EnumValueDeprecationChanged {
                enum_type,
                old_value,
                new_value,
            } => deprecation_changed(
                f,
                format_args!("Enum value `{}.{}`", enum_type.name, new_value.name),
                old_value.deprecation_reason.as_deref(),
                new_value.deprecation_reason.as_deref(),
            ),

            UnionMemberRemoved { union_type, member } => write!(
                f,
                "Member `{member}` was removed from union `{}`",
                union_type.name
            ),
            UnionMemberAdded { union_type, member } => {
                write!(f, "Member `{member}` was added to union `{}`", union_type.name)
            }

            InputFieldRemoved { input_type, field } => write!(
                f,
                "Input field `{}` was removed from input object type `{}`",
                field.name, input_type.name
            ),
            InputFieldAdded { input_type, field } => write!(
                f,
                "Input field `{}: {}` was added to input object type `{}`",
                field.name, field.ty, input_type.name
            ),
            InputFieldDescriptionChanged {
                input_type,
                old_field,
                new_field,
            } => write!(
                f,
                "Description of input field `{}.{}` changed from {} to {}",
                input_type.name,
                new_field.name,
                Optional(old_field.description.as_deref()),
                Optional(new_field.description.as_deref())
            ),
            InputFieldDefaultChanged {
                input_type,
                old_field,
                new_field,
            } => write!(
                f,
                "Default value of input field `{}.{}` changed from {} to {}",
                input_type.name,
                new_field.name,
                Optional(old_field.default_value.as_deref()),
                Optional(new_field.default_value.as_deref())
            ),
            InputFieldTypeChanged {
                input_type,
                old_field,
                new_field,
            } => write!(
                f,
                "Type of input field `{}.{}` changed from `{}` to `{}`",
                input_type.name, new_field.name, old_field.ty, new_field.ty
            ),

            InterfaceImplementationRemoved { parent_type, interface } => write!(
                f,
                "`{}` no longer implements interface `{interface}`",
                parent_type.name
            ),
            InterfaceImplementationAdded { parent_type, interface } => {
                write!(f, "`{}` now implements interface `{interface}`", parent_type.name)
            }

            FieldRemoved { parent_type, field } => write!(
                f,
                "Field `{}` was removed from {} `{}`",
                field.name,
                parent_type.kind.noun(),
                parent_type.name
            ),
            FieldAdded { parent_type, field } => write!(
                f,
                "Field `{}` was added to {} `{}`",
                field.name,
                parent_type.kind.noun(),
                parent_type.name
            ),
            FieldDescriptionChanged {
                parent_type,
                old_field,
                new_field,
            } => write!(
                f,
                "Description of field `{}.{}` changed from {} to {}",
                parent_type.name,
                new_field.name,
                Optional(old_field.description.as_deref()),
                Optional(new_field.description.as_deref())
            ),
            FieldDeprecationChanged {
                parent_type,
                old_field,
                new_field,
            } => deprecation_changed(
                f,
                format_args!("Field `{}.{}`", parent_type.name, new_field.name),
                old_field.deprecation_reason.as_deref(),
                new_field.deprecation_reason.as_deref(),
            ),
            FieldTypeChanged {
                parent_type,
                old_field,
                new_field,
            } => write!(
                f,
                "Type of field `{}.{}` changed from `{}` to `{}`",
                parent_type.name, new_field.name, old_field.ty, new_field.ty
            ),
            FieldArgumentRemoved {
                parent_type,
                field,
                argument,
            } => write!(
                f,
                "Argument `{}: {}` was removed from field `{}.{}`",
                argument.name, argument.ty, parent_type.name, field.name
            ),
            FieldArgumentAdded {
                parent_type,
                field,
                argument,
            } => write!(
                f,
                "Argument `{}: {}` was added to field `{}.{}`",
                argument.name, argument.ty, parent_type.name, field.name
            ),
            FieldArgumentDescriptionChanged {
                parent_type,
                field,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Description of argument `{}` on field `{}.{}` changed from {} to {}",
                new_argument.name,
                parent_type.name,
                field.name,
                Optional(old_argument.description.as_deref()),
                Optional(new_argument.description.as_deref())
            ),
            FieldArgumentDefaultChanged {
                parent_type,
                field,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Default value of argument `{}` on field `{}.{}` changed from {} to {}",
                new_argument.name,
                parent_type.name,
                field.name,
                Optional(old_argument.default_value.as_deref()),
                Optional(new_argument.default_value.as_deref())
            ),
            FieldArgumentTypeChanged {
                parent_type,
                field,
                old_argument,
                new_argument,
            } => write!(
                f,
                "Type of argument `{}` on field `{}.{}` changed from `{}` to `{}`",
                new_argument.name, parent_type.name, field.name, old_argument.ty, new_argument.ty
            ),
        }
    }
}

/// Renders an optional value in backticks, or `none`.
struct Optional<'a>(Option<&'a str>);

impl fmt::Display for Optional<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "`{value}`"),
            None => f.write_str("none"),
        }
    }
}

fn root_type_changed(
    f: &mut fmt::Formatter<'_>,
    operation: &str,
    old_type: Option<&str>,
    new_type: Option<&str>,
) -> fmt::Result {
    match (old_type, new_type) {
        (Some(old_type), Some(new_type)) => write!(
            f,
            "Schema {operation} root type changed from `{old_type}` to `{new_type}`"
        ),
        (None, Some(new_type)) => write!(f, "Schema {operation} root type `{new_type}` was added"),
        (Some(old_type), None) => write!(f, "Schema {operation} root type `{old_type}` was removed"),
        (None, None) => write!(f, "Schema {operation} root type changed"),
    }
}

fn deprecation_changed(
    f: &mut fmt::Formatter<'_>,
    subject: fmt::Arguments<'_>,
    old_reason: Option<&str>,
    new_reason: Option<&str>,
) -> fmt::Result {
    match (old_reason, new_reason) {
        (None, Some(reason)) => write!(f, "{subject} was deprecated with reason `{reason}`"),
        (Some(_), None) => write!(f, "{subject} is no longer deprecated"),
        (old_reason, new_reason) => write!(
            f,
            "Deprecation reason of {} changed from {} to {}",
            Lowercased(subject),
            Optional(old_reason),
            Optional(new_reason)
        ),
    }
}

/// Lowercases the first letter of a sentence fragment.
struct Lowercased<'a>(fmt::Arguments<'a>);

impl fmt::Display for Lowercased<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        let mut chars = text.chars();

        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_lowercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}
