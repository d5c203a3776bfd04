mod directive_location;
mod from_sdl;
mod type_ref;

pub use directive_location::DirectiveLocation;
pub use type_ref::TypeRef;

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// The reason GraphQL assumes for `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A name-keyed, insertion-ordered map. Iteration order is the order of definition in the
/// schema, and it is the order changes are reported in.
pub type NamedMap<T> = IndexMap<String, T>;

/// Read-only access to a schema snapshot. This is everything [crate::diff()] needs to know
/// about a schema, so callers can back it with any representation they like.
pub trait SchemaView {
    /// All the types of the schema, keyed by name.
    fn types(&self) -> &NamedMap<TypeDefinition>;

    /// All the directive definitions of the schema, keyed by name.
    fn directives(&self) -> &NamedMap<DirectiveDefinition>;

    /// The name of the query root type, if any.
    fn query_type(&self) -> Option<&str>;

    /// The name of the mutation root type, if any.
    fn mutation_type(&self) -> Option<&str>;

    /// The name of the subscription root type, if any.
    fn subscription_type(&self) -> Option<&str>;
}

impl<T: SchemaView + ?Sized> SchemaView for &T {
    fn types(&self) -> &NamedMap<TypeDefinition> {
        (**self).types()
    }

    fn directives(&self) -> &NamedMap<DirectiveDefinition> {
        (**self).directives()
    }

    fn query_type(&self) -> Option<&str> {
        (**self).query_type()
    }

    fn mutation_type(&self) -> Option<&str> {
        (**self).mutation_type()
    }

    fn subscription_type(&self) -> Option<&str> {
        (**self).subscription_type()
    }
}

/// An owned, immutable schema snapshot. Build it with [Schema::from_sdl()] or by filling in the
/// fields directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    pub types: NamedMap<TypeDefinition>,
    pub directives: NamedMap<DirectiveDefinition>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}

impl Schema {
    /// Insert a type definition, replacing any previous definition with the same name.
    pub fn insert_type(&mut self, definition: TypeDefinition) {
        self.types.insert(definition.name.clone(), definition);
    }

    /// Insert a directive definition, replacing any previous definition with the same name.
    pub fn insert_directive(&mut self, definition: DirectiveDefinition) {
        self.directives.insert(definition.name.clone(), definition);
    }
}

impl SchemaView for Schema {
    fn types(&self) -> &NamedMap<TypeDefinition> {
        &self.types
    }

    fn directives(&self) -> &NamedMap<DirectiveDefinition> {
        &self.directives
    }

    fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }
}

/// The structural category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// The introspection name of the kind, e.g. `INPUT_OBJECT`.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }

    /// How the kind is referred to in prose, e.g. `input object type`.
    pub(crate) fn noun(self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar type",
            TypeKind::Object => "object type",
            TypeKind::Interface => "interface type",
            TypeKind::Union => "union type",
            TypeKind::Enum => "enum type",
            TypeKind::InputObject => "input object type",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named type. Only the parts relevant to `kind` are populated:
///
/// - `interfaces` and `fields` for objects and interfaces
/// - `members` for unions
/// - `values` for enums
/// - `input_fields` for input objects
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDefinition {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    pub interfaces: IndexSet<String>,
    pub fields: NamedMap<FieldDefinition>,
    pub members: IndexSet<String>,
    pub values: NamedMap<EnumValueDefinition>,
    pub input_fields: NamedMap<InputValueDefinition>,
}

impl TypeDefinition {
    /// An empty definition of the given kind.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDefinition {
            name: name.into(),
            kind,
            description: None,
            interfaces: IndexSet::new(),
            fields: NamedMap::new(),
            members: IndexSet::new(),
            values: NamedMap::new(),
            input_fields: NamedMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.insert(interface.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.insert(member.into());
        self
    }

    pub fn with_value(mut self, value: EnumValueDefinition) -> Self {
        self.values.insert(value.name.clone(), value);
        self
    }

    pub fn with_input_field(mut self, field: InputValueDefinition) -> Self {
        self.input_fields.insert(field.name.clone(), field);
        self
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub arguments: NamedMap<InputValueDefinition>,
    pub deprecation_reason: Option<String>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDefinition {
            name: name.into(),
            description: None,
            ty,
            arguments: NamedMap::new(),
            deprecation_reason: None,
        }
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }
}

/// A field argument, input object field or directive argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// The default value, as a GraphQL literal.
    pub default_value: Option<String>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        InputValueDefinition {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// A required input value must be provided by clients: it is non-null and has no default.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValueDefinition {
            name: name.into(),
            description: None,
            deprecation_reason: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub locations: IndexSet<DirectiveLocation>,
    pub arguments: NamedMap<InputValueDefinition>,
    pub repeatable: bool,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveDefinition {
            name: name.into(),
            description: None,
            locations: IndexSet::new(),
            arguments: NamedMap::new(),
            repeatable: false,
        }
    }

    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        self.locations.insert(location);
        self
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }
}
