use async_graphql_parser::types as ast;
use std::fmt;

/// Where a directive may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[allow(missing_docs)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ast::DirectiveLocation> for DirectiveLocation {
    fn from(location: ast::DirectiveLocation) -> Self {
        match location {
            ast::DirectiveLocation::Query => DirectiveLocation::Query,
            ast::DirectiveLocation::Mutation => DirectiveLocation::Mutation,
            ast::DirectiveLocation::Subscription => DirectiveLocation::Subscription,
            ast::DirectiveLocation::Field => DirectiveLocation::Field,
            ast::DirectiveLocation::FragmentDefinition => DirectiveLocation::FragmentDefinition,
            ast::DirectiveLocation::FragmentSpread => DirectiveLocation::FragmentSpread,
            ast::DirectiveLocation::InlineFragment => DirectiveLocation::InlineFragment,
            ast::DirectiveLocation::VariableDefinition => DirectiveLocation::VariableDefinition,
            ast::DirectiveLocation::Schema => DirectiveLocation::Schema,
            ast::DirectiveLocation::Scalar => DirectiveLocation::Scalar,
            ast::DirectiveLocation::Object => DirectiveLocation::Object,
            ast::DirectiveLocation::FieldDefinition => DirectiveLocation::FieldDefinition,
            ast::DirectiveLocation::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
            ast::DirectiveLocation::Interface => DirectiveLocation::Interface,
            ast::DirectiveLocation::Union => DirectiveLocation::Union,
            ast::DirectiveLocation::Enum => DirectiveLocation::Enum,
            ast::DirectiveLocation::EnumValue => DirectiveLocation::EnumValue,
            ast::DirectiveLocation::InputObject => DirectiveLocation::InputObject,
            ast::DirectiveLocation::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
        }
    }
}
