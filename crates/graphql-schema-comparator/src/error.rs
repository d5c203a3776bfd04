use crate::TypeKind;

/// Errors that can happen while loading a [crate::Schema] from SDL. Diffing itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not valid GraphQL SDL.
    #[error("could not parse the schema: {0}")]
    Parse(#[from] async_graphql_parser::Error),
    /// The directive definitions could not be read.
    #[error("could not parse the schema: {0}")]
    Syntax(String),
    #[error("the type `{0}` is defined more than once")]
    DuplicateType(String),
    #[error("the directive `@{0}` is defined more than once")]
    DuplicateDirective(String),
    #[error("cannot extend `{0}`, the type is not defined")]
    UnknownExtendedType(String),
    #[error("cannot extend {} `{name}` with an extension of kind {extension_kind}", .kind.noun())]
    ExtensionKindMismatch {
        name: String,
        kind: TypeKind,
        extension_kind: TypeKind,
    },
}
