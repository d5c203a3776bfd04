//! This crate compares two snapshots of a GraphQL schema and reports what changed between them.
//! The intended workflow is the following:
//!
//! - Load the two schemas with [Schema::from_sdl()], or implement [SchemaView] on your own schema
//!   representation.
//! - Compute the changes with [diff()].
//! - Render them ([Change] implements `Display`), locate them with [Change::path()] and classify
//!   them with [Change::criticality()].
//!
//! ```
//! # #![allow(unused_crate_dependencies)]
//! use graphql_schema_comparator::{diff, Criticality, Schema};
//!
//! let old = Schema::from_sdl("type Query { user(id: ID!): User } type User { name: String }").unwrap();
//! let new = Schema::from_sdl("type Query { user(id: ID!): User } type User { name: String! }").unwrap();
//!
//! let changes = diff(&old, &new);
//!
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].path(), "User.name");
//! assert_eq!(
//!     changes[0].to_string(),
//!     "Type of field `User.name` changed from `String` to `String!`"
//! );
//! assert_eq!(changes[0].criticality(), Criticality::NonBreaking);
//! ```

mod change;
mod criticality;
mod diff;
mod error;
mod schema;

pub use change::Change;
pub use criticality::Criticality;
pub use diff::diff;
pub use error::Error;
pub use schema::{
    DirectiveDefinition, DirectiveLocation, EnumValueDefinition, FieldDefinition, InputValueDefinition, NamedMap,
    Schema, SchemaView, TypeDefinition, TypeKind, TypeRef, DEFAULT_DEPRECATION_REASON,
};

#[cfg(test)]
mod tests {
    use datatest_stable as _;
    use similar as _;
}
