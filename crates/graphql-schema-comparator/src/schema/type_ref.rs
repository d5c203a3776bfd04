use std::fmt;

/// A reference to a type, with its list and non-null wrappers. Renders as GraphQL type syntax,
/// e.g. `[User!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap in a list.
    #[must_use]
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wrap in non-null. Already non-null references are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }

    /// The name of the innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }

    /// Whether a field whose type changes from `self` to `new` keeps returning values existing
    /// clients can handle. Making a nullable output non-null is fine, the reverse is not.
    pub fn is_safe_output_change(&self, new: &TypeRef) -> bool {
        match (self, new) {
            (TypeRef::Named(old_name), TypeRef::Named(new_name)) => old_name == new_name,
            (TypeRef::Named(_), TypeRef::NonNull(new_inner)) => self.is_safe_output_change(new_inner),
            (TypeRef::Named(_), TypeRef::List(_)) => false,

            (TypeRef::List(old_inner), TypeRef::List(new_inner)) => old_inner.is_safe_output_change(new_inner),
            (TypeRef::List(_), TypeRef::NonNull(new_inner)) => self.is_safe_output_change(new_inner),
            (TypeRef::List(_), TypeRef::Named(_)) => false,

            (TypeRef::NonNull(old_inner), TypeRef::NonNull(new_inner)) => old_inner.is_safe_output_change(new_inner),
            (TypeRef::NonNull(_), _) => false,
        }
    }

    /// Whether an argument or input field whose type changes from `self` to `new` still accepts
    /// every value existing clients can send. Relaxing non-null is fine, the reverse is not.
    pub fn is_safe_input_change(&self, new: &TypeRef) -> bool {
        match (self, new) {
            (TypeRef::Named(old_name), TypeRef::Named(new_name)) => old_name == new_name,
            (TypeRef::List(old_inner), TypeRef::List(new_inner)) => old_inner.is_safe_input_change(new_inner),
            (TypeRef::NonNull(old_inner), TypeRef::NonNull(new_inner)) => old_inner.is_safe_input_change(new_inner),
            (TypeRef::NonNull(old_inner), _) => old_inner.is_safe_input_change(new),
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<&async_graphql_parser::types::Type> for TypeRef {
    fn from(ty: &async_graphql_parser::types::Type) -> Self {
        use async_graphql_parser::types::BaseType;

        let base = match &ty.base {
            BaseType::Named(name) => TypeRef::Named(name.to_string()),
            BaseType::List(inner) => TypeRef::from(inner.as_ref()).list(),
        };

        if ty.nullable {
            base
        } else {
            base.non_null()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeRef {
        TypeRef::named("String")
    }

    #[test]
    fn display() {
        let ty = TypeRef::named("User").non_null().list().non_null();
        assert_eq!(ty.to_string(), "[User!]!");
        assert_eq!(ty.base_name(), "User");
        assert_eq!(string().non_null().non_null().to_string(), "String!");
    }

    #[test]
    fn from_parser_type() {
        let ty = async_graphql_parser::types::Type::new("[[Int]!]").unwrap();
        assert_eq!(TypeRef::from(&ty).to_string(), "[[Int]!]");
    }

    #[test]
    fn output_changes() {
        let cases = [
            (string(), string(), true),
            (string(), string().non_null(), true),
            (string().non_null(), string(), false),
            (string(), TypeRef::named("ID"), false),
            (string().list(), string().non_null().list().non_null(), true),
            (string().list(), string(), false),
            (string(), string().list(), false),
            (string().non_null().list(), string().list(), false),
        ];

        for (old, new, expected) in cases {
            assert_eq!(old.is_safe_output_change(&new), expected, "{old} -> {new}");
        }
    }

    #[test]
    fn input_changes() {
        let cases = [
            (string(), string(), true),
            (string().non_null(), string(), true),
            (string(), string().non_null(), false),
            (string().non_null().list().non_null(), string().list(), true),
            (string().list(), string().non_null().list(), false),
            (string().list(), string(), false),
            (string().non_null(), TypeRef::named("ID"), false),
        ];

        for (old, new, expected) in cases {
            assert_eq!(old.is_safe_input_change(&new), expected, "{old} -> {new}");
        }
    }
}
