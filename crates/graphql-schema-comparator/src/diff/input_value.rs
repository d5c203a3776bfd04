use crate::InputValueDefinition;

/// What can change on an input value present in both schemas. Field arguments, input object
/// fields and directive arguments are compared the same way, only the reported change differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputValueChange {
    Description,
    DefaultValue,
    Type,
}

/// The differences between two definitions of the same input value, in reporting order.
pub(super) fn diff(old: &InputValueDefinition, new: &InputValueDefinition) -> impl Iterator<Item = InputValueChange> {
    [
        (old.description != new.description).then_some(InputValueChange::Description),
        (old.default_value != new.default_value).then_some(InputValueChange::DefaultValue),
        (old.ty != new.ty).then_some(InputValueChange::Type),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    #[test]
    fn reporting_order() {
        let old = InputValueDefinition::new("limit", TypeRef::named("Int"));
        let mut new = InputValueDefinition::new("limit", TypeRef::named("Int").non_null()).with_default_value("10");
        new.description = Some("How many".to_owned());

        assert_eq!(
            diff(&old, &new).collect::<Vec<_>>(),
            [
                InputValueChange::Description,
                InputValueChange::DefaultValue,
                InputValueChange::Type
            ]
        );
        assert_eq!(diff(&new, &new).count(), 0);
    }
}
