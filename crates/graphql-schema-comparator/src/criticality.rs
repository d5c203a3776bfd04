use crate::Change;
use std::fmt;

/// How much a [Change] can affect existing clients of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Criticality {
    // /!\ The order of variants matters for the PartialOrd derive /!\
    /// The change cannot break any existing operation.
    NonBreaking,
    /// The change does not break existing operations, but it can change their results or the
    /// values clients must be ready to handle, e.g. a new enum value.
    Dangerous,
    /// The change can make existing operations invalid or make them fail at runtime.
    Breaking,
}

impl Criticality {
    pub fn as_str(self) -> &'static str {
        match self {
            Criticality::NonBreaking => "non-breaking",
            Criticality::Dangerous => "dangerous",
            Criticality::Breaking => "breaking",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Change<'_> {
    /// Classify the change.
    pub fn criticality(&self) -> Criticality {
        use Change::*;
        use Criticality::*;

        match self {
            TypeRemoved(_)
            | TypeKindChanged { .. }
            | SchemaQueryTypeChanged { .. }
            | SchemaMutationTypeChanged { .. }
            | SchemaSubscriptionTypeChanged { .. }
            | DirectiveRemoved(_)
            | DirectiveLocationRemoved { .. }
            | DirectiveArgumentRemoved { .. }
            | EnumValueRemoved { .. }
            | UnionMemberRemoved { .. }
            | InputFieldRemoved { .. }
            | InterfaceImplementationRemoved { .. }
            | FieldRemoved { .. }
            | FieldArgumentRemoved { .. } => Breaking,

            // Repeated usages of the directive become invalid.
            DirectiveRepeatableChanged { new_directive, .. } if !new_directive.repeatable => Breaking,

            DirectiveArgumentAdded { argument, .. } | FieldArgumentAdded { argument, .. } if argument.is_required() => {
                Breaking
            }
            InputFieldAdded { field, .. } if field.is_required() => Breaking,
            InputFieldAdded { .. } => Dangerous,

            FieldTypeChanged {
                old_field, new_field, ..
            } => safe_or_breaking(old_field.ty.is_safe_output_change(&new_field.ty)),
            InputFieldTypeChanged {
                old_field, new_field, ..
            } => safe_or_breaking(old_field.ty.is_safe_input_change(&new_field.ty)),
            FieldArgumentTypeChanged {
                old_argument,
                new_argument,
                ..
            }
            | DirectiveArgumentTypeChanged {
                old_argument,
                new_argument,
                ..
            } => safe_or_breaking(old_argument.ty.is_safe_input_change(&new_argument.ty)),

            EnumValueAdded { .. }
            | UnionMemberAdded { .. }
            | InterfaceImplementationAdded { .. }
            | InputFieldDefaultChanged { .. }
            | FieldArgumentDefaultChanged { .. }
            | DirectiveArgumentDefaultChanged { .. } => Dangerous,

            TypeAdded(_)
            | TypeDescriptionChanged { .. }
            | DirectiveAdded(_)
            | DirectiveDescriptionChanged { .. }
            | DirectiveRepeatableChanged { .. }
            | DirectiveLocationAdded { .. }
            | DirectiveArgumentAdded { .. }
            | DirectiveArgumentDescriptionChanged { .. }
            | EnumValueDescriptionChanged { .. }
            | EnumValueDeprecationChanged { .. }
            | InputFieldDescriptionChanged { .. }
            | FieldAdded { .. }
            | FieldDescriptionChanged { .. }
            | FieldDeprecationChanged { .. }
            | FieldArgumentAdded { .. }
            | FieldArgumentDescriptionChanged { .. } => NonBreaking,
        }
    }

    pub fn is_breaking(&self) -> bool {
        self.criticality() == Criticality::Breaking
    }
}

fn safe_or_breaking(is_safe: bool) -> Criticality {
    if is_safe {
        Criticality::NonBreaking
    } else {
        Criticality::Breaking
    }
}
