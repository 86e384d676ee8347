/// The editing instruction carried by an action directive in an overrides
/// document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActionKind {
    /// Add a definition/entry that must not exist yet.
    Create,
    /// Delete a definition/entry if it exists.
    Delete,
    /// Remove the listed sub-entries from an existing definition.
    Exclude,
    /// Merge into an existing definition; existing entries win.
    Extend,
    /// Remove a definition/entry that must exist.
    Remove,
    /// Overwrite a definition/entry that must exist.
    Replace,
    /// Overwrite a definition/entry, creating it if absent.
    Upsert,
}
impl ActionKind {
    /// The order type-level actions are applied in, regardless of where they
    /// appear in the overrides document.
    pub const TYPE_PHASES: [ActionKind; 7] = [
        ActionKind::Create,
        ActionKind::Replace,
        ActionKind::Upsert,
        ActionKind::Delete,
        ActionKind::Remove,
        ActionKind::Extend,
        ActionKind::Exclude,
    ];

    /// The order field-level actions are applied in, after all type-level
    /// actions.
    pub const FIELD_PHASES: [ActionKind; 5] = [
        ActionKind::Create,
        ActionKind::Replace,
        ActionKind::Upsert,
        ActionKind::Delete,
        ActionKind::Remove,
    ];

    pub fn from_directive_name(name: &str) -> Option<Self> {
        Some(match name {
            "create" => Self::Create,
            "delete" => Self::Delete,
            "exclude" => Self::Exclude,
            "extend" => Self::Extend,
            "remove" => Self::Remove,
            "replace" => Self::Replace,
            "upsert" => Self::Upsert,
            _ => return None,
        })
    }

    pub fn directive_name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Exclude => "exclude",
            Self::Extend => "extend",
            Self::Remove => "remove",
            Self::Replace => "replace",
            Self::Upsert => "upsert",
        }
    }

    /// Whether the action may target a field, input value, or enum value.
    pub fn applies_to_entries(&self) -> bool {
        Self::FIELD_PHASES.contains(self)
    }
}
impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.directive_name())
    }
}

/// Declarations of the action directives, for tools that validate an
/// overrides document before handing it to the resolver.
pub const ACTION_DIRECTIVES_SDL: &str = concat!(
    "directive @create on SCALAR | OBJECT | FIELD_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION\n",
    "directive @replace on SCALAR | OBJECT | FIELD_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION\n",
    "directive @upsert on SCALAR | OBJECT | FIELD_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION\n",
    "directive @remove on SCALAR | OBJECT | FIELD_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION\n",
    "directive @delete on SCALAR | OBJECT | FIELD_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION\n",
    "directive @extend on SCALAR | OBJECT | INTERFACE | UNION | ENUM | INPUT_OBJECT\n",
    "directive @exclude on SCALAR | OBJECT | INTERFACE | UNION | ENUM | INPUT_OBJECT\n",
);
