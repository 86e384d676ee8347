use crate::ast;
use crate::EditError;

/// The 13 kinds of top-level schema definitions that can be edited: six type
/// definitions, their six extension counterparts, and directive definitions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    DirectiveDefinition,
    EnumTypeDefinition,
    EnumTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
}
impl DefinitionKind {
    /// Classifies a parsed top-level definition. `SchemaDefinition` nodes are
    /// the only parsable nodes that fall outside the editable kinds.
    pub fn of(def: &ast::schema::Definition) -> Result<Self, EditError> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        Ok(match def {
            Definition::DirectiveDefinition(_) => Self::DirectiveDefinition,
            Definition::SchemaDefinition(_) => return Err(EditError::UnsupportedKind {
                kind: "SchemaDefinition".to_string(),
                name: "unnamed".to_string(),
            }),
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(_) => Self::EnumTypeDefinition,
                TypeDefinition::InputObject(_) => Self::InputObjectTypeDefinition,
                TypeDefinition::Interface(_) => Self::InterfaceTypeDefinition,
                TypeDefinition::Object(_) => Self::ObjectTypeDefinition,
                TypeDefinition::Scalar(_) => Self::ScalarTypeDefinition,
                TypeDefinition::Union(_) => Self::UnionTypeDefinition,
            },
            Definition::TypeExtension(type_ext) => match type_ext {
                TypeExtension::Enum(_) => Self::EnumTypeExtension,
                TypeExtension::InputObject(_) => Self::InputObjectTypeExtension,
                TypeExtension::Interface(_) => Self::InterfaceTypeExtension,
                TypeExtension::Object(_) => Self::ObjectTypeExtension,
                TypeExtension::Scalar(_) => Self::ScalarTypeExtension,
                TypeExtension::Union(_) => Self::UnionTypeExtension,
            },
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectiveDefinition => "DirectiveDefinition",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumTypeExtension => "EnumTypeExtension",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputObjectTypeExtension => "InputObjectTypeExtension",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::InterfaceTypeExtension => "InterfaceTypeExtension",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ObjectTypeExtension => "ObjectTypeExtension",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ScalarTypeExtension => "ScalarTypeExtension",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::UnionTypeExtension => "UnionTypeExtension",
        }
    }

    /// The [Registry] a definition of this kind is filed under by a
    /// [crate::DocumentEditor].
    pub fn registry(&self) -> Registry {
        match self {
            Self::DirectiveDefinition => Registry::Directives,

            Self::EnumTypeDefinition
            | Self::InputObjectTypeDefinition
            | Self::InterfaceTypeDefinition
            | Self::ObjectTypeDefinition
            | Self::ScalarTypeDefinition
            | Self::UnionTypeDefinition
                => Registry::Definitions,

            Self::EnumTypeExtension
            | Self::InputObjectTypeExtension
            | Self::InterfaceTypeExtension
            | Self::ObjectTypeExtension
            | Self::ScalarTypeExtension
            | Self::UnionTypeExtension
                => Registry::Extensions,
        }
    }

    /// The name-indexed sub-collections a definition of this kind carries, in
    /// the order they appear in SDL.
    pub fn selectors(&self) -> &'static [Selector] {
        match self {
            Self::DirectiveDefinition => &[Selector::Arguments],

            Self::EnumTypeDefinition
            | Self::EnumTypeExtension
                => &[Selector::Directives, Selector::Values],

            Self::InputObjectTypeDefinition
            | Self::InputObjectTypeExtension
            | Self::InterfaceTypeDefinition
            | Self::InterfaceTypeExtension
                => &[Selector::Directives, Selector::Fields],

            Self::ObjectTypeDefinition
            | Self::ObjectTypeExtension
                => &[Selector::Interfaces, Selector::Directives, Selector::Fields],

            Self::ScalarTypeDefinition
            | Self::ScalarTypeExtension
                => &[Selector::Directives],

            Self::UnionTypeDefinition
            | Self::UnionTypeExtension
                => &[Selector::Directives, Selector::Types],
        }
    }

    pub fn supports(&self, selector: Selector) -> bool {
        self.selectors().contains(&selector)
    }

    /// Whether this kind's `fields` collection holds input-value definitions
    /// rather than field definitions.
    pub(crate) fn has_input_fields(&self) -> bool {
        matches!(
            self,
            Self::InputObjectTypeDefinition | Self::InputObjectTypeExtension,
        )
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three independent, name-keyed namespaces of a schema document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Registry {
    Directives,
    Definitions,
    Extensions,
}
impl Registry {
    /// Registries in export order.
    pub const ALL: [Registry; 3] = [
        Registry::Directives,
        Registry::Definitions,
        Registry::Extensions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directives => "directives",
            Self::Definitions => "definitions",
            Self::Extensions => "extensions",
        }
    }
}
impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects one name-indexed sub-collection of a definition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Selector {
    Arguments,
    Directives,
    Fields,
    Interfaces,
    /// Member types of a union.
    Types,
    Values,
}
impl Selector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arguments => "arguments",
            Self::Directives => "directives",
            Self::Fields => "fields",
            Self::Interfaces => "interfaces",
            Self::Types => "types",
            Self::Values => "values",
        }
    }
}
impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
