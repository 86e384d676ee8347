use crate::ast;

/// A single named member of one of a definition's sub-collections.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// A directive usage (`@key(fields: "id")`).
    Directive(ast::schema::Directive),

    /// A field definition on an object or interface type.
    Field(ast::schema::Field),

    /// An input-value definition: an input-object field or a directive
    /// argument.
    InputValue(ast::schema::InputValue),

    /// A value of an enum type.
    EnumValue(ast::schema::EnumValue),

    /// A reference to another type by name: an implemented interface or a
    /// union member.
    NamedType(String),
}
impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Directive(directive) => directive.name.as_str(),
            Self::Field(field) => field.name.as_str(),
            Self::InputValue(input_value) => input_value.name.as_str(),
            Self::EnumValue(enum_value) => enum_value.name.as_str(),
            Self::NamedType(name) => name.as_str(),
        }
    }

    /// The grammar name of the node this entry wraps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Directive(_) => "Directive",
            Self::Field(_) => "FieldDefinition",
            Self::InputValue(_) => "InputValueDefinition",
            Self::EnumValue(_) => "EnumValueDefinition",
            Self::NamedType(_) => "NamedType",
        }
    }

    pub fn as_field(&self) -> Option<&ast::schema::Field> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_input_value(&self) -> Option<&ast::schema::InputValue> {
        if let Self::InputValue(input_value) = self {
            Some(input_value)
        } else {
            None
        }
    }

    pub fn as_enum_value(&self) -> Option<&ast::schema::EnumValue> {
        if let Self::EnumValue(enum_value) = self {
            Some(enum_value)
        } else {
            None
        }
    }

    pub fn as_directive(&self) -> Option<&ast::schema::Directive> {
        if let Self::Directive(directive) = self {
            Some(directive)
        } else {
            None
        }
    }

    pub(crate) fn into_field(self) -> Option<ast::schema::Field> {
        if let Self::Field(field) = self { Some(field) } else { None }
    }

    pub(crate) fn into_input_value(self) -> Option<ast::schema::InputValue> {
        if let Self::InputValue(input_value) = self { Some(input_value) } else { None }
    }

    pub(crate) fn into_enum_value(self) -> Option<ast::schema::EnumValue> {
        if let Self::EnumValue(enum_value) = self { Some(enum_value) } else { None }
    }

    pub(crate) fn into_directive(self) -> Option<ast::schema::Directive> {
        if let Self::Directive(directive) = self { Some(directive) } else { None }
    }

    pub(crate) fn into_named_type(self) -> Option<String> {
        if let Self::NamedType(name) = self { Some(name) } else { None }
    }
}
impl From<ast::schema::Field> for Entry {
    fn from(field: ast::schema::Field) -> Self {
        Self::Field(field)
    }
}
impl From<ast::schema::InputValue> for Entry {
    fn from(input_value: ast::schema::InputValue) -> Self {
        Self::InputValue(input_value)
    }
}
impl From<ast::schema::EnumValue> for Entry {
    fn from(enum_value: ast::schema::EnumValue) -> Self {
        Self::EnumValue(enum_value)
    }
}
impl From<ast::schema::Directive> for Entry {
    fn from(directive: ast::schema::Directive) -> Self {
        Self::Directive(directive)
    }
}
