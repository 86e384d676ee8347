mod schema_input_tests;
mod visit_tests;

use crate::ast;

pub(super) fn parse(sdl: &str) -> ast::schema::Document {
    ast::schema::parse(sdl).unwrap()
}

pub(super) fn first_definition(sdl: &str) -> ast::schema::Definition {
    parse(sdl).definitions.remove(0)
}

/// Prints `sdl` the way the grammar printer would print its parsed form, so
/// expectations can be written without caring about whitespace.
pub(super) fn normalized(sdl: &str) -> String {
    parse(sdl).to_string()
}

pub(super) fn field(field_sdl: &str) -> ast::schema::Field {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    match first_definition(format!("type T {{ {field_sdl} }}").as_str()) {
        Definition::TypeDefinition(TypeDefinition::Object(mut obj)) =>
            obj.fields.remove(0),
        def => panic!("Expected an object type, found {def:?}"),
    }
}

pub(super) fn input_value(input_value_sdl: &str) -> ast::schema::InputValue {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    match first_definition(format!("input T {{ {input_value_sdl} }}").as_str()) {
        Definition::TypeDefinition(TypeDefinition::InputObject(mut input)) =>
            input.fields.remove(0),
        def => panic!("Expected an input object type, found {def:?}"),
    }
}

pub(super) fn enum_value(enum_value_sdl: &str) -> ast::schema::EnumValue {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    match first_definition(format!("enum T {{ {enum_value_sdl} }}").as_str()) {
        Definition::TypeDefinition(TypeDefinition::Enum(mut enum_type)) =>
            enum_type.values.remove(0),
        def => panic!("Expected an enum type, found {def:?}"),
    }
}

pub(super) fn directive(directive_sdl: &str) -> ast::schema::Directive {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    match first_definition(format!("scalar T {directive_sdl}").as_str()) {
        Definition::TypeDefinition(TypeDefinition::Scalar(mut scalar)) =>
            scalar.directives.remove(0),
        def => panic!("Expected a scalar type, found {def:?}"),
    }
}
