//! Pre-order traversal of a schema document's directive usages.
//!
//! `graphql_parser` has no visitor of its own, so [walk_document] walks
//! every definition in document order and hands each directive usage to a
//! [SchemaVisitor] together with the chain of nodes enclosing it.

use crate::ast;

/// A node on the path from the document root down to a directive usage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AncestorNode<'a> {
    Definition(&'a ast::schema::Definition),
    EnumValue(&'a ast::schema::EnumValue),
    Field(&'a ast::schema::Field),
    InputValue(&'a ast::schema::InputValue),
}

pub trait SchemaVisitor<'a> {
    type Error;

    /// Called for every directive usage. `index` is the usage's position in
    /// its parent's directive list; `ancestors` runs from the top-level
    /// definition (first) to the node that carries the directive (last).
    fn visit_directive(
        &mut self,
        directive: &'a ast::schema::Directive,
        index: usize,
        ancestors: &[AncestorNode<'a>],
    ) -> Result<(), Self::Error>;
}

pub fn walk_document<'a, V: SchemaVisitor<'a>>(
    doc: &'a ast::schema::Document,
    visitor: &mut V,
) -> Result<(), V::Error> {
    let mut walker = Walker {
        ancestors: Vec::with_capacity(3),
        visitor,
    };
    for def in &doc.definitions {
        walker.walk_definition(def)?;
    }
    Ok(())
}

struct Walker<'a, 'v, V: SchemaVisitor<'a>> {
    ancestors: Vec<AncestorNode<'a>>,
    visitor: &'v mut V,
}
impl<'a, V: SchemaVisitor<'a>> Walker<'a, '_, V> {
    fn walk_definition(
        &mut self,
        def: &'a ast::schema::Definition,
    ) -> Result<(), V::Error> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        self.ancestors.push(AncestorNode::Definition(def));
        let result = match def {
            Definition::DirectiveDefinition(d) =>
                self.walk_members(&[], &[], &d.arguments, &[]),
            Definition::SchemaDefinition(s) =>
                self.walk_members(&s.directives, &[], &[], &[]),
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(t) =>
                    self.walk_members(&t.directives, &[], &[], &t.values),
                TypeDefinition::InputObject(t) =>
                    self.walk_members(&t.directives, &[], &t.fields, &[]),
                TypeDefinition::Interface(t) =>
                    self.walk_members(&t.directives, &t.fields, &[], &[]),
                TypeDefinition::Object(t) =>
                    self.walk_members(&t.directives, &t.fields, &[], &[]),
                TypeDefinition::Scalar(t) =>
                    self.walk_members(&t.directives, &[], &[], &[]),
                TypeDefinition::Union(t) =>
                    self.walk_members(&t.directives, &[], &[], &[]),
            },
            Definition::TypeExtension(type_ext) => match type_ext {
                TypeExtension::Enum(t) =>
                    self.walk_members(&t.directives, &[], &[], &t.values),
                TypeExtension::InputObject(t) =>
                    self.walk_members(&t.directives, &[], &t.fields, &[]),
                TypeExtension::Interface(t) =>
                    self.walk_members(&t.directives, &t.fields, &[], &[]),
                TypeExtension::Object(t) =>
                    self.walk_members(&t.directives, &t.fields, &[], &[]),
                TypeExtension::Scalar(t) =>
                    self.walk_members(&t.directives, &[], &[], &[]),
                TypeExtension::Union(t) =>
                    self.walk_members(&t.directives, &[], &[], &[]),
            },
        };
        self.ancestors.pop();
        result
    }

    // Visits in SDL order: a definition's own directives precede its body.
    fn walk_members(
        &mut self,
        directives: &'a [ast::schema::Directive],
        fields: &'a [ast::schema::Field],
        input_values: &'a [ast::schema::InputValue],
        enum_values: &'a [ast::schema::EnumValue],
    ) -> Result<(), V::Error> {
        self.walk_directives(directives)?;

        for field in fields {
            self.ancestors.push(AncestorNode::Field(field));
            let result = self.walk_input_values(&field.arguments)
                .and_then(|_| self.walk_directives(&field.directives));
            self.ancestors.pop();
            result?;
        }

        self.walk_input_values(input_values)?;

        for enum_value in enum_values {
            self.ancestors.push(AncestorNode::EnumValue(enum_value));
            let result = self.walk_directives(&enum_value.directives);
            self.ancestors.pop();
            result?;
        }

        Ok(())
    }

    fn walk_input_values(
        &mut self,
        input_values: &'a [ast::schema::InputValue],
    ) -> Result<(), V::Error> {
        for input_value in input_values {
            self.ancestors.push(AncestorNode::InputValue(input_value));
            let result = self.walk_directives(&input_value.directives);
            self.ancestors.pop();
            result?;
        }
        Ok(())
    }

    fn walk_directives(
        &mut self,
        directives: &'a [ast::schema::Directive],
    ) -> Result<(), V::Error> {
        for (index, directive) in directives.iter().enumerate() {
            self.visitor.visit_directive(
                directive,
                index,
                self.ancestors.as_slice(),
            )?;
        }
        Ok(())
    }
}
