use super::parse;
use crate::ast;
use crate::visit::walk_document;
use crate::visit::AncestorNode;
use crate::visit::SchemaVisitor;

/// Records `directive-name: ancestor/chain` for every directive usage.
#[derive(Default)]
struct PathRecorder {
    paths: Vec<String>,
}
impl<'a> SchemaVisitor<'a> for PathRecorder {
    type Error = std::convert::Infallible;

    fn visit_directive(
        &mut self,
        directive: &'a ast::schema::Directive,
        index: usize,
        ancestors: &[AncestorNode<'a>],
    ) -> Result<(), Self::Error> {
        let chain = ancestors.iter()
            .map(|node| match node {
                AncestorNode::Definition(def) => match def {
                    ast::schema::Definition::DirectiveDefinition(d) => format!("@{}", d.name),
                    ast::schema::Definition::SchemaDefinition(_) => "schema".to_string(),
                    ast::schema::Definition::TypeDefinition(_) => "type".to_string(),
                    ast::schema::Definition::TypeExtension(_) => "extension".to_string(),
                },
                AncestorNode::EnumValue(v) => v.name.to_owned(),
                AncestorNode::Field(f) => f.name.to_owned(),
                AncestorNode::InputValue(v) => v.name.to_owned(),
            })
            .collect::<Vec<_>>()
            .join("/");
        self.paths.push(format!("{}[{index}]: {chain}", directive.name));
        Ok(())
    }
}

fn visit_paths(sdl: &str) -> Vec<String> {
    let doc = parse(sdl);
    let mut recorder = PathRecorder::default();
    walk_document(&doc, &mut recorder).unwrap();
    recorder.paths
}

#[test]
fn visits_in_document_order_with_ancestors() {
    let paths = visit_paths(concat!(
        "type User @a @b {\n",
        "  posts(first: Int @c): [Post] @d\n",
        "}\n",
        "extend enum Role @e { ADMIN @f }\n",
        "input NewUser { name: String @g }\n",
        "directive @auth(role: String @h) on FIELD_DEFINITION\n",
        "schema @i { query: Query }\n",
    ));

    assert_eq!(paths, vec![
        "a[0]: type",
        "b[1]: type",
        "c[0]: type/posts/first",
        "d[0]: type/posts",
        "e[0]: extension",
        "f[0]: extension/ADMIN",
        "g[0]: type/name",
        "h[0]: @auth/role",
        "i[0]: schema",
    ]);
}

#[test]
fn stops_at_the_first_error() {
    struct FailOn(&'static str, usize);
    impl<'a> SchemaVisitor<'a> for FailOn {
        type Error = String;

        fn visit_directive(
            &mut self,
            directive: &'a ast::schema::Directive,
            _index: usize,
            _ancestors: &[AncestorNode<'a>],
        ) -> Result<(), Self::Error> {
            self.1 += 1;
            if directive.name == self.0 {
                return Err(directive.name.to_owned());
            }
            Ok(())
        }
    }

    let doc = parse("type A @x @stop @y { f: Int @z }");
    let mut visitor = FailOn("stop", 0);
    assert_eq!(walk_document(&doc, &mut visitor), Err("stop".to_string()));
    assert_eq!(visitor.1, 2);
}
