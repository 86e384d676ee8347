use crate::ast;
use crate::ActionKind;
use crate::DefinitionKind;
use crate::DocumentEditor;
use crate::EditError;
use crate::OverridePlan;
use crate::SchemaInput;
use crate::SchemaInputError;
use thiserror::Error;

type Result<T> = std::result::Result<T, OverrideError>;

/// Applies an overrides document to a base schema document.
///
/// The overrides document is plain SDL in which definitions and their
/// fields, input values, or enum values are annotated with one of the action
/// directives (`@create`, `@replace`, `@upsert`, `@delete`, `@remove`,
/// `@extend`, `@exclude`). Each annotated node (minus the action directive)
/// is the payload of its action. Nodes without an action directive are
/// ignored.
///
/// ```
/// use libgraphql_override::override_schema;
///
/// let merged = override_schema(
///     "type User { id: ID! name: String }",
///     "type User @extend { email: String }",
/// ).unwrap();
///
/// assert!(merged.to_string().contains("email: String"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OverrideResolver {
    overrides: ast::schema::Document,
    schema: ast::schema::Document,
}
impl OverrideResolver {
    pub fn new(
        schema: impl Into<SchemaInput>,
        overrides: impl Into<SchemaInput>,
    ) -> Result<Self> {
        Ok(Self {
            schema: schema.into().resolve("schema")?,
            overrides: overrides.into().resolve("overrides")?,
        })
    }

    /// Classifies the action directives of the overrides document without
    /// touching the base schema.
    pub fn plan(&self) -> Result<OverridePlan> {
        OverridePlan::from_document(&self.overrides)
    }

    /// Runs every queued action against an editor over the base schema and
    /// returns the result as a freshly re-parsed document.
    pub fn resolve(self) -> Result<ast::schema::Document> {
        let plan = self.plan()?;
        if plan.is_empty() {
            log::debug!("The overrides document carries no action directives.");
        }

        let mut editor = DocumentEditor::from_document(self.schema)?;
        plan.apply(&mut editor)?;

        editor.to_normalized_document().map_err(|err| {
            match editor.empty_extensions().next() {
                Some(def_editor) => OverrideError::EmptyExtension {
                    kind: def_editor.kind(),
                    name: def_editor.name().to_string(),
                },
                None => OverrideError::NormalizationError {
                    err: err.to_string(),
                },
            }
        })
    }
}

/// Shorthand for `OverrideResolver::new(schema, overrides)?.resolve()`.
pub fn override_schema(
    schema: impl Into<SchemaInput>,
    overrides: impl Into<SchemaInput>,
) -> Result<ast::schema::Document> {
    OverrideResolver::new(schema, overrides)?.resolve()
}

#[derive(Debug, Error, PartialEq)]
pub enum OverrideError {
    #[error(
        "`{type_name}` carries a type-level action directive and field-level \
        action directives in the same block; move the field-level actions \
        into a separate block"
    )]
    AmbiguousOverride {
        type_name: String,
    },

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(
        "{kind} `{name}` has nothing left to extend after applying the \
        overrides; remove the extension instead of excluding all of its members"
    )]
    EmptyExtension {
        kind: DefinitionKind,
        name: String,
    },

    #[error(
        "{action} cannot be placed on {target}: action directives belong on a \
        type definition, a type extension, or a field, input value, or enum \
        value directly inside one"
    )]
    InvalidActionTarget {
        action: ActionKind,
        target: String,
    },

    #[error("The merged schema failed to re-parse: {err}")]
    NormalizationError {
        err: String,
    },

    #[error(transparent)]
    SchemaInput(#[from] SchemaInputError),

    #[error(
        "{action} on `{type_name}.{entry}` is not supported: fields, input \
        values, and enum values accept only @create, @replace, @upsert, \
        @delete, and @remove"
    )]
    UnsupportedFieldAction {
        action: ActionKind,
        entry: String,
        type_name: String,
    },
}
