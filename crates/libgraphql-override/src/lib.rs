mod action_kind;
pub mod ast;
mod definition_editor;
mod definition_kind;
mod document_editor;
mod edit_error;
mod entry;
mod override_plan;
mod override_resolver;
mod schema_input;
pub mod visit;

pub use action_kind::ActionKind;
pub use action_kind::ACTION_DIRECTIVES_SDL;
pub use definition_editor::DefinitionEditor;
pub use definition_kind::DefinitionKind;
pub use definition_kind::Registry;
pub use definition_kind::Selector;
pub use document_editor::DocumentEditor;
pub use edit_error::EditError;
pub use entry::Entry;
pub use override_plan::FieldAction;
pub use override_plan::OverridePlan;
pub use override_plan::TypeAction;
pub use override_resolver::override_schema;
pub use override_resolver::OverrideError;
pub use override_resolver::OverrideResolver;
pub use schema_input::SchemaInput;
pub use schema_input::SchemaInputError;

#[cfg(test)]
mod tests;
