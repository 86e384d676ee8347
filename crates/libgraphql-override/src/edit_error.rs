use crate::DefinitionKind;
use crate::Registry;
use crate::Selector;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EditError {
    #[error("Cannot create `{name}` in {registry}: a definition with the same name already exists")]
    AlreadyExists {
        name: String,
        registry: Registry,
    },

    #[error(
        "Cannot edit {collection} on `{definition}`: {kind} definitions have \
        no {collection}"
    )]
    CollectionNotSupported {
        collection: Selector,
        definition: String,
        kind: DefinitionKind,
    },

    #[error(
        "Cannot create `{entry}` in {collection} on `{definition}`: an entry \
        with the same name already exists"
    )]
    DuplicateEntry {
        collection: Selector,
        definition: String,
        entry: String,
    },

    #[error("No entry named `{entry}` exists in {collection} on `{definition}`")]
    EntryNotFound {
        collection: Selector,
        definition: String,
        entry: String,
    },

    #[error(
        "Cannot merge `{name}`: the existing definition is a {existing} but \
        the incoming definition is a {incoming}"
    )]
    KindMismatch {
        existing: DefinitionKind,
        incoming: DefinitionKind,
        name: String,
    },

    #[error(
        "A {entry_kind} cannot be stored in {collection} on `{definition}` \
        ({kind})"
    )]
    MismatchedEntry {
        collection: Selector,
        definition: String,
        entry_kind: &'static str,
        kind: DefinitionKind,
    },

    #[error("No definition named `{name}` exists in {registry}")]
    NotFound {
        name: String,
        registry: Registry,
    },

    #[error("`{name}` node of kind `{kind}` is not supported by the editor")]
    UnsupportedKind {
        kind: String,
        name: String,
    },

    #[error(
        "`{name}` is a {kind}, which belongs in {} rather than {registry}",
        kind.registry(),
    )]
    WrongRegistry {
        kind: DefinitionKind,
        name: String,
        registry: Registry,
    },
}
