use crate::ast;
use crate::DefinitionEditor;
use crate::EditError;
use crate::Registry;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, EditError>;

/// Owns a full schema document, split into three independent, name-keyed
/// registries of [DefinitionEditor]s: directive definitions, type
/// definitions, and type extensions.
///
/// Exporting (via [DocumentEditor::to_document]) concatenates the registries
/// in that fixed order. Within a registry, untouched definitions keep their
/// original relative order and newly created definitions follow in insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentEditor {
    definitions: IndexMap<String, DefinitionEditor>,
    directives: IndexMap<String, DefinitionEditor>,
    extensions: IndexMap<String, DefinitionEditor>,
}
impl DocumentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every top-level definition of `doc` into its registry.
    ///
    /// A name that occurs more than once within one registry (e.g. two
    /// `extend type User` blocks) is folded into its first occurrence using
    /// the same merge rule as [DocumentEditor::extend].
    pub fn from_document(doc: ast::schema::Document) -> Result<Self> {
        let mut editor = Self::new();
        for def in doc.definitions {
            let def_editor = DefinitionEditor::new(def)?;
            let registry = editor.registry_mut(def_editor.kind().registry());
            if let Some(existing) = registry.get_mut(def_editor.name()) {
                existing.extend_with(&def_editor)?;
            } else {
                registry.insert(def_editor.name().to_string(), def_editor);
            }
        }
        Ok(editor)
    }

    pub fn has(&self, registry: Registry, name: &str) -> bool {
        self.registry(registry).contains_key(name)
    }

    pub fn get(&self, registry: Registry, name: &str) -> Option<&DefinitionEditor> {
        self.registry(registry).get(name)
    }

    pub fn get_mut(
        &mut self,
        registry: Registry,
        name: &str,
    ) -> Option<&mut DefinitionEditor> {
        self.registry_mut(registry).get_mut(name)
    }

    /// Names in the selected registry, in export order.
    pub fn names(&self, registry: Registry) -> impl Iterator<Item = &str> {
        self.registry(registry).keys().map(|name| name.as_str())
    }

    /// Type extensions left without a single field, value, member,
    /// interface, or directive. These no longer print as valid SDL.
    pub fn empty_extensions(&self) -> impl Iterator<Item = &DefinitionEditor> {
        self.registry(Registry::Extensions)
            .values()
            .filter(|def_editor| def_editor.has_no_entries())
    }

    /// Total number of definitions across all registries.
    pub fn len(&self) -> usize {
        Registry::ALL.iter()
            .map(|registry| self.registry(*registry).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a new definition. Fails if the registry already has one with the
    /// same name.
    pub fn create(
        &mut self,
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<&mut Self> {
        let def_editor = Self::editor_for(registry, node)?;
        if self.has(registry, def_editor.name()) {
            return Err(EditError::AlreadyExists {
                name: def_editor.name().to_string(),
                registry,
            });
        }
        self.insert(registry, def_editor);
        Ok(self)
    }

    /// Overwrites an existing definition in place. Fails if the registry has
    /// no definition with the same name.
    pub fn replace(
        &mut self,
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<&mut Self> {
        let def_editor = Self::editor_for(registry, node)?;
        if !self.has(registry, def_editor.name()) {
            return Err(EditError::NotFound {
                name: def_editor.name().to_string(),
                registry,
            });
        }
        self.insert(registry, def_editor);
        Ok(self)
    }

    /// Overwrites an existing definition in place, or adds it if absent.
    pub fn upsert(
        &mut self,
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<&mut Self> {
        let def_editor = Self::editor_for(registry, node)?;
        self.insert(registry, def_editor);
        Ok(self)
    }

    /// Removes the named definition if present.
    pub fn delete(&mut self, registry: Registry, name: &str) -> &mut Self {
        self.registry_mut(registry).shift_remove(name);
        self
    }

    /// Removes the named definition. Fails if it is absent.
    pub fn remove(&mut self, registry: Registry, name: &str) -> Result<&mut Self> {
        if self.registry_mut(registry).shift_remove(name).is_none() {
            return Err(EditError::NotFound {
                name: name.to_string(),
                registry,
            });
        }
        Ok(self)
    }

    /// Merges `node` into the existing definition with the same name (see
    /// [DefinitionEditor::extend_with]).
    pub fn extend(
        &mut self,
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<&mut Self> {
        let incoming = Self::editor_for(registry, node)?;
        self.existing_mut(registry, incoming.name())?
            .extend_with(&incoming)?;
        Ok(self)
    }

    /// Drops from the existing definition with the same name every entry that
    /// `node` lists (see [DefinitionEditor::exclude_with]).
    pub fn exclude(
        &mut self,
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<&mut Self> {
        let incoming = Self::editor_for(registry, node)?;
        self.existing_mut(registry, incoming.name())?
            .exclude_with(&incoming)?;
        Ok(self)
    }

    /// Rebuilds the document: directive definitions, then type definitions,
    /// then type extensions.
    pub fn to_document(&self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: Registry::ALL.iter()
                .flat_map(|registry| self.registry(*registry).values())
                .map(DefinitionEditor::to_definition)
                .collect(),
        }
    }

    pub fn print(&self) -> String {
        self.to_document().to_string()
    }

    /// Prints and re-parses the document so that the returned AST is exactly
    /// what a consumer of the printed SDL would see.
    pub fn to_normalized_document(
        &self,
    ) -> std::result::Result<ast::schema::Document, ast::schema::ParseError> {
        ast::schema::parse(self.print().as_str())
    }

    fn editor_for(
        registry: Registry,
        node: ast::schema::Definition,
    ) -> Result<DefinitionEditor> {
        let def_editor = DefinitionEditor::new(node)?;
        let kind = def_editor.kind();
        if kind.registry() != registry {
            return Err(EditError::WrongRegistry {
                kind,
                name: def_editor.name().to_string(),
                registry,
            });
        }
        Ok(def_editor)
    }

    fn existing_mut(
        &mut self,
        registry: Registry,
        name: &str,
    ) -> Result<&mut DefinitionEditor> {
        self.registry_mut(registry)
            .get_mut(name)
            .ok_or_else(|| EditError::NotFound {
                name: name.to_string(),
                registry,
            })
    }

    fn insert(&mut self, registry: Registry, def_editor: DefinitionEditor) {
        self.registry_mut(registry)
            .insert(def_editor.name().to_string(), def_editor);
    }

    fn registry(&self, registry: Registry) -> &IndexMap<String, DefinitionEditor> {
        match registry {
            Registry::Definitions => &self.definitions,
            Registry::Directives => &self.directives,
            Registry::Extensions => &self.extensions,
        }
    }

    fn registry_mut(
        &mut self,
        registry: Registry,
    ) -> &mut IndexMap<String, DefinitionEditor> {
        match registry {
            Registry::Definitions => &mut self.definitions,
            Registry::Directives => &mut self.directives,
            Registry::Extensions => &mut self.extensions,
        }
    }
}
