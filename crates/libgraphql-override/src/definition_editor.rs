use crate::ast;
use crate::DefinitionKind;
use crate::EditError;
use crate::Entry;
use crate::Selector;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, EditError>;

type EntryMap = IndexMap<String, Entry>;

/// Owns a single type, type-extension, or directive definition and exposes
/// name-indexed CRUD over each of its sub-collections (fields, values,
/// interfaces, union member types, arguments, and directive usages).
///
/// Each sub-collection is kept in an insertion-ordered map, so exporting via
/// [DefinitionEditor::to_definition] yields the original entries in their
/// original order followed by any newly created entries.
///
/// Sub-collections that aren't name-indexed (directive `locations`, an
/// interface's `implements` list, `repeatable`) pass through untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct DefinitionEditor {
    collections: IndexMap<Selector, EntryMap>,
    kind: DefinitionKind,
    name: String,

    // The wrapped definition with every name-indexed collection drained into
    // `collections`.
    node: ast::schema::Definition,
}
impl DefinitionEditor {
    pub fn new(mut node: ast::schema::Definition) -> Result<Self> {
        let kind = DefinitionKind::of(&node)?;
        let name = definition_name(&node).unwrap_or("unnamed").to_string();

        let mut collections = IndexMap::new();
        let mut slots = CollectionSlots::of(&mut node);
        for selector in kind.selectors() {
            let entries = slots.take(*selector);
            let mut entry_map = EntryMap::with_capacity(entries.len());
            for entry in entries {
                entry_map.insert(entry.name().to_string(), entry);
            }
            collections.insert(*selector, entry_map);
        }

        Ok(Self {
            collections,
            kind,
            name,
            node,
        })
    }

    pub fn description(&self) -> Option<&str> {
        description_of(&self.node)
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether every name-indexed sub-collection is empty.
    pub fn has_no_entries(&self) -> bool {
        self.collections.values().all(EntryMap::is_empty)
    }

    /// Whether definitions of this kind have the selected sub-collection.
    pub fn supports(&self, selector: Selector) -> bool {
        self.kind.supports(selector)
    }

    pub fn exists(&self, selector: Selector, name: &str) -> Result<bool> {
        Ok(self.collection(selector)?.contains_key(name))
    }

    pub fn get(&self, selector: Selector, name: &str) -> Result<Option<&Entry>> {
        Ok(self.collection(selector)?.get(name))
    }

    /// Iterates the selected sub-collection in export order.
    pub fn entries(
        &self,
        selector: Selector,
    ) -> Result<impl Iterator<Item = &Entry>> {
        Ok(self.collection(selector)?.values())
    }

    /// Appends a new entry. Fails if an entry with the same name exists.
    pub fn create(
        &mut self,
        selector: Selector,
        entry: impl Into<Entry>,
    ) -> Result<&mut Self> {
        let entry = entry.into();
        self.check_entry(selector, &entry)?;
        if self.exists(selector, entry.name())? {
            return Err(EditError::DuplicateEntry {
                collection: selector,
                definition: self.name.to_owned(),
                entry: entry.name().to_string(),
            });
        }
        self.insert_entry(selector, entry);
        Ok(self)
    }

    /// Overwrites an existing entry in place. Fails if no entry with the same
    /// name exists.
    pub fn replace(
        &mut self,
        selector: Selector,
        entry: impl Into<Entry>,
    ) -> Result<&mut Self> {
        let entry = entry.into();
        self.check_entry(selector, &entry)?;
        if !self.exists(selector, entry.name())? {
            return Err(EditError::EntryNotFound {
                collection: selector,
                definition: self.name.to_owned(),
                entry: entry.name().to_string(),
            });
        }
        self.insert_entry(selector, entry);
        Ok(self)
    }

    /// Overwrites an existing entry in place, or appends it if absent.
    pub fn upsert(
        &mut self,
        selector: Selector,
        entry: impl Into<Entry>,
    ) -> Result<&mut Self> {
        let entry = entry.into();
        self.check_entry(selector, &entry)?;
        self.insert_entry(selector, entry);
        Ok(self)
    }

    /// Removes the named entry if present.
    pub fn delete(&mut self, selector: Selector, name: &str) -> Result<&mut Self> {
        self.collection_mut(selector)?.shift_remove(name);
        Ok(self)
    }

    /// Removes the named entry. Fails if it is absent.
    pub fn remove(&mut self, selector: Selector, name: &str) -> Result<&mut Self> {
        if self.collection_mut(selector)?.shift_remove(name).is_none() {
            return Err(EditError::EntryNotFound {
                collection: selector,
                definition: self.name.to_owned(),
                entry: name.to_string(),
            });
        }
        Ok(self)
    }

    /// Merges `other` into this definition: every sub-collection gains the
    /// entries of `other` whose names it doesn't already have (existing
    /// entries win on collision), and a non-empty description on `other`
    /// replaces this definition's description.
    pub fn extend_with(&mut self, other: &DefinitionEditor) -> Result<&mut Self> {
        self.check_same_kind(other)?;

        for (selector, incoming) in &other.collections {
            let existing = self.collections.entry(*selector).or_default();
            for (name, entry) in incoming {
                if !existing.contains_key(name) {
                    existing.insert(name.to_owned(), entry.clone());
                }
            }
        }

        if let Some(description) = other.description()
            && !description.is_empty()
            && let Some(slot) = description_mut(&mut self.node) {
            *slot = Some(description.to_string());
        }

        Ok(self)
    }

    /// Drops every entry whose name appears in the same sub-collection of
    /// `other`. Names `other` lists that this definition lacks are ignored.
    pub fn exclude_with(&mut self, other: &DefinitionEditor) -> Result<&mut Self> {
        self.check_same_kind(other)?;

        for (selector, incoming) in &other.collections {
            if let Some(existing) = self.collections.get_mut(selector) {
                for name in incoming.keys() {
                    existing.shift_remove(name);
                }
            }
        }

        Ok(self)
    }

    /// Rebuilds the AST node, restoring every sub-collection as an array in
    /// map order.
    pub fn to_definition(&self) -> ast::schema::Definition {
        self.clone().into_definition()
    }

    pub fn into_definition(self) -> ast::schema::Definition {
        let mut node = self.node;
        let mut slots = CollectionSlots::of(&mut node);
        for (selector, entries) in self.collections {
            slots.restore(selector, entries.into_values().collect());
        }
        node
    }

    /// Prints the definition as SDL.
    pub fn print(&self) -> String {
        ast::schema::print_definition(&self.to_definition())
    }

    fn check_entry(&self, selector: Selector, entry: &Entry) -> Result<()> {
        if !self.supports(selector) {
            return Err(self.collection_not_supported(selector));
        }

        let accepted = match (selector, entry) {
            (Selector::Arguments, Entry::InputValue(_)) => true,
            (Selector::Directives, Entry::Directive(_)) => true,
            (Selector::Fields, Entry::Field(_)) => !self.kind.has_input_fields(),
            (Selector::Fields, Entry::InputValue(_)) => self.kind.has_input_fields(),
            (Selector::Interfaces | Selector::Types, Entry::NamedType(_)) => true,
            (Selector::Values, Entry::EnumValue(_)) => true,
            _ => false,
        };
        if !accepted {
            return Err(EditError::MismatchedEntry {
                collection: selector,
                definition: self.name.to_owned(),
                entry_kind: entry.kind_name(),
                kind: self.kind,
            });
        }

        Ok(())
    }

    fn check_same_kind(&self, other: &DefinitionEditor) -> Result<()> {
        if self.kind != other.kind {
            return Err(EditError::KindMismatch {
                existing: self.kind,
                incoming: other.kind,
                name: self.name.to_owned(),
            });
        }
        Ok(())
    }

    // Every selector the kind supports is populated at construction.
    fn collection(&self, selector: Selector) -> Result<&EntryMap> {
        match self.collections.get(&selector) {
            Some(entry_map) => Ok(entry_map),
            None => Err(self.collection_not_supported(selector)),
        }
    }

    fn collection_mut(&mut self, selector: Selector) -> Result<&mut EntryMap> {
        if !self.supports(selector) {
            return Err(self.collection_not_supported(selector));
        }
        Ok(self.collections.entry(selector).or_default())
    }

    fn collection_not_supported(&self, selector: Selector) -> EditError {
        EditError::CollectionNotSupported {
            collection: selector,
            definition: self.name.to_owned(),
            kind: self.kind,
        }
    }

    fn insert_entry(&mut self, selector: Selector, entry: Entry) {
        self.collections
            .entry(selector)
            .or_default()
            .insert(entry.name().to_string(), entry);
    }
}

pub(crate) fn definition_name(def: &ast::schema::Definition) -> Option<&str> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;
    Some(match def {
        Definition::DirectiveDefinition(d) => d.name.as_str(),
        Definition::SchemaDefinition(_) => return None,
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Enum(t) => t.name.as_str(),
            TypeDefinition::InputObject(t) => t.name.as_str(),
            TypeDefinition::Interface(t) => t.name.as_str(),
            TypeDefinition::Object(t) => t.name.as_str(),
            TypeDefinition::Scalar(t) => t.name.as_str(),
            TypeDefinition::Union(t) => t.name.as_str(),
        },
        Definition::TypeExtension(type_ext) => match type_ext {
            TypeExtension::Enum(t) => t.name.as_str(),
            TypeExtension::InputObject(t) => t.name.as_str(),
            TypeExtension::Interface(t) => t.name.as_str(),
            TypeExtension::Object(t) => t.name.as_str(),
            TypeExtension::Scalar(t) => t.name.as_str(),
            TypeExtension::Union(t) => t.name.as_str(),
        },
    })
}

pub(crate) fn directives_of(def: &ast::schema::Definition) -> &[ast::schema::Directive] {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;
    match def {
        Definition::DirectiveDefinition(_) => &[],
        Definition::SchemaDefinition(s) => &s.directives,
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Enum(t) => &t.directives,
            TypeDefinition::InputObject(t) => &t.directives,
            TypeDefinition::Interface(t) => &t.directives,
            TypeDefinition::Object(t) => &t.directives,
            TypeDefinition::Scalar(t) => &t.directives,
            TypeDefinition::Union(t) => &t.directives,
        },
        Definition::TypeExtension(type_ext) => match type_ext {
            TypeExtension::Enum(t) => &t.directives,
            TypeExtension::InputObject(t) => &t.directives,
            TypeExtension::Interface(t) => &t.directives,
            TypeExtension::Object(t) => &t.directives,
            TypeExtension::Scalar(t) => &t.directives,
            TypeExtension::Union(t) => &t.directives,
        },
    }
}

pub(crate) fn directives_mut(
    def: &mut ast::schema::Definition,
) -> Option<&mut Vec<ast::schema::Directive>> {
    CollectionSlots::of(def).directives
}

/// Extensions carry no description.
fn description_of(def: &ast::schema::Definition) -> Option<&str> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    let description = match def {
        Definition::DirectiveDefinition(d) => &d.description,
        Definition::SchemaDefinition(_) | Definition::TypeExtension(_) => return None,
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Enum(t) => &t.description,
            TypeDefinition::InputObject(t) => &t.description,
            TypeDefinition::Interface(t) => &t.description,
            TypeDefinition::Object(t) => &t.description,
            TypeDefinition::Scalar(t) => &t.description,
            TypeDefinition::Union(t) => &t.description,
        },
    };
    description.as_deref()
}

fn description_mut(def: &mut ast::schema::Definition) -> Option<&mut Option<String>> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    Some(match def {
        Definition::DirectiveDefinition(d) => &mut d.description,
        Definition::SchemaDefinition(_) | Definition::TypeExtension(_) => return None,
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Enum(t) => &mut t.description,
            TypeDefinition::InputObject(t) => &mut t.description,
            TypeDefinition::Interface(t) => &mut t.description,
            TypeDefinition::Object(t) => &mut t.description,
            TypeDefinition::Scalar(t) => &mut t.description,
            TypeDefinition::Union(t) => &mut t.description,
        },
    })
}

enum FieldsSlot<'a> {
    Fields(&'a mut Vec<ast::schema::Field>),
    InputFields(&'a mut Vec<ast::schema::InputValue>),
}

/// Mutable handles on the array-typed, name-indexable properties of one
/// definition node. `None` means the node's kind has no such property.
#[derive(Default)]
struct CollectionSlots<'a> {
    arguments: Option<&'a mut Vec<ast::schema::InputValue>>,
    directives: Option<&'a mut Vec<ast::schema::Directive>>,
    fields: Option<FieldsSlot<'a>>,
    interfaces: Option<&'a mut Vec<String>>,
    types: Option<&'a mut Vec<String>>,
    values: Option<&'a mut Vec<ast::schema::EnumValue>>,
}
impl<'a> CollectionSlots<'a> {
    fn of(def: &'a mut ast::schema::Definition) -> Self {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match def {
            Definition::DirectiveDefinition(d) => Self {
                arguments: Some(&mut d.arguments),
                ..Self::default()
            },

            Definition::SchemaDefinition(_) => Self::default(),

            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(t) => Self {
                    directives: Some(&mut t.directives),
                    values: Some(&mut t.values),
                    ..Self::default()
                },
                TypeDefinition::InputObject(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::InputFields(&mut t.fields)),
                    ..Self::default()
                },
                TypeDefinition::Interface(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::Fields(&mut t.fields)),
                    ..Self::default()
                },
                TypeDefinition::Object(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::Fields(&mut t.fields)),
                    interfaces: Some(&mut t.implements_interfaces),
                    ..Self::default()
                },
                TypeDefinition::Scalar(t) => Self {
                    directives: Some(&mut t.directives),
                    ..Self::default()
                },
                TypeDefinition::Union(t) => Self {
                    directives: Some(&mut t.directives),
                    types: Some(&mut t.types),
                    ..Self::default()
                },
            },

            Definition::TypeExtension(type_ext) => match type_ext {
                TypeExtension::Enum(t) => Self {
                    directives: Some(&mut t.directives),
                    values: Some(&mut t.values),
                    ..Self::default()
                },
                TypeExtension::InputObject(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::InputFields(&mut t.fields)),
                    ..Self::default()
                },
                TypeExtension::Interface(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::Fields(&mut t.fields)),
                    ..Self::default()
                },
                TypeExtension::Object(t) => Self {
                    directives: Some(&mut t.directives),
                    fields: Some(FieldsSlot::Fields(&mut t.fields)),
                    interfaces: Some(&mut t.implements_interfaces),
                    ..Self::default()
                },
                TypeExtension::Scalar(t) => Self {
                    directives: Some(&mut t.directives),
                    ..Self::default()
                },
                TypeExtension::Union(t) => Self {
                    directives: Some(&mut t.directives),
                    types: Some(&mut t.types),
                    ..Self::default()
                },
            },
        }
    }

    fn take(&mut self, selector: Selector) -> Vec<Entry> {
        match selector {
            Selector::Arguments => take_slot(&mut self.arguments, Entry::InputValue),
            Selector::Directives => take_slot(&mut self.directives, Entry::Directive),
            Selector::Fields => match &mut self.fields {
                Some(FieldsSlot::Fields(fields)) =>
                    std::mem::take(&mut **fields).into_iter().map(Entry::Field).collect(),
                Some(FieldsSlot::InputFields(fields)) =>
                    std::mem::take(&mut **fields).into_iter().map(Entry::InputValue).collect(),
                None => vec![],
            },
            Selector::Interfaces => take_slot(&mut self.interfaces, Entry::NamedType),
            Selector::Types => take_slot(&mut self.types, Entry::NamedType),
            Selector::Values => take_slot(&mut self.values, Entry::EnumValue),
        }
    }

    // Entries are shape-checked on the way in, so `filter_map` never drops
    // anything here.
    fn restore(&mut self, selector: Selector, entries: Vec<Entry>) {
        match selector {
            Selector::Arguments =>
                restore_slot(&mut self.arguments, entries, Entry::into_input_value),
            Selector::Directives =>
                restore_slot(&mut self.directives, entries, Entry::into_directive),
            Selector::Fields => match &mut self.fields {
                Some(FieldsSlot::Fields(fields)) =>
                    **fields = entries.into_iter().filter_map(Entry::into_field).collect(),
                Some(FieldsSlot::InputFields(fields)) =>
                    **fields = entries.into_iter().filter_map(Entry::into_input_value).collect(),
                None => (),
            },
            Selector::Interfaces =>
                restore_slot(&mut self.interfaces, entries, Entry::into_named_type),
            Selector::Types =>
                restore_slot(&mut self.types, entries, Entry::into_named_type),
            Selector::Values =>
                restore_slot(&mut self.values, entries, Entry::into_enum_value),
        }
    }
}

fn take_slot<T>(slot: &mut Option<&mut Vec<T>>, wrap: fn(T) -> Entry) -> Vec<Entry> {
    match slot {
        Some(items) => std::mem::take(&mut **items).into_iter().map(wrap).collect(),
        None => vec![],
    }
}

fn restore_slot<T>(
    slot: &mut Option<&mut Vec<T>>,
    entries: Vec<Entry>,
    unwrap: fn(Entry) -> Option<T>,
) {
    if let Some(items) = slot {
        **items = entries.into_iter().filter_map(unwrap).collect();
    }
}
