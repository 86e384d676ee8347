use crate::ast;
use crate::definition_editor;
use crate::visit;
use crate::visit::AncestorNode;
use crate::ActionKind;
use crate::DefinitionKind;
use crate::DocumentEditor;
use crate::EditError;
use crate::Entry;
use crate::OverrideError;
use crate::Registry;
use crate::Selector;

type Result<T> = std::result::Result<T, OverrideError>;

/// An action directive placed on a type definition or type extension.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAction {
    pub action: ActionKind,
    /// The annotated definition, minus the action directive itself.
    pub definition: ast::schema::Definition,
    pub kind: DefinitionKind,
    pub name: String,
    pub registry: Registry,
}

/// An action directive placed on a field, input value, or enum value.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldAction {
    pub action: ActionKind,
    /// The annotated entry, minus the action directive itself.
    pub entry: Entry,
    pub registry: Registry,
    pub selector: Selector,
    /// Name of the type (or extension) enclosing the entry.
    pub type_name: String,
    /// Whether the enclosing definition node itself carries an action
    /// directive.
    pub within_type_action: bool,
}

/// The classified, queued actions of an overrides document.
///
/// Actions are applied in a fixed phase order regardless of where they appear
/// in the overrides document: type-level actions in
/// [ActionKind::TYPE_PHASES] order, then field-level actions in
/// [ActionKind::FIELD_PHASES] order. Within a phase, actions apply in the
/// order they appear in the document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverridePlan {
    field_actions: Vec<FieldAction>,
    type_actions: Vec<TypeAction>,
}
impl OverridePlan {
    /// Collects every action directive in `overrides`. Fails without side
    /// effects if any directive is misplaced or if a single type node carries
    /// both a type-level action and field-level actions on its own members.
    /// Separate nodes for the same type name may mix the two freely.
    pub fn from_document(overrides: &ast::schema::Document) -> Result<Self> {
        let mut plan = Self::default();
        visit::walk_document(overrides, &mut plan)?;
        plan.check_unambiguous()?;

        log::debug!(
            "Classified {} type action(s) and {} field action(s).",
            plan.type_actions.len(),
            plan.field_actions.len(),
        );
        Ok(plan)
    }

    pub fn field_actions(&self) -> &[FieldAction] {
        self.field_actions.as_slice()
    }

    pub fn type_actions(&self) -> &[TypeAction] {
        self.type_actions.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.field_actions.is_empty() && self.type_actions.is_empty()
    }

    /// Applies every queued action to `doc` in phase order. Stops at the
    /// first failure, which may leave `doc` partially edited.
    pub fn apply(&self, doc: &mut DocumentEditor) -> Result<()> {
        for phase in ActionKind::TYPE_PHASES {
            for type_action in self.type_actions.iter().filter(|a| a.action == phase) {
                log::trace!(
                    "Applying {phase} to `{}` in {}.",
                    type_action.name,
                    type_action.registry,
                );
                apply_type_action(doc, type_action)?;
            }
        }

        for phase in ActionKind::FIELD_PHASES {
            for field_action in self.field_actions.iter().filter(|a| a.action == phase) {
                log::trace!(
                    "Applying {phase} to `{}.{}` ({}) in {}.",
                    field_action.type_name,
                    field_action.entry.name(),
                    field_action.selector,
                    field_action.registry,
                );
                apply_field_action(doc, field_action)?;
            }
        }

        Ok(())
    }

    fn check_unambiguous(&self) -> Result<()> {
        match self.field_actions.iter().find(|a| a.within_type_action) {
            Some(field_action) => Err(OverrideError::AmbiguousOverride {
                type_name: field_action.type_name.to_owned(),
            }),
            None => Ok(()),
        }
    }

    fn record_type_action(
        &mut self,
        action: ActionKind,
        parent: &ast::schema::Definition,
        index: usize,
    ) -> Result<()> {
        let kind = DefinitionKind::of(parent)?;
        let mut definition = parent.clone();
        if let Some(directives) = definition_editor::directives_mut(&mut definition) {
            directives.remove(index);
        }
        self.type_actions.push(TypeAction {
            action,
            definition,
            kind,
            name: definition_editor::definition_name(parent)
                .unwrap_or("unnamed")
                .to_string(),
            registry: kind.registry(),
        });
        Ok(())
    }

    fn record_field_action(
        &mut self,
        action: ActionKind,
        grandparent: &ast::schema::Definition,
        parent: &AncestorNode<'_>,
        index: usize,
    ) -> Result<()> {
        let kind = DefinitionKind::of(grandparent)?;
        let type_name = definition_editor::definition_name(grandparent)
            .unwrap_or("unnamed")
            .to_string();

        let (selector, entry) = match parent {
            AncestorNode::Field(field) => {
                let mut field = (*field).clone();
                field.directives.remove(index);
                (Selector::Fields, Entry::Field(field))
            },
            AncestorNode::InputValue(input_value) => {
                let mut input_value = (*input_value).clone();
                input_value.directives.remove(index);
                (Selector::Fields, Entry::InputValue(input_value))
            },
            AncestorNode::EnumValue(enum_value) => {
                let mut enum_value = (*enum_value).clone();
                enum_value.directives.remove(index);
                (Selector::Values, Entry::EnumValue(enum_value))
            },
            AncestorNode::Definition(def) => return Err(
                OverrideError::InvalidActionTarget {
                    action,
                    target: describe_definition(def),
                }
            ),
        };

        if !action.applies_to_entries() {
            return Err(OverrideError::UnsupportedFieldAction {
                action,
                entry: entry.name().to_string(),
                type_name,
            });
        }

        let within_type_action = definition_editor::directives_of(grandparent)
            .iter()
            .any(|directive| ActionKind::from_directive_name(directive.name.as_str()).is_some());

        self.field_actions.push(FieldAction {
            action,
            entry,
            registry: kind.registry(),
            selector,
            type_name,
            within_type_action,
        });
        Ok(())
    }
}
impl<'a> visit::SchemaVisitor<'a> for OverridePlan {
    type Error = OverrideError;

    fn visit_directive(
        &mut self,
        directive: &'a ast::schema::Directive,
        index: usize,
        ancestors: &[AncestorNode<'a>],
    ) -> Result<()> {
        let Some(action) = ActionKind::from_directive_name(directive.name.as_str()) else {
            return Ok(());
        };

        match ancestors {
            [.., AncestorNode::Definition(parent)] if is_type_level(parent) =>
                self.record_type_action(action, parent, index),

            [.., AncestorNode::Definition(grandparent), parent]
                if is_type_level(grandparent) =>
                self.record_field_action(action, grandparent, parent, index),

            _ => Err(OverrideError::InvalidActionTarget {
                action,
                target: describe_target(ancestors),
            }),
        }
    }
}

fn apply_type_action(doc: &mut DocumentEditor, type_action: &TypeAction) -> Result<()> {
    let registry = type_action.registry;
    let definition = || type_action.definition.clone();
    match type_action.action {
        ActionKind::Create => { doc.create(registry, definition())?; },
        ActionKind::Delete => { doc.delete(registry, type_action.name.as_str()); },
        ActionKind::Exclude => { doc.exclude(registry, definition())?; },
        ActionKind::Extend => { doc.extend(registry, definition())?; },
        ActionKind::Remove => { doc.remove(registry, type_action.name.as_str())?; },
        ActionKind::Replace => { doc.replace(registry, definition())?; },
        ActionKind::Upsert => { doc.upsert(registry, definition())?; },
    }
    Ok(())
}

fn apply_field_action(doc: &mut DocumentEditor, field_action: &FieldAction) -> Result<()> {
    let def_editor = doc
        .get_mut(field_action.registry, field_action.type_name.as_str())
        .ok_or_else(|| EditError::NotFound {
            name: field_action.type_name.to_owned(),
            registry: field_action.registry,
        })?;

    let selector = field_action.selector;
    let entry = &field_action.entry;
    match field_action.action {
        ActionKind::Create => { def_editor.create(selector, entry.clone())?; },
        ActionKind::Delete => { def_editor.delete(selector, entry.name())?; },
        ActionKind::Remove => { def_editor.remove(selector, entry.name())?; },
        ActionKind::Replace => { def_editor.replace(selector, entry.clone())?; },
        ActionKind::Upsert => { def_editor.upsert(selector, entry.clone())?; },
        ActionKind::Exclude | ActionKind::Extend => {
            return Err(OverrideError::UnsupportedFieldAction {
                action: field_action.action,
                entry: entry.name().to_string(),
                type_name: field_action.type_name.to_owned(),
            });
        },
    }
    Ok(())
}

fn is_type_level(def: &ast::schema::Definition) -> bool {
    matches!(
        def,
        ast::schema::Definition::TypeDefinition(_)
        | ast::schema::Definition::TypeExtension(_)
    )
}

fn describe_definition(def: &ast::schema::Definition) -> String {
    match DefinitionKind::of(def) {
        Ok(kind) => format!(
            "{kind} `{}`",
            definition_editor::definition_name(def).unwrap_or("unnamed"),
        ),
        Err(_) => "the schema definition".to_string(),
    }
}

fn describe_target(ancestors: &[AncestorNode<'_>]) -> String {
    let mut parts = ancestors.iter()
        .rev()
        .map(|node| match node {
            AncestorNode::Definition(def) => describe_definition(def),
            AncestorNode::EnumValue(v) => format!("enum value `{}`", v.name),
            AncestorNode::Field(f) => format!("field `{}`", f.name),
            AncestorNode::InputValue(v) => format!("input value `{}`", v.name),
        });
    let target = parts.next().unwrap_or_else(|| "an unknown node".to_string());
    let context = parts.collect::<Vec<_>>();
    if context.is_empty() {
        target
    } else {
        format!("{target} (in {})", context.join(" in "))
    }
}
