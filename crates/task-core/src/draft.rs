//! Draft Record
//!
//! Create/edit form state and its validation into a request payload.

use std::collections::BTreeMap;

use crate::date::{canonical_to_display, canonical_to_picker, display_to_canonical, display_date, normalize_date_input, parse_display_date};
use crate::task::{Task, TaskId, TaskPayload};

pub const NAME_REQUIRED: &str = "Nome e obrigatorio.";
pub const NAME_DUPLICATE: &str = "Ja existe uma tarefa com esse nome.";
pub const COST_REQUIRED: &str = "Custo e obrigatorio.";
pub const COST_NOT_A_NUMBER: &str = "Custo deve ser um numero.";
pub const COST_NEGATIVE: &str = "Custo deve ser maior ou igual a zero.";
pub const DUE_DATE_INVALID: &str = "Data limite deve estar em dd/MM/yyyy.";

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Cost,
    DueDate,
}

impl Field {
    /// Key used by the API in `errors` maps
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Cost => "custo",
            Field::DueDate => "data_limite",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "nome" => Some(Field::Name),
            "custo" => Some(Field::Cost),
            "data_limite" => Some(Field::DueDate),
            _ => None,
        }
    }
}

/// Per-field error messages, all reported together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error shown when the server reports a name conflict
    pub fn duplicate_name() -> Self {
        let mut errors = Self::new();
        errors.insert(Field::Name, NAME_DUPLICATE);
        errors
    }

    /// Keep the entries of a server `errors` map that name a known field
    pub fn from_server(map: BTreeMap<String, String>) -> Self {
        let mut errors = Self::new();
        for (key, message) in map {
            match Field::from_wire(&key) {
                Some(field) => errors.insert(field, message),
                None => log::warn!("ignoring server error for unknown field {:?}: {}", key, message),
            }
        }
        errors
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Whether the form creates a task or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(TaskId),
}

impl EditorMode {
    pub fn editing_id(&self) -> Option<TaskId> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(*id),
        }
    }
}

/// Free-text form state; nothing here is guaranteed valid until [`Draft::validate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub cost: String,
    /// `DD/MM/YYYY` mask, possibly incomplete
    pub due_date: String,
}

impl Draft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefill from an existing task for editing
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            cost: task.cost.to_string(),
            due_date: display_date(task.due_date),
        }
    }

    /// Apply the typing mask to whatever the date input now holds
    pub fn set_due_date_input(&mut self, raw: &str) {
        self.due_date = normalize_date_input(raw);
    }

    /// Take a `YYYY-MM-DD` value chosen in the native picker
    pub fn set_due_date_from_picker(&mut self, iso: &str) {
        self.due_date = canonical_to_display(iso).unwrap_or_default();
    }

    /// Value that keeps the hidden native picker in sync with the typed date
    pub fn picker_value(&self) -> String {
        display_to_canonical(&self.due_date)
            .and_then(|iso| canonical_to_picker(&iso))
            .unwrap_or_default()
    }

    /// Check every field against `tasks` and build the request payload.
    ///
    /// The task being edited is skipped in the duplicate-name check.
    pub fn validate(&self, tasks: &[Task], editing: Option<TaskId>) -> Result<TaskPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(Field::Name, NAME_REQUIRED);
        } else if is_duplicate_name(name, tasks, editing) {
            errors.insert(Field::Name, NAME_DUPLICATE);
        }

        let cost = match parse_cost(&self.cost) {
            Ok(cost) => Some(cost),
            Err(message) => {
                errors.insert(Field::Cost, message);
                None
            }
        };

        let due_date = parse_display_date(&self.due_date);
        if due_date.is_none() {
            errors.insert(Field::DueDate, DUE_DATE_INVALID);
        }

        match (cost, due_date) {
            (Some(cost), Some(due_date)) if errors.is_empty() => Ok(TaskPayload {
                name: name.to_string(),
                cost,
                due_date,
            }),
            _ => Err(errors),
        }
    }
}

fn is_duplicate_name(name: &str, tasks: &[Task], editing: Option<TaskId>) -> bool {
    let wanted = name.to_lowercase();
    tasks
        .iter()
        .filter(|t| Some(t.id) != editing)
        .any(|t| t.name.trim().to_lowercase() == wanted)
}

fn parse_cost(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(COST_REQUIRED);
    }
    let value: f64 = raw.parse().map_err(|_| COST_NOT_A_NUMBER)?;
    if !value.is_finite() {
        return Err(COST_NOT_A_NUMBER);
    }
    if value < 0.0 {
        return Err(COST_NEGATIVE);
    }
    Ok(value)
}
