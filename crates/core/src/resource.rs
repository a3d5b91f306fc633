//! Static description of a CRUD resource.
//!
//! A [`ResourceDescriptor`] carries everything the generic repository,
//! service and handlers need to know about one table: its columns, the
//! fields required on create, the extra lookup routes it exposes and the
//! exact messages returned to clients.

/// SQL type family of a column, used to cast bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Boolean,
}

impl ColumnKind {
    /// PostgreSQL type name used in `$n::<type>` casts.
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnKind::Integer => "bigint",
            ColumnKind::Text => "text",
            ColumnKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// How a required create field is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Present, a string, and non-empty once trimmed.
    NonBlank,
    /// Present and truthy: not `null`, `false`, `0` or `""`.
    Truthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub requirement: Requirement,
}

/// Secondary-key lookup returning a single row, e.g. `/number/{number}`.
#[derive(Debug, Clone, Copy)]
pub struct KeyLookup {
    /// Static route segment placed before the key (`number`).
    pub segment: &'static str,
    pub column: &'static str,
    /// 400 message when the key is blank.
    pub invalid_key: &'static str,
    /// Service-level message when the store fails.
    pub store_failed: &'static str,
}

/// Equality-filtered list, e.g. `/quizz/{id}` on answers.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    /// Static route segment placed before the id (`quizz`).
    pub segment: &'static str,
    pub column: &'static str,
    /// 400 message when the id is not a number.
    pub invalid_id: &'static str,
    /// 500 message when the store fails.
    pub failed: &'static str,
    /// Service-level message when the store fails.
    pub store_failed: &'static str,
}

/// Client-facing messages for every branch of the CRUD handlers.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub invalid_id: &'static str,
    pub not_found: &'static str,

    pub list_failed: &'static str,
    pub get_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,

    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,

    pub create_rejected: &'static str,
    pub update_rejected: &'static str,
    pub delete_rejected: &'static str,
}

/// Messages attached to service errors. Logged, never sent to clients.
#[derive(Debug, Clone, Copy)]
pub struct StoreMessages {
    pub list: &'static str,
    pub get: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

#[derive(Debug)]
pub struct ResourceDescriptor {
    /// Entity name used in logs and error values.
    pub entity: &'static str,
    pub table: &'static str,
    /// Selected columns, `id` first.
    pub columns: &'static [Column],
    pub required: &'static [RequiredField],
    pub lookup: Option<KeyLookup>,
    pub filters: &'static [Filter],
    pub messages: Messages,
    pub store_messages: StoreMessages,
}

impl ResourceDescriptor {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Comma-separated column list for `SELECT` statements.
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn filter(&self, segment: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.segment == segment)
    }
}
