use crate::compare::ComparisonTable;
use crate::index::DisplaySpecies;
use crate::model::Species;
use crate::recommend::RegionSuggestion;

pub mod compare;
pub mod export;
pub mod list;
pub mod recommend;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output. Commands fill in the fields they produce and
/// stay silent about presentation; the CLI decides how each field is shown.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<DisplaySpecies>,
    pub cards: Vec<Species>,
    pub table: Option<ComparisonTable>,
    pub suggestions: Vec<RegionSuggestion>,
    pub payload: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<DisplaySpecies>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_cards(mut self, cards: Vec<Species>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_table(mut self, table: ComparisonTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<RegionSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_payload(mut self, payload: String) -> Self {
        self.payload = Some(payload);
        self
    }
}
