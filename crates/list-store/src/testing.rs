//! Test doubles for the platform seams.

use std::collections::VecDeque;

use crate::dialogs::Dialogs;
use crate::error::StorageError;
use crate::location::AddressBar;
use crate::storage::KeyValueStore;

/// Storage that fails every call, like a browser with storage disabled
#[derive(Debug, Default)]
pub struct FailingStore {
    pub writes: usize,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            reason: "SecurityError".to_string(),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

/// Address bar holding a fixed query string
#[derive(Debug, Default)]
pub struct MemoryAddressBar {
    pub base: String,
    pub query: String,
    pub stripped: bool,
}

impl MemoryAddressBar {
    pub fn with_query(query: &str) -> Self {
        Self {
            base: "https://groceries.example/app/".to_string(),
            query: query.to_string(),
            stripped: false,
        }
    }
}

impl AddressBar for MemoryAddressBar {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn base_url(&self) -> String {
        self.base.clone()
    }

    fn strip_query(&mut self) {
        self.query.clear();
        self.stripped = true;
    }
}

/// Dialogs answering from a script; records every question asked
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub confirms: VecDeque<bool>,
    pub prompts: VecDeque<Option<String>>,
    pub asked: Vec<String>,
    pub defaults: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedDialogs {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirms: VecDeque::from([answer]),
            ..Default::default()
        }
    }

    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            prompts: answers.iter().map(|a| a.map(str::to_string)).collect(),
            ..Default::default()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }

    fn prompt_field(&mut self, label: &str, default: &str) -> Option<String> {
        self.asked.push(label.to_string());
        self.defaults.push(default.to_string());
        self.prompts.pop_front().flatten()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
