use crate::config::KennelConfig;
use crate::model::{Breed, Dog};
use std::path::PathBuf;

pub mod add;
pub mod breeds;
pub mod config;
pub mod export;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;
pub mod view;
pub mod wishlist;

#[derive(Debug, Clone)]
pub struct KennelPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_dogs: Vec<Dog>,
    pub listed_dogs: Vec<Dog>,
    pub breeds: Vec<Breed>,
    pub export_path: Option<PathBuf>,
    pub config: Option<KennelConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_dogs(mut self, dogs: Vec<Dog>) -> Self {
        self.affected_dogs = dogs;
        self
    }

    pub fn with_listed_dogs(mut self, dogs: Vec<Dog>) -> Self {
        self.listed_dogs = dogs;
        self
    }

    pub fn with_breeds(mut self, breeds: Vec<Breed>) -> Self {
        self.breeds = breeds;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: KennelConfig) -> Self {
        self.config = Some(config);
        self
    }
}
