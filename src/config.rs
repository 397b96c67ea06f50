//! Application configuration.
//!
//! Loaded from a TOML file with every field optional. Resolution order:
//!
//! 1. Built-in defaults
//! 2. The file given with `--config`, or `<config dir>/docs-assistant/config.toml` if present
//! 3. Environment overrides (`DOCS_ASSISTANT_BACKEND_URL`, `DOCS_ASSISTANT_HOME`)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::AnswerMode;
use crate::utils::environment::{BACKEND_URL_VAR, data_dir};

const CONFIG_FILENAME: &str = "config.toml";
const HISTORY_FILENAME: &str = "history.jsonl";
const LOG_FILENAME: &str = "docs-assistant.log";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub messages: Messages,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Answer text the backend emits when document search finds nothing
    #[serde(default = "default_search_no_match_answer")]
    pub search_no_match_answer: String,
    /// Answer text the backend emits when an inquiry has no grounding
    #[serde(default = "default_inquiry_no_match_answer")]
    pub inquiry_no_match_answer: String,
}

impl BackendConfig {
    pub fn no_match_answer(&self, mode: AnswerMode) -> &str {
        match mode {
            AnswerMode::DocumentSearch => &self.search_no_match_answer,
            AnswerMode::Inquiry => &self.inquiry_no_match_answer,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            search_no_match_answer: default_search_no_match_answer(),
            inquiry_no_match_answer: default_inquiry_no_match_answer(),
        }
    }
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_timeout_secs() -> u64 {
    120
}
fn default_search_no_match_answer() -> String {
    "No matching documents found.".to_string()
}
fn default_inquiry_no_match_answer() -> String {
    "I could not find information in the internal documents to answer that question."
        .to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub history_path: Option<PathBuf>,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

/// Every user-visible sentence the assistant prints
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub app_name: String,
    pub greeting: String,
    pub input_hint: String,
    pub input_placeholder: String,
    pub waiting: String,
    pub search_intro: String,
    pub secondary_intro: String,
    pub no_doc_match: String,
    pub sources_label: String,
    pub search_description: String,
    pub search_example: String,
    pub inquiry_description: String,
    pub inquiry_example: String,
    pub backend_error: String,
    pub history_error: String,
    pub render_error: String,
    pub empty_query: String,
    pub error_suffix: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            app_name: "Internal Docs Assistant".to_string(),
            greeting: "Hello. I answer using the information in our internal documents. \
                       Pick a mode in the sidebar and send a message below."
                .to_string(),
            input_hint: "More specific input tends to give the answer you expect.".to_string(),
            input_placeholder: "Type your message and press Enter".to_string(),
            waiting: "Generating an answer...".to_string(),
            search_intro: "Information related to your input may be in the following file."
                .to_string(),
            secondary_intro: "Other candidate file locations:".to_string(),
            no_doc_match: "No document matching your input was found. \
                           Please rephrase and try again."
                .to_string(),
            sources_label: "Sources".to_string(),
            search_description: "Find where internal documents related to your input are."
                .to_string(),
            search_example: "Minutes of the meeting on staff development policy".to_string(),
            inquiry_description: "Get answers to questions based on internal documents."
                .to_string(),
            inquiry_example: "List the employees in the HR department".to_string(),
            backend_error: "Failed to get an answer.".to_string(),
            history_error: "Failed to save the conversation.".to_string(),
            render_error: "Failed to display the conversation log.".to_string(),
            empty_query: "Please enter a message before sending.".to_string(),
            error_suffix: "If the problem persists, contact your administrator.".to_string(),
        }
    }
}

impl Messages {
    /// Description and input example shown next to a mode in the sidebar
    pub fn mode_help(&self, mode: AnswerMode) -> (&str, &str) {
        match mode {
            AnswerMode::DocumentSearch => (&self.search_description, &self.search_example),
            AnswerMode::Inquiry => (&self.inquiry_description, &self.inquiry_example),
        }
    }

    /// User-facing error text: `base` followed by the standard suffix
    pub fn error_message(&self, base: &str) -> String {
        format!("{}\n{}", base, self.error_suffix)
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_VAR)
            && !url.trim().is_empty()
        {
            self.backend.url = url;
        }
    }

    pub fn history_path(&self) -> Result<PathBuf> {
        match &self.storage.history_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(HISTORY_FILENAME)),
        }
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.storage.log_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(LOG_FILENAME)),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docs-assistant").join(CONFIG_FILENAME))
}
