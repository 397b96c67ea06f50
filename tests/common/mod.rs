//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const SESSION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Builder for a temporary assistant home: fixture file, config and history location
pub struct AssistantHomeBuilder {
    temp_dir: TempDir,
    responses: Vec<Value>,
    default: Option<Value>,
    fail: Vec<String>,
    history_lines: Vec<String>,
}

impl AssistantHomeBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, responses: Vec::new(), default: None, fail: Vec::new(), history_lines: Vec::new() }
    }

    /// Canned answer for `query` in every mode
    pub fn with_response(mut self, query: &str, response: ResponseBuilder) -> Self {
        let mut value = response.to_json();
        value["query"] = json!(query);
        self.responses.push(value);
        self
    }

    /// Canned answer for `query` in one mode (`document_search` or `inquiry`)
    pub fn with_mode_response(mut self, query: &str, mode: &str, response: ResponseBuilder) -> Self {
        let mut value = response.to_json();
        value["query"] = json!(query);
        value["mode"] = json!(mode);
        self.responses.push(value);
        self
    }

    pub fn with_default(mut self, response: ResponseBuilder) -> Self {
        self.default = Some(response.to_json());
        self
    }

    /// Make the backend fail for `query`
    pub fn with_failure(mut self, query: &str) -> Self {
        self.fail.push(query.to_string());
        self
    }

    /// Pre-existing raw history line
    pub fn with_history_line(mut self, line: &str) -> Self {
        self.history_lines.push(line.to_string());
        self
    }

    pub fn build(self) -> AssistantHome {
        let root = self.temp_dir.path();
        let fixture = json!({
            "responses": self.responses,
            "default": self.default,
            "fail": self.fail,
        });
        fs::write(root.join("fixture.json"), fixture.to_string()).expect("Failed to write fixture");

        if !self.history_lines.is_empty() {
            let mut content = self.history_lines.join("\n");
            content.push('\n');
            fs::write(root.join("history.jsonl"), content).expect("Failed to write history");
        }

        AssistantHome { temp_dir: self.temp_dir }
    }
}

impl Default for AssistantHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AssistantHome {
    temp_dir: TempDir,
}

impl AssistantHome {
    /// Directory to use as `DOCS_ASSISTANT_HOME`
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn fixture_path(&self) -> PathBuf {
        self.path().join("fixture.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.path().join("history.jsonl")
    }

    pub fn fixture_json(&self) -> String {
        fs::read_to_string(self.fixture_path()).expect("Failed to read fixture")
    }
}

/// Builder for one backend answer
pub struct ResponseBuilder {
    answer: String,
    context: Vec<(String, Option<u32>)>,
}

impl ResponseBuilder {
    pub fn new(answer: &str) -> Self {
        Self { answer: answer.to_string(), context: Vec::new() }
    }

    pub fn doc(mut self, source: &str, page: Option<u32>) -> Self {
        self.context.push((source.to_string(), page));
        self
    }

    pub fn to_json(&self) -> Value {
        let context: Vec<Value> = self
            .context
            .iter()
            .map(|(source, page)| match page {
                Some(page) => json!({"metadata": {"source": source, "page": page}}),
                None => json!({"metadata": {"source": source}}),
            })
            .collect();
        json!({"answer": self.answer, "context": context})
    }
}

/// Office-like fixture used across tests
pub fn realistic_home() -> AssistantHome {
    AssistantHomeBuilder::new()
        .with_response(
            "onboarding",
            ResponseBuilder::new("The onboarding guide covers the first week.")
                .doc("hr/onboarding.pdf", Some(2))
                .doc("hr/checklist.xlsx", None)
                .doc("hr/onboarding.pdf", Some(9))
                .doc("wiki/welcome.md", None),
        )
        .with_response(
            "leave policy",
            ResponseBuilder::new("Employees get ten days of paid leave.")
                .doc("policies/leave.pdf", Some(4))
                .doc("policies/leave.pdf", Some(5))
                .doc("faq.txt", None),
        )
        .with_default(ResponseBuilder::new("No matching documents found."))
        .with_failure("backend down")
        .build()
}
