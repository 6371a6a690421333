//! Message template rendering.
//!
//! Every delivered repository uses the same four-line layout:
//!
//! ```text
//! {full_name}: {description}
//! Author: {owner.login}
//! ⭐: {stargazers_count}
//! {html_url}
//! ```
//!
//! Rendering fails closed: a record missing any referenced field produces
//! [`RenderError::TemplateFieldMissing`] instead of a partial message.

use std::fmt;

use repobot_types::error::RenderError;
use repobot_types::repo::RepoRecord;

use super::selector::ResultBatch;

/// Text ready to hand to the chat transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage(String);

impl RenderedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of rendering a whole batch.
///
/// Failed records are reported alongside the successes; they never abort
/// the rest of the batch.
#[derive(Debug, Default)]
pub struct RenderedBatch {
    pub messages: Vec<RenderedMessage>,
    pub failures: Vec<RenderFailure>,
}

/// A record that could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    /// Position of the record within the batch.
    pub index: usize,
    /// The record's `full_name`, when it has one.
    pub full_name: Option<String>,
    pub error: RenderError,
}

/// Render one record. Fields are checked in template order.
pub fn render(record: &RepoRecord) -> Result<RenderedMessage, RenderError> {
    let full_name = require(record.full_name.as_deref(), "full_name")?;
    let description = require(record.description.as_deref(), "description")?;
    let login = require(record.owner_login(), "owner.login")?;
    let stars = record
        .stargazers_count
        .ok_or(RenderError::TemplateFieldMissing {
            field: "stargazers_count",
        })?;
    let url = require(record.html_url.as_deref(), "html_url")?;

    Ok(RenderedMessage(format!(
        "{full_name}: {description}\nAuthor: {login}\n⭐: {stars}\n{url}"
    )))
}

/// Render every record in the batch, preserving batch order.
pub fn render_batch(batch: &ResultBatch) -> RenderedBatch {
    let mut rendered = RenderedBatch::default();

    for (index, record) in batch.iter().enumerate() {
        match render(record) {
            Ok(message) => rendered.messages.push(message),
            Err(error) => {
                tracing::warn!(
                    index,
                    repo = record.full_name.as_deref().unwrap_or("<unnamed>"),
                    error = %error,
                    "skipping repository that cannot be rendered"
                );
                rendered.failures.push(RenderFailure {
                    index,
                    full_name: record.full_name.clone(),
                    error,
                });
            }
        }
    }

    rendered
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, RenderError> {
    value.ok_or(RenderError::TemplateFieldMissing { field })
}
