//! Canonicalization and filtering of fixture records.

use crate::config::DocConfig;
use crate::expected::Expected;
use crate::fixture::{ExpectedOutputs, FixtureRecord, Message};
use crate::{DocError, DocResult};
use serde_json::Value;
use std::fmt;

/// A topic with its namespace and environment prefix removed, e.g. `git.branch`.
///
/// Ordering is lexicographic on the segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrippedTopic {
    segments: Vec<String>,
}

impl StrippedTopic {
    /// Drop the first `prefix_depth` segments of a dotted topic.
    ///
    /// Returns `None` unless at least one non-empty segment remains.
    pub fn parse(topic: &str, prefix_depth: usize) -> Option<Self> {
        let segments: Vec<String> = topic
            .split('.')
            .skip(prefix_depth)
            .map(str::to_string)
            .collect();
        match segments.first() {
            Some(first) if !first.is_empty() => Some(Self { segments }),
            _ => None,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Key of the document section this topic belongs to.
    pub fn section(&self) -> &str {
        &self.segments[0]
    }

    /// Category queried in datagrepper. Same segment as the section key.
    pub fn category(&self) -> &str {
        self.section()
    }
}

impl fmt::Display for StrippedTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// A fixture that passed normalization and will be documented.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub name: String,
    /// Fully-qualified topic, rewritten to the production environment
    pub topic: String,
    pub stripped: StrippedTopic,
    pub message: Message,
    pub doc: Option<String>,
    pub expected: ExpectedOutputs,
}

/// Why a fixture was left out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnspecifiedMessage,
    Legacy,
    NoDoc,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnspecifiedMessage => write!(f, "no example message"),
            SkipReason::Legacy => write!(f, "legacy message format"),
            SkipReason::NoDoc => write!(f, "marked nodoc"),
        }
    }
}

/// Outcome of normalizing one record.
#[derive(Debug, Clone)]
pub enum Normalized {
    Keep(TopicEntry),
    Skip { name: String, reason: SkipReason },
}

/// Rewrites environment markers and filters records that are not documented.
pub struct Normalizer<'c> {
    config: &'c DocConfig,
}

impl<'c> Normalizer<'c> {
    pub fn new(config: &'c DocConfig) -> Self {
        Self { config }
    }

    /// Rewrite every `.stg.` / `.dev.` segment to `.prod.`.
    pub fn canonicalize(&self, text: &str) -> String {
        let production = format!(".{}.", self.config.production_marker);
        self.config
            .environment_markers
            .iter()
            .fold(text.to_string(), |acc, marker| {
                acc.replace(&format!(".{}.", marker), &production)
            })
    }

    /// Normalize a record, or report why it is excluded.
    ///
    /// A specified message must carry a string `topic` even when the record
    /// is excluded. Segment count is only checked for records that are kept.
    pub fn normalize(&self, record: FixtureRecord) -> DocResult<Normalized> {
        let exclusion = if record.is_legacy() {
            Some(SkipReason::Legacy)
        } else if record.nodoc {
            Some(SkipReason::NoDoc)
        } else {
            None
        };

        let FixtureRecord {
            name,
            message,
            doc,
            mut expected,
            ..
        } = record;
        let mut message = match message {
            Expected::Specified(message) => message,
            Expected::Unspecified => {
                return Ok(Normalized::Skip {
                    name,
                    reason: exclusion.unwrap_or(SkipReason::UnspecifiedMessage),
                })
            }
        };

        let topic = match message.get("topic") {
            Some(Value::String(topic)) => self.canonicalize(topic),
            Some(other) => {
                return Err(DocError::malformed(
                    &name,
                    format!("message topic is not a string: {}", other),
                ))
            }
            None => return Err(DocError::malformed(&name, "message has no `topic` field")),
        };
        if let Some(reason) = exclusion {
            return Ok(Normalized::Skip { name, reason });
        }

        let stripped = StrippedTopic::parse(&topic, self.config.prefix_depth).ok_or_else(|| {
            DocError::malformed(
                &name,
                format!(
                    "topic {:?} needs more than {} dot-separated segments",
                    topic, self.config.prefix_depth
                ),
            )
        })?;
        message.insert("topic".to_string(), Value::String(topic.clone()));

        if let Some(Some(title)) = expected.title.as_specified_mut() {
            *title = self.canonicalize(title);
        }

        Ok(Normalized::Keep(TopicEntry {
            name,
            topic,
            stripped,
            message,
            doc,
            expected,
        }))
    }
}
