//! Core types for fixture records.
//!
//! A fixture pairs one example bus message with the outputs the formatting
//! layer is expected to compute for it. Records arrive from whatever
//! discovery mechanism the caller uses and are consumed exactly once.

use crate::expected::Expected;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A message payload: a JSON object.
pub type Message = Map<String, Value>;

/// One documented topic example.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    /// Type name of the fixture (e.g. `TestGitBranch`)
    pub name: String,
    /// The example payload; `Unspecified` for fixtures that carry no message
    #[serde(default, rename = "msg")]
    pub message: Expected<Message>,
    /// Free-text description
    #[serde(default)]
    pub doc: Option<String>,
    /// Exclude this fixture from the document
    #[serde(default)]
    pub nodoc: bool,
    /// What the formatting layer should produce for `message`
    #[serde(flatten)]
    pub expected: ExpectedOutputs,
}

/// Expected outputs of the formatting layer for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpectedOutputs {
    #[serde(rename = "expected_title")]
    pub title: Expected<Option<String>>,
    #[serde(rename = "expected_subtitle", alias = "expected_subti")]
    pub subtitle: Expected<Option<String>>,
    #[serde(rename = "expected_link")]
    pub link: Expected<Option<String>>,
    #[serde(rename = "expected_agent")]
    pub agent: Expected<Option<String>>,
    #[serde(rename = "expected_usernames")]
    pub usernames: Expected<BTreeSet<String>>,
    #[serde(rename = "expected_packages")]
    pub packages: Expected<BTreeSet<String>>,
    #[serde(rename = "expected_objects")]
    pub objects: Expected<BTreeSet<String>>,
    #[serde(rename = "expected_icon")]
    pub icon: Expected<String>,
    #[serde(rename = "expected_secondary_icon")]
    pub secondary_icon: Expected<String>,
}

impl FixtureRecord {
    /// Create a record with no message and nothing expected.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            message: Expected::Unspecified,
            doc: None,
            nodoc: false,
            expected: ExpectedOutputs::default(),
        }
    }

    /// Set the example payload.
    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Expected::Specified(message);
        self
    }

    /// Set the description.
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    /// Exclude the record from the document.
    pub fn without_doc(mut self) -> Self {
        self.nodoc = true;
        self
    }

    /// Set the expected outputs.
    pub fn with_expected(mut self, expected: ExpectedOutputs) -> Self {
        self.expected = expected;
        self
    }

    /// Fixtures for retired message formats are kept for regression testing
    /// only and never documented.
    pub fn is_legacy(&self) -> bool {
        self.name.contains("Legacy")
    }
}

impl ExpectedOutputs {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Expected::Specified(Some(title.to_string()));
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Expected::Specified(Some(subtitle.to_string()));
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Expected::Specified(Some(link.to_string()));
        self
    }

    pub fn with_agent(mut self, agent: &str) -> Self {
        self.agent = Expected::Specified(Some(agent.to_string()));
        self
    }

    pub fn with_usernames(mut self, usernames: &[&str]) -> Self {
        self.usernames = Expected::Specified(to_set(usernames));
        self
    }

    pub fn with_packages(mut self, packages: &[&str]) -> Self {
        self.packages = Expected::Specified(to_set(packages));
        self
    }

    pub fn with_objects(mut self, objects: &[&str]) -> Self {
        self.objects = Expected::Specified(to_set(objects));
        self
    }

    pub fn with_icon(mut self, url: &str) -> Self {
        self.icon = Expected::Specified(url.to_string());
        self
    }

    pub fn with_secondary_icon(mut self, url: &str) -> Self {
        self.secondary_icon = Expected::Specified(url.to_string());
        self
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
