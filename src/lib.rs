#![doc(
    html_logo_url = "https://apps.fedoraproject.org/img/icons/fedmsg.png",
    issue_tracker_base_url = "https://github.com/fedora-infra/topics-doc/issues/"
)]

//! Generates the reference document of every fedmsg topic.
//!
//! Each fixture record pairs an example bus message with the outputs
//! `fedmsg.meta` is expected to compute for it (title, subtitle, link,
//! agent, usernames, packages, objects, icons). This crate turns a set of
//! such records into one reStructuredText document, grouped by topic
//! namespace, so the published reference cannot drift from the tests that
//! define topic semantics.
//!
//! ## Modules
//!
//! - [`expected`] - The `Unspecified` sentinel and cell display text
//! - [`fixture`] - Fixture records and their expected outputs
//! - [`normalize`] - Environment rewriting, topic stripping and filtering
//! - [`group`] - Ordering and partitioning into sections
//! - [`layout`] - Aligned metadata tables and image directives
//! - [`link`] - Datagrepper cross-reference sentences
//! - [`assemble`] - The document assembler and `generate_document`
//! - [`sink`] - Line sinks (in-memory and staged file)
//! - [`token`] - Per-entry substitution tokens
//! - [`config`] - Generator configuration
//! - [`errors`] - Error types
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use topics_doc::{generate_document, DocConfig, FixtureRecord};
//!
//! # fn main() -> Result<(), topics_doc::DocError> {
//! let records: Vec<FixtureRecord> = Vec::new(); // from your fixture loader
//! let written = generate_document(Path::new("doc"), records, &DocConfig::default())?;
//! println!("{} topics", written.report.topics);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod config;
pub mod errors;
pub mod expected;
pub mod fixture;
pub mod group;
pub mod layout;
pub mod link;
pub mod normalize;
pub mod sink;
pub mod token;

pub use assemble::{
    generate_document, generate_document_with_tokens, AssemblyReport, DocumentAssembler,
    GeneratedDocument, PreparedDocument,
};
pub use config::DocConfig;
pub use errors::{DocError, DocResult};
pub use expected::{CellText, Expected, UNSPECIFIED};
pub use fixture::{ExpectedOutputs, FixtureRecord, Message};
pub use group::{group_sections, order_entries, Section};
pub use layout::MetadataTable;
pub use link::datagrepper_link;
pub use normalize::{Normalized, Normalizer, SkipReason, StrippedTopic, TopicEntry};
pub use sink::{FileSink, LineSink, MemorySink};
pub use token::{SequentialTokens, TokenSource, UuidTokens};
