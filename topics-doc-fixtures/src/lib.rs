#![doc(
    html_logo_url = "https://apps.fedoraproject.org/img/icons/fedmsg.png",
    issue_tracker_base_url = "https://github.com/fedora-infra/topics-doc/issues/"
)]

//! Fixture discovery for topics-doc.
//!
//! Fixture records are stored as JSON arrays in `*.json` files. Each record
//! carries the example message under `msg` and the expected `fedmsg.meta`
//! outputs under `expected_*` keys; a key that is absent is Unspecified.
//!
//! ## Modules
//!
//! - [`loader`] - Loading fixture files from a directory tree
//! - [`errors`] - Error types for loading

pub mod errors;
pub mod loader;

pub use errors::{FixtureError, FixtureResult};
pub use loader::{load_all_fixtures, load_fixture_file, load_records};

use std::path::Path;
use topics_doc::{
    generate_document, generate_document_with_tokens, DocConfig, GeneratedDocument,
    SequentialTokens,
};

/// Configuration for a run.
///
/// Without a path the defaults apply. A path that was named explicitly must
/// exist.
pub fn load_config(path: Option<&Path>) -> FixtureResult<DocConfig> {
    match path {
        Some(path) if !path.is_file() => Err(FixtureError::Load {
            path: path.display().to_string(),
            message: "configuration file not found".to_string(),
        }),
        Some(path) => Ok(DocConfig::load(path)?),
        None => Ok(DocConfig::default()),
    }
}

/// Load every fixture under `fixtures_dir` and write the topics document
/// into `output_dir`.
///
/// With `seed_tokens` the per-entry tokens are sequential, so regenerating
/// from the same fixtures yields byte-identical output.
pub fn build_document(
    fixtures_dir: &Path,
    output_dir: &Path,
    config: &DocConfig,
    seed_tokens: bool,
) -> FixtureResult<GeneratedDocument> {
    let records = load_records(fixtures_dir)?;
    tracing::info!("Loaded {} fixture records from {:?}", records.len(), fixtures_dir);

    let written = if seed_tokens {
        generate_document_with_tokens(output_dir, records, config, SequentialTokens::default())?
    } else {
        generate_document(output_dir, records, config)?
    };
    Ok(written)
}
