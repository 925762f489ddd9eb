//! Drives the pipeline and writes the reStructuredText document.
//!
//! Records flow one way: normalize, order, group into sections, then per
//! entry write the subsection header, description, datagrepper links,
//! payload block and metadata table.

use crate::config::DocConfig;
use crate::fixture::FixtureRecord;
use crate::group::{group_sections, order_entries};
use crate::layout::MetadataTable;
use crate::link::datagrepper_link;
use crate::normalize::{Normalized, Normalizer, TopicEntry};
use crate::sink::{FileSink, LineSink};
use crate::token::{TokenSource, UuidTokens};
use crate::{DocError, DocResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const TITLE: &str = "List of Message Topics";

/// Counts describing one generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub sections: usize,
    pub topics: usize,
    pub skipped: usize,
}

/// Normalized and ordered entries, ready to be written.
#[derive(Debug)]
pub struct PreparedDocument {
    entries: Vec<TopicEntry>,
    skipped: usize,
}

/// Assembles the topics document from fixture records.
pub struct DocumentAssembler<'c, T> {
    config: &'c DocConfig,
    tokens: T,
}

impl<'c, T: TokenSource> DocumentAssembler<'c, T> {
    pub fn new(config: &'c DocConfig, tokens: T) -> Self {
        Self { config, tokens }
    }

    /// Normalize, filter and order the records.
    ///
    /// Fails on the first malformed record, and when nothing is left to
    /// document.
    pub fn prepare<I>(&self, records: I) -> DocResult<PreparedDocument>
    where
        I: IntoIterator<Item = FixtureRecord>,
    {
        let normalizer = Normalizer::new(self.config);
        let mut entries = Vec::new();
        let mut skipped = 0;

        for record in records {
            match normalizer.normalize(record)? {
                Normalized::Keep(entry) => entries.push(entry),
                Normalized::Skip { name, reason } => {
                    tracing::debug!("Skipping fixture {}: {}", name, reason);
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            return Err(DocError::EmptyFixtureSet);
        }
        order_entries(&mut entries);
        Ok(PreparedDocument { entries, skipped })
    }

    /// Write a prepared document to `sink`.
    pub fn write<S: LineSink>(
        &mut self,
        prepared: &PreparedDocument,
        sink: &mut S,
    ) -> DocResult<AssemblyReport> {
        let mut report = AssemblyReport {
            skipped: prepared.skipped,
            ..Default::default()
        };
        let mut issued = HashSet::new();

        self.write_preamble(sink)?;
        for section in group_sections(&prepared.entries) {
            tracing::debug!(
                "Writing section {} ({} topics)",
                section.key,
                section.entries.len()
            );
            write_heading(sink, section.key, '-')?;
            report.sections += 1;

            for entry in section.entries {
                let token = self.tokens.next_token();
                if !issued.insert(token.clone()) {
                    return Err(DocError::TokenCollision { token });
                }
                self.write_entry(sink, entry, &token)?;
                report.topics += 1;
            }
        }
        Ok(report)
    }

    /// Prepare and write in one go.
    pub fn assemble<I, S>(&mut self, records: I, sink: &mut S) -> DocResult<AssemblyReport>
    where
        I: IntoIterator<Item = FixtureRecord>,
        S: LineSink,
    {
        let prepared = self.prepare(records)?;
        self.write(&prepared, sink)
    }

    fn write_preamble<S: LineSink>(&self, sink: &mut S) -> DocResult<()> {
        let prefix = self.config.topic_prefix();
        write_heading(sink, TITLE, '=')?;
        sink.write_line(".. DO NOT EDIT THIS DOCUMENT.")?;
        sink.blank()?;
        sink.write_line(
            ".. It is autogenerated from the fedmsg.meta test fixtures by topics-doc.",
        )?;
        sink.blank()?;
        sink.write_line(
            "This document lists all the topics coming out the Fedora\n\
             Infrastructure fedmsg bus.  Example messages are included\n\
             as well as descriptions and sample output from ``fedmsg.meta``.",
        )?;
        sink.blank()?;
        sink.write_line(&format!(
            ".. note:: All topics from Fedora Infrastructure are prefixed with\n   \
             ``{prefix}``, but the :term:`topic_prefix` is omitted here\n   \
             for brevity.  For instance, the item listed as ``git.branch`` will\n   \
             actually be broadcast as ``{prefix}git.branch``.",
            prefix = prefix
        ))?;
        sink.blank()?;
        sink.write_line(
            ".. note:: Message bodies can contain some useful information, but be wary.\n   \
             We have done as good a job as we can *securing* fedmsg, but it is still\n   \
             a new system.  If you receive a message from pkgdb claiming that \"ralph\"\n   \
             is the new owner of the kernel, you should still *check* with the *actual*\n   \
             pkgdb service that this is the case.  Write code against fedmsg messages\n   \
             as a tip, but always check the authoritative source before taking any\n   \
             programmatic action.",
        )?;
        sink.blank()
    }

    fn write_entry<S: LineSink>(
        &self,
        sink: &mut S,
        entry: &TopicEntry,
        token: &str,
    ) -> DocResult<()> {
        write_heading(sink, &entry.stripped.to_string(), '~')?;

        if let Some(doc) = entry.doc.as_deref().and_then(dedent_doc) {
            sink.write_line(&doc)?;
            sink.blank()?;
        }

        sink.write_line(&datagrepper_link(
            &entry.topic,
            &entry.stripped,
            &self.config.datagrepper_url,
        ))?;
        sink.blank()?;

        let payload = serde_json::to_string_pretty(&entry.message).map_err(|e| {
            DocError::malformed(&entry.name, format!("payload is not printable: {}", e))
        })?;
        sink.write_line(".. code-block:: json")?;
        sink.blank()?;
        for line in payload.lines() {
            sink.write_line(&format!("    {}", line))?;
        }
        sink.blank()?;

        let table = MetadataTable::new(&entry.expected, token, &self.config.icon_size);
        sink.write_line(&table.to_string())?;
        sink.blank()
    }
}

/// Title, underline of the same length, blank line.
fn write_heading<S: LineSink>(sink: &mut S, title: &str, underline: char) -> DocResult<()> {
    sink.write_line(title)?;
    sink.write_line(&underline.to_string().repeat(title.chars().count()))?;
    sink.blank()
}

/// Trim a description and remove the whitespace prefix its lines share with
/// the (conceptually indented) first line.
///
/// Only an identical prefix is removed: a tab never matches spaces.
fn dedent_doc(doc: &str) -> Option<String> {
    const FIRST_LINE_INDENT: &str = "    ";

    let trimmed = doc.trim();
    if trimmed.is_empty() {
        return None;
    }

    let indented = format!("{}{}", FIRST_LINE_INDENT, trimmed);
    let margin = indented
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    let lines: Vec<&str> = indented
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect();
    Some(lines.join("\n"))
}

fn leading_whitespace(line: &str) -> &str {
    let rest = line.trim_start_matches(&[' ', '\t'][..]);
    &line[..line.len() - rest.len()]
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// The written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub path: PathBuf,
    pub report: AssemblyReport,
}

/// Generate `<output_dir>/topics.rst` with random per-entry tokens.
pub fn generate_document<I>(
    output_dir: &Path,
    records: I,
    config: &DocConfig,
) -> DocResult<GeneratedDocument>
where
    I: IntoIterator<Item = FixtureRecord>,
{
    generate_document_with_tokens(output_dir, records, config, UuidTokens)
}

/// Generate the document using the given token source.
///
/// Nothing is created when the fixture set is malformed or empty. The
/// destination only appears once every line has been written.
pub fn generate_document_with_tokens<I, T>(
    output_dir: &Path,
    records: I,
    config: &DocConfig,
    tokens: T,
) -> DocResult<GeneratedDocument>
where
    I: IntoIterator<Item = FixtureRecord>,
    T: TokenSource,
{
    let mut assembler = DocumentAssembler::new(config, tokens);
    let prepared = assembler.prepare(records)?;

    let destination = output_dir.join(&config.output_file);
    let mut sink = FileSink::create(&destination)?;
    let report = assembler.write(&prepared, &mut sink)?;
    let path = sink.finish()?;

    tracing::info!(
        "Wrote {} topics in {} sections to {:?} ({} fixtures skipped)",
        report.topics,
        report.sections,
        path,
        report.skipped
    );
    Ok(GeneratedDocument { path, report })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_doc_single_line() {
        assert_eq!(
            dedent_doc("  Published when a branch is created.  ").as_deref(),
            Some("Published when a branch is created.")
        );
    }

    #[test]
    fn test_dedent_doc_docstring() {
        let doc = "\n    Published when a package is built.\n    More detail here.\n\n    Last paragraph.\n    ";
        assert_eq!(
            dedent_doc(doc).as_deref(),
            Some("Published when a package is built.\nMore detail here.\n\nLast paragraph.")
        );
    }

    #[test]
    fn test_dedent_doc_deeper_continuation() {
        // Continuation lines indented past the first line keep the surplus
        let doc = "Summary line.\n        indented detail";
        assert_eq!(
            dedent_doc(doc).as_deref(),
            Some("Summary line.\n    indented detail")
        );
    }

    #[test]
    fn test_dedent_doc_shallow_continuation() {
        let doc = "Summary line.\n  two spaces";
        assert_eq!(
            dedent_doc(doc).as_deref(),
            Some("  Summary line.\ntwo spaces")
        );
    }

    #[test]
    fn test_dedent_doc_tab_does_not_match_spaces() {
        assert_eq!(dedent_doc("X\n\tY").as_deref(), Some("    X\n\tY"));
        assert_eq!(
            dedent_doc("X\n\t  Y\n\t    Z").as_deref(),
            Some("    X\n\t  Y\n\t    Z")
        );
    }

    #[test]
    fn test_dedent_doc_space_margin_with_deeper_lines() {
        let doc = "Summary.\n      six\n        eight";
        assert_eq!(dedent_doc(doc).as_deref(), Some("Summary.\n  six\n    eight"));
    }

    #[test]
    fn test_dedent_doc_blank() {
        assert_eq!(dedent_doc("   \n  "), None);
        assert_eq!(dedent_doc(""), None);
    }

    #[test]
    fn test_heading_underline_matches_chars() {
        let mut sink = crate::sink::MemorySink::new();
        write_heading(&mut sink, "bodhi", '-').unwrap();
        assert_eq!(sink.lines(), &["bodhi", "-----", ""]);
    }
}
