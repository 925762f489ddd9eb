//! Ordering of topic entries and their partition into document sections.

use crate::normalize::TopicEntry;

/// A run of entries sharing the first segment of their stripped topic.
#[derive(Debug)]
pub struct Section<'a> {
    pub key: &'a str,
    pub entries: &'a [TopicEntry],
}

/// Sort entries by stripped topic. Entries with equal topics keep their
/// input order.
pub fn order_entries(entries: &mut [TopicEntry]) {
    entries.sort_by(|a, b| a.stripped.cmp(&b.stripped));
}

/// Split ordered entries into sections.
///
/// Entries must already be ordered with [`order_entries`]; every section key
/// then occupies one contiguous run and each section appears exactly once.
pub fn group_sections(entries: &[TopicEntry]) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut start = 0;

    for idx in 1..=entries.len() {
        let boundary = idx == entries.len()
            || entries[idx].stripped.section() != entries[start].stripped.section();
        if boundary {
            sections.push(Section {
                key: entries[start].stripped.section(),
                entries: &entries[start..idx],
            });
            start = idx;
        }
    }

    debug_assert!(
        sections.windows(2).all(|pair| pair[0].key < pair[1].key),
        "sections must be strictly increasing"
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ExpectedOutputs;
    use crate::normalize::StrippedTopic;
    use serde_json::Map;

    fn entry(name: &str, stripped: &str) -> TopicEntry {
        let topic = format!("org.fedoraproject.prod.{}", stripped);
        TopicEntry {
            name: name.to_string(),
            stripped: StrippedTopic::parse(&topic, 3).unwrap(),
            topic,
            message: Map::new(),
            doc: None,
            expected: ExpectedOutputs::default(),
        }
    }

    fn names(entries: &[TopicEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_order_entries() {
        let mut entries = vec![
            entry("git", "git.branch"),
            entry("bodhi", "bodhi.update.request"),
            entry("buildsys", "buildsys.build.state.change"),
            entry("bodhi-comment", "bodhi.update.comment"),
        ];
        order_entries(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["bodhi-comment", "bodhi", "buildsys", "git"]
        );
    }

    #[test]
    fn test_order_is_stable() {
        let mut entries = vec![
            entry("second-git", "git.receive"),
            entry("first", "fas.user.create"),
            entry("third-git", "git.receive"),
        ];
        order_entries(&mut entries);
        assert_eq!(names(&entries), vec!["first", "second-git", "third-git"]);
    }

    #[test]
    fn test_group_sections() {
        let mut entries = vec![
            entry("a", "git.branch"),
            entry("b", "bodhi.update"),
            entry("c", "git.receive"),
            entry("d", "bodhi.buildroot_override.tag"),
            entry("e", "fas.user.create"),
        ];
        order_entries(&mut entries);
        let sections = group_sections(&entries);

        let keys: Vec<&str> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["bodhi", "fas", "git"]);
        assert_eq!(names(sections[0].entries), vec!["d", "b"]);
        assert_eq!(names(sections[1].entries), vec!["e"]);
        assert_eq!(names(sections[2].entries), vec!["a", "c"]);
    }

    #[test]
    fn test_group_sections_empty() {
        assert!(group_sections(&[]).is_empty());
    }
}
