//! Aligned comparison tables of expected formatting-layer outputs.
//!
//! One table is rendered per topic entry. The right-hand column holds values
//! of mixed types (plain strings, sets, the `Unspecified` sentinel), so the
//! column width is the longest display text among the entry's own values.
//! Widths are computed per entry, never across the whole document.

use crate::expected::{CellText, Expected};
use crate::fixture::ExpectedOutputs;
use std::borrow::Cow;
use std::fmt::{self, Write};

/// Width of the left-hand label column, excluding its margins.
pub const LABEL_WIDTH: usize = 39;

/// One space on each side of a cell.
const CELL_MARGIN: usize = 2;

const LEAD_IN: &str = "The example message above, when passed to various routines in the
:mod:`fedmsg.meta` module, will produce the following outputs:";

const ROW_LABELS: [&str; 9] = [
    ":func:`fedmsg.meta.msg2title`",
    ":func:`fedmsg.meta.msg2subtitle`",
    ":func:`fedmsg.meta.msg2link`",
    ":func:`fedmsg.meta.msg2agent`",
    ":func:`fedmsg.meta.msg2usernames`",
    ":func:`fedmsg.meta.msg2packages`",
    ":func:`fedmsg.meta.msg2objects`",
    ":func:`fedmsg.meta.msg2icon`",
    ":func:`fedmsg.meta.msg2secondary_icon`",
];

/// Renders the comparison table and image directives for one entry.
pub struct MetadataTable<'a> {
    expected: &'a ExpectedOutputs,
    icon_inline: Expected<String>,
    secondary_icon_inline: Expected<String>,
    icon_size: &'a str,
}

impl<'a> MetadataTable<'a> {
    /// `token` namespaces this entry's image substitutions.
    pub fn new(expected: &'a ExpectedOutputs, token: &str, icon_size: &'a str) -> Self {
        let inline = |icon: &Expected<String>, suffix: &str| match icon {
            Expected::Specified(_) => Expected::Specified(format!("|{}-{}|", token, suffix)),
            Expected::Unspecified => Expected::Unspecified,
        };
        Self {
            icon_inline: inline(&expected.icon, "icon"),
            secondary_icon_inline: inline(&expected.secondary_icon, "secondary_icon"),
            expected,
            icon_size,
        }
    }

    fn cells(&self) -> [Cow<'_, str>; 9] {
        let e = self.expected;
        [
            e.title.cell_text(),
            e.subtitle.cell_text(),
            e.link.cell_text(),
            e.agent.cell_text(),
            e.usernames.cell_text(),
            e.packages.cell_text(),
            e.objects.cell_text(),
            self.icon_inline.cell_text(),
            self.secondary_icon_inline.cell_text(),
        ]
    }

    /// Width of the value column: the longest cell, in characters.
    pub fn width(&self) -> usize {
        self.cells()
            .iter()
            .map(|cell| cell.cell_len())
            .max()
            .unwrap_or(0)
    }

    /// `(substitution, url)` for every icon that is specified.
    pub fn image_directives(&self) -> Vec<(&str, &str)> {
        [
            (&self.icon_inline, &self.expected.icon),
            (&self.secondary_icon_inline, &self.expected.secondary_icon),
        ]
        .into_iter()
        .filter_map(|(inline, url)| match (inline, url) {
            (Expected::Specified(inline), Expected::Specified(url)) => {
                Some((inline.as_str(), url.as_str()))
            }
            _ => None,
        })
        .collect()
    }

    fn border(width: usize) -> String {
        let mut line = String::with_capacity(LABEL_WIDTH + width + 3 + 2 * CELL_MARGIN);
        line.push('+');
        line.extend(std::iter::repeat('-').take(LABEL_WIDTH + CELL_MARGIN));
        line.push('+');
        line.extend(std::iter::repeat('-').take(width + CELL_MARGIN));
        line.push('+');
        line
    }
}

// +-----------------------------------------+------------------------+
// | :func:`fedmsg.meta.msg2title`           | (abc) pushed to branch |
// +-----------------------------------------+------------------------+
// | :func:`fedmsg.meta.msg2subtitle`        | Unspecified            |
// +-----------------------------------------+------------------------+
impl<'a> fmt::Display for MetadataTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width();
        let border = Self::border(width);

        f.write_str(LEAD_IN)?;
        f.write_char('\n')?;
        f.write_char('\n')?;
        f.write_str(&border)?;
        for (label, cell) in ROW_LABELS.iter().zip(self.cells().iter()) {
            write!(
                f,
                "\n| {:<label_width$} | {:<width$} |\n{}",
                label,
                cell,
                border,
                label_width = LABEL_WIDTH,
                width = width,
            )?;
        }

        let directives = self.image_directives();
        if !directives.is_empty() {
            f.write_char('\n')?;
        }
        for (inline, url) in directives {
            write!(
                f,
                "\n.. {} image:: {}\n   :height: {}\n   :width: {}",
                inline, url, self.icon_size, self.icon_size
            )?;
        }
        Ok(())
    }
}
