//! Format-preserving reading and editing of `setup.cfg`-style config files.
//!
//! The updater keeps every line it does not touch: comments, blank lines and
//! option order survive a read/modify/serialize round trip. Only sections
//! and options that are explicitly edited are rewritten.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{Error, Result};

/// One line inside a section.
#[derive(Debug, Clone, PartialEq)]
enum SectionLine {
    /// Comment, blank line or anything else kept verbatim
    Raw(String),
    /// `key = value`, possibly with indented continuation values.
    /// `inline` records whether the value sat on the key line, so the
    /// original layout survives serialization.
    Option { key: String, values: Vec<String>, inline: bool },
}

/// An ordered collection of option and raw lines under one `[section]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    lines: Vec<SectionLine>,
}

impl Section {
    /// Values of the named option, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.lines.iter().find_map(|line| match line {
            SectionLine::Option { key: k, values, .. } if k == key => {
                Some(values.as_slice())
            }
            _ => None,
        })
    }

    /// Sets the named option, replacing its values if it already exists.
    /// Reapplying with the same values is a no-op.
    pub fn set<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let inline = values.len() == 1;
        for line in &mut self.lines {
            if let SectionLine::Option { key: k, values: v, inline: i } = line {
                if k == key {
                    *v = values;
                    *i = inline;
                    return;
                }
            }
        }

        // New options go before the blank lines separating this section
        // from the next one.
        let insert_at = self
            .lines
            .iter()
            .rposition(|line| !matches!(line, SectionLine::Raw(raw) if raw.trim().is_empty()))
            .map_or(0, |index| index + 1);
        self.lines.insert(
            insert_at,
            SectionLine::Option { key: key.to_string(), values, inline },
        );
    }

    /// Removes the named option. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(
            |line| !matches!(line, SectionLine::Option { key: k, .. } if k == key),
        );
        self.lines.len() != before
    }

    /// Option keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            SectionLine::Option { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }
}

/// In-memory parsed form of a config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdater {
    /// Lines before the first section header, kept verbatim
    preamble: Vec<String>,
    sections: IndexMap<String, Section>,
}

impl ConfigUpdater {
    /// Parses a config file from its text representation.
    ///
    /// # Errors
    /// * `Error::ConfigError` on an option line outside any section
    pub fn read_string(content: &str) -> Result<Self> {
        let mut updater = ConfigUpdater::default();
        let mut current: Option<String> = None;

        for raw in content.lines() {
            let trimmed = raw.trim();

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                let name = trimmed[1..trimmed.len() - 1].to_string();
                updater.sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section_name) = current.as_deref() else {
                if !trimmed.is_empty() && !is_comment(trimmed) {
                    return Err(Error::ConfigError(format!(
                        "Option line outside any section: '{}'",
                        raw
                    )));
                }
                updater.preamble.push(raw.to_string());
                continue;
            };
            let section = updater
                .sections
                .get_mut(section_name)
                .expect("current section always exists");

            if trimmed.is_empty() || is_comment(trimmed) {
                section.lines.push(SectionLine::Raw(raw.to_string()));
                continue;
            }

            // Indented non-comment lines continue the previous option value.
            if raw.starts_with(char::is_whitespace) {
                match section.lines.last_mut() {
                    Some(SectionLine::Option { values, .. }) => {
                        values.push(trimmed.to_string());
                        continue;
                    }
                    _ => {
                        return Err(Error::ConfigError(format!(
                            "Continuation line without an option: '{}'",
                            raw
                        )))
                    }
                }
            }

            let Some((key, value)) = raw.split_once('=') else {
                return Err(Error::ConfigError(format!("Invalid option line: '{}'", raw)));
            };
            let value = value.trim();
            let (values, inline) = if value.is_empty() {
                (vec![], false)
            } else {
                (vec![value.to_string()], true)
            };
            section.lines.push(SectionLine::Option {
                key: key.trim().to_string(),
                values,
                inline,
            });
        }

        Ok(updater)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns the named section, appending an empty one if missing.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Inserts an empty section right after `anchor`, or returns the
    /// existing one.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the anchor section does not exist
    pub fn add_section_after(&mut self, name: &str, anchor: &str) -> Result<&mut Section> {
        if !self.sections.contains_key(name) {
            let index = self.sections.get_index_of(anchor).ok_or_else(|| {
                Error::ConfigError(format!("No section '{}' to anchor on", anchor))
            })?;
            self.sections.shift_insert(index + 1, name.to_string(), Section::default());
        }
        Ok(self.sections.get_mut(name).expect("section was just inserted"))
    }

    /// Removes the named section. Returns whether it was present.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.sections.shift_remove(name).is_some()
    }

    /// Convenience for `ensure_section(section).set(key, values)`.
    pub fn set<I, S>(&mut self, section: &str, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_section(section).set(key, values);
    }

    /// Values of `key` in `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&[String]> {
        self.section(section)?.get(key)
    }

    /// Section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

impl fmt::Display for ConfigUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.preamble {
            writeln!(f, "{}", line)?;
        }
        for (name, section) in &self.sections {
            writeln!(f, "[{}]", name)?;
            for line in &section.lines {
                match line {
                    SectionLine::Raw(raw) => writeln!(f, "{}", raw)?,
                    SectionLine::Option { key, values, inline } => {
                        match values.as_slice() {
                            [] => writeln!(f, "{} =", key)?,
                            [value] if *inline => writeln!(f, "{} = {}", key, value)?,
                            values => {
                                writeln!(f, "{} =", key)?;
                                for value in values {
                                    writeln!(f, "    {}", value)?;
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
