//! Ordered INI document used for the preferences file.
//!
//! Sections and keys keep the order they were first seen in, so writing a
//! loaded document back is byte-for-byte reproducible. Comments and blank
//! lines are not retained. Keys are stored lower-case. An indented line
//! continues the previous value; multi-line values are written back with
//! each extra line indented by a tab.

use crate::error::{Result, TravisCliError};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: impl Into<String>) -> Self {
        IniSection {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the position of the entry that was written
    fn set(&mut self, key: &str, value: impl Into<String>) -> usize {
        let key = normalize_key(key);
        let value = value.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.entries[index].1 = value;
                index
            }
            None => {
                self.entries.push((key, value));
                self.entries.len() - 1
            }
        }
    }
}

/// Section -> key -> value, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text. Lines before the first section header are an error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut document = IniDocument::new();
        let mut current: Option<usize> = None;
        // (section, entry) that an indented line would continue
        let mut last_entry: Option<(usize, usize)> = None;
        let mut pending_blank_lines = 0;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                pending_blank_lines += 1;
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indented = raw_line.starts_with([' ', '\t']);
            if let (true, Some((section, entry))) = (indented, last_entry) {
                let value = &mut document.sections[section].entries[entry].1;
                for _ in 0..pending_blank_lines {
                    value.push('\n');
                }
                value.push('\n');
                value.push_str(line);
                pending_blank_lines = 0;
                continue;
            }
            pending_blank_lines = 0;

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| {
                    TravisCliError::preferences(format!(
                        "line {}: unterminated section header '{}'",
                        index + 1,
                        line
                    ))
                })?;
                document.add_section(name.trim());
                current = document.position(name.trim());
                last_entry = None;
                continue;
            }

            let section = current.ok_or_else(|| {
                TravisCliError::preferences(format!(
                    "line {}: entry '{}' appears before any section header",
                    index + 1,
                    line
                ))
            })?;

            let split_at = line.find(['=', ':']).ok_or_else(|| {
                TravisCliError::preferences(format!(
                    "line {}: expected 'key = value', got '{}'",
                    index + 1,
                    line
                ))
            })?;
            let (key, value) = line.split_at(split_at);
            let entry = document.sections[section].set(key, value[1..].trim());
            last_entry = Some((section, entry));
        }

        Ok(document)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Add an empty section unless it already exists
    pub fn add_section(&mut self, name: &str) {
        if !self.has_section(name) {
            self.sections.push(IniSection::new(name));
        }
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn has_option(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Set a value, creating the section if needed
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.add_section(section);
        if let Some(index) = self.position(section) {
            self.sections[index].set(key, value);
        }
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{} = {}", key, value.replace('\n', "\n\t"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
