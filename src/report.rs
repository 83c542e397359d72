//! Sample output: a titled list of sections, rendered as text or JSON

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleReport {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl SampleReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Start a new section; following `line` calls append to it
    pub fn section(&mut self, heading: impl Into<String>) -> &mut Self {
        self.sections.push(Section {
            heading: heading.into(),
            lines: Vec::new(),
        });
        self
    }

    /// Append a line to the last section, opening an untitled one if needed
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        if self.sections.is_empty() {
            self.section("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.lines.push(text.into());
        }
        self
    }

    pub fn find_section(&self, heading: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.heading == heading)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(self.title.len().max(8));
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{rule}");
        for section in &self.sections {
            if !section.heading.is_empty() {
                let _ = writeln!(out, "\n## {}", section.heading);
            }
            for line in &section.lines {
                let _ = writeln!(out, "{line}");
            }
        }
        let _ = writeln!(out, "\n-- {} finished --", self.title);
        out
    }
}
