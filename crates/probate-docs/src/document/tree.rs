use super::kind::DocumentKind;
use crate::format::StyleProfile;
use serde::{Deserialize, Serialize};

/// Generic content tree handed to the external document packager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    pub kind: DocumentKind,
    pub title: String,
    pub style: StyleProfile,
    pub sections: Vec<Section>,
}

impl DocumentContent {
    pub fn new(kind: DocumentKind, title: impl Into<String>, style: &StyleProfile) -> Self {
        Self {
            kind,
            title: title.into(),
            style: style.clone(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.blocks.iter())
    }

    pub fn checkbox_groups(&self) -> impl Iterator<Item = &CheckboxGroup> {
        self.blocks().filter_map(|block| match block {
            Block::Checkboxes(group) => Some(group),
            _ => None,
        })
    }

    pub fn checkbox_group(&self, id: &str) -> Option<&CheckboxGroup> {
        self.checkbox_groups().find(|group| group.id == id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables().find(|table| table.id == id)
    }

    /// Flattened text of every block, one line per paragraph or row.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for section in &self.sections {
            if let Some(heading) = &section.heading {
                lines.push(heading.clone());
            }
            for block in &section.blocks {
                block.collect_text(&mut lines);
            }
        }
        lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_heading(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: Some(heading.into()),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Checkboxes(CheckboxGroup),
    Signature(SignatureBlock),
    Jurat(Jurat),
    PageBreak,
}

impl Block {
    fn collect_text(&self, lines: &mut Vec<String>) {
        match self {
            Block::Paragraph(paragraph) => lines.push(paragraph.text()),
            Block::Table(table) => {
                lines.push(table.header.join(" | "));
                for row in &table.rows {
                    lines.push(row.cells.join(" | "));
                }
            }
            Block::Checkboxes(group) => {
                if let Some(caption) = &group.caption {
                    lines.push(caption.clone());
                }
                for option in &group.options {
                    lines.push(format!("{} {}", option.glyph, option.label));
                }
            }
            Block::Signature(signature) => {
                lines.push(signature.line.clone());
                lines.push(signature.signatory.clone());
                lines.push(signature.caption.clone());
            }
            Block::Jurat(jurat) => {
                lines.push(jurat.sworn_line.clone());
                lines.extend(jurat.commissioner_lines.iter().cloned());
                lines.extend(jurat.deponents.iter().cloned());
            }
            Block::PageBreak => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Half-points, as office formats store font sizes.
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub runs: Vec<Run>,
    pub align: Alignment,
    pub indent: u16,
    pub spacing_after: u16,
}

impl Paragraph {
    pub fn text(&self) -> String {
        let body: String = self.runs.iter().map(|run| run.text.as_str()).collect();
        match &self.number {
            Some(number) => format!("{number} {body}"),
            None => body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub emphasis: bool,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: false,
        }
    }

    pub fn emphasized(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
    pub size: u16,
}

impl Table {
    /// Rows that are not emphasized totals.
    pub fn body_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| !row.emphasis)
    }

    pub fn column(&self, index: usize) -> Vec<&str> {
        self.body_rows()
            .filter_map(|row| row.cells.get(index).map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxOption {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxGroup {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub options: Vec<CheckboxOption>,
    pub indent: u16,
    pub size: u16,
}

impl CheckboxGroup {
    pub fn checked(&self) -> Vec<&CheckboxOption> {
        self.options.iter().filter(|option| option.checked).collect()
    }

    pub fn is_checked(&self, option_id: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.id == option_id && option.checked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub line: String,
    pub signatory: String,
    pub caption: String,
    pub size: u16,
}

/// The "sworn (or affirmed) before me" block that closes an affidavit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurat {
    pub sworn_line: String,
    pub commissioner_lines: Vec<String>,
    pub deponents: Vec<String>,
    pub size: u16,
}
