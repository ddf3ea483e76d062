//! Block constructors bound to a single [`StyleProfile`].

use super::style::StyleProfile;
use super::text::{blank_filler, checkbox_glyph, format_date, or_blank, underline_filler};
use crate::document::{
    Alignment, Block, CheckboxGroup, CheckboxOption, ClauseSelection, Jurat, Paragraph, Run,
    SignatureBlock, Table, TableRow,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphOptions {
    pub bold: bool,
    pub italic: bool,
    pub align: Alignment,
    pub indent: u16,
}

impl ParagraphOptions {
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }

    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn indented(mut self, level: u16) -> Self {
        self.indent = level;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Composer<'s> {
    style: &'s StyleProfile,
}

impl<'s> Composer<'s> {
    pub fn new(style: &'s StyleProfile) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleProfile {
        self.style
    }

    pub fn run(&self, text: impl Into<String>) -> Run {
        Run {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            size: self.style.body_size,
        }
    }

    pub fn bold_run(&self, text: impl Into<String>) -> Run {
        Run {
            bold: true,
            ..self.run(text)
        }
    }

    pub fn underlined_run(&self, text: impl Into<String>) -> Run {
        Run {
            underline: true,
            ..self.run(text)
        }
    }

    pub fn title(&self, text: impl Into<String>) -> Block {
        let run = Run {
            size: self.style.title_size,
            ..self.bold_run(text)
        };
        self.paragraph_from_runs(None, vec![run], ParagraphOptions::default().centered())
    }

    pub fn heading(&self, text: impl Into<String>) -> Block {
        let run = Run {
            size: self.style.heading_size,
            ..self.bold_run(text)
        };
        self.paragraph_from_runs(None, vec![run], ParagraphOptions::default())
    }

    pub fn text(&self, text: impl Into<String>) -> Block {
        self.paragraph(text, ParagraphOptions::default())
    }

    pub fn paragraph(&self, text: impl Into<String>, options: ParagraphOptions) -> Block {
        let run = Run {
            bold: options.bold,
            italic: options.italic,
            ..self.run(text)
        };
        self.paragraph_from_runs(None, vec![run], options)
    }

    pub fn small(&self, text: impl Into<String>, options: ParagraphOptions) -> Block {
        let run = Run {
            size: self.style.small_size,
            italic: options.italic,
            bold: options.bold,
            ..self.run(text)
        };
        self.paragraph_from_runs(None, vec![run], options)
    }

    /// Numbered legal paragraph, e.g. `2.` or `(a)`.
    pub fn numbered(&self, number: impl Into<String>, text: impl Into<String>) -> Block {
        self.numbered_at(number, text, 0)
    }

    pub fn numbered_at(
        &self,
        number: impl Into<String>,
        text: impl Into<String>,
        indent: u16,
    ) -> Block {
        self.paragraph_from_runs(
            Some(number.into()),
            vec![self.run(text)],
            ParagraphOptions::default()
                .aligned(Alignment::Justify)
                .indented(indent),
        )
    }

    pub fn rich(&self, runs: Vec<Run>, options: ParagraphOptions) -> Block {
        self.paragraph_from_runs(None, runs, options)
    }

    fn paragraph_from_runs(
        &self,
        number: Option<String>,
        runs: Vec<Run>,
        options: ParagraphOptions,
    ) -> Block {
        Block::Paragraph(Paragraph {
            number,
            runs,
            align: options.align,
            indent: self.style.indent(options.indent),
            spacing_after: self.style.paragraph_spacing,
        })
    }

    /// Independent boxes; any number may be checked.
    pub fn checkboxes(
        &self,
        id: impl Into<String>,
        caption: Option<String>,
        options: Vec<(&str, String, bool)>,
        indent: u16,
    ) -> Block {
        Block::Checkboxes(CheckboxGroup {
            id: id.into(),
            caption,
            options: options
                .into_iter()
                .map(|(id, label, checked)| CheckboxOption {
                    id: id.to_string(),
                    label,
                    checked,
                    glyph: checkbox_glyph(checked).to_string(),
                })
                .collect(),
            indent: self.style.indent(indent),
            size: self.style.body_size,
        })
    }

    pub fn checkbox(
        &self,
        id: impl Into<String>,
        label: impl Into<String>,
        checked: bool,
    ) -> Block {
        let id = id.into();
        self.checkboxes(id.clone(), None, vec![(id.as_str(), label.into(), checked)], 0)
    }

    /// One box per option, checked only for the selected clause. Options must
    /// cover every id the selection can produce.
    pub fn choice(
        &self,
        id: impl Into<String>,
        caption: Option<String>,
        selection: &ClauseSelection,
        options: Vec<(&str, String)>,
    ) -> Block {
        let options = options
            .into_iter()
            .map(|(option_id, label)| (option_id, label, selection.is(option_id)))
            .collect();
        self.checkboxes(id, caption, options, 1)
    }

    pub fn table(&self, id: impl Into<String>, header: &[&str], rows: Vec<TableRow>) -> Block {
        Block::Table(Table {
            id: id.into(),
            header: header.iter().map(|cell| cell.to_string()).collect(),
            rows,
            size: self.style.small_size,
        })
    }

    pub fn signature_block(&self, signatory: &str, caption: impl Into<String>) -> Block {
        Block::Signature(SignatureBlock {
            line: underline_filler(40),
            signatory: or_blank(signatory, 30),
            caption: caption.into(),
            size: self.style.body_size,
        })
    }

    pub fn date_line(&self, label: &str, date: Option<NaiveDate>) -> Block {
        self.text(format!("{label}: {}", format_date(date, 24)))
    }

    pub fn jurat(&self, place: &str, date: Option<NaiveDate>, deponents: &[String]) -> Block {
        let sworn_line = format!(
            "SWORN (OR AFFIRMED) BEFORE ME at {}, British Columbia, on {}.",
            or_blank(place, 24),
            format_date(date, 24)
        );
        let commissioner_lines = vec![
            underline_filler(40),
            "A commissioner for taking affidavits for British Columbia".to_string(),
            format!("[print name or affix stamp of commissioner] {}", blank_filler(20)),
        ];
        let deponents = if deponents.is_empty() {
            vec![format!("{}\n{}", underline_filler(40), blank_filler(30))]
        } else {
            deponents
                .iter()
                .map(|name| format!("{}\n{}", underline_filler(40), or_blank(name, 30)))
                .collect()
        };

        Block::Jurat(Jurat {
            sworn_line,
            commissioner_lines,
            deponents,
            size: self.style.body_size,
        })
    }

    pub fn page_break(&self) -> Block {
        Block::PageBreak
    }
}
