use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
    Plain,
}

/// Styled text fragment; styling is dropped when color is off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled<'a> {
    text: &'a str,
    tone: Tone,
    bold: bool,
}

impl<'a> Styled<'a> {
    pub fn new(text: &'a str, tone: Tone) -> Self {
        Self {
            text,
            tone,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text.to_string();
        }

        let styled = match self.tone {
            Tone::Success => self.text.with(theme::colors::SUCCESS),
            Tone::Error => self.text.with(theme::colors::ERROR),
            Tone::Warning => self.text.with(theme::colors::WARNING),
            Tone::Info => self.text.with(theme::colors::INFO),
            Tone::Dim => self.text.with(theme::colors::DIM),
            Tone::Plain => self.text.stylize(),
        };

        if self.bold {
            format!("{}", styled.bold())
        } else {
            format!("{}", styled)
        }
    }
}
