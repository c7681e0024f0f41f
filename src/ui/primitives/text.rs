use std::fmt;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn success(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Warning)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Dim)
    }

    fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = match color {
            SemanticColor::Success => self.text.as_str().with(theme::colors::SUCCESS),
            SemanticColor::Error => self.text.as_str().with(theme::colors::ERROR),
            SemanticColor::Warning => self.text.as_str().with(theme::colors::WARNING),
            SemanticColor::Dim => self.text.as_str().with(theme::colors::DIM),
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Shorten `s` to at most `max_width` display columns, eliding the middle.
///
/// Paths keep their tail (the interesting part) this way.
pub fn truncate_middle(s: &str, max_width: usize, supports_unicode: bool) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let ellipsis = if supports_unicode {
        theme::icons::ELLIPSIS
    } else {
        theme::icons_ascii::ELLIPSIS
    };
    let ellipsis_width = ellipsis.width();
    if max_width <= ellipsis_width {
        return ".".repeat(max_width);
    }

    let keep = max_width - ellipsis_width;
    let left_budget = keep / 2;
    let right_budget = keep - left_budget;

    let left = take_width(s.chars(), left_budget);
    let mut right: Vec<char> = take_width(s.chars().rev(), right_budget).chars().collect();
    right.reverse();

    format!("{}{}{}", left, ellipsis, right.into_iter().collect::<String>())
}

fn take_width(chars: impl Iterator<Item = char>, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in chars {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
