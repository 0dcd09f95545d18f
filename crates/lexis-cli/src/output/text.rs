//! Plain-text rendering of view models.

use std::fmt::Write as _;

use lexis_core::view::{
    FactView, OptionState, PageView, QuizView, SearchView, SourceLink, SourcesView, WordCard,
    WordView,
};

/// Explicit table layout for views that are naturally a list.
pub struct TableRows {
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// A view that can render itself as human-readable text.
pub trait TextView {
    fn to_text(&self, color: bool) -> String;

    /// Rows for `--format table`. `None` falls back to a key/value table.
    fn table(&self) -> Option<TableRows> {
        None
    }
}

fn bold(text: &str, color: bool) -> String {
    if color {
        format!("\u{1b}[1m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

fn link(source: &SourceLink) -> String {
    if source.name == source.url {
        source.url.clone()
    } else {
        format!("{} <{}>", source.name, source.url)
    }
}

fn word_card(card: &WordCard, color: bool) -> String {
    let mut lines = vec![bold(&card.term, color)];
    lines.extend(card.subtitle.clone());
    lines.extend(card.short_definition.clone());
    if let Some(long) = &card.long_definition {
        lines.push(format!("Learn more: {long}"));
    }
    if let Some(example) = &card.example {
        lines.push(format!("Example: {example}"));
    }
    if !card.tags.is_empty() {
        lines.push(format!("Tags: {}", card.tags.join(", ")));
    }
    lines.join("\n")
}

impl TextView for WordView {
    fn to_text(&self, color: bool) -> String {
        match self {
            Self::Empty { message } => message.clone(),
            Self::Entry(card) => word_card(card, color),
        }
    }
}

impl TextView for FactView {
    fn to_text(&self, _color: bool) -> String {
        match self {
            Self::Empty { message } => message.clone(),
            Self::Entry { fact } => fact.clone(),
        }
    }
}

impl TextView for PageView {
    fn to_text(&self, color: bool) -> String {
        format!(
            "{}\n{}\n\n{}\n{}\n\n© {} · theme: {}",
            bold(&format!("Word of the day ({})", self.date), color),
            self.word.to_text(color),
            bold("Fact of the day", color),
            self.fact.to_text(color),
            self.year,
            self.theme,
        )
    }
}

impl TextView for SearchView {
    fn to_text(&self, color: bool) -> String {
        if self.results.is_empty() {
            return if self.query.is_empty() {
                String::from("No words yet.")
            } else {
                format!("No words match '{}'.", self.query)
            };
        }

        let mut out = String::new();
        for row in &self.results {
            out.push_str(&bold(&row.term, color));
            if let Some(pos) = &row.part_of_speech {
                let _ = write!(out, " ({pos})");
            }
            out.push('\n');
            for detail in [&row.pronunciation, &row.short_definition].into_iter().flatten() {
                let _ = writeln!(out, "  {detail}");
            }
            if !row.sources.is_empty() {
                let links = row.sources.iter().map(link).collect::<Vec<_>>().join(", ");
                let _ = writeln!(out, "  Sources: {links}");
            }
        }
        if self.results.len() < self.total {
            let _ = write!(out, "({} of {} words)", self.results.len(), self.total);
        }
        out.trim_end().to_string()
    }

    fn table(&self) -> Option<TableRows> {
        let rows = self
            .results
            .iter()
            .map(|row| {
                vec![
                    row.term.clone(),
                    row.part_of_speech.clone().unwrap_or_default(),
                    row.pronunciation.clone().unwrap_or_default(),
                    row.short_definition.clone().unwrap_or_default(),
                    row.sources
                        .iter()
                        .map(|s| s.url.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            })
            .collect();
        Some(TableRows {
            headers: &["term", "part_of_speech", "pronunciation", "definition", "sources"],
            rows,
        })
    }
}

impl TextView for QuizView {
    fn to_text(&self, color: bool) -> String {
        let (prompt, answered, options) = match self {
            Self::Unavailable { message } => return message.clone(),
            Self::Question {
                prompt,
                answered,
                options,
            } => (prompt, *answered, options),
        };

        let mut out = format!("{} {prompt}\n", bold("Definition:", color));
        for (index, option) in options.iter().enumerate() {
            let marker = match option.state {
                OptionState::Correct => paint("✓", "32", color),
                OptionState::Wrong => paint("✗", "31", color),
                OptionState::Pending | OptionState::Inert => String::from(" "),
            };
            let _ = write!(out, "\n{marker} {}) {}", index + 1, option.label);
        }

        if answered {
            let missed = options.iter().any(|o| o.state == OptionState::Wrong);
            let answer = options
                .iter()
                .find(|o| o.state == OptionState::Correct)
                .map_or("", |o| o.label.as_str());
            if missed {
                let _ = write!(out, "\n\nNot quite. The answer is {answer}.");
            } else {
                out.push_str("\n\nCorrect!");
            }
        }
        out
    }

    fn table(&self) -> Option<TableRows> {
        let Self::Question { options, .. } = self else {
            return None;
        };
        let rows = options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                vec![
                    (index + 1).to_string(),
                    option.label.clone(),
                    serde_json::to_value(option.state)
                        .ok()
                        .and_then(|v| v.as_str().map(str::to_string))
                        .unwrap_or_default(),
                ]
            })
            .collect();
        Some(TableRows {
            headers: &["option", "term", "state"],
            rows,
        })
    }
}

impl TextView for SourcesView {
    fn to_text(&self, _color: bool) -> String {
        match self {
            Self::Empty { message } => message.clone(),
            Self::List { sources } => sources
                .iter()
                .map(|source| format!("- {}", link(source)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn table(&self) -> Option<TableRows> {
        let Self::List { sources } = self else {
            return None;
        };
        Some(TableRows {
            headers: &["name", "url"],
            rows: sources
                .iter()
                .map(|s| vec![s.name.clone(), s.url.clone()])
                .collect(),
        })
    }
}
