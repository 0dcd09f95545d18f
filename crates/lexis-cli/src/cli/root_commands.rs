use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Word and fact of the day.
    Today,
    /// Word of the day.
    Word(DailyArgs),
    /// Fact of the day.
    Fact(DailyArgs),
    /// Search the word list.
    Search(SearchArgs),
    /// Multiple-choice quiz question.
    Quiz(QuizArgs),
    /// Every cited source.
    Sources,
    /// Theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Print the JSON Schema for a data file.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DailyArgs {
    /// Seed offset (defaults to the configured offset)
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Day to select for, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search words; matched against terms and short definitions
    pub words: Vec<String>,
}

impl SearchArgs {
    /// The query as typed, words joined by single spaces.
    #[must_use]
    pub fn query(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct QuizArgs {
    /// Answer with option N (1-4) instead of prompting
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub answer: Option<u8>,

    /// Seed the question generator for a reproducible question
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the stored theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Store a specific theme.
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Terms,
    Facts,
}
