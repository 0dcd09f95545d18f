use std::io::{BufRead, Write};

use lexis_core::Term;
use lexis_core::quiz::next_question;
use lexis_core::view::{QuizCard, QuizView};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuizArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// A generated card, or the view explaining why there is none.
enum Prepared<'a> {
    Unavailable(QuizView),
    Card(QuizCard<'a>),
}

/// Handle `lexis quiz`.
///
/// With `--answer N` the question is answered immediately. Otherwise, on an
/// interactive terminal in text mode, the question is shown and the answer
/// read from stdin; in every other mode the unanswered question is printed.
pub fn handle(args: &QuizArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut card = match prepare(ctx.data.terms(), args)? {
        Prepared::Unavailable(view) => return output(&view, flags.format),
        Prepared::Card(card) => card,
    };

    if args.answer.is_none() && ui::prefs().interactive {
        output(&card.view(), flags.format)?;
        let option_count = card.question().options.len();
        let stdin = std::io::stdin();
        let Some(index) = read_choice(stdin.lock(), std::io::stdout(), option_count)? else {
            return Ok(());
        };
        card.choose(index)?;
        println!();
    }

    output(&card.view(), flags.format)
}

/// Generate a question from `terms` and apply `--answer` when given.
fn prepare<'a>(terms: &'a [Term], args: &QuizArgs) -> anyhow::Result<Prepared<'a>> {
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let question = match next_question(terms, &mut rng) {
        Ok(question) => question,
        Err(error) => {
            tracing::info!(%error, "quiz unavailable");
            return Ok(Prepared::Unavailable(QuizView::from(error)));
        }
    };

    let mut card = QuizCard::new(question);
    if let Some(answer) = args.answer {
        card.choose(usize::from(answer) - 1)?;
    }
    Ok(Prepared::Card(card))
}

/// Prompt until a valid 1-based option number is entered. Returns the
/// zero-based index, or `None` at end of input.
fn read_choice<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    option_count: usize,
) -> std::io::Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(out, "\nYour answer (1-{option_count}): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => return Ok(Some(choice - 1)),
            _ => write!(out, "Please enter a number from 1 to {option_count}.")?,
        }
    }
}
