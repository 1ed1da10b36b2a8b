//! emotherm - emotional temperature quiz for the terminal
//!
//! Runs the quiz interactively (or from a preset answer list), stores the
//! result, and prints the result card with streak and day-over-day trend.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use emotherm_core::advisor::WEEKLY_ROUTINE;
use emotherm_core::format::{format_comparison_opt, share_text};
use emotherm_core::history::HistoryTracker;
use emotherm_core::{compose_result, Config, Database, QuizSession, ResultBundle};
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emotherm")]
#[command(about = "Emotional temperature test - how warm do you run?")]
#[command(version)]
struct Args {
    /// Comma-separated option numbers, one per question (skips the prompts)
    #[arg(long)]
    answers: Option<String>,

    /// Show stored history and current streak instead of running the quiz
    #[arg(long)]
    history: bool,

    /// Print the result bundle as JSON instead of the result card
    #[arg(long)]
    json: bool,

    /// Include the in-depth sections (pattern analysis, monthly tip, routine)
    #[arg(long)]
    premium: bool,

    /// Override the database path
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep options in their canonical order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = emotherm_core::logging::init(&config.logging).ok();

    let db_path = args.db.clone().unwrap_or_else(|| config.database_path());
    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run migrations")?;

    if args.history {
        print_history(&db)?;
        return Ok(());
    }

    if !args.json {
        print_intro(&db)?;
    }

    let mut session = QuizSession::new();
    session.start().context("fresh session")?;

    match &args.answers {
        Some(preset) => answer_from_preset(&mut session, preset)?,
        None => answer_interactively(&mut session, !args.no_shuffle)?,
    }

    let outcome = session.complete().context("quiz not finished")?;
    let today = Local::now().date_naive();
    let bundle = compose_result(&db, outcome, today, Some(&config.locale))
        .context("failed to store result")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        print_result_card(&bundle);
        if args.premium {
            print_premium(&bundle);
        }
    }

    Ok(())
}

/// Intro banner with the participation counter.
fn print_intro(db: &Database) -> Result<()> {
    let count = db.session_count()?;
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", "🌡️  EMOTIONAL TEMPERATURE TEST");
    println!("╰{}╯", "─".repeat(60));
    if count > 0 {
        println!("  {} tests taken on this device so far", count);
    }
    println!();
    Ok(())
}

/// Answer every question from a preset like "1,3,2,...".
fn answer_from_preset(session: &mut QuizSession, preset: &str) -> Result<()> {
    let picks: Vec<usize> = preset
        .split(',')
        .map(|s| s.trim().parse::<usize>().context("answers must be numbers"))
        .collect::<Result<_>>()?;

    let mut picks = picks.into_iter();
    while let Some(question) = session.current_question() {
        let Some(pick) = picks.next() else {
            bail!("not enough answers for the question bank");
        };
        let option = question
            .options
            .get(pick.checked_sub(1).context("answers are numbered from 1")?)
            .with_context(|| format!("question has no option {}", pick))?;
        session.record_answer(option.weight)?;
    }
    Ok(())
}

/// Prompt for each question on stdin.
fn answer_interactively(session: &mut QuizSession, shuffle: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut rng = rand::thread_rng();

    loop {
        let Some(question) = session.current_question() else { break };
        let Some((index, total)) = session.progress() else { break };
        println!("[{}/{}] {}", index + 1, total, question.text);

        // Shuffle display order only; the recorded value is the weight
        let mut options: Vec<_> = question.options.iter().collect();
        if shuffle {
            options.shuffle(&mut rng);
        }
        for (i, opt) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, opt.text);
        }

        let weight = loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                bail!("input ended before the quiz was finished");
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => break options[n - 1].weight,
                _ => println!("  pick a number between 1 and {}", options.len()),
            }
        };

        session.record_answer(weight)?;
        println!();
    }
    Ok(())
}

/// Thermometer bar scaled to the terminal.
fn thermometer(bundle: &ResultBundle) -> String {
    let width = 40usize;
    let filled = ((bundle.temperature.fill_percent() / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled.min(width)), "░".repeat(width.saturating_sub(filled)))
}

fn print_list(header: &str, items: &[&str]) {
    println!("{}", header);
    for item in items {
        println!("   • {}", item);
    }
    println!();
}

fn print_result_card(bundle: &ResultBundle) {
    let profile = bundle.profile;

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^58}│", format!("{}  {}", bundle.temperature, profile.emoji));
    println!("│{:^60}│", format!("\"{}\"", profile.title));
    println!("│{:^60}│", profile.subtitle);
    println!("╰{}╯", "─".repeat(60));
    println!();
    println!("   {}", thermometer(bundle));
    println!();
    println!("{}", profile.description);
    println!();

    print_list("✨ TRAITS", profile.traits);
    print_list("🎯 GOOD FOR YOU", profile.activities);
    print_list("⚠️  WATCH OUT", profile.warnings);

    println!("💕 COMPATIBILITY");
    println!("   {}", profile.compatibility);
    println!();

    println!("📈 YOUR HISTORY");
    println!("   {}", bundle.comparison_text);
    if bundle.streak > 1 {
        println!("   {} days in a row - keep it up!", bundle.streak);
    }
    println!();

    println!("📤 SHARE");
    for line in share_text(
        bundle.temperature,
        profile.title,
        profile.emoji,
        profile.subtitle,
    )
    .lines()
    {
        println!("   {}", line);
    }
    println!();
}

fn print_premium(bundle: &ResultBundle) {
    let profile = bundle.profile;

    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", "IN-DEPTH RESULT");
    println!("╰{}╯", "─".repeat(60));
    println!();

    println!("📊 EMOTION PATTERN");
    println!("   {}", bundle.emotion_pattern);
    println!();

    println!("📅 THIS MONTH");
    println!("   {}", bundle.monthly_advice);
    println!();

    println!("🧘 WEEKLY ROUTINE");
    for line in WEEKLY_ROUTINE {
        println!("   • {}", line);
    }
    println!();

    println!("💬 ADVICE");
    println!("   {}", profile.advice);
    if let Some(quote) = profile.quote {
        println!();
        println!("   \"{}\"", quote);
    }
    println!();
}

fn print_history(db: &Database) -> Result<()> {
    let tracker = HistoryTracker::new(db);
    let entries = tracker.load()?;

    if entries.is_empty() {
        println!("No results yet. Run `emotherm` to take the test.");
        return Ok(());
    }

    println!();
    println!("📜 RESULT HISTORY ({} of 30 kept)", entries.len());
    for entry in &entries {
        println!("   {}  {:>5}  {}", entry.date, entry.temperature.to_string(), entry.title);
    }
    println!();

    let streak = emotherm_core::history::compute_streak(&entries, Local::now().date_naive());
    if streak > 0 {
        println!("   Current streak: {} day(s)", streak);
    }
    println!("   {}", format_comparison_opt(emotherm_core::history::compare(&entries)));
    println!();
    Ok(())
}
