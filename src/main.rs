// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::Mutex;

use quizbank::config::validate_penalty;
use quizbank::logging::init_tracing;
use quizbank::{
    apply_filters, chapter_counts, load_corpus, load_set, option_index_for_key,
    question_number_to_index, run_index, score, validate_corpus, Advance, Config, QuizKind,
    QuizMode, QuizSession, QuizTimer, ScoreReport, Selection, SetKey, SharedIndex,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a command. Returns the process exit code.
fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref())?;
    let data_dir = |data: Option<PathBuf>| data.unwrap_or_else(|| config.data_dir.clone());

    match cli.command {
        Commands::Index { data, output } => {
            run_index(&data_dir(data), output.as_deref())?;
        }
        Commands::Search {
            data,
            query,
            limit,
            json,
        } => run_search(&config, &data_dir(data), &query, limit, json)?,
        Commands::Chapters { data, set, json } => run_chapters(&data_dir(data), &set, json)?,
        Commands::Show {
            data,
            set,
            chapter,
            search,
            mode,
        } => run_show(&data_dir(data), &set, &chapter, &search, mode)?,
        Commands::Score {
            data,
            set,
            answers,
            penalty,
            json,
        } => run_score(&config, &data_dir(data), &set, &answers, penalty, json)?,
        Commands::Take {
            data,
            set,
            mode,
            jump,
            penalty,
        } => run_take(&config, &data_dir(data), &set, mode, jump, penalty)?,
        Commands::Validate { data, json } => return run_validate(&data_dir(data), json),
    }
    Ok(0)
}

fn resolve_penalty(config: &Config, flag: Option<f64>) -> Result<f64> {
    let penalty = flag.unwrap_or(config.scoring.penalty);
    validate_penalty(penalty)?;
    Ok(penalty)
}

/// Topic sets only run in solution mode.
fn effective_mode(kind: QuizKind, requested: QuizMode) -> QuizMode {
    if kind == QuizKind::Topic && requested == QuizMode::Quiz {
        tracing::warn!("topic sets run in solution mode only");
        return QuizMode::Solution;
    }
    requested
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    config: &Config,
    data_dir: &Path,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let corpus = load_corpus(data_dir)?;
    let shared = SharedIndex::new();
    shared.rebuild(&corpus.sets);

    let hits = shared.search(query)?;
    let limit = limit.unwrap_or(config.search.limit);
    let shown = &hits[..hits.len().min(limit)];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No questions match \"{}\".", query.trim());
        return Ok(());
    }

    section_top(&format!("{} results for \"{}\"", hits.len(), query.trim()));
    for hit in shown {
        row(&format!(
            " {} {} {}",
            kind_badge(hit.kind),
            themed(CYAN, &[BOLD], &hit.title),
            themed(GRAY, &[], &format!("{} #{}", hit.set_key(), hit.index))
        ));
        row(&format!("   {}", truncate(&hit.question, BOX_WIDTH - 4)));
    }
    if shown.len() < hits.len() {
        row(&themed(
            GRAY,
            &[DIM],
            &format!(" showing {} of {}", shown.len(), hits.len()),
        ));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SINGLE-SET COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

fn run_chapters(data_dir: &Path, key: &SetKey, json: bool) -> Result<()> {
    let set = load_set(data_dir, key)?;
    let counts = chapter_counts(&set);

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    section_top(&set.title);
    for count in &counts {
        row(&format!(
            " {}{}",
            pad_right(&count.chapter, BOX_WIDTH - 8),
            themed(YELLOW, &[], &format!("{:>5}", count.count))
        ));
    }
    section_bot();
    Ok(())
}

fn run_show(
    data_dir: &Path,
    key: &SetKey,
    chapter: &str,
    search: &str,
    mode: QuizMode,
) -> Result<()> {
    let set = load_set(data_dir, key)?;
    let mode = effective_mode(key.kind, mode);
    let visible = apply_filters(&set.questions, chapter, search, mode, &mut rand::rng());

    if visible.is_empty() {
        println!("No questions match these filters.");
        return Ok(());
    }

    println!(
        "{} {}",
        themed(CYAN, &[BOLD], &set.title),
        themed(GRAY, &[], &format!("({} of {} questions)", visible.len(), set.len()))
    );
    for (shown, &position) in visible.iter().enumerate() {
        let q = &set.questions[position];
        println!();
        println!(
            "{}. {} {}",
            shown + 1,
            q.text,
            themed(GRAY, &[DIM], &format!("[{} · #{}]", q.chapter, position))
        );
        for (i, option) in q.options.iter().enumerate() {
            println!("   {}) {}", option_letter(i), option);
        }
    }
    Ok(())
}

fn run_score(
    config: &Config,
    data_dir: &Path,
    key: &SetKey,
    answers_path: &Path,
    penalty: Option<f64>,
    json: bool,
) -> Result<()> {
    let set = load_set(data_dir, key)?;
    let penalty = resolve_penalty(config, penalty)?;

    let content = fs::read_to_string(answers_path)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let answers: Vec<Option<String>> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of strings or nulls", answers_path.display()))?;
    if answers.len() != set.len() {
        tracing::warn!(
            answers = answers.len(),
            questions = set.len(),
            "answer sheet length differs from question count"
        );
    }

    let report = score(&set.questions, &answers, penalty);
    let share = report.share_message(&set.title, &config.share.site_title);

    if json {
        let out = serde_json::json!({ "report": report, "share": share });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_report(&report, &share);
    }
    Ok(())
}

fn print_report(report: &ScoreReport, share: &str) {
    section_top("Result");
    row(&format!(" Correct      {}", themed(GREEN, &[], &report.correct.to_string())));
    row(&format!(" Incorrect    {}", themed(RED, &[], &report.incorrect.to_string())));
    row(&format!(" Unattempted  {}", themed(GRAY, &[], &report.unattempted.to_string())));
    row(&format!(" Total        {}", score_total(report.total)));
    row("");
    row(&format!(" {}", report.summary_line()));
    section_bot();
    println!("{}", share);
}

// ═══════════════════════════════════════════════════════════════════════════
// VALIDATE
// ═══════════════════════════════════════════════════════════════════════════

fn run_validate(data_dir: &Path, json: bool) -> Result<i32> {
    let report = validate_corpus(data_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Files scanned: {}", report.files_scanned);
        if report.errors.is_empty() {
            println!("{}", themed(GREEN, &[], "No structural errors found."));
        } else {
            println!("\n{}", themed(RED, &[BOLD], "Errors:"));
            for (i, issue) in report.errors.iter().enumerate() {
                println!("{}. {}", i + 1, issue);
            }
        }
        if !report.warnings.is_empty() {
            println!("\n{}", themed(YELLOW, &[BOLD], "Warnings:"));
            for issue in &report.warnings {
                println!("- {}", issue);
            }
        }
        if report.chapter_variants.is_empty() {
            println!("\nAll chapter names look consistent.");
        } else {
            println!("\n{}", themed(YELLOW, &[BOLD], "Chapter name consistency warnings:"));
            for group in &report.chapter_variants {
                let variants: Vec<String> =
                    group.variants.iter().map(|v| format!("'{}'", v)).collect();
                println!("- '{}': {}", group.normalized, variants.join(", "));
            }
        }
    }

    Ok(if report.is_ok() { 0 } else { 1 })
}

// ═══════════════════════════════════════════════════════════════════════════
// TAKE (interactive)
// ═══════════════════════════════════════════════════════════════════════════

const TAKE_HELP: &str = "a-d / 1-4 answer · n next · j <#> jump · c <chapter> · s <term> · l chapters · submit · q quit";

fn option_letter(i: usize) -> char {
    (b'a' + (i % 26) as u8) as char
}

fn run_take(
    config: &Config,
    data_dir: &Path,
    key: &SetKey,
    mode: QuizMode,
    jump: Option<usize>,
    penalty: Option<f64>,
) -> Result<()> {
    let set = load_set(data_dir, key)?;
    let penalty = resolve_penalty(config, penalty)?;
    let mode = effective_mode(key.kind, mode);
    let title = set.title.clone();
    let site = config.share.site_title.clone();

    let (session, mode) = match jump {
        Some(index) => {
            if mode == QuizMode::Quiz {
                tracing::warn!("--jump opens the set in solution mode");
            }
            let session = QuizSession::open_at(set, key.kind, index)?;
            (session, QuizMode::Solution)
        }
        None => (QuizSession::new(set, key.kind, mode), mode),
    };
    let session = Arc::new(Mutex::new(session.with_penalty(penalty)));

    let timer = (mode == QuizMode::Quiz).then(|| {
        let on_expire = {
            let session = Arc::clone(&session);
            let title = title.clone();
            let site = site.clone();
            move || {
                let report = session.lock().report();
                println!("\n⏰ Time is up! Your answers were submitted automatically.");
                print_report(&report, &report.share_message(&title, &site));
                println!("Press Enter to exit.");
            }
        };
        let gate = session.lock().gate();
        QuizTimer::start(config.time_limit(), gate, on_expire)
    });

    println!("{}", themed(CYAN, &[BOLD], &title));
    println!("{}", themed(GRAY, &[DIM], TAKE_HELP));
    render_current(&session.lock(), timer.as_ref());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim();
        let (command, arg) = input.split_once(' ').unwrap_or((input, ""));
        let arg = arg.trim();

        let mut s = session.lock();
        if s.is_submitted() {
            break;
        }

        if let Some(index) = option_index_for_key(command) {
            match s.select_option_index(index) {
                Selection::Recorded { .. } => println!("Answer saved."),
                Selection::Graded(feedback) => {
                    println!("{}", feedback_label(feedback));
                    if let Some(q) = s.current() {
                        println!("Answer: {}", q.answer);
                        if !q.explanation_text().is_empty() {
                            println!("{}", themed(GRAY, &[], q.explanation_text()));
                        }
                    }
                }
                Selection::Ignored => println!("No such option."),
                Selection::Closed => break,
            }
            continue;
        }

        match command {
            "" | "n" | "next" => match s.next() {
                Advance::Moved(_) => render_current(&s, timer.as_ref()),
                Advance::PromptSubmit => println!("This is the last question. Type 'submit' to finish."),
                Advance::Exhausted => {
                    println!("{}", s.tally().fraction());
                    break;
                }
            },
            "j" | "jump" => match question_number_to_index(arg) {
                Some(index) => match s.jump_to(index) {
                    Ok(()) => render_current(&s, timer.as_ref()),
                    Err(e) => println!("{}", e),
                },
                None => println!("Usage: j <question #>"),
            },
            "c" | "chapter" => {
                s.select_chapter(if arg.is_empty() { quizbank::ALL_CHAPTERS } else { arg });
                render_current(&s, timer.as_ref());
            }
            "s" | "search" => {
                s.set_search_term(arg);
                render_current(&s, timer.as_ref());
            }
            "l" | "chapters" => {
                for count in s.chapter_counts() {
                    println!("  {} ({})", count.chapter, count.count);
                }
            }
            "submit" => {
                if mode != QuizMode::Quiz {
                    println!("Nothing to submit in solution mode. {}", s.tally().fraction());
                    continue;
                }
                if let Some(timer) = &timer {
                    timer.cancel();
                }
                if let Some(report) = s.submit() {
                    print_report(&report, &report.share_message(&title, &site));
                }
                break;
            }
            "q" | "quit" => {
                if let Some(timer) = &timer {
                    timer.cancel();
                }
                if mode == QuizMode::Solution {
                    println!("{}", s.tally().fraction());
                }
                break;
            }
            "?" | "h" | "help" => println!("{}", TAKE_HELP),
            other => println!("Unknown command '{}'. {}", other, TAKE_HELP),
        }
    }

    // An expiry that already won the gate finishes printing its report.
    if let Some(timer) = timer {
        timer.cancel();
        timer.wait();
    }
    io::stdout().flush().ok();
    Ok(())
}

fn render_current(session: &QuizSession, timer: Option<&QuizTimer>) {
    let total = session.visible_positions().len();
    let Some((position, q)) = session.current_position().zip(session.current()) else {
        println!("No questions match these filters.");
        return;
    };

    let clock_part = timer
        .map(|t| format!("  {}", clock(t.remaining())))
        .unwrap_or_default();
    println!();
    println!(
        "{}{}",
        themed(
            GRAY,
            &[],
            &format!("Question {} of {} · {}", session.cursor() + 1, total, q.chapter)
        ),
        clock_part
    );
    println!("{}", themed(CYAN, &[BOLD], &q.text));

    let selected = session.answers()[position].as_deref();
    for (i, option) in q.options.iter().enumerate() {
        let marker = if selected == Some(option.as_str()) { "●" } else { " " };
        println!(" {} {}) {}", marker, option_letter(i), option);
    }
}
