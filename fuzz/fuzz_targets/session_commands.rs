// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for session command sequences.
//!
//! Any interleaving of filter changes, moves, jumps and selections must keep
//! the cursor inside the visible list and keep answers keyed to real
//! positions.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quizbank::testing::{make_question, make_topic_set};
use quizbank::{QuizKind, QuizMode, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CHAPTERS: [&str; 3] = ["All", "Statics", "Dynamics"];

#[derive(Debug, Arbitrary)]
enum Command {
    Chapter(u8),
    Search(String),
    Next,
    Jump(u8),
    Select(u8),
    Submit,
}

#[derive(Debug, Arbitrary)]
struct Script {
    quiz_mode: bool,
    seed: u64,
    questions: Vec<(String, u8, bool)>,
    commands: Vec<Command>,
}

fuzz_target!(|script: Script| {
    let questions = script
        .questions
        .iter()
        .map(|(text, answer, statics)| {
            let answer = ["A", "B", "C", "D"][*answer as usize % 4];
            make_question(text, answer, if *statics { "Statics" } else { "Dynamics" })
        })
        .collect();
    let set = make_topic_set("Fuzzed", &CHAPTERS[1..], questions);
    let total = set.questions.len();
    let mode = if script.quiz_mode { QuizMode::Quiz } else { QuizMode::Solution };
    let mut session =
        QuizSession::with_rng(set, QuizKind::Year, mode, StdRng::seed_from_u64(script.seed));

    for command in script.commands {
        match command {
            Command::Chapter(c) => session.select_chapter(CHAPTERS[c as usize % CHAPTERS.len()]),
            Command::Search(term) => session.set_search_term(&term),
            Command::Next => {
                session.next();
            }
            Command::Jump(i) => {
                let before = session.cursor();
                if session.jump_to(i as usize).is_err() {
                    assert_eq!(session.cursor(), before);
                }
            }
            Command::Select(i) => {
                session.select_option_index(i as usize);
            }
            Command::Submit => {
                session.submit();
            }
        }

        let visible = session.visible_positions();
        assert!(visible.iter().all(|&p| p < total));
        if let Some(position) = session.current_position() {
            assert!(visible.contains(&position));
        }
        assert_eq!(session.answers().len(), total);
    }
});
