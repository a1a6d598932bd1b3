//! Timer-driven auto-submit racing a manual submit.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use quizbank::{QuizKind, QuizMode, QuizSession, QuizTimer, ScoreReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::*;

fn shared_session() -> Arc<Mutex<QuizSession>> {
    let set = fixture_set(&mechanical_2020_key());
    Arc::new(Mutex::new(QuizSession::with_rng(
        set,
        QuizKind::Year,
        QuizMode::Quiz,
        StdRng::seed_from_u64(2),
    )))
}

#[test]
fn test_expiry_scores_current_answers() {
    let session = shared_session();
    session.lock().select_option("Pa·s");

    let result: Arc<Mutex<Option<ScoreReport>>> = Arc::new(Mutex::new(None));
    let timer = {
        let session = Arc::clone(&session);
        let result = Arc::clone(&result);
        let gate = session.lock().gate();
        QuizTimer::start(Duration::from_millis(20), gate, move || {
            *result.lock() = Some(session.lock().report());
        })
    };

    assert!(timer.wait());
    let report = result.lock().take().expect("timer should have scored");
    assert_eq!(report.attempted(), 1);
    assert_eq!(report.question_count(), 4);

    // the session is closed to manual submission
    assert!(session.lock().submit().is_none());
    assert!(session.lock().is_submitted());
}

#[test]
fn test_manual_submit_wins_and_timer_is_noop() {
    let session = shared_session();
    let fired = Arc::new(Mutex::new(false));

    let timer = {
        let fired = Arc::clone(&fired);
        let gate = session.lock().gate();
        QuizTimer::start(Duration::from_millis(200), gate, move || {
            *fired.lock() = true;
        })
    };

    assert!(session.lock().submit().is_some());
    timer.cancel();
    assert!(!timer.wait());
    assert!(!*fired.lock());
}

#[test]
fn test_dropping_timer_cancels_it() {
    let session = shared_session();
    let gate = session.lock().gate();
    {
        let _timer = QuizTimer::start(Duration::from_millis(30), Arc::clone(&gate), || {});
    }
    std::thread::sleep(Duration::from_millis(80));
    assert!(!gate.is_committed());
    assert!(session.lock().submit().is_some());
}

#[test]
fn test_expiry_while_session_is_locked_still_reports() {
    let session = shared_session();
    let result: Arc<Mutex<Option<ScoreReport>>> = Arc::new(Mutex::new(None));

    // The interactive loop holds the session while a command runs.
    let mut guard = session.lock();
    guard.select_option("Pa·s");
    let timer = {
        let session = Arc::clone(&session);
        let result = Arc::clone(&result);
        let gate = guard.gate();
        QuizTimer::start(Duration::from_millis(20), gate, move || {
            *result.lock() = Some(session.lock().report());
        })
    };

    let gate = guard.gate();
    while !gate.is_committed() {
        std::thread::sleep(Duration::from_millis(5));
    }

    // A late manual submit loses the gate and gets nothing back.
    timer.cancel();
    assert!(guard.submit().is_none());
    drop(guard);

    // Joining the timer is what delivers the winner's report.
    assert!(timer.wait());
    let report = result.lock().take().expect("expiry report should be delivered");
    assert_eq!(report.attempted(), 1);
}
