//! Timer-driven animation tests
//!
//! Runs the typewriter and counter drivers on tokio's paused clock so time
//! can be advanced deterministically, and checks that cancelled animations
//! never report another frame.

use std::sync::Arc;
use std::time::Duration;

use kinetic_core::{
    run_counter, spawn_counter, spawn_typewriter, CancellationToken, Counter, CounterConfig,
    Phase, Typewriter, TypewriterConfig,
};
use parking_lot::Mutex;

// ============================================================================
// Test Utilities
// ============================================================================

type Frames<T> = Arc<Mutex<Vec<T>>>;

fn frames<T>() -> Frames<T> {
    Arc::new(Mutex::new(Vec::new()))
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn typewriter(strings: &[&str], typing: u64, deleting: u64, pause: u64) -> Typewriter {
    let config = TypewriterConfig::new(strings.iter().copied()).with_timing(typing, deleting, pause);
    Typewriter::new(config).unwrap()
}

// ============================================================================
// Typewriter
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_typewriter_frames_follow_timing() {
    let seen: Frames<(String, Phase)> = frames();
    let sink = seen.clone();
    let handle = spawn_typewriter(typewriter(&["ab"], 100, 50, 1000), move |text, phase| {
        sink.lock().push((text.to_string(), phase));
    });

    advance(150).await;
    assert_eq!(seen.lock().len(), 1, "one char after the first typing delay");

    advance(100).await;
    assert_eq!(seen.lock().last().unwrap().0, "ab");
    assert_eq!(seen.lock().last().unwrap().1, Phase::Paused);

    // Still holding during the pause
    advance(500).await;
    assert_eq!(seen.lock().len(), 2);

    advance(600).await;
    let texts: Vec<String> = seen.lock().iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(texts, vec!["a", "ab", "ab", "a", ""]);

    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_cycle_completeness() {
    let seen: Frames<String> = frames();
    let sink = seen.clone();
    let handle = spawn_typewriter(typewriter(&["A", "BB"], 1, 1, 1), move |text, _| {
        sink.lock().push(text.to_string());
    });

    advance(20).await;
    handle.cancel();
    handle.join().await;

    let mut rendered = vec![String::new()];
    rendered.extend(seen.lock().iter().take(8).cloned());
    assert_eq!(rendered, vec!["", "A", "A", "", "B", "BB", "BB", "B", ""]);
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_cancel_stops_frames() {
    let seen: Frames<String> = frames();
    let sink = seen.clone();
    let handle = spawn_typewriter(typewriter(&["hello"], 10, 10, 10), move |text, _| {
        sink.lock().push(text.to_string());
    });

    advance(35).await;
    handle.cancel();
    let count = seen.lock().len();
    assert!(count > 0);

    advance(10_000).await;
    assert_eq!(seen.lock().len(), count);
    assert!(handle.is_cancelled());
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_cancels() {
    let seen: Frames<String> = frames();
    let sink = seen.clone();
    {
        let _handle = spawn_typewriter(typewriter(&["xyz"], 10, 10, 10), move |text, _| {
            sink.lock().push(text.to_string());
        });
        advance(25).await;
    }
    let count = seen.lock().len();
    advance(1000).await;
    assert_eq!(seen.lock().len(), count);
}

// ============================================================================
// Counter
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_counter_lands_on_target() {
    let mut counter = Counter::new(CounterConfig {
        start_value: 0.0,
        end_value: 1000.0,
        duration_ms: 2000.0,
        ..Default::default()
    })
    .unwrap();
    assert!(counter.trigger());

    let seen: Frames<i64> = frames();
    let sink = seen.clone();
    let handle = spawn_counter(counter, move |value| sink.lock().push(value));

    advance(1000).await;
    let midway = *seen.lock().last().unwrap();
    assert!(midway > 500 && midway < 1000, "ease-out is past half at half time: {midway}");

    advance(1100).await;
    let values = seen.lock().clone();
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&1000));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_counter_runs_once() {
    let mut counter = Counter::new(CounterConfig::to(50.0)).unwrap();
    assert!(counter.trigger());

    let finished = run_counter(counter, CancellationToken::new(), |_| {}).await;
    assert!(finished.is_finished());
    assert_eq!(finished.value(), 50);

    // A second visibility signal on the same instance does nothing
    let mut again = finished.clone();
    assert!(!again.trigger());
    let mut frames_seen = 0;
    let again = run_counter(again, CancellationToken::new(), |_| frames_seen += 1).await;
    assert_eq!(frames_seen, 0);
    assert_eq!(again.value(), 50);
}

#[tokio::test(start_paused = true)]
async fn test_untriggered_counter_does_not_run() {
    let counter = Counter::new(CounterConfig::to(50.0)).unwrap();
    let mut frames_seen = 0;
    let counter = run_counter(counter, CancellationToken::new(), |_| frames_seen += 1).await;
    assert_eq!(frames_seen, 0);
    assert!(!counter.has_started());
}

#[tokio::test(start_paused = true)]
async fn test_counter_teardown_mid_animation() {
    let mut counter = Counter::new(CounterConfig::to(1000.0)).unwrap();
    counter.trigger();

    let seen: Frames<i64> = frames();
    let sink = seen.clone();
    let handle = spawn_counter(counter, move |value| sink.lock().push(value));

    advance(500).await;
    drop(handle);
    let count = seen.lock().len();
    let last = *seen.lock().last().unwrap();
    assert!(last < 1000);

    advance(5000).await;
    assert_eq!(seen.lock().len(), count);
}
