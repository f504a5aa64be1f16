//! Timer-driven runners for the animation state machines.
//!
//! Each runner keeps at most one pending timer: it sleeps, performs one
//! transition, reports the frame and schedules the next sleep. Cancellation is
//! a single call on the [`CancellationToken`] (or [`AnimationHandle::cancel`]);
//! once cancelled, no further frame is reported.
//!
//! The `run_*` functions are plain futures without `Send` bounds so UI
//! runtimes can drive them on their own executor; the `spawn_*` helpers put
//! them on the tokio runtime and hand back an owning [`AnimationHandle`].

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::counter::Counter;
use crate::typewriter::{Phase, Typewriter};

/// Interval between counter frames (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Sleep for `delay` unless cancelled first. Returns `false` on cancellation.
async fn wait(cancel: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(delay) => !cancel.is_cancelled(),
    }
}

/// Cycle the typewriter until cancelled, reporting every rendered text.
///
/// The initial (empty) text is not reported; the first frame arrives after
/// [`Typewriter::initial_delay`].
pub async fn run_typewriter<F>(mut machine: Typewriter, cancel: CancellationToken, mut on_frame: F)
where
    F: FnMut(&str, Phase),
{
    let mut delay = machine.initial_delay();
    while wait(&cancel, delay).await {
        let tick = machine.tick();
        on_frame(machine.text(), tick.phase);
        delay = tick.delay;
    }
    tracing::trace!(index = machine.index(), "Typewriter stopped");
}

/// Run a triggered counter to completion, reporting each displayed value.
///
/// A counter that is idle or already finished is returned untouched, so a
/// second runner for the same instance never animates. The last reported
/// value of an uncancelled run is always [`Counter::target`].
pub async fn run_counter<F>(mut counter: Counter, cancel: CancellationToken, mut on_frame: F) -> Counter
where
    F: FnMut(i64),
{
    if !counter.is_running() {
        return counter;
    }

    let started = Instant::now();
    on_frame(counter.sample(Duration::ZERO));

    while !counter.is_finished() {
        if !wait(&cancel, FRAME_INTERVAL).await {
            tracing::trace!(value = counter.value(), "Counter cancelled");
            break;
        }
        on_frame(counter.sample(started.elapsed()));
    }
    counter
}

/// Owning handle to a spawned animation.
///
/// Dropping the handle cancels the animation.
#[derive(Debug)]
pub struct AnimationHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    /// Stop the animation. No frame is reported after this returns.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the underlying task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the task to exit (after completion or cancellation).
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Animation task failed: {}", e);
            }
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn a typewriter on the tokio runtime.
pub fn spawn_typewriter<F>(machine: Typewriter, on_frame: F) -> AnimationHandle
where
    F: FnMut(&str, Phase) + Send + 'static,
{
    let cancel = CancellationToken::new();
    let task = tokio::spawn(run_typewriter(machine, cancel.clone(), on_frame));
    AnimationHandle {
        cancel,
        task: Some(task),
    }
}

/// Spawn a counter on the tokio runtime. The counter must already be triggered.
pub fn spawn_counter<F>(counter: Counter, on_frame: F) -> AnimationHandle
where
    F: FnMut(i64) + Send + 'static,
{
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        run_counter(counter, token, on_frame).await;
    });
    AnimationHandle {
        cancel,
        task: Some(task),
    }
}
