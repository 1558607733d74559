// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Timed tasks scheduling.
use futures_util::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::oneshot,
    time::{self, Instant, MissedTickBehavior},
};

/// Runs tasks after a delay or at a fixed period.
pub trait Scheduler: Send + Sync + 'static {
    /// Runs `task` every `period`, the first run is one period from now.
    ///
    /// A slow task delays the next run.
    fn repeat<F, Fut>(&self, period: Duration, task: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static;

    /// Runs `task` once after `delay`.
    fn once<Fut>(&self, delay: Duration, task: Fut) -> TaskHandle
    where
        Fut: Future<Output = ()> + Send + 'static;
}

/// A scheduled task, the task is cancelled when the handle is dropped.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TaskHandle {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the task.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// A scheduler that runs tasks on the tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn repeat<F, Fut>(&self, period: Duration, mut task: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    // Handle dropped or cancelled.
                    _ = &mut cancel_rx => break,
                    _ = interval.tick() => task().await,
                }
            }
        });

        TaskHandle::new(move || {
            let _ = cancel_tx.send(());
        })
    }

    fn once<Fut>(&self, delay: Duration, task: Fut) -> TaskHandle
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel_rx => {},
                _ = time::sleep(delay) => task.await,
            }
        });

        TaskHandle::new(move || {
            let _ = cancel_tx.send(());
        })
    }
}

enum Job {
    Repeat {
        period: Duration,
        task: Box<dyn FnMut() -> BoxFuture<'static, ()> + Send>,
    },
    Once(BoxFuture<'static, ()>),
}

struct Entry {
    id: u64,
    due: Duration,
    cancelled: Arc<AtomicBool>,
    job: Job,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// A scheduler driven by a virtual clock.
///
/// Tasks only run when the clock is moved forward with
/// [ManualScheduler::advance], in due time order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualScheduler {
    /// Creates a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// The number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.entries.retain(|e| !e.cancelled.load(Ordering::Acquire));
        inner.entries.len()
    }

    /// Moves the clock forward running all the tasks that become due.
    pub async fn advance(&self, by: Duration) {
        let target = self.now() + by;

        while let Some(mut entry) = self.take_due(target) {
            match entry.job {
                Job::Repeat {
                    period,
                    ref mut task,
                } => {
                    task().await;

                    if !entry.cancelled.load(Ordering::Acquire) {
                        entry.due += period;
                        self.inner.lock().entries.push(entry);
                    }
                }
                Job::Once(fut) => fut.await,
            }
        }

        self.inner.lock().now = target;
    }

    /// Removes the earliest task due at or before `target`.
    fn take_due(&self, target: Duration) -> Option<Entry> {
        let mut inner = self.inner.lock();
        inner.entries.retain(|e| !e.cancelled.load(Ordering::Acquire));

        let pos = inner
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(pos, _)| pos)?;

        let entry = inner.entries.swap_remove(pos);
        inner.now = entry.due;
        Some(entry)
    }

    fn schedule(&self, delay: Duration, job: Job) -> TaskHandle {
        let cancelled = Arc::new(AtomicBool::new(false));

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let due = inner.now + delay;
        inner.entries.push(Entry {
            id,
            due,
            cancelled: cancelled.clone(),
            job,
        });

        TaskHandle::new(move || cancelled.store(true, Ordering::Release))
    }
}

impl Scheduler for ManualScheduler {
    fn repeat<F, Fut>(&self, period: Duration, mut task: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = Box::new(move || task().boxed());
        self.schedule(period, Job::Repeat { period, task })
    }

    fn once<Fut>(&self, delay: Duration, task: Fut) -> TaskHandle
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.schedule(delay, Job::Once(task.boxed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() -> BoxFuture<'static, ()> + Send) {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = count.clone();
        let task = move || {
            let count = task_count.clone();
            async move {
                count.fetch_add(1, Ordering::Relaxed);
            }
            .boxed()
        };

        (count, task)
    }

    #[tokio::test]
    async fn manual_repeat() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();

        let handle = scheduler.repeat(Duration::from_secs(2), task);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1999)).await;
        assert_eq!(count.load(Ordering::Relaxed), 0);

        scheduler.advance(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);

        scheduler.advance(Duration::from_secs(6)).await;
        assert_eq!(count.load(Ordering::Relaxed), 4);
        assert_eq!(scheduler.now(), Duration::from_secs(8));

        handle.cancel();
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::Relaxed), 4);
    }

    #[tokio::test]
    async fn manual_once_and_drop() {
        let scheduler = ManualScheduler::new();
        let (count, mut task) = counter();

        let _kept = scheduler.once(Duration::from_secs(3), task());
        let dropped = scheduler.once(Duration::from_secs(1), task());
        drop(dropped);

        scheduler.advance(Duration::from_secs(3)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn manual_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for (name, delay) in [("c", 3), ("a", 1), ("b", 2)] {
            let order = order.clone();
            let task = async move { order.lock().push(name) };
            handles.push(scheduler.once(Duration::from_secs(delay), task));
        }

        scheduler.advance(Duration::from_secs(5)).await;
        assert_eq!(*order.lock(), vec!["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_repeat() {
        let (count, task) = counter();

        let handle = TokioScheduler.repeat(Duration::from_secs(2), task);

        time::sleep(Duration::from_millis(4500)).await;
        assert_eq!(count.load(Ordering::Relaxed), 2);

        handle.cancel();
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_once_cancelled_on_drop() {
        let (count, mut task) = counter();

        let handle = TokioScheduler.once(Duration::from_secs(3), task());
        drop(handle);

        let _handle = TokioScheduler.once(Duration::from_secs(3), task());

        time::sleep(Duration::from_secs(4)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }
}
