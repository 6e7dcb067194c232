//! Frame and timer scheduling seams
//!
//! The browser drives the carousel from `requestAnimationFrame` and a debounced
//! resize timer. Both are reached through the traits here so the controller can
//! be exercised with a manual frame clock and a manual timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::carousel::{CarouselController, CarouselSurface};

/// Source of display-refresh callbacks
pub trait FrameScheduler {
    /// Run `callback` once, on the next frame
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Handle to a self-rearming frame loop
#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start rendering `controller` every frame until `stop` is called
    pub fn start<S, F>(controller: Rc<RefCell<CarouselController<S>>>, scheduler: F) -> Self
    where
        S: CarouselSurface + 'static,
        F: FrameScheduler + Clone + 'static,
    {
        let running = Rc::new(Cell::new(true));
        schedule_next(controller, scheduler, running.clone());
        Self { running }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop re-arming; the already requested frame becomes a no-op
    pub fn stop(&self) {
        self.running.set(false);
    }
}

fn schedule_next<S, F>(
    controller: Rc<RefCell<CarouselController<S>>>,
    scheduler: F,
    running: Rc<Cell<bool>>,
) where
    S: CarouselSurface + 'static,
    F: FrameScheduler + Clone + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        if !running.get() {
            return;
        }
        controller.borrow_mut().frame();
        schedule_next(controller, next, running);
    }));
}

/// One-shot timer whose handle cancels the timer when dropped
pub trait DebounceTimer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Cancel-and-reschedule debouncer: only the last trigger in a burst fires
pub struct Debouncer<T: DebounceTimer> {
    timer: T,
    delay_ms: u32,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: DebounceTimer> Debouncer<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replace any pending callback with `callback`, restarting the quiet period
    pub fn trigger(&self, callback: impl FnOnce() + 'static) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
        let handle = self.timer.schedule(self.delay_ms, Box::new(callback));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending callback, if any
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Debounce a relayout of `controller`; the layout is skipped once `frame_loop` has stopped
pub fn schedule_relayout<S, T>(
    debouncer: &Debouncer<T>,
    controller: &Rc<RefCell<CarouselController<S>>>,
    frame_loop: &FrameLoop,
) where
    S: CarouselSurface + 'static,
    T: DebounceTimer,
{
    let controller = controller.clone();
    let frame_loop = frame_loop.clone();
    debouncer.trigger(move || {
        if !frame_loop.is_running() {
            return;
        }
        if let Err(err) = controller.borrow_mut().layout() {
            tracing::warn!(%err, "carousel relayout skipped");
        }
    });
}

/// Frame scheduler that runs queued callbacks only when ticked
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualFrameClock {
    queue: Rc<RefCell<std::collections::VecDeque<Box<dyn FnOnce()>>>>,
    frames: Rc<Cell<u64>>,
}

#[cfg(test)]
impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the callbacks requested before this tick
    pub fn tick(&self) {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for callback in due {
            callback();
        }
        self.frames.set(self.frames.get() + 1);
    }

    pub fn advance(&self, frames: u64) {
        for _ in 0..frames {
            self.tick();
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

#[cfg(test)]
impl FrameScheduler for ManualFrameClock {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
struct ManualEntry {
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

/// Timer driven by explicit `advance` calls
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualTimer {
    now_ms: Rc<Cell<u64>>,
    entries: Rc<RefCell<Vec<ManualEntry>>>,
}

/// Cancels its timer entry on drop
#[cfg(test)]
pub struct ManualTimerHandle {
    cancelled: Rc<Cell<bool>>,
}

#[cfg(test)]
impl Drop for ManualTimerHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

#[cfg(test)]
impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Move time forward and fire every live entry that came due
    pub fn advance(&self, ms: u64) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);

        let due: Vec<ManualEntry> = {
            let mut entries = self.entries.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) =
                entries.drain(..).partition(|e| e.due_ms <= now);
            *entries = waiting;
            due
        };
        for entry in due {
            if !entry.cancelled.get() {
                (entry.callback)();
            }
        }
    }

    /// Entries still waiting that have not been cancelled
    pub fn live_entries(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }
}

#[cfg(test)]
impl DebounceTimer for ManualTimer {
    type Handle = ManualTimerHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.borrow_mut().push(ManualEntry {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            cancelled: cancelled.clone(),
            callback,
        });
        ManualTimerHandle { cancelled }
    }
}
