//! Frame loop state machine.
//!
//! The loop never nests callbacks: the host scheduler invokes
//! [`RenderLoop::on_frame`] once per requested frame, and at most one request
//! is outstanding at any time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Animated,
    StaticOneShot,
}

/// Opaque id returned by the host when a frame is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// `None` when the host could not schedule a frame.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Whatever the loop drives each frame.
pub trait FrameTarget {
    fn tick(&mut self, now_ms: f64);
    fn render_static(&mut self, now_ms: f64);
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32);
}

#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    reduced_motion: bool,
    pending: Option<FrameHandle>,
}

impl RenderLoop {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            state: LoopState::Stopped,
            reduced_motion,
            pending: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Begin animating, or under reduced motion draw one static frame and stop.
    pub fn start<T, S>(&mut self, target: &mut T, scheduler: &mut S, now_ms: f64)
    where
        T: FrameTarget + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.reduced_motion {
            self.state = LoopState::StaticOneShot;
            target.render_static(now_ms);
            self.state = LoopState::Stopped;
            log::info!("[loop] reduced motion: rendered static frame");
            return;
        }
        if self.state == LoopState::Animated && self.pending.is_some() {
            return;
        }
        self.state = LoopState::Animated;
        self.schedule(scheduler);
        log::info!("[loop] animating");
    }

    /// Scheduler callback. Stale callbacks after a cancel are ignored.
    pub fn on_frame<T, S>(&mut self, target: &mut T, scheduler: &mut S, now_ms: f64)
    where
        T: FrameTarget + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        self.pending = None;
        if self.state != LoopState::Animated {
            return;
        }
        target.tick(now_ms);
        self.schedule(scheduler);
    }

    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Stopped {
            log::info!("[loop] stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Cancel the pending frame, rebuild the target for the new size, restart.
    pub fn restart_after_resize<T, S>(
        &mut self,
        target: &mut T,
        scheduler: &mut S,
        size: (f32, f32),
        device_pixel_ratio: f32,
        now_ms: f64,
    ) where
        T: FrameTarget + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        self.cancel(scheduler);
        target.resize(size.0, size.1, device_pixel_ratio);
        self.start(target, scheduler, now_ms);
    }

    fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.pending.is_none() {
            self.pending = scheduler.request_frame();
            if self.pending.is_none() {
                log::warn!("[loop] frame request failed");
            }
        }
    }
}
