// Render loop state transitions against a fake scheduler.

use starfield_core::{FrameHandle, FrameScheduler, FrameTarget, LoopState, RenderLoop};

#[derive(Default)]
struct FakeScheduler {
    next: i32,
    refuse: bool,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    max_pending: usize,
}

impl FakeScheduler {
    /// Fire the oldest pending frame, if any.
    fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        let h = FrameHandle(self.next);
        self.pending.push(h);
        self.max_pending = self.max_pending.max(self.pending.len());
        Some(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
struct CountingTarget {
    ticks: usize,
    statics: usize,
    resizes: Vec<(f32, f32, f32)>,
}

impl FrameTarget for CountingTarget {
    fn tick(&mut self, _now_ms: f64) {
        self.ticks += 1;
    }
    fn render_static(&mut self, _now_ms: f64) {
        self.statics += 1;
    }
    fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.resizes.push((width, height, dpr));
    }
}

fn run_frames(lp: &mut RenderLoop, target: &mut CountingTarget, sched: &mut FakeScheduler, n: usize) {
    for i in 0..n {
        if sched.fire().is_some() {
            lp.on_frame(target, sched, i as f64 * 16.0);
        }
    }
}

#[test]
fn animated_loop_keeps_exactly_one_frame_pending() {
    let mut lp = RenderLoop::new(false);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    assert_eq!(lp.state(), LoopState::Stopped);

    lp.start(&mut target, &mut sched, 0.0);
    assert_eq!(lp.state(), LoopState::Animated);
    run_frames(&mut lp, &mut target, &mut sched, 10);

    assert_eq!(target.ticks, 10);
    assert_eq!(sched.pending.len(), 1);
    assert_eq!(sched.max_pending, 1);
    assert_eq!(lp.pending(), sched.pending.first().copied());
}

#[test]
fn starting_twice_does_not_double_schedule() {
    let mut lp = RenderLoop::new(false);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    lp.start(&mut target, &mut sched, 0.0);
    lp.start(&mut target, &mut sched, 0.0);
    assert_eq!(sched.pending.len(), 1);
}

#[test]
fn reduced_motion_renders_one_static_frame_and_stops() {
    let mut lp = RenderLoop::new(true);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    lp.start(&mut target, &mut sched, 0.0);
    assert_eq!(target.statics, 1);
    assert_eq!(target.ticks, 0);
    assert_eq!(lp.state(), LoopState::Stopped);
    assert!(sched.pending.is_empty());
}

#[test]
fn cancel_stops_and_ignores_stale_callbacks() {
    let mut lp = RenderLoop::new(false);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    lp.start(&mut target, &mut sched, 0.0);
    run_frames(&mut lp, &mut target, &mut sched, 3);
    lp.cancel(&mut sched);
    assert_eq!(lp.state(), LoopState::Stopped);
    assert_eq!(sched.cancelled.len(), 1);
    assert!(sched.pending.is_empty());

    // A callback that raced the cancel does nothing
    lp.on_frame(&mut target, &mut sched, 100.0);
    assert_eq!(target.ticks, 3);
    assert!(sched.pending.is_empty());
}

#[test]
fn resize_cancels_rebuilds_and_resumes() {
    let mut lp = RenderLoop::new(false);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    lp.start(&mut target, &mut sched, 0.0);
    run_frames(&mut lp, &mut target, &mut sched, 2);

    lp.restart_after_resize(&mut target, &mut sched, (1024.0, 768.0), 3.0, 40.0);
    assert_eq!(target.resizes, vec![(1024.0, 768.0, 3.0)]);
    assert_eq!(sched.cancelled.len(), 1);
    assert_eq!(sched.pending.len(), 1);
    assert_eq!(sched.max_pending, 1);
    assert_eq!(lp.state(), LoopState::Animated);
}

#[test]
fn resize_under_reduced_motion_renders_static_frame() {
    let mut lp = RenderLoop::new(true);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler::default();
    lp.start(&mut target, &mut sched, 0.0);
    lp.restart_after_resize(&mut target, &mut sched, (640.0, 480.0), 1.0, 10.0);
    assert_eq!(target.statics, 2);
    assert_eq!(target.resizes.len(), 1);
    assert_eq!(lp.state(), LoopState::Stopped);
    assert!(sched.pending.is_empty());
}

#[test]
fn failed_frame_request_leaves_nothing_pending_and_start_retries() {
    let mut lp = RenderLoop::new(false);
    let mut target = CountingTarget::default();
    let mut sched = FakeScheduler {
        refuse: true,
        ..Default::default()
    };
    lp.start(&mut target, &mut sched, 0.0);
    assert_eq!(lp.state(), LoopState::Animated);
    assert_eq!(lp.pending(), None);

    // Once the host can schedule again, start recovers the loop
    sched.refuse = false;
    lp.start(&mut target, &mut sched, 16.0);
    assert_eq!(sched.pending.len(), 1);
    assert_eq!(lp.pending(), sched.pending.first().copied());
    run_frames(&mut lp, &mut target, &mut sched, 3);
    assert_eq!(target.ticks, 3);
}
