// 3D carousel rotation and the auto-rotate timer policy.

use super::constants::FULL_TURN_DEG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Rotation sign: advancing turns the track clockwise (negative degrees).
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Next => -1,
            Direction::Prev => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CarouselState {
    step_deg: f64,
    // signed step count; the angle is derived so it never drifts
    steps: i64,
}

impl CarouselState {
    /// Step size is fixed here from the slide count. `None` for zero slides.
    pub fn new(slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            step_deg: FULL_TURN_DEG / slide_count as f64,
            steps: 0,
        })
    }

    pub fn step_deg(&self) -> f64 {
        self.step_deg
    }

    /// Net steps taken so far (next is -1, prev is +1).
    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Unbounded running total; never wrapped.
    pub fn rotation_deg(&self) -> f64 {
        self.steps as f64 * self.step_deg
    }

    pub fn rotate(&mut self, direction: Direction) -> f64 {
        self.steps += direction.sign();
        self.rotation_deg()
    }

    pub fn transform(&self) -> String {
        format!("rotateY({}deg)", self.rotation_deg())
    }
}

/// Platform interval timer (`setInterval`/`clearInterval` on the web).
pub trait IntervalHost {
    type Handle;

    fn set_interval(&mut self, period_ms: u32) -> Option<Self::Handle>;
    fn clear_interval(&mut self, handle: Self::Handle);
}

/// Auto-advance timer. Manual interaction calls [`AutoRotate::restart`], so
/// the next automatic step is always a full period after the last manual one.
pub struct AutoRotate<H: IntervalHost> {
    host: H,
    period_ms: u32,
    handle: Option<H::Handle>,
}

impl<H: IntervalHost> AutoRotate<H> {
    pub fn new(host: H, period_ms: u32) -> Self {
        Self {
            host,
            period_ms,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start the interval unless one is already running.
    pub fn start(&mut self) {
        if self.handle.is_none() {
            self.handle = self.host.set_interval(self.period_ms);
        }
    }

    pub fn stop(&mut self) {
        if let Some(h) = self.handle.take() {
            self.host.clear_interval(h);
        }
    }

    /// Cancel and start again.
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }
}
