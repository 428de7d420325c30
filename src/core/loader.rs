/// Which path asked for the loader to be hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideTrigger {
    /// Window `load` plus the grace delay.
    Load,
    /// Absolute fallback timer.
    Fallback,
}

/// One-shot latch guarding the loader hide effect.
#[derive(Default, Clone, Debug)]
pub struct LoaderLatch {
    content_loaded: bool,
    winner: Option<HideTrigger>,
}

impl LoaderLatch {
    pub fn content_loaded(&self) -> bool {
        self.content_loaded
    }

    /// The trigger that fired the hide effect, once it has fired.
    pub fn winner(&self) -> Option<HideTrigger> {
        self.winner
    }

    /// Returns true exactly once: on the first call. The caller runs the hide
    /// effect only when this returns true.
    pub fn trigger(&mut self, by: HideTrigger) -> bool {
        if self.content_loaded {
            return false;
        }
        self.content_loaded = true;
        self.winner = Some(by);
        true
    }
}
