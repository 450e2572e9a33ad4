/// Bookkeeping for a frame loop driven by an external scheduler.
///
/// The scheduler hands out opaque request ids (`requestAnimationFrame`
/// handles in the browser). The loop records the id it is waiting on and a
/// cancellation flag that is checked before every reschedule.
#[derive(Debug, Default)]
pub struct LoopState {
    pending: Option<i32>,
    cancelled: bool,
    ticks: u64,
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the id of the frame request now outstanding.
    pub fn arm(&mut self, request_id: i32) {
        if !self.cancelled {
            self.pending = Some(request_id);
        }
    }

    /// Called at the start of a tick: the outstanding request has fired.
    pub fn fire(&mut self) {
        self.pending = None;
        self.ticks += 1;
    }

    /// Whether the loop may schedule another frame.
    pub fn should_continue(&self) -> bool {
        !self.cancelled
    }

    /// Stop the loop. Returns the outstanding request id, if any, so the
    /// caller can cancel it with the scheduler. Later calls return `None`.
    pub fn cancel(&mut self) -> Option<i32> {
        self.cancelled = true;
        self.pending.take()
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
