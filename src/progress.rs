// src/progress.rs
/// Lightweight progress reporting for the pipeline stages (extract, classify, export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a stage with the number of items in it.
    fn begin(&mut self, _stage: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one bet (by position in the document) completes.
    fn item_done(&mut self, _index: usize) {}

    /// Called when one item did not complete; `reason` says what became of it.
    fn item_failed(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end of the stage, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to the log. Used by the CLI.
pub struct LogProgress {
    stage: String,
    total: usize,
    done: usize,
    failed: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { stage: s!(), total: 0, done: 0, failed: 0 }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, stage: &str, total: usize) {
        self.stage = s!(stage);
        self.total = total;
        self.done = 0;
        self.failed = 0;
        logd!("{stage}: {total} item(s)");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, index: usize) {
        self.done += 1;
        logd!("{} {}/{}: #{index} ok", self.stage, self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, index: usize, reason: &str) {
        // the cause is already logged where it happened
        self.failed += 1;
        logd!("{} #{index}: {reason}", self.stage);
    }

    fn finish(&mut self) {
        if self.total > 0 {
            logf!("{}: {} ok, {} failed", self.stage, self.done, self.failed);
        }
    }
}
