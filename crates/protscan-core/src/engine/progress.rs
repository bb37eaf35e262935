/// Lifecycle events of a long-running workflow. A phase wraps one or more item runs;
/// during a run, `ItemDone` is sent once per processed item from whichever worker
/// finished it, so events of one run may interleave across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    ItemsStart { total: u64 },
    ItemDone,
    ItemsFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Fan-out point between workflows and whatever renders progress. Without a callback
/// every report is dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Sends a [`Progress::Message`], building the text only if someone is listening.
    pub fn message(&self, text: impl FnOnce() -> String) {
        if let Some(cb) = &self.callback {
            cb(Progress::Message(text()));
        }
    }
}
