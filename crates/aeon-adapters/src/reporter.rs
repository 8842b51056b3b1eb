//! Reporter that records lines instead of printing them.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use aeon_core::application::ports::{Reporter, TaskProgress};

/// One reported event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Section(String),
    Step(String),
    Done { message: String, detail: Option<String> },
    Fail { message: String, detail: Option<String> },
    Note(String),
    Spacer,
    TaskStarted(String),
    TaskSucceeded(String),
    TaskFailed(String),
}

/// Records every event for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Messages of every `done` event, in order.
    pub fn done_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Done { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ReportEvent) -> io::Result<()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}

impl Reporter for RecordingReporter {
    fn section(&self, title: &str) -> io::Result<()> {
        self.record(ReportEvent::Section(title.into()))
    }

    fn step(&self, message: &str) -> io::Result<()> {
        self.record(ReportEvent::Step(message.into()))
    }

    fn done(&self, message: &str, detail: Option<&str>) -> io::Result<()> {
        self.record(ReportEvent::Done {
            message: message.into(),
            detail: detail.map(Into::into),
        })
    }

    fn fail(&self, message: &str, detail: Option<&str>) -> io::Result<()> {
        self.record(ReportEvent::Fail {
            message: message.into(),
            detail: detail.map(Into::into),
        })
    }

    fn note(&self, message: &str) -> io::Result<()> {
        self.record(ReportEvent::Note(message.into()))
    }

    fn spacer(&self) -> io::Result<()> {
        self.record(ReportEvent::Spacer)
    }

    fn begin_task(&self, message: &str) -> io::Result<Box<dyn TaskProgress + '_>> {
        self.record(ReportEvent::TaskStarted(message.into()))?;
        Ok(Box::new(self.clone()))
    }
}

impl TaskProgress for RecordingReporter {
    fn succeed(self: Box<Self>, message: &str) -> io::Result<()> {
        self.record(ReportEvent::TaskSucceeded(message.into()))
    }

    fn fail(self: Box<Self>, message: &str) -> io::Result<()> {
        self.record(ReportEvent::TaskFailed(message.into()))
    }
}
