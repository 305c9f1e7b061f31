//! Where validated submissions go. There is no contact backend; [`LogSink`] writes the
//! payload to the log. A real relay plugs in by implementing [`ContactSink`].

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::Submission;

pub trait ContactSink {
    fn deliver(&self, submission: &Submission) -> Result<(), SinkError>;
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(%payload, "contact form submitted");
        Ok(())
    }
}

/// Sink handle shared through the component tree as context.
#[derive(Clone)]
pub struct SharedSink(Rc<dyn ContactSink>);

impl SharedSink {
    pub fn new(sink: impl ContactSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn get(&self) -> &dyn ContactSink {
        self.0.as_ref()
    }
}

impl Default for SharedSink {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl fmt::Debug for SharedSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSink")
    }
}
