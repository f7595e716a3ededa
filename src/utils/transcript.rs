use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

type Sink = Box<dyn Write + Send>;

/// Console sink for the tour's user-facing lines.
///
/// Every line is recorded in order; when echoing it is also written to the
/// sink (stdout by default). Clones share the same buffer so concurrently
/// scheduled futures on one task append to a single transcript.
///
/// A failed echo, such as stdout being a closed pipe, never panics: echoing
/// stops and the error is kept for [`Transcript::take_error`].
#[derive(Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
    sink: Option<Arc<Mutex<Sink>>>,
    echo_error: Arc<Mutex<Option<io::Error>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // 鎖中毒時仍保留已寫入的內容
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl Transcript {
    pub fn new(echo: bool) -> Self {
        if echo {
            Self::with_writer(io::stdout())
        } else {
            Self::silent()
        }
    }

    /// Records without printing; used by tests.
    pub fn silent() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            sink: None,
            echo_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Arc::new(Mutex::new(Box::new(writer) as Sink))),
            ..Self::silent()
        }
    }

    pub fn line(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "lang_tour::transcript", "{}", message);
        self.echo(&message);
        lock(&self.lines).push(message);
    }

    fn echo(&self, message: &str) {
        let Some(sink) = &self.sink else {
            return;
        };
        let mut echo_error = lock(&self.echo_error);
        if echo_error.is_some() {
            return;
        }

        let mut writer = lock(sink);
        let written = writeln!(writer, "{}", message).and_then(|_| writer.flush());
        if let Err(e) = written {
            tracing::warn!("Transcript output failed, no longer echoing: {}", e);
            *echo_error = Some(e);
        }
    }

    /// The first echo failure, if any. Later calls return `None`.
    pub fn take_error(&self) -> Option<io::Error> {
        lock(&self.echo_error).take()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines().iter().position(|line| line == needle)
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("lines", &lock(&self.lines).len())
            .field("echo", &self.sink.is_some())
            .finish()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(true)
    }
}
