use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which influence how a run is executed.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
    /// Whether independent result sources are allowed to be loaded concurrently.
    pub is_parallel: bool,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, is_parallel: bool) -> Self {
        Self { logger, is_parallel }
    }

    /// Creates an environment which swallows all log messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| {}), is_parallel: false }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg| println!("{msg}")), true)
    }
}
