use std::sync::mpsc;
use std::thread;

use animal_logging::animal_error;

use crate::{DataSource, LoadError, LoadReport, LoadSettings, Loader, SourceLoader};

/// Runs the single startup load on a background thread with its own runtime.
pub struct LoadHandle {
    result_rx: mpsc::Receiver<Result<LoadReport, LoadError>>,
}

impl LoadHandle {
    pub fn spawn(source: DataSource, settings: LoadSettings) -> Self {
        Self::spawn_with(SourceLoader::new(settings), source)
    }

    pub fn spawn_with<L: Loader + 'static>(loader: L, source: DataSource) -> Self {
        let (result_tx, result_rx) = mpsc::channel();

        thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime.block_on(loader.load(&source)),
                Err(err) => {
                    animal_error!("Cannot start load runtime: {}", err);
                    Err(LoadError::Runtime(err.to_string()))
                }
            };
            let _ = result_tx.send(result);
        });

        Self { result_rx }
    }

    /// Result if the load has finished, without blocking.
    pub fn try_recv(&self) -> Option<Result<LoadReport, LoadError>> {
        self.result_rx.try_recv().ok()
    }

    /// Blocks until the load finishes.
    pub fn wait(self) -> Result<LoadReport, LoadError> {
        self.result_rx
            .recv()
            .unwrap_or_else(|err| Err(LoadError::Runtime(err.to_string())))
    }
}
