//! Start-up failures
//!
//! Everything that can go wrong happens before the first frame. Once the
//! event loop is running the simulation has no error path.

/// Failure to bring up the window and rendering context
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The platform windowing layer could not be initialized
    #[error("Failed to initialize windowing system: {0}")]
    WindowInit(#[from] winit::error::EventLoopError),

    /// The window or one of the GPU objects bound to it could not be created
    #[error("Failed to create {stage}: {reason}")]
    WindowCreate { stage: &'static str, reason: String },
}

impl StartupError {
    pub(crate) fn create(stage: &'static str, reason: impl ToString) -> Self {
        Self::WindowCreate {
            stage,
            reason: reason.to_string(),
        }
    }
}

pub type StartupResult<T> = Result<T, StartupError>;
