use std::path::PathBuf;

use opencl3::error_codes::ClError;
use opencl3::types::cl_int;

/// Error types of this library.
#[derive(thiserror::Error, Debug)]
pub enum ClutilError {
    /// Error from the underlying `opencl3` library. The second field carries the
    /// build log when the failure came out of a program build.
    #[error("OpenCL error: {0}{log}", log = match .1 {
       Some(log) => format!(" {}", log),
       None => "".to_string(),
    })]
    Opencl3(ClError, Option<String>),

    /// Error for OpenCL `clGetPlatformInfo()` call failures.
    #[error("Platform info not available!")]
    PlatformInfoNotAvailable(ClError),

    /// Error for OpenCL `clGetDeviceInfo()` call failures.
    #[error("Device info not available!")]
    DeviceInfoNotAvailable(ClError),

    /// Error when no OpenCL platform is installed.
    #[error("No platforms found.")]
    NoPlatforms,

    /// Error when the chosen platform exposes no devices.
    #[error("No devices found.")]
    NoDevices,

    /// Error when a pre-supplied platform or device index is out of range.
    #[error("Selection {index} is out of range, {count} available.")]
    InvalidSelection {
        /// The index that was asked for.
        index: usize,
        /// How many entries there were to choose from.
        count: usize,
    },

    /// Error when the kernel source file cannot be read.
    #[error("Cannot read kernel source {path}: {source}")]
    SourceUnreadable {
        /// Path of the source file.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Error when a kernel with the given name cannot be found.
    #[error("Kernel with name {0} not found!")]
    KernelNotFound(String),

    /// Error when standard I/O fails.
    #[error("IO Error: {0}")]
    IO(#[from] std::io::Error),
}

impl ClutilError {
    /// Returns the numeric OpenCL status code if this error carries one.
    pub fn status(&self) -> Option<cl_int> {
        match self {
            Self::Opencl3(err, _)
            | Self::PlatformInfoNotAvailable(err)
            | Self::DeviceInfoNotAvailable(err) => Some(err.0),
            _ => None,
        }
    }
}

/// Convenience type alias for [`ClutilError`] based [`Result`]s.
pub type ClutilResult<T> = std::result::Result<T, ClutilError>;

impl From<ClError> for ClutilError {
    fn from(error: ClError) -> Self {
        ClutilError::Opencl3(error, None)
    }
}
