// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Encode Error: {0}")]
    Encode(String),
    #[error("Surface Error: {0}")]
    Surface(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Camera Error: {0}")]
    Camera(#[from] CameraError),
}

/// Specific error types for camera capture issues.
/// Used to surface a neutral notice and fall back to file upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    /// The user (or platform policy) refused camera access.
    #[error("Camera access was denied")]
    PermissionDenied,

    /// No camera is present, or it is held by another process.
    #[error("No camera device is available")]
    DeviceUnavailable,

    /// A frame was requested while no session is active.
    #[error("No active camera session")]
    NoActiveSession,

    /// The stream stopped producing frames.
    #[error("Camera stream failed: {0}")]
    StreamFailed(String),
}

impl CameraError {
    /// Returns the message key the host uses for its notice.
    #[must_use]
    pub fn notice_key(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => "camera-notice-permission-denied",
            CameraError::DeviceUnavailable => "camera-notice-device-unavailable",
            CameraError::NoActiveSession => "camera-notice-no-session",
            CameraError::StreamFailed(_) => "camera-notice-stream-failed",
        }
    }

    /// Returns true when the host should offer file upload instead.
    #[must_use]
    pub fn is_recoverable_by_upload(&self) -> bool {
        matches!(
            self,
            CameraError::PermissionDenied | CameraError::DeviceUnavailable
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
