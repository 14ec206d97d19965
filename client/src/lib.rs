//! # Client Library for the Logic 2 Automation Interface
//!
//! This library drives a running instance of the Logic 2 logic-analyzer
//! application over its gRPC automation interface. It is a slim layer
//! combining the `logic2_protocol` wire types with a pair of handle types:
//!
//!  * [`Manager`] - owns the connection to the application. Connecting
//!    validates that the application speaks the same API major version as
//!    this library; device enumeration and starting or loading captures
//!    happen here.
//!  * [`Capture`] - one open capture session, live or loaded from disk.
//!    Analyzer attachment, lifecycle control and the export operations are
//!    scoped to it. A capture borrows its [`Manager`], so the connection
//!    always outlives the captures created from it.
//!
//! Errors are captured in the [`enum@Error`] type. The library never
//! retries, never pre-validates analyzer names or settings, and holds no
//! state beyond the identifiers the application assigned - the application
//! is the single source of truth.
//!
//! Every operation is one unary request/response round-trip. Calls that
//! block on the application side, such as [`Capture::wait`], simply keep
//! their future pending; run them on a dedicated task if other work must
//! proceed in the meantime.

use thiserror::Error;

pub mod capture;
pub mod config;
pub mod manager;
pub mod settings;

pub use logic2_protocol as protocol;

pub use capture::{AnalyzerHandle, Capture, DataTableAnalyzerConfig, DataTableFilter};
pub use config::{
    CaptureConfiguration, CaptureMode, ChannelSelection, DeviceConfiguration,
    DigitalTriggerSettings, GlitchFilter, LinkedChannel,
};
pub use manager::Manager;
pub use protocol::{DigitalTriggerLinkedChannelState, DigitalTriggerType, RadixType};
pub use settings::{AnalyzerSettings, SettingValue};

/// Address the application listens on when both sides run on one machine.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the application exposes its automation interface on.
pub const DEFAULT_PORT: u16 = 10430;

/// Error type unifying connection failures, faults reported by the
/// application, and malformed replies.
#[derive(Error, Debug)]
pub enum Error {
    /// The application speaks a different API major version than this
    /// library was built against. Raised during connect only; the channel
    /// is torn down before it is returned.
    #[error(
        "client is built for API major version {expected}, but the application reports version {}.{}.{}",
        .actual.major,
        .actual.minor,
        .actual.patch
    )]
    IncompatibleApiVersion {
        expected: u32,
        actual: protocol::Version,
    },
    /// Establishing or using the transport channel failed.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    /// The application reported the operation failed: an unknown device id,
    /// an analyzer name or setting that does not match the catalog, an
    /// invalid capture-state transition, or a fault that occurred during
    /// the capture itself. Surfaced verbatim, never retried.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
    /// A reply arrived without a sub-message the schema requires.
    #[error("reply is missing required field `{0}`")]
    MissingReplyField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
