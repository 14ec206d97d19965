//! Wire types for the automation interface of the Logic 2 application.
//!
//! The schema is owned by the application; `proto/saleae.proto` carries the
//! reference copy these bindings are maintained against. The messages are
//! hand-maintained prost structs rather than build-time generated code, so
//! building this crate does not require `protoc`.
//!
//! The [`ManagerStub`] type in [`service`] issues the unary calls of the
//! `saleae.Manager` service over a [`tonic::transport::Channel`]. Everything
//! else in this crate is plain data.

pub mod analyzer;
pub mod app;
pub mod capture;
pub mod export;
pub mod service;

pub use analyzer::{
    analyzer_setting_value, high_level_analyzer_setting_value, AddAnalyzerReply,
    AddAnalyzerRequest, AddHighLevelAnalyzerReply, AddHighLevelAnalyzerRequest,
    AnalyzerSettingValue, HighLevelAnalyzerSettingValue, RemoveAnalyzerReply,
    RemoveAnalyzerRequest, RemoveHighLevelAnalyzerReply, RemoveHighLevelAnalyzerRequest,
};
pub use app::{
    AppInfo, Device, DeviceType, GetAppInfoReply, GetAppInfoRequest, GetDevicesReply,
    GetDevicesRequest, Version,
};
pub use capture::{
    capture_configuration, CaptureConfiguration, CaptureInfo, CloseCaptureReply,
    CloseCaptureRequest, DigitalTriggerCaptureMode, DigitalTriggerLinkedChannel,
    DigitalTriggerLinkedChannelState, DigitalTriggerType, GlitchFilterEntry, LoadCaptureReply,
    LoadCaptureRequest, LogicChannels, LogicDeviceConfiguration, ManualCaptureMode,
    SaveCaptureReply, SaveCaptureRequest, StartCaptureReply, StartCaptureRequest,
    StopCaptureReply, StopCaptureRequest, TimedCaptureMode, WaitCaptureReply, WaitCaptureRequest,
};
pub use export::{
    DataTableAnalyzerConfiguration, DataTableFilter, ExportDataTableCsvReply,
    ExportDataTableCsvRequest, ExportRawDataBinaryReply, ExportRawDataBinaryRequest,
    ExportRawDataCsvReply, ExportRawDataCsvRequest, LegacyExportAnalyzerReply,
    LegacyExportAnalyzerRequest, RadixType,
};
pub use service::ManagerStub;

/// Major version of the automation API these bindings were written against.
///
/// A connection to an application reporting a different major version is
/// refused by the client.
pub const API_VERSION_MAJOR: u32 = 1;
