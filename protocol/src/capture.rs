//! Device configuration, capture configuration and capture lifecycle
//! messages.

/// Digital and analog channel index sets. An empty message selects every
/// configured channel wherever a selection is accepted.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogicChannels {
    #[prost(int32, repeated, tag = "1")]
    pub digital_channels: ::prost::alloc::vec::Vec<i32>,
    #[prost(int32, repeated, tag = "2")]
    pub analog_channels: ::prost::alloc::vec::Vec<i32>,
}

/// Software glitch filter on one digital channel. Pulses shorter than the
/// given width are suppressed when the recorded data is read; the recording
/// itself is unchanged.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GlitchFilterEntry {
    #[prost(int32, tag = "1")]
    pub channel_index: i32,
    #[prost(double, tag = "2")]
    pub pulse_width_seconds: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogicDeviceConfiguration {
    #[prost(message, optional, tag = "1")]
    pub logic_channels: ::core::option::Option<LogicChannels>,
    /// In samples per second.
    #[prost(uint32, tag = "2")]
    pub digital_sample_rate: u32,
    /// In samples per second.
    #[prost(uint32, tag = "3")]
    pub analog_sample_rate: u32,
    #[prost(double, tag = "4")]
    pub digital_threshold_volts: f64,
    #[prost(message, repeated, tag = "5")]
    pub glitch_filters: ::prost::alloc::vec::Vec<GlitchFilterEntry>,
}

/// The capture runs until a StopCapture request arrives. Once the buffer
/// limit is reached the oldest data is discarded.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManualCaptureMode {
    #[prost(double, tag = "1")]
    pub trim_data_seconds: f64,
}

/// The capture stops on its own after `duration_seconds`. Reaching the
/// buffer limit terminates the capture.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimedCaptureMode {
    #[prost(double, tag = "1")]
    pub duration_seconds: f64,
    #[prost(double, tag = "2")]
    pub trim_data_seconds: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DigitalTriggerType {
    Unspecified = 0,
    Rising = 1,
    Falling = 2,
    PulseHigh = 3,
    PulseLow = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DigitalTriggerLinkedChannelState {
    Unspecified = 0,
    Low = 1,
    High = 2,
}

/// State another digital channel must hold for the trigger condition to
/// count: at the trigger edge for edge types, for the whole pulse for pulse
/// types.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigitalTriggerLinkedChannel {
    #[prost(int32, tag = "1")]
    pub channel_index: i32,
    #[prost(enumeration = "DigitalTriggerLinkedChannelState", tag = "2")]
    pub state: i32,
}

/// The capture stops on its own once the digital trigger condition has been
/// met and `after_trigger_seconds` more have been recorded.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigitalTriggerCaptureMode {
    #[prost(enumeration = "DigitalTriggerType", tag = "1")]
    pub trigger_type: i32,
    #[prost(int32, tag = "2")]
    pub trigger_channel_index: i32,
    /// Only read for the pulse trigger types.
    #[prost(double, tag = "3")]
    pub min_pulse_width_seconds: f64,
    /// Only read for the pulse trigger types.
    #[prost(double, tag = "4")]
    pub max_pulse_width_seconds: f64,
    #[prost(message, repeated, tag = "5")]
    pub linked_channels: ::prost::alloc::vec::Vec<DigitalTriggerLinkedChannel>,
    #[prost(double, tag = "6")]
    pub after_trigger_seconds: f64,
    #[prost(double, tag = "7")]
    pub trim_data_seconds: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureConfiguration {
    #[prost(uint32, tag = "1")]
    pub buffer_size_megabytes: u32,
    #[prost(oneof = "capture_configuration::CaptureMode", tags = "2, 3, 4")]
    pub capture_mode: ::core::option::Option<capture_configuration::CaptureMode>,
}

pub mod capture_configuration {
    /// Exactly one capture mode is active per capture.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CaptureMode {
        #[prost(message, tag = "2")]
        ManualCaptureMode(super::ManualCaptureMode),
        #[prost(message, tag = "3")]
        TimedCaptureMode(super::TimedCaptureMode),
        #[prost(message, tag = "4")]
        DigitalCaptureMode(super::DigitalTriggerCaptureMode),
    }
}

/// Server-assigned identity of an open capture.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureInfo {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCaptureRequest {
    #[prost(string, tag = "1")]
    pub device_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub logic_device_configuration: ::core::option::Option<LogicDeviceConfiguration>,
    #[prost(message, optional, tag = "3")]
    pub capture_configuration: ::core::option::Option<CaptureConfiguration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCaptureReply {
    #[prost(message, optional, tag = "1")]
    pub capture_info: ::core::option::Option<CaptureInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCaptureRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCaptureReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitCaptureRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitCaptureReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadCaptureRequest {
    #[prost(string, tag = "1")]
    pub filepath: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadCaptureReply {
    #[prost(message, optional, tag = "1")]
    pub capture_info: ::core::option::Option<CaptureInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveCaptureRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    #[prost(string, tag = "2")]
    pub filepath: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveCaptureReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloseCaptureRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloseCaptureReply {}
