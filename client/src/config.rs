//! Configuration value types consumed by [`Manager::start_capture`] and the
//! export operations.
//!
//! These are plain data: public fields, a [`Default`] for struct-literal
//! construction, and a pure mapping to the wire form. Nothing is validated
//! here - the application checks every field and reports mismatches through
//! the RPC status.
//!
//! [`Manager::start_capture`]: crate::Manager::start_capture

use logic2_protocol as proto;
pub use logic2_protocol::{DigitalTriggerLinkedChannelState, DigitalTriggerType};

/// Recording parameters for the device a capture runs on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfiguration {
    /// Indexes of digital channels to record.
    pub digital_channels: Vec<u32>,
    /// Indexes of analog channels to record.
    pub analog_channels: Vec<u32>,
    /// In samples per second.
    pub digital_sample_rate: u32,
    /// In samples per second.
    pub analog_sample_rate: u32,
    /// Pro 8 and Pro 16 accept 1.2, 1.8 or 3.3; other devices ignore this.
    pub digital_threshold_volts: f64,
    /// Software filters suppressing short digital pulses when the recorded
    /// data is read. The recording itself is unchanged.
    pub glitch_filters: Vec<GlitchFilter>,
}

impl DeviceConfiguration {
    pub(crate) fn to_wire(&self) -> proto::LogicDeviceConfiguration {
        proto::LogicDeviceConfiguration {
            logic_channels: Some(proto::LogicChannels {
                digital_channels: self.digital_channels.iter().map(|&c| c as i32).collect(),
                analog_channels: self.analog_channels.iter().map(|&c| c as i32).collect(),
            }),
            digital_sample_rate: self.digital_sample_rate,
            analog_sample_rate: self.analog_sample_rate,
            digital_threshold_volts: self.digital_threshold_volts,
            glitch_filters: self.glitch_filters.iter().map(GlitchFilter::to_wire).collect(),
        }
    }
}

/// Minimum pulse width to let through on one digital channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlitchFilter {
    pub channel_index: u32,
    pub pulse_width_seconds: f64,
}

impl GlitchFilter {
    fn to_wire(&self) -> proto::GlitchFilterEntry {
        proto::GlitchFilterEntry {
            channel_index: self.channel_index as i32,
            pulse_width_seconds: self.pulse_width_seconds,
        }
    }
}

/// Channels taking part in an export. The empty selection exports every
/// channel the capture was configured with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSelection {
    pub digital_channels: Vec<u32>,
    pub analog_channels: Vec<u32>,
}

impl ChannelSelection {
    /// The empty selection; the application exports every configured
    /// channel.
    pub fn all() -> Self {
        Self::default()
    }

    pub(crate) fn to_wire(&self) -> proto::LogicChannels {
        proto::LogicChannels {
            digital_channels: self.digital_channels.iter().map(|&c| c as i32).collect(),
            analog_channels: self.analog_channels.iter().map(|&c| c as i32).collect(),
        }
    }
}

/// How and when a capture ends, plus the limits shared by all modes.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfiguration {
    /// Megabytes the application may spend buffering this capture. Manual
    /// mode discards the oldest data once the limit is reached; the other
    /// modes terminate the capture.
    pub buffer_size_megabytes: u32,
    /// Keep only the latest this many seconds once the capture ends. Zero
    /// or negative keeps everything.
    pub trim_data_seconds: f64,
    pub mode: CaptureMode,
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            buffer_size_megabytes: 0,
            trim_data_seconds: 0.0,
            mode: CaptureMode::Manual,
        }
    }
}

/// The three ways a capture can run. No further variant exists; exhaustive
/// matches are safe.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureMode {
    /// Runs until [`Capture::stop`] is called.
    ///
    /// [`Capture::stop`]: crate::Capture::stop
    Manual,
    /// Stops on its own after the given duration.
    Timed { duration_seconds: f64 },
    /// Stops on its own once the digital trigger condition has been met.
    DigitalTrigger(DigitalTriggerSettings),
}

/// Edge or pulse condition ending a [`CaptureMode::DigitalTrigger`] capture.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalTriggerSettings {
    pub trigger_type: DigitalTriggerType,
    /// Channel searched for the trigger condition.
    pub trigger_channel_index: u32,
    /// Only read for the pulse trigger types.
    pub min_pulse_width_seconds: Option<f64>,
    /// Only read for the pulse trigger types.
    pub max_pulse_width_seconds: Option<f64>,
    /// Seconds to keep capturing once the trigger has been seen.
    pub after_trigger_seconds: f64,
    /// States other digital channels must hold for the condition to count.
    pub linked_channels: Vec<LinkedChannel>,
}

impl Default for DigitalTriggerSettings {
    fn default() -> Self {
        Self {
            trigger_type: DigitalTriggerType::Unspecified,
            trigger_channel_index: 0,
            min_pulse_width_seconds: None,
            max_pulse_width_seconds: None,
            after_trigger_seconds: 0.0,
            linked_channels: Vec::new(),
        }
    }
}

/// State a linked channel must be in: at the trigger edge for edge types,
/// for the whole pulse for pulse types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedChannel {
    pub channel_index: u32,
    pub state: DigitalTriggerLinkedChannelState,
}

impl LinkedChannel {
    fn to_wire(&self) -> proto::DigitalTriggerLinkedChannel {
        proto::DigitalTriggerLinkedChannel {
            channel_index: self.channel_index as i32,
            state: self.state as i32,
        }
    }
}

impl CaptureConfiguration {
    pub(crate) fn to_wire(&self) -> proto::CaptureConfiguration {
        use proto::capture_configuration::CaptureMode as WireMode;

        // The schema keeps the trim duration inside the active mode message.
        let mode = match &self.mode {
            CaptureMode::Manual => WireMode::ManualCaptureMode(proto::ManualCaptureMode {
                trim_data_seconds: self.trim_data_seconds,
            }),
            CaptureMode::Timed { duration_seconds } => {
                WireMode::TimedCaptureMode(proto::TimedCaptureMode {
                    duration_seconds: *duration_seconds,
                    trim_data_seconds: self.trim_data_seconds,
                })
            }
            CaptureMode::DigitalTrigger(trigger) => {
                WireMode::DigitalCaptureMode(proto::DigitalTriggerCaptureMode {
                    trigger_type: trigger.trigger_type as i32,
                    trigger_channel_index: trigger.trigger_channel_index as i32,
                    min_pulse_width_seconds: trigger.min_pulse_width_seconds.unwrap_or(0.0),
                    max_pulse_width_seconds: trigger.max_pulse_width_seconds.unwrap_or(0.0),
                    linked_channels: trigger
                        .linked_channels
                        .iter()
                        .map(LinkedChannel::to_wire)
                        .collect(),
                    after_trigger_seconds: trigger.after_trigger_seconds,
                    trim_data_seconds: self.trim_data_seconds,
                })
            }
        };
        proto::CaptureConfiguration {
            buffer_size_megabytes: self.buffer_size_megabytes,
            capture_mode: Some(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::capture_configuration::CaptureMode as WireMode;

    #[test]
    fn device_configuration_maps_verbatim() {
        let config = DeviceConfiguration {
            digital_channels: vec![0, 1, 5],
            analog_channels: vec![2],
            digital_sample_rate: 10_000_000,
            analog_sample_rate: 625_000,
            digital_threshold_volts: 3.3,
            glitch_filters: vec![GlitchFilter {
                channel_index: 1,
                pulse_width_seconds: 1e-6,
            }],
        };
        let wire = config.to_wire();
        let channels = wire.logic_channels.unwrap();
        assert_eq!(channels.digital_channels, vec![0, 1, 5]);
        assert_eq!(channels.analog_channels, vec![2]);
        assert_eq!(wire.digital_sample_rate, 10_000_000);
        assert_eq!(wire.analog_sample_rate, 625_000);
        assert_eq!(wire.digital_threshold_volts, 3.3);
        assert_eq!(wire.glitch_filters.len(), 1);
        assert_eq!(wire.glitch_filters[0].channel_index, 1);
        assert_eq!(wire.glitch_filters[0].pulse_width_seconds, 1e-6);
    }

    #[test]
    fn empty_device_configuration_stays_empty() {
        let wire = DeviceConfiguration::default().to_wire();
        let channels = wire.logic_channels.unwrap();
        assert!(channels.digital_channels.is_empty());
        assert!(channels.analog_channels.is_empty());
        assert!(wire.glitch_filters.is_empty());
        assert_eq!(wire.digital_sample_rate, 0);
        assert_eq!(wire.analog_sample_rate, 0);
    }

    #[test]
    fn manual_mode_selects_manual_arm() {
        let config = CaptureConfiguration {
            buffer_size_megabytes: 2048,
            trim_data_seconds: 2.5,
            mode: CaptureMode::Manual,
        };
        let wire = config.to_wire();
        assert_eq!(wire.buffer_size_megabytes, 2048);
        match wire.capture_mode {
            Some(WireMode::ManualCaptureMode(mode)) => {
                assert_eq!(mode.trim_data_seconds, 2.5);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn timed_mode_selects_timed_arm() {
        let config = CaptureConfiguration {
            buffer_size_megabytes: 128,
            trim_data_seconds: 0.5,
            mode: CaptureMode::Timed {
                duration_seconds: 1.0,
            },
        };
        match config.to_wire().capture_mode {
            Some(WireMode::TimedCaptureMode(mode)) => {
                assert_eq!(mode.duration_seconds, 1.0);
                assert_eq!(mode.trim_data_seconds, 0.5);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn digital_trigger_mode_maps_all_fields() {
        let config = CaptureConfiguration {
            buffer_size_megabytes: 256,
            trim_data_seconds: 1.5,
            mode: CaptureMode::DigitalTrigger(DigitalTriggerSettings {
                trigger_type: DigitalTriggerType::PulseHigh,
                trigger_channel_index: 3,
                min_pulse_width_seconds: Some(1e-6),
                max_pulse_width_seconds: Some(2e-3),
                after_trigger_seconds: 4.0,
                linked_channels: vec![LinkedChannel {
                    channel_index: 7,
                    state: DigitalTriggerLinkedChannelState::High,
                }],
            }),
        };
        match config.to_wire().capture_mode {
            Some(WireMode::DigitalCaptureMode(mode)) => {
                assert_eq!(mode.trigger_type, DigitalTriggerType::PulseHigh as i32);
                assert_eq!(mode.trigger_channel_index, 3);
                assert_eq!(mode.min_pulse_width_seconds, 1e-6);
                assert_eq!(mode.max_pulse_width_seconds, 2e-3);
                assert_eq!(mode.after_trigger_seconds, 4.0);
                assert_eq!(mode.trim_data_seconds, 1.5);
                assert_eq!(mode.linked_channels.len(), 1);
                assert_eq!(mode.linked_channels[0].channel_index, 7);
                assert_eq!(
                    mode.linked_channels[0].state,
                    DigitalTriggerLinkedChannelState::High as i32
                );
            }
            _ => panic!(),
        }
    }

    #[test]
    fn unset_pulse_widths_map_to_zero() {
        let config = CaptureConfiguration {
            mode: CaptureMode::DigitalTrigger(DigitalTriggerSettings {
                trigger_type: DigitalTriggerType::Rising,
                trigger_channel_index: 0,
                ..Default::default()
            }),
            ..Default::default()
        };
        match config.to_wire().capture_mode {
            Some(WireMode::DigitalCaptureMode(mode)) => {
                assert_eq!(mode.min_pulse_width_seconds, 0.0);
                assert_eq!(mode.max_pulse_width_seconds, 0.0);
                assert!(mode.linked_channels.is_empty());
            }
            _ => panic!(),
        }
    }

    #[test]
    fn empty_selection_keeps_both_lists_empty() {
        let wire = ChannelSelection::all().to_wire();
        assert!(wire.digital_channels.is_empty());
        assert!(wire.analog_channels.is_empty());
    }

    #[test]
    fn explicit_selection_lists_exactly_those_channels() {
        let selection = ChannelSelection {
            digital_channels: vec![0, 4],
            analog_channels: vec![1],
        };
        let wire = selection.to_wire();
        assert_eq!(wire.digital_channels, vec![0, 4]);
        assert_eq!(wire.analog_channels, vec![1]);
    }
}
