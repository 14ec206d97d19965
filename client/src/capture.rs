//! Handle for one open capture session.

use logic2_protocol as proto;
use logic2_protocol::RadixType;

use crate::config::ChannelSelection;
use crate::manager::Manager;
use crate::settings::AnalyzerSettings;
use crate::Result;

/// One capture session open in the application, either recording live or
/// loaded from a save file.
///
/// The handle borrows its [`Manager`] and forwards every operation through
/// the manager's transport; it caches nothing, so every export re-reads the
/// capture from the application. Lifecycle contract: a running capture is
/// ended by exactly one of [`stop`](Capture::stop) or
/// [`wait`](Capture::wait), after which exports remain available until
/// [`close`](Capture::close). The application, not this library, polices
/// violations of that ordering.
pub struct Capture<'a> {
    manager: &'a Manager,
    capture_id: u64,
}

/// Analyzer attached to a capture. Valid only while the owning capture is
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerHandle {
    pub(crate) analyzer_id: u64,
}

/// One analyzer taking part in a data table export, with the radix its
/// numeric fields are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTableAnalyzerConfig {
    pub analyzer: AnalyzerHandle,
    pub radix: RadixType,
}

impl DataTableAnalyzerConfig {
    fn to_wire(&self) -> proto::DataTableAnalyzerConfiguration {
        proto::DataTableAnalyzerConfiguration {
            analyzer_id: self.analyzer.analyzer_id,
            radix_type: self.radix as i32,
        }
    }
}

/// Row filter for a data table export, in the search syntax of the
/// application's data table view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTableFilter {
    pub query: String,
    /// Columns the query is applied to.
    pub columns: Vec<String>,
}

impl DataTableFilter {
    fn to_wire(&self) -> proto::DataTableFilter {
        proto::DataTableFilter {
            query: self.query.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl<'a> Capture<'a> {
    pub(crate) fn new(manager: &'a Manager, capture_id: u64) -> Self {
        Self {
            manager,
            capture_id,
        }
    }

    /// Attach an analyzer to this capture.
    ///
    /// `name` must match an entry of the application's analyzer catalog
    /// exactly, and `settings` must match that analyzer's settings as shown
    /// in the application; the application reports any mismatch. `label` is
    /// the display string carried into data table exports.
    pub async fn add_analyzer(
        &self,
        name: &str,
        label: &str,
        settings: &AnalyzerSettings,
    ) -> Result<AnalyzerHandle> {
        let reply = self
            .manager
            .stub()
            .add_analyzer(proto::AddAnalyzerRequest {
                capture_id: self.capture_id,
                analyzer_name: name.to_string(),
                analyzer_label: label.to_string(),
                settings: settings.to_wire(),
            })
            .await?;
        Ok(AnalyzerHandle {
            analyzer_id: reply.analyzer_id,
        })
    }

    /// Attach a high level analyzer that consumes `input`'s output.
    ///
    /// `extension_directory` is the directory of the extension the high
    /// level analyzer ships in and `name` its name as declared in the
    /// extension manifest. Integer and boolean settings are carried as
    /// numbers, which is all the high level analyzer wire form admits.
    pub async fn add_high_level_analyzer(
        &self,
        extension_directory: &str,
        name: &str,
        label: &str,
        input: AnalyzerHandle,
        settings: &AnalyzerSettings,
    ) -> Result<AnalyzerHandle> {
        let reply = self
            .manager
            .stub()
            .add_high_level_analyzer(proto::AddHighLevelAnalyzerRequest {
                capture_id: self.capture_id,
                extension_directory: extension_directory.to_string(),
                hla_name: name.to_string(),
                hla_label: label.to_string(),
                input_analyzer_id: input.analyzer_id,
                settings: settings.to_high_level_wire(),
            })
            .await?;
        Ok(AnalyzerHandle {
            analyzer_id: reply.analyzer_id,
        })
    }

    /// Detach an analyzer. Whether removing an unknown handle is an error
    /// is decided by the application.
    pub async fn remove_analyzer(&self, handle: AnalyzerHandle) -> Result<()> {
        self.manager
            .stub()
            .remove_analyzer(proto::RemoveAnalyzerRequest {
                analyzer_id: handle.analyzer_id,
            })
            .await?;
        Ok(())
    }

    /// Detach a high level analyzer.
    pub async fn remove_high_level_analyzer(&self, handle: AnalyzerHandle) -> Result<()> {
        self.manager
            .stub()
            .remove_high_level_analyzer(proto::RemoveHighLevelAnalyzerRequest {
                capture_id: self.capture_id,
                analyzer_id: handle.analyzer_id,
            })
            .await?;
        Ok(())
    }

    /// Persist the capture to a save file the application can open again,
    /// through the UI or [`Manager::load_capture`].
    pub async fn save(&self, filepath: &str) -> Result<()> {
        self.manager
            .stub()
            .save_capture(proto::SaveCaptureRequest {
                capture_id: self.capture_id,
                filepath: filepath.to_string(),
            })
            .await?;
        Ok(())
    }

    /// End the capture early. Intended for [`CaptureMode::Manual`], valid
    /// for any mode.
    ///
    /// Calling `stop` twice, after the capture already ended, or on the
    /// same capture as [`wait`](Capture::wait) is a caller error with
    /// application-defined outcome; whatever the application reports is
    /// surfaced unchanged. Loaded captures have nothing to stop.
    ///
    /// [`CaptureMode::Manual`]: crate::CaptureMode::Manual
    pub async fn stop(&self) -> Result<()> {
        self.manager
            .stub()
            .stop_capture(proto::StopCaptureRequest {
                capture_id: self.capture_id,
            })
            .await?;
        Ok(())
    }

    /// Block until a [`CaptureMode::Timed`] or
    /// [`CaptureMode::DigitalTrigger`] capture reaches its stopping
    /// condition.
    ///
    /// A fault that occurred during the capture, such as a device read
    /// timeout or memory exhaustion, is raised here. Call at most once, and
    /// never together with [`stop`](Capture::stop) on the same capture; the
    /// application polices violations. Loaded captures are already
    /// complete.
    ///
    /// [`CaptureMode::Timed`]: crate::CaptureMode::Timed
    /// [`CaptureMode::DigitalTrigger`]: crate::CaptureMode::DigitalTrigger
    pub async fn wait(&self) -> Result<()> {
        self.manager
            .stub()
            .wait_capture(proto::WaitCaptureRequest {
                capture_id: self.capture_id,
            })
            .await?;
        Ok(())
    }

    /// Export raw samples in the application's binary layout, one `.bin`
    /// file per exported channel.
    ///
    /// `directory` must already exist on the application's host. The empty
    /// [`ChannelSelection`] exports every configured channel. The analog
    /// downsample ratio thins analog samples in the output without touching
    /// the stored data.
    pub async fn export_raw_data_binary(
        &self,
        directory: &str,
        channels: &ChannelSelection,
        analog_downsample_ratio: u64,
    ) -> Result<()> {
        self.manager
            .stub()
            .export_raw_data_binary(proto::ExportRawDataBinaryRequest {
                capture_id: self.capture_id,
                directory: directory.to_string(),
                logic_channels: Some(channels.to_wire()),
                analog_downsample_ratio,
            })
            .await?;
        Ok(())
    }

    /// Export raw samples in the application's CSV layout: the selected
    /// analog channels combine into `analog.csv`, the digital ones into
    /// `digital.csv`.
    ///
    /// Same directory and channel-selection rules as
    /// [`export_raw_data_binary`](Capture::export_raw_data_binary).
    /// `iso8601_timestamp` switches the output to wall clock timestamps
    /// instead of capture-relative ones.
    pub async fn export_raw_data_csv(
        &self,
        directory: &str,
        channels: &ChannelSelection,
        analog_downsample_ratio: u64,
        iso8601_timestamp: bool,
    ) -> Result<()> {
        self.manager
            .stub()
            .export_raw_data_csv(proto::ExportRawDataCsvRequest {
                capture_id: self.capture_id,
                directory: directory.to_string(),
                logic_channels: Some(channels.to_wire()),
                analog_downsample_ratio,
                iso8601_timestamp,
            })
            .await?;
        Ok(())
    }

    /// Export the joined data table of one or more analyzers to a CSV file.
    ///
    /// `columns` restricts the export to a column subset; `None` exports
    /// every column. `filter` drops rows not matching its query.
    pub async fn export_data_table_csv(
        &self,
        filepath: &str,
        analyzers: &[DataTableAnalyzerConfig],
        iso8601_timestamp: bool,
        columns: Option<&[String]>,
        filter: Option<&DataTableFilter>,
    ) -> Result<()> {
        self.manager
            .stub()
            .export_data_table_csv(proto::ExportDataTableCsvRequest {
                capture_id: self.capture_id,
                filepath: filepath.to_string(),
                analyzers: analyzers.iter().map(DataTableAnalyzerConfig::to_wire).collect(),
                iso8601_timestamp,
                export_columns: columns.map(<[String]>::to_vec).unwrap_or_default(),
                filter: filter.map(DataTableFilter::to_wire),
            })
            .await?;
        Ok(())
    }

    /// Export a single analyzer in its plugin's native format rather than
    /// the data table layout.
    pub async fn legacy_export_analyzer(
        &self,
        filepath: &str,
        analyzer: AnalyzerHandle,
        radix: RadixType,
    ) -> Result<()> {
        self.manager
            .stub()
            .legacy_export_analyzer(proto::LegacyExportAnalyzerRequest {
                filepath: filepath.to_string(),
                analyzer_id: analyzer.analyzer_id,
                radix_type: radix as i32,
            })
            .await?;
        Ok(())
    }

    /// Release the application-side resources of this capture. Files
    /// written by [`save`](Capture::save) or the exports stay on disk.
    pub async fn close(self) -> Result<()> {
        log::debug!("closing capture {}", self.capture_id);
        self.manager
            .stub()
            .close_capture(proto::CloseCaptureRequest {
                capture_id: self.capture_id,
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_table_analyzer_config_maps_id_and_radix() {
        let config = DataTableAnalyzerConfig {
            analyzer: AnalyzerHandle { analyzer_id: 17 },
            radix: RadixType::Hexadecimal,
        };
        let wire = config.to_wire();
        assert_eq!(wire.analyzer_id, 17);
        assert_eq!(wire.radix_type, RadixType::Hexadecimal as i32);
    }

    #[test]
    fn filter_maps_query_and_columns() {
        let filter = DataTableFilter {
            query: "error".to_string(),
            columns: vec!["name".to_string(), "value".to_string()],
        };
        let wire = filter.to_wire();
        assert_eq!(wire.query, "error");
        assert_eq!(wire.columns, vec!["name", "value"]);
    }
}
