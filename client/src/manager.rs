//! Connection to a running instance of the application.

use std::time::Duration;

use logic2_protocol as proto;
use logic2_protocol::{AppInfo, Device, ManagerStub, API_VERSION_MAJOR};
use tonic::transport::Endpoint;

use crate::capture::Capture;
use crate::config::{CaptureConfiguration, DeviceConfiguration};
use crate::{Error, Result, DEFAULT_HOST, DEFAULT_PORT};

/// Bound on establishing the TCP connection. Individual calls carry no
/// deadline of their own; a capture wait may legitimately run for hours.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Owns the transport channel to the application and hands out [`Capture`]
/// handles.
///
/// All captures borrow the manager they were created from, so the channel
/// is guaranteed to outlive them; [`Manager::close`] consumes the manager
/// and can only be called once every capture handle is gone.
pub struct Manager {
    stub: ManagerStub,
}

impl Manager {
    /// Connect to an application instance on the local machine using the
    /// default address.
    pub async fn connect() -> Result<Self> {
        Self::connect_to(DEFAULT_HOST, DEFAULT_PORT).await
    }

    /// Connect to an application instance on the given host and port.
    ///
    /// The application's API major version is compared against
    /// [`API_VERSION_MAJOR`]; on a mismatch the channel is torn down and
    /// [`Error::IncompatibleApiVersion`] carries the version the
    /// application reported.
    pub async fn connect_to(host: &str, port: u16) -> Result<Self> {
        let endpoint = Endpoint::from_shared(format!("http://{}:{}", host, port))?
            .connect_timeout(CONNECT_TIMEOUT);
        let channel = endpoint.connect().await?;
        let mut stub = ManagerStub::new(channel);
        let info = stub.get_app_info(proto::GetAppInfoRequest::default()).await?;
        let info = info.app_info.ok_or(Error::MissingReplyField("app_info"))?;
        // An early return drops the only channel clone, closing the
        // connection.
        verify_api_version(&info)?;
        log::debug!(
            "connected to application version {} (pid {})",
            info.application_version,
            info.launch_pid
        );
        Ok(Self { stub })
    }

    /// Fetch the application's version information again. Side-effect-free.
    pub async fn app_info(&self) -> Result<AppInfo> {
        let reply = self.stub().get_app_info(proto::GetAppInfoRequest::default()).await?;
        reply.app_info.ok_or(Error::MissingReplyField("app_info"))
    }

    /// List the devices the application currently sees. An empty list is a
    /// valid result, not an error.
    pub async fn devices(&self, include_simulation_devices: bool) -> Result<Vec<Device>> {
        let reply = self
            .stub()
            .get_devices(proto::GetDevicesRequest {
                include_simulation_devices,
            })
            .await?;
        Ok(reply.devices)
    }

    /// Start a capture on the given device.
    ///
    /// Both configurations go over the wire exactly as passed; whatever
    /// device or analyzers are currently selected in the application's UI
    /// play no part.
    pub async fn start_capture(
        &self,
        device_id: &str,
        device: &DeviceConfiguration,
        capture: &CaptureConfiguration,
    ) -> Result<Capture<'_>> {
        let request = proto::StartCaptureRequest {
            device_id: device_id.to_string(),
            logic_device_configuration: Some(device.to_wire()),
            capture_configuration: Some(capture.to_wire()),
        };
        let reply = self.stub().start_capture(request).await?;
        let info = reply
            .capture_info
            .ok_or(Error::MissingReplyField("capture_info"))?;
        log::debug!("started capture {} on device {}", info.capture_id, device_id);
        Ok(Capture::new(self, info.capture_id))
    }

    /// Open a capture previously saved with [`Capture::save`]. The returned
    /// handle is complete and immediately usable; there is nothing to wait
    /// for.
    pub async fn load_capture(&self, filepath: &str) -> Result<Capture<'_>> {
        let reply = self
            .stub()
            .load_capture(proto::LoadCaptureRequest {
                filepath: filepath.to_string(),
            })
            .await?;
        let info = reply
            .capture_info
            .ok_or(Error::MissingReplyField("capture_info"))?;
        log::debug!("loaded capture {} from {}", info.capture_id, filepath);
        Ok(Capture::new(self, info.capture_id))
    }

    /// Release the transport channel. Dropping the last channel clone
    /// closes the underlying connection; in-flight requests are aborted.
    pub fn close(self) {
        log::debug!("closing connection");
    }

    pub(crate) fn stub(&self) -> ManagerStub {
        self.stub.clone()
    }
}

fn verify_api_version(info: &AppInfo) -> Result<()> {
    let actual = info.api_version.clone().unwrap_or_default();
    if actual.major != API_VERSION_MAJOR {
        return Err(Error::IncompatibleApiVersion {
            expected: API_VERSION_MAJOR,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::Version;

    fn app_info(major: u32, minor: u32, patch: u32) -> AppInfo {
        AppInfo {
            api_version: Some(Version {
                major,
                minor,
                patch,
            }),
            application_version: "2.4.22".to_string(),
            launch_pid: 4321,
        }
    }

    #[test]
    fn matching_major_version_passes() {
        assert!(verify_api_version(&app_info(API_VERSION_MAJOR, 0, 0)).is_ok());
        assert!(verify_api_version(&app_info(API_VERSION_MAJOR, 9, 17)).is_ok());
    }

    #[test]
    fn differing_major_version_is_refused() {
        let err = verify_api_version(&app_info(API_VERSION_MAJOR + 1, 2, 3)).unwrap_err();
        match err {
            Error::IncompatibleApiVersion { expected, actual } => {
                assert_eq!(expected, API_VERSION_MAJOR);
                assert_eq!(actual.major, API_VERSION_MAJOR + 1);
                assert_eq!(actual.minor, 2);
                assert_eq!(actual.patch, 3);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn missing_version_message_is_refused() {
        // A reply without the version sub-message reads as 0.0.0.
        let info = AppInfo {
            api_version: None,
            application_version: String::new(),
            launch_pid: 0,
        };
        assert!(matches!(
            verify_api_version(&info),
            Err(Error::IncompatibleApiVersion { .. })
        ));
    }

    #[test]
    fn version_mismatch_message_names_both_versions() {
        let err = verify_api_version(&app_info(3, 1, 4)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&API_VERSION_MAJOR.to_string()));
        assert!(message.contains("3.1.4"));
    }
}
