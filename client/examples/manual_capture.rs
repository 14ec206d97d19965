use std::time::Duration;

use logic2_client::{CaptureConfiguration, CaptureMode, DeviceConfiguration, Manager};

/// Device id of the simulated Logic Pro 16 the application always offers.
const DEMO_DEVICE_ID: &str = "F4241";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = Manager::connect().await?;

    let device = DeviceConfiguration {
        digital_channels: vec![0],
        digital_sample_rate: 10_000_000,
        ..Default::default()
    };
    let config = CaptureConfiguration {
        mode: CaptureMode::Manual,
        ..Default::default()
    };

    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &device, &config)
        .await?;

    tokio::time::sleep(Duration::from_secs(1)).await;
    capture.stop().await?;

    capture.save("manual.sal").await?;
    capture.close().await?;

    manager.close();
    Ok(())
}
