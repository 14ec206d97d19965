use logic2_client::{
    CaptureConfiguration, CaptureMode, DeviceConfiguration, DigitalTriggerSettings,
    DigitalTriggerType, Manager,
};

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
        mode: CaptureMode::DigitalTrigger(DigitalTriggerSettings {
            trigger_type: DigitalTriggerType::Rising,
            trigger_channel_index: 0,
            ..Default::default()
        }),
        ..Default::default()
    };

    // The simulated data toggles constantly, so the trigger fires almost
    // immediately.
    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &device, &config)
        .await?;
    capture.wait().await?;

    capture.close().await?;
    manager.close();
    Ok(())
}
