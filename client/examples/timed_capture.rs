use logic2_client::{
    AnalyzerSettings, CaptureConfiguration, CaptureMode, DataTableAnalyzerConfig,
    DeviceConfiguration, Manager, RadixType,
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
        mode: CaptureMode::Timed {
            duration_seconds: 1.0,
        },
        ..Default::default()
    };

    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &device, &config)
        .await?;
    capture.wait().await?;

    let analyzer = capture
        .add_analyzer(
            "Async Serial",
            "UART",
            &AnalyzerSettings::new()
                .with("Input Channel", 0_i64)
                .with("Bit Rate (Bits/s)", 115_200_i64),
        )
        .await?;

    capture
        .export_data_table_csv(
            "timed.csv",
            &[DataTableAnalyzerConfig {
                analyzer,
                radix: RadixType::Hexadecimal,
            }],
            false,
            None,
            None,
        )
        .await?;

    capture.close().await?;
    manager.close();
    Ok(())
}
