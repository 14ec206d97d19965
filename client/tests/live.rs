//! Scenarios exercised against a running instance of the application.
//!
//! The application must be listening on its default automation endpoint
//! with simulated devices available. Run with `cargo test -- --ignored`.

use std::time::{Duration, Instant};

use logic2_client::{
    AnalyzerSettings, CaptureConfiguration, CaptureMode, ChannelSelection,
    DataTableAnalyzerConfig, DeviceConfiguration, Error, Manager, RadixType,
};

/// Device id of the simulated Logic Pro 16 the application always offers.
const DEMO_DEVICE_ID: &str = "F4241";

fn demo_device() -> DeviceConfiguration {
    DeviceConfiguration {
        digital_channels: vec![0, 1],
        digital_sample_rate: 10_000_000,
        ..Default::default()
    }
}

fn timed_config(duration_seconds: f64) -> CaptureConfiguration {
    CaptureConfiguration {
        mode: CaptureMode::Timed { duration_seconds },
        ..Default::default()
    }
}

fn uart_settings() -> AnalyzerSettings {
    AnalyzerSettings::new()
        .with("Input Channel", 0_i64)
        .with("Bit Rate (Bits/s)", 115_200_i64)
}

#[tokio::test]
#[ignore = "requires a running Logic 2 instance"]
async fn reports_compatible_version_and_lists_devices() {
    let manager = Manager::connect().await.unwrap();

    let info = manager.app_info().await.unwrap();
    assert!(!info.application_version.is_empty());
    assert!(info.launch_pid != 0);

    let with_simulated = manager.devices(true).await.unwrap();
    assert!(with_simulated.iter().any(|d| d.is_simulation));

    let physical_only = manager.devices(false).await.unwrap();
    assert!(physical_only.iter().all(|d| !d.is_simulation));

    manager.close();
}

#[tokio::test]
#[ignore = "requires a running Logic 2 instance"]
async fn second_stop_is_reported_by_the_application() {
    let manager = Manager::connect().await.unwrap();

    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &demo_device(), &CaptureConfiguration::default())
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    capture.stop().await.unwrap();

    // The second stop violates the lifecycle contract; the application,
    // not the client, decides and reports the outcome.
    let err = capture.stop().await.unwrap_err();
    assert!(matches!(err, Error::Rpc(_)));

    capture.close().await.unwrap();
    manager.close();
}

#[tokio::test]
#[ignore = "requires a running Logic 2 instance"]
async fn timed_capture_waits_out_its_duration() {
    let manager = Manager::connect().await.unwrap();

    let started = Instant::now();
    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &demo_device(), &timed_config(1.0))
        .await
        .unwrap();
    capture.wait().await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));

    capture.close().await.unwrap();
    manager.close();
}

#[tokio::test]
#[ignore = "requires a running Logic 2 instance"]
async fn saved_and_loaded_captures_export_identical_tables() {
    let manager = Manager::connect().await.unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let sal = scratch.path().join("roundtrip.sal");
    let first_csv = scratch.path().join("first.csv");
    let second_csv = scratch.path().join("second.csv");

    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &demo_device(), &timed_config(1.0))
        .await
        .unwrap();
    capture.wait().await.unwrap();
    capture.save(sal.to_str().unwrap()).await.unwrap();

    let analyzer = capture.add_analyzer("Async Serial", "UART", &uart_settings()).await.unwrap();
    capture
        .export_data_table_csv(
            first_csv.to_str().unwrap(),
            &[DataTableAnalyzerConfig {
                analyzer,
                radix: RadixType::Hexadecimal,
            }],
            false,
            None,
            None,
        )
        .await
        .unwrap();
    capture.close().await.unwrap();

    let loaded = manager.load_capture(sal.to_str().unwrap()).await.unwrap();
    let analyzer = loaded.add_analyzer("Async Serial", "UART", &uart_settings()).await.unwrap();
    loaded
        .export_data_table_csv(
            second_csv.to_str().unwrap(),
            &[DataTableAnalyzerConfig {
                analyzer,
                radix: RadixType::Hexadecimal,
            }],
            false,
            None,
            None,
        )
        .await
        .unwrap();
    loaded.close().await.unwrap();

    assert_eq!(
        std::fs::read(&first_csv).unwrap(),
        std::fs::read(&second_csv).unwrap()
    );
    manager.close();
}

#[tokio::test]
#[ignore = "requires a running Logic 2 instance"]
async fn raw_export_honors_the_channel_selection() {
    let manager = Manager::connect().await.unwrap();
    let scratch = tempfile::tempdir().unwrap();

    let capture = manager
        .start_capture(DEMO_DEVICE_ID, &demo_device(), &timed_config(1.0))
        .await
        .unwrap();
    capture.wait().await.unwrap();

    // Empty selection: one .bin per configured channel.
    let all_dir = scratch.path().join("all");
    std::fs::create_dir_all(&all_dir).unwrap();
    capture
        .export_raw_data_binary(all_dir.to_str().unwrap(), &ChannelSelection::all(), 1)
        .await
        .unwrap();
    assert_eq!(std::fs::read_dir(&all_dir).unwrap().count(), 2);

    // Explicit selection: exactly the listed channels, no others.
    let one_dir = scratch.path().join("one");
    std::fs::create_dir_all(&one_dir).unwrap();
    let selection = ChannelSelection {
        digital_channels: vec![0],
        analog_channels: vec![],
    };
    capture
        .export_raw_data_binary(one_dir.to_str().unwrap(), &selection, 1)
        .await
        .unwrap();
    assert_eq!(std::fs::read_dir(&one_dir).unwrap().count(), 1);

    capture.close().await.unwrap();
    manager.close();
}
