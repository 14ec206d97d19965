use logic2_client::Manager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = Manager::connect().await?;

    let include_simulation_devices = true;
    let devices = manager.devices(include_simulation_devices).await?;

    if devices.is_empty() {
        println!("No devices found!");
    } else {
        println!("Found {} device(s):", devices.len());
        for (i, device) in devices.iter().enumerate() {
            println!(
                "Device {} / {}: simulation {}; type {:?}; ID \"{}\"",
                i + 1,
                devices.len(),
                device.is_simulation,
                device.device_type(),
                device.device_id
            );
        }
    }

    manager.close();
    Ok(())
}
