use logic2_client::Manager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = Manager::connect().await?;

    let info = manager.app_info().await?;
    let api = info.api_version.clone().unwrap_or_default();
    println!("Application version: {}", info.application_version);
    println!("        API version: {}.{}.{}", api.major, api.minor, api.patch);
    println!("         Process ID: {}", info.launch_pid);

    manager.close();
    Ok(())
}
