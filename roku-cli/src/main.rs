use anyhow::{Context, Result};
use roku_api::{ActiveApp, App, DeviceClient, DeviceInfo, HttpTransport, Key, PlayerStatus};
use tracing::{debug, info};

mod config;
mod logging;

use config::{Command, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(&config.log_level)?;

    debug!(?config, "Resolved configuration");

    let client = DeviceClient::with_config(&config.host, config.port, &config.transport_config());
    let output = run(&client, &config.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Execute one command against the device and render its result
fn run<T: HttpTransport>(client: &DeviceClient<T>, command: &Command) -> Result<String> {
    match command {
        Command::Key { code } => {
            // Known names are normalised ("home" -> "Home"), anything else is sent verbatim
            let code = code.parse::<Key>().map(|key| key.code()).unwrap_or_else(|_| code.clone());
            client
                .press_key(&code)
                .with_context(|| format!("Failed to press {}", code))?;
            info!(%code, "Key pressed");
            Ok(String::new())
        }
        Command::Launch { app_id } => {
            client
                .launch_app(app_id)
                .with_context(|| format!("Failed to launch app {}", app_id))?;
            info!(%app_id, "App launched");
            Ok(String::new())
        }
        Command::Info => {
            let info = client
                .get_device_info()
                .context("Failed to query device info")?;
            Ok(format_device_info(&info))
        }
        Command::ActiveApp => {
            let active = client
                .get_active_app()
                .context("Failed to query active app")?;
            Ok(format_active_app(&active))
        }
        Command::Apps => {
            let apps = client.get_app_list().context("Failed to query apps")?;
            Ok(format_apps(&apps))
        }
        Command::Player => {
            let status = client
                .get_player_status()
                .context("Failed to query media player")?;
            Ok(format_player(&status))
        }
    }
}

fn format_device_info(info: &DeviceInfo) -> String {
    let mut lines = vec![format!("{} ({})", info.display_name(), info.model_number)];

    let fields = [
        ("Model", info.model_name.as_deref()),
        ("Serial", Some(info.serial_number.as_str())),
        ("Software", info.software_version.as_deref()),
        ("Network", info.network_type.as_deref()),
        ("Power", info.power_mode.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("  {:<9}{}", format!("{}:", label), value));
        }
    }

    if let Some(uptime) = info.uptime {
        lines.push(format!("  {:<9}{}s", "Uptime:", uptime));
    }

    lines.join("\n")
}

fn format_app(app: &App) -> String {
    match &app.id {
        Some(id) => format!("{} [{}]", app.name, id),
        None => app.name.clone(),
    }
}

fn format_active_app(active: &ActiveApp) -> String {
    match &active.screensaver {
        Some(screensaver) => format!(
            "{} (screensaver: {})",
            format_app(&active.app),
            format_app(screensaver)
        ),
        None => format_app(&active.app),
    }
}

fn format_apps(apps: &[App]) -> String {
    apps.iter()
        .map(|app| {
            format!(
                "{:<16} {:<5} {}",
                app.id.as_deref().unwrap_or("-"),
                app.kind.as_deref().unwrap_or("-"),
                app.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_player(status: &PlayerStatus) -> String {
    let mut line = format!("{:?}", status.playback_state());

    if let Some(name) = status.plugin.as_ref().and_then(|plugin| plugin.name.as_deref()) {
        line.push_str(&format!(" in {}", name));
    }

    match (status.position_ms(), status.duration_ms()) {
        (Some(position), Some(duration)) => {
            line.push_str(&format!(" at {}s / {}s", position / 1000, duration / 1000))
        }
        (Some(position), None) => line.push_str(&format!(" at {}s", position / 1000)),
        _ => {}
    }

    line
}
