use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub reporting: ReportingSettings,
}

/// Connection settings for the remote reporting service. The base address is
/// fixed at startup; it is not editable at runtime.
#[derive(Debug, Deserialize, Clone)]
pub struct ReportingSettings {
    pub base_url: String,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
