// Main entry point - Dependency injection and one dashboard activation
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::dashboard_controller::DashboardController;
use crate::application::dashboard_service::DashboardService;
use crate::domain::stats::czech_display_date;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_stats_repository::HttpStatsRepository;
use crate::presentation::renderer::render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;
    tracing::debug!("reporting service base url: {}", config.reporting.base_url);

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpStatsRepository::new(config.reporting.base_url));

    // Create service and controller (application layer)
    let service = DashboardService::new(repository, czech_display_date);
    let controller = DashboardController::new(service);

    // One activation: show the loading state, run the fetch cycle, render
    // whatever state it produced.
    println!("{}", render(&controller.state().await));
    let state = controller.refresh().await;
    println!("{}", render(&state).trim_end());

    Ok(())
}
