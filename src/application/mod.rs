// Application layer - Use cases and the fetch-cycle state machine driver
pub mod dashboard_controller;
pub mod dashboard_service;
pub mod stats_repository;
