// Shared components
pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;

// Domain layer
pub mod content;
pub mod notification;

// External collaborators
pub mod assets;
pub mod fcm;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod telemetry;
