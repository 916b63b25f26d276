mod app;
mod middleware;
mod state;

pub use app::create_app;
pub use middleware::require_bearer;
pub use state::AppState;
