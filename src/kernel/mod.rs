pub mod assistant;
pub mod content;
pub mod context;
pub mod dispatcher;
pub mod handlers;
pub mod state;
pub mod telemetry;
pub mod time;
