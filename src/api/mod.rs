// External API clients
pub mod reddit;
