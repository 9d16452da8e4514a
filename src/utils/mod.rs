// Utility functions module
pub mod formatters;
