pub mod dashboard;
pub mod help;
pub mod regions;
pub mod status;
