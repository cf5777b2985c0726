pub mod dashboard;
pub mod pricing;
pub mod sidebar;
pub mod tools;
pub mod ui;
