pub mod buy;
pub mod format;
pub mod funds;
pub mod portfolio;
pub mod ui;
