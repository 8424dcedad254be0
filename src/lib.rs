//! Faculty research dashboard: load a department sheet of publication and
//! project counts, filter it, and summarize the result for display.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
