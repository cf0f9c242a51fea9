//! Platform glue, timing and formatting shared by the scan views.

pub mod format;
pub mod platform;
pub mod timing;
