//! The simulated system scan: collection, narration, rendering and the page lifecycle.

pub mod browser;
pub mod chart;
pub mod contact;
pub mod lifecycle;
pub mod narrator;
pub mod probe;
pub mod reference;
pub mod report;
pub mod snapshot;

mod panels;
mod view;

pub use browser::Browser;
pub use lifecycle::{Lifecycle, Phase};
pub use snapshot::{EnvironmentSnapshot, HostProbe, ProbeError};
pub use view::ScanView;
