//! Core abstractions for the streaming dashboard platform.

mod context;
mod error;
mod lifecycle;

pub use context::{Method, RequestContext, RequestId};
pub use error::DashboardError;
pub use lifecycle::{PanelLifecycle, PanelPhase, PanelTiming, TimingContext};
