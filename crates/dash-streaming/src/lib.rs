//! Streaming primitives for shell-first dashboard rendering.

mod flush;
mod panel;
mod shell;
mod sink;

pub use flush::{FlushController, FlushPolicy};
pub use panel::{loading_card, text_update, PanelContent};
pub use shell::{HeadContent, Shell};
pub use sink::StreamingSink;
