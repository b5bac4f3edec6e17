//! Panel renderers, one per feed.
//!
//! Each renderer takes a typed snapshot and returns the panel's inner HTML
//! fragment. Empty item lists produce the feed's localized empty sentence,
//! never an empty list element.

mod alpha_radar;
mod defi_yield;
mod market_pulse;
mod narratives;
mod new_tokens;
mod whale_watcher;

pub use alpha_radar::render_alpha_radar;
pub use defi_yield::render_defi_yield;
pub use market_pulse::render_market_pulse;
pub use narratives::render_narratives;
pub use new_tokens::render_new_tokens;
pub use whale_watcher::render_whale_watcher;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("it's"), "it&#39;s");
    }
}
