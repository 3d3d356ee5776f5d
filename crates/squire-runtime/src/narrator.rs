//! Voice feedback seam. The pilot narrates what it is doing; a production
//! build routes lines to a text-to-speech engine, the default reports
//! through the log.

use tracing::info;

pub trait Narrator: Send + Sync {
    fn narrate(&self, line: &str);
}

/// Narrates through the tracing log.
#[derive(Debug, Default)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn narrate(&self, line: &str) {
        info!(target: "squire::narration", "{line}");
    }
}

/// Swallows narration. Keeps test output quiet.
#[derive(Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, _line: &str) {}
}
