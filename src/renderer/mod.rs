//! Render sink
//!
//! Drawing is the host's business. The core hands over a `RenderSnapshot` per
//! frame; the bundled sink streams them as JSON lines for an external
//! front end (or a human with `jq`).

use std::io::Write;

use crate::sim::RenderSnapshot;

/// Anything that can consume per-frame snapshots
pub trait RenderSink {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

/// Writes one JSON object per presented frame
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    every: u32,
    frame: u64,
    failed: bool,
}

impl<W: Write> JsonLinesRenderer<W> {
    /// `every` = emit one snapshot per N frames (0 is treated as 1)
    pub fn new(out: W, every: u32) -> Self {
        Self {
            out,
            every: every.max(1),
            frame: 0,
            failed: false,
        }
    }

    fn write_snapshot(&mut self, snapshot: &RenderSnapshot) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for JsonLinesRenderer<W> {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        let frame = self.frame;
        self.frame += 1;
        if self.failed || frame % u64::from(self.every) != 0 {
            return;
        }
        if let Err(e) = self.write_snapshot(snapshot) {
            // Stop after the first failure (closed pipe etc.)
            log::warn!("Render error: {}", e);
            self.failed = true;
        }
    }
}
