//! Writes each uploaded coastline as one JSON line.

use std::io::{self, Write};

use serde::Serialize;
use tellus_drift::Regime;
use tellus_scene::{CoastlineBuffer, OutlineSink};

#[derive(Serialize)]
struct OutlineRecord<'a> {
    age_ma: Option<f64>,
    regime: Option<Regime>,
    closed: bool,
    revision: u64,
    positions: &'a [f32],
    segments: &'a [[u32; 2]],
}

/// An [`OutlineSink`] that serialises outlines to a writer.
///
/// `upload_outline` cannot fail, so the first write error is kept and
/// reported by [`finish`](Self::finish).
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap `writer`; nothing is written until the first upload.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the writer, or the first error hit.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_record(&mut self, buffer: &CoastlineBuffer) -> io::Result<()> {
        let record = OutlineRecord {
            age_ma: buffer.age().map(|age| age.ma()),
            regime: buffer.regime(),
            closed: buffer.is_closed(),
            revision: buffer.revision(),
            positions: buffer.positions(),
            segments: buffer.segments(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> OutlineSink for JsonLinesSink<W> {
    fn upload_outline(&mut self, buffer: &CoastlineBuffer) {
        if self.error.is_some() {
            return;
        }
        match self.write_record(buffer) {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}
