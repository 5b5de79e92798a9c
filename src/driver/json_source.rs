use std::io::BufRead;

use anyhow::Context;
use serde::Deserialize;

use super::LandmarkSource;
use crate::types::Point3;

/// Either `{"hands": [[[x, y, z], ...], ...]}` or a bare list of points for a
/// single hand.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FrameLine {
    Hands { hands: Vec<Vec<Point3>> },
    Single(Vec<Point3>),
}

/// Reads one frame per line of JSON. Blank lines are skipped.
///
/// A line that is not UTF-8 or not a frame is reported as an error and the
/// next call moves on to the following line. An I/O failure ends the stream.
pub struct JsonLinesSource<R> {
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: Vec::new(),
            failed: false,
        }
    }
}

impl<R: BufRead + Send + 'static> LandmarkSource for JsonLinesSource<R> {
    fn next_hands(&mut self) -> anyhow::Result<Option<Vec<Vec<Point3>>>> {
        loop {
            if self.failed {
                return Ok(None);
            }

            self.buf.clear();
            let read = match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(read) => read,
                Err(err) => {
                    self.failed = true;
                    log::error!(
                        "failed to read landmark input after line {}: {err}",
                        self.line_no
                    );
                    return Ok(None);
                }
            };
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = std::str::from_utf8(&self.buf)
                .with_context(|| format!("line {} is not valid UTF-8", self.line_no))?
                .trim();
            if line.is_empty() {
                continue;
            }

            let parsed: FrameLine = serde_json::from_str(line)
                .with_context(|| format!("invalid landmark frame on line {}", self.line_no))?;
            return Ok(Some(match parsed {
                FrameLine::Hands { hands } => hands,
                FrameLine::Single(points) => vec![points],
            }));
        }
    }
}
