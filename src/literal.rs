//! Chunked string-literal body.
//!
//! Encoded characters collect in a line buffer. Once the buffer holds at
//! least `max_chunk_length` characters it is written out followed by
//! [`SEGMENT_SEPARATOR`], which closes the current quoted segment and opens the
//! next one on a fresh line. The compiler joins adjacent segments back into a
//! single literal. Segments are only cut after a complete escape, so one may
//! run past the width by up to `MAX_ESCAPE_WIDTH - 1` characters.

use std::io::{self, Write};

use crate::config::EncoderConfig;
use crate::escape::{MAX_ESCAPE_WIDTH, escape_byte};

/// Closes one quoted segment and opens the next.
pub const SEGMENT_SEPARATOR: &[u8] = b"\"\n\t\"";

pub struct LiteralWriter<W: Write> {
    out: W,
    line: Vec<u8>,
    max_chunk_length: usize,
    always_escape: bool,
    length: u64,
}

impl<W: Write> LiteralWriter<W> {
    pub fn new(out: W, config: &EncoderConfig) -> Self {
        LiteralWriter {
            out,
            // The flush check runs after a whole escape is appended, so the
            // buffer can overshoot the threshold by up to one escape.
            line: Vec::with_capacity(config.max_chunk_length + MAX_ESCAPE_WIDTH),
            max_chunk_length: config.max_chunk_length,
            always_escape: config.always_escape,
            length: 0,
        }
    }

    pub fn push(&mut self, byte: u8) -> io::Result<()> {
        let escaped = escape_byte(byte, self.always_escape);
        self.line.extend_from_slice(escaped.as_bytes());
        self.length += 1;
        debug_assert!(self.line.len() < self.max_chunk_length.max(1) + MAX_ESCAPE_WIDTH);

        if self.line.len() >= self.max_chunk_length {
            self.out.write_all(&self.line)?;
            self.out.write_all(SEGMENT_SEPARATOR)?;
            self.line.clear();
        }
        Ok(())
    }

    /// Write whatever is left in the line buffer, without a trailing
    /// separator, and hand back the writer with the total byte count.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        if !self.line.is_empty() {
            self.out.write_all(&self.line)?;
            self.line.clear();
        }
        Ok((self.out, self.length))
    }
}
