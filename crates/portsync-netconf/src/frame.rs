// ── RFC 6242 end-of-message framing ──
//
// NETCONF 1.0 frames are raw XML terminated by the `]]>]]>` delimiter.
// The decoder is a streaming reader: it tolerates the delimiter being
// torn across reads and keeps any bytes past it for the next frame.

use std::io::Read;

use crate::error::Error;

/// The NETCONF 1.0 end-of-message delimiter.
pub const END_OF_MESSAGE: &[u8] = b"]]>]]>";

/// Frame a payload for transmission: payload bytes plus the delimiter.
pub fn encode_frame(payload: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + END_OF_MESSAGE.len());
    out.extend_from_slice(payload.as_bytes());
    out.extend_from_slice(END_OF_MESSAGE);
    out
}

/// Streaming decoder for delimiter-framed messages.
///
/// Wraps any `Read` source; bytes beyond a delimiter are buffered and
/// served as the start of the next frame.
pub struct FrameReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Access the wrapped source, e.g. to write on a bidirectional channel.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Read one complete frame, stripping the delimiter.
    ///
    /// Fails with [`Error::Frame`] if the stream ends mid-frame or the
    /// payload is not valid UTF-8.
    pub fn read_frame(&mut self) -> Result<String, Error> {
        let mut chunk = [0u8; 4096];
        loop {
            if let Some(pos) = find_delimiter(&self.buf) {
                let rest = self.buf.split_off(pos + END_OF_MESSAGE.len());
                let mut frame = std::mem::replace(&mut self.buf, rest);
                frame.truncate(pos);
                return String::from_utf8(frame).map_err(|e| Error::Frame {
                    reason: format!("frame is not valid UTF-8: {e}"),
                });
            }

            let n = self.inner.read(&mut chunk)?;
            if n == 0 {
                return Err(Error::Frame {
                    reason: "stream ended before end-of-message delimiter".into(),
                });
            }
            self.buf.extend_from_slice(&chunk[..n]);
        }
    }
}

fn find_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(END_OF_MESSAGE.len())
        .position(|window| window == END_OF_MESSAGE)
}
