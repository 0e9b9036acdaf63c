//! Endpoint lifecycle and the one-shot line cursor shared by sensors

use envmon_core::SensorError;

use crate::codec::Line;

/// A device endpoint that can be re-opened
///
/// Opening resets the read position, so the next read measures again.
pub trait Endpoint {
    fn open(&mut self);
}

/// Read position within the current measurement line
#[derive(Debug, Clone, Default)]
pub(crate) enum LineCursor {
    /// Nothing measured since the last open
    #[default]
    Fresh,
    /// A line was measured and is partly delivered
    Draining { line: Line, offset: usize },
    /// The whole line was delivered
    Exhausted,
}

impl LineCursor {
    /// Serve a read from the current line, measuring first if fresh
    ///
    /// A failed measurement leaves the cursor fresh.
    pub(crate) fn read<F>(&mut self, buf: &mut [u8], measure: F) -> Result<usize, SensorError>
    where
        F: FnOnce() -> Result<Line, SensorError>,
    {
        if buf.is_empty() {
            return Ok(0);
        }

        if let LineCursor::Fresh = self {
            *self = LineCursor::Draining {
                line: measure()?,
                offset: 0,
            };
        }

        let LineCursor::Draining { line, offset } = self else {
            return Ok(0);
        };

        let remaining = &line.as_bytes()[*offset..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        *offset += n;

        if *offset == line.len() {
            *self = LineCursor::Exhausted;
        }

        Ok(n)
    }
}
