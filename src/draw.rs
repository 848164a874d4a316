//! Redraw plumbing and terminal rendering.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};

use crate::{pattern::Pattern, piece::Piece};

/// Receives redraw requests.
///
/// State changes never draw on their own.  Whoever owns the sink decides
/// what a redraw means: repainting a terminal, marking a scene dirty, or
/// counting calls in a test.
pub trait DrawSink {
    fn redraw(&mut self, piece: &Piece);
}

/// Write an ASCII rendition of a pattern into `out`, one row per line:
/// `#` for occupied slots and `.` for empty ones.
pub fn print(pattern: &Pattern, out: &mut String) {
    for row in 0..pattern.size() {
        for col in 0..pattern.size() {
            out.push(if pattern.get(row, col).is_some() { '#' } else { '.' });
        }
        out.push('\n');
    }
}

/// Paints patterns to a terminal, two columns per cell.
pub struct TermSink<W: Write> {
    out: W,
}

impl<W: Write> TermSink<W> {
    pub fn new(out: W) -> TermSink<W> {
        TermSink { out }
    }

    /// Paint one pattern in the given color.
    pub fn paint(&mut self, pattern: &Pattern, color: (u8, u8, u8)) -> crossterm::Result<()> {
        let (r, g, b) = color;

        for row in 0..pattern.size() {
            for col in 0..pattern.size() {
                let background = if pattern.get(row, col).is_some() {
                    Color::Rgb { r, g, b }
                } else {
                    Color::Reset
                };

                queue!(self.out, SetBackgroundColor(background), Print("  "))?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DrawSink for TermSink<W> {
    fn redraw(&mut self, piece: &Piece) {
        let color = piece.square(piece.marker()).color;

        // The redraw hook has no failure channel; a failed paint surfaces
        // on the next explicit call.
        let _ = self.paint(piece.pattern(), color);
    }
}
