//! The reference ANSI-escape frame encoder.

use std::io::Write;

use crate::backend::FrameBackend;
use crate::display::Frame;
use crate::error::{RenderError, RenderResult};

/// Encodes a `Frame` as 24-bit ANSI color escapes and writes the result to
/// any `std::io::Write` the caller supplies. Never acquires a console
/// handle, hides the cursor, or queries terminal size — those are left to
/// the surrounding application.
pub struct AnsiBackend<W: Write> {
    writer: W,
}

impl<W: Write> AnsiBackend<W> {
    pub fn new(writer: W) -> Self {
        AnsiBackend { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameBackend for AnsiBackend<W> {
    fn present(&mut self, frame: &Frame) -> RenderResult<()> {
        let encoded = encode(frame);
        self.writer
            .write_all(encoded.as_bytes())
            .map_err(|_| RenderError::BufferAllocFailed("AnsiBackend: write_all failed"))
    }
}

/// Encodes a frame to a `String`: a background-set sequence, a cursor-home
/// sequence, per-row/per-cell foreground-diffed color escapes plus glyph,
/// a newline per row, and a final reset.
pub fn encode(frame: &Frame) -> String {
    let bg = to_rgb8(frame.background);

    let mut out = String::with_capacity((frame.width as usize + 16) * frame.height as usize);

    out.push_str(&format!("\x1b[48;2;{};{};{}m", bg[0], bg[1], bg[2]));
    out.push_str("\x1b[H");

    for y in 0..frame.height {
        let mut last_color: Option<[u8; 3]> = None;

        for x in 0..frame.width {
            let index = (y * frame.width + x) as usize;
            let color = frame.colors[index];

            if last_color != Some(color) {
                out.push_str(&format!("\x1b[38;2;{};{};{}m", color[0], color[1], color[2]));
                last_color = Some(color);
            }

            out.push(frame.glyphs[index]);
        }

        out.push('\n');
    }

    out.push_str("\x1b[0m");
    out
}

fn to_rgb8(c: crate::math::Vec3) -> [u8; 3] {
    [
        (c.x.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.y.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.z.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn flat_frame(w: u32, h: u32, glyph: char, color: [u8; 3]) -> Frame {
        Frame {
            width: w,
            height: h,
            glyphs: vec![glyph; (w * h) as usize],
            colors: vec![color; (w * h) as usize],
            background: Vec3::zeros(),
        }
    }

    #[test]
    fn encode_starts_with_background_and_cursor_home() {
        let frame = flat_frame(2, 1, '█', [255, 0, 0]);
        let s = encode(&frame);
        assert!(s.starts_with("\x1b[48;2;0;0;0m\x1b[H"));
    }

    #[test]
    fn encode_ends_with_reset() {
        let frame = flat_frame(1, 1, '█', [1, 2, 3]);
        let s = encode(&frame);
        assert!(s.ends_with("\x1b[0m"));
    }

    #[test]
    fn encode_emits_one_color_escape_per_uniform_row() {
        let frame = flat_frame(5, 1, '█', [10, 20, 30]);
        let s = encode(&frame);
        let occurrences = s.matches("\x1b[38;2;10;20;30m").count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn encode_emits_one_newline_per_row() {
        let frame = flat_frame(3, 4, '█', [0, 0, 0]);
        let s = encode(&frame);
        assert_eq!(s.matches('\n').count(), 4);
    }

    #[test]
    fn present_writes_to_supplied_writer() {
        let frame = flat_frame(1, 1, '█', [9, 9, 9]);
        let mut buf: Vec<u8> = Vec::new();
        let mut backend = AnsiBackend::new(&mut buf);
        backend.present(&frame).unwrap();
        assert!(!buf.is_empty());
    }
}
