// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line text blocks.
//!
//! Text shaping is a backend concern: the backend measures each line and
//! hands back something implementing [`LineLayout`]. [`TextBlock`] stacks
//! those lines vertically, aligns them horizontally, and computes the
//! bounds a canvas or image needs to hold them.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

/// Horizontal alignment of lines within a [`TextBlock`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush with the right edge.
    Right,
}

impl Align {
    /// Returns the x offset of a line `line_width` wide within a block
    /// `block_width` wide.
    #[inline]
    #[must_use]
    pub fn x_offset(self, line_width: f64, block_width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => (block_width - line_width) / 2.0,
            Self::Right => block_width - line_width,
        }
    }
}

/// A single measured line of text.
pub trait LineLayout {
    /// Advance width of the line, including any leading inset.
    fn width(&self) -> f64;
    /// Ink bounds relative to the line origin. `x0` may be negative for
    /// glyphs that overhang to the left.
    fn bounds(&self) -> Rect;
    /// Distance from the top of the line to the baseline.
    fn ascent(&self) -> f64;
    /// Distance from the baseline to the bottom of the line.
    fn descent(&self) -> f64;
    /// Extra spacing before the next line.
    fn leading(&self) -> f64;
}

/// A surface that can draw laid-out lines of text.
pub trait TextCanvas<L: LineLayout> {
    /// Fills `line` with its top-left corner at `(x, y)`.
    fn fill_text(&mut self, line: &L, x: f64, y: f64);
    /// Strokes `line` with its top-left corner at `(x, y)`.
    fn stroke_text(&mut self, line: &L, x: f64, y: f64);
}

/// A stack of measured lines with precomputed bounds.
#[derive(Clone, Debug)]
pub struct TextBlock<L> {
    /// The lines, top to bottom.
    pub lines: Vec<L>,
    /// Offset at which the lines are drawn. `x` is positive when some line
    /// overhangs to the left, so that nothing paints outside [`size`].
    ///
    /// [`size`]: Self::size
    pub offset: Vec2,
    /// Size of the block, including the overhang offset.
    pub size: Size,
}

impl<L: LineLayout> TextBlock<L> {
    /// Creates a block from measured lines.
    #[must_use]
    pub fn new(lines: Vec<L>) -> Self {
        let (offset, size) = Self::bounds_of(&lines);
        Self {
            lines,
            offset,
            size,
        }
    }

    /// Computes the draw offset and total size of `lines`.
    ///
    /// The width is the widest line plus the largest left overhang. The
    /// height sums every line's ascent and descent, plus the leading of all
    /// lines after the first.
    #[must_use]
    pub fn bounds_of(lines: &[L]) -> (Vec2, Size) {
        let mut x_adjust: f64 = 0.0;
        let mut width: f64 = 0.0;
        let mut height = 0.0;
        for (n, line) in lines.iter().enumerate() {
            x_adjust = x_adjust.max(-line.bounds().x0.min(0.0));
            width = width.max(line.width());
            if n > 0 {
                height += line.leading();
            }
            height += line.ascent() + line.descent();
        }
        (Vec2::new(x_adjust, 0.0), Size::new(x_adjust + width, height))
    }

    /// Width available for alignment: the block width without the overhang.
    #[must_use]
    pub fn text_width(&self) -> f64 {
        self.size.width - self.offset.x
    }

    /// Fills every line into `canvas` with the block's top-left at `(x, y)`.
    pub fn fill(&self, canvas: &mut impl TextCanvas<L>, align: Align, x: f64, y: f64) {
        self.each_line(align, x, y, |line, lx, ly| canvas.fill_text(line, lx, ly));
    }

    /// Strokes every line into `canvas` with the block's top-left at `(x, y)`.
    pub fn stroke(&self, canvas: &mut impl TextCanvas<L>, align: Align, x: f64, y: f64) {
        self.each_line(align, x, y, |line, lx, ly| canvas.stroke_text(line, lx, ly));
    }

    /// Size of an image that holds the block plus [`pad`](Self::pad) on
    /// every side.
    #[must_use]
    pub fn image_size(&self, scale_factor: f64) -> Size {
        let pad = Self::pad(scale_factor);
        Size::new(self.size.width + 2.0 * pad, self.size.height + 2.0 * pad)
    }

    /// Fills the block into an image of [`image_size`](Self::image_size),
    /// inset by the padding.
    pub fn fill_padded(&self, canvas: &mut impl TextCanvas<L>, align: Align, scale_factor: f64) {
        let pad = Self::pad(scale_factor);
        self.fill(canvas, align, pad, pad);
    }

    /// Padding that leaves room for antialiasing: one physical pixel.
    #[must_use]
    pub fn pad(scale_factor: f64) -> f64 {
        1.0 / scale_factor
    }

    fn each_line(&self, align: Align, x: f64, y: f64, mut f: impl FnMut(&L, f64, f64)) {
        let text_width = self.text_width();
        let mut ly = y + self.offset.y;
        for line in &self.lines {
            let lx = x + self.offset.x + align.x_offset(line.width(), text_width);
            f(line, lx, ly);
            ly += line.ascent() + line.descent() + line.leading();
        }
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
#[must_use]
pub fn normalize_eol(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct Line {
        width: f64,
        ink_x: f64,
    }

    impl LineLayout for Line {
        fn width(&self) -> f64 {
            self.width
        }
        fn bounds(&self) -> Rect {
            Rect::new(self.ink_x, 0.0, self.width, 10.0)
        }
        fn ascent(&self) -> f64 {
            8.0
        }
        fn descent(&self) -> f64 {
            2.0
        }
        fn leading(&self) -> f64 {
            1.0
        }
    }

    #[derive(Default)]
    struct Log {
        filled: Vec<(f64, f64, f64)>,
        stroked: usize,
    }

    impl TextCanvas<Line> for Log {
        fn fill_text(&mut self, line: &Line, x: f64, y: f64) {
            self.filled.push((line.width, x, y));
        }
        fn stroke_text(&mut self, _: &Line, _: f64, _: f64) {
            self.stroked += 1;
        }
    }

    fn line(width: f64) -> Line {
        Line { width, ink_x: 0.0 }
    }

    #[test]
    fn align_offsets() {
        assert_eq!(Align::Left.x_offset(20.0, 100.0), 0.0);
        assert_eq!(Align::Center.x_offset(20.0, 100.0), 40.0);
        assert_eq!(Align::Right.x_offset(20.0, 100.0), 80.0);
    }

    #[test]
    fn bounds_stack_lines() {
        let block = TextBlock::new(vec![line(50.0), line(80.0), line(30.0)]);
        assert_eq!(block.offset, Vec2::ZERO);
        // Three lines of 10 plus two leadings of 1.
        assert_eq!(block.size, Size::new(80.0, 32.0));
        assert_eq!(block.text_width(), 80.0);
    }

    #[test]
    fn left_overhang_shifts_block() {
        let block = TextBlock::new(vec![
            line(50.0),
            Line {
                width: 40.0,
                ink_x: -3.0,
            },
        ]);
        assert_eq!(block.offset, Vec2::new(3.0, 0.0));
        assert_eq!(block.size.width, 53.0);
        assert_eq!(block.text_width(), 50.0);
    }

    #[test]
    fn fill_aligns_each_line() {
        let block = TextBlock::new(vec![line(100.0), line(60.0)]);
        let mut log = Log::default();
        block.fill(&mut log, Align::Right, 5.0, 7.0);
        assert_eq!(log.filled, [(100.0, 5.0, 7.0), (60.0, 45.0, 18.0)]);

        let mut log = Log::default();
        block.fill(&mut log, Align::Center, 0.0, 0.0);
        assert_eq!(log.filled[1], (60.0, 20.0, 11.0));

        block.stroke(&mut log, Align::Left, 0.0, 0.0);
        assert_eq!(log.stroked, 2);
    }

    #[test]
    fn padding_follows_scale_factor() {
        let block = TextBlock::new(vec![line(10.0)]);
        assert_eq!(TextBlock::<Line>::pad(2.0), 0.5);
        assert_eq!(block.image_size(2.0), Size::new(11.0, 11.0));

        let mut log = Log::default();
        block.fill_padded(&mut log, Align::Left, 1.0);
        assert_eq!(log.filled, [(10.0, 1.0, 1.0)]);
    }

    #[test]
    fn empty_block_is_empty() {
        let block = TextBlock::<Line>::new(vec![]);
        assert_eq!(block.size, Size::ZERO);
    }

    #[test]
    fn line_endings_normalize() {
        assert_eq!(normalize_eol("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_eol("plain"), "plain");
    }
}
