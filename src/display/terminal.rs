//! Terminal pixel surface.
//!
//! Renders pixels as half-block characters: each terminal cell is the upper
//! half block `▀` with its foreground colored from the top pixel and its
//! background from the bottom pixel, giving two square-ish pixels per cell.
//!
//! `present` diffs against the previously shown frame and only rewrites
//! terminal cells whose pixel pair changed, queueing everything and flushing
//! once. Frames that differ in a handful of cells cost a handful of writes.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

use super::DisplayAdapter;
use crate::types::Rgb;

const HALF_BLOCK: char = '\u{2580}';

fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Half-block pixel surface on an alternate-screen terminal.
pub struct TerminalDisplay {
    width: u16,
    height: u16,
    frame: Vec<Rgb>,
    /// Frame currently on screen; `None` forces a full redraw.
    shown: Option<Vec<Rgb>>,
    out: io::Stdout,
}

impl TerminalDisplay {
    /// Open a surface of `width` x `height` pixels (`height / 2` terminal
    /// rows, rounded up). Switches to the alternate screen and hides the
    /// cursor until drop.
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        let mut out = io::stdout();
        queue!(out, EnterAlternateScreen, Hide)?;
        out.flush()?;
        Ok(Self {
            width,
            height,
            frame: vec![Rgb::BLACK; width as usize * height as usize],
            shown: None,
            out,
        })
    }

    fn pixel(frame: &[Rgb], width: u16, height: u16, x: u16, y: u16) -> Rgb {
        if y < height {
            frame[y as usize * width as usize + x as usize]
        } else {
            // Bottom half of the last row when the height is odd.
            Rgb::BLACK
        }
    }
}

impl DisplayAdapter for TerminalDisplay {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear_frame(&mut self) {
        self.frame.fill(Rgb::BLACK);
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb) {
        if x < self.width && y < self.height {
            self.frame[y as usize * self.width as usize + x as usize] = color;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let rows = self.height.div_ceil(2);
        for row in 0..rows {
            for col in 0..self.width {
                let top = Self::pixel(&self.frame, self.width, self.height, col, row * 2);
                let bottom = Self::pixel(&self.frame, self.width, self.height, col, row * 2 + 1);
                if let Some(shown) = &self.shown {
                    let shown_top = Self::pixel(shown, self.width, self.height, col, row * 2);
                    let shown_bottom =
                        Self::pixel(shown, self.width, self.height, col, row * 2 + 1);
                    if top == shown_top && bottom == shown_bottom {
                        continue;
                    }
                }
                queue!(
                    self.out,
                    MoveTo(col, row),
                    SetForegroundColor(term_color(top)),
                    SetBackgroundColor(term_color(bottom)),
                    Print(HALF_BLOCK)
                )?;
            }
        }
        self.out.flush()?;
        match &mut self.shown {
            Some(shown) => shown.copy_from_slice(&self.frame),
            None => self.shown = Some(self.frame.clone()),
        }
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // Failing to restore the terminal on teardown is not actionable.
        let _ = queue!(self.out, Show, LeaveAlternateScreen);
        let _ = self.out.flush();
    }
}
