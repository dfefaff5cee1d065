//! Concrete terminal surfaces.
//!
//! `AnsiTerminal` keeps a cell grid and repaints it through ANSI 256-colour
//! escapes on every flush. `LineInput` reads one command per line: a square
//! name clicks that square, `q` quits, `t` cycles the theme.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::ui::display::{DisplaySurface, Tint, CELL_HEIGHT, CELL_WIDTH, MESSAGE_ROW};
use crate::ui::input_controller::{InputEvent, InputSurface, KeyInput, PointerButton, THEME_KEY};
use crate::utils::algebraic::algebraic_to_square;

pub const SCREEN_WIDTH: u16 = 64;
pub const SCREEN_HEIGHT: u16 = MESSAGE_ROW + 2;

const HELP_LINE: &str = "Type a square (e.g. e2) to select or move, t for theme, q to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Tint,
    bg: Tint,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Tint::Default,
            bg: Tint::Default,
        }
    }
}

pub struct AnsiTerminal<W: Write> {
    out: W,
    cells: Vec<Cell>,
}

impl AnsiTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cells: vec![Cell::default(); SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize],
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_to_string(&self) -> String {
        let mut frame = String::from("\x1b[H\x1b[2J");

        for row in self.cells.chunks(SCREEN_WIDTH as usize) {
            let mut current: Option<(Tint, Tint)> = None;
            for cell in row {
                if current != Some((cell.fg, cell.bg)) {
                    frame.push_str("\x1b[0m");
                    push_sgr(&mut frame, 38, cell.fg);
                    push_sgr(&mut frame, 48, cell.bg);
                    current = Some((cell.fg, cell.bg));
                }
                frame.push(cell.ch);
            }
            frame.push_str("\x1b[0m\r\n");
        }

        frame.push_str(HELP_LINE);
        frame.push_str("\r\n");
        frame
    }
}

fn push_sgr(frame: &mut String, selector: u8, tint: Tint) {
    if let Tint::Indexed(index) = tint {
        frame.push_str(&format!("\x1b[{selector};5;{index}m"));
    }
}

impl<W: Write> DisplaySurface for AnsiTerminal<W> {
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Tint, bg: Tint) {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return;
        }
        self.cells[y as usize * SCREEN_WIDTH as usize + x as usize] = Cell { ch, fg, bg };
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn flush(&mut self) -> io::Result<()> {
        let frame = self.render_to_string();
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

/// Line-oriented input: each recognised command becomes one event.
pub struct LineInput<R: BufRead> {
    input: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

impl<R: BufRead> InputSurface for LineInput<R> {
    fn next_event(&mut self) -> InputEvent {
        loop {
            self.line.clear();
            match self.input.read_line(&mut self.line) {
                // End of input behaves like Esc.
                Ok(0) => return InputEvent::Key(KeyInput::Esc),
                Ok(_) => {}
                Err(err) => return InputEvent::Error(err),
            }

            let command = self.line.trim().to_ascii_lowercase();
            match command.as_str() {
                "" => continue,
                "q" | "quit" | "exit" | "esc" => return InputEvent::Key(KeyInput::Esc),
                "t" | "theme" => return InputEvent::Key(KeyInput::Char(THEME_KEY)),
                _ => {}
            }

            match algebraic_to_square(&command) {
                Ok(square) => {
                    return InputEvent::Pointer {
                        x: (square.col as u16 * CELL_WIDTH) as i32,
                        y: (square.row as u16 * CELL_HEIGHT) as i32,
                        button: Some(PointerButton::Left),
                    }
                }
                Err(err) => debug!(%command, %err, "ignoring unrecognised input"),
            }
        }
    }
}
