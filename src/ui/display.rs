//! Display surface boundary and the board frame renderer.
//!
//! The renderer only issues `set_cell` calls and one `flush` per frame; it
//! never reads anything back from the surface. Each board square is a
//! `CELL_WIDTH` x `CELL_HEIGHT` block of characters.

use std::io;

use clap::ValueEnum;

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

/// Screen row of the status message, two rows below the board.
pub const MESSAGE_ROW: u16 = BOARD_SIZE as u16 * CELL_HEIGHT + 2;

/// A terminal colour: the terminal default or a 256-colour palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Default,
    Indexed(u8),
}

pub const WHITE_PIECE: Tint = Tint::Indexed(15);
pub const BLACK_PIECE: Tint = Tint::Indexed(16);
pub const CURSOR: Tint = Tint::Indexed(196);

pub trait DisplaySurface {
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Tint, bg: Tint);
    fn clear(&mut self);
    fn flush(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub light_square: Tint,
    pub dark_square: Tint,
    pub selected: Tint,
    pub legal_move: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Classic,
    Ocean,
    Forest,
}

impl Theme {
    pub const fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::Ocean,
            Theme::Ocean => Theme::Forest,
            Theme::Forest => Theme::Classic,
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Theme::Classic => Palette {
                light_square: Tint::Indexed(223),
                dark_square: Tint::Indexed(173),
                selected: Tint::Indexed(68),
                legal_move: Tint::Indexed(155),
            },
            Theme::Ocean => Palette {
                light_square: Tint::Indexed(153),
                dark_square: Tint::Indexed(67),
                selected: Tint::Indexed(220),
                legal_move: Tint::Indexed(121),
            },
            Theme::Forest => Palette {
                light_square: Tint::Indexed(194),
                dark_square: Tint::Indexed(65),
                selected: Tint::Indexed(172),
                legal_move: Tint::Indexed(186),
            },
        }
    }
}

/// Cosmetic display settings; nothing here affects game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub theme: Theme,
}

impl DisplayConfig {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }
}

/// Draw one full frame: squares, highlights, pieces, cursor, and message.
pub fn render_frame(
    game: &GameState,
    cursor: Square,
    config: &DisplayConfig,
    surface: &mut dyn DisplaySurface,
) -> io::Result<()> {
    let palette = config.theme.palette();
    surface.clear();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let square = Square { row, col };
            let bg = if game.selected_square() == Some(square) {
                palette.selected
            } else if game.legal_destinations().contains(&square) {
                palette.legal_move
            } else if (row + col) % 2 == 0 {
                palette.dark_square
            } else {
                palette.light_square
            };

            let x0 = col as u16 * CELL_WIDTH;
            let y0 = row as u16 * CELL_HEIGHT;
            for dy in 0..CELL_HEIGHT {
                for dx in 0..CELL_WIDTH {
                    surface.set_cell(x0 + dx, y0 + dy, ' ', Tint::Default, bg);
                }
            }

            if let Some(piece) = game.board().piece_at(square) {
                let fg = match piece.color {
                    Color::White => WHITE_PIECE,
                    Color::Black => BLACK_PIECE,
                };
                surface.set_cell(x0 + 1, y0, piece.glyph(), fg, bg);
            }
        }
    }

    let cursor_x = cursor.col as u16 * CELL_WIDTH;
    let cursor_y = cursor.row as u16 * CELL_HEIGHT;
    surface.set_cell(cursor_x, cursor_y, '>', CURSOR, Tint::Default);
    surface.set_cell(cursor_x + CELL_WIDTH - 1, cursor_y, '<', CURSOR, Tint::Default);

    for (i, ch) in game.message().chars().enumerate() {
        surface.set_cell(i as u16, MESSAGE_ROW, ch, Tint::Default, Tint::Default);
    }

    surface.flush()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;

    use super::*;

    /// Records the last write to each cell.
    #[derive(Default)]
    struct RecordingSurface {
        cells: HashMap<(u16, u16), (char, Tint, Tint)>,
        flushes: usize,
    }

    impl DisplaySurface for RecordingSurface {
        fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Tint, bg: Tint) {
            self.cells.insert((x, y), (ch, fg, bg));
        }

        fn clear(&mut self) {
            self.cells.clear();
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square should be on the board")
    }

    #[test]
    fn frame_draws_pieces_cursor_and_message() {
        let game = GameState::new_game();
        let mut surface = RecordingSurface::default();
        render_frame(&game, sq(0, 0), &DisplayConfig::default(), &mut surface)
            .expect("recording surface never fails");

        assert_eq!(surface.flushes, 1);
        // White king on e1 at cell (4, 7).
        let (glyph, fg, _) = surface.cells[&(4 * CELL_WIDTH + 1, 7 * CELL_HEIGHT)];
        assert_eq!(glyph, '♔');
        assert_eq!(fg, WHITE_PIECE);
        assert_eq!(surface.cells[&(0, 0)].0, '>');
        assert_eq!(surface.cells[&(CELL_WIDTH - 1, 0)].0, '<');
        assert_eq!(surface.cells[&(0, MESSAGE_ROW)].0, 'W');
    }

    #[test]
    fn selection_and_destinations_are_highlighted() {
        let mut game = GameState::new_game();
        game.select_square(Color::White, sq(6, 4));
        let config = DisplayConfig::default();
        let palette = config.theme.palette();
        let mut surface = RecordingSurface::default();
        render_frame(&game, sq(7, 7), &config, &mut surface).expect("recording surface never fails");

        let bg_at = |square: Square| {
            surface.cells[&(square.col as u16 * CELL_WIDTH + 2, square.row as u16 * CELL_HEIGHT)].2
        };
        assert_eq!(bg_at(sq(6, 4)), palette.selected);
        assert_eq!(bg_at(sq(5, 4)), palette.legal_move);
        assert_eq!(bg_at(sq(4, 4)), palette.legal_move);
        assert_eq!(bg_at(sq(0, 0)), palette.dark_square);
        assert_eq!(bg_at(sq(0, 1)), palette.light_square);
    }

    #[test]
    fn theme_cycles_back_to_classic() {
        let mut config = DisplayConfig::default();
        config.cycle_theme();
        assert_eq!(config.theme, Theme::Ocean);
        config.cycle_theme();
        config.cycle_theme();
        assert_eq!(config.theme, Theme::Classic);
    }
}
