//! Input surface boundary and the input controller.
//!
//! Raw events are turned into `ControllerAction`s: pointer positions become
//! board cells (clamped to the board), Esc quits, `t` cycles the theme. The
//! input loop forwards actions to the session over its event channel.

use std::io;

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use crate::chess_errors::{SessionError, SessionResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;
use crate::session::events::SessionEvent;
use crate::ui::display::{CELL_HEIGHT, CELL_WIDTH};

pub const THEME_KEY: char = 't';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Esc,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyInput),
    /// Pointer position in screen characters; `button` is `None` for motion.
    Pointer {
        x: i32,
        y: i32,
        button: Option<PointerButton>,
    },
    /// The surface failed and cannot produce further events.
    Error(io::Error),
}

pub trait InputSurface {
    /// Block until the next event is available.
    fn next_event(&mut self) -> InputEvent;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAction {
    Quit,
    CycleTheme,
    /// Move the cursor to `cell`; `confirm` also selects or moves there.
    Pointer { cell: Square, confirm: bool },
}

/// Map a screen position to the board cell under it, clamped to the board.
pub fn pointer_to_cell(x: i32, y: i32) -> Square {
    let last = BOARD_SIZE as i32 - 1;
    Square {
        row: (y / CELL_HEIGHT as i32).clamp(0, last) as u8,
        col: (x / CELL_WIDTH as i32).clamp(0, last) as u8,
    }
}

/// Translate one raw event; unbound keys and buttons yield `Ok(None)`.
pub fn translate_event(event: InputEvent) -> io::Result<Option<ControllerAction>> {
    let action = match event {
        InputEvent::Key(KeyInput::Esc) => Some(ControllerAction::Quit),
        InputEvent::Key(KeyInput::Char(ch)) if ch.eq_ignore_ascii_case(&THEME_KEY) => {
            Some(ControllerAction::CycleTheme)
        }
        InputEvent::Key(KeyInput::Char(_)) => None,
        InputEvent::Pointer { x, y, button } => Some(ControllerAction::Pointer {
            cell: pointer_to_cell(x, y),
            confirm: button == Some(PointerButton::Left),
        }),
        InputEvent::Error(err) => return Err(err),
    };
    Ok(action)
}

/// Pull events until quit, forwarding actions to the session.
///
/// An input surface error ends the loop with `SessionError::InputSurface`.
/// The loop also ends quietly once the session stops listening.
pub fn run_input_loop(
    surface: &mut dyn InputSurface,
    events: &Sender<SessionEvent>,
) -> SessionResult<()> {
    loop {
        let Some(action) = translate_event(surface.next_event()).map_err(SessionError::InputSurface)?
        else {
            continue;
        };
        trace!(?action, "input action");

        if events.send(SessionEvent::Input(action)).is_err() {
            debug!("session stopped, leaving input loop");
            return Ok(());
        }
        if action == ControllerAction::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;

    struct ScriptedInput {
        events: VecDeque<InputEvent>,
    }

    impl InputSurface for ScriptedInput {
        fn next_event(&mut self) -> InputEvent {
            self.events
                .pop_front()
                .unwrap_or(InputEvent::Key(KeyInput::Esc))
        }
    }

    #[test]
    fn pointer_positions_clamp_to_the_board() {
        assert_eq!(pointer_to_cell(0, 0), Square { row: 0, col: 0 });
        assert_eq!(pointer_to_cell(17, 9), Square { row: 4, col: 4 });
        assert_eq!(pointer_to_cell(-5, -1), Square { row: 0, col: 0 });
        assert_eq!(pointer_to_cell(500, 300), Square { row: 7, col: 7 });
    }

    #[test]
    fn keys_map_to_quit_and_theme() {
        assert_eq!(
            translate_event(InputEvent::Key(KeyInput::Esc)).expect("key events never fail"),
            Some(ControllerAction::Quit)
        );
        assert_eq!(
            translate_event(InputEvent::Key(KeyInput::Char('t'))).expect("key events never fail"),
            Some(ControllerAction::CycleTheme)
        );
        assert_eq!(
            translate_event(InputEvent::Key(KeyInput::Char('x'))).expect("key events never fail"),
            None
        );
    }

    #[test]
    fn only_left_button_confirms() {
        let left = translate_event(InputEvent::Pointer {
            x: 16,
            y: 12,
            button: Some(PointerButton::Left),
        })
        .expect("pointer events never fail");
        assert_eq!(
            left,
            Some(ControllerAction::Pointer {
                cell: Square { row: 6, col: 4 },
                confirm: true
            })
        );

        let motion = translate_event(InputEvent::Pointer {
            x: 16,
            y: 12,
            button: None,
        })
        .expect("pointer events never fail");
        assert_eq!(
            motion,
            Some(ControllerAction::Pointer {
                cell: Square { row: 6, col: 4 },
                confirm: false
            })
        );
    }

    #[test]
    fn input_loop_forwards_actions_until_quit() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut input = ScriptedInput {
            events: VecDeque::from([
                InputEvent::Key(KeyInput::Char('z')),
                InputEvent::Key(KeyInput::Char('t')),
                InputEvent::Key(KeyInput::Esc),
                InputEvent::Key(KeyInput::Char('t')),
            ]),
        };

        run_input_loop(&mut input, &tx).expect("scripted input never fails");
        let forwarded: Vec<SessionEvent> = rx.try_iter().collect();
        assert_eq!(
            forwarded,
            vec![
                SessionEvent::Input(ControllerAction::CycleTheme),
                SessionEvent::Input(ControllerAction::Quit),
            ]
        );
    }

    #[test]
    fn input_surface_error_is_fatal() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut input = ScriptedInput {
            events: VecDeque::from([InputEvent::Error(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal gone",
            ))]),
        };

        let result = run_input_loop(&mut input, &tx);
        assert!(matches!(result, Err(SessionError::InputSurface(_))));
    }
}
