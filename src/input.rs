use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

/// Currently held control intents, read once per simulation tick.
///
/// Level-triggered: key events only flip these booleans, the tick never
/// consumes or queues them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub accelerate: bool,
    pub reverse: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub brake: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    /// Steering intent as a signed value: left = +1, right = -1.
    pub fn steer_input(&self) -> f32 {
        (self.steer_left as i32 - self.steer_right as i32) as f32
    }

    pub fn clear(&mut self) {
        *self = InputState::default();
    }
}

// Actions that can be triggered by input beyond the held intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Restart,
    Exit,
}

// Key bindings for customizable controls
pub struct KeyBindings {
    pub accelerate: [Keycode; 2],
    pub reverse: [Keycode; 2],
    pub steer_left: [Keycode; 2],
    pub steer_right: [Keycode; 2],
    pub brake: [Keycode; 1],
    pub restart: Keycode,
    pub exit: Keycode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            accelerate: [Keycode::Up, Keycode::W],
            reverse: [Keycode::Down, Keycode::S],
            steer_left: [Keycode::Left, Keycode::A],
            steer_right: [Keycode::Right, Keycode::D],
            brake: [Keycode::Space],
            restart: Keycode::R,
            exit: Keycode::Escape,
        }
    }
}

pub struct InputHandler {
    state: InputState,
    bindings: KeyBindings,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            state: InputState::new(),
            bindings: KeyBindings::default(),
        }
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        InputHandler {
            state: InputState::new(),
            bindings,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Process one SDL event and return any triggered action.
    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::KeyDown { keycode: Some(keycode), repeat: false, .. } => {
                if *keycode == self.bindings.restart {
                    return InputAction::Restart;
                }
                if *keycode == self.bindings.exit {
                    return InputAction::Exit;
                }
                self.set_intent(*keycode, true);
                InputAction::None
            }
            Event::KeyUp { keycode: Some(keycode), .. } => {
                self.set_intent(*keycode, false);
                InputAction::None
            }
            // Losing focus means we will miss the key-up events, so drop
            // everything to "not pressed" rather than drive blind.
            Event::Window { win_event: WindowEvent::FocusLost, .. } => {
                self.state.clear();
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    fn set_intent(&mut self, keycode: Keycode, pressed: bool) {
        let b = &self.bindings;
        if b.accelerate.contains(&keycode) {
            self.state.accelerate = pressed;
        } else if b.reverse.contains(&keycode) {
            self.state.reverse = pressed;
        } else if b.steer_left.contains(&keycode) {
            self.state.steer_left = pressed;
        } else if b.steer_right.contains(&keycode) {
            self.state.steer_right = pressed;
        } else if b.brake.contains(&keycode) {
            self.state.brake = pressed;
        }
    }
}

// Helper function to print control instructions
pub fn print_controls() {
    println!("╔══════════════════════════════════════╗");
    println!("║            GAME CONTROLS             ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ ↑ / W         │ Accelerate           ║");
    println!("║ ↓ / S         │ Reverse              ║");
    println!("║ ← / A         │ Steer left           ║");
    println!("║ → / D         │ Steer right          ║");
    println!("║ Space         │ Brake                ║");
    println!("║ R             │ Restart              ║");
    println!("║ Esc           │ Exit                 ║");
    println!("╚══════════════════════════════════════╝");
}
