use std::collections::HashMap;

use crate::systems::control::Button;

/// Maps raw key codes to engine buttons. The defaults follow browser
/// `keyCode` values; hosts with other conventions build their own map.
pub struct KeyBindings {
    map: HashMap<u32, Button>,
}

impl KeyBindings {
    /// A map with no bindings at all.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a key code to a button, replacing any previous binding.
    pub fn bind(&mut self, key_code: u32, button: Button) {
        self.map.insert(key_code, button);
    }

    /// The button a key code maps to, if any.
    pub fn lookup(&self, key_code: u32) -> Option<Button> {
        self.map.get(&key_code).copied()
    }
}

impl Default for KeyBindings {
    /// Arrows to move, Space to jump, Shift to run, X to attack,
    /// R to reset, Escape to quit.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(37, Button::Left);
        bindings.bind(39, Button::Right);
        bindings.bind(32, Button::Jump);
        bindings.bind(16, Button::Run);
        bindings.bind(88, Button::Attack);
        bindings.bind(82, Button::Reset);
        bindings.bind(27, Button::Quit);
        bindings
    }
}
