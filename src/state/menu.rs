#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Idempotent. Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }
}
