#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loaded: bool,
}

impl LoadState {
    /// One-way transition. Returns false if already loaded.
    pub fn mark_loaded(&mut self) -> bool {
        !std::mem::replace(&mut self.is_loaded, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_once() {
        let mut load = LoadState::default();
        assert!(load.mark_loaded());
        assert!(!load.mark_loaded());
        assert!(load.is_loaded);
    }
}
