//! Edge-triggered check-and-clear flags.

/// A boolean that reads true once per raise.
///
/// The frame loop must poll each flag once per frame; a raise that is never
/// taken stays pending until the owner clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFlag(bool);

impl EdgeFlag {
    /// Marks the edge as pending.
    pub fn raise(&mut self) {
        self.0 = true;
    }

    /// Reads and clears the edge.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }

    /// Reads the edge without clearing it.
    pub fn is_raised(&self) -> bool {
        self.0
    }

    /// Drops a pending edge.
    pub fn clear(&mut self) {
        self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_fires_once() {
        let mut flag = EdgeFlag::default();
        assert!(!flag.take());
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_double_raise_is_one_edge() {
        let mut flag = EdgeFlag::default();
        flag.raise();
        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }
}
