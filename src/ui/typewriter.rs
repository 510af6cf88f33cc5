//! Character-by-character reveal for the hero tagline.

pub struct Typewriter {
    full: String,
    // Byte index of the reveal frontier, always on a char boundary.
    shown: usize,
}

impl Typewriter {
    pub fn new(full: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.full.len()
    }

    pub fn visible(&self) -> &str {
        &self.full[..self.shown]
    }

    /// Reveal one more character. Returns whether anything changed, so
    /// the caller knows a redraw is due.
    pub fn tick(&mut self) -> bool {
        match self.full[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn skip_to_end(&mut self) {
        self.shown = self.full.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick() {
        let mut t = Typewriter::new("abc");
        assert_eq!(t.visible(), "");
        assert!(t.tick());
        assert_eq!(t.visible(), "a");
        assert!(t.tick());
        assert!(t.tick());
        assert_eq!(t.visible(), "abc");
        assert!(t.is_done());
        assert!(!t.tick());
    }

    #[test]
    fn respects_char_boundaries() {
        let mut t = Typewriter::new("héllo → world");
        while t.tick() {}
        assert_eq!(t.visible(), "héllo → world");
    }

    #[test]
    fn skip_jumps_to_the_end() {
        let mut t = Typewriter::new("longer line");
        t.tick();
        t.skip_to_end();
        assert!(t.is_done());
        assert_eq!(t.visible(), "longer line");
    }
}
