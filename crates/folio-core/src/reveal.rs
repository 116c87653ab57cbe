/// One-shot reveal latch for a scroll-revealed element.
///
/// Starts hidden, flips to revealed on the first intersection and never goes
/// back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection update. Returns true exactly once, on the update
    /// that reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// A piece of a heading split for per-character animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Space,
    Char(char),
}

/// Split heading text into animatable characters; spaces stay plain text.
pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .map(|c| if c == ' ' { Glyph::Space } else { Glyph::Char(c) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut l = RevealLatch::default();
        assert!(!l.observe(false));
        assert!(l.observe(true));
        assert!(!l.observe(false));
        assert!(!l.observe(true));
        assert!(l.is_revealed());
    }

    #[test]
    fn split_keeps_spaces_as_text() {
        let g = split_glyphs("Hi you");
        assert_eq!(g.len(), 6);
        assert_eq!(g[2], Glyph::Space);
        assert_eq!(g[3], Glyph::Char('y'));
    }
}
