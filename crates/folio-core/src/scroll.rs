//! Scroll-linked geometry: scroll-spy, parallax and anchor offsets.

use crate::constants::*;

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y <= self.offset_top + self.height
    }
}

/// Index of the navigation link to highlight for `scroll_pos`.
///
/// `spans[i]` is the section targeted by link `i`, or `None` when the link
/// has no in-page target. When sections overlap the later link wins.
pub fn active_link(spans: &[Option<SectionSpan>], scroll_pos: f64) -> Option<usize> {
    let line = scroll_pos + SCROLL_SPY_OFFSET;
    spans
        .iter()
        .enumerate()
        .rev()
        .find(|(_, span)| span.is_some_and(|s| s.contains(line)))
        .map(|(i, _)| i)
}

/// Links grouped by the in-page target they point at.
///
/// Menus can carry several links to one section (the header menu and its
/// compact clone); they are all highlighted together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpyTargets<'a> {
    /// Distinct targets in first-seen order.
    pub targets: Vec<&'a str>,
    /// For each link, the index of its target.
    pub link_target: Vec<usize>,
}

impl<'a> SpyTargets<'a> {
    pub fn group(hashes: &[&'a str]) -> Self {
        let mut out = Self::default();
        for &hash in hashes {
            let idx = match out.targets.iter().position(|t| *t == hash) {
                Some(i) => i,
                None => {
                    out.targets.push(hash);
                    out.targets.len() - 1
                }
            };
            out.link_target.push(idx);
        }
        out
    }

    /// Whether each link should carry the active class. `spans[i]` is the
    /// section of target `i`.
    pub fn active_flags(&self, spans: &[Option<SectionSpan>], scroll_pos: f64) -> Vec<bool> {
        let active = active_link(spans, scroll_pos);
        self.link_target
            .iter()
            .map(|&t| Some(t) == active)
            .collect()
    }
}

/// Speed multiplier for the `index`-th parallax layer.
#[inline]
pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

#[inline]
pub fn parallax_offset(scroll_pos: f64, index: usize) -> f64 {
    scroll_pos * parallax_speed(index)
}

#[inline]
pub fn scroll_top_visible(scroll_pos: f64) -> bool {
    scroll_pos > SCROLL_TOP_VISIBLE_AFTER
}

/// Leading integer of a CSS length such as `"80px"`, like `parseInt`.
/// Anything without a leading integer reads as zero.
pub fn parse_css_px(value: &str) -> f64 {
    let s = value.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().map(|n| sign * n).unwrap_or(0.0)
}

/// Scroll destination for an anchored section honoring `scroll-margin-top`.
#[inline]
pub fn anchor_target(offset_top: f64, scroll_margin_top: &str) -> f64 {
    offset_top - parse_css_px(scroll_margin_top)
}

/// Ease-out quartic used by the smooth-scroll engine.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Who advances the smooth-scroll engine each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDriver {
    /// Browser scrolling, no engine.
    Native,
    /// `lenis.raf` runs on the gsap ticker, synced with ScrollTrigger.
    Ticker,
    /// `lenis.raf` runs on our own animation frame loop.
    Frames,
}

impl ScrollDriver {
    /// An engine that nothing drives would swallow wheel input, so Lenis is
    /// only used together with a clock for it.
    pub fn select(smooth_scroll: bool, has_lenis: bool, has_ticker: bool) -> Self {
        match (smooth_scroll && has_lenis, has_ticker) {
            (false, _) => ScrollDriver::Native,
            (true, true) => ScrollDriver::Ticker,
            (true, false) => ScrollDriver::Frames,
        }
    }

    #[inline]
    pub fn is_smooth(self) -> bool {
        self != ScrollDriver::Native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenis_without_gsap_runs_on_its_own_frames() {
        assert_eq!(ScrollDriver::select(true, true, false), ScrollDriver::Frames);
        assert_eq!(ScrollDriver::select(true, true, true), ScrollDriver::Ticker);
        assert!(ScrollDriver::select(true, true, false).is_smooth());
    }

    #[test]
    fn native_scroll_without_lenis_or_when_disabled() {
        for ticker in [false, true] {
            assert_eq!(ScrollDriver::select(true, false, ticker), ScrollDriver::Native);
            assert_eq!(ScrollDriver::select(false, true, ticker), ScrollDriver::Native);
        }
        assert!(!ScrollDriver::Native.is_smooth());
    }

    #[test]
    fn parse_css_px_reads_leading_integer() {
        assert_eq!(parse_css_px("80px"), 80.0);
        assert_eq!(parse_css_px("  12.7px"), 12.0);
        assert_eq!(parse_css_px("-4px"), -4.0);
        assert_eq!(parse_css_px("auto"), 0.0);
        assert_eq!(parse_css_px(""), 0.0);
    }

    #[test]
    fn parallax_layers_are_staggered() {
        assert_eq!(parallax_speed(0), 0.5);
        assert!((parallax_speed(2) - 0.9).abs() < 1e-12);
        assert!((parallax_offset(100.0, 1) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!scroll_top_visible(100.0));
        assert!(scroll_top_visible(100.5));
    }

    #[test]
    fn ease_hits_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }
}
