//! Scroll-linked interpolation and entrance timing.
//!
//! Everything here is a pure function of one number, so components only need
//! to feed in a scroll offset or a list index.

/// Scroll distance over which the hero fades and shrinks.
pub const HERO_SCROLL_RANGE: (f64, f64) = (0.0, 300.0);

/// Hero opacity: fully visible at the top, gone after 300 units.
pub const HERO_OPACITY: ScrollTransform = ScrollTransform::new(HERO_SCROLL_RANGE, (1.0, 0.0));

/// Hero scale: shrinks to 80% over the same range.
pub const HERO_SCALE: ScrollTransform = ScrollTransform::new(HERO_SCROLL_RANGE, (1.0, 0.8));

/// Delay between consecutive items of a staggered list, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// Base delay of the hero stats strip, which starts after the headline settles.
pub const STATS_BASE_DELAY_SECS: f64 = 0.8;

/// Clamped linear map from an input range to an output range.
///
/// Inputs outside the range clamp to the nearest output bound. The output range
/// may be decreasing (`(1.0, 0.0)`); the map stays monotonic either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransform {
    input: (f64, f64),
    output: (f64, f64),
}

impl ScrollTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, offset: f64) -> f64 {
        let (start, end) = self.input;
        let (from, to) = self.output;

        if offset.is_nan() {
            return from;
        }
        if end <= start {
            return if offset < start { from } else { to };
        }

        let progress = ((offset - start) / (end - start)).clamp(0.0, 1.0);
        from + (to - from) * progress
    }
}

pub fn hero_opacity(offset: f64) -> f64 {
    HERO_OPACITY.apply(offset)
}

pub fn hero_scale(offset: f64) -> f64 {
    HERO_SCALE.apply(offset)
}

/// Presentation parameters of the hero copy at a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroMotion {
    pub fn at(offset: f64) -> Self {
        Self {
            opacity: hero_opacity(offset),
            scale: hero_scale(offset),
        }
    }

    /// Inline CSS for the hero copy block.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Entrance delay of the `index`-th item in a staggered list.
pub fn stagger_delay(base_secs: f64, index: usize) -> f64 {
    base_secs + index as f64 * STAGGER_STEP_SECS
}

/// `animation-delay` declaration for the `index`-th item.
pub fn delay_style(base_secs: f64, index: usize) -> String {
    format!("animation-delay: {:.2}s;", stagger_delay(base_secs, index))
}
