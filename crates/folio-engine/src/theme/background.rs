/// Decorative layer drawn behind the page content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackgroundKind {
    /// Slowly drifting dots.
    Particles,
    /// Faint grid with code glyphs.
    DesignCode,
    /// Animated gradient, optionally with stars.
    Gradient,
    #[default]
    None,
}

/// One decorative element, positioned in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Diameter in pixels, 1 to 3.
    pub size: f64,
    /// Animation period in seconds, 2 to 5.
    pub duration: f64,
    /// Animation start offset in seconds, 0 to 5.
    pub delay: f64,
}

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;
const PLASTIC_CONJUGATE: f64 = 0.754_877_666_246_693;

impl BackgroundKind {
    /// Number of particles drawn for the particle background.
    pub const PARTICLE_COUNT: usize = 20;

    pub fn class(self) -> &'static str {
        match self {
            BackgroundKind::Particles => "bg-effect bg-effect-particles",
            BackgroundKind::DesignCode => "bg-effect bg-effect-design-code",
            BackgroundKind::Gradient => "bg-effect bg-effect-gradient",
            BackgroundKind::None => "bg-effect",
        }
    }

    /// A fixed, evenly spread layout of `count` points.
    ///
    /// Uses low-discrepancy sequences so the layout looks scattered but is the
    /// same on every render.
    pub fn points(count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| {
                let n = i as f64 + 1.0;
                let fx = (n * GOLDEN_RATIO_CONJUGATE).fract();
                let fy = (n * PLASTIC_CONJUGATE).fract();
                let fz = ((fx + fy) * 0.5 + n * 0.137).fract();
                Point {
                    x: round2(fx * 100.0),
                    y: round2(fy * 100.0),
                    size: round2(1.0 + fz * 2.0),
                    duration: round2(2.0 + fy * 3.0),
                    delay: round2(fx * 5.0),
                }
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
