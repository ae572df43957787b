//! Display zoom level

const ZOOM_STEP: f64 = 1.25;
const ZOOM_MIN: f64 = 0.1;
const ZOOM_MAX: f64 = 10.0;
/// Margin left around an image fitted to the viewport
const FIT_MARGIN: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Whole percent, truncated
    pub fn percent(self) -> u32 {
        (self.0 * 100.0) as u32
    }

    pub fn zoom_in(&mut self) {
        self.0 = (self.0 * ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.0 = (self.0 / ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset(&mut self) {
        self.0 = 1.0;
    }

    /// Scale so an `image` sized frame fits inside `viewport`
    ///
    /// Leaves the level alone when either size is degenerate.
    pub fn fit(&mut self, image: (u32, u32), viewport: (u32, u32)) {
        let (w, h) = image;
        let (vw, vh) = viewport;
        if w == 0 || h == 0 || vw == 0 || vh == 0 {
            return;
        }
        let scale = (vw as f64 / w as f64).min(vh as f64 / h as f64);
        self.0 = scale * FIT_MARGIN;
    }
}
