use super::Vec2;

/// Axis-aligned rectangle in overlay units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    ///
    /// Non-finite points are never contained, so a host reporting NaN for an
    /// unknown cursor position hovers nothing.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        if !p.is_finite() {
            return false;
        }
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 100.0, 100.0).contains(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn contains_top_left_inclusive_bottom_right_exclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn contains_respects_negative_size() {
        assert!(r(10.0, 10.0, -10.0, -10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_rejects_nan_pointer() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(f32::NAN, 1.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = r(5.0, 5.0, 0.0, 0.0);
        assert!(rect.is_empty());
        assert!(!rect.contains(Vec2::new(5.0, 5.0)));
    }
}
