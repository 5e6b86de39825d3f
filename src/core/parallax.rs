//! Hero parallax offsets

/// Maximum displacement span in pixels across the whole viewport
pub const PARALLAX_FACTOR: f64 = 20.0;

/// Fraction of the offset applied to the visualizer layer
pub const VISUALIZER_RATIO: f64 = 0.5;

/// Pointer-derived displacement; zero at the viewport center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    /// Offset for a pointer at (`client_x`, `client_y`) in a viewport of the
    /// given size. Degenerate viewports produce no movement.
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / width - 0.5) * PARALLAX_FACTOR,
            y: (client_y / height - 0.5) * PARALLAX_FACTOR,
        }
    }

    /// CSS transform for the text layer, which moves against the pointer
    pub fn text_transform(&self) -> String {
        format!("transform: translate({}px, {}px)", -self.x, -self.y)
    }

    /// CSS transform for the chart layer, which follows the pointer at half speed
    pub fn visualizer_transform(&self) -> String {
        format!(
            "transform: translate({}px, {}px)",
            self.x * VISUALIZER_RATIO,
            self.y * VISUALIZER_RATIO
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero() {
        let offset = ParallaxOffset::from_pointer(960.0, 540.0, 1920.0, 1080.0);
        assert_eq!(offset, ParallaxOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_corners() {
        let top_left = ParallaxOffset::from_pointer(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(top_left, ParallaxOffset { x: -10.0, y: -10.0 });

        let bottom_right = ParallaxOffset::from_pointer(1000.0, 800.0, 1000.0, 800.0);
        assert_eq!(bottom_right, ParallaxOffset { x: 10.0, y: 10.0 });
    }

    #[test]
    fn test_linear_in_pointer() {
        let a = ParallaxOffset::from_pointer(250.0, 0.0, 1000.0, 1000.0);
        let b = ParallaxOffset::from_pointer(750.0, 0.0, 1000.0, 1000.0);
        assert_eq!(a.x, -5.0);
        assert_eq!(b.x, 5.0);
    }

    #[test]
    fn test_zero_viewport() {
        assert_eq!(
            ParallaxOffset::from_pointer(10.0, 10.0, 0.0, 600.0),
            ParallaxOffset::default()
        );
    }

    #[test]
    fn test_layer_transforms() {
        let offset = ParallaxOffset::from_pointer(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(offset.text_transform(), "transform: translate(10px, 10px)");
        assert_eq!(offset.visualizer_transform(), "transform: translate(-5px, -5px)");
    }
}
