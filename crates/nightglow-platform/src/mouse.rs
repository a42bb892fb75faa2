//! Mouse input translation for the fly camera.

/// Pixels treated as one wheel "line" when the platform reports pixel deltas.
pub const PIXELS_PER_LINE: f64 = 20.0;

/// Convert raw pointer motion into `(yaw, pitch)` offsets in degrees.
///
/// Screen Y grows downward, so moving the mouse up pitches the camera up.
pub fn motion_to_angles(dx: f64, dy: f64, sensitivity: f32) -> (f32, f32) {
    (dx as f32 * sensitivity, -(dy as f32) * sensitivity)
}

/// Convert a pixel scroll delta to wheel lines. Positive scrolls up.
pub fn pixel_scroll_to_lines(delta_y: f64) -> f32 {
    (delta_y / PIXELS_PER_LINE) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_right_turns_right() {
        let (yaw, pitch) = motion_to_angles(10.0, 0.0, 0.1);
        assert!((yaw - 1.0).abs() < 1e-6);
        assert_eq!(pitch, 0.0);
    }

    #[test]
    fn motion_up_pitches_up() {
        let (_, pitch) = motion_to_angles(0.0, -20.0, 0.1);
        assert!((pitch - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sensitivity_ignores_motion() {
        assert_eq!(motion_to_angles(100.0, 100.0, 0.0), (0.0, -0.0));
    }

    #[test]
    fn pixel_scroll_converts_to_lines() {
        assert_eq!(pixel_scroll_to_lines(60.0), 3.0);
        assert_eq!(pixel_scroll_to_lines(-40.0), -2.0);
    }
}
