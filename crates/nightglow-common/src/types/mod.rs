mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_black_is_default() {
        assert_eq!(Rgb::default(), Rgb::BLACK);
    }

    #[test]
    fn rgb_array_conversion() {
        let c = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3]);
        assert_eq!(Rgb::from([0.1, 0.2, 0.3]), c);
    }

    #[test]
    fn rgb_to_rgba_appends_alpha() {
        let c = Rgb::new(14.0, 2.0, 25.0);
        assert_eq!(c.to_rgba(1.0), [14.0, 2.0, 25.0, 1.0]);
    }

    #[test]
    fn rgb_serialization() {
        let c = Rgb::new(0.5, 0.25, 1.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[0.5,0.25,1.0]");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
