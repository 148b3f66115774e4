mod tests {
    use beatstrip::color::{frame_to_rgb, to_rgb};
    use beatstrip::{Hsv, Rgb};

    #[test]
    fn test_dark_pixel_is_black() {
        assert_eq!(to_rgb(Hsv::BLACK), Rgb::new(0, 0, 0));
        assert_eq!(to_rgb(Hsv::new(170, 255, 0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_frame_to_rgb_converts_shorter_side() {
        let frame = [Hsv::BLACK; 4];
        let mut out = [Rgb::new(9, 9, 9); 3];
        assert_eq!(frame_to_rgb(&frame, &mut out), 3);
        assert_eq!(out, [Rgb::new(0, 0, 0); 3]);

        let mut wide = [Rgb::new(9, 9, 9); 6];
        assert_eq!(frame_to_rgb(&frame, &mut wide), 4);
        assert_eq!(wide[4], Rgb::new(9, 9, 9));
    }
}
