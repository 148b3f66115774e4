mod tests {
    use beatstrip::engine::BOOT_PIXEL;
    use beatstrip::{
        ConfigError, EffectEngine, EffectMode, EngineConfig, Hsv, OverlayMode, PowerLimits,
    };

    /// 13 pixels, 2 bands: 2 bass, 2 per band, 1 center pixel
    ///
    /// ```text
    /// index  0  1  2  3  4  5  6  7  8  9 10 11 12
    ///        B  B  b0 b0 b1 b1 C  b1 b1 b0 b0 B  B
    /// ```
    fn small_engine() -> EffectEngine<160> {
        engine(13, 2)
    }

    fn engine(strip_len: usize, band_count: usize) -> EffectEngine<160> {
        EffectEngine::new(&EngineConfig {
            strip_len,
            band_count,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    fn beat<const N: usize>(engine: &mut EffectEngine<N>, spectrum: &[u8]) {
        engine.render_frame(None, spectrum, true);
        for _ in 0..4 {
            engine.render_frame(None, spectrum, false);
        }
    }

    #[test]
    fn test_spectrum_layout() {
        let mut engine = small_engine();
        let frame = engine.render_frame(None, &[100, 200], true);
        assert_eq!(frame.len(), 13);

        let bass = Hsv::new(251, 255, 250);
        assert_eq!(frame[0], bass);
        assert_eq!(frame[1], bass);
        assert_eq!(frame[2], Hsv::new(30, 255, 100));
        assert_eq!(frame[3], Hsv::new(75, 255, 100));
        assert_eq!(frame[4], Hsv::new(120, 255, 200));
        assert_eq!(frame[5], Hsv::new(165, 255, 200));
        assert_eq!(frame[6], Hsv::new(165, 255, 200));

        for i in 0..frame.len() {
            assert_eq!(frame[i], frame[frame.len() - 1 - i], "pixel {i}");
        }
    }

    #[test]
    fn test_bass_follows_beat_and_rolls_hue() {
        let mut engine = small_engine();
        assert_eq!(engine.render_frame(None, &[0, 0], true)[0], Hsv::new(251, 255, 250));
        assert_eq!(engine.render_frame(None, &[0, 0], false)[0], Hsv::new(252, 255, 225));
        for _ in 0..3 {
            engine.render_frame(None, &[0, 0], false);
        }
        assert_eq!(engine.render_frame(None, &[0, 0], false)[0], Hsv::new(0, 255, 125));
    }

    #[test]
    fn test_short_spectrum_reads_zero() {
        let mut engine = small_engine();
        let frame = engine.render_frame(None, &[100], false);
        assert_eq!(frame[2].val, 100);
        assert_eq!(frame[4].val, 0);
        assert_eq!(frame[6].val, 0);

        let frame = engine.render_frame(None, &[], false);
        assert!(frame.iter().all(|pixel| pixel.val == 0));
    }

    #[test]
    fn test_solid_command_ignores_spectrum() {
        let mut engine = engine(139, 20);
        let spectrum = [255u8; 20];
        let frame = engine.render_frame(Some("solid 10,255,200"), &spectrum, true);
        assert!(frame.iter().all(|pixel| *pixel == Hsv::new(10, 255, 200)));

        let frame = engine.render_frame(None, &[7u8; 20], false);
        assert!(frame.iter().all(|pixel| *pixel == Hsv::new(10, 255, 200)));
        assert_eq!(engine.state().mode(), EffectMode::Solid);
    }

    #[test]
    fn test_black_and_off_are_dark() {
        let mut engine = engine(139, 20);
        let frame = engine.render_frame(Some("black"), &[255u8; 20], true);
        assert!(frame.iter().all(|pixel| pixel.val == 0));

        engine.render_frame(Some("default"), &[255u8; 20], true);
        let frame = engine.render_frame(Some("OFF"), &[255u8; 20], true);
        assert!(frame.iter().all(|pixel| pixel.val == 0));
        assert_eq!(engine.state().mode(), EffectMode::Off);
    }

    #[test]
    fn test_unknown_command_keeps_state() {
        let mut engine = small_engine();
        engine.render_frame(Some("halloween"), &[10, 20], true);
        let before = engine.state().clone();

        assert!(engine.apply_command("purple unicorn").is_err());
        assert!(engine.apply_command("solid 1,x,3").is_err());
        assert!(engine.apply_command("").is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_rejected_command_in_frame_still_renders() {
        let mut engine = small_engine();
        engine.render_frame(Some("solid 1,2,3"), &[0, 0], false);
        let before = engine.state().clone();

        let frame = engine.render_frame(Some("solid 10,abc,3"), &[0, 0], false);
        assert!(frame.iter().all(|pixel| *pixel == Hsv::new(1, 2, 3)));
        assert_eq!(engine.state().solid(), before.solid());
        assert_eq!(engine.state().mode(), before.mode());
    }

    #[test]
    fn test_empty_command_is_no_change() {
        let mut engine = small_engine();
        engine.render_frame(Some("solid 1,2,3"), &[0, 0], false);
        let frame = engine.render_frame(Some("   "), &[0, 0], false);
        assert_eq!(frame[0], Hsv::new(1, 2, 3));
    }

    #[test]
    fn test_render_is_idempotent_without_overlay() {
        let mut engine = engine(139, 20);
        engine.render_frame(Some("christmas"), &[50u8; 20], true);

        let spectrum: [u8; 20] = core::array::from_fn(|i| (i * 12) as u8);
        let mut first = engine.clone();
        let mut second = engine.clone();
        assert_eq!(
            first.render_frame(None, &spectrum, true),
            second.render_frame(None, &spectrum, true)
        );
        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_two_tone_segments() {
        // 28 pixels, 12 bands: 2 bass, 1 pixel per band, no center
        let mut engine = engine(28, 12);
        let frame = engine.render_frame(Some("christmas"), &[80u8; 12], false);

        assert_eq!(frame[0].hue, 1);
        assert_eq!(frame[2], Hsv::new(0, 255, 80));
        assert_eq!(frame[6], Hsv::new(8, 255, 80));
        assert_eq!(frame[7], Hsv::new(96, 255, 80));
        assert_eq!(frame[11], Hsv::new(104, 255, 80));
        assert_eq!(frame[12], Hsv::new(0, 255, 80));
        assert_eq!(frame[13], Hsv::new(2, 255, 80));
        assert_eq!(frame[14], frame[13]);
    }

    #[test]
    fn test_two_tone_swaps_on_beat_phase() {
        let mut engine = engine(28, 12);
        engine.render_frame(Some("christmas"), &[80u8; 12], false);

        for _ in 0..8 {
            beat(&mut engine, &[80u8; 12]);
        }
        assert!(engine.state().beat().phase());

        let frame = engine.render_frame(None, &[80u8; 12], false);
        assert_eq!(frame[2].hue, 96);
        assert_eq!(frame[7].hue, 0);
    }

    #[test]
    fn test_slow_palette_step() {
        let mut engine = engine(28, 12);
        let frame = engine.render_frame(Some("ocean"), &[80u8; 12], false);
        assert_eq!(frame[2], Hsv::new(128, 255, 80));
        assert_eq!(frame[3], Hsv::new(129, 255, 80));
        assert_eq!(frame[7], Hsv::new(160, 200, 80));
        assert_eq!(frame[0].hue, 141);
    }

    #[test]
    fn test_default_restores_spectrum() {
        let mut engine = small_engine();
        engine.render_frame(Some("christmas"), &[0, 0], false);
        assert_eq!(engine.state().mode(), EffectMode::TwoTone);

        let frame = engine.render_frame(Some("Default"), &[0, 0], false);
        assert_eq!(frame[2].hue, 30);
        assert_eq!(engine.state().mode(), EffectMode::Spectrum);
    }

    #[test]
    fn test_sparkle_toggle_keeps_mode() {
        let mut engine = small_engine();
        engine.render_frame(Some("solid 1,2,3"), &[0, 0], false);
        engine.render_frame(Some("sparkle"), &[0, 0], false);
        assert_eq!(engine.state().overlay(), OverlayMode::Sparkle);
        assert_eq!(engine.state().mode(), EffectMode::Solid);

        engine.render_frame(Some("sparkle"), &[0, 0], false);
        assert_eq!(engine.state().overlay(), OverlayMode::None);
    }

    #[test]
    fn test_boot_frame() {
        let mut engine = small_engine();
        let frame = engine.boot_frame();
        assert_eq!(frame[0], BOOT_PIXEL);
        assert!(frame[1..].iter().all(|pixel| *pixel == Hsv::BLACK));
    }

    #[test]
    fn test_config_errors() {
        let config = |strip_len, band_count| EngineConfig {
            strip_len,
            band_count,
            ..EngineConfig::default()
        };
        assert_eq!(
            EffectEngine::<64>::new(&config(0, 2)).err(),
            Some(ConfigError::EmptyStrip)
        );
        assert_eq!(
            EffectEngine::<64>::new(&config(100, 2)).err(),
            Some(ConfigError::StripTooLong { capacity: 64 })
        );
        assert_eq!(
            EffectEngine::<64>::new(&config(10, 0)).err(),
            Some(ConfigError::NoBands)
        );
    }

    #[test]
    fn test_power_limits_forwarded() {
        let limits = PowerLimits {
            brightness: 128,
            volts: 5,
            max_milliamps: 500,
        };
        let engine = EffectEngine::<160>::new(&EngineConfig {
            power: limits,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(engine.power_limits(), limits);
    }
}
