mod tests {
    use beatstrip::engine::BOOT_PIXEL;
    use beatstrip::{
        AudioFrame, AudioSource, CommandMailbox, Duration, EffectEngine, EngineConfig,
        FrameScheduler, Hsv, Instant, OutputDriver, PowerLimits,
    };

    const LEDS: usize = 16;

    struct FixedAudio {
        spectrum: [u8; 2],
        beat_hit: bool,
    }

    impl AudioSource for FixedAudio {
        fn frame(&mut self) -> AudioFrame<'_> {
            AudioFrame {
                spectrum: &self.spectrum,
                beat_hit: self.beat_hit,
            }
        }
    }

    #[derive(Default)]
    struct RecordingStrip {
        frame: [Hsv; LEDS],
        len: usize,
        writes: usize,
        limits: Option<PowerLimits>,
    }

    impl RecordingStrip {
        fn frame(&self) -> &[Hsv] {
            &self.frame[..self.len]
        }
    }

    impl OutputDriver for RecordingStrip {
        fn write(&mut self, pixels: &[Hsv], limits: PowerLimits) {
            self.frame[..pixels.len()].copy_from_slice(pixels);
            self.len = pixels.len();
            self.writes += 1;
            self.limits = Some(limits);
        }
    }

    fn engine() -> EffectEngine<LEDS> {
        EffectEngine::new(&EngineConfig {
            strip_len: LEDS,
            band_count: 2,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    fn audio() -> FixedAudio {
        FixedAudio {
            spectrum: [120, 240],
            beat_hit: false,
        }
    }

    #[test]
    fn test_boot_then_render() {
        let mailbox = CommandMailbox::<4>::new();
        let mut scheduler =
            FrameScheduler::new(engine(), mailbox.receiver(), audio(), RecordingStrip::default());

        scheduler.boot();
        assert_eq!(scheduler.output().writes, 1);
        assert_eq!(scheduler.output().frame()[0], BOOT_PIXEL);

        mailbox.try_post("solid 5,6,7").unwrap();
        scheduler.tick(Instant::from_millis(0));

        let output = scheduler.output();
        assert_eq!(output.writes, 2);
        assert_eq!(output.limits, Some(PowerLimits::default()));
        assert!(output.frame().iter().all(|pixel| *pixel == Hsv::new(5, 6, 7)));
    }

    #[test]
    fn test_first_tick_boots_implicitly() {
        let mailbox = CommandMailbox::<4>::new();
        let mut scheduler =
            FrameScheduler::new(engine(), mailbox.receiver(), audio(), RecordingStrip::default());

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.output().writes, 2);
        scheduler.tick(Instant::from_millis(20));
        assert_eq!(scheduler.output().writes, 3);
    }

    #[test]
    fn test_one_command_per_frame() {
        let mailbox = CommandMailbox::<4>::new();
        let sender = mailbox.sender();
        let mut scheduler =
            FrameScheduler::new(engine(), mailbox.receiver(), audio(), RecordingStrip::default());

        sender.try_post("black").unwrap();
        sender.try_post("solid 1,2,3").unwrap();

        scheduler.tick(Instant::from_millis(0));
        assert!(scheduler.output().frame().iter().all(|pixel| pixel.val == 0));
        assert_eq!(mailbox.len(), 1);

        scheduler.tick(Instant::from_millis(20));
        assert!(scheduler
            .output()
            .frame()
            .iter()
            .all(|pixel| *pixel == Hsv::new(1, 2, 3)));
    }

    #[test]
    fn test_frame_timing() {
        let mailbox = CommandMailbox::<4>::new();
        let mut scheduler = FrameScheduler::with_frame_duration(
            engine(),
            mailbox.receiver(),
            audio(),
            RecordingStrip::default(),
            Duration::from_millis(20),
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // A long stall drops the backlog
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }
}
