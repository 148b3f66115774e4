mod tests {
    use beatstrip::BeatTracker;
    use beatstrip::beat::{BEAT_PEAK, BEATS_PER_PHASE};

    /// One hit followed by enough silence to pass the counting mark
    fn beat(tracker: &mut BeatTracker) {
        tracker.update(true);
        for _ in 0..4 {
            tracker.update(false);
        }
    }

    #[test]
    fn test_intensity_decays_to_zero_in_ten_frames() {
        let mut tracker = BeatTracker::new();
        tracker.update(true);
        assert_eq!(tracker.intensity(), BEAT_PEAK);

        let mut previous = tracker.intensity();
        for frame in 1..=10u8 {
            tracker.update(false);
            assert!(tracker.intensity() < previous);
            assert_eq!(tracker.intensity(), 250 - 25 * frame);
            previous = tracker.intensity();
        }
        assert_eq!(tracker.intensity(), 0);

        tracker.update(false);
        assert_eq!(tracker.intensity(), 0);
    }

    #[test]
    fn test_phase_flips_after_eight_beats() {
        let mut tracker = BeatTracker::new();
        for counted in 1..BEATS_PER_PHASE {
            beat(&mut tracker);
            assert_eq!(tracker.counter(), counted);
            assert!(!tracker.phase());
        }

        beat(&mut tracker);
        assert!(tracker.phase());
        assert_eq!(tracker.counter(), 0);

        for _ in 0..BEATS_PER_PHASE {
            beat(&mut tracker);
        }
        assert!(!tracker.phase());
        assert_eq!(tracker.counter(), 0);
    }

    #[test]
    fn test_hit_before_mark_is_not_counted() {
        let mut tracker = BeatTracker::new();
        tracker.update(true);
        tracker.update(false);
        tracker.update(false);
        assert_eq!(tracker.intensity(), 200);

        tracker.update(true);
        assert_eq!(tracker.counter(), 0);
        assert_eq!(tracker.intensity(), BEAT_PEAK);
    }

    #[test]
    fn test_mark_counts_once_per_decay() {
        let mut tracker = BeatTracker::new();
        beat(&mut tracker);
        for _ in 0..10 {
            tracker.update(false);
        }
        assert_eq!(tracker.counter(), 1);
    }
}
