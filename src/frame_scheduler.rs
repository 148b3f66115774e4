//! Frame pacing for the render loop.
//!
//! Pulls one audio frame and at most one queued command per tick, renders and
//! hands the result to the strip driver. No async and no platform timers: the
//! caller sleeps for the returned duration between ticks.

use embassy_time::{Duration, Instant};

use crate::channel::CommandReceiver;
use crate::{AudioSource, EffectEngine, OutputDriver};

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u64 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Result of a frame tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler.
///
/// # Usage
///
/// ```ignore
/// let mailbox = CommandMailbox::<4>::new();
/// let engine = EffectEngine::<139>::new(&EngineConfig::default())?;
/// let mut scheduler = FrameScheduler::new(engine, mailbox.receiver(), audio, strip);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    A: AudioSource,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const SLOTS: usize,
    const QUEUE: usize,
> {
    engine: EffectEngine<MAX_LEDS, SLOTS>,
    commands: CommandReceiver<'a, QUEUE>,
    audio: A,
    output: O,
    next_frame: Instant,
    frame_duration: Duration,
    booted: bool,
}

impl<'a, A, O, const MAX_LEDS: usize, const SLOTS: usize, const QUEUE: usize>
    FrameScheduler<'a, A, O, MAX_LEDS, SLOTS, QUEUE>
where
    A: AudioSource,
    O: OutputDriver,
{
    /// Create a scheduler running at `DEFAULT_FPS`.
    pub fn new(
        engine: EffectEngine<MAX_LEDS, SLOTS>,
        commands: CommandReceiver<'a, QUEUE>,
        audio: A,
        output: O,
    ) -> Self {
        Self::with_frame_duration(engine, commands, audio, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a scheduler with a custom frame duration.
    pub fn with_frame_duration(
        engine: EffectEngine<MAX_LEDS, SLOTS>,
        commands: CommandReceiver<'a, QUEUE>,
        audio: A,
        output: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            engine,
            commands,
            audio,
            output,
            next_frame: Instant::from_millis(0),
            frame_duration,
            booted: false,
        }
    }

    /// Show the boot frame on the strip.
    ///
    /// Called implicitly before the first rendered frame.
    pub fn boot(&mut self) {
        let limits = self.engine.power_limits();
        self.output.write(self.engine.boot_frame(), limits);
        self.booted = true;
    }

    /// Render one frame and return timing information.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if !self.booted {
            self.boot();
        }

        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let command = self.commands.try_take();
        let audio = self.audio.frame();
        let limits = self.engine.power_limits();
        let pixels = self
            .engine
            .render_frame(command.as_deref(), audio.spectrum, audio.beat_hit);
        self.output.write(pixels, limits);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn engine(&self) -> &EffectEngine<MAX_LEDS, SLOTS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EffectEngine<MAX_LEDS, SLOTS> {
        &mut self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
