//! Hero typewriter state machine
//!
//! Types an ordered list of lines character by character, deleting each
//! line before moving to the next, and leaving the final line on screen.
//! The sequencer is deadline-driven: it owns at most one pending deadline
//! at any time, and the event loop calls [`TypingSequencer::poll`] with
//! the current instant to advance it. No wall-clock reads happen inside
//! the machine, which keeps every transition deterministic under test.

use std::time::{Duration, Instant};

use rand::Rng;

/// One line of the typing sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedLine {
    pub text: String,
    /// Optional named color for the line; the renderer decides what a
    /// name maps to
    pub color: Option<String>,
    /// Rendered emphasized (the hero name line)
    pub emphasis: bool,
}

impl TypedLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            emphasis: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            emphasis: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Uniform-random typing speed range, sampled per character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRange {
    pub min: Duration,
    pub max: Duration,
}

impl SpeedRange {
    fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let spread = (self.max - self.min).as_millis() as u64;
        let offset = rand::thread_rng().gen_range(0..=spread);
        self.min + Duration::from_millis(offset)
    }
}

/// Configuration for the typewriter
#[derive(Debug, Clone)]
pub struct TypingSpec {
    pub lines: Vec<TypedLine>,
    pub typing_speed: Duration,
    /// When set, each character samples a fresh delay from this range
    /// instead of using `typing_speed`
    pub variable_speed: Option<SpeedRange>,
    pub deleting_speed: Duration,
    /// Pause after a line is fully typed, before deletion starts
    pub pause: Duration,
    pub initial_delay: Duration,
    /// Kept for configuration parity; the final line is typed once and
    /// never deleted, so the sequence terminates regardless of this flag.
    pub loop_lines: bool,
    /// Type each line with its characters reversed
    pub reverse_mode: bool,
    pub show_cursor: bool,
    pub hide_cursor_while_typing: bool,
    pub cursor_char: char,
    /// Half-period of the cursor blink (one fade direction)
    pub cursor_blink: Duration,
    /// Wait for a one-shot visibility signal before typing starts
    pub start_on_visible: bool,
}

impl Default for TypingSpec {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            typing_speed: Duration::from_millis(100),
            variable_speed: None,
            deleting_speed: Duration::from_millis(50),
            pause: Duration::from_millis(3000),
            initial_delay: Duration::ZERO,
            loop_lines: false,
            reverse_mode: false,
            show_cursor: true,
            hide_cursor_while_typing: false,
            cursor_char: '|',
            cursor_blink: Duration::from_millis(500),
            start_on_visible: false,
        }
    }
}

/// Events emitted while polling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    /// A line was typed, paused on, and fully deleted
    LineCompleted { index: usize, text: String },
    /// The final line is fully typed; no further mutation will occur
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingVisibility,
    Typing,
    Pausing,
    Deleting,
    Done,
}

/// The typewriter state machine
#[derive(Debug, Clone)]
pub struct TypingSequencer {
    spec: TypingSpec,
    phase: Phase,
    line_index: usize,
    char_index: usize,
    displayed: String,
    next_deadline: Option<Instant>,
    blink_epoch: Option<Instant>,
}

impl TypingSequencer {
    pub fn new(spec: TypingSpec, now: Instant) -> Self {
        let mut seq = Self {
            spec,
            phase: Phase::AwaitingVisibility,
            line_index: 0,
            char_index: 0,
            displayed: String::new(),
            next_deadline: None,
            blink_epoch: None,
        };
        if !seq.spec.start_on_visible {
            seq.start(now);
        }
        seq
    }

    /// One-shot visibility signal; ignored once the sequence has started
    pub fn mark_visible(&mut self, now: Instant) {
        if self.phase == Phase::AwaitingVisibility {
            self.start(now);
        }
    }

    fn start(&mut self, now: Instant) {
        if self.spec.lines.is_empty() {
            self.phase = Phase::Done;
            return;
        }
        self.phase = Phase::Typing;
        self.blink_epoch = Some(now);
        self.next_deadline = Some(now + self.spec.initial_delay + self.typing_delay());
    }

    /// Replace the configuration, invalidating any pending deadline and
    /// restarting from the first line
    pub fn reset(&mut self, spec: TypingSpec, now: Instant) {
        self.cancel();
        *self = Self::new(spec, now);
    }

    /// Drop the pending deadline; no further transition can fire
    pub fn cancel(&mut self) {
        self.next_deadline = None;
    }

    /// The single pending deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// The line currently being rendered
    pub fn current_line(&self) -> Option<&TypedLine> {
        self.spec.lines.get(self.line_index)
    }

    pub fn cursor_char(&self) -> char {
        self.spec.cursor_char
    }

    /// Whether the blinking cursor should render at `now`
    pub fn cursor_visible(&self, now: Instant) -> bool {
        if !self.spec.show_cursor || self.phase == Phase::Done {
            return false;
        }
        if self.spec.hide_cursor_while_typing
            && matches!(self.phase, Phase::Typing | Phase::Deleting)
        {
            return false;
        }
        match self.blink_epoch {
            Some(epoch) => {
                let half = self.spec.cursor_blink.as_millis().max(1);
                (now.duration_since(epoch).as_millis() / half) % 2 == 0
            }
            None => true,
        }
    }

    /// Advance the machine through every deadline that has elapsed
    ///
    /// At most one deadline is armed when this returns.
    pub fn poll(&mut self, now: Instant) -> Vec<TypingEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.next_deadline {
            if deadline > now {
                break;
            }
            self.next_deadline = None;
            self.step(deadline, &mut events);
        }
        events
    }

    fn step(&mut self, fired_at: Instant, events: &mut Vec<TypingEvent>) {
        match self.phase {
            Phase::AwaitingVisibility | Phase::Done => {}
            Phase::Typing => self.step_typing(fired_at, events),
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.arm(fired_at, self.spec.deleting_speed);
            }
            Phase::Deleting => self.step_deleting(fired_at, events),
        }
    }

    fn step_typing(&mut self, fired_at: Instant, events: &mut Vec<TypingEvent>) {
        let chars = self.current_chars();
        if self.char_index < chars.len() {
            self.displayed.push(chars[self.char_index]);
            self.char_index += 1;
            if self.char_index < chars.len() {
                let delay = self.typing_delay();
                self.arm(fired_at, delay);
                return;
            }
        }

        // Line fully typed
        if self.line_index + 1 == self.spec.lines.len() {
            // The final line stays on screen and is never deleted,
            // regardless of the loop flag.
            self.phase = Phase::Done;
            events.push(TypingEvent::Finished);
        } else {
            self.phase = Phase::Pausing;
            self.arm(fired_at, self.spec.pause);
        }
    }

    fn step_deleting(&mut self, fired_at: Instant, events: &mut Vec<TypingEvent>) {
        if self.displayed.pop().is_some() {
            if !self.displayed.is_empty() {
                self.arm(fired_at, self.spec.deleting_speed);
                return;
            }
        }

        // Line deleted; advance and start typing the next one
        events.push(TypingEvent::LineCompleted {
            index: self.line_index,
            text: self.spec.lines[self.line_index].text.clone(),
        });
        self.line_index = (self.line_index + 1) % self.spec.lines.len();
        self.char_index = 0;
        self.phase = Phase::Typing;
        let delay = self.typing_delay();
        self.arm(fired_at, delay);
    }

    fn current_chars(&self) -> Vec<char> {
        let text = &self.spec.lines[self.line_index].text;
        if self.spec.reverse_mode {
            text.chars().rev().collect()
        } else {
            text.chars().collect()
        }
    }

    fn typing_delay(&self) -> Duration {
        match self.spec.variable_speed {
            Some(range) => range.sample(),
            None => self.spec.typing_speed,
        }
    }

    fn arm(&mut self, from: Instant, delay: Duration) {
        debug_assert!(self.next_deadline.is_none());
        self.next_deadline = Some(from + delay);
    }
}
