//! Session scoreboard: wave number, countdown, score and started flag.
//!
//! Written by the wave director, movement and combat systems; read by the
//! presentation layer through `HudSnapshot`. Also keeps the session clock,
//! which starts at zero when the session does and drives the countdown.

use graveward_core::constants::TICK_RATE;
use graveward_core::state::HudSnapshot;

#[derive(Debug, Clone)]
pub struct Scoreboard {
    wave_number: u32,
    countdown_secs: u32,
    countdown_start_secs: u32,
    score: u32,
    started: bool,
    /// Ticks since the session started.
    session_ticks: u64,
    /// Ticks into the current countdown second.
    second_ticks: u32,
}

impl Scoreboard {
    pub fn new(countdown_start_secs: u32) -> Self {
        Self {
            wave_number: 1,
            countdown_secs: countdown_start_secs,
            countdown_start_secs,
            score: 0,
            started: false,
            session_ticks: 0,
            second_ticks: 0,
        }
    }

    /// Mark the session started. Returns false if it already was.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.wave_number = 1;
        self.countdown_secs = self.countdown_start_secs;
        self.score = 0;
        self.session_ticks = 0;
        self.second_ticks = 0;
        true
    }

    /// Advance the session clock one tick. Every `TICK_RATE` ticks since the
    /// session start or the last countdown reset, one second comes off.
    pub fn advance_session(&mut self) {
        self.session_ticks += 1;
        self.second_ticks += 1;
        if self.second_ticks >= TICK_RATE {
            self.second_ticks = 0;
            self.tick_countdown();
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Subtract points, clamping at zero.
    pub fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    pub fn set_wave(&mut self, wave_number: u32) {
        self.wave_number = wave_number;
    }

    /// Back to the start value with a full second ahead.
    pub fn reset_countdown(&mut self) {
        self.countdown_secs = self.countdown_start_secs;
        self.second_ticks = 0;
    }

    /// One second elapsed.
    pub fn tick_countdown(&mut self) {
        self.countdown_secs = self.countdown_secs.saturating_sub(1);
    }

    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn session_ticks(&self) -> u64 {
        self.session_ticks
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            wave_number: self.wave_number,
            countdown_secs: self.countdown_secs,
            score: self.score,
            started: self.started,
            show_start_menu: !self.started,
        }
    }
}
