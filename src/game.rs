//! Frame driver
//!
//! Owns the game state and input tracker, runs one simulation tick per frame
//! and hands the results to injected collaborators. Whatever schedules
//! frames (requestAnimationFrame, a native timer loop, a test) just calls
//! [`GameLoop::frame`].

use crate::platform::InputTracker;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, Playfield, SoundCue};

/// Draws the game; never consulted by the simulation
pub trait Presenter {
    /// Draw the current frame (called every frame, frozen or not)
    fn present(&mut self, state: &GameState);

    /// Score/lives display values changed
    fn update_hud(&mut self, score: u32, lives: u8);
}

/// Plays named sound cues; fire-and-forget
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// The top-level game controller
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    input: InputTracker,
    idle_mode: bool,
}

impl GameLoop {
    pub fn new(playfield: Playfield) -> Self {
        Self {
            state: GameState::new(playfield),
            input: InputTracker::new(),
            idle_mode: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.playfield())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.on_key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.on_key_up(key);
    }

    /// Drop held keys, e.g. when focus is lost and key-up events never arrive
    pub fn release_keys(&mut self) {
        self.input.clear();
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.idle_mode = enabled;
    }

    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
        self.idle_mode
    }

    /// Run one frame: tick unless the game is over, then present
    ///
    /// Returns the number of events dispatched to collaborators.
    pub fn frame<P, S>(&mut self, presenter: &mut P, sounds: &mut S) -> usize
    where
        P: Presenter + ?Sized,
        S: SoundSink + ?Sized,
    {
        let mut dispatched = 0;
        if !self.state.is_game_over() {
            let mut input = self.input.tick_input();
            input.idle_mode = self.idle_mode;
            let events = sim::tick(&mut self.state, &input);
            dispatched = self.dispatch(&events, presenter, sounds);
        }
        presenter.present(&self.state);
        dispatched
    }

    /// Reset to a fresh game and refresh the HUD
    pub fn restart<P, S>(&mut self, presenter: &mut P, sounds: &mut S)
    where
        P: Presenter + ?Sized,
        S: SoundSink + ?Sized,
    {
        let events = sim::restart(&mut self.state);
        self.dispatch(&events, presenter, sounds);
    }

    fn dispatch<P, S>(&self, events: &[GameEvent], presenter: &mut P, sounds: &mut S) -> usize
    where
        P: Presenter + ?Sized,
        S: SoundSink + ?Sized,
    {
        for event in events {
            match *event {
                GameEvent::Sound(cue) => sounds.play(cue),
                GameEvent::ScoreChanged(_) | GameEvent::LivesChanged(_) => {
                    presenter.update_hud(self.state.score, self.state.lives)
                }
            }
        }
        events.len()
    }
}
