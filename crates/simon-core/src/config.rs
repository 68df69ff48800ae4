use std::time::Duration;

/// Pacing configuration for a game session.
///
/// Defaults: pattern blinks at 5 fps, click feedback at 20 fps, the input
/// loop at 10 fps, a one second breather before each replay and a three
/// second game-over screen.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How long a tile stays lit during pattern replay (and how long the
    /// board stays dark between two blinks).
    pub blink_hold: Duration,
    /// How long a tile flashes when the player clicks it.
    pub click_flash: Duration,
    /// Pause before each full-sequence replay.
    pub replay_gap: Duration,
    /// Input poll cadence of the driving loop.
    pub tick: Duration,
    /// How long the game-over screen is held before returning to the menu.
    pub game_over_hold: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            blink_hold: Duration::from_millis(200),
            click_flash: Duration::from_millis(50),
            replay_gap: Duration::from_secs(1),
            tick: Duration::from_millis(100),
            game_over_hold: Duration::from_secs(3),
        }
    }
}

impl GameConfig {
    /// Create a new configuration builder
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }
}

/// Builder for GameConfig
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    blink_hold: Option<Duration>,
    click_flash: Option<Duration>,
    replay_gap: Option<Duration>,
    tick: Option<Duration>,
    game_over_hold: Option<Duration>,
}

impl GameConfigBuilder {
    /// Set the pattern-replay blink duration
    pub fn blink_hold(mut self, d: Duration) -> Self {
        self.blink_hold = Some(d);
        self
    }

    /// Set the click feedback flash duration
    pub fn click_flash(mut self, d: Duration) -> Self {
        self.click_flash = Some(d);
        self
    }

    /// Set the pause before each replay
    pub fn replay_gap(mut self, d: Duration) -> Self {
        self.replay_gap = Some(d);
        self
    }

    /// Set the input poll cadence
    pub fn tick(mut self, d: Duration) -> Self {
        self.tick = Some(d);
        self
    }

    /// Set the game-over screen hold time
    pub fn game_over_hold(mut self, d: Duration) -> Self {
        self.game_over_hold = Some(d);
        self
    }

    /// Build the configuration
    pub fn build(self) -> GameConfig {
        let default = GameConfig::default();
        GameConfig {
            blink_hold: self.blink_hold.unwrap_or(default.blink_hold),
            click_flash: self.click_flash.unwrap_or(default.click_flash),
            replay_gap: self.replay_gap.unwrap_or(default.replay_gap),
            tick: self.tick.unwrap_or(default.tick),
            game_over_hold: self.game_over_hold.unwrap_or(default.game_over_hold),
        }
    }
}
