use iced::time::Duration;

pub const APP_NAME: &str = "Ember-8";
/// One machine cycle per tick. As close to 60 Hz as a millisecond timer
/// gets; the engine's timers assume this cadence.
pub const TICK_INTERVAL: Duration = Duration::from_millis(17);
