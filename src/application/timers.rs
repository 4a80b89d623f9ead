//! Tick timers behind the mockup's simulated progress.
//!
//! The event loop polls for input with a fixed timeout; every timeout is
//! one tick. Screens that simulate progress (loading, packing, driver
//! ETA, arrival countdown) own a [`ScreenTimer`] that fires on a fixed
//! tick interval. The timer lives in the application state and is
//! replaced on every navigation, so a timer armed for one screen can
//! never fire after that screen is gone.

use crate::domain::ScreenId;

/// Poll timeout of the main event loop; one elapsed timeout is one tick.
pub const TICK_MILLIS: u64 = 200;

/// Ticks on the loading screen before auto-advancing to onboarding.
pub const LOADING_TICKS: u32 = 10;
/// Ticks on the order-placed screen before auto-advancing.
pub const ORDER_PLACED_TICKS: u32 = 15;
/// Ticks between packing-progress increments on driver-assigned.
pub const PACKING_STEP_TICKS: u32 = 4;
/// Packing progress starts here and climbs by [`PACKING_STEP_PCT`].
pub const PACKING_START_PCT: u16 = 25;
pub const PACKING_STEP_PCT: u16 = 15;
/// Ticks per simulated ETA minute on driver-on-way.
pub const ETA_STEP_TICKS: u32 = 5;
/// Simulated ETA in minutes when the driver sets off.
pub const ETA_START_MINUTES: u16 = 18;
/// Ticks per countdown step on driver-arriving.
pub const ARRIVING_STEP_TICKS: u32 = 10;
/// Arrival countdown in simulated minutes.
pub const ARRIVING_START: u16 = 3;

/// A repeating tick timer scoped to one screen's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTimer {
    interval: u32,
    elapsed: u32,
}

impl ScreenTimer {
    pub fn new(interval_ticks: u32) -> Self {
        ScreenTimer {
            interval: interval_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Timer for the given screen, or `None` for screens without
    /// simulated progress.
    pub fn for_screen(screen: ScreenId) -> Option<ScreenTimer> {
        match screen {
            ScreenId::Loading => Some(ScreenTimer::new(LOADING_TICKS)),
            ScreenId::OrderPlaced => Some(ScreenTimer::new(ORDER_PLACED_TICKS)),
            ScreenId::DriverAssigned => Some(ScreenTimer::new(PACKING_STEP_TICKS)),
            ScreenId::DriverOnWay => Some(ScreenTimer::new(ETA_STEP_TICKS)),
            ScreenId::DriverArriving => Some(ScreenTimer::new(ARRIVING_STEP_TICKS)),
            _ => None,
        }
    }

    /// Advances one tick. Returns true each time a full interval has
    /// elapsed, then starts counting the next interval.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_on_interval_boundary() {
        let mut timer = ScreenTimer::new(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        // The interval repeats.
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timer = ScreenTimer::new(0);
        assert!(timer.tick());
    }

    #[test]
    fn test_timers_armed_only_for_progress_screens() {
        assert!(ScreenTimer::for_screen(ScreenId::Loading).is_some());
        assert!(ScreenTimer::for_screen(ScreenId::OrderPlaced).is_some());
        assert!(ScreenTimer::for_screen(ScreenId::DriverAssigned).is_some());
        assert!(ScreenTimer::for_screen(ScreenId::DriverOnWay).is_some());
        assert!(ScreenTimer::for_screen(ScreenId::DriverArriving).is_some());

        assert!(ScreenTimer::for_screen(ScreenId::Home).is_none());
        assert!(ScreenTimer::for_screen(ScreenId::Cart).is_none());
        assert!(ScreenTimer::for_screen(ScreenId::DeliveryComplete).is_none());
    }
}
