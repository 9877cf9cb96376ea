//! Timeline for the intro splash. The component in `components::splash`
//! schedules one timer per entry of [`SplashStage::schedule`].

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashStage {
    Blank,
    BaseLayer,
    TopLayer,
    Pulse,
    Exiting,
    Done,
}

const BASE_LAYER_AT: u32 = 500;
const TOP_LAYER_AT: u32 = 1_200;
const PULSE_AT: u32 = 2_000;

impl SplashStage {
    /// Milliseconds from mount at which each stage begins, in order.
    pub fn schedule() -> [(u32, SplashStage); 5] {
        [
            (BASE_LAYER_AT, SplashStage::BaseLayer),
            (TOP_LAYER_AT, SplashStage::TopLayer),
            (PULSE_AT, SplashStage::Pulse),
            (config::SPLASH_DURATION_MS, SplashStage::Exiting),
            (
                config::SPLASH_DURATION_MS + config::SPLASH_EXIT_MS,
                SplashStage::Done,
            ),
        ]
    }

    pub fn at(elapsed_ms: u32) -> SplashStage {
        Self::schedule()
            .into_iter()
            .take_while(|(start, _)| elapsed_ms >= *start)
            .last()
            .map(|(_, stage)| stage)
            .unwrap_or(SplashStage::Blank)
    }

    /// The overlay covers the page until it starts sliding away.
    pub fn is_covering(&self) -> bool {
        *self < SplashStage::Exiting
    }

    pub fn base_visible(&self) -> bool {
        *self >= SplashStage::BaseLayer
    }

    pub fn top_visible(&self) -> bool {
        *self >= SplashStage::TopLayer
    }

    pub fn pulsing(&self) -> bool {
        *self >= SplashStage::Pulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_for_exactly_the_configured_duration() {
        assert!(SplashStage::at(0).is_covering());
        assert!(SplashStage::at(config::SPLASH_DURATION_MS - 1).is_covering());
        assert!(!SplashStage::at(config::SPLASH_DURATION_MS).is_covering());
        assert_eq!(SplashStage::at(config::SPLASH_DURATION_MS), SplashStage::Exiting);
    }

    #[test]
    fn done_after_exit_animation() {
        let end = config::SPLASH_DURATION_MS + config::SPLASH_EXIT_MS;
        assert_eq!(SplashStage::at(end - 1), SplashStage::Exiting);
        assert_eq!(SplashStage::at(end), SplashStage::Done);
        assert_eq!(SplashStage::at(u32::MAX), SplashStage::Done);
    }

    #[test]
    fn layers_appear_in_order() {
        assert_eq!(SplashStage::at(499), SplashStage::Blank);
        assert_eq!(SplashStage::at(500), SplashStage::BaseLayer);
        assert!(!SplashStage::at(1_199).top_visible());
        assert!(SplashStage::at(1_200).top_visible());
        assert!(SplashStage::at(2_500).pulsing());
        assert!(SplashStage::at(2_500).base_visible());
    }

    #[test]
    fn schedule_is_strictly_increasing() {
        let schedule = SplashStage::schedule();
        assert!(schedule.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
    }
}
