use embedded_hal::digital::PinState;
use ufmt_macros::uDebug;

use crate::Distance;

/// How the physical direction of travel relates to the sign of a distance.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum DirectionSense {
    /// Negative distances drive the direction line high.
    Normal,
    /// Positive distances drive the direction line high.
    Reversed,
}
impl DirectionSense {
    /// Returns the opposite sense.
    pub fn flipped(self) -> Self {
        match self {
            DirectionSense::Normal => DirectionSense::Reversed,
            DirectionSense::Reversed => DirectionSense::Normal,
        }
    }
}

/// Chooses the direction line level for a move.
///
/// The line is high for a negative distance under [DirectionSense::Normal],
/// or for a positive distance under [DirectionSense::Reversed]. Everything
/// else is low, so a zero distance is always low whatever the sense.
///
/// # Parameters
///
/// - `distance`: Signed distance of the move.
/// - `sense`: Configured direction sense.
pub fn direction_state(distance: Distance, sense: DirectionSense) -> PinState {
    let high = match sense {
        DirectionSense::Normal => distance.is_negative(),
        DirectionSense::Reversed => distance.is_positive(),
    };
    PinState::from(high)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating a [DirectionSense].
    pub fn sense() -> impl Strategy<Value = DirectionSense> {
        prop_oneof![Just(DirectionSense::Normal), Just(DirectionSense::Reversed)]
    }

    #[test]
    fn test_zero_is_low_for_both_senses() {
        let zero = Distance::zero();
        assert_eq!(PinState::Low, direction_state(zero, DirectionSense::Normal));
        assert_eq!(
            PinState::Low,
            direction_state(zero, DirectionSense::Reversed)
        );
    }

    #[test]
    fn test_normal_sense() {
        let sense = DirectionSense::Normal;
        assert_eq!(PinState::High, direction_state(Distance::new(-1), sense));
        assert_eq!(PinState::Low, direction_state(Distance::new(1), sense));
    }

    #[test]
    fn test_reversed_sense() {
        let sense = DirectionSense::Reversed;
        assert_eq!(PinState::Low, direction_state(Distance::new(-1), sense));
        assert_eq!(PinState::High, direction_state(Distance::new(1), sense));
    }

    proptest! {
        #[test]
        fn test_flipping_sense_inverts(
            value in any::<i32>().prop_filter("nonzero", |v| *v != 0),
            sense in sense()
        ) {
            let distance = Distance::new(value);
            assert_eq!(
                !direction_state(distance, sense),
                direction_state(distance, sense.flipped())
            );
        }
    }
}
