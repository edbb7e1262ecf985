//! Implements the one-time peripheral pin routing pass
//!
//! The remappable pins are configured once at startup, before any peripheral is used. The
//! mapping registers sit behind lock bits, so the whole pass runs as unlock -> map -> lock
//! inside a critical section.

use defmt_or_log::debug;
use sdnode_common::{traits::PinRouter, Mapping, PinFunction};
use snafu::Snafu;

/// Capacity of a routing plan
const MAX_MAPPINGS: usize = 8;

/// An error building a [`RoutingPlan`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Snafu)]
pub enum RoutingError {
    /// The plan has no room for another mapping
    PlanFull,
    /// A pin was assigned more than once
    #[snafu(display("Pin {pin} assigned more than once"))]
    PinConflict {
        /// The doubly-assigned pin number
        pin: u8,
    },
    /// A peripheral function was assigned to more than one pin
    #[snafu(display("Function {function} assigned to more than one pin"))]
    FunctionConflict {
        /// The doubly-assigned function
        function: PinFunction,
    },
}

/// A conflict-checked set of peripheral-to-pin assignments
///
/// Each pin and each function may appear at most once. The SPI clock is a single logical
/// assignment even though the target applies both the clock-output and clock-input register
/// writes for it, so a plan can never express conflicting duplicate entries for the clock pin.
#[derive(Clone, Debug, Default)]
pub struct RoutingPlan {
    mappings: heapless::Vec<Mapping, MAX_MAPPINGS>,
}

impl RoutingPlan {
    /// Create an empty RoutingPlan
    pub const fn new() -> Self {
        Self {
            mappings: heapless::Vec::new(),
        }
    }

    /// Build the production plan for the radio SPI interface
    ///
    /// # Arguments
    /// - `data_in_pin`: Remappable pin carrying data from the transceiver
    /// - `data_out_pin`: Remappable pin carrying data to the transceiver
    /// - `clock_pin`: Remappable pin carrying the master clock, routed both out and back in
    pub fn spi_radio(
        data_in_pin: u8,
        data_out_pin: u8,
        clock_pin: u8,
    ) -> Result<Self, RoutingError> {
        let mut plan = Self::new();
        plan.assign(data_in_pin, PinFunction::SpiDataIn)?;
        plan.assign(data_out_pin, PinFunction::SpiDataOut)?;
        plan.assign(clock_pin, PinFunction::SpiClock)?;
        Ok(plan)
    }

    /// Add one assignment to the plan
    pub fn assign(&mut self, pin: u8, function: PinFunction) -> Result<(), RoutingError> {
        for existing in &self.mappings {
            if existing.pin == pin {
                return PinConflictSnafu { pin }.fail();
            }
            if existing.function == function {
                return FunctionConflictSnafu { function }.fail();
            }
        }
        self.mappings
            .push(Mapping::new(pin, function))
            .map_err(|_| PlanFullSnafu.build())
    }

    /// Get the assignments in the plan
    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }
}

/// Apply a routing plan to the target
///
/// Runs the unlock -> map -> lock sequence inside a critical section so no other register
/// traffic can interleave with the lock bits. Intended to run once at startup; peripherals must
/// not be used before their pins are routed.
pub fn route_pins<R: PinRouter>(router: &mut R, plan: &RoutingPlan) {
    critical_section::with(|_cs| {
        router.unlock();
        for mapping in plan.mappings() {
            debug!("Routing pin {} to {:?}", mapping.pin, mapping.function);
            router.apply(*mapping);
        }
        router.lock();
    });
}
