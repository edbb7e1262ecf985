//! A library to implement a sigma-delta sensor node in Rust
//!
//! Sdnode-node drives the acquisition side of a microcontroller sensor node: peripheral pin
//! routing for the radio SPI link, the op-amp analog front end, and a 16-bit sigma-delta
//! converter with ratiometric offset/gain calibration. It is primarily intended to be run on
//! microcontrollers, and so it is no_std compatible and performs no heap allocation. It provides
//! the following features:
//!
//! * A *calibration engine* which flushes the converter's decimation filter, captures the
//!   internal offset, measures the known reference, and produces a Q15 `(offset, gain)`
//!   correction pair.
//! * A *channel sampler* which selects an input, re-flushes the filter, and applies the stored
//!   correction to produce a calibrated signed result.
//! * A blocking *byte link* to the radio transceiver, also usable through the `embedded-io`
//!   [`Read`](embedded_io::Read)/[`Write`](embedded_io::Write) traits.
//! * A lock-bracketed, conflict-checked *pin routing* pass for the remappable peripheral pins.
//!
//! All hardware access goes through the narrow port traits in [`common::traits`], so the core
//! logic can be exercised on the host against simulated ports.
//!
//! # Getting Started
//!
//! ## Bring-up
//!
//! At startup, route the peripheral pins, configure the front end, and run calibration once:
//!
//! ```ignore
//! let plan = RoutingPlan::spi_radio(22, 23, 25)?;
//! route_pins(&mut router, &plan);
//!
//! let mut front_end = OpAmp::new(amp_port);
//! front_end.init();
//!
//! let mut node = SensorNode::new(adc_port);
//! node.calibrate()?;
//! ```
//!
//! ## Sampling
//!
//! Once calibrated, read channels as often as needed. Every read re-flushes the converter's
//! SINC filter, so a read blocks for [`SETTLE_DISCARD_COUNT`](common::constants::SETTLE_DISCARD_COUNT)
//! conversion periods:
//!
//! ```ignore
//! let channel = Channel::new(1)?;
//! let millivolts_scaled = node.read_channel(channel)?;
//! ```
//!
//! Calibration state lives only in the [`SensorNode`] (or in a [`CalibrationSession`] value you
//! hold yourself); it is not persisted, and is superseded by re-running [`SensorNode::calibrate`]
//! whenever reference conditions may have drifted.
//!
//! ## The idle loop
//!
//! The top-level idle loop (status LED blinking on this hardware) stays in the application; the
//! library has no scheduler and never yields except by blocking on conversion-complete flags.
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod calibration;
mod frontend;
mod link;
mod node;
mod routing;
mod sampler;
mod settle;

pub use sdnode_common as common;

pub use calibration::{run_calibration, CalibrationError, CalibrationSession, CalibrationStage};
pub use common::{Channel, InvalidChannelError, Mapping, PinFunction};
pub use frontend::OpAmp;
pub use link::SpiLink;
pub use node::{SampleError, SensorNode};
pub use routing::{route_pins, RoutingError, RoutingPlan};
pub use sampler::read_channel;
pub use settle::settle_and_read;
