pub mod sim_port;

pub mod prelude {
    pub use super::sim_port::{
        AdcOp, OpAmpOp, RouterOp, SimAdcPort, SimOpAmpPort, SimRouter, SimSpiPort, SpiOp,
    };
    pub use sdnode_common::constants::SETTLE_DISCARD_COUNT;
    pub use sdnode_common::{Channel, Mapping, PinFunction};
    pub use sdnode_node::{
        read_channel, route_pins, run_calibration, settle_and_read, CalibrationError,
        CalibrationSession, OpAmp, RoutingError, RoutingPlan, SampleError, SensorNode, SpiLink,
    };
}
