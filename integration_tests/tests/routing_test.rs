use integration_tests::prelude::*;

#[test]
fn test_routing_pass_is_lock_bracketed() {
    let plan = RoutingPlan::spi_radio(22, 23, 25).unwrap();
    let mut router = SimRouter::new();

    route_pins(&mut router, &plan);

    let expected = [
        RouterOp::Unlock,
        RouterOp::Map(Mapping::new(22, PinFunction::SpiDataIn)),
        RouterOp::Map(Mapping::new(23, PinFunction::SpiDataOut)),
        RouterOp::Map(Mapping::new(25, PinFunction::SpiClock)),
        RouterOp::Lock,
    ];
    assert_eq!(&expected, router.ops());
}

#[test]
fn test_clock_pin_is_a_single_assignment() {
    // The clock pin must not be expressible as two conflicting entries; the single SpiClock
    // function covers both the output and input register writes on the target
    let mut plan = RoutingPlan::new();
    plan.assign(25, PinFunction::SpiClock).unwrap();

    assert_eq!(
        Err(RoutingError::PinConflict { pin: 25 }),
        plan.assign(25, PinFunction::SpiDataIn)
    );
    assert_eq!(
        Err(RoutingError::FunctionConflict {
            function: PinFunction::SpiClock
        }),
        plan.assign(26, PinFunction::SpiClock)
    );
}

#[test]
fn test_empty_plan_still_brackets() {
    let mut router = SimRouter::new();
    route_pins(&mut router, &RoutingPlan::new());

    assert_eq!(&[RouterOp::Unlock, RouterOp::Lock], router.ops());
}
