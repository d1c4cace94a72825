//! Demonstrates a full polling cycle with mode-gate
//!
//! A mock ramp sensor feeds the gate once per cycle; a mock actuator is
//! driven from the resulting mode (Idle → Off, Active → On, Alert → Off
//! with a Pulse side action while the crossing is latched).

use mode_gate::{Mode, ModeGate, StatusFlags};

/// Mock sensor: ramps from 250 in steps of 10 and wraps back to 150 once
/// past 1000. Reads −1 while uninitialized.
struct RampSensor {
    initialized: bool,
    value: i16,
}

impl RampSensor {
    fn new() -> Self {
        Self {
            initialized: false,
            value: 250,
        }
    }

    fn init(&mut self) -> bool {
        self.initialized = true;
        true
    }

    fn read_value(&mut self) -> i16 {
        if !self.initialized {
            return -1;
        }

        self.value += 10;
        if self.value > 1000 {
            self.value = 150;
        }

        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ActuatorState {
    Off,
    On,
    Pulse,
    Error,
}

/// Mock actuator: refuses commands until initialized.
struct Actuator {
    initialized: bool,
    state: ActuatorState,
}

impl Actuator {
    fn new() -> Self {
        Self {
            initialized: false,
            state: ActuatorState::Off,
        }
    }

    fn init(&mut self) -> bool {
        self.initialized = true;
        self.set_state(ActuatorState::Off)
    }

    fn set_state(&mut self, state: ActuatorState) -> bool {
        if !self.initialized {
            return false;
        }
        self.state = state;
        true
    }

    fn state(&self) -> ActuatorState {
        if !self.initialized {
            return ActuatorState::Error;
        }
        self.state
    }
}

fn drive_actuator(gate: &ModeGate, actuator: &mut Actuator) {
    match gate.mode() {
        Mode::Idle => {
            actuator.set_state(ActuatorState::Off);
        }
        Mode::Active => {
            actuator.set_state(ActuatorState::On);
        }
        Mode::Alert => {
            // Alert keeps the actuator off; the latched crossing gets a
            // one-shot pulse action on top.
            if gate.status().contains(StatusFlags::THRESHOLD_CROSSED) {
                actuator.set_state(ActuatorState::Pulse);
            } else {
                actuator.set_state(ActuatorState::Off);
            }
        }
    }
}

fn main() {
    println!("=== mode-gate control loop demo ===\n");

    let mut sensor = RampSensor::new();
    let mut actuator = Actuator::new();

    assert!(sensor.init(), "sensor failed to initialize");
    assert!(actuator.init(), "actuator failed to initialize");

    let mut gate = ModeGate::new();
    gate.init(sensor.read_value());

    println!("cycle |  raw | filtered | mode   | crossed | actuator");
    println!("------+------+----------+--------+---------+---------");

    for cycle in 0..120 {
        let raw = sensor.read_value();
        gate.process(raw);
        drive_actuator(&gate, &mut actuator);

        let crossed = gate.status().contains(StatusFlags::THRESHOLD_CROSSED);
        println!(
            "{:5} | {:4} | {:8} | {:<6} | {:<7} | {:?}",
            cycle,
            raw,
            gate.filtered_value(),
            match gate.mode() {
                Mode::Idle => "Idle",
                Mode::Active => "Active",
                Mode::Alert => "Alert",
            },
            crossed,
            actuator.state(),
        );
    }
}
