use mode_gate::{Mode, ModeGate, StatusFlags};

#[test]
fn init_reads_back_the_seed() {
    let mut gate = ModeGate::new();
    gate.init(250);

    assert_eq!(gate.filtered_value(), 250);
    assert_eq!(gate.mode(), Mode::Idle);
    assert!(gate.status().contains(StatusFlags::INITIALIZED));
    assert!(!gate.status().contains(StatusFlags::FILTER_STABLE));
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
}

#[test]
fn process_before_init_changes_nothing() {
    let mut gate = ModeGate::new();

    for raw in [900, -500, 0, 32767] {
        gate.process(raw);
        assert_eq!(gate.mode(), Mode::Idle);
        assert_eq!(gate.status(), StatusFlags::empty());
        assert_eq!(gate.filtered_value(), 0);
    }
}

#[test]
fn seed_selects_the_starting_mode() {
    let mut gate = ModeGate::new();

    gate.init(250);
    assert_eq!(gate.mode(), Mode::Idle);

    gate.init(500);
    assert_eq!(gate.mode(), Mode::Active);
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    gate.init(900);
    assert_eq!(gate.mode(), Mode::Alert);
    assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
}

#[test]
fn reinit_clears_previous_state() {
    let mut gate = ModeGate::new();
    gate.init(900);
    gate.process(900);
    assert!(gate.status().contains(StatusFlags::FILTER_STABLE));

    gate.init(250);
    assert_eq!(gate.mode(), Mode::Idle);
    assert_eq!(gate.filtered_value(), 250);
    assert!(!gate.status().contains(StatusFlags::FILTER_STABLE));
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
}

#[test]
fn filter_becomes_stable_on_first_process() {
    let mut gate = ModeGate::new();
    gate.init(250);

    gate.process(260);
    assert!(gate.status().contains(StatusFlags::FILTER_STABLE));
    // First update is the cold pass-through.
    assert_eq!(gate.filtered_value(), 260);
}

#[test]
fn constant_input_converges_and_settles() {
    let mut gate = ModeGate::new();
    gate.init(0);

    for _ in 0..200 {
        gate.process(600);
    }
    assert_eq!(gate.filtered_value(), 600);
    assert_eq!(gate.mode(), Mode::Active);

    gate.process(600);
    assert_eq!(gate.filtered_value(), 600);
    assert_eq!(gate.mode(), Mode::Active);
}

// The worked scenario: thresholds {300, 850, 830}, alpha = 3277/32768.
// Filtered values are exact fixed-point results of the Q15 recurrence.
#[test]
fn alert_dwell_and_exit_scenario() {
    let mut gate = ModeGate::new();
    gate.init(250);
    assert_eq!(gate.mode(), Mode::Idle);

    // Cold filter passes 900 through; Alert entered, latch set.
    gate.process(900);
    assert_eq!(gate.filtered_value(), 900);
    assert_eq!(gate.mode(), Mode::Alert);
    assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    // Steady input holds the average and the dwell.
    gate.process(900);
    assert_eq!(gate.filtered_value(), 900);
    assert_eq!(gate.mode(), Mode::Alert);
    assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    // Input drops to 500, but smoothing lag keeps the average inside the
    // dead band: still Alert, latch still up.
    gate.process(500);
    assert_eq!(gate.filtered_value(), 860);
    assert_eq!(gate.mode(), Mode::Alert);
    assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    // One more cycle pulls the average under ALERT_LOW: exit to Active,
    // latch released on the same cycle.
    gate.process(500);
    assert_eq!(gate.filtered_value(), 824);
    assert_eq!(gate.mode(), Mode::Active);
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    // Latch stays down on later non-Alert cycles.
    gate.process(500);
    assert_eq!(gate.mode(), Mode::Active);
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
}

#[test]
fn latch_reads_as_crossed_this_cycle_outside_alert() {
    let mut gate = ModeGate::new();
    gate.init(0);

    // Never crossed while climbing inside the Active band.
    gate.process(400);
    assert_eq!(gate.mode(), Mode::Active);
    assert!(!gate.status().contains(StatusFlags::THRESHOLD_CROSSED));

    // The same call that enters Alert raises the latch.
    gate.process(32767);
    assert_eq!(gate.mode(), Mode::Alert);
    assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
}

#[test]
fn latch_stays_up_for_the_whole_alert_dwell() {
    let mut gate = ModeGate::new();
    gate.init(900);

    // Constant 900 keeps the gate in Alert indefinitely.
    for _ in 0..20 {
        gate.process(900);
        assert_eq!(gate.mode(), Mode::Alert);
        assert!(gate.status().contains(StatusFlags::THRESHOLD_CROSSED));
    }
}

#[test]
fn two_gates_fed_the_same_sequence_are_identical() {
    let samples = [250, 900, 900, 500, 500, -300, 0, 850, 830, 829, 299, 300];

    let mut a = ModeGate::new();
    let mut b = ModeGate::new();
    a.init(250);
    b.init(250);

    for &raw in &samples {
        a.process(raw);
        b.process(raw);
        assert_eq!(a.mode(), b.mode());
        assert_eq!(a.status(), b.status());
        assert_eq!(a.filtered_value(), b.filtered_value());
    }
}
