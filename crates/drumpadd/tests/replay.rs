use std::path::PathBuf;

use drumpad_driver::{DriverConfig, LifecycleState};
use drumpad_gamepad::{Axis, Button, ButtonSet, GamepadState};
use drumpadd::{load_capture, parse_config, Replay, ReplaySummary};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn replay(config: DriverConfig) -> (ReplaySummary, Vec<GamepadState>) {
    let frames = load_capture(&fixture("session.cap")).unwrap();
    assert_eq!(frames.len(), 7);

    let mut replay = Replay::new(config).unwrap();
    let mut states = Vec::new();
    let summary = replay.run_with(frames, |s| states.push(*s)).unwrap();
    assert_eq!(replay.device().state(), LifecycleState::Disconnected);
    (summary, states)
}

#[test]
fn session_capture_reports_decoded_states() {
    let (summary, states) = replay(DriverConfig::default());
    assert_eq!(
        summary,
        ReplaySummary {
            frames: 7,
            reports: 5,
            handshakes: 1
        }
    );

    assert!(states[0].buttons().is_empty());
    assert_eq!(states[0].axis(Axis::LeftTrigger), -32768);

    assert_eq!(states[1].buttons(), ButtonSet::new(&[Button::South]));

    assert_eq!(states[2].axis(Axis::LeftTrigger), 128);
    assert!(states[2].is_pressed(Button::LeftShoulder));

    assert_eq!(states[3].axis(Axis::LeftTrigger), -32768);
    assert!(!states[3].is_pressed(Button::LeftShoulder));

    assert_eq!(
        states[4].buttons(),
        ButtonSet::new(&[Button::Start, Button::RightShoulder])
    );
    assert_eq!(states[4].axis(Axis::RightTrigger), 32767);
}

#[test]
fn config_file_settings_reach_the_driver() {
    let config = parse_config("version: 1\nhandshake_delay_ms: 0\ntrace_reports: false\n").unwrap();
    let (summary, _) = replay(config);
    assert_eq!(summary.reports, 5);
}
