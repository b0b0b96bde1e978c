use super::*;

#[test]
fn shell_starts_open() {
    assert_eq!(ShellState::default(), ShellState::Open);
    assert!(!ShellState::Open.is_terminated());
}

#[test]
fn close_request_terminates_open_shell() {
    let state = ShellState::Open.on_event(ShellEvent::CloseRequested);
    assert_eq!(state, ShellState::Terminated);
    assert!(state.is_terminated());
}

#[test]
fn other_events_keep_shell_open() {
    let mut state = ShellState::Open;
    for event in [ShellEvent::Redraw, ShellEvent::Other, ShellEvent::Redraw] {
        state = state.on_event(event);
        assert_eq!(state, ShellState::Open);
    }
}

#[test]
fn terminated_is_final() {
    for event in [
        ShellEvent::CloseRequested,
        ShellEvent::Redraw,
        ShellEvent::Other,
    ] {
        assert_eq!(
            ShellState::Terminated.on_event(event),
            ShellState::Terminated
        );
    }
}

#[test]
fn window_events_map_to_shell_events() {
    use winit::event::WindowEvent;

    assert_eq!(
        ShellEvent::from(&WindowEvent::CloseRequested),
        ShellEvent::CloseRequested
    );
    assert_eq!(
        ShellEvent::from(&WindowEvent::RedrawRequested),
        ShellEvent::Redraw
    );
    assert_eq!(
        ShellEvent::from(&WindowEvent::Focused(true)),
        ShellEvent::Other
    );
    assert_eq!(
        ShellEvent::from(&WindowEvent::Resized(winit::dpi::PhysicalSize::new(10, 10))),
        ShellEvent::Other
    );
}
