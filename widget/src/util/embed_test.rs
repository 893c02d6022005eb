use super::*;

#[test]
fn post_to_host_without_browser_delivers_nothing() {
    assert!(!post_to_host(EmbedEvent::Close));
    assert!(!post_to_host(EmbedEvent::Resize { height: 10.0 }));
}

#[test]
fn notify_host_skips_absent_events() {
    assert!(!notify_host(None));
}

#[test]
fn notify_host_forwards_shell_transitions() {
    let mut shell = crate::state::shell::WidgetShell::new();
    shell.open();

    let collapse = shell.toggle_minimize();
    assert_eq!(collapse, Some(EmbedEvent::Collapse));
    assert!(!notify_host(collapse));

    let close = shell.close();
    assert_eq!(close, Some(EmbedEvent::Close));
    assert!(!notify_host(close));

    assert_eq!(shell.close(), None);
}
