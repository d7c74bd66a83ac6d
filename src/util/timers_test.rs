use super::*;

#[test]
fn liveness_clones_share_cancellation() {
    let alive = Liveness::default();
    let task_view = alive.clone();
    assert!(task_view.is_alive());
    alive.cancel();
    assert!(!task_view.is_alive());
}

#[cfg(not(feature = "csr"))]
#[test]
fn sleep_resolves_immediately_off_browser() {
    futures::executor::block_on(sleep_ms(10_000));
}

#[cfg(not(feature = "csr"))]
#[test]
fn after_ms_drops_callback_off_browser() {
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = std::rc::Rc::clone(&fired);
    after_ms(0, move || flag.set(true));
    assert!(!fired.get());
}
