use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::deck::{DeckApi, DeckLibrary};
use super::*;
use crate::config::CascadeConfig;
use crate::constants::READY_SIGNAL;
use crate::engine::Widget;
use crate::environment::SimEnv;
use crate::runtime::Runtime;

type Calls = Rc<RefCell<Vec<&'static str>>>;

#[derive(Clone, Default)]
struct Script {
    go_to_next: Option<Result<(), CapabilityError>>,
    next: Option<Result<(), CapabilityError>>,
    next_control: Option<bool>,
    restart_control: bool,
}

struct FakeView {
    script: Script,
    calls: Calls,
}

impl TimelineView for FakeView {
    fn go_to_next(&mut self) -> Result<(), CapabilityError> {
        self.calls.borrow_mut().push("goToNext");
        self.script.go_to_next.clone().unwrap_or(Err(CapabilityError::Missing))
    }

    fn next(&mut self) -> Result<(), CapabilityError> {
        self.calls.borrow_mut().push("next");
        self.script.next.clone().unwrap_or(Err(CapabilityError::Missing))
    }

    fn find_control(&self, role: ControlRole) -> Option<Control> {
        let visible = match role {
            ControlRole::Next => self.script.next_control?,
            ControlRole::Restart if self.script.restart_control => true,
            ControlRole::Restart => return None,
        };
        Some(Control { role, selector: role.selectors()[0], visible })
    }

    fn activate(&mut self, control: &Control) {
        let name = match control.role {
            ControlRole::Next => "click next",
            ControlRole::Restart => "click restart",
        };
        self.calls.borrow_mut().push(name);
    }
}

struct FakeLibrary {
    ready: bool,
    script: Script,
    calls: Calls,
}

impl TimelineLibrary for FakeLibrary {
    type View = FakeView;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn construct(&mut self, _options: &TimelineOptions) -> FakeView {
        self.calls.borrow_mut().push("construct");
        FakeView { script: self.script.clone(), calls: self.calls.clone() }
    }
}

fn cascade(script: Script, config: CascadeConfig) -> (FallbackCascade<FakeLibrary>, Calls) {
    let calls = Calls::default();
    let library = FakeLibrary { ready: true, script, calls: calls.clone() };
    (FallbackCascade::new(library, TimelineOptions::default(), config), calls)
}

fn view(script: Script) -> (FakeView, Calls) {
    let calls = Calls::default();
    (FakeView { script, calls: calls.clone() }, calls)
}

#[test]
fn direct_capability_wins() {
    let (mut v, calls) = view(Script {
        go_to_next: Some(Ok(())),
        next: Some(Ok(())),
        next_control: Some(true),
        restart_control: true,
    });
    assert_eq!(run_steps(&mut v, true), Some(Step::GoToNext));
    assert_eq!(*calls.borrow(), vec!["goToNext"]);
}

#[test]
fn alternative_capability_is_tried_when_first_is_missing() {
    let (mut v, calls) = view(Script { next: Some(Ok(())), ..Default::default() });
    assert_eq!(run_steps(&mut v, true), Some(Step::Next));
    assert_eq!(*calls.borrow(), vec!["goToNext", "next"]);
}

#[test]
fn only_next_control_gets_clicked() {
    let (mut v, calls) = view(Script { next_control: Some(true), restart_control: true, ..Default::default() });
    assert_eq!(run_steps(&mut v, true), Some(Step::NextControl));
    assert_eq!(calls.borrow().last(), Some(&"click next"));
}

#[test]
fn hidden_next_control_falls_back_to_restart() {
    let (mut v, calls) = view(Script { next_control: Some(false), restart_control: true, ..Default::default() });
    assert_eq!(run_steps(&mut v, true), Some(Step::RestartControl));
    assert_eq!(calls.borrow().last(), Some(&"click restart"));
}

#[test]
fn nothing_available_means_reload() {
    let (mut v, _) = view(Script::default());
    assert_eq!(run_steps(&mut v, true), Some(Step::Reload));
    assert_eq!(run_steps(&mut v, false), None);
}

#[test]
fn raised_capability_skips_to_controls() {
    let (mut v, calls) = view(Script {
        go_to_next: Some(Err(CapabilityError::Raised("boom".into()))),
        next: Some(Ok(())),
        next_control: Some(true),
        ..Default::default()
    });
    assert_eq!(run_steps(&mut v, true), Some(Step::NextControl));
    assert_eq!(*calls.borrow(), vec!["goToNext", "click next"]);
}

#[test]
fn best_effort_folds_errors() {
    assert_eq!(best_effort(Step::Next, || Ok(())), ProbeOutcome::Applied);
    assert_eq!(best_effort(Step::Next, || Err(CapabilityError::Missing)), ProbeOutcome::Unavailable);
    assert_eq!(
        best_effort(Step::Next, || Err(CapabilityError::Raised("x".into()))),
        ProbeOutcome::Faulted
    );
}

#[test]
fn waits_for_readiness_before_building() {
    let (mut cascade, calls) = cascade(Script::default(), CascadeConfig::kiosk());
    cascade.library_mut().ready = false;
    let mut rt = Runtime::new();

    rt.mount(&mut [&mut cascade]);
    assert_eq!(cascade.state(), CascadeState::WaitingForReadiness);
    assert_eq!(rt.env().pending_timers(), 0);
    assert!(calls.borrow().is_empty());

    // a premature signal keeps the cascade waiting
    rt.emit(READY_SIGNAL, &mut [&mut cascade]);
    assert_eq!(cascade.state(), CascadeState::WaitingForReadiness);

    cascade.library_mut().ready = true;
    rt.emit(READY_SIGNAL, &mut [&mut cascade]);
    assert_eq!(cascade.state(), CascadeState::Active);
    assert_eq!(*calls.borrow(), vec!["construct"]);
    assert_eq!(rt.env().listener_count(), 0);
    assert_eq!(rt.env().pending_timers(), 2);
}

#[test]
fn ready_library_activates_on_mount() {
    let (mut cascade, _) = cascade(Script::default(), CascadeConfig::relaxed());
    let mut env = SimEnv::new();
    cascade.mount(&mut env);
    assert_eq!(cascade.state(), CascadeState::Active);
    // relaxed variant has no watchdog
    assert_eq!(env.pending_timers(), 1);
    assert!(cascade.view().is_some());
}

#[test]
fn tick_without_any_way_forward_issues_reload() {
    let (mut cascade, _) = cascade(Script::default(), CascadeConfig::kiosk());
    let mut env = SimEnv::new();
    cascade.mount(&mut env);

    assert_eq!(cascade.tick(&mut env), Some(Step::Reload));
    assert_eq!(cascade.state(), CascadeState::ReloadIssued);
    assert!(env.take_reload());
    assert_eq!(env.pending_timers(), 0);
    assert_eq!(cascade.tick(&mut env), None);
}

#[test]
fn watchdog_reloads_once_at_its_deadline() {
    let script = Script { next_control: Some(true), ..Default::default() };
    let (mut cascade, calls) = cascade(script, CascadeConfig::kiosk());
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut cascade]);

    rt.advance(Duration::from_secs(109), &mut [&mut cascade]);
    assert_eq!(rt.reloads(), 0);
    assert_eq!(calls.borrow().iter().filter(|c| **c == "click next").count(), 10);

    rt.advance(Duration::from_secs(1), &mut [&mut cascade]);
    assert_eq!(rt.reloads(), 1);
    assert_eq!(calls.borrow().iter().filter(|c| **c == "click next").count(), 11);

    // the reloaded page starts a fresh cascade and a fresh watchdog
    assert_eq!(cascade.state(), CascadeState::Active);
    rt.advance(Duration::from_secs(109), &mut [&mut cascade]);
    assert_eq!(rt.reloads(), 1);
}

#[test]
fn unmount_while_waiting_only_drops_the_listener() {
    let (mut cascade, _) = cascade(Script::default(), CascadeConfig::kiosk());
    cascade.library_mut().ready = false;
    let mut env = SimEnv::new();
    cascade.mount(&mut env);
    assert_eq!(env.listener_count(), 1);

    cascade.unmount(&mut env);
    assert_eq!(env.listener_count(), 0);
    assert_eq!(cascade.state(), CascadeState::Uninitialized);
}

#[test]
fn unmount_while_active_cancels_tick_and_watchdog() {
    let (mut cascade, calls) = cascade(Script { restart_control: true, ..Default::default() }, CascadeConfig::kiosk());
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut cascade]);
    rt.advance(Duration::from_secs(15), &mut [&mut cascade]);

    rt.unmount(&mut [&mut cascade]);
    assert_eq!(rt.env().pending_timers(), 0);

    let before = calls.borrow().len();
    rt.advance(Duration::from_secs(600), &mut [&mut cascade]);
    assert_eq!(calls.borrow().len(), before);
    assert_eq!(rt.reloads(), 0);
}

#[test]
fn deck_walks_forward_then_restarts() {
    let mut library = DeckLibrary::new(3, DeckApi::None);
    library.load();
    let mut cascade = FallbackCascade::new(library, TimelineOptions::default(), CascadeConfig::relaxed());
    let mut env = SimEnv::new();
    cascade.mount(&mut env);

    let steps: Vec<_> = (0..4).map(|_| cascade.tick(&mut env)).collect();
    assert_eq!(
        steps,
        vec![
            Some(Step::NextControl),
            Some(Step::NextControl),
            Some(Step::RestartControl),
            Some(Step::NextControl),
        ]
    );
    assert_eq!(cascade.view().map(|v| v.position()), Some(1));
}

#[test]
fn faulty_deck_still_advances_through_controls() {
    let mut library = DeckLibrary::new(4, DeckApi::Faulty);
    library.load();
    let mut cascade = FallbackCascade::new(library, TimelineOptions::default(), CascadeConfig::kiosk());
    let mut env = SimEnv::new();
    cascade.mount(&mut env);

    assert_eq!(cascade.tick(&mut env), Some(Step::NextControl));
    assert_eq!(cascade.library().built(), 1);
}
