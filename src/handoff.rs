use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use crate::components::toast::{use_toasts, ToastHandle, ToastId};
use crate::config;
use crate::order::{build_order_url, open_in_new_context, HandoffCopy};

/// Per-control order handoff state: idle, or pending since a click.
///
/// Times are plain milliseconds so the machine can be driven without a browser.
#[derive(Clone, Debug, PartialEq)]
pub struct HandoffMachine {
    started_at: Option<i64>,
    delay_ms: u32,
}

/// What the delay timer should do when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Delay elapsed: clear the busy flag and open the tab.
    Open { elapsed_ms: i64 },
    /// Fired before the delay by this many ms; run again after them.
    Wait { remaining_ms: u32 },
    /// Nothing pending, the handoff was cancelled.
    Cancelled,
}

impl HandoffMachine {
    pub fn new(delay_ms: u32) -> Self {
        Self { started_at: None, delay_ms }
    }

    pub fn is_busy(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts a handoff. Returns false, and changes nothing, while one is in flight.
    pub fn begin(&mut self, now_ms: i64) -> bool {
        if self.is_busy() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Completes the handoff only once the full delay has elapsed since `begin`.
    pub fn settle(&mut self, now_ms: i64) -> Settle {
        let Some(started_at) = self.started_at else {
            return Settle::Cancelled;
        };
        let elapsed_ms = now_ms - started_at;
        let delay = i64::from(self.delay_ms);
        if elapsed_ms < delay {
            // A clock that stepped backwards still waits at most one full delay.
            let remaining_ms = (delay - elapsed_ms).min(delay) as u32;
            return Settle::Wait { remaining_ms };
        }
        self.started_at = None;
        Settle::Open { elapsed_ms }
    }

    pub fn cancel(&mut self) {
        self.started_at = None;
    }
}

struct InFlight {
    _timer: Timeout,
    toast: ToastId,
}

#[derive(Clone, PartialEq)]
pub struct OrderHandoff {
    pub busy: bool,
    pub start: Callback<MouseEvent>,
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Arms the delay timer. A timer that fires before the machine says the delay
/// has elapsed re-arms itself for the remainder.
fn schedule_settle(
    delay_ms: u32,
    machine: Rc<RefCell<HandoffMachine>>,
    busy: UseStateHandle<bool>,
    toasts: ToastHandle,
    url: String,
    copy: HandoffCopy,
    toast: ToastId,
) -> Timeout {
    Timeout::new(delay_ms, move || {
        let settle = machine.borrow_mut().settle(now_ms());
        match settle {
            Settle::Cancelled => {}
            Settle::Wait { remaining_ms } => {
                debug!("Handoff timer fired {}ms early, waiting", remaining_ms);
                // Runs from inside the current timer, so the new one is detached;
                // unmount still stops it through machine.cancel().
                schedule_settle(remaining_ms, machine.clone(), busy, toasts, url, copy, toast).forget();
            }
            Settle::Open { elapsed_ms } => {
                busy.set(false);
                match open_in_new_context(&url) {
                    Ok(()) => {
                        info!("Opened WhatsApp handoff after {}ms: {}", elapsed_ms, url);
                        toasts.succeed(toast, copy.success);
                    }
                    Err(e) => {
                        warn!("WhatsApp handoff failed: {}", e);
                        toasts.fail(toast, copy.error);
                    }
                }
            }
        }
    })
}

/// Wires an order control to the WhatsApp handoff.
///
/// The delay timer belongs to the calling component and is dropped with it,
/// so nothing fires after unmount.
#[hook]
pub fn use_order_handoff(plan_size: Option<AttrValue>) -> OrderHandoff {
    let toasts = use_toasts();
    let busy = use_state(|| false);
    let machine = use_mut_ref(|| HandoffMachine::new(config::HANDOFF_DELAY_MS));
    let in_flight: Rc<RefCell<Option<InFlight>>> = use_mut_ref(|| None);

    {
        let machine = machine.clone();
        let in_flight = in_flight.clone();
        let toasts = toasts.clone();
        use_unmount(move || {
            let was_busy = machine.borrow().is_busy();
            machine.borrow_mut().cancel();
            // Dropping the entry cancels its timer.
            if let Some(pending) = in_flight.borrow_mut().take() {
                if was_busy {
                    debug!("Order control unmounted, cancelling handoff");
                    toasts.dismiss(pending.toast);
                }
            }
        });
    }

    let start = {
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if !machine.borrow_mut().begin(now_ms()) {
                debug!("Handoff already in progress, ignoring click");
                return;
            }
            busy.set(true);

            let size = plan_size.as_deref();
            let copy = HandoffCopy::for_plan(size);
            let url = build_order_url(size);
            let toast = toasts.pending(copy.pending.clone());

            let timer = schedule_settle(
                config::HANDOFF_DELAY_MS,
                machine.clone(),
                busy.clone(),
                toasts.clone(),
                url,
                copy,
                toast,
            );
            // The previous, already fired timer (if any) is dropped here.
            *in_flight.borrow_mut() = Some(InFlight { _timer: timer, toast });
        })
    };

    OrderHandoff { busy: *busy, start }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_while_pending_is_ignored() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(0));

        assert!(!machine.begin(300));
        assert!(!machine.begin(999));
        // the ignored clicks did not restart the clock
        assert_eq!(machine.settle(1_000), Settle::Open { elapsed_ms: 1_000 });
    }

    #[test]
    fn opens_no_earlier_than_the_delay() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(5_000));
        assert_eq!(machine.settle(5_999), Settle::Wait { remaining_ms: 1 });
        assert!(machine.is_busy());
        assert_eq!(machine.settle(6_000), Settle::Open { elapsed_ms: 1_000 });
        assert!(!machine.is_busy());
    }

    #[test]
    fn early_timer_waits_for_the_remainder() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(0));
        assert_eq!(machine.settle(400), Settle::Wait { remaining_ms: 600 });
        assert_eq!(machine.settle(1_003), Settle::Open { elapsed_ms: 1_003 });
    }

    #[test]
    fn can_start_again_after_opening() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(0));
        assert!(matches!(machine.settle(1_000), Settle::Open { .. }));
        assert!(machine.begin(1_200));
        assert_eq!(machine.settle(2_199), Settle::Wait { remaining_ms: 1 });
    }

    #[test]
    fn cancelled_handoff_never_opens() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(0));
        machine.cancel();
        // a timer firing after teardown must see nothing to do
        assert_eq!(machine.settle(10_000), Settle::Cancelled);
        assert!(!machine.is_busy());
    }

    #[test]
    fn backwards_clock_waits_at_most_one_delay() {
        let mut machine = HandoffMachine::new(1000);
        assert!(machine.begin(10_000));
        assert_eq!(machine.settle(2_000), Settle::Wait { remaining_ms: 1000 });
    }

    #[test]
    fn idle_machine_settles_to_nothing() {
        let mut machine = HandoffMachine::new(1000);
        assert_eq!(machine.settle(i64::MAX), Settle::Cancelled);
    }
}
