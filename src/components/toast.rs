use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Pending,
    Success,
    Error,
}

impl ToastKind {
    /// Resolved toasts close on their own; pending ones wait for their operation.
    pub fn lingers(self) -> Option<u32> {
        match self {
            ToastKind::Pending => None,
            ToastKind::Success | ToastKind::Error => Some(config::TOAST_LINGER_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn show(&mut self, id: ToastId, kind: ToastKind, message: String) {
        self.toasts.push(Toast { id, kind, message });
    }

    /// Returns false when the toast is already gone.
    pub fn resolve(&mut self, id: ToastId, kind: ToastKind, message: String) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message;
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
impl ToastList {
    fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn len(&self) -> usize {
        self.toasts.len()
    }
}

pub enum ToastAction {
    Show(ToastId, ToastKind, String),
    Resolve(ToastId, ToastKind, String),
    Dismiss(ToastId),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show(id, kind, message) => next.show(id, kind, message),
            ToastAction::Resolve(id, kind, message) => {
                next.resolve(id, kind, message);
            }
            ToastAction::Dismiss(id) => {
                next.dismiss(id);
            }
        }
        next.into()
    }
}

/// Handle given to anything that wants to report progress through a toast.
/// A handle created outside a `Toaster` is detached and ignores every call.
#[derive(Clone, Default)]
pub struct ToastHandle {
    next_id: Rc<RefCell<u64>>,
    dispatcher: Option<UseReducerDispatcher<ToastList>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl ToastHandle {
    fn dispatch(&self, action: ToastAction) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(action),
            None => debug!("toast dropped, no Toaster mounted"),
        }
    }

    pub fn pending(&self, message: impl Into<String>) -> ToastId {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            ToastId(*next_id)
        };
        self.dispatch(ToastAction::Show(id, ToastKind::Pending, message.into()));
        id
    }

    pub fn succeed(&self, id: ToastId, message: impl Into<String>) {
        self.settle(id, ToastKind::Success, message.into());
    }

    pub fn fail(&self, id: ToastId, message: impl Into<String>) {
        self.settle(id, ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: ToastId) {
        self.dispatch(ToastAction::Dismiss(id));
    }

    fn settle(&self, id: ToastId, kind: ToastKind, message: String) {
        self.dispatch(ToastAction::Resolve(id, kind, message));
        if let Some(linger_ms) = kind.lingers() {
            let handle = self.clone();
            // Toaster lives as long as the page, so the linger timer is never cancelled.
            Timeout::new(linger_ms, move || handle.dismiss(id)).forget();
        }
    }
}

#[hook]
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u64);

    let handle = ToastHandle {
        next_id,
        dispatcher: Some(toasts.dispatcher()),
    };

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            { for props.children.iter() }
            <div class={classes!("toaster", toasts.is_empty().then(|| "empty"))} role="status" aria-live="polite">
                { for toasts.iter().map(|toast| {
                    let id = toast.id;
                    let onclick = {
                        let handle = handle.clone();
                        Callback::from(move |_: MouseEvent| handle.dismiss(id))
                    };
                    let (icon, kind_class) = match toast.kind {
                        ToastKind::Pending => (Icon::Loader, "toast-pending"),
                        ToastKind::Success => (Icon::CheckCircle, "toast-success"),
                        ToastKind::Error => (Icon::CircleAlert, "toast-error"),
                    };
                    html! {
                        <div key={id.0} class={classes!("toast", kind_class)} {onclick}>
                            <IconView icon={icon} class="toast-icon" />
                            <span>{&toast.message}</span>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    top: 1rem;
                    right: 1rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .toaster.empty { display: none; }
                .toast {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    background: white;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 14px 18px;
                    font-family: 'Nunito Sans', sans-serif;
                    box-shadow: 0 10px 30px -5px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    animation: toastIn 0.2s ease-out;
                }
                .toast-icon { width: 18px; height: 18px; }
                .toast-pending .toast-icon { color: #64748b; }
                .toast-success .toast-icon { color: #25D366; }
                .toast-error .toast-icon { color: #dc2626; }
                @keyframes toastIn {
                    from { transform: translateY(-8px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_resolves_to_success() {
        let mut list = ToastList::default();
        list.show(ToastId(1), ToastKind::Pending, "Connecting to WhatsApp...".into());
        assert!(list.resolve(ToastId(1), ToastKind::Success, "Opening WhatsApp chat!".into()));

        let toast = list.get(ToastId(1)).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Opening WhatsApp chat!");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut list = ToastList::default();
        list.show(ToastId(1), ToastKind::Pending, "a".into());
        assert!(!list.resolve(ToastId(7), ToastKind::Error, "b".into()));
        assert!(!list.dismiss(ToastId(7)));
        assert_eq!(list.get(ToastId(1)).unwrap().kind, ToastKind::Pending);
    }

    #[test]
    fn dismiss_keeps_order_of_the_rest() {
        let mut list = ToastList::default();
        for i in 1..=3 {
            list.show(ToastId(i), ToastKind::Pending, format!("toast {}", i));
        }
        assert!(list.dismiss(ToastId(2)));
        let ids: Vec<_> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![ToastId(1), ToastId(3)]);

        assert!(list.dismiss(ToastId(1)));
        assert!(list.dismiss(ToastId(3)));
        assert!(list.is_empty());
    }

    #[test]
    fn reducer_applies_actions() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Show(ToastId(1), ToastKind::Pending, "p".into()));
        let list = list.reduce(ToastAction::Resolve(ToastId(1), ToastKind::Error, "e".into()));
        assert_eq!(list.get(ToastId(1)).unwrap().kind, ToastKind::Error);
        let list = list.reduce(ToastAction::Dismiss(ToastId(1)));
        assert!(list.is_empty());
    }

    #[test]
    fn show_resolve_dismiss_by_id() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Show(ToastId(1), ToastKind::Pending, "Processing 9kg order...".into()));
        let list = list.reduce(ToastAction::Show(ToastId(2), ToastKind::Pending, "Connecting to WhatsApp...".into()));
        let list = list.reduce(ToastAction::Resolve(ToastId(1), ToastKind::Success, "Opening WhatsApp for 9kg order!".into()));

        // the other pending toast is untouched by its neighbour resolving
        assert_eq!(list.get(ToastId(2)).unwrap().kind, ToastKind::Pending);
        assert_eq!(list.get(ToastId(1)).unwrap().message, "Opening WhatsApp for 9kg order!");

        let list = list.reduce(ToastAction::Dismiss(ToastId(1)));
        let ids: Vec<_> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![ToastId(2)]);
    }

    #[test]
    fn only_resolved_toasts_linger() {
        assert_eq!(ToastKind::Pending.lingers(), None);
        assert_eq!(ToastKind::Success.lingers(), Some(config::TOAST_LINGER_MS));
        assert_eq!(ToastKind::Error.lingers(), Some(4000));
    }

    #[test]
    fn detached_handle_still_hands_out_ids() {
        let handle = ToastHandle::default();
        let first = handle.pending("one");
        let second = handle.pending("two");
        assert!(second > first);
        // no Toaster: these are no-ops rather than panics
        handle.dismiss(first);
    }
}
