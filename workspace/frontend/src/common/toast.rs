use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

/// An error notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(usize),
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_error(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let context = {
        let dispatcher = list.dispatcher();
        let add_toast = {
            let dispatcher = dispatcher.clone();
            let next_id = next_id.clone();
            Callback::from(move |message: String| {
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    *next_id += 1;
                    *next_id - 1
                };
                log::trace!("Showing toast {}: {}", id, message);

                dispatcher.dispatch(ToastAction::Show(Toast { id, message }));

                let dispatcher = dispatcher.clone();
                let duration = settings::get_settings().toast_duration_ms;
                Timeout::new(duration, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            })
        };
        let remove_toast =
            Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)));

        use_memo((), move |_| ToastContext {
            add_toast,
            remove_toast,
        })
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = context.remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class="alert alert-error shadow-lg">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize) -> Toast {
        Toast {
            id,
            message: format!("toast {id}"),
        }
    }

    #[test]
    fn show_appends_and_dismiss_removes_by_id() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Show(toast(0)))
            .reduce(ToastAction::Show(toast(1)))
            .reduce(ToastAction::Dismiss(0));

        assert_eq!(list.toasts, vec![toast(1)]);
    }

    #[test]
    fn dismissing_unknown_toast_is_a_no_op() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Show(toast(3)))
            .reduce(ToastAction::Dismiss(7));

        assert_eq!(list.toasts.len(), 1);
    }
}
