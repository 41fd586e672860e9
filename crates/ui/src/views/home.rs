use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{CompletionPanel, QuizPanel};
use crate::vm::{ShellStatus, ShellVm};

#[component]
pub fn HomeView() -> Element {
    rsx! {
        ShellPanel { initial: ShellVm::new() }
    }
}

/// Owns the shell state machine and the word fetch.
#[component]
pub fn ShellPanel(initial: ShellVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_signal(move || initial);

    let start = use_callback(move |()| {
        let ticket = shell.write().begin_fetch();
        let Some(ticket) = ticket else {
            return;
        };
        let source = ctx.word_source();
        let count = ctx.session_size();
        spawn(async move {
            let mut shell = shell;
            let result = source.fetch_session(count).await;
            shell.write().finish_fetch(ticket, result);
        });
    });
    let quit = use_callback(move |()| {
        shell.write().cancel();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShellTestHandles>() {
                handles.register(start);
            }
        }
    }

    let status = shell.read().status();

    rsx! {
        div { class: "page speller-page",
            match status {
                ShellStatus::Idle => rsx! {
                    div { class: "welcome",
                        h2 { class: "welcome__title", "Word Practice" }
                        p { class: "welcome__subtitle",
                            "Learn to spell English words from the A1, A2, B1 and B2 levels."
                        }
                        button {
                            class: "btn btn-primary",
                            id: "speller-start",
                            r#type: "button",
                            onclick: move |_| start.call(()),
                            "Start"
                        }
                    }
                },
                ShellStatus::Loading => rsx! {
                    div { class: "loading",
                        p { "Picking words..." }
                    }
                },
                ShellStatus::Playing => rsx! {
                    QuizPanel { shell, on_quit: quit }
                },
                ShellStatus::Complete => rsx! {
                    CompletionPanel { shell, on_restart: start }
                },
                ShellStatus::Error(err) => rsx! {
                    div { class: "error",
                        h3 { "Something went wrong" }
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| start.call(()),
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

/// Lets render tests trigger the start action without a browser event.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    start: std::rc::Rc<std::cell::RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    pub(crate) fn register(&self, start: Callback<()>) {
        *self.start.borrow_mut() = Some(start);
    }

    pub(crate) fn start(&self) -> Callback<()> {
        (*self.start.borrow()).expect("shell start registered")
    }
}
