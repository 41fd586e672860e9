use dioxus::prelude::*;

use crate::vm::{CompletionViewModel, ShellVm};

#[component]
pub fn CompletionPanel(shell: Signal<ShellVm>, on_restart: EventHandler<()>) -> Element {
    let summary = shell.read().session().map(CompletionViewModel::project);
    let Some(summary) = summary else {
        return rsx! {};
    };

    rsx! {
        div { class: "complete",
            h2 { class: "complete__title", "Congratulations!" }
            p { class: "complete__subtitle", "You finished the session." }
            div { class: "complete__stats",
                div { class: "stat",
                    span { class: "stat__label", "Correct" }
                    span { class: "stat__value", "{summary.correct_label}" }
                }
                div { class: "stat",
                    span { class: "stat__label", "Hints Used" }
                    span { class: "stat__value", "{summary.hints_label}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "speller-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "New Words"
            }
        }
    }
}
