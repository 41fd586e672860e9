use std::time::Duration;

use dioxus::prelude::*;
use speller_core::SubmitOutcome;

use crate::vm::{Feedback, PromptMode, QuizViewModel, ShellVm};

/// How long a solved word stays on screen before moving on.
const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn QuizPanel(shell: Signal<ShellVm>, on_quit: EventHandler<()>) -> Element {
    let mut shell = shell;
    let mut mode = use_signal(PromptMode::default);

    let submit = use_callback(move |()| {
        let solved = {
            let mut guard = shell.write();
            let ticket = guard.current_ticket();
            let Some(session) = guard.session_mut() else {
                return;
            };
            let index = session.current_index();
            (session.submit_current() == SubmitOutcome::Correct).then_some((ticket, index))
        };
        if let Some((ticket, index)) = solved {
            spawn(async move {
                let mut shell = shell;
                tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
                shell.write().advance_after_success(ticket, index);
            });
        }
    });

    let vm = shell
        .read()
        .session()
        .and_then(|session| QuizViewModel::project(session, mode()));
    let Some(vm) = vm else {
        return rsx! {};
    };

    let input_class = match (vm.feedback, vm.is_overflow) {
        (Feedback::Correct, _) => "quiz-input quiz-input--correct",
        (Feedback::Incorrect, _) => "quiz-input quiz-input--incorrect",
        (Feedback::None, true) => "quiz-input quiz-input--overflow",
        (Feedback::None, false) => "quiz-input",
    };
    let counter_class = if vm.is_overflow {
        "quiz-counter quiz-counter--overflow"
    } else {
        "quiz-counter"
    };
    let dot_classes: Vec<&'static str> = vm
        .hint_dots
        .iter()
        .map(|revealed| if *revealed { "hint-dot hint-dot--on" } else { "hint-dot" })
        .collect();
    let submit_label = if vm.feedback == Feedback::Correct {
        "Correct!"
    } else {
        "Check"
    };
    let current_mode = mode();

    rsx! {
        div { class: "quiz",
            div { class: "quiz-progress",
                span { "{vm.progress_label}" }
                span { "{vm.score_label}" }
            }
            div { class: "quiz-progress-bar",
                div {
                    class: "quiz-progress-bar__fill",
                    style: "width: {vm.progress_percent}%",
                }
            }
            div { class: "quiz-card",
                div { class: "quiz-modes",
                    for option in PromptMode::ALL {
                        button {
                            key: "{option.label()}",
                            class: if option == current_mode { "quiz-mode quiz-mode--active" } else { "quiz-mode" },
                            r#type: "button",
                            onclick: move |_| mode.set(option),
                            "{option.label()}"
                        }
                    }
                }
                div { class: "quiz-prompt",
                    if let Some(source) = vm.source_text.as_deref() {
                        h2 { class: "quiz-prompt__source", "{source}" }
                    }
                    if let Some(definition) = vm.definition.as_deref() {
                        p { class: "quiz-prompt__definition", "\"{definition}\"" }
                    }
                    p { class: "quiz-prompt__hint", "Type the English word" }
                }
                form {
                    class: "quiz-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    input {
                        class: "{input_class}",
                        id: "quiz-input",
                        r#type: "text",
                        value: "{vm.input}",
                        placeholder: "......",
                        autocomplete: "off",
                        spellcheck: "false",
                        disabled: !vm.can_submit,
                        oninput: move |evt: FormEvent| {
                            if let Some(session) = shell.write().session_mut() {
                                session.set_input(evt.value());
                            }
                        },
                    }
                    if let Some(remaining) = vm.remaining_label.as_deref() {
                        div { class: "{counter_class}", "{remaining}" }
                    }
                    div { class: "hint-dots",
                        for (idx, dot_class) in dot_classes.into_iter().enumerate() {
                            span { key: "{idx}", class: "{dot_class}" }
                        }
                    }
                    div { class: "quiz-actions",
                        button {
                            class: "btn btn-hint",
                            id: "quiz-hint",
                            r#type: "button",
                            title: "Hint",
                            disabled: !vm.can_hint,
                            onclick: move |_| {
                                if let Some(session) = shell.write().session_mut() {
                                    session.request_hint();
                                }
                            },
                            "Hint"
                        }
                        button {
                            class: "btn btn-primary",
                            id: "quiz-submit",
                            r#type: "submit",
                            disabled: !vm.can_submit,
                            "{submit_label}"
                        }
                    }
                }
                if vm.feedback == Feedback::Incorrect {
                    p { class: "quiz-feedback quiz-feedback--incorrect",
                        "Try again or use a hint!"
                    }
                }
            }
            div { class: "quiz-footer",
                button {
                    class: "btn btn-ghost",
                    id: "quiz-skip",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(session) = shell.write().session_mut() {
                            session.advance();
                        }
                    },
                    "Next Word"
                }
                button {
                    class: "btn btn-ghost",
                    id: "quiz-quit",
                    r#type: "button",
                    onclick: move |_| on_quit.call(()),
                    "Quit"
                }
            }
        }
    }
}
