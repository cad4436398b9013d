use dioxus::prelude::*;

use crate::contact_client::{ContactClient, ContactSubmission};

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut is_sending = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);

    let send_message = move |_| {
        let submission = ContactSubmission {
            name: name(),
            email: email(),
            message: message(),
        };

        // Required fields are checked here first; nothing leaves the page
        // while one of them is empty.
        if let Err(missing) = submission.validate() {
            form_error.set(Some(missing.to_string()));
            return;
        }

        spawn(async move {
            is_sending.set(true);
            form_error.set(None);
            confirmation.set(None);

            match ContactClient::default().submit(&submission).await {
                Ok(receipt) => {
                    confirmation.set(Some(format!(
                        "Thanks, {}. Your message has been sent — we usually \
                         reply within two working days.",
                        receipt.name
                    )));
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(error) => {
                    form_error.set(Some(error.to_string()));
                }
            }

            is_sending.set(false);
        });
    };

    rsx! {
        section { class: "page",
            h1 { "Contact" }
            p { class: "page-lead",
                "Ask about a piece, request a quote, or book a Friday \
                 workshop visit."
            }

            div { class: "contact-form",
                div { class: "form-group",
                    label { class: "form-label", "Name" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Email" }
                    input {
                        class: "form-input",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Message" }
                    textarea {
                        class: "form-input form-textarea",
                        rows: "6",
                        value: "{message}",
                        oninput: move |event| message.set(event.value()),
                    }
                }

                if let Some(error) = form_error() {
                    p { class: "form-error", "{error}" }
                }

                if let Some(text) = confirmation() {
                    p { class: "form-confirmation", "{text}" }
                }

                button {
                    class: "btn-primary",
                    disabled: is_sending(),
                    onclick: send_message,
                    if is_sending() {
                        "Sending..."
                    } else {
                        "Send message"
                    }
                }
            }

            p { class: "contact-aside",
                "Prefer to talk? The workshop phone is answered between nine \
                 and four on weekdays."
            }
        }
    }
}
