use chrono::Utc;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::{blocking_notice, FieldError, ModalFrame};
use crate::components::success_modal::SuccessModal;
use crate::config;
use crate::leads::client::SubmissionClient;
use crate::leads::form::{FormAction, FormPhase, LeadFields, LeadForm};
use crate::leads::models::{ContactField, ContactInquiry};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let form = use_reducer(LeadForm::<ContactInquiry>::new);
    let show_success = use_state(|| false);

    // Dismissing the modal throws the draft away
    {
        let form = form.clone();
        use_effect_with_deps(
            move |open| {
                if !*open {
                    form.dispatch(FormAction::Reset);
                }
                || ()
            },
            props.open,
        );
    }

    // Outcomes reach the UI only through the phase they produce, so the
    // reply of a dismissed request never closes or alerts anything.
    {
        let form = form.clone();
        let on_close = props.on_close.clone();
        let show_success = show_success.clone();
        let phase = form.phase();
        let submission = form.submission();
        use_effect_with_deps(
            move |(phase, id)| {
                let id = *id;
                match phase {
                    FormPhase::Submitting => {
                        let envelope = form.values().envelope(Utc::now());
                        spawn_local(async move {
                            let client = SubmissionClient::browser();
                            let succeeded = client.submit(&envelope).await.is_ok();
                            form.dispatch(FormAction::Finished { id, succeeded });
                        });
                    }
                    FormPhase::Succeeded => {
                        on_close.emit(());
                        Timeout::new(config::SUCCESS_REVEAL_DELAY_MS, move || {
                            show_success.set(true);
                        })
                        .forget();
                    }
                    FormPhase::Failed => {
                        log!("Contact inquiry failed, keeping the draft");
                        blocking_notice(ContactInquiry::FAILURE_NOTICE);
                        form.dispatch(FormAction::ResumeEditing);
                    }
                    FormPhase::Editing | FormPhase::Validating => {}
                }
                || ()
            },
            (phase, submission),
        );
    }

    let on_input = {
        let form = form.clone();
        move |field: ContactField| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(FormAction::Edit(field, input.value()));
            })
        }
    };

    let on_query_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(ContactField::Query, input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let close_success = {
        let show_success = show_success.clone();
        Callback::from(move |_: ()| show_success.set(false))
    };

    let field_class = |field: ContactField| {
        classes!("field", form.error(field).is_some().then(|| "has-error"))
    };
    let error_of = |field: ContactField| form.error(field).map(str::to_string);
    let submitting = form.is_submitting();

    html! {
        <>
            if props.open {
                <ModalFrame title="Get in Touch" on_close={props.on_close.clone()}>
                    <form class="lead-form" onsubmit={on_submit} novalidate={true}>
                        <div class={field_class(ContactField::Name)}>
                            <label for="contact-name">{"Name*"}</label>
                            <input
                                id="contact-name"
                                type="text"
                                placeholder="Your full name"
                                value={form.value(ContactField::Name).to_string()}
                                oninput={on_input(ContactField::Name)}
                            />
                            <FieldError message={error_of(ContactField::Name)} />
                        </div>
                        <div class={field_class(ContactField::PhoneNumber)}>
                            <label for="contact-phone">{"Phone number*"}</label>
                            <input
                                id="contact-phone"
                                type="tel"
                                placeholder="555-123-4567"
                                value={form.value(ContactField::PhoneNumber).to_string()}
                                oninput={on_input(ContactField::PhoneNumber)}
                            />
                            <FieldError message={error_of(ContactField::PhoneNumber)} />
                        </div>
                        <div class={field_class(ContactField::Email)}>
                            <label for="contact-email">{"Email*"}</label>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder="you@company.com"
                                value={form.value(ContactField::Email).to_string()}
                                oninput={on_input(ContactField::Email)}
                            />
                            <FieldError message={error_of(ContactField::Email)} />
                        </div>
                        <div class={field_class(ContactField::Query)}>
                            <label for="contact-query">{"How can we help?*"}</label>
                            <textarea
                                id="contact-query"
                                rows="4"
                                placeholder="Tell us about your app and what you're looking for"
                                value={form.value(ContactField::Query).to_string()}
                                oninput={on_query_input}
                            />
                            <FieldError message={error_of(ContactField::Query)} />
                        </div>
                        <button type="submit" class="submit-button" disabled={submitting}>
                            if submitting {
                                <span class="loading-spinner"></span>{"Sending..."}
                            } else {
                                {"Send Message"}
                            }
                        </button>
                    </form>
                </ModalFrame>
            }
            if *show_success {
                <SuccessModal on_close={close_success} />
            }
        </>
    }
}
