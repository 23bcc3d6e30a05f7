use chrono::Utc;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::{blocking_notice, FieldError, ModalFrame};
use crate::config;
use crate::leads::client::SubmissionClient;
use crate::leads::form::{FormAction, FormPhase, LeadFields, LeadForm};
use crate::leads::models::{CompanyType, DemoField, DemoRequest, Region};

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let form = use_reducer(LeadForm::<DemoRequest>::new);

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

    // The thank-you panel closes itself. Dropping the timer (phase change or
    // unmount) cancels it, so a manual close can't be followed by a stray one.
    {
        let form = form.clone();
        let on_close = props.on_close.clone();
        let phase = form.phase();
        let submission = form.submission();
        use_effect_with_deps(
            move |(phase, id)| {
                let id = *id;
                let mut timer = None;
                match phase {
                    FormPhase::Submitting => {
                        let envelope = form.values().envelope(Utc::now());
                        log!("Sending demo request");
                        spawn_local(async move {
                            let client = SubmissionClient::browser();
                            let succeeded = client.submit(&envelope).await.is_ok();
                            form.dispatch(FormAction::Finished { id, succeeded });
                        });
                    }
                    FormPhase::Succeeded => {
                        timer = Some(Timeout::new(config::DEMO_AUTO_CLOSE_MS, move || {
                            form.dispatch(FormAction::Reset);
                            on_close.emit(());
                        }));
                    }
                    FormPhase::Failed => {
                        blocking_notice(DemoRequest::FAILURE_NOTICE);
                        form.dispatch(FormAction::ResumeEditing);
                    }
                    FormPhase::Editing | FormPhase::Validating => {}
                }
                move || drop(timer)
            },
            (phase, submission),
        );
    }

    let on_input = {
        let form = form.clone();
        move |field: DemoField| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(FormAction::Edit(field, input.value()));
            })
        }
    };

    let on_select = {
        let form = form.clone();
        move |field: DemoField| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                form.dispatch(FormAction::Edit(field, select.value()));
            })
        }
    };

    let on_expectations_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(DemoField::Expectations, input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    if !props.open {
        return html! {};
    }

    if form.phase() == FormPhase::Succeeded {
        return html! {
            <ModalFrame title="Request a Demo" on_close={props.on_close.clone()}>
                <div class="demo-success">
                    <div class="success-icon">{"✓"}</div>
                    <h3>{"Thank you for your interest!"}</h3>
                    <p>{"We've received your demo request. Our team will reach out within one business day to schedule a walkthrough."}</p>
                </div>
                <style>
                    {r#"
                        .demo-success {
                            text-align: center;
                            padding: 2rem 0;
                        }
                        .demo-success p {
                            color: #9ca3af;
                        }
                        .demo-success .success-icon {
                            width: 64px;
                            height: 64px;
                            margin: 0 auto 1rem;
                            border-radius: 50%;
                            background: linear-gradient(90deg, #22c55e, #14b8a6);
                            color: #fff;
                            font-size: 2rem;
                            line-height: 64px;
                        }
                    "#}
                </style>
            </ModalFrame>
        };
    }

    let field_class = |field: DemoField| {
        classes!("field", form.error(field).is_some().then(|| "has-error"))
    };
    let error_of = |field: DemoField| form.error(field).map(str::to_string);
    let text_field = |field: DemoField, input_type: &'static str| {
        let label = if field.is_required() {
            format!("{}*", field.label())
        } else {
            field.label().to_string()
        };
        html! {
            <div class={field_class(field)}>
                <label for={field.as_str()}>{ label }</label>
                <input
                    id={field.as_str()}
                    type={input_type}
                    value={form.value(field).to_string()}
                    oninput={on_input(field)}
                />
                <FieldError message={error_of(field)} />
            </div>
        }
    };
    let submitting = form.is_submitting();
    let region = form.value(DemoField::Region).to_string();
    let company_type = form.value(DemoField::CompanyType).to_string();

    html! {
        <ModalFrame title="Request a Demo" on_close={props.on_close.clone()}>
            <form class="lead-form" onsubmit={on_submit} novalidate={true}>
                <div class="field-row">
                    { text_field(DemoField::FirstName, "text") }
                    { text_field(DemoField::LastName, "text") }
                </div>
                <div class="field-row">
                    { text_field(DemoField::WorkEmail, "email") }
                    { text_field(DemoField::CompanyName, "text") }
                </div>
                <div class="field-row">
                    { text_field(DemoField::CompanyRole, "text") }
                    <div class={field_class(DemoField::Region)}>
                        <label for="region">{"Region*"}</label>
                        <select id="region" onchange={on_select(DemoField::Region)}>
                            <option value="" selected={region.is_empty()}>{"Please Select"}</option>
                            { for Region::ALL.iter().map(|r| html! {
                                <option value={r.label()} selected={region == r.label()}>{ r.label() }</option>
                            }) }
                        </select>
                        <FieldError message={error_of(DemoField::Region)} />
                    </div>
                </div>
                <div class={field_class(DemoField::CompanyType)}>
                    <label for="companyType">{"Company type*"}</label>
                    <select id="companyType" onchange={on_select(DemoField::CompanyType)}>
                        <option value="" selected={company_type.is_empty()}>{"Please Select"}</option>
                        { for CompanyType::ALL.iter().map(|t| html! {
                            <option value={t.label()} selected={company_type == t.label()}>{ t.label() }</option>
                        }) }
                    </select>
                    <FieldError message={error_of(DemoField::CompanyType)} />
                </div>
                <div class={field_class(DemoField::Expectations)}>
                    <label for="expectations">{"What do you expect from adpocket.ai?*"}</label>
                    <textarea
                        id="expectations"
                        rows="3"
                        value={form.value(DemoField::Expectations).to_string()}
                        oninput={on_expectations_input}
                    />
                    <FieldError message={error_of(DemoField::Expectations)} />
                </div>
                { text_field(DemoField::LinkedinProfile, "url") }
                <button type="submit" class="submit-button" disabled={submitting}>
                    if submitting {
                        <span class="loading-spinner"></span>{"Submitting..."}
                    } else {
                        {"Request Demo"}
                    }
                </button>
            </form>
        </ModalFrame>
    }
}
