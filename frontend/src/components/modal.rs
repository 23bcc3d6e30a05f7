use log::warn;
use yew::prelude::*;
use web_sys::MouseEvent;

/// Which overlay the landing page is showing. Only one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    None,
    Contact,
    Demo,
    Privacy,
    Careers,
}

impl ActiveModal {
    pub fn is_open(&self, modal: ActiveModal) -> bool {
        modal != ActiveModal::None && *self == modal
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop + panel. Clicking the backdrop or the ✕ closes, clicks inside
/// the panel don't.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class={classes!("modal-panel", props.wide.then(|| "wide"))} onclick={swallow}>
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .modal-panel {
                        background: linear-gradient(135deg, #111827, #000, #1f2937);
                        border: 1px solid #374151;
                        border-radius: 16px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 42rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        color: #e5e7eb;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .modal-panel.wide {
                        max-width: 64rem;
                    }
                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .modal-header h2 {
                        font-size: 1.5rem;
                        background: linear-gradient(90deg, #818cf8, #2dd4bf);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #fff;
                    }
                    .lead-form label {
                        display: block;
                        font-size: 0.875rem;
                        color: #d1d5db;
                        margin-bottom: 0.25rem;
                    }
                    .lead-form input,
                    .lead-form select,
                    .lead-form textarea {
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid #4b5563;
                        border-radius: 8px;
                        color: #fff;
                    }
                    .lead-form .has-error input,
                    .lead-form .has-error select,
                    .lead-form .has-error textarea {
                        border-color: #f87171;
                    }
                    .lead-form .field {
                        margin-bottom: 1rem;
                    }
                    .lead-form .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .field-error {
                        color: #f87171;
                        font-size: 0.8rem;
                        margin-top: 0.25rem;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 12px;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(90deg, #4f46e5, #14b8a6);
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 16px;
                        height: 16px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                        vertical-align: middle;
                        margin-right: 0.5rem;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @media (max-width: 768px) {
                        .lead-form .field-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

/// The blocking "please try again" alert shown when a lead could not be sent.
pub fn blocking_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            warn!("Could not show notice: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_open_by_default() {
        let active = ActiveModal::default();
        assert_eq!(active, ActiveModal::None);
        assert!(!active.is_open(ActiveModal::Contact));
        assert!(!active.is_open(ActiveModal::None));
    }

    #[test]
    fn only_the_active_modal_is_open() {
        let active = ActiveModal::Demo;
        assert!(active.is_open(ActiveModal::Demo));
        assert!(!active.is_open(ActiveModal::Contact));
        assert!(!active.is_open(ActiveModal::Privacy));
    }
}
