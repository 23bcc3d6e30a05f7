use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="success-backdrop" onclick={close.clone()}>
            <div class="success-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="success-icon">{"✓"}</div>
                <h3>{"Thank you!"}</h3>
                <p>{"Your message has been sent successfully. Our team will get back to you within 24 hours."}</p>
                <button class="submit-button" onclick={close}>{"Got it"}</button>
            </div>
            <style>
                {r#"
                    .success-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                    }
                    .success-card {
                        background: rgba(31, 41, 55, 0.9);
                        border: 1px solid #374151;
                        border-radius: 24px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 28rem;
                        text-align: center;
                        color: #e5e7eb;
                    }
                    .success-icon {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #22c55e, #14b8a6);
                        color: #fff;
                        font-size: 2rem;
                        line-height: 64px;
                    }
                    .success-card p {
                        color: #9ca3af;
                        margin-bottom: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
