use yew::prelude::*;

use crate::components::modal::ModalFrame;

const OPEN_ROLES: [(&str, &str); 3] = [
    ("Senior Rust Engineer", "Remote · Ad serving & mediation"),
    ("Mobile SDK Engineer (iOS/Android)", "Remote · SDK platform"),
    ("Publisher Success Manager", "Bangalore · Partnerships"),
];

#[derive(Properties, PartialEq)]
pub struct CareersModalProps {
    pub on_close: Callback<()>,
    pub on_contact: Callback<()>,
}

#[function_component(CareersModal)]
pub fn careers_modal(props: &CareersModalProps) -> Html {
    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <ModalFrame title="Careers at adpocket.ai" on_close={props.on_close.clone()}>
            <p>{"We're a small team building monetization infrastructure for app developers worldwide."}</p>
            <ul class="roles">
                { for OPEN_ROLES.iter().map(|(role, team)| html! {
                    <li>
                        <strong>{ *role }</strong>
                        <span>{ *team }</span>
                    </li>
                }) }
            </ul>
            <button class="submit-button" onclick={contact}>{"Get in touch"}</button>
            <style>
                {r#"
                    .roles {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }
                    .roles li {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid #374151;
                    }
                    .roles span {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </ModalFrame>
    }
}
