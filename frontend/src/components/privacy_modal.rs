use yew::prelude::*;

use crate::components::modal::ModalFrame;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyTab {
    #[default]
    Privacy,
    Terms,
    Cookies,
    Compliance,
    Ads,
}

impl PolicyTab {
    pub const ALL: [PolicyTab; 5] = [
        PolicyTab::Privacy,
        PolicyTab::Terms,
        PolicyTab::Cookies,
        PolicyTab::Compliance,
        PolicyTab::Ads,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PolicyTab::Privacy => "Privacy Policy",
            PolicyTab::Terms => "Terms of Service",
            PolicyTab::Cookies => "Cookie Policy",
            PolicyTab::Compliance => "Compliance",
            PolicyTab::Ads => "Ad Policy",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PrivacyModalProps {
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct PolicySectionProps {
    title: AttrValue,
    items: Vec<&'static str>,
    #[prop_or_default]
    note: Option<AttrValue>,
}

#[function_component(PolicySection)]
fn policy_section(props: &PolicySectionProps) -> Html {
    html! {
        <div class="policy-section">
            <h3>{ props.title.clone() }</h3>
            <ul>
                { for props.items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
            if let Some(note) = &props.note {
                <p class="policy-note">{ note.clone() }</p>
            }
        </div>
    }
}

fn tab_content(tab: PolicyTab) -> Html {
    match tab {
        PolicyTab::Privacy => html! {
            <>
                <PolicySection
                    title="1. Information We Collect"
                    items={vec![
                        "IP address and device information (device type, operating system, browser)",
                        "Browsing behavior and interaction data",
                        "Cookies and similar tracking technologies",
                        "App usage analytics and performance metrics",
                        "Contact information when provided voluntarily",
                    ]}
                />
                <PolicySection
                    title="2. How We Use Information"
                    items={vec![
                        "Improving platform functionality and personalization",
                        "Understanding usage patterns and optimizing performance",
                        "Delivering relevant advertisements and measuring effectiveness",
                        "Providing technical support and account management",
                        "Preventing fraud and maintaining platform integrity",
                    ]}
                />
                <PolicySection
                    title="3. Data Sharing"
                    items={vec![
                        "Ad demand partners for campaign optimization",
                        "Cloud providers for data processing and storage",
                        "Fraud detection and prevention tools",
                        "When required by law or court order",
                    ]}
                    note={"We never sell personal data to third parties for their own marketing purposes."}
                />
                <PolicySection
                    title="4. Data Protection Measures"
                    items={vec![
                        "All data transmitted using TLS encryption",
                        "Restricted access with multi-factor authentication",
                        "Only collecting necessary data for specified purposes",
                        "Automatic deletion of data after specified periods",
                    ]}
                />
            </>
        },
        PolicyTab::Terms => html! {
            <PolicySection
                title="Using adpocket.ai"
                items={vec![
                    "You must hold the rights to every app you monetize with the SDK",
                    "Invalid traffic, click fraud and incentivized clicks are prohibited",
                    "Payouts follow the revenue share agreed in your publisher account",
                    "We may suspend accounts that breach these terms",
                ]}
            />
        },
        PolicyTab::Cookies => html! {
            <PolicySection
                title="Cookies We Use"
                items={vec![
                    "Essential cookies needed for the site to work",
                    "Analytics cookies that tell us how the site is used",
                    "Advertising identifiers, only with consent where required",
                ]}
                note={"You can clear or block cookies in your browser settings at any time."}
            />
        },
        PolicyTab::Compliance => html! {
            <PolicySection
                title="Regulatory Compliance"
                items={vec![
                    "GDPR: right to access, rectify, erase and port your data",
                    "CCPA: right to know and to opt out of sale",
                    "COPPA: no personalized ads in child-directed apps",
                ]}
            />
        },
        PolicyTab::Ads => html! {
            <PolicySection
                title="Ad Content Standards"
                items={vec![
                    "No malware, deceptive redirects or auto-downloads",
                    "No adult, violent or hateful creative",
                    "Clear labeling of sponsored content",
                ]}
            />
        },
    }
}

#[function_component(PrivacyModal)]
pub fn privacy_modal(props: &PrivacyModalProps) -> Html {
    let active_tab = use_state(PolicyTab::default);

    html! {
        <ModalFrame title="Legal & Privacy" on_close={props.on_close.clone()} wide={true}>
            <div class="policy-tabs">
                { for PolicyTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let onclick = {
                        let active_tab = active_tab.clone();
                        Callback::from(move |_: MouseEvent| active_tab.set(tab))
                    };
                    html! {
                        <button
                            class={classes!("policy-tab", (*active_tab == tab).then(|| "active"))}
                            {onclick}
                        >
                            { tab.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="policy-content">
                { tab_content(*active_tab) }
            </div>
            <style>
                {r#"
                    .policy-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        border-bottom: 1px solid #374151;
                    }
                    .policy-tab {
                        background: none;
                        border: none;
                        padding: 0.5rem 1rem;
                        color: #9ca3af;
                        cursor: pointer;
                        border-bottom: 2px solid transparent;
                    }
                    .policy-tab.active {
                        color: #818cf8;
                        border-bottom-color: #818cf8;
                    }
                    .policy-section h3 {
                        color: #fff;
                        margin-bottom: 0.75rem;
                    }
                    .policy-section ul {
                        list-style: disc inside;
                        margin-bottom: 1.5rem;
                    }
                    .policy-note {
                        color: #facc15;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </ModalFrame>
    }
}
