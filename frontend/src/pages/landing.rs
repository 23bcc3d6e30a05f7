use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::how_it_works::HowItWorks;
use crate::components::modal::ActiveModal;

const FEATURES: [(&str, &str, &str); 6] = [
    ("🧠", "AI-Powered Mediation", "Our adaptive waterfall and in-app bidding engine ensure you always get the highest eCPM."),
    ("🌍", "One SDK, Global Demand", "Integrate once and access 30+ premium ad networks and demand partners across the world."),
    ("💰", "High eCPM Optimisation", "Real-time insights help you tweak your strategy and maximize revenue with minimal effort."),
    ("🔒", "Privacy & Compliance", "Fully GDPR and CCPA compliant. User trust and data security are at our core."),
    ("📊", "Real-Time Analytics", "Track impressions, fill rates, and revenue instantly with an interactive dashboard."),
    ("⚡", "Easy Integration", "Start monetizing in minutes with a lightweight, developer-friendly SDK."),
];

const FORMATS: [(&str, &str); 4] = [
    ("Rewarded Video", "Engage users and boost retention with highly rewarding ad experiences."),
    ("Interstitial", "Full-screen ads that drive high CPMs without hurting UX."),
    ("Banners", "Lightweight, evergreen ad placements that blend with your app."),
    ("Native Ads", "Seamlessly integrated ads that feel organic to your design."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Sophia R.", "GameDev Studio", "adpocket.ai doubled our ARPDAU in just two months. The integration was effortless."),
    ("Rahul K.", "Utility App Co.", "Finally, an SDK that's lightweight, transparent, and actually drives revenue."),
    ("Elena M.", "Creative Labs", "The dashboard insights are a game changer. We can react instantly to trends."),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    features: [&'static str; 3],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$0",
        features: ["Up to 50k impressions/month", "Basic analytics", "Community support"],
    },
    Plan {
        name: "Pro",
        price: "$99/mo",
        features: ["Unlimited impressions", "Advanced reporting", "Priority support"],
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        features: ["Dedicated manager", "Custom integrations", "24/7 premium support"],
    },
];

const FAQS: [(&str, &str); 4] = [
    ("How long does integration take?", "Most developers integrate adpocket.ai in under 30 minutes with our lightweight SDK."),
    ("Is there any revenue share?", "We work on a transparent revenue share model. No hidden fees."),
    ("Which ad networks do you support?", "We partner with over 30 top-tier networks including Google, Meta, and AppLovin."),
    ("Is my user data safe?", "Absolutely. We are fully GDPR and CCPA compliant with strict data policies."),
];

/// Clicking the open question closes it; clicking another one moves the
/// single open slot there.
pub fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">{ props.answer.clone() }</div>
            }
        </div>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggle_faq(*open, i)))
                    };
                    html! {
                        <FaqItem
                            question={*question}
                            answer={*answer}
                            open={*open == Some(i)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_open: Callback<ActiveModal>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open = |modal: ActiveModal| {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open.emit(modal);
        })
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Power Your Apps with "}<span class="brand">{"adpocket.ai"}</span></h1>
                    <p class="hero-subtitle">
                        {"A next-generation monetization SDK that connects your app to global ad demand, intelligent mediation, and real-time analytics. Built for scale, speed, and revenue growth."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open(ActiveModal::Demo)}>{"Get Started"}</button>
                        <a href="#how-it-works" class="secondary-cta">{"See how it works"}</a>
                    </div>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{"Why Developers Choose adpocket.ai"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-item">
                            <div class="feature-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <div id="how-it-works">
                <HowItWorks />
            </div>

            <section class="formats">
                <h2>{"Supported Ad Formats"}</h2>
                <div class="formats-grid">
                    { for FORMATS.iter().map(|(format, desc)| html! {
                        <div class="format-card">
                            <h3>{ *format }</h3>
                            <p>{ *desc }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <h2>{"Loved by Developers Worldwide"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(name, company, text)| html! {
                        <div class="testimonial">
                            <p class="quote">{ format!("“{}”", text) }</p>
                            <div class="author">{ *name }</div>
                            <div class="company">{ *company }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="pricing" id="pricing">
                <h2>{"Flexible Pricing for Every Stage"}</h2>
                <div class="pricing-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <div class="plan">
                            <h3>{ plan.name }</h3>
                            <p class="price">{ plan.price }</p>
                            <ul>
                                { for plan.features.iter().map(|f| html! { <li>{ format!("✓ {}", f) }</li> }) }
                            </ul>
                            <button class="hero-cta" onclick={open(ActiveModal::Demo)}>
                                { format!("Choose {}", plan.name) }
                            </button>
                        </div>
                    }) }
                </div>
            </section>

            <Faq />

            <section class="footer-cta">
                <h2>{"Ready to Maximize Your App Revenue?"}</h2>
                <p class="subtitle">{"Join thousands of developers who trust adpocket.ai to deliver premium ads and unbeatable performance."}</p>
                <div class="hero-cta-group">
                    <button class="hero-cta light" onclick={open(ActiveModal::Demo)}>{"Request a Demo"}</button>
                    <button class="hero-cta outline" onclick={open(ActiveModal::Contact)}>{"Contact Us"}</button>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-links">
                    <a href="#" onclick={open(ActiveModal::Contact)}>{"Contact"}</a>
                    <a href="#" onclick={open(ActiveModal::Privacy)}>{"Privacy"}</a>
                    <a href="#" onclick={open(ActiveModal::Careers)}>{"Careers"}</a>
                </div>
                <p>{"© 2025 adpocket.ai"}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        background: #030712;
                        color: #e5e7eb;
                    }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                        padding: 6rem 1.5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 30% 20%, rgba(79, 70, 229, 0.25), transparent 60%),
                                    radial-gradient(circle at 70% 80%, rgba(20, 184, 166, 0.2), transparent 60%);
                        z-index: 0;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                    }
                    .hero h1 {
                        font-size: 4rem;
                        font-weight: 800;
                        line-height: 1.1;
                    }
                    .brand {
                        color: #818cf8;
                    }
                    .hero-subtitle {
                        margin-top: 1.5rem;
                        font-size: 1.25rem;
                        color: #9ca3af;
                    }
                    .hero-cta-group {
                        margin-top: 2.5rem;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .hero-cta {
                        border: none;
                        border-radius: 12px;
                        padding: 0.75rem 1.5rem;
                        font-weight: 600;
                        color: #fff;
                        background: linear-gradient(90deg, #4f46e5, #14b8a6);
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta.light {
                        background: #fff;
                        color: #4f46e5;
                    }
                    .hero-cta.outline {
                        background: transparent;
                        border: 1px solid #fff;
                    }
                    .secondary-cta {
                        color: #9ca3af;
                    }
                    .features, .formats, .testimonials, .pricing, .faq-section {
                        padding: 6rem 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    section h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .features-grid, .testimonials-grid, .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .formats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-item, .format-card, .testimonial, .plan {
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid #374151;
                        border-radius: 24px;
                        padding: 2rem;
                    }
                    .feature-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .quote {
                        font-style: italic;
                        color: #9ca3af;
                        margin-bottom: 1.5rem;
                    }
                    .author {
                        font-weight: 700;
                    }
                    .company {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .price {
                        font-size: 2rem;
                        font-weight: 800;
                        color: #818cf8;
                    }
                    .plan ul {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                        color: #9ca3af;
                    }
                    .plan .hero-cta {
                        width: 100%;
                    }
                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .faq-item {
                        border: 1px solid #374151;
                        border-radius: 16px;
                        margin-bottom: 1rem;
                        background: rgba(31, 41, 55, 0.5);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        background: none;
                        border: none;
                        color: inherit;
                        padding: 1rem 1.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer {
                        padding: 0 1.5rem 1rem;
                        color: #9ca3af;
                    }
                    .footer-cta {
                        padding: 6rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(90deg, #4f46e5, #14b8a6);
                        color: #fff;
                    }
                    .site-footer {
                        padding: 3rem 1.5rem;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .footer-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links a {
                        color: inherit;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.5rem;
                        }
                        .features-grid, .testimonials-grid, .pricing-grid, .formats-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_question_closes_the_other() {
        assert_eq!(toggle_faq(None, 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_question_collapses_it() {
        assert_eq!(toggle_faq(Some(1), 1), None);
    }
}
