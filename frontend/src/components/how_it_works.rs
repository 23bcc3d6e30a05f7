use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Easy Setup",
        subtitle: "Get started in minutes",
        description: "Integrate our lightweight SDK with just a few lines of code. No complex configuration needed.",
        icon: "🚀",
    },
    Step {
        number: "02",
        title: "Smart Connect",
        subtitle: "One-click integration",
        description: "Connect to premium ad networks instantly or let our AI choose the best partners for you.",
        icon: "🔗",
    },
    Step {
        number: "03",
        title: "Maximize Revenue",
        subtitle: "AI-powered optimization",
        description: "Watch your earnings grow with real-time optimization and an advanced analytics dashboard.",
        icon: "📈",
    },
];

/// Maps how far the reader got through the section (0.0 to 1.0) to the step
/// to highlight. Each step owns an equal slice; out-of-range and NaN input
/// is clamped, so the result only ever moves forward as progress grows.
pub fn step_for_progress(progress: f64, step_count: usize) -> usize {
    if step_count == 0 {
        return 0;
    }
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let step = (progress * step_count as f64).floor() as usize;
    step.min(step_count - 1)
}

/// Progress through a sticky section from its bounding rect: 0.0 while its
/// top is still below the top of the viewport, 1.0 once its bottom reaches
/// the bottom of the viewport.
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return if section_top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-section_top / scrollable).clamp(0.0, 1.0)
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section = use_node_ref();
    // Re-render on every scroll; position is read from the DOM below.
    let _scroll = use_window_scroll();

    let progress = section
        .cast::<Element>()
        .and_then(|el| {
            let rect = el.get_bounding_client_rect();
            let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
            Some(scroll_progress(rect.top(), rect.height(), viewport))
        })
        .unwrap_or(0.0);
    let active = step_for_progress(progress, STEPS.len());

    html! {
        <section class="how-it-works" ref={section}>
            <div class="how-sticky">
                <span class="section-badge">{"Simple Process"}</span>
                <h2>{"How It Works"}</h2>
                <p class="section-subtitle">{"Three simple steps to transform your app monetization"}</p>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class={classes!("step", (i == active).then(|| "active"), (i < active).then(|| "done"))}>
                            <div class="step-head">
                                <span class="step-number">{ step.number }</span>
                                <span class="step-icon">{ step.icon }</span>
                            </div>
                            <h3>{ step.title }</h3>
                            <p class="step-subtitle">{ step.subtitle }</p>
                            <p>{ step.description }</p>
                        </div>
                    }) }
                </div>
                <div class="step-progress">
                    <div class="step-progress-bar" style={format!("width: {:.1}%;", progress * 100.0)}></div>
                </div>
            </div>
            <style>
                {r#"
                    .how-it-works {
                        height: 250vh;
                        position: relative;
                        background: #0f172a;
                    }
                    .how-sticky {
                        position: sticky;
                        top: 0;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem 1.5rem;
                        text-align: center;
                    }
                    .section-badge {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        border-radius: 999px;
                        color: #60a5fa;
                        font-size: 0.8rem;
                    }
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 72rem;
                        margin-top: 3rem;
                    }
                    .step {
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid #334155;
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: left;
                        opacity: 0.45;
                        transition: opacity 0.4s ease, border-color 0.4s ease, transform 0.4s ease;
                    }
                    .step.done {
                        opacity: 0.75;
                    }
                    .step.active {
                        opacity: 1;
                        border-color: rgba(59, 130, 246, 0.5);
                        transform: translateY(-8px);
                    }
                    .step-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .step-number {
                        font-size: 3rem;
                        font-weight: 700;
                        background: linear-gradient(135deg, #60a5fa, #c084fc);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .step-subtitle {
                        color: #60a5fa;
                    }
                    .step-progress {
                        width: 100%;
                        max-width: 72rem;
                        height: 4px;
                        margin-top: 2rem;
                        background: #1e293b;
                        border-radius: 2px;
                    }
                    .step-progress-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        border-radius: 2px;
                    }
                    @media (max-width: 768px) {
                        .how-it-works {
                            height: auto;
                        }
                        .how-sticky {
                            position: static;
                        }
                        .steps-grid {
                            grid-template-columns: 1fr;
                        }
                        .step {
                            opacity: 1;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_split_progress_evenly() {
        assert_eq!(step_for_progress(0.0, 3), 0);
        assert_eq!(step_for_progress(0.33, 3), 0);
        assert_eq!(step_for_progress(0.34, 3), 1);
        assert_eq!(step_for_progress(0.66, 3), 1);
        assert_eq!(step_for_progress(0.67, 3), 2);
        assert_eq!(step_for_progress(1.0, 3), 2);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(step_for_progress(-4.0, 3), 0);
        assert_eq!(step_for_progress(7.5, 3), 2);
        assert_eq!(step_for_progress(f64::NAN, 3), 0);
        assert_eq!(step_for_progress(f64::INFINITY, 3), 2);
    }

    #[test]
    fn never_moves_backwards() {
        let mut last = 0;
        for i in 0..=1000 {
            let step = step_for_progress(i as f64 / 1000.0, 4);
            assert!(step >= last);
            last = step;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn no_steps_means_step_zero() {
        assert_eq!(step_for_progress(0.5, 0), 0);
    }

    #[test]
    fn progress_from_section_geometry() {
        assert_eq!(scroll_progress(200.0, 2500.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 2500.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-750.0, 2500.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(-3000.0, 2500.0, 1000.0), 1.0);
    }

    #[test]
    fn short_sections_jump_straight_through() {
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-1.0, 800.0, 1000.0), 1.0);
    }
}
