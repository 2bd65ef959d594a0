use chrono::Datelike;
use yew::prelude::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::catalog::{PricingPlan, FEATURES, PRICING_PLANS, STEPS, TRUST_BADGES};
use crate::components::faq::Faq;
use crate::components::icons::{Icon, IconView};
use crate::config;
use crate::handoff::use_order_handoff;

pub const HOW_IT_WORKS_ANCHOR: &str = "how-it-works";

pub fn copyright_line(year: i32) -> String {
    format!(
        "© {} {}. All rights reserved. Since {}",
        year,
        config::COMPANY_NAME,
        config::FOUNDED_YEAR
    )
}

fn scroll_to_anchor(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn order_icon(busy: bool) -> Html {
    html! { <IconView icon={if busy { Icon::Loader } else { Icon::WhatsApp }} /> }
}

#[function_component(Hero)]
fn hero() -> Html {
    let order = use_order_handoff(None);
    let see_how = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(HOW_IT_WORKS_ANCHOR);
    });

    html! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-pill">
                        <IconView icon={Icon::Zap} />
                        <span>{"Order in 60 Seconds"}</span>
                    </div>
                    <h1>{"Order Gas on "}<span class="whatsapp-green">{"WhatsApp"}</span></h1>
                    <p class="hero-subtitle">
                        {"Skip the queues and calls. Order your gas cylinders instantly through WhatsApp and get fast, convenient delivery to your doorstep."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={order.start} disabled={order.busy}>
                            { order_icon(order.busy) }
                            {"Start Ordering on WhatsApp"}
                        </button>
                        <button class="btn-secondary" onclick={see_how}>
                            {"See How It Works"}
                            <IconView icon={Icon::ChevronRight} />
                        </button>
                    </div>
                    <div class="trust-badges">
                        { for TRUST_BADGES.iter().map(|badge| html! {
                            <div class="trust-badge">
                                <IconView icon={Icon::CheckCircle} />
                                <span>{*badge}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="phone-mockup">
                    <div class="phone-frame">
                        <div class="phone-screen">
                            <div class="chat-header">
                                <div class="chat-avatar">
                                    <img src={config::LOGO_URL} alt="TGC" />
                                </div>
                                <div>
                                    <p class="chat-name">{config::COMPANY_NAME}</p>
                                    <p class="chat-status">{"Online"}</p>
                                </div>
                            </div>
                            <div class="chat-body">
                                <img src={config::CHAT_PREVIEW_URL} alt="Order Gas Information" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id={HOW_IT_WORKS_ANCHOR} class="how-it-works">
            <div class="container">
                <div class="section-heading">
                    <h2>{"How It Works"}</h2>
                    <p>{"From chat to delivery in 4 simple steps. No apps to download."}</p>
                </div>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div class="step" key={index}>
                            <div class="card">
                                <div class="step-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                            {
                                if index + 1 < STEPS.len() {
                                    html! {
                                        <div class="step-connector">
                                            <IconView icon={Icon::ChevronRight} />
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Why Order on WhatsApp?"}</h2>
                    <p>{"The most convenient way to keep your gas supply uninterrupted"}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="card feature-item" key={index}>
                            <div class="feature-icon">
                                <IconView icon={feature.icon} />
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: PricingPlan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let order = use_order_handoff(Some(AttrValue::Static(plan.size)));

    html! {
        <div class={classes!("plan-card", plan.popular.then(|| "popular"))}>
            {
                if plan.popular {
                    html! { <div class="popular-badge">{"MOST POPULAR"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="plan-image">
                <img src={config::CYLINDER_IMAGE_URL} alt={format!("{} Gas Cylinder", plan.size)} />
            </div>
            <h3>{plan.size}</h3>
            <div class="plan-price">
                <span class="price">{plan.price}</span>
                <span class="note">{plan.note}</span>
            </div>
            <button class="btn-primary plan-order" onclick={order.start} disabled={order.busy}>
                { order_icon(order.busy) }
                {"Order Now"}
            </button>
        </div>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Gas Cylinder Pricing"}</h2>
                    <p>{"Transparent pricing. No hidden fees. What you see is what you pay."}</p>
                </div>
                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <PlanCard key={plan.id} plan={plan.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    let order = use_order_handoff(None);

    html! {
        <section class="final-cta">
            <div class="container">
                <h2>{"Ready to Order?"}</h2>
                <p>{"Join thousands who order their gas on WhatsApp. Fast, simple, reliable."}</p>
                <button class="btn-light" onclick={order.start} disabled={order.busy}>
                    { order_icon(order.busy) }
                    {"Start Ordering Now"}
                </button>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container">
                <img src={config::LOGO_URL} alt={config::COMPANY_NAME} class="footer-logo" />
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[function_component(FloatingOrderButton)]
fn floating_order_button() -> Html {
    let order = use_order_handoff(None);

    html! {
        <button class="floating-order" onclick={order.start} disabled={order.busy} aria-label="Order gas on WhatsApp">
            { order_icon(order.busy) }
        </button>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
            <main id="main-content">
                <Hero />
                <HowItWorks />
                <Features />
                <Pricing />
                <Faq />
                <FinalCta />
            </main>
            <Footer />
            <FloatingOrderButton />
            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Nunito Sans', sans-serif;
                    color: #0f172a;
                    background: white;
                }
                h1, h2, h3 { font-family: 'Montserrat', sans-serif; }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                }
                .skip-link {
                    position: absolute;
                    left: -9999px;
                }
                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                    z-index: 200;
                    background: white;
                    padding: 0.5rem 1rem;
                }
                .icon { width: 20px; height: 20px; }
                .spin { animation: spin 1s linear infinite; }
                @keyframes spin { to { transform: rotate(360deg); } }

                section { padding: 5rem 0; }
                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.8rem, 3vw, 2.5rem);
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    color: #64748b;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .card {
                    background: white;
                    padding: 2rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
                    height: 100%;
                }
                .card p { color: #64748b; line-height: 1.6; }

                .btn-primary, .btn-secondary, .btn-light {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.6rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    font-family: 'Montserrat', sans-serif;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .btn-primary {
                    background: #25D366;
                    color: white;
                    border: none;
                    box-shadow: 0 10px 24px rgba(37, 211, 102, 0.3);
                }
                .btn-secondary {
                    background: white;
                    color: #0f172a;
                    border: 2px solid #e2e8f0;
                }
                .btn-light {
                    background: white;
                    color: #E31679;
                    border: none;
                }
                button:disabled { opacity: 0.7; cursor: default; }
                button:not(:disabled):hover { transform: translateY(-2px); }

                .hero {
                    min-height: 100vh;
                    padding-top: 6rem;
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .hero-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(227, 22, 121, 0.1);
                    color: #E31679;
                    font-weight: 600;
                    font-size: 0.875rem;
                }
                .hero-pill .icon { width: 16px; height: 16px; }
                .hero h1 { font-size: clamp(2.4rem, 5vw, 3.8rem); margin: 1.5rem 0; }
                .whatsapp-green { color: #25D366; }
                .hero-subtitle { color: #64748b; font-size: 1.1rem; line-height: 1.7; max-width: 32rem; }
                .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e2e8f0;
                }
                .trust-badge { display: flex; align-items: center; gap: 0.4rem; color: #64748b; font-size: 0.875rem; }
                .trust-badge .icon { width: 16px; height: 16px; color: #25D366; }
                .phone-mockup { display: flex; justify-content: flex-end; }
                .phone-frame {
                    width: 340px;
                    padding: 12px;
                    background: #1a1a2e;
                    border-radius: 36px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .phone-screen { background: #f0f2f5; border-radius: 28px; overflow: hidden; min-height: 480px; }
                .chat-header { background: #128C7E; display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1rem; }
                .chat-avatar { width: 36px; height: 36px; border-radius: 50%; background: rgba(255, 255, 255, 0.2); display: flex; align-items: center; justify-content: center; }
                .chat-avatar img { width: 24px; height: 24px; object-fit: contain; }
                .chat-name { color: white; font-weight: 600; font-size: 0.875rem; margin: 0; }
                .chat-status { color: rgba(255, 255, 255, 0.7); font-size: 0.75rem; margin: 0; }
                .chat-body { padding: 0 1rem 1rem; }
                .chat-body img { width: 100%; height: auto; border-radius: 8px; }

                .how-it-works, .pricing { background: #f8fafc; }
                .steps-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                .step { position: relative; }
                .step-number {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #E31679;
                    color: white;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.25rem;
                }
                .step-connector {
                    position: absolute;
                    top: 50%;
                    right: -1.6rem;
                    color: #cbd5e1;
                }

                .features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                .feature-icon {
                    width: 44px;
                    height: 44px;
                    border-radius: 12px;
                    background: rgba(227, 22, 121, 0.1);
                    color: #E31679;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }

                .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; max-width: 960px; margin: 0 auto; }
                .plan-card {
                    position: relative;
                    background: white;
                    border: 2px solid #e2e8f0;
                    border-radius: 24px;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.2s ease;
                }
                .plan-card:hover { transform: translateY(-6px); }
                .plan-card.popular { border-color: #E31679; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08); }
                .popular-badge {
                    position: absolute;
                    top: -14px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #E31679;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                }
                .plan-image img { height: 120px; width: auto; object-fit: contain; }
                .plan-price { display: flex; flex-direction: column; gap: 0.25rem; margin: 1rem 0 1.5rem; }
                .plan-price .price { font-family: 'Montserrat', sans-serif; font-size: 2rem; font-weight: 700; }
                .plan-price .note { color: #64748b; font-size: 0.875rem; }
                .plan-order { width: 100%; }

                .final-cta {
                    text-align: center;
                    color: white;
                    background: linear-gradient(135deg, #E31679, #a3105a);
                }
                .final-cta h2 { font-size: clamp(1.8rem, 3vw, 2.5rem); }
                .final-cta p { opacity: 0.9; margin-bottom: 2rem; }

                .site-footer { padding: 2.5rem 0; text-align: center; border-top: 1px solid #e2e8f0; }
                .footer-logo { height: 40px; width: auto; }
                .site-footer p { color: #64748b; font-size: 0.875rem; }

                .floating-order {
                    position: fixed;
                    bottom: 1.25rem;
                    right: 1.25rem;
                    z-index: 50;
                    width: 56px;
                    height: 56px;
                    border: none;
                    border-radius: 50%;
                    background: #25D366;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    box-shadow: 0 10px 24px rgba(37, 211, 102, 0.4);
                }
                .floating-order .icon { width: 24px; height: 24px; }

                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; text-align: center; }
                    .hero-actions, .trust-badges { justify-content: center; }
                    .hero-subtitle { margin: 0 auto; }
                    .phone-mockup { justify-content: center; order: -1; }
                    .steps-grid { grid-template-columns: repeat(2, 1fr); }
                    .features-grid { grid-template-columns: repeat(2, 1fr); }
                    .step-connector { display: none; }
                }
                @media (max-width: 640px) {
                    .steps-grid, .features-grid, .pricing-grid { grid-template-columns: 1fr; }
                    .phone-frame { width: 280px; }
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
    fn copyright_mentions_year_and_founding() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 The Gas Company. All rights reserved. Since 1947"
        );
    }
}
