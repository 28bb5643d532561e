use yew::prelude::*;
use log::debug;

use crate::config::MotionConfig;
use crate::motion::{self, layout::LayoutMode};


struct FeaturePanel {
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [FeaturePanel; 4] = [
    FeaturePanel {
        image: "asset/images/folderCleanerOutcome.webp",
        alt: "One-click organizer result",
        title: "Transform Chaos Into Order (In 1 click)",
        description: "Pick any disaster zone, from a client project folder to a Desktop buried under screenshots, and watch Neatify turn it into a clean, logical structure. Images flow into Visual folders, documents land in Document categories, everything finds its home.",
    },
    FeaturePanel {
        image: "asset/images/savedProject.webp",
        alt: "Project selection UI",
        title: "Switch Clients Without Losing Your Mind",
        description: "Logos on Monday, restaurant mockups on Tuesday, consulting slides on Wednesday. One click switches your whole file system to match the project you are on. No folder confusion, no files landing in the wrong place.",
    },
    FeaturePanel {
        image: "asset/images/homeScreen.webp",
        alt: "Start sorting from the app home",
        title: "Your Digital Assistant Never Sleeps",
        description: "Press Start and get back to work. While you design, code or sit in client meetings, every screenshot, download and asset gets moved to exactly where it belongs.",
    },
    FeaturePanel {
        image: "asset/images/savedRules.webp",
        alt: "Custom rules creation interface",
        title: "Set Rules Once, Organized Forever",
        description: "Create simple rules like \"PDFs to Documents\" and \"Images to current project visuals\". Set them once and forget them. No projects needed, no complex setup.",
    },
];

const CARDS: [(&str, &str, &str); 3] = [
    ("🗂️", "Folders that stay clean", "Rules run continuously, not once a month."),
    ("⚡", "One click", "Reorganize an entire project tree instantly."),
    ("🔒", "Local only", "Nothing is uploaded, ever."),
];

const DEMO_STEPS: [(&str, &str); 3] = [
    ("Pick a folder", "Drop in the messiest folder you own."),
    ("Choose a project", "Neatify applies that project's layout and rules."),
    ("Press Start", "Files move as they arrive, in the background."),
];

const FAQ: [(&str, &str); 3] = [
    ("Does Neatify delete anything?", "No. Files are only moved, never removed, and every move can be undone."),
    ("Which platforms are supported?", "macOS and Windows. Linux is on the roadmap."),
    ("Do my files leave my computer?", "Never. Sorting happens locally on your machine."),
];


#[function_component(Landing)]
pub fn landing() -> Html {
    let layout = use_state_eq(|| LayoutMode::Desktop);

    // Install page enhancements once the markup is in the DOM
    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                let config = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| MotionConfig::load(&document))
                    .unwrap_or_default();

                let on_layout = Callback::from(move |mode: LayoutMode| layout.set(mode));
                let enhancements = motion::install(&config, on_layout);

                move || {
                    debug!("Tearing down landing enhancements");
                    drop(enhancements);
                }
            },
            (), // Empty dependencies array means this effect runs only once on mount
        );
    }

    html! {
        <div class="landing-page">
            <style>{STYLES}</style>
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="/" class="nav-logo">{"Neatify"}</a>
                    <a href="#deep-features" class="nav-link">{"Features"}</a>
                    <a href="#faq" class="nav-link">{"FAQ"}</a>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-content reveal-fade">
                    <h1>{"Your files, sorted while you work."}</h1>
                    <p class="hero-subtitle">
                        {"Neatify watches your Desktop and Downloads and puts every file where it belongs."}
                    </p>
                    <a href="#deep-features" class="appstore-cta">{"See what it does"}</a>
                </div>
            </header>

            <section class="cards">
                { for CARDS.iter().map(|(icon, title, text)| html! {
                    <div class="card reveal-up">
                        <div class="icon-wrap">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <section class="demo-section reveal-up">
                <h2>{"See it in three steps"}</h2>
                <ol class="demo-steps">
                    { for DEMO_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <li class={classes!("demo-step", (i == 0).then(|| "active"))}>
                            <strong>{*title}</strong>
                            <span>{*text}</span>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="deep-features" class={classes!("deep-features", layout.class_name())}>
                <div class="hs__outer">
                    <div class="hs__sticky">
                        <div class="hs__track">
                            { for FEATURES.iter().map(|feature| html! {
                                <article class="hs__panel">
                                    <div class="media-frame">
                                        <img src={feature.image} alt={feature.alt} loading="lazy" />
                                    </div>
                                    <div class="hs__copy">
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </article>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq reveal-up">
                <h2>{"Questions"}</h2>
                { for FAQ.iter().map(|(question, answer)| html! {
                    <details class="faq-item">
                        <summary>{*question}</summary>
                        <div class="faq-content"><p>{*answer}</p></div>
                    </details>
                }) }
            </section>

            <footer class="footer">
                <div class="footer-links">
                    <a href="#faq">{"FAQ"}</a>
                    <a href="mailto:hello@neatify.app">{"Contact"}</a>
                </div>
            </footer>
        </div>
    }
}


const STYLES: &str = r#"
    .landing-page {
        background: #0b0d12;
        color: #f2f4f8;
        font-family: system-ui, sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 10;
        backdrop-filter: blur(8px);
    }
    .nav-content {
        display: flex;
        gap: 1.5rem;
        padding: 1rem 2rem;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .appstore-cta {
        display: inline-block;
        padding: 0.9rem 1.8rem;
        border-radius: 999px;
        background: #00eeff;
        color: #0b0d12;
        text-decoration: none;
    }

    .reveal-up {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal-fade {
        opacity: 0;
        transition: opacity 0.8s ease;
    }
    .reveal-up.is-visible,
    .reveal-fade.is-visible {
        opacity: 1;
        transform: none;
    }

    .cards {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
        padding: 4rem 2rem;
    }
    .card-entrance {
        transition-delay: var(--stagger-delay, 0ms);
    }
    .icon-wrap {
        font-size: 2rem;
        animation: float 4s ease-in-out infinite;
        animation-delay: var(--icon-delay, 0s);
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-6px); }
    }

    .demo-steps {
        list-style: none;
        display: flex;
        gap: 1rem;
        padding: 0;
    }
    .demo-step {
        flex: 1;
        padding: 1.25rem;
        border-radius: 12px;
        opacity: 0.5;
        cursor: pointer;
        transition: opacity 0.3s ease;
    }
    .demo-step.active {
        opacity: 1;
        outline: 1px solid #00eeff;
    }

    .hs__sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
    }
    .hs__track {
        display: flex;
        gap: 4vw;
        padding: 0 10vw;
        width: max-content;
        will-change: transform;
    }
    .hs__panel {
        width: 60vw;
        flex-shrink: 0;
    }
    .media-frame {
        border-radius: 16px;
        overflow: hidden;
        transform-style: preserve-3d;
    }
    .media-frame img {
        width: 100%;
        display: block;
    }

    .deep-features.layout-mobile .hs__sticky {
        position: static;
        height: auto;
        overflow: visible;
    }
    .deep-features.layout-mobile .hs__track {
        flex-direction: column;
        width: auto;
        padding: 0 1.5rem;
    }
    .deep-features.layout-mobile .hs__panel {
        width: 100%;
    }

    @media (prefers-reduced-motion: reduce) {
        .reveal-up, .reveal-fade {
            opacity: 1;
            transform: none;
            transition: none;
        }
        .icon-wrap {
            animation: none;
        }
        .hs__sticky {
            position: static;
            height: auto;
            overflow: visible;
        }
        .hs__track {
            flex-direction: column;
            width: auto;
        }
        .hs__panel {
            width: 100%;
        }
    }

    .faq {
        max-width: 760px;
        margin: 0 auto;
        padding: 4rem 2rem;
    }
    .faq-content.faq-revealing {
        animation: faqReveal 0.35s ease both;
    }
    @keyframes faqReveal {
        from { opacity: 0; transform: translateY(-6px); }
        to { opacity: 1; transform: none; }
    }
    .footer-links {
        display: flex;
        gap: 1rem;
        justify-content: center;
        padding: 2rem;
    }
"#;
