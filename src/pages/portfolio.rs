use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::cursor::CursorFollower;
use crate::components::nav::Nav;
use crate::components::scroll_top::ScrollToTop;
use crate::components::sections::{About, ContactSection, Footer, Hero, Projects};
use crate::config::{DEFAULT_SECTION, SECTION_IDS};
use crate::content::Portfolio;
use crate::dom::layout::{measure_sections, smooth_scroll_to};
use crate::dom::subscriptions::PageSubscriptions;
use crate::state::controller::{PageAction, PageController};
use crate::state::scroll::{header_style, hero_style};

#[derive(Properties, PartialEq)]
pub struct PortfolioPageProps {
    pub content: Rc<Portfolio>,
}

#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let page = use_reducer_eq(PageController::default);

    // Register once on mount; the cleanup drops every listener and the load timer.
    {
        let dispatcher = page.dispatcher();
        use_effect_with_deps(
            move |_| {
                let dispatch =
                    Callback::from(move |action: PageAction| dispatcher.dispatch(action));
                let subscriptions = match PageSubscriptions::attach(dispatch) {
                    Ok(subscriptions) => Some(subscriptions),
                    Err(err) => {
                        warn!("Page listeners not attached: {}", err);
                        None
                    }
                };
                move || drop(subscriptions)
            },
            (),
        );
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |id: String| {
            // Offsets shift once images load, so read them at click time.
            let measured = match measure_sections(&SECTION_IDS) {
                Ok(registry) => Some(registry),
                Err(err) => {
                    warn!("Using last known layout: {}", err);
                    None
                }
            };
            let Some((command, actions)) = page.plan_navigation(measured, &id) else {
                return;
            };
            if let Err(err) = smooth_scroll_to(command.scroll_top) {
                warn!("Smooth scroll failed: {}", err);
            }
            for action in actions {
                page.dispatch(action);
            }
        })
    };

    let on_explore = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(DEFAULT_SECTION.to_string()))
    };

    let on_toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::ToggleMenu))
    };

    let on_scroll_top = Callback::from(|_: ()| {
        if let Err(err) = smooth_scroll_to(0.0) {
            warn!("Smooth scroll failed: {}", err);
        }
    });

    let flags = page.flags();
    let content = &props.content;
    let sections: Vec<String> = SECTION_IDS.iter().map(|id| id.to_string()).collect();

    html! {
        <div class={classes!("app-container", page.load.is_loaded.then(|| "loaded"))}>
            <style>{PAGE_CSS}</style>
            <div class="background-gradient"></div>

            <Nav
                brand={content.brand.clone()}
                {sections}
                active={page.scroll.active_section.clone()}
                menu_open={page.menu.is_open}
                header_style={header_style(flags)}
                {on_navigate}
                {on_toggle_menu}
            />

            <Hero
                owner={content.owner.clone()}
                photo={content.photo.clone()}
                tagline={content.tagline.clone()}
                style={hero_style(page.scroll.scroll_y)}
                {on_explore}
            />

            <About content={Rc::clone(content)} />
            <Projects content={Rc::clone(content)} />
            <ContactSection content={Rc::clone(content)} />
            <Footer content={Rc::clone(content)} />

            <CursorFollower cursor={page.cursor} />
            <ScrollToTop visible={flags.scroll_top_visible} on_click={on_scroll_top} />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    * {
        box-sizing: border-box;
        margin: 0;
        padding: 0;
    }
    body {
        background: #0a0a0a;
        color: #e5e5e5;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
            Helvetica, Arial, sans-serif;
        cursor: none;
    }
    .app-container {
        position: relative;
        overflow-x: hidden;
        opacity: 0;
        transition: opacity 0.6s ease-out;
    }
    .app-container.loaded {
        opacity: 1;
    }
    .background-gradient {
        position: fixed;
        inset: 0;
        background: radial-gradient(circle at 20% 20%, rgba(168, 85, 247, 0.15), transparent 50%),
                    radial-gradient(circle at 80% 80%, rgba(59, 130, 246, 0.12), transparent 50%);
        z-index: -1;
    }
    .container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 50;
        transition: background-color 0.3s ease, backdrop-filter 0.3s ease;
    }
    .header-container {
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 72px;
    }
    .logo {
        font-size: 1.5rem;
        font-weight: 800;
        letter-spacing: 0.1em;
    }
    .logo span {
        color: #a855f7;
    }
    .desktop-nav {
        display: flex;
        gap: 2rem;
    }
    .nav-item, .mobile-nav-item {
        position: relative;
        background: none;
        border: none;
        color: #a3a3a3;
        font-size: 1rem;
        text-transform: capitalize;
        cursor: none;
        transition: color 0.3s ease;
    }
    .nav-item.active, .mobile-nav-item.active, .nav-item:hover {
        color: #fff;
    }
    .nav-indicator {
        position: absolute;
        left: 0;
        bottom: -6px;
        width: 100%;
        height: 2px;
        background: #a855f7;
    }
    .mobile-menu-button {
        display: none;
        background: none;
        border: none;
        color: #fff;
        cursor: none;
    }
    .menu-icon.burger span {
        display: block;
        width: 22px;
        height: 2px;
        margin: 5px 0;
        background: #fff;
    }
    .mobile-menu {
        max-height: 0;
        overflow: hidden;
        background: rgba(0, 0, 0, 0.95);
        transition: max-height 0.3s ease;
    }
    .mobile-menu.open {
        max-height: 300px;
    }
    .mobile-menu-items {
        display: flex;
        flex-direction: column;
        padding: 1rem 1.5rem;
        gap: 1rem;
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        text-align: center;
    }
    .profile-photo {
        width: 160px;
        height: 160px;
        border-radius: 50%;
        object-fit: cover;
        border: 3px solid rgba(168, 85, 247, 0.6);
    }
    .hero-title {
        font-size: 3.5rem;
        margin-top: 1.5rem;
    }
    .hero-tagline {
        color: #a3a3a3;
        margin: 1rem 0 2rem;
    }
    .divider {
        color: #a855f7;
    }
    .cta-button {
        position: relative;
        overflow: hidden;
        padding: 0.9rem 2rem;
        border: 1px solid #a855f7;
        border-radius: 999px;
        background: transparent;
        color: #fff;
        cursor: none;
    }
    .cta-button-bg {
        position: absolute;
        inset: 0;
        background: #a855f7;
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.3s ease;
    }
    .cta-button:hover .cta-button-bg {
        transform: scaleX(1);
    }
    .cta-button-text {
        position: relative;
    }
    .animate-fadeInUp {
        display: inline-block;
        opacity: 0;
        transform: translateY(20px);
        animation: fadeInUp 0.8s ease-out forwards;
    }
    .animation-delay-200 {
        animation-delay: 0.2s;
    }
    .animation-delay-400 {
        animation-delay: 0.4s;
    }
    @keyframes fadeInUp {
        to { opacity: 1; transform: translateY(0); }
    }
    .decorative-circle {
        position: absolute;
        border-radius: 50%;
        filter: blur(60px);
        background: rgba(168, 85, 247, 0.15);
        pointer-events: none;
    }
    .circle-1 { width: 300px; height: 300px; top: 10%; left: -80px; }
    .circle-2 { width: 200px; height: 200px; bottom: 10%; right: -60px; }
    .circle-3 { width: 250px; height: 250px; top: 20%; right: -100px; }
    .circle-4 { width: 300px; height: 300px; bottom: 0; left: -120px; }
    .circle-5 { width: 220px; height: 220px; top: 30%; right: -80px; }
    .section {
        position: relative;
        padding: 6rem 0;
    }
    .section-title {
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .title-underline {
        width: 60px;
        height: 3px;
        margin-top: 0.5rem;
        background: #a855f7;
    }
    .section-text {
        color: #d4d4d4;
        line-height: 1.7;
    }
    .mb-12 {
        margin-top: 1rem;
    }
    .skills-grid, .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
        margin-top: 2.5rem;
    }
    .skill-card, .contact-card, .project-card {
        padding: 1.25rem;
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.03);
        transition: transform 0.3s ease, border-color 0.3s ease;
    }
    .skill-card:hover, .project-card:hover {
        transform: translateY(-4px);
        border-color: rgba(168, 85, 247, 0.5);
    }
    .projects-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
    }
    .project-title {
        margin-bottom: 0.75rem;
    }
    .project-description {
        color: #a3a3a3;
        line-height: 1.6;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin: 1rem 0;
    }
    .project-tag {
        padding: 0.2rem 0.7rem;
        border-radius: 999px;
        font-size: 0.8rem;
        background: rgba(168, 85, 247, 0.15);
        color: #d8b4fe;
    }
    .project-link, .contact-link, .social-link {
        background: none;
        border: none;
        color: #a855f7;
        text-decoration: none;
        cursor: none;
    }
    .contact-card-header {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
    }
    .social-links {
        display: flex;
        gap: 1.5rem;
        margin-top: 2.5rem;
    }
    .footer {
        padding: 2rem 0;
        text-align: center;
        color: #737373;
        border-top: 1px solid rgba(255, 255, 255, 0.06);
    }
    .custom-cursor {
        position: fixed;
        border-radius: 50%;
        pointer-events: none;
        transform: translate(-50%, -50%);
        transition: width 0.2s ease, height 0.2s ease, background-color 0.2s ease;
        z-index: 100;
    }
    .scroll-to-top {
        position: fixed;
        right: 2rem;
        bottom: 2rem;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
    }
    .scroll-to-top.visible {
        opacity: 1;
        pointer-events: auto;
    }
    .scroll-to-top-button {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        border: none;
        background: #a855f7;
        color: #fff;
        font-size: 1.25rem;
        cursor: none;
    }
    @media (max-width: 768px) {
        .desktop-nav {
            display: none;
        }
        .mobile-menu-button {
            display: block;
        }
        .hero-title {
            font-size: 2.5rem;
        }
        .custom-cursor {
            display: none;
        }
        body, button, a {
            cursor: auto;
        }
    }
"#;
