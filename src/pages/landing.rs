use log::{info, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::anim::easing::Ease;
use crate::components::cursor::CustomCursor;
use crate::components::icons;
use crate::components::nav::Nav;
use crate::config::{self, EntranceConfig, RevealConfig, ScrollConfig};
use crate::content::{self, PortfolioItem, ProcessStep, PORTFOLIO_ITEMS, PROCESS_STEPS};
use crate::dom;
use crate::hooks::entrance::use_entrance;
use crate::hooks::scroll_reveal::use_scroll_reveal;
use crate::hooks::smooth_scroll::use_smooth_scroll;
use crate::layout::{self, Layout};
use crate::menu::{self, MenuState};

fn render_portfolio_card(item: &PortfolioItem) -> Html {
    html! {
        <a
            key={item.link}
            href={item.link}
            target="_blank"
            rel="noopener noreferrer"
            class="portfolio-card"
        >
            <div
                class="portfolio-card-thumb"
                style={format!("background-image: url({});", item.thumbnail)}
            ></div>
            <div class="portfolio-card-shade"></div>
            <div class="portfolio-card-top">
                <div class="portfolio-card-icon">{ icons::video(24) }</div>
                <span class="portfolio-card-tag">{ item.tag }</span>
            </div>
            <div class="portfolio-card-bottom">
                <div class="portfolio-card-watch">
                    <span>{"Watch Video"}</span>
                    <div class="portfolio-card-watch-line"></div>
                </div>
                <h3 class="portfolio-card-title">{ item.title }</h3>
                <div class="portfolio-card-bar"></div>
            </div>
            <div class="portfolio-card-glow"></div>
        </a>
    }
}

fn render_process_step(step: &ProcessStep) -> Html {
    html! {
        <div key={step.id} class="process-step">
            <span class="process-step-id">{ step.id }</span>
            <div>
                <h4>{ step.title }</h4>
                <p>{ step.description }</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let driver = use_smooth_scroll(ScrollConfig::default());
    let menu = use_state(MenuState::default);
    // Read by callbacks that may outlive the render they were built in.
    let current_menu = use_mut_ref(MenuState::default);
    let (width, _) = use_window_size();
    let layout = Layout::for_width(width);

    use_entrance(EntranceConfig::default());
    use_scroll_reveal(RevealConfig::default());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let set_menu = {
        let menu = menu.clone();
        let current_menu = current_menu.clone();
        let driver = driver.clone();
        Callback::from(move |next: MenuState| {
            let current = current_menu.replace(next);
            menu::transition(current, next, &driver);
            menu.set(next);
        })
    };

    let toggle_menu = {
        let set_menu = set_menu.clone();
        let current_menu = current_menu.clone();
        Callback::from(move |_: ()| {
            let next = current_menu.borrow().toggle();
            set_menu.emit(next);
        })
    };

    let close_menu = {
        let set_menu = set_menu.clone();
        let current_menu = current_menu.clone();
        Callback::from(move |_: ()| {
            let next = current_menu.borrow().close();
            set_menu.emit(next);
        })
    };

    let navigate = {
        let close_menu = close_menu.clone();
        let driver = driver.clone();
        Callback::from(move |anchor: &'static str| {
            // Closing first resumes the driver so it accepts the anchor scroll.
            close_menu.emit(());
            if let Err(e) = driver.scroll_to_anchor(anchor) {
                warn!("Section scroll failed: {}", e);
            }
            if let Err(e) = dom::replace_hash(anchor) {
                warn!("Failed to update URL fragment: {}", e);
            }
        })
    };

    // Hash changes count as a route change.
    {
        let close_menu = close_menu.clone();
        use_event_with_window("hashchange", move |_: Event| {
            close_menu.emit(());
        });
    }

    // The overlay only exists below the breakpoint.
    {
        let close_menu = close_menu.clone();
        use_effect_with_deps(
            move |layout: &Layout| {
                if !layout.is_mobile() && current_menu.borrow().is_open() {
                    close_menu.emit(());
                }
                || ()
            },
            layout,
        );
    }

    let whatsapp = content::whatsapp_link();
    let on_portfolio_click = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit("portfolio");
        })
    };

    html! {
        <main class="landing-page">
            <style>{ stylesheet() }</style>
            <CustomCursor />

            <div class="grain-overlay"></div>

            <Nav
                layout={layout}
                menu={*menu}
                on_toggle_menu={toggle_menu}
                on_close_menu={close_menu}
                on_navigate={navigate.clone()}
            />

            <section class="hero">
                <div class="hero-background">
                    <div class="hero-gradient"></div>
                    <video autoplay={true} muted={true} loop={true} playsinline={true} class="hero-video">
                        <source src={content::HERO_VIDEO_SRC} type="video/mp4" />
                    </video>
                </div>

                <div class="container hero-content">
                    <h1 class="hero-text hero-title">
                        {"CONSTRUINDO"}<br />
                        <span class="accent">{"VISÃO."}</span>
                    </h1>
                    <div class="hero-text hero-copy">
                        <p>{"Produção de vídeo profissional: Comerciais, aftermovies e reels com direção estratégica."}</p>
                        <div class="hero-cta-group">
                            <a href={whatsapp.clone()}>
                                <button class="hero-cta">{"Iniciar Projeto"}{ icons::arrow_up_right(20) }</button>
                            </a>
                            <a href="/#portfolio" onclick={on_portfolio_click}>
                                <button class="hero-secondary">{"Portfolio"}</button>
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <div class="container">
                    <div class="portfolio-header">
                        <h2>
                            {"Projetos"}<br />
                            <span class="muted">{"Selecionados"}</span>
                        </h2>
                        <div class="portfolio-kicker">{"// Excelência Visual"}</div>
                    </div>
                    <div class="portfolio-grid">
                        { for PORTFOLIO_ITEMS.iter().map(render_portfolio_card) }
                    </div>
                </div>
            </section>

            <section class="reveal-section">
                <div class="container">
                    <h2 class="reveal-content">
                        {"Imagem é posicionamento."}<br /><br />
                        {"O vídeo não é apenas registro."}<br /><br />
                        {"É construção de percepção."}
                    </h2>
                </div>
            </section>

            <section id="processo" class="process">
                <div class="container process-grid">
                    <div>
                        <h2>{"Processo"}<br />{"Estruturado."}</h2>
                        <div class="process-steps">
                            { for PROCESS_STEPS.iter().map(render_process_step) }
                        </div>
                    </div>
                    <div class="process-photo">
                        <img src={content::DIRECTOR_PHOTO_SRC} alt="Matteo-Bonvento" width="1000" height="1000" loading="lazy" />
                    </div>
                </div>
            </section>

            <section class="cta">
                <div
                    class="cta-marquee"
                    aria-hidden="true"
                    style={format!(
                        "animation-duration: {}s; animation-timing-function: {};",
                        config::MARQUEE_DURATION_S,
                        Ease::Linear.css()
                    )}
                >
                    { content::MARQUEE_TEXT }
                </div>
                <a href={whatsapp}>
                    <div class="cta-content">
                        <h2>{"Bora Gerar"}<br />{"Impacto."}</h2>
                        <button class="cta-button">{"Solicitar Orçamento"}</button>
                    </div>
                </a>
            </section>

            <footer id="contato" class="footer">
                <div class="container footer-content">
                    <div>
                        <div class="footer-handle">
                            <a href={content::INSTAGRAM_URL}>{ content::INSTAGRAM_HANDLE }</a>
                        </div>
                        <p class="footer-follow">{"Clica e Me Segue!"}</p>
                    </div>
                    <div class="footer-social">
                        <a href={content::INSTAGRAM_URL} aria-label="Instagram">{ icons::instagram(24) }</a>
                    </div>
                    <div class="footer-rights">
                        {"Todos os direitos reservados - Matteo Bonvento"}
                    </div>
                </div>
            </footer>
        </main>
    }
}

/// Page stylesheet. Responsive rules use the same breakpoint as `Layout`.
fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    css.push_str(&format!(
        "@media {} {{{}.mobile-menu {{ transition: transform 0.5s {}; }}}}",
        layout::mobile_media_query(),
        MOBILE_CSS,
        Ease::Power4Out.css()
    ));
    css.push_str(&format!("@media {} {{{}}}", layout::desktop_media_query(), DESKTOP_CSS));
    css.push_str(&format!(
        ".grain-overlay {{ background-image: url('{}'); }}",
        content::GRAIN_TEXTURE_URL
    ));
    css
}

const BASE_CSS: &str = r#"
    html {
        scroll-behavior: auto;
    }
    body {
        margin: 0;
        background: #080808;
    }
    .landing-page {
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #080808;
        color: #fff;
    }
    .landing-page ::selection {
        background: #00FF41;
        color: #000;
    }
    .landing-page a {
        color: inherit;
        text-decoration: none;
    }
    .landing-page button {
        cursor: pointer;
        font-family: inherit;
        border: none;
    }
    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .accent {
        color: #00FF41;
    }
    .muted {
        color: #27272a;
    }

    .custom-cursor {
        position: fixed;
        top: 0;
        left: 0;
        width: 1.5rem;
        height: 1.5rem;
        border: 1px solid #00FF41;
        border-radius: 50%;
        pointer-events: none;
        z-index: 9999;
        mix-blend-mode: difference;
        display: flex;
        align-items: center;
        justify-content: center;
        transform: translate(-50%, -50%);
        will-change: transform;
    }
    .custom-cursor-dot {
        width: 0.25rem;
        height: 0.25rem;
        background: #00FF41;
        border-radius: 50%;
    }

    .grain-overlay {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 9998;
        opacity: 0.03;
    }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        box-sizing: border-box;
        z-index: 50;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 2.5rem 1.5rem;
        backdrop-filter: blur(12px);
        background: rgba(0, 0, 0, 0.1);
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .nav-links {
        display: flex;
        gap: 2.5rem;
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.4em;
        font-weight: 700;
        color: #71717a;
    }
    .nav-link {
        transition: color 0.3s ease;
        text-underline-offset: 8px;
    }
    .nav-link:hover {
        color: #00FF41;
        text-decoration: underline;
    }
    .nav-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .nav-cta {
        background: #fff;
        color: #000;
        padding: 0.5rem 1.5rem;
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        transition: background 0.3s ease;
    }
    .nav-cta:hover {
        background: #00FF41;
    }
    .menu-button {
        background: transparent;
        color: #fff;
        padding: 0.25rem;
        display: flex;
        z-index: 60;
    }
    .menu-button-open {
        color: #00FF41;
    }

    .hero {
        position: relative;
        height: 100vh;
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
    }
    .hero-gradient {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: linear-gradient(to bottom, #000, transparent, #080808);
    }
    .hero-video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: grayscale(1) brightness(0.4);
        opacity: 0.3;
    }
    .hero-content {
        position: relative;
        z-index: 20;
        width: 100%;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 900;
        line-height: 0.8;
        letter-spacing: -0.05em;
        margin: 0 0 2.5rem 0;
    }
    .hero-copy {
        max-width: 42rem;
        border-left: 1px solid #00FF41;
        padding: 0.5rem 0 0.5rem 2rem;
    }
    .hero-copy p {
        font-size: 1.25rem;
        color: #a1a1aa;
        font-weight: 300;
        margin: 0 0 1.5rem 0;
        text-transform: uppercase;
        letter-spacing: -0.025em;
        line-height: 1.375;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .hero-cta {
        background: #00FF41;
        color: #000;
        padding: 1.25rem 2.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        transition: transform 0.3s ease;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-secondary {
        background: transparent;
        border: 1px solid #27272a !important;
        color: #fff;
        padding: 1.25rem 2.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        transition: border-color 0.3s ease;
    }
    .hero-secondary:hover {
        border-color: #fff !important;
    }

    .portfolio {
        padding: 8rem 1.5rem;
        background: #000;
        border-top: 1px solid #18181b;
        border-bottom: 1px solid #18181b;
    }
    .portfolio-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        margin-bottom: 6rem;
    }
    .portfolio-header h2 {
        font-size: 3rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        text-transform: uppercase;
        line-height: 1;
        margin: 0;
    }
    .portfolio-kicker {
        display: none;
        color: #71717a;
        font-family: monospace;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin-bottom: 1rem;
    }
    .portfolio-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1px;
        background: #18181b;
    }
    .portfolio-card {
        position: relative;
        height: 650px;
        overflow: hidden;
        padding: 3rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        background: #000;
        box-sizing: border-box;
    }
    .portfolio-card-thumb {
        position: absolute;
        inset: 0;
        z-index: 0;
        background-size: cover;
        background-position: center;
        filter: grayscale(1);
        opacity: 0.4;
        transition: all 1s ease-in-out;
    }
    .portfolio-card:hover .portfolio-card-thumb {
        filter: grayscale(0);
        transform: scale(1.1);
        opacity: 0.6;
    }
    .portfolio-card-shade {
        position: absolute;
        inset: 0;
        z-index: 1;
        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.2), transparent);
    }
    .portfolio-card-top {
        position: relative;
        z-index: 10;
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
    }
    .portfolio-card-icon {
        color: #00FF41;
        padding: 0.75rem;
        border: 1px solid rgba(0, 255, 65, 0.2);
        border-radius: 50%;
        backdrop-filter: blur(4px);
        display: flex;
        transition: all 0.5s ease;
    }
    .portfolio-card:hover .portfolio-card-icon {
        background: #00FF41;
        color: #000;
    }
    .portfolio-card-tag {
        font-size: 10px;
        font-family: monospace;
        letter-spacing: 0.3em;
        color: #71717a;
        transition: color 0.3s ease;
    }
    .portfolio-card:hover .portfolio-card-tag {
        color: #00FF41;
    }
    .portfolio-card-bottom {
        position: relative;
        z-index: 10;
    }
    .portfolio-card-watch {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
        opacity: 0;
        transform: translateY(1rem);
        transition: all 0.5s ease;
        color: #00FF41;
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
    .portfolio-card:hover .portfolio-card-watch {
        opacity: 1;
        transform: translateY(0);
    }
    .portfolio-card-watch-line {
        height: 1px;
        width: 3rem;
        background: #00FF41;
    }
    .portfolio-card-title {
        font-size: 2.25rem;
        font-weight: 900;
        margin: 0 0 1.5rem 0;
        letter-spacing: -0.05em;
        text-transform: uppercase;
        line-height: 1;
    }
    .portfolio-card-bar {
        height: 0.25rem;
        width: 0;
        background: #00FF41;
        transition: width 0.7s ease-out;
    }
    .portfolio-card:hover .portfolio-card-bar {
        width: 100%;
    }
    .portfolio-card-glow {
        position: absolute;
        inset: 0;
        z-index: 2;
        opacity: 0;
        pointer-events: none;
        transition: opacity 1s ease;
        background: radial-gradient(circle at center, rgba(0, 255, 65, 0.1), transparent, transparent);
    }
    .portfolio-card:hover .portfolio-card-glow {
        opacity: 1;
    }

    .reveal-section {
        padding: 15rem 0;
        background: #fff;
        color: #000;
        overflow: hidden;
        text-align: center;
    }
    .reveal-content {
        font-size: 3rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        line-height: 0.85;
        text-transform: uppercase;
        margin: 0;
    }

    .process {
        padding: 10rem 1.5rem;
        background: #080808;
    }
    .process-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 5rem;
        align-items: center;
    }
    .process h2 {
        font-size: 3.75rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        margin: 0 0 2.5rem 0;
        text-transform: uppercase;
        text-decoration: underline;
        text-decoration-color: #00FF41;
    }
    .process-steps {
        display: flex;
        flex-direction: column;
        gap: 3rem;
    }
    .process-step {
        display: flex;
        gap: 2rem;
    }
    .process-step-id {
        color: #00FF41;
        font-weight: 900;
        font-size: 1.5rem;
        transition: transform 0.3s ease;
    }
    .process-step:hover .process-step-id {
        transform: scale(1.25);
    }
    .process-step h4 {
        font-size: 1.25rem;
        font-weight: 700;
        text-transform: uppercase;
        margin: 0 0 0.5rem 0;
    }
    .process-step p {
        color: #71717a;
        font-size: 0.875rem;
        line-height: 1.625;
        max-width: 20rem;
        margin: 0;
    }
    .process-photo {
        width: 100%;
        height: 600px;
        border-radius: 2rem;
        border: 1px solid #18181b;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .process-photo img {
        width: 100%;
        height: auto;
    }

    .cta {
        padding: 10rem 1.5rem;
        background: #00FF41;
        color: #000;
        text-align: center;
        position: relative;
        overflow: hidden;
    }
    @keyframes marquee {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .cta-marquee {
        position: absolute;
        top: 0;
        left: 0;
        white-space: nowrap;
        font-size: 15rem;
        font-weight: 900;
        opacity: 0.1;
        pointer-events: none;
        user-select: none;
        animation-name: marquee;
        animation-iteration-count: infinite;
    }
    .cta-content {
        position: relative;
        z-index: 10;
    }
    .cta h2 {
        font-size: 3.75rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        margin: 0 0 3rem 0;
        text-transform: uppercase;
        line-height: 1;
    }
    .cta-button {
        background: #000;
        color: #00FF41;
        padding: 2.5rem 5rem;
        font-size: 1.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        transition: transform 0.3s ease;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .cta-button:hover {
        transform: scale(1.1);
    }
    .cta-button:active {
        transform: scale(0.95);
    }

    .footer {
        padding: 5rem 1.5rem;
        background: #000;
        border-top: 1px solid #18181b;
    }
    .footer-content {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        align-items: center;
        gap: 3rem;
    }
    .footer-handle {
        font-size: 1.875rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        color: #00FF41;
    }
    .footer-follow {
        color: #52525b;
        font-size: 10px;
        margin-top: 0.5rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-align: center;
        text-transform: uppercase;
    }
    .footer-social a {
        color: #71717a;
        transition: color 0.3s ease;
    }
    .footer-social a:hover {
        color: #fff;
    }
    .footer-rights {
        font-family: monospace;
        font-size: 9px;
        text-transform: uppercase;
        letter-spacing: -0.05em;
    }
"#;

const MOBILE_CSS: &str = r#"
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 40;
        background: #080808;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        gap: 3rem;
        transform: translateY(-100%);
        pointer-events: none;
    }
    .mobile-menu-open {
        transform: translateY(0);
        pointer-events: auto;
    }
    .mobile-menu-links {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2rem;
    }
    .mobile-menu-link {
        font-size: 2.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: -0.05em;
    }
    .mobile-menu-link:hover {
        color: #00FF41;
    }
    .mobile-menu-cta {
        background: #00FF41;
        color: #000 !important;
        padding: 1rem 2.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
"#;

const DESKTOP_CSS: &str = r#"
    .top-nav {
        padding: 2.5rem 3rem;
    }
    .hero-title {
        font-size: 9rem;
    }
    .hero-copy p {
        font-size: 1.5rem;
    }
    .portfolio {
        padding: 8rem 3rem;
    }
    .portfolio-header h2 {
        font-size: 6rem;
    }
    .portfolio-kicker {
        display: block;
    }
    .portfolio-grid {
        grid-template-columns: repeat(3, 1fr);
    }
    .reveal-content {
        font-size: 7.5rem;
    }
    .process {
        padding: 10rem 3rem;
    }
    .process-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .cta h2 {
        font-size: 10rem;
    }
    .footer {
        padding: 5rem 3rem;
    }
    .footer-content {
        flex-direction: row;
    }
"#;
