use web_sys::MouseEvent;
use yew::prelude::*;

use crate::classes::cn;
use crate::components::icons;
use crate::content::{self, NavLink, NAV_LINKS};
use crate::layout::Layout;
use crate::menu::MenuState;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub layout: Layout,
    pub menu: MenuState,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    /// Receives the anchor id of the activated section link.
    pub on_navigate: Callback<&'static str>,
}

/// Click handler that closes the menu and leaves the link's default action alone.
fn closing<E: 'static>(on_close: &Callback<()>) -> Callback<E> {
    let on_close = on_close.clone();
    Callback::from(move |_: E| on_close.emit(()))
}

fn nav_link(link: &NavLink, class: &'static str, on_navigate: &Callback<&'static str>) -> Html {
    let anchor = link.anchor;
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(anchor);
        })
    };
    html! {
        <a href={link.href()} class={class} {onclick}>{ link.label }</a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { layout, menu, on_toggle_menu, on_close_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-logo">
                    <div class="nav-logo-pulse"></div>
                    <img src={content::LOGO_SRC} width="70" height="70" alt="Logo" />
                </div>
                {
                    if layout.is_mobile() {
                        html! {}
                    } else {
                        html! {
                            <div class="nav-links">
                                { for NAV_LINKS.iter().map(|link| nav_link(link, "nav-link", on_navigate)) }
                            </div>
                        }
                    }
                }
                <div class="nav-actions">
                    <a href={content::whatsapp_link()} onclick={closing::<MouseEvent>(on_close_menu)}>
                        <button class="nav-cta">{"Solicitar Proposta"}</button>
                    </a>
                    {
                        if layout.is_mobile() {
                            html! {
                                <button
                                    class={cn([Some("menu-button"), menu.is_open().then_some("menu-button-open")])}
                                    aria-label={if menu.is_open() { "Fechar menu" } else { "Abrir menu" }}
                                    aria-expanded={menu.is_open().to_string()}
                                    onclick={toggle_menu}
                                >
                                    { if menu.is_open() { icons::close(24) } else { icons::menu(24) } }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </nav>
            {
                if layout.is_mobile() {
                    html! { <MobileMenu
                            open={menu.is_open()}
                            on_close={on_close_menu.clone()}
                            on_navigate={on_navigate.clone()}
                        /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<&'static str>,
}

/// Full-screen panel that slides down from the top while open.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div
            class={cn([Some("mobile-menu"), props.open.then_some("mobile-menu-open")])}
            aria-hidden={(!props.open).to_string()}
        >
            <div class="mobile-menu-links">
                { for NAV_LINKS.iter().map(|link| nav_link(link, "mobile-menu-link", &props.on_navigate)) }
            </div>
            <a
                href={content::whatsapp_link()}
                class="mobile-menu-cta"
                onclick={closing::<MouseEvent>(&props.on_close)}
            >{"Solicitar Proposta"}</a>
        </div>
    }
}
