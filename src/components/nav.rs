use yew::prelude::*;

use crate::content::Brand;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub sections: Vec<String>,
    pub active: String,
    pub menu_open: bool,
    pub header_style: AttrValue,
    pub on_navigate: Callback<String>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        brand,
        sections,
        active,
        menu_open,
        header_style,
        on_navigate,
        on_toggle_menu,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_button = |section: &String, class: &'static str, with_indicator: bool| {
        let is_active = section == active;
        let onclick = {
            let on_navigate = on_navigate.clone();
            let section = section.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(section.clone()))
        };
        let class = classes!(class, is_active.then(|| "active"));
        html! {
            <button key={section.clone()} {onclick} {class}>
                {section}
                {
                    if with_indicator && is_active {
                        html! { <span class="nav-indicator"></span> }
                    } else {
                        html! {}
                    }
                }
            </button>
        }
    };

    html! {
        <header class="header" style={header_style.clone()}>
            <div class="container header-container">
                <h1 class="logo">{&brand.primary}<span>{&brand.accent}</span></h1>

                <nav class="desktop-nav">
                    { for sections.iter().map(|section| nav_button(section, "nav-item", true)) }
                </nav>

                <button onclick={toggle_menu} class="mobile-menu-button" aria-label="menu">
                    {
                        if *menu_open {
                            html! { <span class="menu-icon close">{"✕"}</span> }
                        } else {
                            html! {
                                <span class="menu-icon burger">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </span>
                            }
                        }
                    }
                </button>
            </div>

            <div class={classes!("mobile-menu", menu_open.then(|| "open"))}>
                <div class="mobile-menu-items">
                    {
                        for sections
                            .iter()
                            .map(|section| nav_button(section, "mobile-nav-item", false))
                    }
                </div>
            </div>
        </header>
    }
}
