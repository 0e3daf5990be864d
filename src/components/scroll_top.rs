use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <div class={classes!("scroll-to-top", props.visible.then(|| "visible"))}>
            <button {onclick} class="scroll-to-top-button" aria-label="scroll to top">
                {"↑"}
            </button>
        </div>
    }
}
