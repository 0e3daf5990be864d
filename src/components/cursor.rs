use yew::prelude::*;

use crate::state::cursor::CursorState;

#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub cursor: CursorState,
}

/// Decorative dot trailing the pointer. Position and size come straight from state.
#[function_component(CursorFollower)]
pub fn cursor_follower(props: &CursorProps) -> Html {
    let class = classes!("custom-cursor", props.cursor.highlighted.then(|| "highlighted"));
    html! {
        <div {class} style={props.cursor.style()}></div>
    }
}
