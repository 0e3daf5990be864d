use devfolio::{config, Portfolio, PortfolioPage};
use log::{error, info};
use yew::prelude::*;

fn load_content() -> Portfolio {
    match Portfolio::bundled() {
        Ok(content) => content,
        Err(err) => {
            error!("{}", err);
            Portfolio::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());

    html! {
        <PortfolioPage {content} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
