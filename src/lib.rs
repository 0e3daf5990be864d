pub mod config;
pub mod content;
pub mod error;

pub mod state {
    pub mod controller;
    pub mod cursor;
    pub mod lifecycle;
    pub mod load;
    pub mod menu;
    pub mod navigation;
    pub mod scroll;
    pub mod sections;
}

pub mod dom {
    pub mod layout;
    pub mod subscriptions;
}

pub mod components {
    pub mod cursor;
    pub mod nav;
    pub mod scroll_top;
    pub mod sections;
}

pub mod pages {
    pub mod portfolio;
}

pub use content::Portfolio;
pub use pages::portfolio::PortfolioPage;
pub use state::controller::{PageAction, PageController};
