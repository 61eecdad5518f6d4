pub mod app;
pub mod nav;
pub mod ranking;
pub mod not_found;

pub use app::{describe_app, render_app, AppView, ContentView};
pub use nav::{describe_nav, render_nav, NavLink, NavView};
pub use ranking::{render_ranking, RankingView};
pub use not_found::render_not_found;
