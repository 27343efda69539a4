//! TUI widgets for the birthday countdown

pub mod balloons;
pub mod banner;
pub mod countdown;
pub mod poem;

pub use balloons::BalloonsWidget;
pub use banner::BannerWidget;
pub use countdown::CountdownWidget;
pub use poem::PoemWidget;
