pub mod entity;
pub mod invariants;
pub mod price;
pub mod tags;
pub mod view;

pub use entity::{Game, GameId, NewGame};
pub use price::Price;
pub use tags::parse_theme_tags;
pub use view::GameView;
