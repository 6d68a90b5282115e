mod card;
mod placeholder;
mod stats_row;
pub mod tilt;
mod type_badge;

pub use card::pokemon_card;
