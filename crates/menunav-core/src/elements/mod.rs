//! Widget kinds.

mod button;
mod decoration;
mod list;
mod name_grid;
mod playlist;
mod slider;

pub use button::Button;
pub use decoration::{Background, Equalizer, ParticleEffect, Static, Text};
pub use list::SongList;
pub use name_grid::{MAX_TILES, NameGrid};
pub use playlist::Playlist;
pub use slider::Slider;
