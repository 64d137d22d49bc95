pub mod entity;
pub mod page;

pub use entity::{Anime, AnimeId, AnimeTitle, CoverImage};
pub use page::{Page, PageInfo};
