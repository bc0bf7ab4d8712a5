pub mod collection;
pub mod portfolio;
pub mod post;

pub use collection::PostCollection;
pub use portfolio::{Photo, PhotoAuthor, PortfolioItem, parse_portfolio};
pub use post::{AudioTrack, ContentError, Post};
