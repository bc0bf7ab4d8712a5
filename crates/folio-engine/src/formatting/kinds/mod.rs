pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod numbered_point;
pub mod paragraph;
pub mod subheading;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::BulletList;
pub use numbered_point::NumberedPoint;
pub use paragraph::Paragraph;
pub use subheading::Subheading;
