pub mod audio_player;
pub mod background_effect;
pub mod blocks;
pub mod blog_card;
pub mod blog_content;
pub mod blog_list;
pub mod blog_post;
pub mod blog_post_header;
pub mod card;
pub mod error_screen;
pub mod navigation;
pub mod portfolio;
pub mod portfolio_card;
pub mod reading_progress;
pub mod share_links;
pub mod theme_switch;

pub use audio_player::AudioPlayer;
pub use background_effect::BackgroundEffect;
pub use blog_card::BlogCard;
pub use blog_content::BlogContent;
pub use blog_list::BlogList;
pub use blog_post::BlogPost;
pub use blog_post_header::BlogPostHeader;
pub use card::Card;
pub use error_screen::ErrorScreen;
pub use navigation::Navigation;
pub use portfolio::Portfolio;
pub use portfolio_card::PortfolioCard;
pub use reading_progress::ReadingProgress;
pub use share_links::ShareLinks;
pub use theme_switch::ThemeSwitch;
