use serde::{Deserialize, Serialize};

use super::post::ContentError;

/// Credit for a portfolio photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAuthor {
    pub name: String,
    pub username: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    #[serde(default)]
    pub author: Option<PhotoAuthor>,
}

/// One entry of the portfolio grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    /// Category label shown above the title, e.g. "Product Design".
    #[serde(alias = "type")]
    pub kind: String,
    pub desc: String,
    pub link: String,
    /// CSS gradient utility used when there is no photo or it fails to load.
    #[serde(default = "default_gradient")]
    pub gradient: String,
    #[serde(default)]
    pub photo: Option<Photo>,
}

fn default_gradient() -> String {
    "from-slate-500 to-slate-700".to_string()
}

impl PortfolioItem {
    /// Attribution line for the photo, if it has a credited author.
    pub fn photo_credit(&self) -> Option<String> {
        let author = self.photo.as_ref()?.author.as_ref()?;
        Some(format!("Photo by {} on Unsplash", author.name))
    }
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    items: Vec<PortfolioItem>,
}

/// Parses a `portfolio.toml` document made of `[[items]]` tables.
pub fn parse_portfolio(text: &str) -> Result<Vec<PortfolioItem>, ContentError> {
    let file: PortfolioFile = toml::from_str(text)?;
    Ok(file.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PORTFOLIO: &str = r#"
[[items]]
title = "Banking App"
type = "Product Design"
desc = "A mobile banking redesign"
link = "https://example.com/banking"
gradient = "from-blue-500 to-purple-600"

[items.photo]
url = "https://images.unsplash.com/photo-1"

[items.photo.author]
name = "Jane Doe"
username = "janedoe"
link = "https://unsplash.com/@janedoe"

[[items]]
title = "Design System"
kind = "Systems"
desc = "Tokens and components"
link = "https://example.com/system"
"#;

    #[test]
    fn parses_items_in_order() {
        let items = parse_portfolio(PORTFOLIO).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, "Product Design");
        assert_eq!(items[1].kind, "Systems");
        assert_eq!(items[1].gradient, "from-slate-500 to-slate-700");
        assert!(items[1].photo.is_none());
    }

    #[test]
    fn photo_credit_names_the_author() {
        let items = parse_portfolio(PORTFOLIO).unwrap();
        assert_eq!(
            items[0].photo_credit().as_deref(),
            Some("Photo by Jane Doe on Unsplash")
        );
        assert_eq!(items[1].photo_credit(), None);
    }

    #[test]
    fn empty_document_has_no_items() {
        assert!(parse_portfolio("").unwrap().is_empty());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = parse_portfolio("[[items]]\ntitle = \"x\"").unwrap_err();
        assert!(matches!(err, ContentError::InvalidPortfolio(_)));
    }
}
