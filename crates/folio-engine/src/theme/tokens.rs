use super::background::BackgroundKind;

/// Class names for each block kind the formatter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyles {
    pub title: &'static str,
    pub heading: &'static str,
    pub subheading_h3: &'static str,
    pub paragraph: &'static str,
    pub list: &'static str,
    pub list_item: &'static str,
    pub numbered_label: &'static str,
    pub numbered_text: &'static str,
    pub code: &'static str,
    pub quote: &'static str,
    pub section_break: &'static str,
    pub subheading: &'static str,
}

impl BlockStyles {
    /// Class for a heading of the given level; levels past 3 use the level 3 class.
    pub fn heading(&self, level: u8) -> &'static str {
        match level {
            0 | 1 => self.title,
            2 => self.heading,
            _ => self.subheading_h3,
        }
    }
}

/// Everything a component needs to know about the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    /// Class on the app root; the stylesheet keys its colour variables on it.
    pub root: &'static str,
    pub text: &'static str,
    pub meta_text: &'static str,
    pub description_text: &'static str,
    pub image_overlay: &'static str,
    pub tag_chip: &'static str,
    pub share_button: &'static str,
    pub audio_surface: &'static str,
    pub background: BackgroundKind,
    /// Twinkling stars drawn over the gradient background.
    pub stars: usize,
    pub blocks: BlockStyles,
}

const SHARED_BLOCKS: BlockStyles = BlockStyles {
    title: "block-title",
    heading: "block-heading",
    subheading_h3: "block-heading-3",
    paragraph: "block-paragraph",
    list: "block-list",
    list_item: "block-list-item",
    numbered_label: "block-numbered-label",
    numbered_text: "block-numbered-text",
    code: "block-code",
    quote: "block-quote",
    section_break: "block-section-break",
    subheading: "block-subheading",
};

pub const LIGHT: StyleTokens = StyleTokens {
    root: "theme-light",
    text: "text-ink",
    meta_text: "text-muted",
    description_text: "text-soft",
    image_overlay: "overlay-soft",
    tag_chip: "chip chip-soft",
    share_button: "share-button share-button-light",
    audio_surface: "audio-surface audio-surface-light",
    background: BackgroundKind::DesignCode,
    stars: 0,
    blocks: BlockStyles {
        code: "block-code block-code-light",
        quote: "block-quote block-quote-light",
        ..SHARED_BLOCKS
    },
};

pub const DARK: StyleTokens = StyleTokens {
    root: "theme-dark",
    text: "text-theme",
    meta_text: "text-theme text-dim",
    description_text: "text-theme text-faint",
    image_overlay: "overlay-deep",
    tag_chip: "chip chip-strong",
    share_button: "share-button",
    audio_surface: "audio-surface",
    background: BackgroundKind::Particles,
    stars: 0,
    blocks: SHARED_BLOCKS,
};

pub const COLORFUL: StyleTokens = StyleTokens {
    root: "theme-colorful",
    text: "text-theme",
    meta_text: "text-theme text-dim",
    description_text: "text-theme text-faint",
    image_overlay: "overlay-deep",
    tag_chip: "chip chip-strong",
    share_button: "share-button",
    audio_surface: "audio-surface audio-surface-glow",
    background: BackgroundKind::Gradient,
    stars: 50,
    blocks: BlockStyles {
        section_break: "block-section-break block-section-break-glow",
        ..SHARED_BLOCKS
    },
};

/// Visual accent of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Muted,
}

impl CardVariant {
    /// Rotates primary, secondary, tertiary down a list of cards.
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => CardVariant::Primary,
            1 => CardVariant::Secondary,
            _ => CardVariant::Tertiary,
        }
    }

    pub fn glow_class(self) -> &'static str {
        match self {
            CardVariant::Primary => "theme-card-glow theme-card-glow-primary",
            CardVariant::Secondary => "theme-card-glow theme-card-glow-secondary",
            CardVariant::Tertiary => "theme-card-glow theme-card-glow-tertiary",
            CardVariant::Muted => "theme-card-glow theme-card-glow-muted",
        }
    }
}
