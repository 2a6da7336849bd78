//! Slide content and the validated slide deck.

use serde::{Deserialize, Serialize};

use super::CarouselError;

/// Alt text used when a slide has neither alt text nor a title.
pub const FALLBACK_ALT: &str = "Slide";

/// A single carousel slide.
///
/// Only `image` is required. Title, caption and bullets are rendered only when
/// present; an image-only slide renders without any text overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    /// Image reference (path or URL).
    pub image: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub alt: Option<String>,
    /// Feature bullets shown by the split layout.
    pub bullets: Vec<String>,
}

impl Slide {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// A slide is usable when its image reference is not blank.
    pub fn is_valid(&self) -> bool {
        !self.image.trim().is_empty()
    }

    /// Accessible description: alt text, then title, then a generic label.
    pub fn alt_text(&self) -> &str {
        non_blank(self.alt.as_deref())
            .or_else(|| non_blank(self.title.as_deref()))
            .unwrap_or(FALLBACK_ALT)
    }

    /// Title if present and non-blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Caption if present and non-blank.
    pub fn caption(&self) -> Option<&str> {
        non_blank(self.caption.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A non-empty, ordered list of valid slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck, dropping slides without an image.
    ///
    /// Fails with [`CarouselError::NoSlides`] if nothing usable remains.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        let total = slides.len();
        let slides: Vec<Slide> = slides.into_iter().filter(Slide::is_valid).collect();
        if slides.len() < total {
            tracing::warn!(
                dropped = total - slides.len(),
                "Ignoring slides without an image reference"
            );
        }
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slide at `index` modulo the deck length.
    pub fn wrapped(&self, index: usize) -> &Slide {
        &self.slides[index % self.slides.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
