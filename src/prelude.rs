//! Prelude module for convenient imports.
//!
//! ```ignore
//! use listick::prelude::*;
//! ```
//!
//! This will import:
//! - Core application types (App, Page, Focus, AppMessage)
//! - Carousel types (Carousel, CarouselConfig, Slide, Direction)
//! - Forms (NewsletterForm, ContactForm, SubmitStatus)
//! - Store and platform ports
//! - UI types (render function, LayoutContext)

// Core application types
pub use crate::app::{App, AppMessage, Focus, Page};

// Carousel
pub use crate::carousel::{
    AspectRatio, Carousel, CarouselConfig, CarouselError, CarouselLayout, Direction, ImageFit,
    Slide, SlideDeck,
};

// Forms
pub use crate::forms::{ContactField, ContactForm, NewsletterForm, SubmitStatus};

// Errors
pub use crate::error::{FormError, ListickError, ListickResult};

// Ports
pub use crate::traits::{
    DocumentStore, MotionPreference, PlatformPorts, StoreError, VisibilitySource,
};

// Startup
pub use crate::startup::{SiteConfig, StartupConfig, StoreKind};

// UI types
pub use crate::ui::{render, LayoutContext};
