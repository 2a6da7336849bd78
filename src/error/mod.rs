//! Unified error handling.
//!
//! - **Error categories**: high-level classification for handling decisions
//! - **Domain errors**: form, terminal and system errors, plus the leaf
//!   errors of the carousel and store boundaries
//! - **Unified error**: [`ListickError`] with [`ListickResult`]
//! - **Context**: [`ErrorContext`] attached through [`ResultExt`]
//!
//! # Example
//!
//! ```ignore
//! use listick::error::{ErrorContext, ListickResult, ResultExt};
//!
//! fn load(path: &std::path::Path) -> ListickResult<String> {
//!     std::fs::read_to_string(path).with_context(|| {
//!         ErrorContext::new("load_config").with_target(path.display().to_string())
//!     })
//! }
//! ```
//!
//! | Category | Typical source | Retryable |
//! |----------|----------------|-----------|
//! | Network | store transport failure | Yes |
//! | Server | store 5xx / 429 | Yes |
//! | Client | store rejected request | No |
//! | User | form validation | No |
//! | System | filesystem, terminal | No |
//! | Configuration | settings, missing project | No |

mod category;
mod context;
mod form;
mod listick_error;
mod result;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use form::FormError;
pub use listick_error::ListickError;
pub use result::{ListickResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
