//! Views: the pages a polls front end serves
//!
//! Each view returns a [`Page`] carrying a status, the rendered body and the
//! data it was rendered from.

pub mod page;
pub mod polls;

pub use page::{IndexContext, Page, StatusCode};
pub use polls::PollsViews;
