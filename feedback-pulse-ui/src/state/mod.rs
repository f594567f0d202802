//! State Management
//!
//! Page state and the surface the handler cycles render into.

pub mod page;

pub use page::{provide_page_state, PageState};
