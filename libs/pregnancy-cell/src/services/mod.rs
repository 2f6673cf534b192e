pub mod claude;
pub mod fallback;
pub mod guide;
pub mod prompt;
