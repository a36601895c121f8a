pub mod button;
pub mod input;
pub mod textarea;

// Depends on button, input, textarea
pub mod contact_form;

// Re-exports for convenience
pub use button::*;
pub use contact_form::*;
pub use input::*;
pub use textarea::*;
