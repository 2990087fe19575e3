pub mod listeners;
pub mod pointer;
pub mod resize;

pub use listeners::Listeners;
pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;
