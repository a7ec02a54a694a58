pub mod batch;
pub mod display;
pub mod menu;
pub mod navigate;
pub mod select;

pub use batch::*;
pub use display::*;
pub use menu::*;
pub use navigate::*;
pub use select::*;
