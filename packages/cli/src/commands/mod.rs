pub mod blocks;
pub mod edit;
pub mod init;
pub mod inspect;
pub mod render;

pub use blocks::{blocks, BlocksArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use render::{render, RenderArgs};
