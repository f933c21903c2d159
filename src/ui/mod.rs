pub mod architecture;
pub mod chat_demo;
pub mod cube_grid;
pub mod features;
pub mod footer;
pub mod header;
pub mod icon;
pub mod orb_background;
pub mod pages;
pub mod scroll_stack;

pub use architecture::ArchitectureStack;
pub use chat_demo::ChatDemo;
pub use cube_grid::CubeGrid;
pub use features::Features;
pub use footer::Footer;
pub use header::{Header, Logo};
pub use icon::{Icon, icons};
pub use orb_background::{HeroOrb, OrbBackground};
pub use scroll_stack::{ScrollStack, ScrollStackItem};
