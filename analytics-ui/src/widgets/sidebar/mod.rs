mod component;
mod expansion;
mod nav;
mod view;

pub use component::Sidebar;
