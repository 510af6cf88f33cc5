mod action;
mod drawer;
mod help;
mod nav_bar;

pub use action::Action;
pub use drawer::{Drawer, DrawerState};
pub use help::HelpModal;
pub use nav_bar::{NavBar, NavBarState, NavHit};
