//!
//! mememe -- single-screen meme editor core
//!

#[macro_use] extern crate enum_derive;
             extern crate image;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate newtype_derive;
             extern crate rusttype;

#[cfg(test)] #[macro_use] extern crate spectral;


mod compose;
mod editor;
mod model;
mod resources;
mod util;


pub use compose::*;
pub use editor::*;
pub use model::*;
pub use resources::*;
