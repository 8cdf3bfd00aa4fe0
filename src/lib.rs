//!
//! demotive -- Demotivational posters on demand
//!

             extern crate antidote;
             extern crate image;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate maplit;
#[macro_use] extern crate newtype_derive;
             extern crate rusttype;


#[cfg(test)] #[macro_use] extern crate spectral;


mod caption;
mod model;
mod resources;
mod util;


pub use caption::*;
pub use model::*;
pub use resources::*;
pub use util::cache::*;
