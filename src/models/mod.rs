pub mod calendar;
pub mod duration;
pub mod grow;
pub mod status;
pub mod window;

pub use calendar::*;
pub use duration::*;
pub use grow::*;
pub use status::*;
pub use window::*;
