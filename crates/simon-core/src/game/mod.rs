mod mode;
mod round;
mod session;

pub use mode::*;
pub use round::*;
pub use session::*;
