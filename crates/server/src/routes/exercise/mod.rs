mod add;
pub use add::*;

mod log;
pub use log::*;
