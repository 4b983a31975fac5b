pub mod clock;
pub mod currency;
pub mod error;
pub mod random;
pub mod traits;

pub use clock::{Clock, SystemClock};
pub use error::{AppError, Result};
pub use random::{IndexChooser, UniformIndexChooser};
