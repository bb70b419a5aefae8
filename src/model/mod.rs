pub mod board;
pub mod palette;
pub mod settings;
pub mod task;

pub use board::*;
pub use palette::*;
pub use settings::*;
pub use task::*;
