pub mod board_ops;
pub mod snapshot;
