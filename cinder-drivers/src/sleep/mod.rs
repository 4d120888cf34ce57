//! Nap implementations

pub mod timer;

pub use timer::TimerNapper;
