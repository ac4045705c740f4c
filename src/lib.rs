pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    KaramoveError,
    Roster,
};
