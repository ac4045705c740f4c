pub mod catalog;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod roster;
pub mod source;
pub mod tasks;
pub mod time;

pub use catalog::{ Location, Technique, TechniqueLabel };
pub use errors::KaramoveError;
pub use roster::{ Group, Member, ProfileId, Roster };
