pub mod preference;
pub mod profile;
pub mod recommendation;
