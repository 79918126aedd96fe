pub mod entities;
pub mod state;
pub mod version;
