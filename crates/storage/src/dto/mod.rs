pub mod hackathon;
pub mod stats;
pub mod user;
