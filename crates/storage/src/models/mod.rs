mod achievement;
mod hackathon;
mod user;

pub use achievement::Achievement;
pub use hackathon::{Hackathon, Medal};
pub use user::User;

pub(crate) use user::avatar_url;
