pub mod hackathon;
pub mod session;

pub use hackathon::HackathonRepository;
pub use session::{SessionRepository, SessionState};
