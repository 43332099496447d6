//! Routed Pages

mod create_point;
mod home;

pub use create_point::CreatePoint;
pub use home::Home;
