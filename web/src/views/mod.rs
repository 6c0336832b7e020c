mod analysis;
mod home;

pub use analysis::Analysis;
pub use home::Home;
