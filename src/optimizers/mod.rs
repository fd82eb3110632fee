mod hill_climb;
mod hyper;

pub use hill_climb::HillClimb;
pub use hyper::Hyper;
