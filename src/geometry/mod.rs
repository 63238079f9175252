mod length2d;

pub use length2d::{ByMeters, Length2d};
