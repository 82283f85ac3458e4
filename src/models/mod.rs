pub mod card;
pub mod placement;
pub mod viewport;

pub use card::*;
pub use placement::*;
pub use viewport::*;
