//! Concrete species records.

mod beaver;
mod dog;
mod elephant;
mod orangutan;

pub use beaver::Beaver;
pub use dog::Dog;
pub use elephant::AfricanElephant;
pub use orangutan::{Orangutan, OrangutanTraits};
