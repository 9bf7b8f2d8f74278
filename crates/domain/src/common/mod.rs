mod errors;
mod nickname;
mod numeric;
mod random;

pub use errors::{DomainError, ValidationError};
pub use nickname::Nickname;
pub use numeric::{Attack, Life};
pub use random::RandomSeed;
