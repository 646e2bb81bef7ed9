pub mod docs;
pub mod expand;
pub mod inline;
pub mod wiki;

pub use docs::*;
pub use expand::*;
pub use inline::*;
pub use wiki::*;
