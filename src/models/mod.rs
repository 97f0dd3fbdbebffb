pub mod errors;
pub mod link;
pub mod notice;

pub use errors::StoreError;
pub use link::{Link, NewLink};
pub use notice::Notice;
