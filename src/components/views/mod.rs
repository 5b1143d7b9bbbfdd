mod not_found;
mod queue;

pub use not_found::PageNotFound;
pub use queue::Queue;
