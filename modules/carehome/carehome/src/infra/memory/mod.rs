//! Process-local stores for verification codes and login sessions.

mod codes;
mod sessions;

pub use codes::InMemoryCodeStore;
pub use sessions::InMemorySessionStore;
