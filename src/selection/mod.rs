pub mod codec;
pub mod store;
pub mod types;

pub use codec::SelectionRecord;
pub use store::SelectionStore;
pub use types::{Selection, Token, TokenKind};
