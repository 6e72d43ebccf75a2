pub mod codec;
mod manager;
mod persistence;

pub use codec::{decode, encode, share_link, DecodeError};
pub use manager::FarmStateManager;
pub use persistence::{load_or_default, load_state, save_state};
