pub mod chain_id;
pub mod safe_url;

pub use chain_id::*;
pub use safe_url::*;
