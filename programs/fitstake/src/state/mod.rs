pub mod protocol_config;
pub mod user_account;
pub mod referral_account;
pub mod charity_account;
pub mod goal_account;

pub use protocol_config::*;
pub use user_account::*;
pub use referral_account::*;
pub use charity_account::*;
pub use goal_account::*;
