pub mod initialize_config;
pub mod init_user;
pub mod init_referral;
pub mod init_charity;
pub mod init_goal;
pub mod complete_goal;
pub mod forfeit_goal;

pub use initialize_config::*;
pub use init_user::*;
pub use init_referral::*;
pub use init_charity::*;
pub use init_goal::*;
pub use complete_goal::*;
pub use forfeit_goal::*;
