pub mod context;

pub use context::{use_auth, AuthContext, AuthProvider, UserInfo};
