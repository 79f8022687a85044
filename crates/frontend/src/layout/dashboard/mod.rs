pub mod shell;

pub use shell::{dashboard_shell, use_shell, ShellContext};
