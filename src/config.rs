#[path = "config/user.rs"]
pub mod user;

pub const APPLICATION_NAME: &str = "io.github.pageprogress.Demo";

/// Directory under the XDG config dirs holding `config.toml` and `style.css`.
pub const CONFIG_DIR_NAME: &str = "pageprogress";
