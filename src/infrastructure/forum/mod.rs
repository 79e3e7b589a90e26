use std::sync::LazyLock;

pub mod categories;
pub mod session;
pub mod topics;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);
