//! 可观测性：日志订阅器初始化（仅二进制调用，库内只发事件）

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 默认级别取配置 `[log] level`，RUST_LOG 可覆盖
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
