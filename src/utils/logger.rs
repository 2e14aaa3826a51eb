use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 未設定時使用的過濾規則
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sales_ledger=debug,info"
    } else {
        "sales_ledger=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// 初始化 CLI 日誌；輸出到 stderr，避免與收據輸出混在一起
///
/// ANSI colours are only emitted when stderr is a terminal, so redirected
/// logs stay plain text.
pub fn init_cli_logger(verbose: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "sales_ledger=info");
        assert_eq!(default_directive(true), "sales_ledger=debug,info");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
