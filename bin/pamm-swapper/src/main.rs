use chrono::Local;
use clap::Parser;
use mimalloc::MiMalloc;
use pamm_swapper::command::{start_with_custom, Command};
use tracing_appender::non_blocking;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub struct MicrosecondFormatter;

impl FormatTime for MicrosecondFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))
    }
}

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = Command::parse();
    #[cfg(feature = "log_file")]
    let (non_blocking_writer, _guard) =
        non_blocking(tracing_appender::rolling::daily("./logs", "pamm-swapper.log"));
    #[cfg(not(feature = "log_file"))]
    let (non_blocking_writer, _guard) = non_blocking(std::io::stdout());
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_timer(MicrosecondFormatter)
                .with_writer(non_blocking_writer)
                .with_span_events(FmtSpan::NONE),
        )
        .with(EnvFilter::new(command.log_level.as_str()))
        .init();
    start_with_custom(command).await?;
    Ok(())
}
