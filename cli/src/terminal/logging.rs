use colored::*;
use satcheck_common::verbosity::PRINT_TARGET;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Internal diagnostics from warnings up unless `RUST_LOG` says otherwise.
const DEFAULT_FILTER: &str = "warn";

/// Check output is gated by `-v` alone, so this directive survives any `RUST_LOG`.
const PRINT_DIRECTIVE: &str = "satcheck::print=info";

/// Prints check output verbatim and prefixes internal events with a colored symbol.
pub struct SatcheckFormatter;

impl<S, N> FormatEvent<S, N> for SatcheckFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Builds the event filter from `RUST_LOG` (or the default) plus the check-output directive.
pub fn build_filter(env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let base: EnvFilter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    Ok(base.add_directive(PRINT_DIRECTIVE.parse()?))
}

pub fn init_logging() -> anyhow::Result<()> {
    let env: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SatcheckFormatter)
        .with_writer(std::io::stdout)
        .init();
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
