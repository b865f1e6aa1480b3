use core::fmt;
use std::sync::Once;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt as tracingfmt, EnvFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;


struct AlignedFormatter;

/// Visitor to extract the stream offset field value
struct OffsetVisitor {
    offset: Option<String>,
}

impl tracing::field::Visit for OffsetVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "offset" {
            self.offset = Some(format!("{:>10?}", value));
        }
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        // Extract offset field if present
        let mut visitor = OffsetVisitor { offset: None };
        event.record(&mut visitor);
        let has_offset = visitor.offset.is_some();
        let offset_str = visitor.offset.unwrap_or_else(|| "          ".to_string());

        let (color_level, color_reset) = match *metadata.level() {
            tracing::Level::ERROR => ("\x1b[31m", "\x1b[0m"),
            tracing::Level::WARN => ("\x1b[33m", "\x1b[0m"),
            tracing::Level::INFO => ("\x1b[32m", "\x1b[0m"),
            tracing::Level::DEBUG => ("\x1b[34m", "\x1b[0m"),
            tracing::Level::TRACE => ("\x1b[35m", "\x1b[0m"),
        };

        // Transform file path: "crates/hamframe-codec/src/sync/synchronizer.rs"
        // becomes "offset [codec/sync] synchronizer.rs"
        let file_path = metadata.file().unwrap_or("unknown");
        let formatted_path = if let Some(src_idx) = file_path.find("/src/") {
            let before_src = &file_path[..src_idx];
            let after_src = &file_path[src_idx + 5..];

            // Extract the crate name (after "hamframe-")
            let crate_name = if let Some(idx) = before_src.rfind("hamframe-") {
                &before_src[idx + 9..]
            } else {
                before_src.rsplit('/').next().unwrap_or("unknown")
            };

            if let Some(last_slash) = after_src.rfind('/') {
                let module_path = &after_src[..last_slash];
                let filename = &after_src[last_slash + 1..];
                let first_module = module_path.split('/').next().unwrap_or("");
                format!("{} [{}/{}] {}", offset_str, crate_name, first_module, filename)
            } else {
                format!("{} [{}] {}", offset_str, crate_name, after_src)
            }
        } else {
            file_path.to_string()
        };

        // Format: "LEVEL offset [module] file:line: message"
        let location = format!(
            "{}{:<5}{} {}:{}:",
            color_level,
            metadata.level(),
            color_reset,
            formatted_path,
            metadata.line().unwrap_or(0)
        );

        let mut message_buf = String::new();
        let message_writer = format::Writer::new(&mut message_buf);
        ctx.field_format().format_fields(message_writer, event)?;

        // The offset is already shown in the prefix
        if has_offset {
            if let Some(idx) = message_buf.find("offset=") {
                if let Some(space_idx) = message_buf[idx..].find(' ') {
                    message_buf.replace_range(idx..idx + space_idx + 1, "");
                } else {
                    message_buf.truncate(idx);
                }
            }
        }

        write!(writer, "{:<width$} {}", location, message_buf, width = 64)?;
        writeln!(writer)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    setup_logging(EnvFilter::new("trace"), None);
}

/// Sets up default logging to stdout and optionally, a verbose log file
/// Returns a guard, that needs to be kept alive for logging to file to work
pub fn setup_logging_default(verbose_logfile: Option<String>) -> Option<WorkerGuard> {

    let stdout_filter = get_default_stdout_filter();
    let logfile_and_filter = verbose_logfile.map(|file| (file, get_default_logfile_filter()));
    setup_logging(stdout_filter, logfile_and_filter)
}

pub fn get_default_stdout_filter() -> EnvFilter {

    EnvFilter::new("info")
        // Per-codeword and per-frame decoding is far too chatty for stdout
        .add_directive("hamframe_codec::hamming=warn".parse().unwrap())
        .add_directive("hamframe_codec::frame=warn".parse().unwrap())

        // Synchronizer: corrupted frames and the end-of-stream summary
        .add_directive("hamframe_codec::sync=info".parse().unwrap())

        // Channel simulator
        .add_directive("hamframe_codec::channel=info".parse().unwrap())
}


fn get_default_logfile_filter() -> EnvFilter {
    EnvFilter::new("debug")
}

/// Sets up logging to stdout and optionally, a verbose log file
/// If an output file is requested, returns Some<WorkerGuard>. Keep this value alive
/// or logging to file may cease working. If no output file is provided, returns None.
fn setup_logging(stdout_filter: EnvFilter, outfile: Option<(String, EnvFilter)>) -> Option<WorkerGuard> {

    if let Some((outfile, outfile_filter)) = outfile {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(outfile)
            .expect("Failed to open log file");
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        INIT_LOG.call_once(||{
            let file_layer = tracingfmt::layer()
                .event_format(AlignedFormatter)
                .with_writer(file_writer)
                .with_ansi(false);

            let stdout_layer = tracingfmt::layer()
                .event_format(AlignedFormatter);

            tracing_subscriber::registry()
                .with(file_layer.with_filter(outfile_filter))
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });

        Some(guard)
    } else {
        INIT_LOG.call_once(||{
            let stdout_layer = tracingfmt::layer()
                .event_format(AlignedFormatter);

            tracing_subscriber::registry()
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });
        None
    }
}
