//! # charla CLI
//!
//! Command-line interface for the charla library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use charla::cli::{Cli, OutputFormat};
use charla::report::{ConsoleReport, ReportBuilder};
use charla::{CharlaError, Lexicon, ReportParams, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CharlaError> {
    let total_start = Instant::now();
    let args = <Cli as ClapParser>::parse();

    // Print header
    println!("💬 charla v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.file.display());
    println!("📄 Format:  {}", args.format);
    if !args.ignore.is_empty() {
        println!("🔇 Ignore:  {}", args.ignore.join(", "));
    }
    println!();

    // Step 1: Parse the transcript
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::new();
    let chat = parser.parse(&args.file)?;
    let parse_time = parse_start.elapsed();
    println!(
        "   Found {} messages from {} authors ({:.2}s)",
        chat.message_count(),
        chat.author_count(),
        parse_time.as_secs_f64()
    );

    // Step 2: Build the lexicon
    let lexicon = Lexicon::spanish().with_extra_stop_words(&args.ignore);

    // Step 3: Render the report
    println!("📊 Building report...");
    let report_start = Instant::now();
    let params = ReportParams::new()
        .with_top_words(args.words)
        .with_top_emojis(args.emojis);
    let report = builder_for(args.format).build(&chat, &lexicon, &params)?;
    let report_time = report_start.elapsed();
    println!("   Rendered in {:.2}s", report_time.as_secs_f64());

    println!();
    println!("{}", report);

    let total_time = total_start.elapsed();
    println!("⚡ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

fn builder_for(format: OutputFormat) -> Box<dyn ReportBuilder> {
    match format {
        OutputFormat::Text => Box::new(ConsoleReport::new()),
        #[cfg(feature = "json-report")]
        OutputFormat::Json => Box::new(charla::report::JsonReport::new()),
    }
}
