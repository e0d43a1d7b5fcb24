use clap::Parser;
use log::info;
use std::process::exit;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Root folder to search for prefetch files
    #[clap(value_parser)]
    input_folder: String,

    /// Folder to save the csv output
    #[clap(value_parser)]
    output_folder: String,
}

fn main() {
    let args = Args::parse();
    println!("[pfdump] Parsing prefetch files at {}", args.input_folder);

    let status_result = pfcore::core::collect_prefetch(&args.input_folder, &args.output_folder);
    let status = match status_result {
        Ok(result) => result,
        Err(err) => {
            println!("[pfdump] Failed to parse prefetch files: {err:?}");
            exit(1);
        }
    };
    info!("[pfdump] Collection success");

    println!(
        "[pfdump] Parsed: {} Skipped: {} Errors: {}",
        status.parsed, status.skipped, status.errors
    );
    println!("Prefetch data has been saved to {}", status.output_file);
}
