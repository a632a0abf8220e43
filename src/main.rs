use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use forage_map::generation::records::generate_records;
use forage_map::processing::attributes::Record;
use forage_map::processing::config::PipelineConfig;
use forage_map::processing::pipeline::process_records;

#[derive(Parser)]
#[command(name = "forage-map", about = "Normalize record GeoJSON into one render-ready collection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a JSON array of records into a FeatureCollection with its bbox
    Render {
        /// JSON file holding an array of records
        #[arg(long)]
        records: PathBuf,
        /// JSON pipeline config; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print a seeded synthetic record batch
    Generate {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 12345)]
        seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            records,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => PipelineConfig::from_file(path)?,
                None => PipelineConfig::default(),
            };
            let reader = BufReader::new(File::open(&records)?);
            let records: Vec<Record> = serde_json::from_reader(reader)?;

            let output = process_records(&records, &config);
            let mut collection = output.collection;
            collection.bbox = output.bounds.to_bbox().map(|b| b.to_vec());

            let json = if pretty {
                serde_json::to_string_pretty(&collection)?
            } else {
                serde_json::to_string(&collection)?
            };
            println!("{}", json);
        }
        Commands::Generate { count, seed } => {
            let records = generate_records(count, seed);
            println!("{}", serde_json::to_string(&records)?);
        }
    }

    Ok(())
}
