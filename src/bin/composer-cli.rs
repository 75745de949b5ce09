use std::path::{Path, PathBuf};

use base64::Engine;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "composer-cli")]
#[command(about = "Command-line client for the Music Composer API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Render a composition and download the MIDI payload
    Generate {
        #[arg(short, long)]
        composition: String,
        #[arg(short, long, default_value_t = 120)]
        tempo: u32,
        /// Where to write the payload (defaults to the server's filename)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Save a composition
    Save {
        #[arg(short, long)]
        composition: String,
        #[arg(short, long, default_value = "Untitled")]
        name: String,
    },
    /// Load a composition
    Load {
        #[arg(short, long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Generate { composition, tempo, out } => {
            let res = client
                .post(format!("{}/api/generate-midi", cli.url))
                .json(&json!({ "composition": composition, "tempo": tempo }))
                .send()
                .await?;
            if let Some(body) = print_response(res).await? {
                write_payload(&body, out)?;
            }
        }
        Commands::Save { composition, name } => {
            let res = client
                .post(format!("{}/api/save-composition", cli.url))
                .json(&json!({ "composition": composition, "name": name }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Load { id } => {
            let mut req = client.get(format!("{}/api/load-composition", cli.url));
            if let Some(id) = id {
                req = req.query(&[("id", id)]);
            }
            print_response(req.send().await?).await?;
        }
    }

    Ok(())
}

/// Print a JSON response; returns the body only for successful statuses.
async fn print_response(res: reqwest::Response) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(None);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(Some(json))
}

fn write_payload(body: &Value, out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = body["midi_data"].as_str().ok_or("response has no midi_data")?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;

    let path = match out {
        Some(path) => path,
        None => download_path(body["filename"].as_str().ok_or("response has no filename")?)?,
    };

    std::fs::write(&path, &bytes)?;
    eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Local path for a server-suggested filename: only its final component, so
/// the download always lands in the current directory.
fn download_path(name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_name = Path::new(name)
        .file_name()
        .ok_or_else(|| format!("unusable filename from server: {name:?}"))?;
    Ok(PathBuf::from(file_name))
}
