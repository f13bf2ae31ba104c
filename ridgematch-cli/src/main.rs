use clap::Parser;
use ridgematch::io::{load_binary_image, save_binary_image, save_minutiae_overlay, DEFAULT_THRESHOLD};
use ridgematch::{Alignment, ExtractConfig, Fingerprint, MatchConfig, Matcher};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "RidgeMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ExtractConfigJson {
    orientation_distance: usize,
    parallel: bool,
}

impl Default for ExtractConfigJson {
    fn default() -> Self {
        let cfg = ExtractConfig::default();
        Self {
            orientation_distance: cfg.orientation_distance,
            parallel: cfg.parallel,
        }
    }
}

impl From<ExtractConfigJson> for ExtractConfig {
    fn from(value: ExtractConfigJson) -> Self {
        Self {
            orientation_distance: value.orientation_distance,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    distance_threshold: i32,
    orientation_threshold: i32,
    found_threshold: usize,
    angle_offset: i32,
    parallel: bool,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            distance_threshold: cfg.distance_threshold,
            orientation_threshold: cfg.orientation_threshold,
            found_threshold: cfg.found_threshold,
            angle_offset: cfg.angle_offset,
            parallel: cfg.parallel,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            distance_threshold: value.distance_threshold,
            orientation_threshold: value.orientation_threshold,
            found_threshold: value.found_threshold,
            angle_offset: value.angle_offset,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    probe_path: String,
    gallery_paths: Vec<String>,
    binarize_threshold: u8,
    skeleton_dir: Option<String>,
    overlay_dir: Option<String>,
    output_path: Option<String>,
    extract: ExtractConfigJson,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_path: String::new(),
            gallery_paths: Vec::new(),
            binarize_threshold: DEFAULT_THRESHOLD,
            skeleton_dir: None,
            overlay_dir: None,
            output_path: None,
            extract: ExtractConfigJson::default(),
            match_cfg: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AlignmentRecord {
    probe_index: usize,
    gallery_index: usize,
    rotation_deg: i32,
    row_shift: i32,
    col_shift: i32,
    matched: usize,
}

impl From<Alignment> for AlignmentRecord {
    fn from(value: Alignment) -> Self {
        Self {
            probe_index: value.probe_index,
            gallery_index: value.gallery_index,
            rotation_deg: value.transform.rotation_deg,
            row_shift: value.transform.row_shift,
            col_shift: value.transform.col_shift,
            matched: value.matched,
        }
    }
}

#[derive(Debug, Serialize)]
struct GalleryRecord {
    path: String,
    minutiae: usize,
    matched: bool,
    alignment: Option<AlignmentRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    probe: String,
    probe_minutiae: usize,
    gallery: Vec<GalleryRecord>,
}

struct Dumps<'a> {
    skeleton_dir: Option<&'a Path>,
    overlay_dir: Option<&'a Path>,
}

impl Dumps<'_> {
    fn write(&self, source: &str, fingerprint: &Fingerprint) -> Result<(), Box<dyn std::error::Error>> {
        let stem = Path::new(source)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("fingerprint");
        if let Some(dir) = self.skeleton_dir {
            fs::create_dir_all(dir)?;
            save_binary_image(fingerprint.skeleton(), dir.join(format!("{stem}_skeleton.png")))?;
        }
        if let Some(dir) = self.overlay_dir {
            fs::create_dir_all(dir)?;
            save_minutiae_overlay(
                fingerprint.skeleton(),
                fingerprint.minutiae(),
                dir.join(format!("{stem}_minutiae.png")),
            )?;
        }
        Ok(())
    }
}

fn load_fingerprint(
    path: &str,
    threshold: u8,
    extract_cfg: &ExtractConfig,
    dumps: &Dumps<'_>,
) -> Result<Fingerprint, Box<dyn std::error::Error>> {
    let image = load_binary_image(path, threshold)?;
    let fingerprint = Fingerprint::from_image(&image, extract_cfg);
    tracing::info!(path, minutiae = fingerprint.minutiae().len(), "fingerprint compiled");
    dumps.write(path, &fingerprint)?;
    Ok(fingerprint)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("ridgematch=info".parse()?)
                    .add_directive("ridgematch_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.probe_path.is_empty() || config.gallery_paths.is_empty() {
        return Err("probe_path and gallery_paths must be set in the config".into());
    }
    if config.binarize_threshold == 0 {
        return Err("binarize_threshold must be at least 1".into());
    }

    let extract_cfg = ExtractConfig::from(config.extract);
    let match_cfg = MatchConfig::from(config.match_cfg);
    match_cfg.validate()?;
    let matcher = Matcher::new().with_config(match_cfg);

    let dumps = Dumps {
        skeleton_dir: config.skeleton_dir.as_deref().map(Path::new),
        overlay_dir: config.overlay_dir.as_deref().map(Path::new),
    };

    let probe = load_fingerprint(
        &config.probe_path,
        config.binarize_threshold,
        &extract_cfg,
        &dumps,
    )?;

    let mut gallery = Vec::with_capacity(config.gallery_paths.len());
    for path in &config.gallery_paths {
        let candidate = load_fingerprint(path, config.binarize_threshold, &extract_cfg, &dumps)?;
        let alignment = probe.find_alignment(&candidate, &matcher);
        gallery.push(GalleryRecord {
            path: path.clone(),
            minutiae: candidate.minutiae().len(),
            matched: alignment.is_some(),
            alignment: alignment.map(AlignmentRecord::from),
        });
    }

    let output = Output {
        probe: config.probe_path.clone(),
        probe_minutiae: probe.minutiae().len(),
        gallery,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
