use std::path::PathBuf;

use clap::Parser;
use copy_match_engine::ModePolicy;

use crate::error::IoError;

#[derive(Parser, Debug)]
#[command(
    name = "classify-cli",
    about = "Classify copy, reversal, and partial-copy trade patterns between two users"
)]
pub struct ClassifyCli {
    #[arg(long)]
    pub dataset_path: PathBuf,

    #[arg(long)]
    pub symbols_path: PathBuf,

    /// "A" or "B"
    #[arg(long)]
    pub mode: String,

    #[arg(long)]
    pub user_a: i32,

    #[arg(long)]
    pub user_b: i32,

    /// defaults to the dataset file's parent directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub symbols_path: PathBuf,
    pub mode: ModePolicy,
    pub user_a: i32,
    pub user_b: i32,
    pub out_dir: PathBuf,
}

impl TryFrom<ClassifyCli> for Config {
    type Error = IoError;

    fn try_from(cli: ClassifyCli) -> Result<Self, IoError> {
        if !cli.dataset_path.is_file() {
            return Err(IoError::Config(format!(
                "dataset_path {:?} does not exist or is not a file",
                cli.dataset_path
            )));
        }
        if !cli.symbols_path.is_file() {
            return Err(IoError::Config(format!(
                "symbols_path {:?} does not exist or is not a file",
                cli.symbols_path
            )));
        }
        let mode = match cli.mode.as_str() {
            "A" => ModePolicy::A,
            "B" => ModePolicy::B,
            other => {
                return Err(IoError::Config(format!(
                    "unknown mode {other:?}, expected \"A\" or \"B\""
                )))
            }
        };
        if cli.user_a == cli.user_b {
            return Err(IoError::Config("user_a and user_b must be distinct".to_string()));
        }
        let out_dir = match cli.out_dir {
            Some(dir) => dir,
            None => cli
                .dataset_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        Ok(Config { dataset_path: cli.dataset_path, symbols_path: cli.symbols_path, mode, user_a: cli.user_a, user_b: cli.user_b, out_dir })
    }
}
