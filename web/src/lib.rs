use clap::Parser;
use wasm_bindgen::prelude::*;

mod bingo;
mod storage;
mod utils;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board width
    #[arg(long, default_value_t = bingo_core::BoardConfig::DEFAULT_WIDTH)]
    width: bingo_core::Coord,

    /// Board height
    #[arg(long, default_value_t = bingo_core::BoardConfig::DEFAULT_HEIGHT)]
    height: bingo_core::Coord,

    /// Keep the game in memory only, nothing survives a reload
    #[arg(long)]
    ephemeral: bool,
}

impl Args {
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn props(&self) -> bingo::BingoProps {
        bingo::BingoProps {
            config: bingo_core::BoardConfig::new(self.width, self.height),
            seed: self.seed,
            ephemeral: self.ephemeral,
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("bingo")
        .expect("Could not find id=\"bingo\" element");

    log::debug!("App started");
    yew::Renderer::<bingo::BingoView>::with_root_and_props(root, args.props()).render();
}
