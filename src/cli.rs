// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::count::count_cards;
use crate::config::Config;
use crate::error::Fallible;
use crate::web::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Start the card counting UI in the browser.
    Serve {
        /// Optional path to a TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// The port to use for the web server. Overrides the configuration.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Compute the Hi-Lo count for a sequence of cards, e.g. `2H KS 10D`.
    /// A card listed twice is returned to the deck.
    Count {
        /// Card codes: rank followed by suit letter.
        #[arg(required = true)]
        cards: Vec<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            config,
            port,
            no_open,
        } => {
            let mut config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            if let Some(port) = port {
                config.port = port;
            }
            if no_open {
                config.open_browser = false;
            }
            start_server(config).await
        }
        Command::Count { cards } => {
            let summary = count_cards(&cards)?;
            println!("{summary}");
            Ok(())
        }
    }
}
