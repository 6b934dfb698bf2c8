use std::{env, io, process};

use tier_eng::csv::{read_actions, write_board};
use tier_eng::{Config, Engine};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "warn".parse().expect("static directive"),
        ))
        .with_writer(io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: tier-eng <actions.csv>");
        process::exit(2);
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            process::exit(2);
        }
    };

    let actions = match read_actions(path) {
        Ok(actions) => actions,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let mut engine = Engine::from_config(&config);
    let (action_sender, action_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in actions {
            match result {
                Ok(action) => {
                    if action_sender.send(action).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    engine.run(ReceiverStream::new(action_receiver)).await;

    if let Err(e) = write_board(io::stdout().lock(), &engine.board()) {
        error!("{e}");
        process::exit(1);
    }
}
