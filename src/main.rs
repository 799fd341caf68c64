//! Stick Hero entry point
//!
//! Native: runs a headless demo session driven by the autoplay bot.
//! Web: the entry point lives in `stick_hero::platform::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use stick_hero::ai::AutoPlayer;
    use stick_hero::consts::SIM_DT;
    use stick_hero::persistence::JsonFileStore;
    use stick_hero::session::{ContinuityFlag, Session};
    use stick_hero::sim::{GamePhase, Outcome};
    use stick_hero::GameConfig;

    env_logger::init();
    log::info!("Stick Hero (native) starting...");

    // Usage: stick-hero [config.json] [save.json]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match GameConfig::from_json_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid config {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let save_path = args.next().unwrap_or_else(|| "stick_hero_save.json".to_string());
    let store = match JsonFileStore::open(&save_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot open save {}: {}", save_path, e);
            std::process::exit(1);
        }
    };
    log::info!("Saving progress to {}", store.path().display());

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut session = match Session::new(config, Box::new(store), Box::new(ContinuityFlag::default()), seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    session.game_start();
    let mut bot = AutoPlayer::new(seed, 0.6);
    // Ten minutes of simulated play at most
    let max_ticks = (600.0 / SIM_DT) as u64;
    for _ in 0..max_ticks {
        let input = bot.next_input(session.state());
        if let Some(Outcome::Crossed) = session.tick(&input, SIM_DT) {
            log::info!("Crossed! score {}", session.score());
        }
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    let records = session.records();
    println!(
        "Final score: {} (high score {}, diamonds {})",
        session.score(),
        records.high_score,
        records.diamonds
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_init, this is just to satisfy the compiler
}
