use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;
use cellular_automata::{
    Config, Simulation,
    application::{Control, FramePacer},
    input::InputSource,
    rendering::{self, CursorStyle},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: 1000,
        window_height: 1000,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let config = config.validate()?;
    info!(
        "{}x{} grid, {:.0}% alive, {} fps",
        config.width,
        config.height,
        config.alive_fraction * 100.0,
        config.fps
    );

    let mut sim = Simulation::new(config.engine()?);
    let mut input = InputSource::open(&config);
    let mut pacer = FramePacer::new(config.fps);

    let icon = match &config.cursor_icon {
        Some(path) => {
            let path = path.to_string_lossy();
            match load_texture(&path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    Some(texture)
                }
                Err(err) => {
                    warn!("cursor icon {path} not loaded, using a plain square: {err}");
                    None
                }
            }
        }
        None => None,
    };

    // Window close arrives as a Quit event instead of ending the process
    prevent_quit();
    let mut pending = Vec::new();

    loop {
        input.poll_keyboard(&mut pending);

        if pacer.ready(get_frame_time()) {
            input
                .poll_gamepad(&mut pending)
                .context("reading game controller")?;
            if sim.frame(pending.drain(..))? == Control::Quit {
                info!("quit after {} generations", sim.engine().generation());
                return Ok(());
            }
        }

        let style = match &icon {
            Some(texture) => CursorStyle::Icon(texture),
            None => CursorStyle::Fill(rendering::CURSOR),
        };
        rendering::present(sim.grid(), Some((sim.cursor().position(), style)));
        if config.hud {
            rendering::draw_hud(&sim);
        }

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Config::parse()).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
