use log::error;
use macroquad::prelude::*;
use tiled_platformer::{
    assets, render_frame, InputTracker, KeyState, MacroquadCanvas, Session, TickOutcome,
};

const CONFIG_PATH: &str = "assets/config.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Tiled Platformer".into(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = assets::load_config(CONFIG_PATH).await;
    request_new_screen_size(config.viewport_width, config.viewport_height);

    let mut session = Session::new(config.clone());
    let mut canvas = MacroquadCanvas::new(None);

    // Show the fallback sky while assets load.
    render_frame(&mut canvas, &session.frame());
    next_frame().await;

    match assets::load_background(&config).await {
        Ok((texture, background)) => {
            canvas = MacroquadCanvas::new(Some(texture));
            session.set_background(background);
        }
        Err(err) => error!("Error loading background: {err:#}"),
    }

    match assets::load_level(&config).await {
        Ok(level) => session.attach_level(level),
        Err(err) => session.attach_failed(&format!("{err:#}")),
    }

    let mut input = InputTracker::new();
    loop {
        let keys = KeyState::poll();
        session.adjust_clock_speed(keys.clock_step());

        let mut intent = input.intent(&keys);
        if session.tick(get_frame_time(), &mut intent) == TickOutcome::FellOutOfWorld {
            session = session.respawn();
        }

        render_frame(&mut canvas, &session.frame());
        next_frame().await;
    }
}
