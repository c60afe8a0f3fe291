// main.rs
mod process_events;

use anyhow::{Context, anyhow};
use log::{info, warn};
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use mazoku::Config;
use mazoku::core::game::Game;
use mazoku::render::framebuffer::Framebuffer;
use mazoku::render::palette::Palette;
use mazoku::render::render3d::render_frame;
use process_events::process_events;

const TARGET_FPS: u32 = 30;
const FONT_SIZE: i32 = 8;

fn to_color(c: Palette) -> Color {
    let [r, g, b, a] = c.rgba();
    Color::new(r, g, b, a)
}

fn main() -> anyhow::Result<()> {
    // Info by default, RUST_LOG still wins.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::default();
    let mut game = Game::new(config.clone()).context("could not build the first maze")?;

    let scale = config.scale as i32;
    let window_width = config.screen_width as i32 * scale;
    let window_height = config.screen_height as i32 * scale;

    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title("Mazoku")
        .build();
    window.set_target_fps(TARGET_FPS);
    info!("window {}x{} (x{} scale)", window_width, window_height, scale);

    let mut framebuffer = Framebuffer::new(config.screen_width, config.screen_height);

    // Persistent texture the framebuffer is uploaded into every frame.
    let blank = Image::gen_image_color(
        config.screen_width as i32,
        config.screen_height as i32,
        Color::BLACK,
    );
    let mut texture = window
        .load_texture_from_image(&raylib_thread, &blank)
        .map_err(|e| anyhow!("could not create framebuffer texture: {e:?}"))?;

    while !window.window_should_close() {
        let dt = window.get_frame_time();
        let input = process_events(&window);
        game.update(&input, dt).context("maze regeneration failed")?;

        render_frame(&mut framebuffer, &mut game);
        if let Err(e) = texture.update_texture(&framebuffer.to_rgba()) {
            warn!("framebuffer upload failed: {e:?}");
        }

        let fps_now = window.get_fps();
        let show_fps = game.show_debug;

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_ex(&texture, Vector2::new(0.0, 0.0), 0.0, scale as f32, Color::WHITE);

        for label in &framebuffer.labels {
            d.draw_text(
                &label.text,
                label.x * scale,
                label.y * scale,
                FONT_SIZE * scale,
                to_color(label.color),
            );
        }
        if show_fps {
            d.draw_text(
                &format!("FPS: {}", fps_now),
                window_width - 28 * scale,
                2 * scale,
                FONT_SIZE * scale,
                Color::WHITE,
            );
        }
    }

    info!("bye after {} solved mazes", game.mazes_completed);
    Ok(())
}
