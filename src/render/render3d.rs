//! Frame composition: interlaced 3D columns, completion screen, minimap and
//! debug overlay.
use crate::config::Config;
use crate::core::game::Game;
use crate::core::map::{RenderedMap, Tile};
use crate::core::player::Pose;
use crate::render::casters::{cast_ray, column_angle};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette::Palette;
use crate::render::shading::{CEILING, Span, floor_shade, projection, span, wall_shade};

/// Minimap pixels per map tile.
const MINIMAP_TILE: u32 = 2;

/// Draws one frame of `game` into `fb` and flips the interlace parity.
pub fn render_frame(fb: &mut Framebuffer, game: &mut Game) {
    fb.begin_frame();

    if game.player.is_complete() {
        render_complete(fb);
    } else {
        let start = if game.render_alt { 1 } else { 0 };
        render_3d(fb, &game.map, &game.player.pose, &game.config, start);
        game.render_alt = !game.render_alt;
    }

    if game.show_minimap {
        render_minimap(fb, &game.map, &game.player.pose);
    }
    if game.show_debug {
        render_debug(fb, game);
    }
}

/// Ray-casts every other column starting at `start`; the rest of the buffer
/// keeps what the previous pass drew there.
pub fn render_3d(
    fb: &mut Framebuffer,
    map: &RenderedMap,
    pose: &Pose,
    config: &Config,
    start: u32,
) {
    let w = fb.width;
    let h = fb.height;

    for x in (start..w).step_by(2) {
        let a = column_angle(pose, config.field_of_view, x, w);
        let hit = cast_ray(map, pose, a, config.max_depth);
        let (ceiling, floor) = projection(hit.distance, h);

        for y in 0..h {
            let color = match span(y, ceiling, floor) {
                Span::Ceiling => CEILING,
                Span::Wall => wall_shade(
                    hit.distance,
                    config.max_depth,
                    hit.impact,
                    hit.boundary,
                    config.show_boundaries,
                    x,
                    y,
                ),
                Span::Floor => floor_shade(x, y, h),
            };
            fb.set_pixel_color(x, y, color);
        }
    }
}

pub fn render_complete(fb: &mut Framebuffer) {
    fb.clear();
    let cx = (fb.width / 2) as i32;
    let cy = (fb.height / 2) as i32;
    fb.draw_text(cx - 32, cy - 32, "Maze completed!", Palette::Peach);
    fb.draw_text(cx - 58, cy - 16, "Press R to generate a new maze", Palette::Peach);
}

/// Top-down map in the bottom-left corner, player as a cyan tile.
pub fn render_minimap(fb: &mut Framebuffer, map: &RenderedMap, pose: &Pose) {
    let origin_y = fb.height as i32 - (map.height() as u32 * MINIMAP_TILE) as i32;
    let tile = MINIMAP_TILE as i32;

    for (my, row) in map.rows().enumerate() {
        for (mx, t) in row.iter().enumerate() {
            let color = match t {
                Tile::Wall => Palette::LightBlue,
                Tile::Exit => Palette::Lime,
                Tile::Floor => Palette::White,
            };
            fb.fill_rect(
                mx as i32 * tile,
                origin_y + my as i32 * tile,
                MINIMAP_TILE,
                MINIMAP_TILE,
                color,
            );
        }
    }

    let px = pose.x.floor() as i32;
    let py = pose.y.floor() as i32;
    fb.fill_rect(px * tile, origin_y + py * tile, MINIMAP_TILE, MINIMAP_TILE, Palette::Cyan);
}

fn render_debug(fb: &mut Framebuffer, game: &Game) {
    let p = &game.player.pose;
    fb.draw_text(
        2,
        2,
        format!("x {:.2} y {:.2} a {:.2}", p.x, p.y, p.a),
        Palette::White,
    );
    fb.draw_text(2, 10, format!("solved {}", game.mazes_completed), Palette::White);
}
