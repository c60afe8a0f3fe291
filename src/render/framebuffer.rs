//! CPU framebuffer of palette entries plus queued text labels.
use crate::render::palette::Palette;

/// Text the front-end draws on top of the pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Palette,
}

pub struct Framebuffer {
    pub color_buffer: Vec<Palette>,
    pub width: u32,
    pub height: u32,
    pub background_color: Palette,
    pub current_color: Palette,
    pub labels: Vec<Label>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Palette::Black;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Palette::White,
            labels: Vec::new(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
        self.labels.clear();
    }

    /// Drops last frame's labels but keeps the pixels (interlaced 3D passes
    /// only repaint half the columns).
    #[inline]
    pub fn begin_frame(&mut self) {
        self.labels.clear();
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Palette) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Palette {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline]
    pub fn set_current_color(&mut self, c: Palette) {
        self.current_color = c;
    }

    #[inline]
    pub fn set_background_color(&mut self, c: Palette) {
        self.background_color = c;
    }

    /// Filled rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Palette) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.color_buffer[(py as u32 * self.width + px as u32) as usize] = color;
            }
        }
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: impl Into<String>, color: Palette) {
        self.labels.push(Label { x, y, text: text.into(), color });
    }

    /// RGBA8 bytes, row-major, ready for a texture upload.
    pub fn to_rgba(&self) -> Vec<u8> {
        let lut = Palette::ALL.map(Palette::rgba);
        self.color_buffer
            .iter()
            .flat_map(|c| lut[c.index() as usize])
            .collect()
    }
}
