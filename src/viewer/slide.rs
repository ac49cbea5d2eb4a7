use raylib::prelude::*;

/// A loaded slide image, drawn letterboxed to fit the window.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Draws the slide centred, shifted vertically by `offset` screen heights
    /// (1.0 is fully below the window, -1.0 fully above).
    pub fn draw(&self, d: &mut RaylibDrawHandle, offset: f32) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        // object-fit: contain
        let scale = (screen_width / tex_width).min(screen_height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let centre = Vector2::new(screen_width * 0.5, screen_height * (0.5 + offset));

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(centre.x, centre.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::WHITE,
        );
    }
}

/// Stand-in for items that could not be loaded (remote URLs, bad files).
pub fn draw_placeholder(d: &mut RaylibDrawHandle, label: &str, offset: f32) {
    let screen_height = d.get_screen_height() as f32;
    let y = (screen_height * (0.5 + offset)) as i32;
    d.draw_text(label, 20, y, 20, Color::GRAY);
}
