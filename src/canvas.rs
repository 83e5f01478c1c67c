use std::path::Path;

use crate::material::Color;

/// A rectangular raster of Colors, initialized black. (0, 0) is the top
/// left corner.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Instantiate a new black Canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Serialize to the plain-text PPM format: a `P3` header, then one line
    /// per scanline of space-separated 8-bit R G B triples, top row first.
    /// Channels are clamped and rounded here and nowhere earlier.
    pub fn to_ppm(&self) -> String {
        let mut ppm = format!("P3\n{} {}\n255\n", self.width, self.height);
        for row in self.pixels.chunks(self.width) {
            let line = row
                .iter()
                .map(|pixel| {
                    let [r, g, b] = pixel.to_rgb8();
                    format!("{} {} {}", r, g, b)
                })
                .collect::<Vec<_>>()
                .join(" ");
            ppm.push_str(&line);
            ppm.push('\n');
        }
        ppm
    }

    /// Save through the image crate, picking the format from the path's
    /// extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let mut imgbuf: image::RgbImage =
            image::ImageBuffer::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                imgbuf.put_pixel(x as u32, y as u32, image::Rgb(self.pixel_at(x, y).to_rgb8()));
            }
        }
        imgbuf.save(path)
    }
}
