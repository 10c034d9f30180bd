use std::path::PathBuf;

use picture_lab::Picture;

/// Builds a picture whose colors encode the pixel position, so every pixel
/// of a picture up to 4096x4096 is distinct.
pub fn positional(height: usize, width: usize) -> Picture {
    let mut data = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        for col in 0..width {
            data.push((row % 256) as u8);
            data.push((col % 256) as u8);
            data.push(((row / 256) * 16 + col / 256) as u8);
        }
    }
    Picture::from_raw(width, height, data).expect("buffer sized for the picture")
}

/// Path in the system temp directory that is unique to this test process.
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("picture_lab_{}_{name}", std::process::id()))
}
