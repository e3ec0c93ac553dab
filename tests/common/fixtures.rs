use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Formats an annotation record the way the label files store it.
pub fn annotation_text(ref_w: u32, ref_h: u32, a: [f64; 4], b: [f64; 4]) -> String {
    format!(
        "{ref_w} {ref_h}\n{} {} {} {}\n{} {} {} {}\n",
        a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]
    )
}

pub fn write_annotation(dir: &Path, stem: &str, ref_w: u32, ref_h: u32, a: [f64; 4], b: [f64; 4]) {
    fs::create_dir_all(dir).expect("create labels dir");
    fs::write(dir.join(format!("{stem}.txt")), annotation_text(ref_w, ref_h, a, b))
        .expect("write annotation");
}

/// Smooth low-contrast gradient; never pure white, green or red.
pub fn gradient_photo(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = 40 + (x * 60 / width.max(1)) as u8;
        let g = 40 + (y * 60 / height.max(1)) as u8;
        Rgb([r, g, 90])
    })
}

pub fn write_photo(dir: &Path, file_name: &str, width: u32, height: u32) {
    fs::create_dir_all(dir).expect("create images dir");
    gradient_photo(width, height)
        .save(dir.join(file_name))
        .expect("write photo");
}
