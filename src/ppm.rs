//! Reading and Writing of gray images
//!
//! Output format is chosen from the file extension, e.g. `.png` or `.pgm`
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format>
//!
use std::path::Path;

/// Read an image as 8-bit gray, returning the data, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_luma();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write 8-bit gray data of `width` by `height` pixels
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), std::io::Error> {
    log::debug!("WRITE FILE: {} x {} to {}", width, height, filename.as_ref().display());
    image::save_buffer(filename, buf, width as u32, height as u32, image::Gray(8))
}

/// Compare two image files pixel by pixel
///
/// Differing pixels are logged
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::info!("IMG DIFF: sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::info!("IMG DIFF: [{},{}]: {} {}", i % w1, i / w1, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
