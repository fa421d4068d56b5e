//! Fill the polygons of a file and write the result as a gray image
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=info`

use scanfill::drawing::{read_polygons, read_segments};
use scanfill::{frame, Drawing, Point, PolyFill, RenderingBase, Surface, Transform};

use clap::{Parser, ValueEnum};

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    /// Polygon count, then node count and nodes for each polygon
    Polygons,
    /// One `x0 y0 x1 y1` segment per line, in pixels
    Segments,
}

#[derive(Debug, Parser)]
#[command(name = "polyfill", version, about = "Scanline polygon filling")]
struct Args {
    /// Input file
    input: PathBuf,
    /// Output image, format chosen by extension
    #[arg(short, long, default_value = "polyfill.png")]
    output: PathBuf,
    /// Input file format
    #[arg(short, long, value_enum, default_value_t = Format::Polygons)]
    format: Format,
    #[arg(long, default_value_t = 900)]
    width: usize,
    #[arg(long, default_value_t = 600)]
    height: usize,
    /// Space left around polygons fitted to the image
    #[arg(long, default_value_t = 20)]
    margin: usize,
    /// Rotation of the first frame in degrees
    #[arg(long, default_value_t = 0.0)]
    rotate: f64,
    /// Frames to render, each rotated one degree further
    #[arg(long, default_value_t = 1)]
    frames: usize,
    /// Fill value
    #[arg(long, default_value_t = 255)]
    fill: u8,
    /// Background value
    #[arg(long, default_value_t = 192)]
    background: u8,
    /// Draw polygon edges with this value
    #[arg(long)]
    outline: Option<u8>,
    /// Outline width in pixels
    #[arg(long, default_value_t = 1)]
    thickness: u32,
    /// Fill by testing every edge on every row
    #[arg(long)]
    slow: bool,
    /// Start with the last polygon and add one more each frame
    #[arg(long)]
    progressive: bool,
}

enum Source {
    Drawing(Drawing),
    Segments(Vec<(Point, Point)>),
}

impl Source {
    fn lines(&self, args: &Args, degrees: f64) -> Vec<(Point, Point)> {
        match self {
            Source::Segments(segs) => segs.clone(),
            Source::Drawing(dwg) => {
                let rot = Transform::new_rotate(degrees.to_radians());
                let bound = dwg.bound(&rot);
                let view = Transform::fit_view(&bound, args.width, args.height, args.margin);
                dwg.lines(&(rot * view))
            }
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let src = BufReader::new(File::open(&args.input)?);
    let mut source = match args.format {
        Format::Polygons => Source::Drawing(read_polygons(src)?),
        Format::Segments => Source::Segments(read_segments(src)?),
    };
    if args.format == Format::Segments && args.rotate != 0.0 {
        log::warn!("rotation is ignored for segment input");
    }
    // Polygons still to be shown, taken from the end of the file
    let mut pending = Drawing::new();
    match &mut source {
        Source::Drawing(dwg) if args.progressive => {
            std::mem::swap(dwg, &mut pending);
            dwg.push(pending.pop().ok_or("no polygons to draw")?);
        }
        Source::Segments(_) if args.progressive => {
            log::warn!("progressive drawing is ignored for segment input");
        }
        _ => {}
    }

    let mut ren = RenderingBase::new(args.width, args.height);
    let mut pf = PolyFill::new();
    let mut degrees = args.rotate;

    for i in 0 .. args.frames {
        let start = Instant::now();
        if i > 0 {
            if let (Source::Drawing(dwg), Some(poly)) = (&mut source, pending.pop()) {
                dwg.push(poly);
            }
        }
        let lines = source.lines(args, degrees);
        {
            let mut f = frame(&mut ren);
            f.clear(args.background);
            pf.reset();
            for &(a, b) in &lines {
                pf.add_line(a, b);
            }
            if args.slow {
                pf.fill_slow(&mut *f, args.fill);
            } else {
                pf.fill(&mut *f, args.fill);
            }
            if let Some(value) = args.outline {
                for &(a, b) in &lines {
                    f.draw_thick_line(a, b, args.thickness, value);
                }
            }
        }
        log::info!("Frame {}: {} segments, {}ms dirty {:?}",
                   i, pf.segments().len(), start.elapsed().as_millis(), ren.presented());
        degrees += 1.0;
    }

    ren.to_file(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);
    run(&args).map_err(|e| {
        log::error!("{}: {}", args.input.display(), e);
        e
    })
}
