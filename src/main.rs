use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use raytracer_core::{
    primitive::{matrix::Matrix4, point::Point, tuple::Tuple, vector::Vector},
    render::{
        color::Color,
        intersection,
        light::PointLightSource,
        material::Material,
        object::{Object, shape::Shape},
        ray::Ray,
        world::World,
    },
};

/// Characters used for the luminance map, from darkest to brightest.
const LUMINANCE_RAMP: &[u8] = b" .:-=+*#%@";

/// Probes the default world: two concentric spheres lit by a single point light.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Maximum level of log events printed to stderr
    #[clap(short, long, default_value = "warn")]
    log_level: tracing::Level,

    /// Add a matte floor plane at y = -1
    #[clap(long)]
    floor: bool,

    /// Move the light to `x,y,z`
    #[clap(long, value_parser = parse_triple, allow_hyphen_values = true)]
    light: Option<[f64; 3]>,

    /// Remove the light. Every ray then shades to black.
    #[clap(long, conflicts_with = "light")]
    no_light: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a single ray and print its intersections, hit and color
    Probe {
        /// Ray origin as `x,y,z`
        #[clap(long, value_parser = parse_triple, allow_hyphen_values = true, default_value = "0,0,-5")]
        origin: [f64; 3],

        /// Ray direction as `x,y,z`
        #[clap(long, value_parser = parse_triple, allow_hyphen_values = true, default_value = "0,0,1")]
        direction: [f64; 3],
    },
    /// Shade a square grid of parallel rays travelling along +z and print a luminance map
    Sweep {
        /// Number of rays along each side of the grid
        #[clap(short, long, default_value_t = 40)]
        size: usize,

        /// Half of the side length of the window the rays pass through
        #[clap(long, default_value_t = 1.5)]
        half_extent: f64,

        /// z coordinate the rays start from
        #[clap(long, default_value_t = -5., allow_hyphen_values = true)]
        z: f64,
    },
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    values
        .try_into()
        .map_err(|values: Vec<f64>| format!("expected 3 comma separated values, got {}", values.len()))
}

fn build_world(args: &Args) -> anyhow::Result<World> {
    let mut world = World::default_world();

    if args.floor {
        let floor = Object::new(
            Shape::Plane,
            Material::matte_with_color(Color::new(0.9, 0.9, 0.9)),
            Matrix4::translation(0., -1., 0.),
        )
        .context("failed to place the floor")?;
        world.add_obj(floor);
    }

    if let Some([x, y, z]) = args.light {
        world.set_light_source(PointLightSource::new(Point::new(x, y, z), Color::white()));
    }
    if args.no_light {
        world.clear_light_source();
    }
    Ok(world)
}

fn probe(world: &World, origin: [f64; 3], direction: [f64; 3]) -> anyhow::Result<()> {
    let [ox, oy, oz] = origin;
    let [dx, dy, dz] = direction;
    let direction = Vector::new(dx, dy, dz);
    if direction.try_normalize().is_err() {
        bail!("ray direction must not be the zero vector");
    }
    let ray = Ray::new(Point::new(ox, oy, oz), direction);

    let intersections = world.intersect(&ray);
    println!("intersections: {}", intersections.len());
    for inter in &intersections {
        let shape = world.object(inter.object())?.shape();
        println!("  t = {:>10.5}  object {} ({:?})", inter.time(), inter.object(), shape);
    }

    let Some(hit) = intersection::hit(&intersections) else {
        println!("hit: none");
        println!("color: {:?}", Color::black());
        return Ok(());
    };

    let comps = world.prepare_hit(hit, &ray)?;
    println!("hit: t = {:.5} on object {}", comps.time(), comps.object_id());
    println!("  point:  {:?}", comps.point());
    println!("  normal: {:?}", comps.normal_v());
    println!("  inside: {}", comps.inside_obj());
    println!("  shadowed: {}", world.is_shadowed(comps.over_point()));
    match world.shade_hit(&comps) {
        Some(color) => println!("color: {:?} {:?}", color, color.as_scaled_values()),
        None => println!("color: undefined (no light), rendered as black"),
    }
    Ok(())
}

fn sweep(world: &World, size: usize, half_extent: f64, z: f64) -> anyhow::Result<()> {
    if size == 0 {
        bail!("grid size must be positive");
    }
    let step = if size > 1 {
        2. * half_extent / (size - 1) as f64
    } else {
        0.
    };

    let rays: Vec<Ray> = (0..size * size)
        .map(|id| {
            let (col, row) = (id % size, id / size);
            let x = -half_extent + step * col as f64;
            let y = half_extent - step * row as f64;
            Ray::new(Point::new(x, y, z), Vector::new(0., 0., 1.))
        })
        .collect();

    let style = indicatif::ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} rays shaded: {human_pos}/{human_len} {percent}% ({eta})",
    )
    .context("invalid progress bar template")?;
    let pb = indicatif::ProgressBar::new(rays.len() as u64).with_style(style);

    let now = std::time::Instant::now();
    let colors: Vec<Color> = rays
        .par_iter()
        .progress_with(pb)
        .map(|ray| world.color_at(ray))
        .collect();
    tracing::info!(rays = rays.len(), elapsed = ?now.elapsed(), "sweep finished");

    for row in colors.chunks(size) {
        let line: String = row
            .iter()
            .map(|color| {
                let lum = color.luminance().clamp(0., 1.);
                let id = (lum * (LUMINANCE_RAMP.len() - 1) as f64).round() as usize;
                LUMINANCE_RAMP[id] as char
            })
            .collect();
        println!("{line}");
    }

    let average = colors.iter().copied().sum::<Color>() / colors.len() as f64;
    println!("average color: {:?} {:?}", average, average.as_scaled_values());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let world = build_world(&args)?;
    tracing::info!(objects = world.len(), light = world.light_source().is_some(), "world ready");

    match args.command {
        Command::Probe { origin, direction } => probe(&world, origin, direction),
        Command::Sweep {
            size,
            half_extent,
            z,
        } => sweep(&world, size, half_extent, z),
    }
}
