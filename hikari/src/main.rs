use std::{path::PathBuf, str::FromStr};

use hikari::{
    camera::Camera,
    expect, hikari_info,
    materials::{GgxSampler, SamplingStrategy},
    output::{default_output_path, write_image},
    renderer::{render, RenderContext},
    sampling::UniformSampler,
    scene::Scene,
    settings::Settings,
};

const USAGE: &str = "Usage:
  hikari <settings.yaml> [output.exr|output.png]
  hikari --dump-samples <roughness> <count> [InverseCdf|Rejection]";

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        // .level(log::LevelFilter::Debug)
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn parse_arg<T: FromStr>(arg: Option<&String>, name: &str) -> Result<T, String> {
    let arg = arg.ok_or_else(|| format!("Missing <{}>\n{}", name, USAGE))?;
    arg.parse()
        .map_err(|_| format!("Invalid <{}> '{}'\n{}", name, arg, USAGE))
}

/// Prints local space GGX samples as CSV for plotting the distribution.
fn dump_samples(args: &[String]) -> Result<(), String> {
    let roughness: f32 = parse_arg(args.first(), "roughness")?;
    let count: usize = parse_arg(args.get(1), "count")?;
    let strategy = match args.get(2) {
        Some(_) => parse_arg::<SamplingStrategy>(args.get(2), "strategy")?,
        None => SamplingStrategy::default(),
    };

    let ggx = GgxSampler::new(strategy);
    let mut sampler = UniformSampler::new(0);
    println!("x,y,z");
    for _ in 0..count {
        let d = ggx.sample(roughness, &mut sampler);
        println!("{},{},{}", d.x, d.y, d.z);
    }
    Ok(())
}

fn render_settings(settings_path: &str, output_path: Option<&String>) -> Result<(), String> {
    let settings = Settings::load(&PathBuf::from(settings_path))
        .map_err(|why| format!("Loading '{}' failed: {}", settings_path, why))?;
    hikari_info!("Settings loaded from '{}'", settings_path);

    let scene = Scene::build(&settings.scene);
    hikari_info!("Scene has {} shapes", scene.len());
    let camera = Camera::new(settings.camera, settings.film.res);
    let environment = settings
        .environment
        .build()
        .map_err(|why| format!("Loading environment failed: {}", why))?;

    let ctx = RenderContext {
        scene: &scene,
        camera: &camera,
        environment: environment.as_ref(),
    };
    let result = render(&ctx, settings.integrator, &settings.film, &settings.render)?;

    let path = match output_path {
        Some(path) => PathBuf::from(path),
        None => default_output_path(&settings.name)?,
    };
    write_image(&path, &result.film)
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("--dump-samples") => dump_samples(&args[1..]),
        Some("--help") | Some("-h") | None => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(settings_path) => render_settings(settings_path, args.get(1)),
    };
    expect!(result, "hikari failed");
}
