use {
  std::path::PathBuf,
  anyhow::{Context, Result, bail},
  generative_poster::{
    config::PosterConfig,
    drawing::{self, FontSet},
    poster,
    util
  }
};

const USAGE: &str = "\
Render a generative poster to PNG.

Usage: poster [options]

Options:
  --style NAME          complex, vivid or pastel (default complex)
  --seed N              reproducible seed; omit for a random poster
  --layers N            number of blobs
  --radius MIN MAX      blob radius range
  --wobble MIN MAX      blob wobble range
  --spikes N            vertices per blob
  --dpi N               output resolution (default 300)
  --config FILE         RON file with any of the above
  --font FILE           TrueType font for the titles
  --output FILE         where to write the PNG (default Week3_GenerativePoster.png)
  --open                open the written file
  --help                show this message

Log verbosity follows RUST_LOG (default info).";

struct Cli {
  config: Option<PathBuf>,
  overrides: PosterConfig,
  open: bool
}

fn value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T>
  where T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static {
  let raw = args.next().with_context(|| format!("{} expects a value", flag))?;
  raw.parse().with_context(|| format!("invalid value '{}' for {}", raw, flag))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Cli>> {
  let mut cli = Cli { config: None, overrides: PosterConfig::default(), open: false };
  let o = &mut cli.overrides;

  while let Some(flag) = args.next() {
    match flag.as_str() {
      "--style" => o.style = Some(value(&mut args, &flag)?),
      "--seed" => o.seed = Some(value(&mut args, &flag)?),
      "--layers" => o.layers = Some(value(&mut args, &flag)?),
      "--radius" => o.radius = Some((value(&mut args, &flag)?, value(&mut args, &flag)?)),
      "--wobble" => o.wobble = Some((value(&mut args, &flag)?, value(&mut args, &flag)?)),
      "--spikes" => o.spikes = Some(value(&mut args, &flag)?),
      "--dpi" => o.dpi = Some(value(&mut args, &flag)?),
      "--font" => o.font = Some(value(&mut args, &flag)?),
      "--output" => o.output = Some(value(&mut args, &flag)?),
      "--config" => cli.config = Some(value(&mut args, &flag)?),
      "--open" => cli.open = true,
      "--help" | "-h" => return Ok(None),
      other => bail!("unknown argument '{}'\n\n{}", other, USAGE)
    }
  }
  Ok(Some(cli))
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = match parse_args(std::env::args().skip(1))? {
    Some(cli) => cli,
    None => {
      println!("{}", USAGE);
      return Ok(());
    }
  };

  let config = match &cli.config {
    Some(path) => PosterConfig::load(path)?.merge(cli.overrides),
    None => cli.overrides
  };
  let params = config.render_parameters();
  params.validate()?;
  let options = config.render_options();
  options.canvas_side()?;

  let fonts = match &config.font {
    Some(path) => Some(FontSet::from_path(path)?),
    None => FontSet::discover()
  };

  let poster = poster::generate(&params)?;
  let png = drawing::render_png(&poster, &options, fonts.as_ref())?;

  let output = config.output.unwrap_or_else(|| PathBuf::from(drawing::DOWNLOAD_FILE_NAME));
  std::fs::write(&output, &png)
    .with_context(|| format!("writing {}", output.display()))?;
  log::info!("wrote {} ({})", output.display(), util::file_size(png.len()));

  if cli.open {
    open::that(&output)?;
  }
  Ok(())
}
