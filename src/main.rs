use snapsign::config::{self, Config};
use snapsign::domain::editing::PanOffset;
use snapsign::domain::media::EncodedImage;
use snapsign::domain::ui::{Point, PointerEvent};
use snapsign::error::{Error, Result};
use snapsign::media::{ExportFormat, SurfaceSize};
use snapsign::ui::image_editor::ImageTransformEditor;
use snapsign::ui::signing_wizard::SigningWizard;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  snapsign edit <input> --output <file> [--zoom <f>] [--rotate <deg>]
                [--pan-x <f>] [--pan-y <f>] [--brightness <pct>]
                [--contrast <pct>] [--width <px>] [--height <px>]
  snapsign sign --photo <file> --stroke \"x,y;x,y;...\" [--stroke ...]
                --agree --out-dir <dir> [--text <agreement>]";

const DEFAULT_AGREEMENT: &str = "I confirm the information above and agree to the terms.";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let result = match args.subcommand() {
        Ok(Some(cmd)) if cmd == "edit" => edit(args),
        Ok(Some(cmd)) if cmd == "sign" => sign(args),
        Ok(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
        Err(err) => Err(usage_error(&err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &pico_args::Error) -> Error {
    Error::Config(format!("{err}\n{USAGE}"))
}

fn load_config() -> Config {
    config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        Config::default()
    })
}

fn read_image(path: &Path) -> Result<EncodedImage> {
    Ok(EncodedImage::from_bytes(std::fs::read(path)?))
}

fn format_for(path: &Path, config: &Config) -> ExportFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ExportFormat::from_extension)
        .unwrap_or_else(|| config.export_format())
}

fn edit(mut args: pico_args::Arguments) -> Result<()> {
    let output: PathBuf = args
        .value_from_str("--output")
        .map_err(|e| usage_error(&e))?;
    let zoom: Option<f32> = args.opt_value_from_str("--zoom").map_err(|e| usage_error(&e))?;
    let rotate: Option<f32> = args
        .opt_value_from_str("--rotate")
        .map_err(|e| usage_error(&e))?;
    let pan_x: Option<f32> = args
        .opt_value_from_str("--pan-x")
        .map_err(|e| usage_error(&e))?;
    let pan_y: Option<f32> = args
        .opt_value_from_str("--pan-y")
        .map_err(|e| usage_error(&e))?;
    let brightness: Option<i32> = args
        .opt_value_from_str("--brightness")
        .map_err(|e| usage_error(&e))?;
    let contrast: Option<i32> = args
        .opt_value_from_str("--contrast")
        .map_err(|e| usage_error(&e))?;
    let width: Option<u32> = args
        .opt_value_from_str("--width")
        .map_err(|e| usage_error(&e))?;
    let height: Option<u32> = args
        .opt_value_from_str("--height")
        .map_err(|e| usage_error(&e))?;
    let input: PathBuf = args.free_from_str().map_err(|e| usage_error(&e))?;

    let config = load_config();
    let mut editor = ImageTransformEditor::from_config(&config)?
        .with_export_format(format_for(&output, &config));

    editor.open(&read_image(&input)?)?;
    if width.is_some() || height.is_some() {
        let current = editor.surface().size();
        editor.resize(SurfaceSize::new(
            width.unwrap_or(current.width),
            height.unwrap_or(current.height),
        ));
    }
    if let Some(zoom) = zoom {
        editor.set_zoom(zoom);
    }
    if let Some(degrees) = rotate {
        editor.set_rotation(degrees);
    }
    if pan_x.is_some() || pan_y.is_some() {
        editor.set_pan(PanOffset::new(pan_x.unwrap_or(0.0), pan_y.unwrap_or(0.0)));
    }
    if let Some(percent) = brightness {
        editor.set_brightness(percent);
    }
    if let Some(percent) = contrast {
        editor.set_contrast(percent);
    }

    let image = editor
        .confirm()?
        .ok_or_else(|| Error::Encode("editor produced no image".to_string()))?;
    std::fs::write(&output, image.bytes())?;
    tracing::info!(output = %output.display(), bytes = image.len(), "edited image written");
    Ok(())
}

/// Parses `"x,y;x,y;..."` into points.
fn parse_stroke(spec: &str) -> Option<Vec<Point>> {
    spec.split(';')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

fn sign(mut args: pico_args::Arguments) -> Result<()> {
    let photo_path: PathBuf = args
        .value_from_str("--photo")
        .map_err(|e| usage_error(&e))?;
    let out_dir: PathBuf = args
        .value_from_str("--out-dir")
        .map_err(|e| usage_error(&e))?;
    let text: Option<String> = args.opt_value_from_str("--text").map_err(|e| usage_error(&e))?;
    let agreed = args.contains("--agree");
    let strokes: Vec<String> = args
        .values_from_str("--stroke")
        .map_err(|e| usage_error(&e))?;

    let config = load_config();
    let mut wizard =
        SigningWizard::from_config(&config, text.as_deref().unwrap_or(DEFAULT_AGREEMENT))?;

    wizard.accept_photo(read_image(&photo_path)?);

    for spec in &strokes {
        let points = parse_stroke(spec)
            .ok_or_else(|| Error::Config(format!("invalid stroke '{spec}'")))?;
        let mut points = points.into_iter();
        if let Some(first) = points.next() {
            wizard.pointer(PointerEvent::Pressed(first));
        }
        for point in points {
            wizard.pointer(PointerEvent::Moved(point));
        }
        wizard.pointer(PointerEvent::Released);
    }

    if !wizard.advance() {
        return Err(Error::Config("a signature stroke is required".to_string()));
    }
    println!("{}", wizard.agreement_text());
    wizard.set_agreed(agreed);

    let Some(artifact) = wizard.confirm()? else {
        return Err(Error::Config(
            "the agreement must be acknowledged with --agree".to_string(),
        ));
    };

    std::fs::create_dir_all(&out_dir)?;
    // the photo is stored as supplied, the signature in the configured format
    let photo_ext = photo_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("img");
    let ext = config.export_format().extension();
    std::fs::write(
        out_dir.join(format!("photo.{photo_ext}")),
        artifact.photo().bytes(),
    )?;
    std::fs::write(
        out_dir.join(format!("signature.{ext}")),
        artifact.signature().bytes(),
    )?;
    println!("signed_at: {}", artifact.signed_at().to_rfc3339());
    println!("fingerprint: {}", artifact.fingerprint());
    tracing::info!(out_dir = %out_dir.display(), "signing artifact written");
    Ok(())
}
