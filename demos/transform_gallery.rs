use std::env;
use std::path::Path;

use imageops_geometry::{Image, Resize, Rotate, Translate};

type Gray = Image<image::Luma<u8>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <input_image> <output_dir>", args[0]);
        eprintln!("Example: {} lena.png out/", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_dir = Path::new(&args[2]);
    std::fs::create_dir_all(output_dir)?;

    // Every kernel works on single-channel 8-bit data
    let image = image::open(input_path)?.to_luma8();
    println!(
        "Processing {}: {}x{} grayscale",
        input_path,
        image.width(),
        image.height()
    );

    let results: Vec<(&str, Gray)> = vec![
        ("forward_300", image.resize_forward((300, 300))?),
        ("forward_600", image.resize_forward((600, 600))?),
        ("nearest_600", image.resize_nearest((600, 600))?),
        ("bilinear_600", image.resize_bilinear((600, 600))?),
        ("translate_30_80", image.translate((30, 80))),
        ("translate_-80_-50", image.translate((-80, -50))),
        ("rotate_20_origin", image.rotate(20.0)?),
        ("rotate_20_center", image.rotate_about_center(20.0)?),
    ];

    for (name, result) in &results {
        let path = output_dir.join(format!("{name}.png"));
        result.save(&path)?;
        println!("{}x{} -> {}", result.width(), result.height(), path.display());
    }

    Ok(())
}
