use image::ImageReader;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image.png>", args[0]);
        std::process::exit(2);
    }

    let image = ImageReader::open(&args[1])?.decode()?.to_luma8();
    let bench = pixelops::benchmark::run(&image);
    let report = bench.report();

    println!(
        "{}x{} image, {}x{} kernel",
        report.width, report.height, report.kernel_size, report.kernel_size
    );
    println!("spatial:   {:.4} s", report.spatial_secs);
    println!("frequency: {:.4} s", report.frequency_secs);
    Ok(())
}
