use transforms::{intensity_diagnostic, load_input, save_outputs, transform, DemoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DemoConfig::default();
    let work_dir = std::env::current_dir()?;

    // read the image
    let image = load_input(&config, &work_dir)?;
    println!(
        "Shape of the given image is: {} {}",
        image.height(),
        image.width()
    );

    let outputs = transform(&image, &config)?;
    if let Some(message) = intensity_diagnostic(outputs.intensity_status) {
        println!("{message}");
    }

    save_outputs(&outputs, &config, &work_dir)?;

    Ok(())
}
